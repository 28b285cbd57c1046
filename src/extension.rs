//! Media type lookup by file extension.
//!
//! An [`ExtensionTable`] maps lowercase extensions (without the leading dot)
//! to raw media type strings. The strings are only parsed when a
//! [`MediaType`] is requested.
//!
//! [`ExtensionTable::system`] returns the built-in table augmented with the
//! host's database. On Unix that is the FreeDesktop shared MIME-info database
//! or a `mime.types` file; on Windows it is the registry.

use crate::error::{Error, Result};
use crate::media_type::MediaType;
use crate::probe::Probe;
use futures::future::BoxFuture;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// Built-in mappings (lowercase extensions).
static BUILTIN_TYPES: &[(&str, &str)] = &[
    ("avif", "image/avif"),
    ("css", "text/css; charset=utf-8"),
    ("gif", "image/gif"),
    ("htm", "text/html; charset=utf-8"),
    ("html", "text/html; charset=utf-8"),
    ("jpe", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("js", "text/javascript; charset=utf-8"),
    ("json", "application/json"),
    ("mjs", "text/javascript; charset=utf-8"),
    ("pdf", "application/pdf"),
    ("png", "image/png"),
    ("svg", "image/svg+xml"),
    ("tex", "application/x-tex"),
    ("txt", "text/plain"),
    ("wasm", "application/wasm"),
    ("webp", "image/webp"),
    ("xml", "text/xml; charset=utf-8"),
];

static SYSTEM: Lazy<ExtensionTable> = Lazy::new(|| {
    let mut table = ExtensionTable::builtin();
    crate::platform::load_system(&mut table);
    debug!(entries = table.len(), "loaded system extension table");
    table
});

/// A mapping from file extensions to raw media type strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionTable {
    types: HashMap<String, String>,
}

fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}

impl ExtensionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding the built-in mappings.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_TYPES.iter().copied())
    }

    /// Creates a table from `(extension, media type)` pairs.
    ///
    /// Later pairs replace earlier ones with the same extension.
    pub fn from_entries<E, M>(entries: impl IntoIterator<Item = (E, M)>) -> Self
    where
        E: AsRef<str>,
        M: Into<String>,
    {
        let mut table = Self::new();
        for (ext, mime) in entries {
            table.add_mapping(ext.as_ref(), mime);
        }
        table
    }

    /// Returns the process-wide table: built-in mappings plus the host database.
    ///
    /// The host database is read once, on first use. Built-in mappings win
    /// over host entries.
    pub fn system() -> &'static ExtensionTable {
        &SYSTEM
    }

    /// Maps `ext` to `mime`, replacing any previous mapping.
    ///
    /// The extension is matched case-insensitively; a leading dot is ignored.
    pub fn add_mapping(&mut self, ext: &str, mime: impl Into<String>) {
        self.types.insert(normalize_extension(ext), mime.into());
    }

    /// Adds a mapping read from a host database.
    ///
    /// Existing mappings are kept and unparseable media types are dropped.
    /// Returns whether the mapping was added.
    pub(crate) fn add_discovered(&mut self, ext: &str, mime: &str) -> bool {
        let ext = normalize_extension(ext);
        if ext.is_empty() || self.types.contains_key(&ext) {
            return false;
        }
        if let Err(err) = MediaType::from_mime(mime) {
            trace!(extension = %ext, mime, error = %err, "skipping database entry");
            return false;
        }
        self.types.insert(ext, mime.to_string());
        true
    }

    /// Returns the raw media type string mapped to `ext`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokio_mediatype::ExtensionTable;
    ///
    /// let table = ExtensionTable::builtin();
    /// assert_eq!(table.lookup("PNG"), Some("image/png"));
    /// assert_eq!(table.lookup(".png"), Some("image/png"));
    /// assert_eq!(table.lookup("unknown"), None);
    /// ```
    pub fn lookup(&self, ext: &str) -> Option<&str> {
        self.types.get(&normalize_extension(ext)).map(String::as_str)
    }

    /// Returns the media type for a file path, judged by its extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the path has no extension or the
    /// extension is unknown, and the errors of [`MediaType::from_mime`] if the
    /// mapped string is not a valid media type.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokio_mediatype::ExtensionTable;
    ///
    /// let mt = ExtensionTable::builtin().media_type("sample.pdf").unwrap();
    /// assert_eq!(mt.type_(), "application");
    /// assert_eq!(mt.sub_type(), "pdf");
    /// ```
    pub fn media_type(&self, path: impl AsRef<Path>) -> Result<MediaType> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "The extension can not be found in the specified file path ({}).",
                path.display()
            ))
        })?;

        let mime = self.lookup(ext).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "A media type corresponding to the extension could not be found ({}).",
                ext.to_lowercase()
            ))
        })?;

        MediaType::from_mime(mime)
    }

    /// Returns the extensions mapped to exactly `mime`, sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokio_mediatype::ExtensionTable;
    ///
    /// let exts = ExtensionTable::builtin().matches_extension("image/jpeg");
    /// assert_eq!(exts, ["jpe", "jpeg", "jpg"]);
    /// ```
    pub fn matches_extension(&self, mime: &str) -> Vec<String> {
        let mut exts: Vec<String> = self
            .types
            .iter()
            .filter(|(_, m)| m.as_str() == mime)
            .map(|(ext, _)| ext.clone())
            .collect();
        exts.sort();
        exts
    }

    /// Returns the number of mapped extensions.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Reports whether the table has no mappings.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Reads a FreeDesktop `globs2` file into the table.
    ///
    /// Format: `weight:mimetype:glob[:morefields...]`, e.g. `50:text/plain:*.txt`.
    /// Only simple `*.ext` globs are used. Returns the number of added mappings.
    ///
    /// See <https://specifications.freedesktop.org/shared-mime-info-spec/shared-mime-info-spec-0.21.html>
    pub fn read_globs2<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut added = 0;

        for line in reader.lines() {
            let line = line?;
            let fields: Vec<&str> = line.split(':').collect();

            if fields.len() < 3 || fields[0].is_empty() || fields[2].len() < 3 {
                continue;
            }
            if fields[0].starts_with('#') {
                continue;
            }

            let extension = match fields[2].strip_prefix("*.") {
                Some(ext) => ext,
                None => continue,
            };
            if extension.contains(&['?', '*', '['][..]) {
                continue;
            }

            if self.add_discovered(extension, fields[1]) {
                added += 1;
            }
        }

        Ok(added)
    }

    /// Reads a `mime.types` file into the table.
    ///
    /// Format: `mimetype ext1 ext2 ...`, e.g. `text/plain txt text`.
    /// Returns the number of added mappings.
    pub fn read_mime_types<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut added = 0;

        for line in reader.lines() {
            let line = line?;
            let fields: Vec<&str> = line.split_whitespace().collect();

            if fields.len() <= 1 || fields[0].starts_with('#') {
                continue;
            }

            let mime = fields[0];
            for ext in &fields[1..] {
                if ext.starts_with('#') {
                    break;
                }
                if self.add_discovered(ext, mime) {
                    added += 1;
                }
            }
        }

        Ok(added)
    }

    /// Opens and reads a `globs2` file. See [`ExtensionTable::read_globs2`].
    pub fn load_globs2_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let file = File::open(path)?;
        self.read_globs2(BufReader::new(file))
    }

    /// Opens and reads a `mime.types` file. See [`ExtensionTable::read_mime_types`].
    pub fn load_mime_types_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let file = File::open(path)?;
        self.read_mime_types(BufReader::new(file))
    }
}

/// Probes by extension only; the file's content is never read.
impl Probe for ExtensionTable {
    fn probe<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, Result<Option<String>>> {
        let found = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|ext| self.lookup(ext))
            .map(str::to_string);
        Box::pin(async move { Ok(found) })
    }
}
