//! Unix extension databases.
//!
//! Loads from:
//! - FreeDesktop Shared MIME-info Database (globs2 format)
//! - Traditional mime.types files

use crate::extension::ExtensionTable;
use tracing::debug;

/// Paths to FreeDesktop Shared MIME-info Database globs2 files.
const MIME_GLOBS: &[&str] = &[
    "/usr/local/share/mime/globs2",
    "/usr/share/mime/globs2",
];

/// Common locations for mime.types files on Unix.
const TYPE_FILES: &[&str] = &[
    "/etc/mime.types",
    "/etc/apache2/mime.types",
    "/etc/apache/mime.types",
    "/etc/httpd/conf/mime.types",
];

pub(super) fn load_unix(table: &mut ExtensionTable) {
    // globs2 is preferred; the first readable one wins
    for filename in MIME_GLOBS {
        match table.load_globs2_file(filename) {
            Ok(added) => {
                debug!(file = filename, added, "loaded globs2 database");
                return;
            }
            Err(err) => debug!(file = filename, error = %err, "globs2 database unavailable"),
        }
    }

    for filename in TYPE_FILES {
        match table.load_mime_types_file(filename) {
            Ok(added) => debug!(file = filename, added, "loaded mime.types"),
            Err(err) => debug!(file = filename, error = %err, "mime.types unavailable"),
        }
    }
}
