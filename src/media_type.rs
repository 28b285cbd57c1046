//! Media type values: parsing, validation and formatting.
//!
//! Implements the RFC 6838 structure `type "/" [tree "."] subtype ["+" suffix] *(";" parameter)`
//! restricted to the registries listed in [`grammar`](crate::grammar).

use crate::error::{Error, Result};
use crate::grammar::{is_valid_sub_type, is_valid_suffix, is_valid_tree, is_valid_type};
use crate::parameter::Parameter;
use crate::probe::{self, Probe};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// A validated media type.
///
/// Values are immutable once built. Use [`MediaType::new`] for already
/// decomposed parts and [`MediaType::from_mime`] for raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    type_: String,
    sub_type: String,
    tree: Option<String>,
    suffix: Option<String>,
    parameters: Vec<Parameter>,
}

impl MediaType {
    /// Builds a media type from its parts.
    ///
    /// Anything convertible into a [`Parameter`] is accepted, including
    /// `(name, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the type or subtype is invalid,
    /// if the subtype carries an unknown suffix or tree, or if two
    /// parameters share a name.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokio_mediatype::MediaType;
    ///
    /// let mt = MediaType::new("text", "plain", [("charset", "utf-8")]).unwrap();
    /// assert_eq!(mt.to_string(), "text/plain; charset=utf-8");
    /// ```
    pub fn new<P>(
        type_: impl Into<String>,
        sub_type: impl Into<String>,
        parameters: impl IntoIterator<Item = P>,
    ) -> Result<Self>
    where
        P: Into<Parameter>,
    {
        Self::build(type_.into(), sub_type.into(), parameters, Error::InvalidArgument)
    }

    /// Builds a media type without parameters.
    pub fn simple(type_: impl Into<String>, sub_type: impl Into<String>) -> Result<Self> {
        Self::new(type_, sub_type, std::iter::empty::<Parameter>())
    }

    /// Parses a raw media type string such as a Content-Type header value.
    ///
    /// The type and subtype are lowercased. Parameter names keep their case;
    /// one layer of double quotes around a value is removed, and a value left
    /// empty is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an empty string or a repeated
    /// parameter name, and [`Error::InvalidMediaType`] when the text is not a
    /// valid media type.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokio_mediatype::MediaType;
    ///
    /// let mt = MediaType::from_mime("application/calendar+json; charset=\"utf-8\"").unwrap();
    /// assert_eq!(mt.type_(), "application");
    /// assert_eq!(mt.sub_type(), "calendar+json");
    /// assert_eq!(mt.suffix(), Some("json"));
    /// assert_eq!(mt.parameter("charset").and_then(|p| p.value()), Some("utf-8"));
    /// ```
    pub fn from_mime(raw: &str) -> Result<Self> {
        parse_mime(raw).map_err(|err| {
            debug!(input = raw, error = %err, "rejected media type");
            err
        })
    }

    /// Determines the media type of a file using the host's content probes.
    ///
    /// Returns `Ok(None)` when no probe could determine a type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMediaType`] if the path does not exist or the
    /// probed type cannot be parsed, and [`Error::Io`] if the existence check
    /// itself fails (for example, permission denied on a parent directory).
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Option<Self>> {
        Self::from_file_with(path, probe::host()).await
    }

    /// Same as [`MediaType::from_file`] with a caller-supplied probe.
    pub async fn from_file_with<P>(path: impl AsRef<Path>, probe: &P) -> Result<Option<Self>>
    where
        P: Probe + ?Sized,
    {
        let path = path.as_ref();

        if !tokio::fs::try_exists(path).await? {
            return Err(Error::InvalidMediaType(format!(
                "File not found ({}).",
                path.display()
            )));
        }

        match probe.probe(path).await? {
            Some(raw) if !raw.is_empty() => Self::from_mime(&raw).map(Some),
            _ => {
                debug!(path = %path.display(), "no media type determined");
                Ok(None)
            }
        }
    }

    /// Validates the parts and assembles the value.
    ///
    /// `invalid` labels type, subtype, suffix and tree failures; duplicate
    /// parameter names are always an [`Error::InvalidArgument`].
    fn build<P>(
        type_: String,
        sub_type: String,
        parameters: impl IntoIterator<Item = P>,
        invalid: fn(String) -> Error,
    ) -> Result<Self>
    where
        P: Into<Parameter>,
    {
        if !is_valid_type(&type_) {
            return Err(invalid(format!("Type is not valid ({}).", type_)));
        }

        if !is_valid_sub_type(&sub_type) {
            return Err(invalid(format!("Sub type is not valid ({}).", sub_type)));
        }

        // Suffix and tree are both taken from the full subtype.
        let suffix = match sub_type.split_once('+') {
            Some((_, candidate)) => {
                let suffix = candidate.trim().to_ascii_lowercase();
                if !is_valid_suffix(&suffix) {
                    return Err(invalid(format!("Suffix is not valid ({}).", suffix)));
                }
                Some(suffix)
            }
            None => None,
        };

        let tree = match sub_type.split_once('.') {
            Some((candidate, _)) => {
                let tree = candidate.trim().to_ascii_lowercase();
                if !is_valid_tree(&tree) {
                    return Err(invalid(format!("Tree is not valid ({}).", tree)));
                }
                Some(tree)
            }
            None => None,
        };

        let mut params: Vec<Parameter> = Vec::new();
        for param in parameters {
            let param = param.into();
            if params.iter().any(|p| p.name() == param.name()) {
                return Err(Error::InvalidArgument(format!(
                    "Duplicate parameter name ({}).",
                    param.name()
                )));
            }
            params.push(param);
        }

        Ok(Self {
            type_,
            sub_type,
            tree,
            suffix,
            parameters: params,
        })
    }

    /// Returns the top-level type, e.g. `text`.
    pub fn type_(&self) -> &str {
        &self.type_
    }

    /// Returns the full subtype including any tree and suffix, e.g. `vnd.api+json`.
    pub fn sub_type(&self) -> &str {
        &self.sub_type
    }

    /// Returns the registration tree (`vnd`, `prs` or `x`), if any.
    pub fn tree(&self) -> Option<&str> {
        self.tree.as_deref()
    }

    /// Returns the structured syntax suffix, if any.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Returns the parameter with exactly this name.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    /// Returns all parameters in insertion order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Returns `type/subtype` without parameters.
    pub fn essence(&self) -> String {
        format!("{}/{}", self.type_, self.sub_type)
    }

    /// Reports whether the type or subtype uses the `x-` experimental prefix.
    pub fn is_experimental(&self) -> bool {
        self.type_.starts_with("x-") || self.sub_type.starts_with("x-")
    }

    /// Reports whether the subtype lives in the unregistered `x.` tree.
    ///
    /// `application/x-www-form-urlencoded` is always treated as registered.
    pub fn is_unregistered(&self) -> bool {
        if self.type_ == "application" && self.sub_type == "x-www-form-urlencoded" {
            return false;
        }
        self.tree.as_deref() == Some("x")
    }

    /// Reports whether the subtype lives in the vendor `vnd.` tree.
    pub fn is_vendor(&self) -> bool {
        self.tree.as_deref() == Some("vnd")
    }

    /// Reports whether the subtype lives in the personal `prs.` tree.
    pub fn is_personal(&self) -> bool {
        self.tree.as_deref() == Some("prs")
    }
}

fn parse_mime(raw: &str) -> Result<MediaType> {
    if raw.is_empty() {
        return Err(Error::InvalidArgument("mime type must not be empty.".to_string()));
    }

    let (major, rest) = match raw.split_once('/') {
        Some((major, rest)) => (major, rest),
        None => (raw, ""),
    };

    let type_ = major.trim().to_ascii_lowercase();
    if type_.is_empty() {
        return Err(Error::InvalidMediaType("mime type has no type.".to_string()));
    }
    if !is_valid_type(&type_) {
        return Err(Error::InvalidMediaType(format!("Type is not valid ({}).", type_)));
    }

    if rest.is_empty() {
        return Err(Error::InvalidMediaType("There is no subtype.".to_string()));
    }

    let mut pieces = rest.split(';');
    let sub_type = pieces.next().unwrap_or_default().trim().to_ascii_lowercase();
    if !is_valid_sub_type(&sub_type) {
        return Err(Error::InvalidMediaType(format!(
            "Sub type is not valid ({}).",
            sub_type
        )));
    }

    let parameters: Vec<Parameter> = pieces.filter_map(parse_parameter).collect();

    MediaType::build(type_, sub_type, parameters, Error::InvalidMediaType)
}

/// Parses one `name=value` piece. Pieces without a name yield `None`.
fn parse_parameter(piece: &str) -> Option<Parameter> {
    let (name, value) = match piece.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (piece, None),
    };

    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let value = value
        .map(str::trim)
        .map(|v| {
            v.strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(v)
        })
        .filter(|v| !v.is_empty());

    Some(Parameter::new(name, value))
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_mime(s)
    }
}

/// Renders as `type/subtype` followed by `; name=value` for each parameter.
impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.type_, self.sub_type)?;
        for param in &self.parameters {
            write!(f, "; {}", param)?;
        }
        Ok(())
    }
}
