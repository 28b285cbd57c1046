//! Media type parameters.

use std::fmt;

/// A single `name=value` attribute of a media type.
///
/// Names are stored as given; the owning [`MediaType`](crate::MediaType)
/// only checks that they are unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: String,
    value: Option<String>,
}

impl Parameter {
    /// Creates a parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokio_mediatype::Parameter;
    ///
    /// let p = Parameter::new("charset", Some("utf-8"));
    /// assert_eq!(p.to_string(), "charset=utf-8");
    ///
    /// let p = Parameter::new("flag", None::<String>);
    /// assert_eq!(p.to_string(), "flag=");
    /// ```
    pub fn new(name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            value: value.map(Into::into),
        }
    }

    /// Returns the parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameter value, if one was given.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Reports whether parsing the rendered `name=value` gives this value back.
    ///
    /// False for an empty value (it reads back as absent), a value with
    /// surrounding whitespace or a `;`, and a value wrapped in double quotes
    /// (one layer is stripped on reading).
    pub fn renders_losslessly(&self) -> bool {
        match self.value.as_deref() {
            None => true,
            Some(v) => {
                let quoted = v.len() >= 2 && v.starts_with('"') && v.ends_with('"');
                !v.is_empty() && v.trim() == v && !quoted && !v.contains(';')
            }
        }
    }
}

/// Renders as `name=value`. An absent value renders exactly like an empty one.
impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value.as_deref().unwrap_or(""))
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Parameter {
    fn from((name, value): (N, V)) -> Self {
        Parameter::new(name, Some(value))
    }
}
