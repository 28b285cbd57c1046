//! Validated media type parsing with async file probing.
//!
//! This crate provides:
//! - Media type parsing and formatting (RFC 6838, RFC 2045)
//! - Validation of types, subtypes, registration trees and structured syntax suffixes
//! - Media type detection for files through host content probes
//! - Media type lookup by file extension
//!
//! File probing is async-first using tokio.
//!
//! # Examples
//!
//! ```
//! use tokio_mediatype::MediaType;
//!
//! let mt = MediaType::from_mime("application/vnd.api+json; charset=utf-8").unwrap();
//! assert_eq!(mt.tree(), Some("vnd"));
//! assert_eq!(mt.suffix(), Some("json"));
//! assert!(mt.is_vendor());
//! assert_eq!(mt.to_string(), "application/vnd.api+json; charset=utf-8");
//! ```

pub mod error;
pub mod extension;
pub mod grammar;
pub mod media_type;
pub mod parameter;
pub mod probe;

mod platform;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extension::ExtensionTable;
pub use grammar::{is_valid_sub_type, is_valid_suffix, is_valid_tree, is_valid_type};
pub use media_type::MediaType;
pub use parameter::Parameter;
pub use probe::{CommandProbe, Probe, ProbeChain};
