//! Content probes.
//!
//! A probe asks something outside this crate (the host's `file` utility, an
//! extension table, ...) for the raw media type string of a file. The string
//! is then handed to [`MediaType::from_mime`](crate::MediaType::from_mime).

mod command;

pub use command::CommandProbe;

use crate::error::Result;
use futures::future::BoxFuture;
use once_cell::sync::Lazy;
use std::path::Path;

/// A source of raw media type strings for files.
///
/// `Ok(None)` means the probe could not tell; it is not an error.
pub trait Probe: Send + Sync {
    /// Returns the raw media type string for `path`, if the probe can determine one.
    fn probe<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, Result<Option<String>>>;
}

/// Runs probes in order and returns the first non-empty answer.
#[derive(Default)]
pub struct ProbeChain {
    probes: Vec<Box<dyn Probe>>,
}

impl ProbeChain {
    /// Creates an empty chain. An empty chain never determines a type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a probe to the end of the chain.
    pub fn with(mut self, probe: impl Probe + 'static) -> Self {
        self.probes.push(Box::new(probe));
        self
    }

    /// Returns the number of probes in the chain.
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    /// Reports whether the chain has no probes.
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }
}

impl Probe for ProbeChain {
    fn probe<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, Result<Option<String>>> {
        Box::pin(async move {
            for probe in &self.probes {
                if let Some(found) = probe.probe(path).await? {
                    if !found.is_empty() {
                        return Ok(Some(found));
                    }
                }
            }
            Ok(None)
        })
    }
}

static HOST: Lazy<ProbeChain> = Lazy::new(|| {
    ProbeChain::new()
        .with(CommandProbe::coarse())
        .with(CommandProbe::detailed())
});

/// Returns the host's default probe: a coarse `file --mime-type` probe,
/// falling back to the detailed `file --mime` probe.
pub fn host() -> &'static ProbeChain {
    &HOST
}
