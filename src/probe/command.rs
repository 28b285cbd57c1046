//! Probing through an external program such as `file(1)`.

use super::Probe;
use crate::error::Result;
use futures::future::BoxFuture;
use std::ffi::OsString;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

/// Name of the libmagic front end used by the built-in probes.
const FILE_PROGRAM: &str = "file";

/// A probe that runs a program and reads the media type from its stdout.
///
/// The path is passed as the last argument. A missing program, a non-zero
/// exit status or empty output all mean "undetermined".
#[derive(Debug, Clone)]
pub struct CommandProbe {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandProbe {
    /// Creates a probe running `program` with `args` followed by the path.
    pub fn new<I, S>(program: impl Into<OsString>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `file --brief --mime-type`: the bare `type/subtype`.
    pub fn coarse() -> Self {
        Self::new(FILE_PROGRAM, ["--brief", "--mime-type"])
    }

    /// `file --brief --mime`: `type/subtype` with a charset parameter.
    pub fn detailed() -> Self {
        Self::new(FILE_PROGRAM, ["--brief", "--mime"])
    }

    async fn run(&self, path: &Path) -> Result<Option<String>> {
        let output = match Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .output()
            .await
        {
            Ok(output) => output,
            Err(err) => {
                debug!(program = ?self.program, error = %err, "probe program unavailable");
                return Ok(None);
            }
        };

        if !output.status.success() {
            debug!(program = ?self.program, status = %output.status, path = %path.display(), "probe failed");
            return Ok(None);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let found = stdout.trim();
        if found.is_empty() {
            return Ok(None);
        }
        Ok(Some(found.to_string()))
    }
}

impl Probe for CommandProbe {
    fn probe<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, Result<Option<String>>> {
        Box::pin(self.run(path))
    }
}
