//! Conversion failure classification.

use std::fmt;
use std::time::Duration;

use crate::probe::ProbeError;

/// Error from a single URL conversion. Kept as an enum so the run summary
/// can say what actually went wrong (probe vs. launch vs. the browser
/// itself) instead of a flattened message.
#[derive(Debug)]
pub enum RenderError {
    /// The reachability probe failed; the browser was never launched.
    Probe(ProbeError),
    /// The OS could not launch the browser binary (missing, not executable).
    Spawn(std::io::Error),
    /// Waiting on the browser process failed.
    Wait(std::io::Error),
    /// The browser outlived the deadline and was killed.
    Timeout { limit: Duration },
    /// The browser exited with a nonzero status.
    Exit { code: Option<i32> },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Probe(e) => write!(f, "probe: {}", e),
            RenderError::Spawn(e) => write!(f, "launch: {}", e),
            RenderError::Wait(e) => write!(f, "wait: {}", e),
            RenderError::Timeout { limit } => {
                write!(f, "timed out after {}s", limit.as_secs())
            }
            RenderError::Exit { code: Some(code) } => write!(f, "browser exit code {}", code),
            RenderError::Exit { code: None } => write!(f, "browser killed by signal"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Probe(e) => Some(e),
            RenderError::Spawn(e) | RenderError::Wait(e) => Some(e),
            RenderError::Timeout { .. } | RenderError::Exit { .. } => None,
        }
    }
}
