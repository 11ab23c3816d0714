//! Headless-browser invocation.
//!
//! Shells out to Chrome/Chromium to print one URL to PDF. The argument
//! list is a compatibility contract with the browser: exactly these five
//! arguments, in this order.

mod error;

pub use error::RenderError;

use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

/// Poll interval while waiting for the browser to exit.
const WAIT_POLL: Duration = Duration::from_millis(100);

/// Options for a single render invocation.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Hard deadline for the browser process; on expiry it is killed and
    /// the conversion fails. A hung renderer cannot stall the whole batch.
    pub timeout: Duration,
    /// Legacy success criterion: a nonzero browser exit still counts as
    /// success, as long as the process could be launched at all.
    pub lenient_exit: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(120),
            lenient_exit: false,
        }
    }
}

/// Renders `url` to `output` using the browser binary at `browser`.
pub fn print_to_pdf(
    browser: &Path,
    url: &str,
    output: &Path,
    opts: &RenderOptions,
) -> Result<(), RenderError> {
    let mut child = Command::new(browser)
        .arg("--headless")
        .arg("--run-all-compositor-stages-before-draw")
        .arg("--disable-gpu")
        .arg(format!("--print-to-pdf={}", output.display()))
        .arg(url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(RenderError::Spawn)?;

    match wait_with_deadline(&mut child, opts.timeout)? {
        Some(status) if status.success() || opts.lenient_exit => Ok(()),
        Some(status) => Err(RenderError::Exit {
            code: status.code(),
        }),
        None => Err(RenderError::Timeout {
            limit: opts.timeout,
        }),
    }
}

/// Polls the child until it exits or `timeout` elapses. On timeout the
/// child is killed and reaped, and `None` is returned.
fn wait_with_deadline(
    child: &mut Child,
    timeout: Duration,
) -> Result<Option<ExitStatus>, RenderError> {
    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait().map_err(RenderError::Wait)? {
            Some(status) => return Ok(Some(status)),
            None if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                return Ok(None);
            }
            None => std::thread::sleep(WAIT_POLL),
        }
    }
}
