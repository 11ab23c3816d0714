//! Pre-flight reachability probe.
//!
//! One plain GET per candidate URL before the headless browser is
//! launched: the browser is expensive to start and does not reliably
//! surface unreachable pages through its exit status, so dead URLs are
//! caught here instead.

use std::fmt;
use std::time::Duration;

use crate::config::ProbeConfig;

/// Why a probe failed. `Curl` covers transport problems (DNS, connect,
/// timeout); `Http` is a non-2xx final status after redirects.
#[derive(Debug)]
pub enum ProbeError {
    Curl(curl::Error),
    Http(u32),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Curl(e) => write!(f, "{}", e),
            ProbeError::Http(code) => write!(f, "HTTP {}", code),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::Curl(e) => Some(e),
            ProbeError::Http(_) => None,
        }
    }
}

/// Performs the GET and discards the body. Follows redirects; the final
/// response status decides success.
pub fn check(url: &str, cfg: &ProbeConfig) -> Result<(), ProbeError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(ProbeError::Curl)?;
    easy.get(true).map_err(ProbeError::Curl)?;
    easy.follow_location(true).map_err(ProbeError::Curl)?;
    easy.useragent(&cfg.user_agent).map_err(ProbeError::Curl)?;
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .map_err(ProbeError::Curl)?;
    easy.timeout(Duration::from_secs(cfg.timeout_secs))
        .map_err(ProbeError::Curl)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| Ok(data.len()))
            .map_err(ProbeError::Curl)?;
        transfer.perform().map_err(ProbeError::Curl)?;
    }

    let code = easy.response_code().map_err(ProbeError::Curl)?;
    if !(200..300).contains(&code) {
        return Err(ProbeError::Http(code));
    }
    Ok(())
}
