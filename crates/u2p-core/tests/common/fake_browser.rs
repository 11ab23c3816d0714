//! Fake browser binary for render tests.
//!
//! Installs a shell script that honors the `--print-to-pdf=<path>`
//! argument and appends the rendered URL to `<dir>/invocations.log` on
//! every call, so tests can assert how often the renderer actually ran.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Behavior of the fake browser process.
#[derive(Debug, Clone, Copy)]
pub enum Behavior {
    /// Write the PDF and exit 0.
    Succeed,
    /// Write nothing and exit with the given code.
    Fail(i32),
    /// Sleep before writing, to trip the render deadline.
    Hang { secs: u64 },
}

/// Writes an executable script into `dir` behaving per `behavior` and
/// returns its path.
pub fn install(dir: &Path, behavior: Behavior) -> PathBuf {
    let log = dir.join("invocations.log");
    let (exit_code, sleep_secs) = match behavior {
        Behavior::Succeed => (0, 0),
        Behavior::Fail(code) => (code, 0),
        Behavior::Hang { secs } => (0, secs),
    };
    let body = format!(
        r#"#!/bin/sh
out=""
url=""
for arg in "$@"; do
    case "$arg" in
        --print-to-pdf=*) out="${{arg#--print-to-pdf=}}" ;;
        --*) ;;
        *) url="$arg" ;;
    esac
done
echo "$url" >> "{log}"
if [ "{sleep_secs}" -gt 0 ]; then
    sleep "{sleep_secs}"
fi
if [ "{exit_code}" -eq 0 ] && [ -n "$out" ]; then
    printf '%s' '%PDF-1.4 fake' > "$out"
fi
exit {exit_code}
"#,
        log = log.display(),
        sleep_secs = sleep_secs,
        exit_code = exit_code,
    );

    let path = dir.join("fake-browser.sh");
    std::fs::write(&path, body).expect("write fake browser script");
    let mut perms = std::fs::metadata(&path).expect("stat script").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("chmod script");
    path
}

/// Number of times the fake browser in `dir` was invoked.
pub fn invocation_count(dir: &Path) -> usize {
    match std::fs::read_to_string(dir.join("invocations.log")) {
        Ok(s) => s.lines().count(),
        Err(_) => 0,
    }
}
