//! Sequential batch orchestration.
//!
//! Extracts URLs, dedupes them against the ledger, then probes and renders
//! one URL at a time in input order. Per-URL failures are collected in the
//! run stats and never abort the batch; only input-level and ledger-level
//! problems do.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::ProbeConfig;
use crate::extract;
use crate::filename;
use crate::ledger::{now_timestamp, Ledger, LedgerEntry, LEDGER_FILE_NAME};
use crate::probe;
use crate::render::{self, RenderError, RenderOptions};
use crate::report::RunStats;

/// Options for one batch run, assembled by the CLI from config and flags.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Probe each URL with a plain GET before launching the browser.
    pub probe: bool,
    pub probe_cfg: ProbeConfig,
    pub render: RenderOptions,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            probe: true,
            probe_cfg: ProbeConfig::default(),
            render: RenderOptions::default(),
        }
    }
}

/// Runs the whole pipeline for `input`, writing PDFs and the ledger under
/// `outdir` via the browser binary at `browser`.
pub fn run_batch(
    input: &Path,
    outdir: &Path,
    browser: &Path,
    opts: &BatchOptions,
) -> Result<RunStats> {
    println!("Grepping all urls from {}", input.display());
    let urls = extract::extract_urls_from_path(input)?;

    let mut stats = RunStats::default();
    if urls.is_empty() {
        // An empty scan has no side effects: no outdir, no ledger file.
        println!("No urls found.");
        return Ok(stats);
    }
    println!("Found {} urls.", urls.len());

    std::fs::create_dir_all(outdir)
        .with_context(|| format!("create output directory: {}", outdir.display()))?;

    let ledger_path = outdir.join(LEDGER_FILE_NAME);
    let mut ledger = Ledger::load(&ledger_path)?;
    tracing::debug!(entries = ledger.len(), "loaded ledger");

    for url in urls {
        // Entries recorded earlier in this same run count as hits too, so
        // duplicate matches in one input convert exactly once.
        if ledger.contains(&url) {
            tracing::debug!(url = %url, "cache hit");
            stats.cached.push(url);
            continue;
        }

        let fname = filename::derive_pdf_filename(&url);
        let output = outdir.join(&fname);

        if opts.probe {
            if let Err(e) = probe::check(&url, &opts.probe_cfg) {
                tracing::warn!(url = %url, error = %e, "probe failed");
                stats.failed.push((url, RenderError::Probe(e)));
                continue;
            }
        }

        println!("Downloading and converting: {}", url);
        match render::print_to_pdf(browser, &url, &output, &opts.render) {
            Ok(()) => {
                ledger.record(
                    &url,
                    LedgerEntry {
                        filename: fname,
                        timestamp: now_timestamp(),
                    },
                );
                // Persist after every success so a crash never costs more
                // than the in-flight URL.
                ledger.persist(&ledger_path)?;
                stats.downloaded.push(url);
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "conversion failed");
                stats.failed.push((url, e));
            }
        }
    }

    Ok(stats)
}
