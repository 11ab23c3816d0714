//! CLI for the u2p URL-to-PDF snapshot tool.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use u2p_core::batch::{run_batch, BatchOptions};
use u2p_core::config;
use u2p_core::render::RenderOptions;

/// Scan a text file for URLs and snapshot each one to PDF with a headless
/// browser, skipping URLs already recorded in the output directory's cache.
#[derive(Debug, Parser)]
#[command(name = "u2p")]
#[command(about = "u2p: batch URL-to-PDF snapshots via headless Chrome/Chromium", long_about = None)]
pub struct Cli {
    /// Text file to scan for URLs.
    pub input: PathBuf,

    /// Directory for the PDFs and the cache ledger.
    pub outdir: PathBuf,

    /// Path to the Chrome/Chromium binary.
    pub browser: PathBuf,

    /// Skip the pre-flight reachability probe.
    #[arg(long)]
    pub no_probe: bool,

    /// Treat a nonzero browser exit as success (legacy behavior).
    #[arg(long)]
    pub lenient_exit: bool,

    /// Per-URL render deadline in seconds (overrides the config file).
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Builds batch options from the loaded config with CLI flags applied
    /// on top.
    fn batch_options(&self, cfg: &config::U2pConfig) -> BatchOptions {
        let timeout_secs = self.timeout.unwrap_or(cfg.render.timeout_secs);
        BatchOptions {
            probe: !self.no_probe,
            probe_cfg: cfg.probe.clone(),
            render: RenderOptions {
                timeout: Duration::from_secs(timeout_secs),
                lenient_exit: self.lenient_exit,
            },
        }
    }
}

pub fn run_from_args() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap would exit 2 on bad usage; this tool's contract is 1.
            // --help and --version still exit 0.
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let opts = cli.batch_options(&cfg);
    let stats = run_batch(&cli.input, &cli.outdir, &cli.browser, &opts)?;
    print!("{}", stats.summary());

    // Per-URL failures were reported above; they do not affect the exit
    // code.
    Ok(())
}
