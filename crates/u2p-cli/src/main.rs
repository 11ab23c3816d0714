use u2p_core::logging;

mod cli;

fn main() {
    // File logging is best-effort; fall back to stderr rather than abort.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli::run_from_args() {
        eprintln!("u2p error: {:#}", err);
        std::process::exit(1);
    }
}
