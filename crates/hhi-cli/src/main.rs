use hhi_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Logging goes to stderr; a failure here is not fatal.
    if let Err(err) = logging::init_logging() {
        eprintln!("header-inspect: logging disabled: {:#}", err);
    }

    if let Err(err) = Cli::run_from_args().await {
        eprintln!("header-inspect error: {:#}", err);
        std::process::exit(1);
    }
}
