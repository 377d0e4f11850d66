mod args;
mod check;
#[cfg(feature = "with-notify")]
mod notify;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Commands};

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// codes de sortie : 0 OK, 2 entrée invalide, 1 fatal (erreur anyhow)
pub(crate) const EXIT_OK: u8 = 0;
pub(crate) const EXIT_INPUT: u8 = 2;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    run(&cli).map(ExitCode::from)
}

fn run(cli: &Cli) -> Result<u8> {
    match &cli.cmd {
        Commands::EmailCheck(args) => check::run(&args.input, &args.check),
        #[cfg(feature = "with-notify")]
        Commands::TelegramSend(args) => notify::run(&args.file, &args.telegram),
        #[cfg(feature = "with-notify")]
        Commands::All(args) => {
            let code = check::run(&args.emails_input, &args.check)?;
            if code != EXIT_OK {
                return Ok(code);
            }
            notify::run(&args.message_file, &args.telegram)
        }
    }
}
