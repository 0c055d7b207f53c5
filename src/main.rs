use std::process::ExitCode;
use tdl::commands::Cli;
use tdl::libs::messages::macros::is_debug_mode;
use tdl::msg_error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tdl=debug")))
            .with_writer(std::io::stderr)
            .init();
    }

    match Cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
