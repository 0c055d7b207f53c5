pub mod init;
pub mod list;
pub mod menu;
pub mod task;

use crate::libs::config::Config;
use crate::libs::session::Session;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Print tasks matching a filter")]
    List(list::ListArgs),
}

/// Without a subcommand the interactive menu is started.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Task file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn run() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::Init) => init::cmd(),
            Some(Commands::List(args)) => list::cmd(args, cli.file.as_deref()),
            None => menu::cmd(cli.file.as_deref()),
        }
    }
}

/// Reads the configuration and loads the task file it points to.
pub fn open_session(file_override: Option<&Path>) -> Result<Session> {
    let config = Config::read()?;
    let file = config.task_file(file_override)?;
    Ok(Session::open(file, &config)?)
}
