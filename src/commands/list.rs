use super::{open_session, task};
use crate::libs::store::TaskFilter;
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which tasks to show
    #[arg(value_enum, default_value_t = TaskFilter::All)]
    filter: TaskFilter,
}

pub fn cmd(args: ListArgs, file_override: Option<&Path>) -> Result<()> {
    let session = open_session(file_override)?;
    task::view(&session, args.filter);

    Ok(())
}
