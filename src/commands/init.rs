//! Store initialization command.
//!
//! `open` assumes the store already exists and fails fast otherwise, so
//! provisioning a fresh store is an explicit, separate step. Refuses to
//! touch an existing store unless `--force` is given.

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Replace an existing store with a fresh empty one
    #[arg(short, long)]
    force: bool,
}

pub fn cmd(args: InitArgs) -> Result<()> {
    let path = Db::store_path()?;

    if path.exists() {
        if !args.force {
            msg_bail_anyhow!(Message::StoreAlreadyExists(path.display().to_string()));
        }
        fs::remove_file(&path)?;
    }

    let db = Db::create()?;
    db.close()?;

    msg_success!(Message::StoreCreated(path.display().to_string()));
    Ok(())
}
