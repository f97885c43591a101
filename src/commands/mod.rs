//! Command handlers for the gymdesk CLI.
//!
//! One module per subcommand. The entity commands (`member`, `class`,
//! `equipment`) expose their form handlers to the interactive menu shell so
//! both entry points share the exact same validation and repository flow.

pub mod class;
pub mod equipment;
pub mod export;
pub mod init;
pub mod member;
pub mod menu;
pub mod report;

use crate::libs::messages::Message;
use crate::libs::validation;
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create an empty store with the full schema")]
    Init(init::InitArgs),
    #[command(about = "Open the interactive management menus")]
    Menu,
    #[command(about = "Manage members")]
    Member(member::MemberArgs),
    #[command(about = "Manage classes")]
    Class(class::ClassArgs),
    #[command(about = "Manage equipment")]
    Equipment(equipment::EquipmentArgs),
    #[command(about = "Run a numbered report task (1-10)", arg_required_else_help = true)]
    Report(report::ReportArgs),
    #[command(about = "Export a table to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Menu => menu::cmd(),
            Commands::Member(args) => member::cmd(args),
            Commands::Class(args) => class::cmd(args),
            Commands::Equipment(args) => equipment::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Prompts for an entity ID when it was not passed on the command line.
pub(crate) fn prompt_id(prompt: Message) -> Result<i64> {
    let raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .validate_with(|input: &String| validation::parse_integer(input, "ID").map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;
    Ok(validation::parse_integer(&raw, "ID")?)
}
