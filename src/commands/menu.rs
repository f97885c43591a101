//! Interactive menu shell.
//!
//! Mirrors the three-level menu flow of the desk workstation: a connection
//! prompt that loops until a valid store name is entered (or the operator
//! gives up), a main menu, and one submenu per entity. Every action funnels
//! into the same handlers the direct subcommands use, and "Logout and exit"
//! closes the connection before the process ends.

use super::{class, equipment, member};
use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

/// What a submenu asks the shell to do next.
enum MenuFlow {
    Continue,
    Logout,
}

/// Runs one menu action. A failed action is reported and control returns
/// to the menu with the connection still usable.
fn run_action(result: Result<()>) {
    if let Err(e) = result {
        msg_error!(Message::OperationFailed(e.to_string()));
    }
}

pub fn cmd() -> Result<()> {
    let Some(db) = connect()? else {
        msg_print!(Message::ExitingProgram);
        return Ok(());
    };

    loop {
        let options = vec!["Members menu", "Classes menu", "Equipment menu", "Logout and exit"];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectMenuAction.to_string())
            .items(&options)
            .default(0)
            .interact()?;

        let flow = match selection {
            0 => members_menu(&db)?,
            1 => classes_menu(&db)?,
            2 => equipment_menu(&db)?,
            _ => MenuFlow::Logout,
        };

        if let MenuFlow::Logout = flow {
            break;
        }
    }

    db.close()?;
    msg_print!(Message::Goodbye);
    Ok(())
}

/// Prompts for the store name until it validates or the operator cancels.
fn connect() -> Result<Option<Db>> {
    loop {
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStoreName.to_string())
            .allow_empty(true)
            .interact_text()?;

        match Db::open_named(&name) {
            Ok(db) => {
                msg_success!(Message::StoreConnected(name.trim().to_string()));
                return Ok(Some(db));
            }
            Err(e) => {
                msg_error!(e);
                let retry = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptRetryConnect.to_string())
                    .default(true)
                    .interact()?;
                if !retry {
                    return Ok(None);
                }
            }
        }
    }
}

fn members_menu(db: &Db) -> Result<MenuFlow> {
    loop {
        let options = vec![
            "Display all members",
            "Add new member",
            "Update member",
            "Delete member",
            "Return to main menu",
            "Logout and exit",
        ];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectMemberAction.to_string())
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => run_action(member::handle_list(db)),
            1 => run_action(member::handle_add(db)),
            2 => run_action(member::handle_edit(db, None)),
            3 => run_action(member::handle_delete(db, None)),
            4 => return Ok(MenuFlow::Continue),
            _ => return Ok(MenuFlow::Logout),
        }
    }
}

fn classes_menu(db: &Db) -> Result<MenuFlow> {
    loop {
        let options = vec![
            "Display all classes",
            "Add new class",
            "Update class",
            "Delete class",
            "List classes with attendance",
            "Find members by class",
            "Return to main menu",
            "Logout and exit",
        ];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectClassAction.to_string())
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => run_action(class::handle_list(db)),
            1 => run_action(class::handle_add(db)),
            2 => run_action(class::handle_edit(db, None)),
            3 => run_action(class::handle_delete(db, None)),
            4 => run_action(class::handle_attendance(db)),
            5 => run_action(class::handle_members(db, None)),
            6 => return Ok(MenuFlow::Continue),
            _ => return Ok(MenuFlow::Logout),
        }
    }
}

fn equipment_menu(db: &Db) -> Result<MenuFlow> {
    loop {
        let options = vec![
            "Display all equipment",
            "Add new equipment",
            "Update equipment",
            "Delete equipment",
            "Return to main menu",
            "Logout and exit",
        ];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectEquipmentAction.to_string())
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => run_action(equipment::handle_list(db)),
            1 => run_action(equipment::handle_add(db)),
            2 => run_action(equipment::handle_edit(db, None)),
            3 => run_action(equipment::handle_delete(db, None)),
            4 => return Ok(MenuFlow::Continue),
            _ => return Ok(MenuFlow::Logout),
        }
    }
}
