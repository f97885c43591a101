//! Equipment management command.

use crate::db::db::Db;
use crate::db::equipment::{EquipmentStore, NewEquipment};
use crate::db::gyms::Gyms;
use crate::libs::error::GymError;
use crate::libs::validation::{self, EquipmentKind};
use crate::libs::{messages::Message, view::View};
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct EquipmentArgs {
    #[command(subcommand)]
    command: Option<EquipmentCommand>,
}

#[derive(Debug, Subcommand)]
enum EquipmentCommand {
    /// List all equipment
    List,
    /// Add a new piece of equipment
    Add,
    /// Update an existing piece of equipment
    Edit {
        /// Equipment ID to update
        id: Option<i64>,
    },
    /// Delete a piece of equipment
    Delete {
        /// Equipment ID to delete
        id: Option<i64>,
    },
}

pub fn cmd(args: EquipmentArgs) -> Result<()> {
    let db = Db::open()?;
    match args.command {
        Some(EquipmentCommand::List) => handle_list(&db),
        Some(EquipmentCommand::Add) => handle_add(&db),
        Some(EquipmentCommand::Edit { id }) => handle_edit(&db, id),
        Some(EquipmentCommand::Delete { id }) => handle_delete(&db, id),
        None => handle_interactive(&db),
    }
}

pub(crate) fn handle_interactive(db: &Db) -> Result<()> {
    let options = vec!["Display all equipment", "Add new equipment", "Update equipment", "Delete equipment"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectEquipmentAction.to_string())
        .items(&options)
        .default(0)
        .interact()?;

    match selection {
        0 => handle_list(db),
        1 => handle_add(db),
        2 => handle_edit(db, None),
        3 => handle_delete(db, None),
        _ => Ok(()),
    }
}

pub(crate) fn handle_list(db: &Db) -> Result<()> {
    let items = EquipmentStore::new(db).get_all()?;

    if items.is_empty() {
        msg_info!(Message::NoEquipmentFound);
        return Ok(());
    }

    msg_print!(Message::EquipmentHeader, true);
    View::equipment(&items);
    Ok(())
}

pub(crate) fn handle_add(db: &Db) -> Result<()> {
    let fields = match prompt_equipment_fields(db, None)? {
        Some(fields) => fields,
        None => return Ok(()),
    };

    let id = EquipmentStore::new(db).create(&fields)?;
    msg_success!(Message::EquipmentCreated(id));
    Ok(())
}

pub(crate) fn handle_edit(db: &Db, id: Option<i64>) -> Result<()> {
    let store = EquipmentStore::new(db);

    let id = match id {
        Some(id) => id,
        None => crate::commands::prompt_id(Message::PromptEquipmentId)?,
    };

    let current = match store.get_by_id(id)? {
        Some(item) => item,
        None => {
            msg_error!(Message::EquipmentNotFound(id));
            return Ok(());
        }
    };

    let fields = match prompt_equipment_fields(db, Some(current))? {
        Some(fields) => fields,
        None => return Ok(()),
    };

    if store.update(id, &fields)? {
        msg_success!(Message::EquipmentUpdated(id));
    } else {
        msg_error!(Message::EquipmentNotFound(id));
    }
    Ok(())
}

pub(crate) fn handle_delete(db: &Db, id: Option<i64>) -> Result<()> {
    let store = EquipmentStore::new(db);

    let id = match id {
        Some(id) => id,
        None => crate::commands::prompt_id(Message::PromptEquipmentId)?,
    };

    if !store.exists(id)? {
        msg_error!(Message::EquipmentNotFound(id));
        return Ok(());
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteEquipment(id).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        if store.delete(id)? {
            msg_success!(Message::EquipmentDeleted(id));
        } else {
            msg_error!(Message::EquipmentNotFound(id));
        }
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

/// Collects and validates the full equipment field set.
fn prompt_equipment_fields(db: &Db, current: Option<crate::db::equipment::Equipment>) -> Result<Option<NewEquipment>> {
    let theme = ColorfulTheme::default();

    let mut name_prompt = Input::with_theme(&theme)
        .with_prompt(Message::PromptEquipmentName.to_string())
        .validate_with(|input: &String| {
            validation::parse_text(input, "equipment name").map(|_| ()).map_err(|e| e.to_string())
        });
    if let Some(item) = &current {
        name_prompt = name_prompt.default(item.name.clone());
    }
    let name: String = name_prompt.interact_text()?;

    let kinds = EquipmentKind::ALL.map(|kind| kind.to_string());
    let default_kind = current
        .as_ref()
        .and_then(|item| kinds.iter().position(|kind| kind.eq_ignore_ascii_case(&item.kind)))
        .unwrap_or(0);
    let selection = Select::with_theme(&theme)
        .with_prompt(Message::PromptEquipmentType.to_string())
        .items(&kinds)
        .default(default_kind)
        .interact()?;
    let kind = EquipmentKind::ALL[selection];

    let mut quantity_prompt = Input::with_theme(&theme)
        .with_prompt(Message::PromptEquipmentQuantity.to_string())
        .validate_with(|raw: &String| {
            let value = validation::parse_integer(raw, "quantity").map_err(|e| e.to_string())?;
            validation::validate_positive(value, "quantity").map_err(|e| e.to_string())
        });
    if let Some(item) = &current {
        quantity_prompt = quantity_prompt.default(item.quantity.to_string());
    }
    let quantity_raw: String = quantity_prompt.interact_text()?;
    let quantity = validation::parse_integer(&quantity_raw, "quantity")?;

    let gym_id = crate::commands::prompt_id(Message::PromptGymId)?;
    if !Gyms::new(db).exists(gym_id)? {
        msg_error!(GymError::NotFound { entity: "gym", id: gym_id });
        return Ok(None);
    }

    Ok(Some(NewEquipment {
        name,
        kind: kind.to_string(),
        quantity,
        gym_id,
    }))
}
