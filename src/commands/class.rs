//! Class management command.
//!
//! Class forms check their two foreign keys (instructor, gym) against the
//! store before any write. Deletion carries the one guarded transition of
//! the data model: a class that still has registered members can only be
//! removed after its members were migrated to another existing class.

use crate::db::classes::{Classes, NewClass};
use crate::db::db::Db;
use crate::db::gyms::Gyms;
use crate::db::instructors::Instructors;
use crate::libs::error::GymError;
use crate::libs::validation::{self, ClassKind};
use crate::libs::{messages::Message, view::View};
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct ClassArgs {
    #[command(subcommand)]
    command: Option<ClassCommand>,
}

#[derive(Debug, Subcommand)]
enum ClassCommand {
    /// List all classes
    List,
    /// Add a new class
    Add,
    /// Update an existing class
    Edit {
        /// Class ID to update
        id: Option<i64>,
    },
    /// Delete a class, migrating attendees first if necessary
    Delete {
        /// Class ID to delete
        id: Option<i64>,
    },
    /// List all classes with their attendance counts
    Attendance,
    /// List the members registered to a class
    Members {
        /// Class ID to look up
        id: Option<i64>,
    },
}

pub fn cmd(args: ClassArgs) -> Result<()> {
    let db = Db::open()?;
    match args.command {
        Some(ClassCommand::List) => handle_list(&db),
        Some(ClassCommand::Add) => handle_add(&db),
        Some(ClassCommand::Edit { id }) => handle_edit(&db, id),
        Some(ClassCommand::Delete { id }) => handle_delete(&db, id),
        Some(ClassCommand::Attendance) => handle_attendance(&db),
        Some(ClassCommand::Members { id }) => handle_members(&db, id),
        None => handle_interactive(&db),
    }
}

pub(crate) fn handle_interactive(db: &Db) -> Result<()> {
    let options = vec![
        "Display all classes",
        "Add new class",
        "Update class",
        "Delete class",
        "List classes with attendance",
        "Find members by class",
    ];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectClassAction.to_string())
        .items(&options)
        .default(0)
        .interact()?;

    match selection {
        0 => handle_list(db),
        1 => handle_add(db),
        2 => handle_edit(db, None),
        3 => handle_delete(db, None),
        4 => handle_attendance(db),
        5 => handle_members(db, None),
        _ => Ok(()),
    }
}

pub(crate) fn handle_list(db: &Db) -> Result<()> {
    let classes = Classes::new(db).get_all()?;

    if classes.is_empty() {
        msg_info!(Message::NoClassesFound);
        return Ok(());
    }

    msg_print!(Message::ClassesHeader, true);
    View::classes(&classes);
    Ok(())
}

pub(crate) fn handle_add(db: &Db) -> Result<()> {
    let fields = match prompt_class_fields(db, None)? {
        Some(fields) => fields,
        None => return Ok(()),
    };

    let id = Classes::new(db).create(&fields)?;
    msg_success!(Message::ClassCreated(id));
    Ok(())
}

pub(crate) fn handle_edit(db: &Db, id: Option<i64>) -> Result<()> {
    let classes = Classes::new(db);

    let id = match id {
        Some(id) => id,
        None => crate::commands::prompt_id(Message::PromptClassId)?,
    };

    let current = match classes.get_by_id(id)? {
        Some(class) => class,
        None => {
            msg_error!(Message::ClassNotFound(id));
            return Ok(());
        }
    };

    let fields = match prompt_class_fields(db, Some(current))? {
        Some(fields) => fields,
        None => return Ok(()),
    };

    if classes.update(id, &fields)? {
        msg_success!(Message::ClassUpdated(id));
    } else {
        msg_error!(Message::ClassNotFound(id));
    }
    Ok(())
}

pub(crate) fn handle_delete(db: &Db, id: Option<i64>) -> Result<()> {
    let classes = Classes::new(db);

    let id = match id {
        Some(id) => id,
        None => crate::commands::prompt_id(Message::PromptClassId)?,
    };

    if !classes.exists(id)? {
        msg_error!(Message::ClassNotFound(id));
        return Ok(());
    }

    if classes.has_members(id)? {
        msg_warning!(Message::ClassHasMembers(id));

        let target = crate::commands::prompt_id(Message::PromptMoveTarget)?;
        if target == id || !classes.exists(target)? {
            msg_error!(Message::MoveTargetMissing(target));
            return Ok(());
        }

        let moved = classes.move_members(id, target)?;
        if moved == 0 {
            msg_error!(Message::NoMembersMoved);
            return Ok(());
        }
        msg_print!(Message::MembersMoved(moved, target));

        if classes.delete(id)? {
            msg_success!(Message::ClassDeleted(id));
        } else {
            msg_error!(Message::ClassNotFound(id));
        }
        return Ok(());
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteClass(id).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        if classes.delete(id)? {
            msg_success!(Message::ClassDeleted(id));
        } else {
            msg_error!(Message::ClassNotFound(id));
        }
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

pub(crate) fn handle_attendance(db: &Db) -> Result<()> {
    let classes = Classes::new(db).with_attendance()?;

    if classes.is_empty() {
        msg_info!(Message::NoAttendanceData);
        return Ok(());
    }

    msg_print!(Message::AttendanceHeader, true);
    View::class_attendance(&classes);
    Ok(())
}

pub(crate) fn handle_members(db: &Db, id: Option<i64>) -> Result<()> {
    let classes = Classes::new(db);

    let id = match id {
        Some(id) => id,
        None => crate::commands::prompt_id(Message::PromptClassId)?,
    };

    if !classes.exists(id)? {
        msg_error!(Message::ClassNotFound(id));
        return Ok(());
    }

    let members = classes.members_in_class(id)?;
    if members.is_empty() {
        msg_info!(Message::NoMembersInClass(id));
        return Ok(());
    }

    msg_print!(Message::MembersInClassHeader(id), true);
    View::class_members(&members);
    Ok(())
}

/// Collects and validates the full class field set.
///
/// Returns `None` when a referential check fails, so the caller aborts
/// without touching the store.
fn prompt_class_fields(db: &Db, current: Option<crate::db::classes::Class>) -> Result<Option<NewClass>> {
    let theme = ColorfulTheme::default();

    let mut name_prompt = Input::with_theme(&theme)
        .with_prompt(Message::PromptClassName.to_string())
        .validate_with(|input: &String| {
            validation::parse_text(input, "class name").map(|_| ()).map_err(|e| e.to_string())
        });
    if let Some(class) = &current {
        name_prompt = name_prompt.default(class.name.clone());
    }
    let name: String = name_prompt.interact_text()?;

    let kinds = ClassKind::ALL.map(|kind| kind.to_string());
    let default_kind = current
        .as_ref()
        .and_then(|class| kinds.iter().position(|kind| kind.eq_ignore_ascii_case(&class.kind)))
        .unwrap_or(0);
    let selection = Select::with_theme(&theme)
        .with_prompt(Message::PromptClassType.to_string())
        .items(&kinds)
        .default(default_kind)
        .interact()?;
    let kind = ClassKind::ALL[selection];

    let duration = prompt_positive(&theme, Message::PromptClassDuration, "duration", current.as_ref().map(|c| c.duration))?;
    let capacity = prompt_positive(
        &theme,
        Message::PromptClassCapacity,
        "class capacity",
        current.as_ref().map(|c| c.capacity),
    )?;

    let instructor_id = crate::commands::prompt_id(Message::PromptInstructorId)?;
    if !Instructors::new(db).exists(instructor_id)? {
        msg_error!(GymError::NotFound {
            entity: "instructor",
            id: instructor_id
        });
        return Ok(None);
    }

    let gym_id = crate::commands::prompt_id(Message::PromptGymId)?;
    if !Gyms::new(db).exists(gym_id)? {
        msg_error!(GymError::NotFound { entity: "gym", id: gym_id });
        return Ok(None);
    }

    Ok(Some(NewClass {
        name,
        kind: kind.to_string(),
        duration,
        capacity,
        instructor_id,
        gym_id,
    }))
}

fn prompt_positive(theme: &ColorfulTheme, prompt: Message, field: &'static str, default: Option<i64>) -> Result<i64> {
    let mut input = Input::with_theme(theme).with_prompt(prompt.to_string()).validate_with(|raw: &String| {
        let value = validation::parse_integer(raw, field).map_err(|e| e.to_string())?;
        validation::validate_positive(value, field).map_err(|e| e.to_string())
    });
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    let raw: String = input.interact_text()?;
    Ok(validation::parse_integer(&raw, field)?)
}
