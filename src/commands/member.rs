//! Member management command.
//!
//! A new member is always created together with their first plan payment,
//! matching the front-desk workflow: collect the member's details, the plan
//! and the amount in one form, validate everything, then write the member
//! row and the payment row. Updates are full-replace: every field is
//! prompted again, prefilled with the current values.

use crate::db::db::Db;
use crate::db::members::{Members, NewMember};
use crate::db::payments::{NewPayment, Payments};
use crate::db::plans::Plans;
use crate::libs::error::GymError;
use crate::libs::validation;
use crate::libs::{messages::Message, view::View};
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct MemberArgs {
    #[command(subcommand)]
    command: Option<MemberCommand>,
}

#[derive(Debug, Subcommand)]
enum MemberCommand {
    /// List all members with their membership plans
    List,
    /// Add a new member and record the first payment
    Add,
    /// Update an existing member
    Edit {
        /// Member ID to update
        id: Option<i64>,
    },
    /// Delete a member
    Delete {
        /// Member ID to delete
        id: Option<i64>,
    },
}

pub fn cmd(args: MemberArgs) -> Result<()> {
    let db = Db::open()?;
    match args.command {
        Some(MemberCommand::List) => handle_list(&db),
        Some(MemberCommand::Add) => handle_add(&db),
        Some(MemberCommand::Edit { id }) => handle_edit(&db, id),
        Some(MemberCommand::Delete { id }) => handle_delete(&db, id),
        None => handle_interactive(&db),
    }
}

pub(crate) fn handle_interactive(db: &Db) -> Result<()> {
    let options = vec!["Display all members", "Add new member", "Update member", "Delete member"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectMemberAction.to_string())
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
    let members = Members::new(db).get_all_with_plan()?;

    if members.is_empty() {
        msg_info!(Message::NoMembersFound);
        return Ok(());
    }

    msg_print!(Message::MembersHeader, true);
    View::members(&members);
    Ok(())
}

pub(crate) fn handle_add(db: &Db) -> Result<()> {
    let members = Members::new(db);
    let plans = Plans::new(db);

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptMemberName.to_string())
        .validate_with(|input: &String| text_rule(input, "name"))
        .interact_text()?;

    let email: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptMemberEmail.to_string())
        .validate_with(|input: &String| text_rule(input, "email"))
        .interact_text()?;

    if members.email_exists(&email)? {
        msg_error!(GymError::DuplicateKey(email));
        return Ok(());
    }

    let phone: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptMemberPhone.to_string())
        .validate_with(|input: &String| integer_rule(input, "phone number"))
        .interact_text()?;

    let address: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptMemberAddress.to_string())
        .validate_with(|input: &String| text_rule(input, "address"))
        .interact_text()?;

    let age_raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptMemberAge.to_string())
        .validate_with(|input: &String| age_rule(input))
        .interact_text()?;
    let age = validation::parse_integer(&age_raw, "age")?;

    let (start_date, end_date) = match prompt_membership_dates(None, None)? {
        Some(dates) => dates,
        None => return Ok(()),
    };

    let plan_id = crate::commands::prompt_id(Message::PromptPlanId)?;
    if !plans.exists(plan_id)? {
        let ids = plans.all_ids()?.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ");
        msg_error!(Message::ValidPlanIds(ids));
        return Ok(());
    }

    let amount_raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptAmountPaid.to_string())
        .validate_with(|input: &String| decimal_rule(input, "payment"))
        .interact_text()?;
    let amount = validation::parse_decimal(&amount_raw, "payment")?;

    let payment_date: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPaymentDate.to_string())
        .validate_with(|input: &String| date_rule(input, "payment date"))
        .interact_text()?;

    let member = NewMember {
        name,
        email,
        phone,
        address,
        age,
        start_date,
        end_date,
    };
    let member_id = members.create(&member)?;
    msg_success!(Message::MemberCreated(member_id));

    let payment = NewPayment {
        member_id,
        plan_id,
        amount,
        date: payment_date.trim().to_string(),
    };
    match Payments::new(db).create(&payment) {
        Ok(_) => msg_success!(Message::PaymentRecorded(member_id)),
        Err(e) => {
            msg_error!(Message::PaymentFailedAfterMember(member_id));
            msg_error!(e);
        }
    }

    Ok(())
}

pub(crate) fn handle_edit(db: &Db, id: Option<i64>) -> Result<()> {
    let members = Members::new(db);

    let id = match id {
        Some(id) => id,
        None => crate::commands::prompt_id(Message::PromptMemberId)?,
    };

    let current = match members.get_by_id(id)? {
        Some(member) => member,
        None => {
            msg_error!(Message::MemberNotFound(id));
            return Ok(());
        }
    };

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptMemberName.to_string())
        .default(current.name.clone())
        .validate_with(|input: &String| text_rule(input, "name"))
        .interact_text()?;

    let email: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptMemberEmail.to_string())
        .default(current.email.clone())
        .validate_with(|input: &String| text_rule(input, "email"))
        .interact_text()?;

    if members.email_taken_by_other(&email, id)? {
        msg_error!(GymError::DuplicateKey(email));
        return Ok(());
    }

    let phone: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptMemberPhone.to_string())
        .default(current.phone.clone())
        .validate_with(|input: &String| integer_rule(input, "phone number"))
        .interact_text()?;

    let address: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptMemberAddress.to_string())
        .default(current.address.clone())
        .validate_with(|input: &String| text_rule(input, "address"))
        .interact_text()?;

    let age_raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptMemberAge.to_string())
        .default(current.age.to_string())
        .validate_with(|input: &String| age_rule(input))
        .interact_text()?;
    let age = validation::parse_integer(&age_raw, "age")?;

    let (start_date, end_date) = match prompt_membership_dates(Some(current.start_date), Some(current.end_date))? {
        Some(dates) => dates,
        None => return Ok(()),
    };

    let member = NewMember {
        name,
        email,
        phone,
        address,
        age,
        start_date,
        end_date,
    };
    if members.update(id, &member)? {
        msg_success!(Message::MemberUpdated(id));
    } else {
        msg_error!(Message::MemberNotFound(id));
    }

    Ok(())
}

pub(crate) fn handle_delete(db: &Db, id: Option<i64>) -> Result<()> {
    let members = Members::new(db);

    let id = match id {
        Some(id) => id,
        None => crate::commands::prompt_id(Message::PromptMemberId)?,
    };

    if !members.exists(id)? {
        msg_error!(Message::MemberNotFound(id));
        return Ok(());
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteMember(id).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        if members.delete(id)? {
            msg_success!(Message::MemberDeleted(id));
        } else {
            msg_error!(Message::MemberNotFound(id));
        }
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

/// Prompts for both membership dates and enforces their ordering.
///
/// Returns `None` when the ordering rule fails, so the caller aborts
/// without touching the store.
fn prompt_membership_dates(start_default: Option<String>, end_default: Option<String>) -> Result<Option<(String, String)>> {
    let theme = ColorfulTheme::default();

    let mut start_prompt = Input::with_theme(&theme)
        .with_prompt(Message::PromptStartDate.to_string())
        .validate_with(|input: &String| date_rule(input, "start date"));
    if let Some(default) = start_default {
        start_prompt = start_prompt.default(default);
    }
    let start_raw: String = start_prompt.interact_text()?;

    let mut end_prompt = Input::with_theme(&theme)
        .with_prompt(Message::PromptEndDate.to_string())
        .validate_with(|input: &String| date_rule(input, "end date"));
    if let Some(default) = end_default {
        end_prompt = end_prompt.default(default);
    }
    let end_raw: String = end_prompt.interact_text()?;

    let start = validation::parse_date(&start_raw, "start date")?;
    let end = validation::parse_date(&end_raw, "end date")?;
    if let Err(e) = validation::validate_membership_dates(start, end) {
        msg_error!(e);
        return Ok(None);
    }

    Ok(Some((start.to_string(), end.to_string())))
}

fn text_rule(input: &str, field: &'static str) -> Result<(), String> {
    validation::parse_text(input, field).map(|_| ()).map_err(|e| e.to_string())
}

fn integer_rule(input: &str, field: &'static str) -> Result<(), String> {
    validation::parse_integer(input, field).map(|_| ()).map_err(|e| e.to_string())
}

fn decimal_rule(input: &str, field: &'static str) -> Result<(), String> {
    validation::parse_decimal(input, field).map(|_| ()).map_err(|e| e.to_string())
}

fn date_rule(input: &str, field: &'static str) -> Result<(), String> {
    validation::parse_date(input, field).map(|_| ()).map_err(|e| e.to_string())
}

fn age_rule(input: &str) -> Result<(), String> {
    let age = validation::parse_integer(input, "age").map_err(|e| e.to_string())?;
    validation::validate_age(age).map_err(|e| e.to_string())
}
