//! Numbered report task dispatcher.
//!
//! Runs one of ten canned read-only reports against the store. Tasks 3, 4,
//! 6 and 9 take one additional positional argument (a class ID, an
//! equipment type, an instructor ID and a class type respectively); a
//! missing or malformed argument terminates the process with a diagnostic
//! and a non-zero status.

use crate::db::classes::Classes;
use crate::db::db::Db;
use crate::db::equipment::EquipmentStore;
use crate::db::members::Members;
use crate::db::payments::Payments;
use crate::db::reports::Reports;
use crate::libs::validation::{self, EquipmentKind};
use crate::libs::{messages::Message, view::View};
use crate::{msg_bail_anyhow, msg_info, msg_print};
use anyhow::Result;
use chrono::{Duration, Local};
use clap::Args;

/// How many instructors the ranking report shows.
const TOP_INSTRUCTOR_COUNT: i64 = 3;
/// Attendance window of the recent-visits report, in days.
const RECENT_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Report task number
    #[arg(value_parser = clap::value_parser!(u8).range(1..=10))]
    task: u8,

    /// ID or category filter required by tasks 3, 4, 6 and 9
    filter: Option<String>,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let db = Db::open()?;

    match args.task {
        1 => members_with_plans(&db)?,
        2 => classes_with_attendance(&db)?,
        3 => members_in_class(&db, require_id(&args, "classId")?)?,
        4 => equipment_by_type(&db, &require_filter(&args, "type")?)?,
        5 => average_age(&db)?,
        6 => classes_by_instructor(&db, require_id(&args, "instructorId")?)?,
        7 => top_instructors(&db)?,
        8 => recent_attendees(&db)?,
        9 => attendees_by_type(&db, &require_filter(&args, "classType")?)?,
        10 => payment_history(&db)?,
        task => msg_bail_anyhow!(Message::OperationFailed(format!("Unknown report task {}", task))),
    }

    db.close()?;
    Ok(())
}

fn require_filter(args: &ReportArgs, name: &'static str) -> Result<String> {
    match &args.filter {
        Some(filter) => Ok(filter.clone()),
        None => msg_bail_anyhow!(Message::MissingTaskArgument(args.task, name)),
    }
}

fn require_id(args: &ReportArgs, name: &'static str) -> Result<i64> {
    let raw = require_filter(args, name)?;
    Ok(validation::parse_integer(&raw, name)?)
}

fn members_with_plans(db: &Db) -> Result<()> {
    let members = Members::new(db).get_all_with_plan()?;
    if members.is_empty() {
        msg_info!(Message::NoMembersFound);
        return Ok(());
    }

    msg_print!(Message::ReportHeader("Members and membership plans".to_string()), true);
    View::members(&members);
    Ok(())
}

fn classes_with_attendance(db: &Db) -> Result<()> {
    let classes = Classes::new(db).with_attendance()?;
    if classes.is_empty() {
        msg_info!(Message::NoAttendanceData);
        return Ok(());
    }

    msg_print!(Message::ReportHeader("Classes with attendance".to_string()), true);
    View::class_attendance(&classes);
    Ok(())
}

fn members_in_class(db: &Db, class_id: i64) -> Result<()> {
    let members = Classes::new(db).members_in_class(class_id)?;
    if members.is_empty() {
        msg_info!(Message::NoMembersInClass(class_id));
        return Ok(());
    }

    msg_print!(Message::MembersInClassHeader(class_id), true);
    View::class_members(&members);
    Ok(())
}

fn equipment_by_type(db: &Db, kind: &str) -> Result<()> {
    // The filter must name one of the fixed equipment types.
    let kind: EquipmentKind = kind.parse()?;

    let items = EquipmentStore::new(db).get_by_kind(kind.as_str())?;
    if items.is_empty() {
        msg_info!(Message::NoEquipmentOfType(kind.to_string()));
        return Ok(());
    }

    msg_print!(Message::ReportHeader(format!("Equipment of type {}", kind)), true);
    View::equipment(&items);
    Ok(())
}

fn average_age(db: &Db) -> Result<()> {
    let brackets = Reports::new(db).average_age_by_status(Local::now().date_naive())?;
    if brackets.is_empty() {
        msg_info!(Message::NoReportRows);
        return Ok(());
    }

    msg_print!(Message::ReportHeader("Average member age by membership status".to_string()), true);
    View::age_brackets(&brackets);
    Ok(())
}

fn classes_by_instructor(db: &Db, instructor_id: i64) -> Result<()> {
    let classes = Classes::new(db).get_by_instructor(instructor_id)?;
    if classes.is_empty() {
        msg_info!(Message::NoClassesFound);
        return Ok(());
    }

    msg_print!(Message::ReportHeader(format!("Classes taught by instructor {}", instructor_id)), true);
    View::classes(&classes);
    Ok(())
}

fn top_instructors(db: &Db) -> Result<()> {
    let loads = Reports::new(db).top_instructors(TOP_INSTRUCTOR_COUNT)?;
    if loads.is_empty() {
        msg_info!(Message::NoReportRows);
        return Ok(());
    }

    msg_print!(
        Message::ReportHeader(format!("Top {} instructors by class count", TOP_INSTRUCTOR_COUNT)),
        true
    );
    View::instructor_load(&loads);
    Ok(())
}

fn recent_attendees(db: &Db) -> Result<()> {
    let since = Local::now().date_naive() - Duration::days(RECENT_WINDOW_DAYS);
    let attendees = Reports::new(db).recent_attendees(since)?;
    if attendees.is_empty() {
        msg_info!(Message::NoReportRows);
        return Ok(());
    }

    msg_print!(
        Message::ReportHeader(format!("Members who attended in the last {} days", RECENT_WINDOW_DAYS)),
        true
    );
    View::recent_attendees(&attendees);
    Ok(())
}

fn attendees_by_type(db: &Db, kind: &str) -> Result<()> {
    let attendees = Reports::new(db).attendees_by_class_type(kind)?;
    if attendees.is_empty() {
        msg_info!(Message::NoReportRows);
        return Ok(());
    }

    msg_print!(Message::ReportHeader(format!("Members who attended {} classes", kind)), true);
    View::type_attendees(&attendees);
    Ok(())
}

fn payment_history(db: &Db) -> Result<()> {
    let payments = Payments::new(db).history()?;
    if payments.is_empty() {
        msg_info!(Message::NoPaymentsFound);
        return Ok(());
    }

    msg_print!(Message::ReportHeader("Payment history".to_string()), true);
    View::payments(&payments);
    Ok(())
}
