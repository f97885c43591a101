//! Console table rendering for entity listings and reports.

use crate::db::classes::{Class, ClassAttendance, ClassMember};
use crate::db::equipment::Equipment;
use crate::db::members::MemberWithPlan;
use crate::db::payments::PaymentRecord;
use crate::db::reports::{AgeBracket, InstructorLoad, RecentAttendee, TypeAttendee};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn members(members: &[MemberWithPlan]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "EMAIL", "AGE", "PLAN"]);
        for member in members {
            table.add_row(row![member.member_id, member.name, member.email, member.age, member.plan_id]);
        }
        table.printstd();
    }

    pub fn classes(classes: &[Class]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "TYPE", "DURATION", "CAPACITY", "INSTRUCTOR", "GYM"]);
        for class in classes {
            table.add_row(row![
                class.id,
                class.name,
                class.kind,
                class.duration,
                class.capacity,
                class.instructor_id,
                class.gym_id
            ]);
        }
        table.printstd();
    }

    pub fn class_attendance(classes: &[ClassAttendance]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "TYPE", "DURATION", "CAPACITY", "ATTENDEES"]);
        for class in classes {
            table.add_row(row![class.id, class.name, class.kind, class.duration, class.capacity, class.attendees]);
        }
        table.printstd();
    }

    pub fn class_members(members: &[ClassMember]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "EMAIL", "AGE"]);
        for member in members {
            table.add_row(row![member.member_id, member.name, member.email, member.age]);
        }
        table.printstd();
    }

    pub fn equipment(items: &[Equipment]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "TYPE", "QUANTITY", "GYM"]);
        for item in items {
            table.add_row(row![item.id, item.name, item.kind, item.quantity, item.gym_id]);
        }
        table.printstd();
    }

    pub fn payments(payments: &[PaymentRecord]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "MEMBER", "NAME", "PLAN", "AMOUNT", "DATE"]);
        for payment in payments {
            table.add_row(row![
                payment.payment_id,
                payment.member_id,
                payment.member_name,
                payment.plan_id,
                format!("{:.2}", payment.amount),
                payment.date
            ]);
        }
        table.printstd();
    }

    pub fn age_brackets(brackets: &[AgeBracket]) {
        let mut table = Table::new();

        table.add_row(row!["STATUS", "AVERAGE AGE", "MEMBERS"]);
        for bracket in brackets {
            table.add_row(row![bracket.status, format!("{:.1}", bracket.average_age), bracket.members]);
        }
        table.printstd();
    }

    pub fn instructor_load(loads: &[InstructorLoad]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "CLASSES"]);
        for load in loads {
            table.add_row(row![load.instructor_id, load.name, load.classes]);
        }
        table.printstd();
    }

    pub fn type_attendees(attendees: &[TypeAttendee]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "EMAIL", "CLASS", "DATE"]);
        for attendee in attendees {
            table.add_row(row![
                attendee.member_id,
                attendee.name,
                attendee.email,
                attendee.class_name,
                attendee.attendance_date
            ]);
        }
        table.printstd();
    }

    pub fn recent_attendees(attendees: &[RecentAttendee]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "CLASSES", "TYPES", "VISITS"]);
        for attendee in attendees {
            table.add_row(row![
                attendee.member_id,
                attendee.name,
                attendee.class_names,
                attendee.class_types,
                attendee.visits
            ]);
        }
        table.printstd();
    }
}
