//! Display implementation for gymdesk application messages.
//!
//! Converts structured [`Message`] values into the human-readable text shown
//! on the terminal. All user-facing wording lives here, in one place, so the
//! prompts, confirmations and failure texts stay consistent across the
//! interactive menus and the report dispatcher.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === STORE MESSAGES ===
            Message::PromptStoreName => "Enter store name (e.g., XYZGym.sqlite)".to_string(),
            Message::StoreConnected(name) => format!("Successfully connected to {}", name),
            Message::StoreCreated(path) => format!("Created empty store at {}", path),
            Message::StoreAlreadyExists(path) => format!("A store already exists at {} (use --force to recreate)", path),
            Message::PromptRetryConnect => "Try another store name?".to_string(),
            Message::ExitingProgram => "Exiting program.".to_string(),

            // === MEMBER MESSAGES ===
            Message::MembersHeader => "👥 Members and membership plans".to_string(),
            Message::NoMembersFound => "No members found.".to_string(),
            Message::MemberCreated(id) => format!("Member added successfully with ID {}", id),
            Message::MemberUpdated(id) => format!("Member {} updated successfully", id),
            Message::MemberDeleted(id) => format!("Member {} deleted successfully", id),
            Message::MemberNotFound(id) => format!("No member found with ID {}", id),
            Message::ConfirmDeleteMember(id) => format!("Are you sure you want to delete member {}?", id),
            Message::PaymentRecorded(member_id) => format!("Payment recorded for member {}", member_id),
            Message::PaymentFailedAfterMember(id) => format!("Member {} added but payment failed", id),
            Message::ValidPlanIds(ids) => format!("Please enter a valid membership plan ID. Options: {}", ids),

            // === CLASS MESSAGES ===
            Message::ClassesHeader => "🏋️ Classes".to_string(),
            Message::NoClassesFound => "No classes found.".to_string(),
            Message::ClassCreated(id) => format!("Class added successfully with ID {}", id),
            Message::ClassUpdated(id) => format!("Class {} updated successfully", id),
            Message::ClassDeleted(id) => format!("Class {} deleted successfully", id),
            Message::ClassNotFound(id) => format!("No class found with ID {}", id),
            Message::ConfirmDeleteClass(id) => format!("Are you sure you want to delete class {}?", id),
            Message::ClassHasMembers(id) => format!("Class {} has registered members; they must be moved to another class first", id),
            Message::MoveTargetMissing(id) => format!("No valid class selected to move members to (class {} does not exist)", id),
            Message::MembersMoved(count, id) => format!("Moved {} member(s) to class {}. Deleting class now...", count, id),
            Message::NoMembersMoved => "No members were moved.".to_string(),
            Message::AttendanceHeader => "📋 Classes with attendance".to_string(),
            Message::NoAttendanceData => "No classes or attendance data found.".to_string(),
            Message::MembersInClassHeader(id) => format!("Members in class {}", id),
            Message::NoMembersInClass(id) => format!("No members found for class {}", id),

            // === EQUIPMENT MESSAGES ===
            Message::EquipmentHeader => "🛠 Equipment".to_string(),
            Message::NoEquipmentFound => "No equipment found.".to_string(),
            Message::EquipmentCreated(id) => format!("Equipment added successfully with ID {}", id),
            Message::EquipmentUpdated(id) => format!("Equipment {} updated successfully", id),
            Message::EquipmentDeleted(id) => format!("Equipment {} deleted successfully", id),
            Message::EquipmentNotFound(id) => format!("No equipment found with ID {}", id),
            Message::ConfirmDeleteEquipment(id) => format!("Are you sure you want to delete equipment {}?", id),
            Message::NoEquipmentOfType(kind) => format!("No equipment of type '{}' found.", kind),

            // === REPORT MESSAGES ===
            Message::ReportHeader(title) => format!("📊 {}", title),
            Message::NoReportRows => "The report returned no rows.".to_string(),
            Message::MissingTaskArgument(task, name) => {
                format!("Task {} requires an additional <{}> argument", task, name)
            }
            Message::NoPaymentsFound => "No payments found.".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),
            Message::NoExportData => "There is no data to export.".to_string(),

            // === PROMPT MESSAGES ===
            Message::PromptMemberId => "Member ID".to_string(),
            Message::PromptMemberName => "Name".to_string(),
            Message::PromptMemberEmail => "Email".to_string(),
            Message::PromptMemberPhone => "Phone".to_string(),
            Message::PromptMemberAddress => "Address".to_string(),
            Message::PromptMemberAge => "Age".to_string(),
            Message::PromptStartDate => "Start date (YYYY-MM-DD)".to_string(),
            Message::PromptEndDate => "End date (YYYY-MM-DD)".to_string(),
            Message::PromptPlanId => "Plan ID".to_string(),
            Message::PromptAmountPaid => "Amount paid".to_string(),
            Message::PromptPaymentDate => "Payment date (YYYY-MM-DD)".to_string(),
            Message::PromptClassId => "Class ID".to_string(),
            Message::PromptClassName => "Class name".to_string(),
            Message::PromptClassType => "Class type".to_string(),
            Message::PromptClassDuration => "Duration (in minutes)".to_string(),
            Message::PromptClassCapacity => "Class capacity".to_string(),
            Message::PromptInstructorId => "Instructor ID".to_string(),
            Message::PromptGymId => "Gym ID".to_string(),
            Message::PromptMoveTarget => "Enter a class ID to move members to".to_string(),
            Message::PromptEquipmentId => "Equipment ID".to_string(),
            Message::PromptEquipmentName => "Equipment name".to_string(),
            Message::PromptEquipmentType => "Equipment type".to_string(),
            Message::PromptEquipmentQuantity => "Quantity".to_string(),
            Message::SelectMenuAction => "Gym Management System".to_string(),
            Message::SelectMemberAction => "Members menu".to_string(),
            Message::SelectClassAction => "Classes menu".to_string(),
            Message::SelectEquipmentAction => "Equipment menu".to_string(),

            // === COMMON MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::OperationFailed(reason) => reason.clone(),
            Message::Goodbye => "Logged out. Goodbye!".to_string(),
        };
        write!(f, "{}", text)
    }
}
