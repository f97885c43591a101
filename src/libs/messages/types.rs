#[derive(Debug, Clone)]
pub enum Message {
    // === STORE MESSAGES ===
    PromptStoreName,
    StoreConnected(String),
    StoreCreated(String),
    StoreAlreadyExists(String),
    PromptRetryConnect,
    ExitingProgram,

    // === MEMBER MESSAGES ===
    MembersHeader,
    NoMembersFound,
    MemberCreated(i64),
    MemberUpdated(i64),
    MemberDeleted(i64),
    MemberNotFound(i64),
    ConfirmDeleteMember(i64),
    PaymentRecorded(i64),
    PaymentFailedAfterMember(i64),
    ValidPlanIds(String),

    // === CLASS MESSAGES ===
    ClassesHeader,
    NoClassesFound,
    ClassCreated(i64),
    ClassUpdated(i64),
    ClassDeleted(i64),
    ClassNotFound(i64),
    ConfirmDeleteClass(i64),
    ClassHasMembers(i64),
    MoveTargetMissing(i64),
    MembersMoved(usize, i64),
    NoMembersMoved,
    AttendanceHeader,
    NoAttendanceData,
    MembersInClassHeader(i64),
    NoMembersInClass(i64),

    // === EQUIPMENT MESSAGES ===
    EquipmentHeader,
    NoEquipmentFound,
    EquipmentCreated(i64),
    EquipmentUpdated(i64),
    EquipmentDeleted(i64),
    EquipmentNotFound(i64),
    ConfirmDeleteEquipment(i64),
    NoEquipmentOfType(String),

    // === REPORT MESSAGES ===
    ReportHeader(String),
    NoReportRows,
    MissingTaskArgument(u8, &'static str),
    NoPaymentsFound,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    NoExportData,

    // === PROMPT MESSAGES ===
    PromptMemberId,
    PromptMemberName,
    PromptMemberEmail,
    PromptMemberPhone,
    PromptMemberAddress,
    PromptMemberAge,
    PromptStartDate,
    PromptEndDate,
    PromptPlanId,
    PromptAmountPaid,
    PromptPaymentDate,
    PromptClassId,
    PromptClassName,
    PromptClassType,
    PromptClassDuration,
    PromptClassCapacity,
    PromptInstructorId,
    PromptGymId,
    PromptMoveTarget,
    PromptEquipmentId,
    PromptEquipmentName,
    PromptEquipmentType,
    PromptEquipmentQuantity,
    SelectMenuAction,
    SelectMemberAction,
    SelectClassAction,
    SelectEquipmentAction,

    // === COMMON MESSAGES ===
    OperationCancelled,
    OperationFailed(String),
    Goodbye,
}
