//! Wire models for the back-office resources.
//!
//! These mirror the JSON shapes the server emits. The client never derives
//! business facts from them; it renders and forwards.

pub mod attendance;
pub mod class;
pub mod dashboard;
pub mod enrollment;
pub mod guardian;
pub mod payment;
pub mod registration;
pub mod student;

pub use attendance::{
    AttendanceEntry, AttendanceHistorySession, AttendanceRoster, AttendanceStatus,
    AttendanceSummary, DebtSummaryItem, RosterStudent, RosterTeacher, SessionAttendanceRecord,
    SessionInfo, StoreAttendancePayload, StudentAttendanceSummary, TodaySession,
};
pub use class::{ClassDetail, ClassListRow, TeacherOption, UpsertClass};
pub use dashboard::{
    DashboardStats, ScheduledSession, SessionCourse, SessionInstructor, WeeklyInstructorHours,
};
pub use enrollment::{
    CreateEnrollment, Enrollment, EnrollmentClass, EnrollmentStatus, EnrollmentStudent,
    UpdateDiscount,
};
pub use guardian::{GuardianDetail, GuardianListRow, GuardianStudentLink};
pub use payment::{DueClass, DueStatus, MonthlyDue, OutstandingDue, PaymentSummary, RegistrationStatus};
pub use registration::{
    CreateRegistration, RegistrationCreated, RegistrationGuardian, RegistrationListItem,
    RegistrationStudent,
};
pub use student::{
    Address, ContactPreference, CreateMembership, CreateStudent, GuardianIntake, Interest, Level,
    MembershipHistoryItem, StudentConsents, StudentDetail, StudentGuardian, StudentHistory,
    StudentListRow, UpdateStudent,
};
