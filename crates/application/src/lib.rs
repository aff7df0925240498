//! Atelier Application - Session core and typed API services
//!
//! This crate carries the client's only stateful core: the session store
//! and the refresh coordinator that recovers transparently from a single
//! authorization failure. Around it sit the envelope-unwrapping API client
//! and one thin typed service per back-office resource.
//!
//! I/O happens behind the ports in [`ports`]; adapters live in the
//! infrastructure crate.

pub mod client;
pub mod error;
pub mod ports;
pub mod services;
pub mod session;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use services::{
    AttendanceHistoryQuery, AttendanceService, AuthService, ClassEnrollmentsQuery, ClassService,
    CreatedStudent, DashboardService, EnrollmentService, GuardianService, ListQuery,
    PaymentService, RegistrationList, RegistrationService, StudentService, TeacherService,
};
pub use session::{
    Authenticator, MemoryTokenStorage, RefreshGate, RefreshPermit, SessionEvent, SessionStore,
};
