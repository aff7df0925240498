//! Atelier Domain - Core types for the back-office client
//!
//! This crate defines the wire and session types consumed by the rest of
//! the client. All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod envelope;
pub mod error;
pub mod models;

pub use auth::{
    AuthPayload, Credential, LoginRequest, Persistence, RegisterRequest, Session, TokenPayload,
    UserIdentity,
};
pub use envelope::{Envelope, EnvelopeStatus, FailureBody, Page, PageMeta, PaginatedEnvelope};
pub use error::{DomainError, DomainResult};
