//! Session and credential types

mod types;

pub use types::{
    AuthPayload, Credential, LoginRequest, Persistence, RegisterRequest, Session, TokenPayload,
    UserIdentity,
};
