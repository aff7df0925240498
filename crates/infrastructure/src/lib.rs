//! Atelier Infrastructure - Adapters for the application ports
//!
//! Two adapters live here: a reqwest-backed transport for the HTTP port
//! and a JSON-file token store for the durable storage tier. Everything
//! they implement is defined in `atelier-application`'s `ports` module.

pub mod adapters;
pub mod persistence;

pub use adapters::ReqwestTransport;
pub use persistence::FileTokenStorage;
