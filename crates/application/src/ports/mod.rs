//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer, or by a scripted double in tests.

mod http;
mod storage;

pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
pub use storage::{StorageError, StoredTokens, TokenStorage};
