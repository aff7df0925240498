//! Session core
//!
//! This module provides:
//! - The session store, single source of truth for "am I logged in, with
//!   what token, remembered how"
//! - The single-flight refresh gate
//! - The authenticator that attaches credentials and recovers from a
//!   single authorization failure

mod authenticator;
mod gate;
mod memory;
mod store;

pub use authenticator::{Authenticator, SessionEvent};
pub use gate::{RefreshGate, RefreshPermit};
pub use memory::MemoryTokenStorage;
pub use store::SessionStore;
