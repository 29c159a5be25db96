//! Tracing/logging setup, owned by the host process.
//!
//! Library code never installs a subscriber. Hosts build a [`Dispatch`]
//! here, install it if they want a process-wide default, and hand a clone to
//! each `InventoryStore` they construct.

use ::tracing::Dispatch;

/// Tracing configuration (filters, formats).
pub mod tracing;

/// In-memory log capture for tests.
pub mod capture;

pub use capture::LogBuffer;
pub use self::tracing::{LogConfig, LogFormat, ParseLogFormatError};

/// Build the dispatch for `config` and install it as the global default.
///
/// Safe to call multiple times; only the first call installs a global
/// subscriber. The returned dispatch is usable either way.
pub fn init(config: &LogConfig) -> Dispatch {
    let dispatch = self::tracing::dispatch(config);
    let _ = ::tracing::dispatcher::set_global_default(dispatch.clone());
    dispatch
}
