//! Shared utilities for the Hedera SDK.

pub mod logging;

pub use logging::{init_logging, LogFormat};
