#![deny(missing_docs)]

use thiserror::Error;

/// This module defines the session configuration.
pub mod config;

#[derive(Debug, Error)]
/// Error type for session addressing.
pub enum SessionError {
    /// If the endpoint could not be resolved.
    #[error("Resolve error: {0}")]
    Resolve(#[from] std::io::Error),

    /// If the endpoint resolved to no addresses.
    #[error("No address found for {0}")]
    NoAddress(String),
}
