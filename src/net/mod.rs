#![deny(missing_docs)]

/// This module contains the remote control session types.
pub mod session;
