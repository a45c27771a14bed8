#![deny(missing_docs)]
//! Session configuration for an I2P router remote control client.

/// The config module contains the configuration for the client.
pub mod config;
/// The consts module contains constant values.
pub mod consts;
/// The net module contains networking types.
pub mod net;
