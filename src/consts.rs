#![deny(missing_docs)]

/// The default host of the router's control endpoint.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// The default port of the router's control endpoint.
pub const DEFAULT_PORT: u16 = 7650;

/// Where the client configuration is read from.
pub const CONFIG_PATH: &str = "config/client.toml";

/// Where the log4rs configuration is read from.
pub const LOGGING_CONFIG_PATH: &str = "logging_config.yaml";
