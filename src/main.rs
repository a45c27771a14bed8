use std::process::ExitCode;

use i2p_remote_control::{config, consts::LOGGING_CONFIG_PATH};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging.
    if let Err(why) = log4rs::init_file(LOGGING_CONFIG_PATH, Default::default()) {
        eprintln!("Failed to initialize logging: {:?}", why);
        return ExitCode::FAILURE;
    }

    // Load configuration.
    let config = match config::get_config() {
        Ok(config) => config,
        Err(why) => {
            log::error!("Error loading config: {}", why);
            return ExitCode::FAILURE;
        }
    };

    let session = &config.session;
    log::info!("Session target: {}", session.addr());

    match session.resolve().await {
        Ok(addrs) => {
            for addr in addrs {
                log::info!("Resolved session address: {}", addr);
            }
            ExitCode::SUCCESS
        }
        Err(why) => {
            log::error!("Error resolving session target: {}", why);
            ExitCode::FAILURE
        }
    }
}
