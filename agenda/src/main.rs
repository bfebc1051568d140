use agenda::app::{self, AppBoot};
use agenda::config::{HostConfig, HostConfigStatus, load_host_config};
use agenda::errors::AppError;
use agenda_client::SettingsClient;
use env_logger::Env;

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let (config, status) = match load_host_config() {
        Ok(load) => load.into_parts(),
        Err(err) => {
            log::warn!("host config read failed: {err}");
            (HostConfig::default(), HostConfigStatus::Missing)
        },
    };
    match status {
        HostConfigStatus::Loaded => log::info!("host config loaded"),
        HostConfigStatus::Missing => {
            log::info!("host config not found, using defaults")
        },
        HostConfigStatus::Invalid(message) => {
            log::warn!("host config is invalid, using defaults: {message}")
        },
    }

    let client =
        SettingsClient::new(config.client_config()?, config.header_source())?;
    log::info!("agenda server at {}", config.server_url);

    app::run(AppBoot::new(config, client))?;
    Ok(())
}
