use thiserror::Error;

/// Errors emitted while reading the host configuration file.
#[derive(Debug, Error)]
pub enum HostConfigError {
    /// Filesystem operation failed.
    #[error("host config IO failed")]
    Io(#[from] std::io::Error),
}

/// Errors that stop the standalone host from starting.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("agenda client setup failed")]
    Client(#[from] agenda_client::ClientError),
    #[error("ui runtime failed")]
    Ui(#[from] iced::Error),
}
