use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("couldn't install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
