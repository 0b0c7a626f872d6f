use thiserror::Error;

use super::agenda::AgendaError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Agenda(#[from] AgendaError),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
