use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown release channel: {0}")]
    UnknownChannel(String),

    #[error("could not determine home directory")]
    NoHomeDirectory,
}

pub type Result<T> = std::result::Result<T, Error>;
