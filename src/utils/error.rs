use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorsFixError {
    #[error("Failed to write instructions: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CorsFixError>;
