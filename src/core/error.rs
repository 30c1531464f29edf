use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Nothing to encode: {0}")]
    EmptyPayload(String),

    #[error("Invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid logo: {0}")]
    Logo(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<qrcode::types::QrError> for AppError {
    fn from(err: qrcode::types::QrError) -> Self {
        AppError::Encoding(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
