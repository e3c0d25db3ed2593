use std::fmt;

#[derive(Debug)]
pub enum AppError {
    MissingControl(String),
    UnknownOption { control: String, value: String },
    WrongControlKind { control: String, expected: &'static str },
    Json(serde_json::Error),
    FormEncoding(serde_urlencoded::de::Error),
    RoundTrip,
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingControl(id) => write!(f, "Form control not found: #{id}"),
            AppError::UnknownOption { control, value } => {
                write!(f, "'{value}' is not an option of #{control}")
            }
            AppError::WrongControlKind { control, expected } => {
                write!(f, "#{control} is not a {expected} control")
            }
            AppError::Json(e) => write!(f, "JSON error: {e}"),
            AppError::FormEncoding(e) => write!(f, "Form encoding error: {e}"),
            AppError::RoundTrip => write!(f, "Deserialized record differs from the submitted one"),
            AppError::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<serde_urlencoded::de::Error> for AppError {
    fn from(e: serde_urlencoded::de::Error) -> Self {
        AppError::FormEncoding(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
