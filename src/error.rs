use thiserror::Error;

pub type UiTagResult<T> = Result<T, UiTagError>;

#[derive(Error, Debug, Clone)]
pub enum UiTagError {
    #[error("Invalid aspect ratio '{value}': {reason}")]
    InvalidRatio { value: String, reason: String },

    #[error("Invalid CSS class list for '{key}': '{value}' {reason}")]
    InvalidCssClass {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Settings error: {0}")]
    SettingsError(String),
}

impl From<serde_yaml::Error> for UiTagError {
    fn from(err: serde_yaml::Error) -> Self {
        UiTagError::SettingsError(err.to_string())
    }
}
