use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Unexpected response ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Could not read server response: {message}")]
    Decode { message: String },

    #[error("Configuration error: {field} = {value}")]
    Configuration { field: String, value: String },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Location data error: {message}")]
    LocationData { message: String },

    #[error("Geolocation is not supported by this browser")]
    GeolocationUnsupported,

    #[error("Geolocation request failed: {message}")]
    Geolocation { message: String },
}

pub type FormResult<T> = Result<T, FormError>;

impl FormError {
    /// Message shown inline when an action could not be completed.
    pub fn user_message(&self) -> String {
        match self {
            FormError::Network { .. } => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            FormError::Status { status, .. } if *status >= 500 => {
                "Something went wrong on our side. Please try again.".to_string()
            }
            FormError::Validation { message, .. } => message.clone(),
            _ => "Something went wrong!".to_string(),
        }
    }
}
