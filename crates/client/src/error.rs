use thiserror::Error;

/// Everything that can go wrong between the client and the DanusKu API.
/// The UI boundary collapses all of it to a message string.
#[derive(Debug, Error)]
pub enum ApiError {
    /// fetch threw: DNS, refused connection, timeout.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// `success: false` envelope; the message is the server's, verbatim.
    #[error("{message}")]
    Server { message: String },

    /// Non-2xx response without a parseable envelope.
    #[error("server returned HTTP {code}")]
    Status { code: u16 },

    /// Body was not the expected envelope shape.
    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// `success: true` but the payload was missing.
    #[error("response carried no data")]
    MissingData,

    /// Client-side validation failed; no request was sent.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// The string shown to the user. Transport details are collapsed to a
    /// generic network message; server messages pass through as-is.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(e) if e.is_timeout() => {
                "Server tidak merespons, coba lagi".to_string()
            }
            ApiError::Transport(_) => "Terjadi kesalahan jaringan".to_string(),
            ApiError::Server { message } => message.clone(),
            ApiError::Status { code } => format!("Server bermasalah (HTTP {})", code),
            ApiError::Decode(_) | ApiError::MissingData => {
                "Respon server tidak valid".to_string()
            }
            ApiError::Validation(msg) => msg.clone(),
        }
    }
}
