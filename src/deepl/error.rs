use thiserror::Error;

/// Errors produced by a single API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be built or never got a response.
    #[error("Failed to reach DeepL API endpoint {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a status outside `200..300`.
    #[error("Invalid response [{code} {reason}]{}", message_suffix(.message.as_deref()))]
    Status {
        code: u16,
        reason: String,
        message: Option<String>,
    },

    /// A success response whose body could not be read or parsed.
    #[error("{0} (occurred while parsing response)")]
    Decode(#[from] DecodeError),

    /// Nothing to translate; raised before any request is sent.
    #[error("Input text is empty")]
    EmptyInput,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{0}")]
    Read(#[source] reqwest::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Status code of a rejected request.
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

fn message_suffix(message: Option<&str>) -> String {
    message.map_or_else(String::new, |m| format!(", {m}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_without_message() {
        let err = ApiError::Status {
            code: 404,
            reason: "Not Found".to_string(),
            message: None,
        };
        assert_eq!(err.to_string(), "Invalid response [404 Not Found]");
        assert_eq!(err.status_code(), Some(404));
        assert!(!err.is_decode());
    }

    #[test]
    fn test_status_error_with_message() {
        let err = ApiError::Status {
            code: 400,
            reason: "Bad Request".to_string(),
            message: Some("Value for 'target_lang' not supported.".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Invalid response [400 Bad Request], Value for 'target_lang' not supported."
        );
    }

    #[test]
    fn test_decode_error_is_annotated() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::from(DecodeError::from(json_err));
        assert!(err.is_decode());
        assert!(err.status_code().is_none());
        assert!(
            err.to_string()
                .ends_with("(occurred while parsing response)")
        );
    }
}
