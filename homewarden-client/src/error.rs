use thiserror::Error;

pub type ClientResult<T, E = ClientError> = Result<T, E>;

/// Errors raised by the API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status; carries the HTTP status
    /// and the server-provided message.
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("decode error: {0}")]
    Decode(String),
}

impl ClientError {
    /// HTTP status of an API error, when that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_expose_status_and_message() {
        let err = ClientError::Api {
            status: 404,
            message: "Appliance not found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "server returned 404: Appliance not found");
    }

    #[test]
    fn non_api_errors_have_no_status() {
        let err = ClientError::Decode("bad json".to_string());
        assert_eq!(err.status(), None);
    }
}
