use std::fmt;

/// Custom error type for tfws operations
#[derive(Debug)]
pub enum TfwsError {
    /// Token rejected by the server (401/403)
    Auth { status: u16, message: String },
    /// Organization or workspace does not exist (404)
    NotFound { status: u16, message: String },
    /// Server rejected the payload (422)
    Validation { status: u16, message: String },
    /// Any other non-success API response
    Api { status: u16, message: String },
    /// Connectivity, DNS or timeout failure
    Transport(reqwest::Error),
    /// Settings file missing or invalid
    Config(String),
    /// No, conflicting or malformed action requested
    Usage(String),
    /// JSON parsing error
    Json(String),
    /// Local filesystem error
    Io(String),
    /// One or more steps of a workspace reset failed
    Reset(Vec<StepFailure>),
}

/// A failed step of a multi-step operation
#[derive(Debug)]
pub struct StepFailure {
    pub step: String,
    pub error: TfwsError,
}

impl TfwsError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            TfwsError::Usage(_) => 2,
            TfwsError::Config(_) => 3,
            TfwsError::Auth { .. } => 4,
            TfwsError::NotFound { .. } => 5,
            TfwsError::Validation { .. } => 6,
            TfwsError::Transport(_) => 7,
            TfwsError::Api { .. } | TfwsError::Json(_) | TfwsError::Io(_) | TfwsError::Reset(_) => {
                1
            }
        }
    }
}

impl fmt::Display for TfwsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfwsError::Auth { status, message } => {
                write!(f, "Authentication failed (status {}): {}", status, message)
            }
            TfwsError::NotFound { status, message } => {
                write!(f, "Not found (status {}): {}", status, message)
            }
            TfwsError::Validation { status, message } => {
                write!(f, "Validation failed (status {}): {}", status, message)
            }
            TfwsError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            TfwsError::Transport(e) => write!(f, "HTTP request failed: {}", e),
            TfwsError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TfwsError::Usage(msg) => write!(f, "Usage error: {}", msg),
            TfwsError::Json(msg) => write!(f, "JSON error: {}", msg),
            TfwsError::Io(msg) => write!(f, "I/O error: {}", msg),
            TfwsError::Reset(failures) => {
                write!(f, "Workspace reset failed in {} step(s):", failures.len())?;
                for failure in failures {
                    write!(f, "\n  - {}: {}", failure.step, failure.error)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for TfwsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TfwsError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TfwsError {
    fn from(err: reqwest::Error) -> Self {
        TfwsError::Transport(err)
    }
}

impl From<serde_json::Error> for TfwsError {
    fn from(err: serde_json::Error) -> Self {
        TfwsError::Json(err.to_string())
    }
}

impl From<std::io::Error> for TfwsError {
    fn from(err: std::io::Error) -> Self {
        TfwsError::Io(err.to_string())
    }
}

/// Result type alias for tfws operations
pub type Result<T> = std::result::Result<T, TfwsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display_includes_status() {
        let err = TfwsError::Auth {
            status: 401,
            message: "unauthorized".to_string(),
        };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("unauthorized"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = TfwsError::Validation {
            status: 422,
            message: "VCS repo is not configured".to_string(),
        };
        assert!(err.to_string().contains("422"));
        assert!(err.to_string().contains("VCS repo is not configured"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TfwsError>();
    }

    #[test]
    fn test_exit_codes_are_distinct_per_kind() {
        let codes = [
            TfwsError::Usage("x".into()).exit_code(),
            TfwsError::Config("x".into()).exit_code(),
            TfwsError::Auth {
                status: 403,
                message: String::new(),
            }
            .exit_code(),
            TfwsError::NotFound {
                status: 404,
                message: String::new(),
            }
            .exit_code(),
            TfwsError::Validation {
                status: 422,
                message: String::new(),
            }
            .exit_code(),
        ];
        assert_eq!(codes, [2, 3, 4, 5, 6]);
        assert!(codes.iter().all(|c| *c != 0));
    }

    #[test]
    fn test_reset_display_lists_each_step() {
        let err = TfwsError::Reset(vec![
            StepFailure {
                step: "set VCS branch".to_string(),
                error: TfwsError::Validation {
                    status: 422,
                    message: "no VCS connection".to_string(),
                },
            },
            StepFailure {
                step: "set trigger paths".to_string(),
                error: TfwsError::Api {
                    status: 500,
                    message: "boom".to_string(),
                },
            },
        ]);
        let text = err.to_string();
        assert!(text.contains("2 step(s)"));
        assert!(text.contains("set VCS branch"));
        assert!(text.contains("no VCS connection"));
        assert!(text.contains("set trigger paths"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_not_found_display() {
        let err = TfwsError::NotFound {
            status: 404,
            message: "gone".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: TfwsError = json_err.into();
        match err {
            TfwsError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected TfwsError::Json"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TfwsError = io_err.into();
        match err {
            TfwsError::Io(msg) => assert!(msg.contains("file not found")),
            _ => panic!("Expected TfwsError::Io"),
        }
    }
}
