//! Centralized Error Handling Module
//!
//! Every failure in the pipeline carries a unique error code so the single
//! line printed to stderr is easy to grep in scheduler logs.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - CFG_xxx: Configuration loading
//! - NETWORK_xxx / PARSE_xxx / API_xxx: Distance-matrix query
//! - ENV_xxx: Local identity resolution
//! - MAIL_xxx: SMTP delivery

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    /// Taxonomy kind of this error
    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)?;
        if let Some(source) = &self.source {
            write!(f, ": {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Configuration Errors
    // ============================================
    /// Config file could not be read
    ConfigReadFailed,
    /// Config file is not valid JSON of the expected shape
    ConfigInvalid,

    // ============================================
    // Distance-Matrix Errors
    // ============================================
    /// Transport failure (connect, TLS, body read)
    NetworkFailed,
    /// Response body is not the expected JSON shape
    ResponseMalformed,
    /// Top-level status is not OK
    ApiBadStatus,
    /// Row count is not exactly 1
    ApiRowCount,
    /// Element count in the first row is not exactly 1
    ApiElementCount,
    /// Element status is not OK
    ApiElementStatus,

    // ============================================
    // Environment Errors
    // ============================================
    /// Local user name or hostname could not be resolved
    IdentityUnavailable,

    // ============================================
    // Mail Errors
    // ============================================
    /// Recipient address rejected before sending
    MailBadRecipient,
    /// SMTP connection, authentication or delivery failed
    MailSendFailed,
}

/// Error taxonomy kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Network,
    Parse,
    Api,
    Environment,
    Mail,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Config => "ConfigError",
            Self::Network => "NetworkError",
            Self::Parse => "ParseError",
            Self::Api => "APIError",
            Self::Environment => "EnvironmentError",
            Self::Mail => "MailError",
        }
    }
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigReadFailed => "CFG_READ_FAILED",
            Self::ConfigInvalid => "CFG_INVALID",

            Self::NetworkFailed => "NETWORK_FAILED",
            Self::ResponseMalformed => "PARSE_RESPONSE_MALFORMED",
            Self::ApiBadStatus => "API_BAD_STATUS",
            Self::ApiRowCount => "API_ROW_COUNT",
            Self::ApiElementCount => "API_ELEMENT_COUNT",
            Self::ApiElementStatus => "API_ELEMENT_STATUS",

            Self::IdentityUnavailable => "ENV_IDENTITY_UNAVAILABLE",

            Self::MailBadRecipient => "MAIL_BAD_RECIPIENT",
            Self::MailSendFailed => "MAIL_SEND_FAILED",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigReadFailed | Self::ConfigInvalid => ErrorCategory::Config,
            Self::NetworkFailed => ErrorCategory::Network,
            Self::ResponseMalformed => ErrorCategory::Parse,
            Self::ApiBadStatus
            | Self::ApiRowCount
            | Self::ApiElementCount
            | Self::ApiElementStatus => ErrorCategory::Api,
            Self::IdentityUnavailable => ErrorCategory::Environment,
            Self::MailBadRecipient | Self::MailSendFailed => ErrorCategory::Mail,
        }
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Transport failure talking to the distance-matrix API
    pub fn network(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::with_source(ErrorCode::NetworkFailed, "distance matrix request failed", source)
    }

    /// Malformed distance-matrix response
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResponseMalformed, msg)
    }

    /// Bad top-level response status, carried verbatim
    pub fn bad_status(status: &str) -> Self {
        Self::new(ErrorCode::ApiBadStatus, format!("bad response status: {}", status))
    }

    pub fn row_count() -> Self {
        Self::new(ErrorCode::ApiRowCount, "response row count is not 1")
    }

    pub fn element_count() -> Self {
        Self::new(
            ErrorCode::ApiElementCount,
            "response first row element count is not 1",
        )
    }

    /// Bad element status, carried verbatim
    pub fn bad_element_status(status: &str) -> Self {
        Self::new(
            ErrorCode::ApiElementStatus,
            format!("bad response first row first element status: {}", status),
        )
    }

    /// Local identity could not be resolved
    pub fn environment(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::with_source(ErrorCode::IdentityUnavailable, msg, source)
    }

    /// SMTP delivery failed
    pub fn mail(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::with_source(ErrorCode::MailSendFailed, "sending alert mail failed", source)
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

/// Transport errors drop the request URL first: it carries the API key.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::network(err.without_url())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::ResponseMalformed, "JSON parse error", err)
    }
}
