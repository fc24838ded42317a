use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image library error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("PNG encoding error: {message}")]
    EncodingError { message: String },

    #[error("Invalid PNG data: {message}")]
    InvalidPngError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Encoding,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl IconError {
    pub fn encoding(message: impl Into<String>) -> Self {
        IconError::EncodingError {
            message: message.into(),
        }
    }

    pub fn invalid_png(message: impl Into<String>) -> Self {
        IconError::InvalidPngError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            IconError::IoError(_) => ErrorCategory::Io,
            IconError::ImageError(_)
            | IconError::EncodingError { .. }
            | IconError::InvalidPngError { .. } => ErrorCategory::Encoding,
            IconError::ConfigValidationError { .. }
            | IconError::InvalidConfigValueError { .. }
            | IconError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 編碼失敗時仍會寫出備用圖示
            ErrorCategory::Encoding => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            IconError::IoError(_) => {
                "Check that the output directory exists and is writable"
            }
            IconError::ImageError(_) => "Try the encoded renderer with --renderer encoded",
            IconError::EncodingError { .. } | IconError::InvalidPngError { .. } => {
                "Re-run with --verbose to see which icon size failed"
            }
            IconError::ConfigValidationError { .. } => {
                "Make sure the config file exists and is valid TOML"
            }
            IconError::InvalidConfigValueError { .. } => {
                "Icon sizes must be unique values between 1 and 1024"
            }
            IconError::MissingConfigError { .. } => "Add the missing field to the config file",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not write icon files: {}", self),
            ErrorCategory::Encoding => format!("Could not encode icon: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, IconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_category() {
        let io = IconError::from(std::io::Error::other("disk full"));
        assert_eq!(io.category(), ErrorCategory::Io);
        assert_eq!(io.severity(), ErrorSeverity::Critical);

        let enc = IconError::encoding("bad buffer");
        assert_eq!(enc.category(), ErrorCategory::Encoding);
        assert_eq!(enc.severity(), ErrorSeverity::Medium);

        let cfg = IconError::MissingConfigError {
            field: "output.sizes".to_string(),
        };
        assert_eq!(cfg.severity(), ErrorSeverity::High);
        assert!(cfg.user_friendly_message().contains("output.sizes"));
    }
}
