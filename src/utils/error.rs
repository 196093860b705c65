use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InlineError {
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTML processing error: {message}")]
    HtmlError { message: String },

    #[error("Primary content element <{tag}> not found in root document")]
    MissingPrimaryElement { tag: String },

    #[error("No fetch('...') template reference in module {}", .module.display())]
    MissingTemplateReference { module: PathBuf },

    #[error("No inline extraction region in module {}", .module.display())]
    MissingExtractionRegion { module: PathBuf },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Markup,
    Convention,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl InlineError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            InlineError::FileNotFound { .. } | InlineError::IoError(_) => ErrorCategory::Io,
            InlineError::HtmlError { .. } | InlineError::MissingPrimaryElement { .. } => {
                ErrorCategory::Markup
            }
            InlineError::MissingTemplateReference { .. }
            | InlineError::MissingExtractionRegion { .. } => ErrorCategory::Convention,
            InlineError::ConfigValidationError { .. }
            | InlineError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Convention => ErrorSeverity::Medium,
            ErrorCategory::Markup | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            InlineError::FileNotFound { path } => format!(
                "Check that {} exists and that --root / --js-dir point at the project",
                path.display()
            ),
            InlineError::IoError(_) => "Check file permissions and free disk space".to_string(),
            InlineError::HtmlError { .. } => "Make sure the input files are valid HTML".to_string(),
            InlineError::MissingPrimaryElement { tag } => format!(
                "Add a <{tag}> element to the root document or pass --primary-element"
            ),
            InlineError::MissingTemplateReference { .. } => {
                "Each module must load its template with fetch('path/to/template.html')".to_string()
            }
            InlineError::MissingExtractionRegion { .. } => {
                "Wrap the elementClass definition in '// Inline extraction START' / '// Inline extraction END' comments"
                    .to_string()
            }
            InlineError::ConfigValidationError { field, .. }
            | InlineError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{field}' setting in the CLI flags or TOML config")
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read or write a file: {self}"),
            ErrorCategory::Markup => format!("Could not process the HTML: {self}"),
            ErrorCategory::Convention => format!("A module does not follow the inlining conventions: {self}"),
            ErrorCategory::Configuration => format!("Invalid configuration: {self}"),
        }
    }

    /// 將 `NotFound` 的 IO 錯誤轉為帶路徑的 `FileNotFound`
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            InlineError::FileNotFound { path: path.into() }
        } else {
            InlineError::IoError(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, InlineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_file_not_found() {
        let err = InlineError::from_io(
            "missing.js",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, InlineError::FileNotFound { .. }));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.recovery_suggestion().contains("missing.js"));
    }

    #[test]
    fn test_other_io_errors_are_kept() {
        let err = InlineError::from_io(
            "locked.js",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, InlineError::IoError(_)));
    }

    #[test]
    fn test_convention_errors_are_medium() {
        let err = InlineError::MissingTemplateReference {
            module: PathBuf::from("a.js"),
        };
        assert_eq!(err.category(), ErrorCategory::Convention);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("a.js"));
    }
}
