use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BcaResult<T> = Result<T, BcaError>;
pub type DecodeResult<T> = BcaResult<T>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BcaErrorCategory {
    InputValidationError,
    IoSystemError,
    InternalError,
}

impl BcaErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::InternalError => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::InternalError => "InternalError",
        }
    }
}

/// Error returned by encode/decode/persistence calls.
///
/// The placeholder is a stable dotted identifier (`INPUT.LIST_LENGTH`, `IO.SAVE_WRITE`, ...)
/// that callers can match on; the message is the human readable description handed to the
/// user as a blocking notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BcaError {
    category: BcaErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl BcaError {
    pub fn new(
        category: BcaErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(BcaErrorCategory::InputValidationError, placeholder, message)
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(BcaErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(BcaErrorCategory::InternalError, placeholder, message)
    }

    pub const fn category(&self) -> BcaErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> String {
        format!("FATAL EXIT CODE: {}", self.exit_code())
    }
}

impl Display for BcaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for BcaError {}

#[cfg(test)]
mod tests {
    use super::{BcaError, BcaErrorCategory};

    #[test]
    fn exit_codes_are_stable_per_category() {
        let cases = [
            (BcaErrorCategory::InputValidationError, 2, "InputValidationError"),
            (BcaErrorCategory::IoSystemError, 3, "IoSystemError"),
            (BcaErrorCategory::InternalError, 4, "InternalError"),
        ];

        for (category, exit_code, name) in cases {
            assert_eq!(category.exit_code(), exit_code);
            assert_eq!(category.as_str(), name);
        }
    }

    #[test]
    fn hard_error_renders_diagnostic_lines() {
        let error = BcaError::input_validation(
            "INPUT.TARGET_COMPOSITION",
            "Abundances of target composition can not be read.",
        );

        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.diagnostic_line(),
            "ERROR: [INPUT.TARGET_COMPOSITION] Abundances of target composition can not be read."
        );
        assert_eq!(error.fatal_exit_line(), "FATAL EXIT CODE: 2");
        assert_eq!(
            error.to_string(),
            "Abundances of target composition can not be read."
        );
    }
}
