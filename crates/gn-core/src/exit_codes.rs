//! Exit codes for the genesis CLI.
//!
//! Exit codes communicate the outcome without requiring output parsing.
//! They are stable across releases.

/// Exit codes for genesis operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Clean = 0,

    /// Input was checked and rejected
    ValidationFailed = 1,

    /// Bad arguments or unknown key
    ArgsError = 2,

    /// I/O error
    IoError = 13,

    /// Internal/unknown error
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl From<&gn_common::Error> for ExitCode {
    fn from(err: &gn_common::Error) -> Self {
        match err.code() {
            11..=12 | 21..=22 => ExitCode::ArgsError,
            20..=29 => ExitCode::ValidationFailed,
            60..=69 => ExitCode::IoError,
            _ => ExitCode::InternalError,
        }
    }
}
