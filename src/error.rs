//! Exit codes for the dupelist process.

/// Exit codes for the dupelist application.
///
/// There is no partial-success mode: a run either completes and writes
/// all three artifacts, or the first error aborts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success: scan completed and all artifacts were written.
    Success = 0,
    /// General error: any scan or output failure.
    GeneralError = 1,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "DL000",
            Self::GeneralError => "DL001",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
    }

    #[test]
    fn test_code_prefixes() {
        assert_eq!(ExitCode::Success.code_prefix(), "DL000");
        assert_eq!(ExitCode::GeneralError.code_prefix(), "DL001");
    }
}
