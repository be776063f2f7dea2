//! Security utilities for credential checks and log sanitization.

use subtle::ConstantTimeEq;

/// Maximum length of a user-provided string written to logs.
pub const MAX_LOG_FIELD_LENGTH: usize = 200;

/// Compare a provided credential with the expected one in constant time.
///
/// Both values must be non-empty and byte-for-byte equal.
pub fn api_keys_match(provided: &[u8], expected: &[u8]) -> bool {
    if provided.is_empty() || expected.is_empty() {
        return false;
    }
    provided.ct_eq(expected).into()
}

/// Sanitize a user-provided string for safe logging.
///
/// Control characters are dropped and the result is truncated.
pub fn sanitize_for_log(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .take(MAX_LOG_FIELD_LENGTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_keys_match() {
        assert!(api_keys_match(b"s3cr3t", b"s3cr3t"));
        assert!(!api_keys_match(b"s3cr3t", b"S3CR3T"));
        assert!(!api_keys_match(b"s3cr3", b"s3cr3t"));
        assert!(!api_keys_match(b"s3cr3t ", b"s3cr3t"));
        assert!(!api_keys_match(b"", b""));
        assert!(!api_keys_match(b"", b"s3cr3t"));
    }

    #[test]
    fn test_sanitize_for_log() {
        assert_eq!(sanitize_for_log("AI Bedtime Story"), "AI Bedtime Story");
        assert_eq!(sanitize_for_log("line\r\nbreak\x1b[31m"), "linebreak[31m");
        assert_eq!(sanitize_for_log(&"a".repeat(500)).len(), MAX_LOG_FIELD_LENGTH);
    }
}
