//! Validation helpers producing consistent errors
//!
//! These helpers cover the recurring "check, then fail with context"
//! pattern so that callers produce uniform error values.

use super::types::{Error, Result};

/// Validate that a byte length matches the expected length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a condition on imported key material
pub fn key(condition: bool, context: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey {
            context,
            #[cfg(feature = "std")]
            message: details.to_string(),
        });
    }
    #[cfg(not(feature = "std"))]
    let _ = details;
    Ok(())
}

/// Validate a general parameter condition
pub fn parameter(condition: bool, context: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter {
            context,
            #[cfg(feature = "std")]
            message: details.to_string(),
        });
    }
    #[cfg(not(feature = "std"))]
    let _ = details;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_is_reported() {
        let err = length("test", 16, 32).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                context: "test",
                expected: 32,
                actual: 16,
            }
        );
        assert!(length("test", 32, 32).is_ok());
    }

    #[test]
    fn key_condition_is_reported() {
        assert!(key(true, "test", "ok").is_ok());
        let err = key(false, "test", "bad point").unwrap_err();
        match err {
            Error::InvalidKey { context, .. } => assert_eq!(context, "test"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn parameter_condition_is_reported() {
        assert!(parameter(true, "test", "ok").is_ok());
        assert!(parameter(false, "test", "bad").is_err());
    }
}
