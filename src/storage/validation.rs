//! Name validation
//!
//! Handles the naming rules every file and directory must satisfy.

use crate::error::StorageError;

/// Characters that may never appear in a node name
pub const RESERVED_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Default limit on how deep directories may be nested below the root
pub const MAX_DIRECTORY_DEPTH: usize = 64;

/// Validate that a name is usable for a file or directory
pub fn is_valid_name(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }

    !name.contains(&RESERVED_CHARS[..])
}

/// Same check as [`is_valid_name`], as a `Result` for `?` chaining
pub fn validate_name(name: &str) -> Result<(), StorageError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(StorageError::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ordinary_names() {
        for name in ["a", "docs", "report2024", "notes.txt", ".hidden", "my file", "..."] {
            assert!(is_valid_name(name), "{name:?} should be valid");
        }
    }

    #[test]
    fn test_rejects_special_names() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("."));
        assert!(!is_valid_name(".."));
    }

    #[test]
    fn test_rejects_reserved_characters() {
        for c in RESERVED_CHARS {
            let name = format!("bad{c}name");
            assert!(!is_valid_name(&name), "{name:?} should be invalid");
            assert!(!is_valid_name(&c.to_string()));
        }
    }

    #[test]
    fn test_validate_name_error() {
        assert_eq!(validate_name("ok"), Ok(()));
        assert_eq!(
            validate_name("a/b"),
            Err(StorageError::InvalidName("a/b".into()))
        );
    }
}
