//! Input validation utilities
//!
//! Provides input validation and sanitization functions.

/// Validate that an input line fits the length limit and has no control bytes
pub fn is_valid_input(input: &str, max_length: usize) -> bool {
    input.len() <= max_length && !input.contains('\0')
}

/// Sanitize user input
pub fn sanitize_input(input: &str) -> &str {
    input.trim_end_matches(['\r', '\n'])
}
