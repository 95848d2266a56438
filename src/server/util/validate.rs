//! Character-class checks for user supplied identifiers.

/// Non-empty, ASCII letters, digits, `-` and `_`.
pub fn is_medication_name(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Non-empty, upper case ASCII letters, digits and `_`.
pub fn is_medication_code(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Short ASCII alphanumeric file extension without the dot.
pub fn is_file_extension(value: &str) -> bool {
    !value.is_empty() && value.len() <= 8 && value.chars().all(|c| c.is_ascii_alphanumeric())
}
