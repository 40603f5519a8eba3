//! Word and character counting plus the input checks done before summarising.

use thiserror::Error;

/// Shortest trimmed input worth sending to the model
pub const MIN_INPUT_CHARS: usize = 20;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter some text to summarize")]
    Empty,
    #[error("Please enter at least {} characters for meaningful summarization", MIN_INPUT_CHARS)]
    TooShort,
}

/// Count whitespace-separated words
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count characters (Unicode scalar values, not bytes)
pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}

/// Reject empty or too-short input before any request is made
pub fn validate_input(text: &str) -> Result<&str, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    if count_characters(trimmed) < MIN_INPUT_CHARS {
        return Err(InputError::TooShort);
    }
    Ok(trimmed)
}

/// Percentage by which the summary is shorter than the original
pub fn reduction_percent(original_words: usize, summary_words: usize) -> u32 {
    if original_words == 0 || summary_words >= original_words {
        return 0;
    }
    let saved = (original_words - summary_words) as f64 / original_words as f64;
    (saved * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_words_across_mixed_whitespace() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("one two\tthree\n\nfour "), 4);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(count_characters("héllo"), 5);
    }

    #[test]
    fn validates_minimum_length() {
        assert_eq!(validate_input("   "), Err(InputError::Empty));
        assert_eq!(validate_input("  too short  "), Err(InputError::TooShort));
        assert_eq!(
            validate_input("  this is long enough to send  "),
            Ok("this is long enough to send")
        );
    }

    #[test]
    fn reduction_is_clamped() {
        assert_eq!(reduction_percent(0, 10), 0);
        assert_eq!(reduction_percent(100, 120), 0);
        assert_eq!(reduction_percent(200, 50), 75);
    }
}
