//! Product-identifier entry: a digits-only input buffer and its validator.

use storedesk_types::ProductId;
use thiserror::Error;

/// Local, synchronous rejection of a product identifier. Never reaches the
/// network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Product ID cannot be empty")]
    Empty,
    #[error("Product ID must be a 5-digit number")]
    Malformed,
}

/// Validate user input as a product identifier.
///
/// Surrounding whitespace is ignored. Anything other than exactly five ASCII
/// digits is rejected.
pub fn validate_product_id(input: &str) -> Result<ProductId, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    ProductId::new(trimmed).ok_or(ValidationError::Malformed)
}

/// Text buffer that only ever holds ASCII digits.
///
/// Non-digit keystrokes are dropped at input time, so the buffer can never
/// contain anything the validator would have to strip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductIdInput {
    input: String,
    /// Cursor index into `input`; digits are single-byte so this is both a
    /// byte and a char offset.
    cursor: usize,
}

impl ProductIdInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Replace the buffer, keeping only the digits of `value` in order.
    /// The cursor moves to the end.
    pub fn set_input(&mut self, value: &str) {
        self.input = value.chars().filter(char::is_ascii_digit).collect();
        self.cursor = self.input.len();
    }

    /// Insert `value`'s digits at the cursor, e.g. from a paste.
    pub fn paste(&mut self, value: &str) {
        for c in value.chars() {
            self.insert_char(c);
        }
    }

    /// Insert a char at the cursor. Returns `false` and leaves the buffer
    /// untouched when `c` is not a decimal digit.
    pub fn insert_char(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() {
            return false;
        }
        self.input.insert(self.cursor, c);
        self.cursor += 1;
        true
    }

    /// Remove the digit before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.input.remove(self.cursor);
    }

    /// Remove the digit under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.input.len() {
            self.input.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.input.len());
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_digits_are_dropped_in_order() {
        let mut input = ProductIdInput::new();
        for c in "12a34".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.value(), "1234");

        let mut pasted = ProductIdInput::new();
        pasted.set_input("#12-3 4x5");
        assert_eq!(pasted.value(), "12345");
    }

    #[test]
    fn editing_respects_cursor() {
        let mut input = ProductIdInput::new();
        input.set_input("1245");
        input.move_left();
        input.move_left();
        assert!(input.insert_char('3'));
        assert_eq!(input.value(), "12345");
        input.backspace();
        assert_eq!(input.value(), "1245");
        input.delete();
        assert_eq!(input.value(), "125");
        assert!(!input.insert_char('x'));
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn validation_messages() {
        assert_eq!(validate_product_id(""), Err(ValidationError::Empty));
        assert_eq!(validate_product_id("   "), Err(ValidationError::Empty));
        assert_eq!(validate_product_id("123"), Err(ValidationError::Malformed));
        assert_eq!(validate_product_id("123456"), Err(ValidationError::Malformed));
        assert_eq!(validate_product_id("١٢٣٤٥"), Err(ValidationError::Malformed));
        assert_eq!(ValidationError::Empty.to_string(), "Product ID cannot be empty");
        assert_eq!(ValidationError::Malformed.to_string(), "Product ID must be a 5-digit number");
        assert_eq!(validate_product_id(" 12345 ").map(|id| id.to_string()), Ok("12345".to_string()));
    }
}
