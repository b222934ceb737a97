//! The chat input control.

/// Edit buffer with a hard character cap.
#[derive(Debug, Clone)]
pub struct InputBox {
    value: String,
    max_chars: usize,
}

impl InputBox {
    pub fn new(max_chars: usize) -> Self {
        Self {
            value: String::new(),
            max_chars,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Replace the buffer contents. Returns `true` if `text` was truncated
    /// to fit the cap.
    pub fn set(&mut self, text: &str) -> bool {
        match text.char_indices().nth(self.max_chars) {
            Some((cut, _)) => {
                self.value = text[..cut].to_string();
                true
            }
            None => {
                self.value = text.to_string();
                false
            }
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_cap_is_kept() {
        let mut input = InputBox::new(5);
        assert!(!input.set("hello"));
        assert_eq!(input.value(), "hello");
    }

    #[test]
    fn test_over_cap_is_truncated() {
        let mut input = InputBox::new(500);
        assert!(input.set(&"z".repeat(750)));
        assert_eq!(input.value().chars().count(), 500);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let mut input = InputBox::new(3);
        assert!(input.set("🪐🌙⭐🚀"));
        assert_eq!(input.value(), "🪐🌙⭐");
    }

    #[test]
    fn test_clear() {
        let mut input = InputBox::new(10);
        input.set("meow");
        input.clear();
        assert_eq!(input.value(), "");
    }
}
