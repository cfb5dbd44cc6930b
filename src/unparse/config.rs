//! Unparser configuration
//!
//! The defaults reproduce the canonical layout: two spaces per nesting level.

/// Widest indentation step accepted; wider requests are capped to this.
pub const MAX_INDENT_WIDTH: usize = 16;

/// Unparser configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnparseConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
}

impl Default for UnparseConfig {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

impl UnparseConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width, capped at [`MAX_INDENT_WIDTH`]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width.min(MAX_INDENT_WIDTH);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_indent_width_is_two() {
        assert_eq!(UnparseConfig::default().indent_width, 2);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(UnparseConfig::new(), UnparseConfig::default());
    }

    #[test]
    fn test_with_indent_width() {
        let config = UnparseConfig::new().with_indent_width(4);
        assert_eq!(config.indent_width, 4);
    }

    #[test]
    fn test_with_indent_width_zero() {
        let config = UnparseConfig::new().with_indent_width(0);
        assert_eq!(config.indent_width, 0);
    }

    #[test]
    fn test_with_indent_width_is_capped() {
        assert_eq!(UnparseConfig::new().with_indent_width(16).indent_width, 16);
        assert_eq!(UnparseConfig::new().with_indent_width(17).indent_width, MAX_INDENT_WIDTH);
        assert_eq!(UnparseConfig::new().with_indent_width(usize::MAX).indent_width, MAX_INDENT_WIDTH);
    }

    #[test]
    fn test_builder_override() {
        let config = UnparseConfig::new().with_indent_width(8).with_indent_width(3);
        assert_eq!(config.indent_width, 3); // Last value wins
    }
}
