//! Char filters normalize raw text before it reaches the tokenizer.

/// Trait for filters applied to the raw text ahead of tokenization.
pub trait CharFilter: Send + Sync {
    /// Transform the input text.
    fn filter(&self, text: &str) -> String;

    /// Get the name of this char filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Lowercases the whole input.
///
/// Lowercasing before segmentation (rather than per token) matters for the
/// few characters whose lowercase form is ASCII, such as the Kelvin sign.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, text: &str) -> String {
        text.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
