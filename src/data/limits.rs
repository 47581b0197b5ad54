//! Known length bounds for eager segment validation.

/// Maximum text input size in bytes (64KB).
pub const MAX_TEXT_BYTES: usize = 65_536;

/// Maximum token count per segment and per request.
pub const MAX_INPUT_TOKENS: usize = 4096;

/// Length bounds checked before any model call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataLimits {
    /// Maximum token-equivalent length of one segment or a whole request.
    pub max_input_tokens: usize,
    /// Maximum UTF-8 byte size of a text segment.
    pub max_text_bytes: usize,
}

impl Default for DataLimits {
    fn default() -> Self {
        Self {
            max_input_tokens: MAX_INPUT_TOKENS,
            max_text_bytes: MAX_TEXT_BYTES,
        }
    }
}
