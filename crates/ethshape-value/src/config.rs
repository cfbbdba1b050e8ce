/// Controls JSON decoding behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Maximum accepted input size in bytes.
    pub max_input_size: usize,
    /// Maximum nesting depth of arrays and objects.
    pub max_depth: usize,
    /// Maximum number of digits in an integer literal.
    pub max_integer_digits: usize,
    /// When true, `0x`-prefixed strings decode to bytes instead of text.
    pub hex_strings_as_bytes: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_input_size: 4 * 1024 * 1024,
            max_depth: 64,
            // A 2048-bit value needs 617 decimal digits.
            max_integer_digits: 1024,
            hex_strings_as_bytes: true,
        }
    }
}
