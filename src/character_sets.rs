use crate::types::Mode;

/// Check if a character is an ASCII tab or newline
pub fn is_ascii_tab_or_newline(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
}

/// Check if a byte is a C0 control or space
pub fn is_c0_control_or_space(b: u8) -> bool {
    b <= 0x20
}

/// Check if a byte separates path segments in the given mode
pub fn is_separator(b: u8, mode: Mode) -> bool {
    b == b'/' || (b == b'\\' && mode.backslash_is_separator())
}

/// Check if a byte may continue a scheme after its first letter
pub fn is_scheme_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}
