//! Token types produced by the RTF tokenizer.

use super::symbols::{Major, Minor};
use smallvec::SmallVec;
use std::fmt;

/// Lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenClass {
    /// Nothing read yet
    #[default]
    None,
    /// `{` or `}`
    Group,
    /// Recognized control word or control symbol
    Control,
    /// One literal byte of text
    Text,
    /// Control word missing from the symbol table
    Unknown,
    /// End of input
    Eof,
}

impl TokenClass {
    /// Number of token classes (size of the class callback table).
    pub const COUNT: usize = 6;

    /// Every class, in table order.
    pub const ALL: [TokenClass; Self::COUNT] = [
        TokenClass::None,
        TokenClass::Group,
        TokenClass::Control,
        TokenClass::Text,
        TokenClass::Unknown,
        TokenClass::Eof,
    ];

    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            TokenClass::None => 0,
            TokenClass::Group => 1,
            TokenClass::Control => 2,
            TokenClass::Text => 3,
            TokenClass::Unknown => 4,
            TokenClass::Eof => 5,
        }
    }
}

/// Raw bytes that produced a token (`\f0`, `\'e9`, `a`, ...).
pub(crate) type RawText = SmallVec<[u8; 32]>;

/// The most recently read token.
///
/// A single instance lives inside the parser and is overwritten by every
/// read; clone it (or take a [`TokenSnapshot`]) to keep it around.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    pub(crate) class: TokenClass,
    pub(crate) major: Major,
    pub(crate) minor: Minor,
    pub(crate) param: Option<i32>,
    /// Literal byte of a Text token
    pub(crate) byte: u8,
    pub(crate) raw: RawText,
    /// Text token decoded with the codepage active when it was read
    pub(crate) encoded: String,
    /// Payload of a `\binN` control word
    pub(crate) binary: Vec<u8>,
}

impl Token {
    pub(crate) fn control(major: Major, minor: Minor, param: Option<i32>) -> Self {
        Self {
            class: TokenClass::Control,
            major,
            minor,
            param,
            ..Self::default()
        }
    }

    pub(crate) fn reset(&mut self) {
        self.class = TokenClass::Unknown;
        self.major = Major::None;
        self.minor = Minor::None;
        self.param = None;
        self.byte = 0;
        self.raw.clear();
        self.encoded.clear();
        self.binary.clear();
    }

    #[inline]
    pub fn class(&self) -> TokenClass {
        self.class
    }

    #[inline]
    pub fn major(&self) -> Major {
        self.major
    }

    #[inline]
    pub fn minor(&self) -> Minor {
        self.minor
    }

    /// Numeric parameter, if the control word carried one.
    #[inline]
    pub fn param(&self) -> Option<i32> {
        self.param
    }

    /// Literal byte of a Text token (0 for other classes).
    #[inline]
    pub fn byte(&self) -> u8 {
        self.byte
    }

    /// Raw source bytes of the token.
    #[inline]
    pub fn raw_text(&self) -> &[u8] {
        &self.raw
    }

    /// Decoded character(s) of a Text token.
    #[inline]
    pub fn encoded_text(&self) -> &str {
        &self.encoded
    }

    /// Bytes carried by a `\binN` control word.
    #[inline]
    pub fn binary(&self) -> &[u8] {
        &self.binary
    }

    /// `true` for `{`.
    #[inline]
    pub fn is_begin_group(&self) -> bool {
        self.class == TokenClass::Group && self.major == Major::BeginGroup
    }

    /// `true` for `}`.
    #[inline]
    pub fn is_end_group(&self) -> bool {
        self.class == TokenClass::Group && self.major == Major::EndGroup
    }

    /// `true` for a Text token carrying `byte`.
    #[inline]
    pub fn is_text(&self, byte: u8) -> bool {
        self.class == TokenClass::Text && self.byte == byte
    }

    /// `true` for a recognized control word with the given codes.
    #[inline]
    pub fn is_control(&self, major: Major, minor: Minor) -> bool {
        self.class == TokenClass::Control && self.major == major && self.minor == minor
    }

    /// Capture the token for an error report.
    pub fn snapshot(&self) -> TokenSnapshot {
        TokenSnapshot {
            class: self.class,
            major: self.major,
            minor: self.minor,
            param: self.param,
            text: String::from_utf8_lossy(&self.raw).into_owned(),
        }
    }
}

/// Owned copy of a token's lexical state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSnapshot {
    pub class: TokenClass,
    pub major: Major,
    pub minor: Minor,
    pub param: Option<i32>,
    pub text: String,
}

impl fmt::Display for TokenSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}/{:?}", self.class, self.major, self.minor)?;
        if let Some(param) = self.param {
            write!(f, " param={}", param)?;
        }
        if !self.text.is_empty() {
            write!(f, " text={:?}", self.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_indices_are_dense() {
        for (i, class) in TokenClass::ALL.iter().enumerate() {
            assert_eq!(class.index(), i);
        }
    }

    #[test]
    fn test_reset_clears_payload() {
        let mut token = Token::control(Major::CharAttr, Minor::Bold, Some(1));
        token.raw.extend_from_slice(b"\\b1");
        token.binary.push(7);
        token.reset();
        assert_eq!(token.class(), TokenClass::Unknown);
        assert_eq!(token.param(), None);
        assert!(token.raw_text().is_empty());
        assert!(token.binary().is_empty());
    }

    #[test]
    fn test_snapshot_display() {
        let mut token = Token::control(Major::CharAttr, Minor::FontNum, Some(3));
        token.raw.extend_from_slice(b"\\f3");
        let shown = token.snapshot().to_string();
        assert!(shown.contains("FontNum"));
        assert!(shown.contains("param=3"));
        assert!(shown.contains("\\\\f3"));
    }
}
