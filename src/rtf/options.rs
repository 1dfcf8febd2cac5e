//! Parser configuration.

use crate::common::encoding::DEFAULT_CODEPAGE;
use crate::common::unit::DEFAULT_DPI;
use serde::{Deserialize, Serialize};

/// Configuration for [`RtfParser`](super::RtfParser).
///
/// # Examples
///
/// ```rust
/// use rtfkit::rtf::ParserOptions;
///
/// let options = ParserOptions::new()
///     .with_default_codepage(1251)
///     .with_dpi(120.0);
/// assert_eq!(options.default_codepage, 1251);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Codepage in effect at the start of the stream, after closing the
    /// outermost group, and for out-of-range `\ansicpg` values
    pub default_codepage: u16,
    /// Device resolution used to convert picture twips into pixels
    pub dpi: f32,
    /// Register the built-in destination handlers on construction
    pub install_default_destinations: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            default_codepage: DEFAULT_CODEPAGE,
            dpi: DEFAULT_DPI,
            install_default_destinations: true,
        }
    }
}

impl ParserOptions {
    /// Create a new `ParserOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_default_codepage(mut self, codepage: u16) -> Self {
        self.default_codepage = codepage;
        self
    }

    #[inline]
    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Set whether the built-in destination handlers are registered.
    ///
    /// Without them every destination group is tokenized like body text.
    #[inline]
    pub fn with_default_destinations(mut self, install: bool) -> Self {
        self.install_default_destinations = install;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParserOptions::default();
        assert_eq!(options.default_codepage, 1252);
        assert_eq!(options.dpi, 96.0);
        assert!(options.install_default_destinations);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let options: ParserOptions = serde_saphyr::from_str("dpi: 72.0\n").unwrap();
        assert_eq!(options.dpi, 72.0);
        assert_eq!(options.default_codepage, 1252);
        assert!(options.install_default_destinations);
    }
}
