//! Codepage utilities for RTF text decoding.
//!
//! RTF stores 8-bit text in whatever codepage is in effect: the document
//! default (`\ansicpg`), the character set of the current font (`\fcharset`)
//! or an explicit font codepage (`\cpg`). This module maps those numbers onto
//! `encoding_rs` decoders.

use encoding_rs::Encoding;
use oem_cp::code_table::{DECODING_TABLE_CP437, DECODING_TABLE_CP850};

/// Codepage used when nothing else has been declared (Windows Western European).
pub const DEFAULT_CODEPAGE: u16 = 1252;

/// Map a Windows codepage identifier to an `encoding_rs` encoding.
///
/// Returns `None` for codepages `encoding_rs` cannot represent (for example
/// the symbol codepage 42, Johab 1361 or the OEM codepages 437 and 850).
///
/// # Examples
/// ```
/// use rtfkit::common::encoding::codepage_to_encoding;
///
/// let encoding = codepage_to_encoding(936).unwrap();
/// assert_eq!(encoding.name(), "GBK");
/// assert!(codepage_to_encoding(42).is_none());
/// ```
#[inline]
pub fn codepage_to_encoding(codepage: u16) -> Option<&'static Encoding> {
    match codepage {
        // DOS codepages (437 and 850 are served by `codepage_decoder`)
        866 => Some(encoding_rs::IBM866),

        // Windows codepages
        874 => Some(encoding_rs::WINDOWS_874),
        1250 => Some(encoding_rs::WINDOWS_1250),
        1251 => Some(encoding_rs::WINDOWS_1251),
        1252 => Some(encoding_rs::WINDOWS_1252),
        1253 => Some(encoding_rs::WINDOWS_1253),
        1254 => Some(encoding_rs::WINDOWS_1254),
        1255 => Some(encoding_rs::WINDOWS_1255),
        1256 => Some(encoding_rs::WINDOWS_1256),
        1257 => Some(encoding_rs::WINDOWS_1257),
        1258 => Some(encoding_rs::WINDOWS_1258),

        // East Asian codepages
        932 => Some(encoding_rs::SHIFT_JIS),
        936 => Some(encoding_rs::GBK),
        949 => Some(encoding_rs::EUC_KR),
        950 => Some(encoding_rs::BIG5),
        20932 => Some(encoding_rs::EUC_JP),
        20936 => Some(encoding_rs::GBK),
        54936 => Some(encoding_rs::GB18030),

        // ISO 8859 series
        28591 => Some(encoding_rs::WINDOWS_1252),
        28592 => Some(encoding_rs::ISO_8859_2),
        28593 => Some(encoding_rs::ISO_8859_3),
        28594 => Some(encoding_rs::ISO_8859_4),
        28595 => Some(encoding_rs::ISO_8859_5),
        28596 => Some(encoding_rs::ISO_8859_6),
        28597 => Some(encoding_rs::ISO_8859_7),
        28598 => Some(encoding_rs::ISO_8859_8),
        28603 => Some(encoding_rs::ISO_8859_13),
        28605 => Some(encoding_rs::ISO_8859_15),

        // KOI8 series
        20866 => Some(encoding_rs::KOI8_R),
        21866 => Some(encoding_rs::KOI8_U),

        // Macintosh
        10000 => Some(encoding_rs::MACINTOSH),
        10001 => Some(encoding_rs::SHIFT_JIS),
        10007 => Some(encoding_rs::X_MAC_CYRILLIC),

        // Unicode
        1200 => Some(encoding_rs::UTF_16LE),
        1201 => Some(encoding_rs::UTF_16BE),
        65001 => Some(encoding_rs::UTF_8),

        _ => None,
    }
}

/// Decoder for one codepage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CodepageDecoder {
    /// Single- or multi-byte table from `encoding_rs`
    Encoding(&'static Encoding),
    /// DOS OEM codepage: ASCII below 0x80, a 128-entry table above
    Oem(&'static [char; 128]),
}

impl CodepageDecoder {
    /// Decode `bytes`; invalid sequences become U+FFFD.
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            CodepageDecoder::Encoding(encoding) => {
                let (text, _) = encoding.decode_without_bom_handling(bytes);
                text.into_owned()
            },
            CodepageDecoder::Oem(table) => bytes
                .iter()
                .map(|&b| if b < 0x80 { char::from(b) } else { table[usize::from(b - 0x80)] })
                .collect(),
        }
    }
}

/// Decoder for a Windows/DOS codepage identifier.
///
/// The OEM codepages 437 and 850, which `encoding_rs` does not carry, use
/// the tables of `oem_cp`; everything else goes through
/// [`codepage_to_encoding`].
///
/// # Examples
/// ```
/// use rtfkit::common::encoding::codepage_decoder;
///
/// assert_eq!(codepage_decoder(437).unwrap().decode(&[0x82]), "é");
/// assert_eq!(codepage_decoder(850).unwrap().decode(&[0xB7]), "À");
/// assert_eq!(codepage_decoder(1252).unwrap().decode(&[0xE9]), "é");
/// ```
pub fn codepage_decoder(codepage: u16) -> Option<CodepageDecoder> {
    match codepage {
        437 => Some(CodepageDecoder::Oem(&DECODING_TABLE_CP437)),
        850 => Some(CodepageDecoder::Oem(&DECODING_TABLE_CP850)),
        _ => codepage_to_encoding(codepage).map(CodepageDecoder::Encoding),
    }
}

/// Map an RTF `\fcharset` value to the codepage it implies.
///
/// Returns `None` for the "default" (1) and "symbol" (2) character sets and
/// for values with no codepage equivalent; callers keep the active codepage
/// in that case.
///
/// # Examples
/// ```
/// use rtfkit::common::encoding::charset_to_codepage;
///
/// assert_eq!(charset_to_codepage(0), Some(1252));
/// assert_eq!(charset_to_codepage(204), Some(1251));
/// assert_eq!(charset_to_codepage(1), None);
/// ```
#[inline]
pub fn charset_to_codepage(charset: i32) -> Option<u16> {
    match charset {
        0 => Some(1252),
        77 => Some(10000),
        128 => Some(932),
        129 => Some(949),
        130 => Some(1361),
        134 => Some(936),
        136 => Some(950),
        161 => Some(1253),
        162 => Some(1254),
        163 => Some(1258),
        177 => Some(1255),
        178 => Some(1256),
        186 => Some(1257),
        204 => Some(1251),
        222 => Some(874),
        238 => Some(1250),
        254 => Some(437),
        255 => Some(850),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_codepages() {
        assert_eq!(codepage_to_encoding(1252), Some(encoding_rs::WINDOWS_1252));
        assert_eq!(codepage_to_encoding(1251), Some(encoding_rs::WINDOWS_1251));
        assert_eq!(codepage_to_encoding(932), Some(encoding_rs::SHIFT_JIS));
        assert_eq!(codepage_to_encoding(10000), Some(encoding_rs::MACINTOSH));
    }

    #[test]
    fn test_oem_codepages() {
        let cp437 = codepage_decoder(437).unwrap();
        assert_eq!(cp437.decode(b"caf\x82 \xB0"), "café \u{2591}");
        let cp850 = codepage_decoder(850).unwrap();
        assert_eq!(cp850.decode(&[0x82, 0x9D]), "é\u{D8}");
        assert_eq!(codepage_to_encoding(437), None);
    }

    #[test]
    fn test_unsupported_codepages() {
        assert_eq!(codepage_to_encoding(0), None);
        assert_eq!(codepage_to_encoding(42), None);
        assert_eq!(codepage_to_encoding(1361), None);
    }

    #[test]
    fn test_charset_mapping() {
        assert_eq!(charset_to_codepage(128), Some(932));
        assert_eq!(charset_to_codepage(238), Some(1250));
        assert_eq!(charset_to_codepage(2), None);
        assert_eq!(charset_to_codepage(-5), None);
    }
}
