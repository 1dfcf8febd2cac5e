//! Format-independent helpers used by the RTF reader.

pub mod binary;
pub mod detection;
pub mod encoding;
pub mod unit;

pub use detection::{is_rtf, is_rtf_reader};
pub use encoding::{
    CodepageDecoder, DEFAULT_CODEPAGE, charset_to_codepage, codepage_decoder, codepage_to_encoding,
};
