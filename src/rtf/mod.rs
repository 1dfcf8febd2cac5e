//! RTF (Rich Text Format) tokenizer module.
//!
//! The reader works on any [`std::io::Read`] stream and produces one token at
//! a time. Named sub-documents ("destinations") such as the font table or an
//! embedded picture are handed to sub-parsers that read the rest of their
//! group through the same parser and record what they find.
//!
//! # Architecture
//!
//! - **Symbol table**: maps control words to a `(Major, Minor)` pair
//! - **Tokenizer**: `next_token`, `unget_token`, `peek_token`; tracks the
//!   codepage in effect for every group
//! - **Router**: `route_token` runs the destination handler for a keyword,
//!   then the callback registered for the token's class
//! - **Destinations**: font table, color table, style sheet, info, picture,
//!   object and `\*` handlers, all replaceable
//!
//! # Example
//!
//! ```rust
//! use rtfkit::rtf::RtfParser;
//!
//! let input = br"{\rtf1{\fonttbl{\f0\fswiss Arial;}}{\colortbl;\red255\green0\blue0;}\f0 Hi}";
//! let mut parser = RtfParser::new(&input[..]);
//! parser.run()?;
//! assert_eq!(parser.fonts().get(0).map(|f| f.name.as_str()), Some("Arial"));
//! assert_eq!(parser.colors().len(), 2);
//! # Ok::<(), rtfkit::rtf::RtfError>(())
//! ```

mod charset;
mod destinations;
mod error;
mod lexer;
mod options;
mod parser;
mod picture;
mod router;
mod source;
mod stylesheet;
mod symbols;
pub mod text;
mod token;
mod types;

// Re-exports
pub use error::{RtfError, RtfResult, StructuralError};
pub use options::ParserOptions;
pub use parser::{Handler, RtfParser};
pub use picture::{ImageType, Picture, detect_image_type};
pub use stylesheet::{NORMAL_STYLE_NUM, Style, StyleElement, StyleSheet, StyleType};
pub use symbols::{KEYWORDS, Major, Minor, Symbol, lookup};
pub use token::{Token, TokenClass, TokenSnapshot};
pub use types::{Color, ColorTable, Font, FontFamily, FontTable};
