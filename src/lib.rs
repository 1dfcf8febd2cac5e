//! rtfkit - a streaming Rich Text Format tokenizer
//!
//! The crate reads RTF from any byte stream and turns it into classified
//! tokens: group boundaries, control words, and text decoded with whatever
//! codepage is in effect. Font tables, color tables, style sheets and embedded
//! pictures are picked up by built-in destination handlers; everything else
//! reaches caller-supplied callbacks.
//!
//! # Example - Extracting text
//!
//! ```
//! use rtfkit::rtf::{ParserOptions, text::plain_text};
//!
//! let text = plain_text(&br"{\rtf1\ansi caf\'e9}"[..], ParserOptions::default())?;
//! assert_eq!(text, "café");
//! # Ok::<(), rtfkit::rtf::RtfError>(())
//! ```
//!
//! # Example - Reacting to tokens
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use rtfkit::rtf::{Major, Minor, RtfParser, TokenClass};
//!
//! let bold = Rc::new(Cell::new(0));
//! let seen = Rc::clone(&bold);
//! let mut parser = RtfParser::new(&br"{\rtf1 \b on\b0 off}"[..]);
//! parser.set_class_callback(TokenClass::Control, move |p| {
//!     if p.token().is_control(Major::CharAttr, Minor::Bold) {
//!         seen.set(seen.get() + 1);
//!     }
//!     Ok(())
//! });
//! parser.run()?;
//! assert_eq!(bold.get(), 2);
//! # Ok::<(), rtfkit::rtf::RtfError>(())
//! ```

/// Codepage, binary and unit helpers shared by the reader
pub mod common;

/// RTF tokenizer, router and destination sub-parsers
pub mod rtf;

pub use common::is_rtf;
pub use rtf::{RtfError, RtfParser, RtfResult, TokenClass};
