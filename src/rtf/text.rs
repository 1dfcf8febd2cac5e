//! Plain-text extraction on top of [`RtfParser`] callbacks.
//!
//! # Examples
//!
//! ```rust
//! use rtfkit::rtf::{ParserOptions, text::plain_text};
//!
//! let text = plain_text(&b"{\\rtf1\\ansi{\\fonttbl{\\f0 Arial;}}Hello\\par World}"[..], ParserOptions::default()).unwrap();
//! assert_eq!(text, "Hello\nWorld");
//! ```

use super::error::RtfResult;
use super::options::ParserOptions;
use super::parser::RtfParser;
use super::symbols::{Major, Minor};
use super::token::TokenClass;
use std::cell::RefCell;
use std::io::Read;
use std::rc::Rc;

#[derive(Debug)]
struct Collector {
    out: String,
    /// `\ucN` in effect, saved per group
    uc: usize,
    uc_stack: Vec<usize>,
    /// Fallback characters still to drop after `\uN`
    skip: usize,
}

impl Default for Collector {
    fn default() -> Self {
        Self {
            out: String::new(),
            uc: 1,
            uc_stack: Vec::new(),
            skip: 0,
        }
    }
}

impl Collector {
    fn text(&mut self, text: &str) {
        if self.skip > 0 {
            self.skip -= 1;
        } else {
            self.out.push_str(text);
        }
    }

    fn group(&mut self, open: bool) {
        if open {
            self.uc_stack.push(self.uc);
        } else {
            self.uc = self.uc_stack.pop().unwrap_or(1);
        }
        self.skip = 0;
    }

    fn control(&mut self, major: Major, minor: Minor, param: Option<i32>) {
        match (major, minor) {
            (Major::Unicode, Minor::UnicodeChar) => {
                if let Some(param) = param {
                    // Code points above 32767 are written as negative numbers.
                    let code = if param < 0 { param + 65536 } else { param };
                    let c = u32::try_from(code)
                        .ok()
                        .and_then(char::from_u32)
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    self.out.push(c);
                    self.skip = self.uc;
                }
            },
            (Major::Unicode, Minor::UnicodeCharBytes) => {
                self.uc = param.and_then(|p| usize::try_from(p).ok()).unwrap_or(1);
            },
            (Major::SpecialChar, minor) => {
                if let Some(s) = special_char(minor) {
                    self.text(s);
                }
            },
            _ => {},
        }
    }
}

fn special_char(minor: Minor) -> Option<&'static str> {
    Some(match minor {
        Minor::Par | Minor::Line | Minor::Row | Minor::Page | Minor::Sect => "\n",
        Minor::Tab | Minor::Cell => "\t",
        Minor::NoBrkSpace => "\u{A0}",
        Minor::NoBrkHyphen => "\u{2011}",
        Minor::LeftSingleQuote => "\u{2018}",
        Minor::RightSingleQuote => "\u{2019}",
        Minor::LeftDoubleQuote => "\u{201C}",
        Minor::RightDoubleQuote => "\u{201D}",
        Minor::Bullet => "\u{2022}",
        Minor::EnDash => "\u{2013}",
        Minor::EmDash => "\u{2014}",
        Minor::EnSpace => "\u{2002}",
        Minor::EmSpace => "\u{2003}",
        _ => return None,
    })
}

/// `{\upr{ansi}{\*\ud{unicode}}}`: drop the ANSI branch and let the
/// Unicode one through as body text.
fn read_dual_destination<R: Read>(parser: &mut RtfParser<R>) -> RtfResult<()> {
    parser.next_token()?;
    if !parser.token().is_begin_group() {
        return parser.route_token();
    }
    parser.route_token()?;
    parser.skip_group()
}

/// Extract the body text of an RTF stream.
///
/// Paragraph, line, row, page and section breaks become `\n`; tabs and cell
/// ends become `\t`. Headers, footers and the `\upr` ANSI alternative are
/// left out, as is everything the built-in destination handlers consume.
pub fn plain_text<R: Read + 'static>(reader: R, options: ParserOptions) -> RtfResult<String> {
    let collector = Rc::new(RefCell::new(Collector::default()));
    let mut parser = RtfParser::with_options(reader, options);

    let state = Rc::clone(&collector);
    parser.set_class_callback(TokenClass::Text, move |p| {
        state.borrow_mut().text(p.encoded_text());
        Ok(())
    });
    let state = Rc::clone(&collector);
    parser.set_class_callback(TokenClass::Group, move |p| {
        state.borrow_mut().group(p.token().is_begin_group());
        Ok(())
    });
    let state = Rc::clone(&collector);
    parser.set_class_callback(TokenClass::Control, move |p| {
        state.borrow_mut().control(p.major(), p.minor(), p.param());
        Ok(())
    });

    for minor in [
        Minor::Header,
        Minor::HeaderLeft,
        Minor::HeaderRight,
        Minor::HeaderFirst,
        Minor::Footer,
        Minor::FooterLeft,
        Minor::FooterRight,
        Minor::FooterFirst,
    ] {
        parser.set_destination(minor, |p| p.skip_group());
    }
    parser.set_destination(Minor::UnicodeDualDest, read_dual_destination);
    parser.set_destination(Minor::UnicodeDest, |_| Ok(()));

    parser.run()?;
    let out = std::mem::take(&mut collector.borrow_mut().out);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(input: &'static str) -> String {
        plain_text(input.as_bytes(), ParserOptions::default()).unwrap()
    }

    #[test]
    fn test_unicode_with_fallback() {
        assert_eq!(extract("{\\rtf1 caf\\u233?!}"), "café!");
        assert_eq!(extract("{\\rtf1\\uc2 \\u8212\\'97\\'97x}"), "\u{2014}x");
        assert_eq!(extract("{\\rtf1 \\u-3913?}"), "\u{F0B7}");
    }

    #[test]
    fn test_escaped_line_break_keeps_text() {
        assert_eq!(extract("{\\rtf1 a\\\nbc}"), "a\nbc");
        assert_eq!(extract("{\\rtf1 a\\\r\nbc\r\nd}"), "a\nbcd");
    }

    #[test]
    fn test_uc_is_scoped_to_group() {
        assert_eq!(extract("{\\rtf1{\\uc0 \\u65 }\\u66?}"), "AB");
    }

    #[test]
    fn test_special_characters() {
        assert_eq!(extract("{\\rtf1 a\\tab b\\line c\\emdash\\~d}"), "a\tb\nc\u{2014}\u{A0}d");
        assert_eq!(extract("{\\rtf1 a\tb}"), "a\tb");
    }

    #[test]
    fn test_headers_and_tables_are_skipped() {
        assert_eq!(
            extract(
                "{\\rtf1{\\fonttbl{\\f0 Arial;}}{\\colortbl;\\red1\\green2\\blue3;}\
                 {\\stylesheet{\\s0 Normal;}}{\\info{\\title T}}{\\header H}Body}"
            ),
            "Body"
        );
    }

    #[test]
    fn test_dual_destination_keeps_unicode_branch() {
        assert_eq!(extract("{\\rtf1{\\upr{ansi}{\\*\\ud{uni}}}}"), "uni");
    }

    #[test]
    fn test_codepage_text() {
        assert_eq!(
            extract("{\\rtf1\\ansi\\ansicpg1251{\\fonttbl{\\f0\\fcharset204 X;}}\\f0 \\'cf\\'f0\\'e8}"),
            "При"
        );
    }
}
