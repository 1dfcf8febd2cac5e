//! `\fonttbl` sub-parser.
//!
//! Two layouts are accepted, detected from the first token of the table:
//! bare entries (`\f0\fswiss Arial;\f1 Courier;`) or one group per entry
//! (`{\f0\fswiss Arial;}{\f1 Courier;}`).

use super::skip_blanks;
use crate::rtf::error::RtfResult;
use crate::rtf::parser::RtfParser;
use crate::rtf::symbols::{Major, Minor};
use crate::rtf::token::TokenClass;
use crate::rtf::types::{Font, FontFamily};
use std::io::Read;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Layout {
    Bare,
    Braced,
}

pub(crate) fn read_font_table<R: Read>(parser: &mut RtfParser<R>) -> RtfResult<()> {
    let mut detected = None;
    loop {
        parser.next_token()?;
        skip_blanks(parser)?;
        if parser.token().is_end_group() {
            break;
        }
        if parser.class() == TokenClass::Eof {
            return Err(parser.error("unexpected end of font table"));
        }

        let layout = match detected {
            Some(layout) => layout,
            None => *detected.insert(detect_layout(parser)?),
        };
        if layout == Layout::Braced {
            if !parser.token().is_begin_group() {
                return Err(parser.error("missing \"{\" in font table"));
            }
            parser.next_token()?;
        }

        let font = read_font_entry(parser)?;

        if layout == Layout::Braced {
            parser.next_token()?;
            skip_blanks(parser)?;
            if !parser.token().is_end_group() {
                return Err(parser.error("missing \"}\" in font table"));
            }
        }
        parser.fonts.insert(font);
    }
    parser.route_token()
}

fn detect_layout<R: Read>(parser: &RtfParser<R>) -> RtfResult<Layout> {
    let token = parser.token();
    if token.is_control(Major::CharAttr, Minor::FontNum) {
        Ok(Layout::Bare)
    } else if token.is_begin_group() {
        Ok(Layout::Braced)
    } else {
        Err(parser.error("cannot determine font table format"))
    }
}

/// One entry, starting at the current token and ending on its `;` (or on a
/// `}` left for the caller).
fn read_font_entry<R: Read>(parser: &mut RtfParser<R>) -> RtfResult<Font> {
    let mut num = None;
    let mut font = Font::default();
    let mut name: Option<String> = None;

    loop {
        let token = parser.token();
        if token.class() == TokenClass::Eof || token.is_text(b';') || token.is_end_group() {
            break;
        }
        match token.class() {
            TokenClass::Control => apply_font_control(parser, &mut font, &mut num),
            TokenClass::Group => {
                read_embedded_group(parser, &mut font)?;
            },
            TokenClass::Text => {
                let mut text = String::new();
                loop {
                    let token = parser.token();
                    if token.class() != TokenClass::Text || token.is_text(b';') {
                        break;
                    }
                    text.push_str(token.encoded_text());
                    parser.next_token()?;
                }
                name.get_or_insert_with(String::new).push_str(&text);
                // The terminator is examined by the outer loop.
                continue;
            },
            _ => {},
        }
        parser.next_token()?;
    }

    let Some(num) = num else {
        return Err(parser.error("missing font number"));
    };
    font.num = num;
    font.name = name.map(|n| n.trim().to_string()).unwrap_or_default();
    if parser.token().is_end_group() {
        parser.unget_token()?;
    }
    Ok(font)
}

fn apply_font_control<R: Read>(parser: &RtfParser<R>, font: &mut Font, num: &mut Option<i32>) {
    let token = parser.token();
    match (token.major(), token.minor()) {
        (Major::FontFamily, minor) => {
            if let Some(family) = FontFamily::from_minor(minor) {
                font.family = family;
            }
        },
        (Major::CharAttr, Minor::FontNum) => *num = token.param(),
        (Major::FontAttr, Minor::FontCharSet) => font.charset = token.param(),
        (Major::FontAttr, Minor::FontPitch) => font.pitch = token.param(),
        (Major::FontAttr, Minor::FontCodePage) => {
            font.codepage = token.param().and_then(|p| u16::try_from(p).ok());
        },
        (Major::FontAttr, Minor::FTypeTrueType) => font.truetype = true,
        (Major::FontAttr, Minor::FTypeNil) => font.truetype = false,
        _ => {},
    }
}

/// `{...}` inside an entry: `{\*\falt Name}` sets the alternate name, any
/// other group (`\panose`, `\fname`, ...) is skipped.
fn read_embedded_group<R: Read>(parser: &mut RtfParser<R>, font: &mut Font) -> RtfResult<()> {
    parser.next_token()?;
    if parser.token().is_control(Major::Destination, Minor::OptDest) {
        parser.next_token()?;
    }
    let token = parser.token();
    if token.is_control(Major::Destination, Minor::FontAltName) {
        let mut alt = String::new();
        loop {
            match parser.next_token()? {
                TokenClass::Eof => break,
                TokenClass::Text => alt.push_str(parser.encoded_text()),
                TokenClass::Group if parser.token().is_end_group() => break,
                TokenClass::Group => parser.skip_group()?,
                _ => {},
            }
        }
        let alt = alt.trim().trim_end_matches(';').trim_end();
        font.alt_name = Some(alt.to_string());
        return Ok(());
    }
    if token.is_end_group() {
        return Ok(());
    }
    if token.is_begin_group() {
        parser.skip_group()?;
    }
    parser.skip_group()
}
