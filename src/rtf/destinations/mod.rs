//! Built-in destination sub-parsers.
//!
//! Each handler is entered with the destination keyword as the current token,
//! reads the rest of its group through the parser and returns with the
//! group's closing `}` as the current token, which the router then hands to
//! the Group callback.

mod color_table;
mod font_table;
mod object;
mod optional;
mod picture;
mod style_sheet;

pub(crate) use color_table::read_color_table;
pub(crate) use font_table::read_font_table;
pub(crate) use object::read_object;
pub(crate) use optional::read_optional_destination;
pub(crate) use picture::read_picture;
pub(crate) use style_sheet::read_style_sheet;

use super::error::RtfResult;
use super::parser::RtfParser;
use std::io::Read;

/// `\info` is not modeled; its group is skipped.
pub(crate) fn read_info_group<R: Read>(parser: &mut RtfParser<R>) -> RtfResult<()> {
    parser.skip_group()?;
    parser.route_token()
}

/// Skip Text tokens holding only spaces.
pub(super) fn skip_blanks<R: Read>(parser: &mut RtfParser<R>) -> RtfResult<()> {
    while parser.token().is_text(b' ') {
        parser.next_token()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rtf::token::TokenClass;

    #[test]
    fn test_info_is_skipped() {
        let mut p = RtfParser::new(&b"{\\info{\\title Hidden}{\\author Me}}x"[..]);
        let mut text = Vec::new();
        while p.next_token().unwrap() != TokenClass::Eof {
            p.route_token().unwrap();
            if p.class() == TokenClass::Text {
                text.push(p.byte());
            }
        }
        assert_eq!(text, b"x");
    }
}
