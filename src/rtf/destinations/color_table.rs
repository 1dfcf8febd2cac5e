//! `\colortbl` sub-parser.

use super::skip_blanks;
use crate::rtf::error::RtfResult;
use crate::rtf::parser::RtfParser;
use crate::rtf::symbols::{Major, Minor};
use crate::rtf::token::TokenClass;
use crate::rtf::types::Color;
use std::io::Read;

pub(crate) fn read_color_table<R: Read>(parser: &mut RtfParser<R>) -> RtfResult<()> {
    loop {
        parser.next_token()?;
        skip_blanks(parser)?;
        if parser.token().is_end_group() {
            break;
        }

        let mut color = Color::default();
        loop {
            let token = parser.token();
            let component = token.param().unwrap_or(0).clamp(0, 255) as u8;
            match (token.class(), token.major(), token.minor()) {
                (TokenClass::Control, Major::ColorName, Minor::Red) => color.red = Some(component),
                (TokenClass::Control, Major::ColorName, Minor::Green) => color.green = Some(component),
                (TokenClass::Control, Major::ColorName, Minor::Blue) => color.blue = Some(component),
                // \ctint, \cshade and friends
                (TokenClass::Unknown, ..) => {},
                (TokenClass::Text, ..) if token.byte() == b' ' => {},
                _ => break,
            }
            parser.next_token()?;
        }

        if parser.class() == TokenClass::Eof {
            return Err(parser.error("unexpected end of color table"));
        }
        if !parser.token().is_text(b';') {
            return Err(parser.error("malformed color entry"));
        }
        parser.colors.add(color);
    }
    parser.route_token()
}
