//! `\object` sub-parser.
//!
//! Object data is not decoded. The group is skipped up to its `\result`
//! sub-group, whose content (usually a `\pict`) is routed like body text.

use crate::rtf::error::RtfResult;
use crate::rtf::parser::RtfParser;
use crate::rtf::symbols::{Major, Minor};
use crate::rtf::token::TokenClass;
use std::io::Read;

pub(crate) fn read_object<R: Read>(parser: &mut RtfParser<R>) -> RtfResult<()> {
    let mut level = 1usize;
    loop {
        match parser.next_token()? {
            TokenClass::Eof => return Ok(()),
            TokenClass::Group if parser.token().is_begin_group() => {
                level += 1;
                parser.route_token()?;
            },
            TokenClass::Group => {
                level -= 1;
                if level == 0 {
                    return Ok(());
                }
                parser.route_token()?;
            },
            TokenClass::Control if parser.token().is_control(Major::Destination, Minor::ObjResult) => break,
            _ => {},
        }
    }

    if parser.next_token()? == TokenClass::Eof {
        return Ok(());
    }
    if parser.token().is_begin_group() {
        parser.route_token()?;
        parser.next_token()?;
    }
    parser.route_token()
}

#[cfg(test)]
mod tests {
    use crate::rtf::parser::RtfParser;
    use crate::rtf::picture::ImageType;
    use crate::rtf::token::TokenClass;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_result_picture_is_decoded() {
        let mut p = RtfParser::new(
            &b"{\\object\\objemb{\\*\\objclass Equation.3}{\\*\\objdata 0102}{\\result {\\pict\\pngblip 89}}}"[..],
        );
        p.run().unwrap();
        let pic = p.picture().unwrap();
        assert_eq!(pic.image_type(), Some(ImageType::Png));
        assert_eq!(pic.data(), &[0x89]);
    }

    #[test]
    fn test_groups_stay_balanced() {
        let depth = Rc::new(Cell::new(0i32));
        let texts = Rc::new(Cell::new(0usize));
        let mut p = RtfParser::new(&b"{\\object{\\*\\objdata ab}{\\result {\\b x}}}y"[..]);
        let d = Rc::clone(&depth);
        p.set_class_callback(TokenClass::Group, move |p| {
            d.set(d.get() + if p.token().is_begin_group() { 1 } else { -1 });
            Ok(())
        });
        let t = Rc::clone(&texts);
        p.set_class_callback(TokenClass::Text, move |_| {
            t.set(t.get() + 1);
            Ok(())
        });
        p.run().unwrap();
        assert_eq!(depth.get(), 0);
        // "x" from the result and "y" after the object; "ab" is skipped
        assert_eq!(texts.get(), 2);
    }

    #[test]
    fn test_object_without_result() {
        let mut p = RtfParser::new(&b"{\\object{\\*\\objdata 00}}z"[..]);
        let mut last = 0;
        while p.next_token().unwrap() != TokenClass::Eof {
            p.route_token().unwrap();
            if p.class() == TokenClass::Text {
                last = p.byte();
            }
        }
        assert_eq!(last, b'z');
    }
}
