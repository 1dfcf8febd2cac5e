//! `\*` handler.
//!
//! Skips an ignorable destination, except that a destination keyword with a
//! registered handler found inside it (such as `{\*\shppict{\pict ...}}`) is
//! routed. Braces inside the skipped group still reach the Group callback so
//! consumers counting depth stay balanced.

use crate::rtf::error::RtfResult;
use crate::rtf::parser::RtfParser;
use crate::rtf::symbols::{Major, Minor};
use crate::rtf::token::TokenClass;
use std::io::Read;

pub(crate) fn read_optional_destination<R: Read>(parser: &mut RtfParser<R>) -> RtfResult<()> {
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
            TokenClass::Control if is_routable(parser) => return parser.route_token(),
            _ => {},
        }
    }
}

fn is_routable<R: Read>(parser: &RtfParser<R>) -> bool {
    parser.major() == Major::Destination
        && parser.minor() != Minor::OptDest
        && parser.destinations.contains_key(&parser.minor())
}

#[cfg(test)]
mod tests {
    use crate::rtf::parser::RtfParser;
    use crate::rtf::picture::ImageType;
    use crate::rtf::token::TokenClass;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn texts(input: &'static str) -> String {
        let out = Rc::new(RefCell::new(String::new()));
        let mut p = RtfParser::new(input.as_bytes());
        let sink = Rc::clone(&out);
        p.set_class_callback(TokenClass::Text, move |p| {
            sink.borrow_mut().push_str(p.encoded_text());
            Ok(())
        });
        p.run().unwrap();
        out.take()
    }

    #[test]
    fn test_unknown_optional_group_is_skipped() {
        assert_eq!(texts("a{\\*\\generator Writer 1.0;}b"), "ab");
        assert_eq!(texts("a{\\*\\unheardof{x}{y}z}b"), "ab");
    }

    #[test]
    fn test_picture_inside_optional_group() {
        let mut p = RtfParser::new(&b"{\\*\\shppict{\\pict\\pngblip 0a0b}}{\\nonshppict x}"[..]);
        p.run().unwrap();
        let pic = p.picture().unwrap();
        assert_eq!(pic.image_type(), Some(ImageType::Png));
        assert_eq!(pic.data(), &[0x0A, 0x0B]);
    }

    #[test]
    fn test_wrapper_braces_stay_balanced() {
        let depth = Rc::new(RefCell::new(0i32));
        let d = Rc::clone(&depth);
        let mut p = RtfParser::new(&b"{\\*\\shppict{\\pict\\jpegblip ff}}{\\*\\x{y}}"[..]);
        p.set_class_callback(TokenClass::Group, move |p| {
            *d.borrow_mut() += if p.token().is_begin_group() { 1 } else { -1 };
            Ok(())
        });
        p.run().unwrap();
        assert_eq!(*depth.borrow(), 0);
        assert!(p.picture().is_some());
    }
}
