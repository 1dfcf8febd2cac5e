//! `\pict` sub-parser.
//!
//! Picture bytes are hex digit pairs following the image-type keyword. They
//! are read straight from the character source rather than as one Text token
//! per digit. When the group closes, the finished picture is stored on the
//! parser and a synthetic `PictAttr` control token is queued so the Control
//! callback learns about it on the next read.

use crate::rtf::error::RtfResult;
use crate::rtf::parser::RtfParser;
use crate::rtf::picture::{ImageType, Picture};
use crate::rtf::symbols::{Major, Minor};
use crate::rtf::token::{Token, TokenClass};
use log::{debug, trace, warn};
use std::io::Read;

pub(crate) fn read_picture<R: Read>(parser: &mut RtfParser<R>) -> RtfResult<()> {
    let mut picture = Picture::new(parser.options().dpi);
    let mut level = 1usize;
    let mut read_image_data = false;

    loop {
        match parser.next_token()? {
            TokenClass::Eof => break,
            TokenClass::Group if parser.token().is_begin_group() => level += 1,
            TokenClass::Group => {
                level -= 1;
                if level == 0 {
                    break;
                }
            },
            TokenClass::Control if parser.major() == Major::PictAttr => {
                let param = parser.param();
                match parser.minor() {
                    minor @ (Minor::PngBlip | Minor::JpegBlip | Minor::WinMetafile | Minor::EnhancedMetafile) => {
                        if let Some(image_type) = ImageType::from_minor(minor) {
                            picture.set_image_type(image_type);
                            read_image_data = true;
                        }
                    },
                    Minor::PicGoalWid => picture.set_width_twips(param.unwrap_or(0)),
                    Minor::PicGoalHt => picture.set_height_twips(param.unwrap_or(0)),
                    Minor::PicWid => picture.set_source_size(param, None),
                    Minor::PicHt => picture.set_source_size(None, param),
                    Minor::PicScaleX => picture.set_scale(param, None),
                    Minor::PicScaleY => picture.set_scale(None, param),
                    Minor::BinData => picture.extend_data(parser.binary()),
                    _ => {},
                }
            },
            // Nested groups (\*\blipuid, \*\picprop) carry no image bytes.
            TokenClass::Text if read_image_data && level == 1 => {
                read_hex_data(parser, &mut picture)?;
                read_image_data = false;
            },
            _ => {},
        }
    }

    if let Some(image_type) = picture.image_type() {
        debug!(
            "picture {:?} complete: {} bytes at line {}",
            image_type,
            picture.data().len(),
            parser.line()
        );
        parser.picture = Some(picture);
        parser.push_token(Token::control(Major::PictAttr, image_type.minor(), Some(0)))?;
    }
    Ok(())
}

/// Decode hex digits starting with the current Text token's byte, stopping
/// before the closing `}` or at the first character that is not a digit.
fn read_hex_data<R: Read>(parser: &mut RtfParser<R>, picture: &mut Picture) -> RtfResult<()> {
    let mut high: Option<u8> = None;
    let mut c = parser.byte();
    let mut from_source = false;

    loop {
        if let Some(digit) = (c as char).to_digit(16) {
            let digit = digit as u8;
            match high.take() {
                Some(h) => picture.push_byte(h << 4 | digit),
                None => high = Some(digit),
            }
        } else if !c.is_ascii_whitespace() {
            warn!(
                "unexpected {:?} in picture data at line {}, column {}",
                c as char,
                parser.line(),
                parser.column()
            );
            if from_source {
                parser.source.unget_char(c);
            }
            break;
        }

        match parser.source.peek_char()? {
            None | Some(b'}') => break,
            Some(_) => {},
        }
        match parser.source.get_char()? {
            Some(next) => c = next,
            None => break,
        }
        from_source = true;
    }

    if high.is_some() {
        trace!("dropping odd trailing hex digit in picture data");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::rtf::parser::RtfParser;
    use crate::rtf::picture::ImageType;
    use crate::rtf::symbols::{Major, Minor};
    use crate::rtf::token::TokenClass;

    fn run(input: &'static str) -> RtfParser<&'static [u8]> {
        let mut p = RtfParser::new(input.as_bytes());
        p.run().unwrap();
        p
    }

    #[test]
    fn test_hex_data_and_goal_size() {
        let p = run("{\\pict\\pngblip\\picwgoal1440\\pichgoal720 89504e47\r\n0d0a1a0a}");
        let pic = p.picture().unwrap();
        assert_eq!(pic.image_type(), Some(ImageType::Png));
        assert_eq!(pic.data(), &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
        assert_eq!(pic.width(), Some(96));
        assert_eq!(pic.height(), Some(48));
        assert!(pic.is_valid());
    }

    #[test]
    fn test_digits_glued_to_blip_keyword() {
        let p = run("{\\pict\\pngblip89504e47}");
        assert_eq!(p.picture().unwrap().data(), &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[test]
    fn test_metadata_and_nested_groups() {
        let p = run(
            "{\\pict{\\*\\picprop{\\sp{\\sn a}{\\sv b}}}\\picw100\\pich50\\picscalex80\\picscaley90\
             \\wmetafile8{\\*\\blipuid 0123}d7cd}",
        );
        let pic = p.picture().unwrap();
        assert_eq!(pic.image_type(), Some(ImageType::Wmf));
        assert_eq!(pic.data(), &[0xD7, 0xCD]);
        assert_eq!(pic.source_width(), Some(100));
        assert_eq!(pic.source_height(), Some(50));
        assert_eq!(pic.scale_x(), Some(80));
        assert_eq!(pic.scale_y(), Some(90));
    }

    #[test]
    fn test_binary_payload() {
        let p = run("{\\pict\\emfblip\\bin3 \x01\x02\x03}");
        assert_eq!(p.picture().unwrap().data(), &[1, 2, 3]);
    }

    #[test]
    fn test_malformed_data_is_tolerated() {
        let p = run("{\\pict\\pngblip abzz}x");
        assert_eq!(p.picture().unwrap().data(), &[0xAB]);
    }

    #[test]
    fn test_synthetic_token_follows_group() {
        let mut p = RtfParser::new(&b"{\\pict\\emfblip 01}z"[..]);
        let mut seen = Vec::new();
        while p.next_token().unwrap() != TokenClass::Eof {
            p.route_token().unwrap();
            seen.push((p.class(), p.major(), p.minor(), p.param()));
        }
        assert_eq!(
            seen,
            vec![
                (TokenClass::Group, Major::BeginGroup, Minor::None, None),
                (TokenClass::Group, Major::EndGroup, Minor::None, None),
                (TokenClass::Control, Major::PictAttr, Minor::EnhancedMetafile, Some(0)),
                (TokenClass::Text, Major::None, Minor::None, None),
            ]
        );
    }

    #[test]
    fn test_picture_without_type_is_not_exposed() {
        let p = run("{\\pict\\picw10 0102}");
        assert!(p.picture().is_none());
    }
}
