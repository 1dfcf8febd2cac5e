use pretty_assertions::assert_eq;
use rtfkit::rtf::{FontFamily, ImageType, Minor, RtfParser, StyleType, TokenClass, text::plain_text};
use rtfkit::rtf::ParserOptions;
use std::cell::RefCell;
use std::io::{Cursor, Write};
use std::rc::Rc;

fn parse(input: &str) -> RtfParser<Cursor<Vec<u8>>> {
    let mut p = RtfParser::new(Cursor::new(input.as_bytes().to_vec()));
    p.run().unwrap();
    p
}

#[test]
fn font_table_braced_entry() {
    let p = parse("{\\rtf1{\\fonttbl{\\f0\\fswiss Arial;}}\\f0 x}");
    let font = p.fonts().get(0).unwrap();
    assert_eq!(font.name, "Arial");
    assert_eq!(font.family, FontFamily::Swiss);
}

#[test]
fn font_table_bare_entries_with_charset() {
    let p = parse("{\\rtf1{\\fonttbl\\f0\\froman\\fcharset204 Times;\\f1\\fmodern Courier;}}");
    assert_eq!(p.fonts().len(), 2);
    assert_eq!(p.fonts().get(0).unwrap().effective_codepage(), Some(1251));
    assert_eq!(p.fonts().get(1).unwrap().name, "Courier");
}

#[test]
fn color_table_with_auto_entry() {
    let p = parse("{\\rtf1{\\colortbl;\\red255\\green0\\blue0;\\red0\\green128\\blue255;}}");
    assert_eq!(p.colors().len(), 3);
    assert!(p.colors().get(0).unwrap().is_auto());
    assert_eq!(p.colors().get(2).unwrap().rgb(), (0, 128, 255));
}

#[test]
fn style_sheet_entries() {
    let p = parse(
        "{\\rtf1{\\stylesheet{\\s0\\fs24 Normal;}{\\cs10\\additive\\sbasedon0 Default Paragraph Font;}}}",
    );
    assert_eq!(p.stylesheet().len(), 2);
    let normal = p.stylesheet().get(0).unwrap();
    assert_eq!(normal.name, "Normal");
    assert_eq!(normal.element_count(), 1);
    let font = p.stylesheet().get_by_name("Default Paragraph Font").unwrap();
    assert_eq!(font.style_type, StyleType::Character);
    assert!(font.additive);
    assert_eq!(font.based_on, Some(0));
}

#[test]
fn style_without_name_reports_its_line() {
    let input = "{\\rtf1\n{\\stylesheet\n{\\s1\\b ;}}}";
    let mut p = RtfParser::new(Cursor::new(input.as_bytes().to_vec()));
    let err = p.run().unwrap_err();
    let structural = err.as_structural().unwrap();
    assert_eq!(structural.line, 3);
    assert!(structural.message.contains("style"));
}

#[test]
fn picture_nested_in_optional_group() {
    let p = parse(
        "{\\rtf1{\\*\\shppict{\\pict{\\*\\blipuid 0123}\\pngblip\\picwgoal1440\\pichgoal720 89504e47}}{\\nonshppict none}}",
    );
    let pic = p.picture().unwrap();
    assert_eq!(pic.image_type(), Some(ImageType::Png));
    assert_eq!(pic.data(), &[0x89, 0x50, 0x4E, 0x47]);
    assert_eq!((pic.width(), pic.height()), (Some(96), Some(48)));
}

#[test]
fn info_group_is_consumed() {
    let seen = Rc::new(RefCell::new(String::new()));
    let sink = Rc::clone(&seen);
    let mut p = RtfParser::new(Cursor::new(b"{\\rtf1{\\info{\\title T}{\\author A}}body}".to_vec()));
    p.set_class_callback(TokenClass::Text, move |p| {
        sink.borrow_mut().push_str(p.encoded_text());
        Ok(())
    });
    p.run().unwrap();
    assert_eq!(*seen.borrow(), "body");
}

#[test]
fn custom_destination_replaces_builtin() {
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let mut p = RtfParser::new(Cursor::new(b"{\\rtf1{\\fonttbl{\\f0 Arial;}}}".to_vec()));
    p.set_destination(Minor::FontTbl, move |p| {
        *counter.borrow_mut() += 1;
        p.skip_group()
    });
    p.run().unwrap();
    assert_eq!(*calls.borrow(), 1);
    assert!(p.fonts().is_empty());
}

#[test]
fn missing_font_table_brace_is_an_error() {
    let mut p = RtfParser::new(Cursor::new(b"{\\rtf1{\\fonttbl{\\f0 Arial;".to_vec()));
    assert!(p.run().unwrap_err().as_structural().is_some());
}

#[test]
fn parse_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\\rtf1\\ansi\\ansicpg1252{\\fonttbl{\\f0 Arial;}}\\f0 Caf\\'e9\\par}")
        .unwrap();
    let reader = file.reopen().unwrap();
    let text = plain_text(reader, ParserOptions::default()).unwrap();
    assert_eq!(text, "Café\n");

    let mut p = RtfParser::new(file.reopen().unwrap());
    p.run().unwrap();
    assert_eq!(p.fonts().len(), 1);
}

#[test]
fn detects_rtf_signature() {
    assert!(rtfkit::is_rtf(b"{\\rtf1\\ansi}"));
    assert!(!rtfkit::is_rtf(b"%PDF-1.7"));
}
