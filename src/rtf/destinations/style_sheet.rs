//! `\stylesheet` sub-parser.

use super::skip_blanks;
use crate::rtf::error::RtfResult;
use crate::rtf::parser::RtfParser;
use crate::rtf::stylesheet::{NORMAL_STYLE_NUM, Style, StyleElement, StyleType};
use crate::rtf::symbols::{Major, Minor};
use crate::rtf::token::TokenClass;
use std::io::Read;
use std::sync::Arc;

pub(crate) fn read_style_sheet<R: Read>(parser: &mut RtfParser<R>) -> RtfResult<()> {
    loop {
        parser.next_token()?;
        skip_blanks(parser)?;
        if parser.token().is_end_group() {
            break;
        }
        if !parser.token().is_begin_group() {
            return Err(parser.error("missing \"{\" in style sheet"));
        }
        let style = read_style(parser)?;
        parser.stylesheet.add(Arc::new(style));
    }
    parser.route_token()
}

/// One `{...}` style definition; the opening brace is the current token.
fn read_style<R: Read>(parser: &mut RtfParser<R>) -> RtfResult<Style> {
    let (line, column) = (parser.line(), parser.column());
    let mut style = Style::default();
    let mut num = None;
    let mut next_par = None;
    let mut name: Option<String> = None;

    loop {
        match parser.next_token()? {
            TokenClass::Eof => break,
            TokenClass::Text if parser.byte() == b';' => break,
            TokenClass::Text => {
                let mut text = String::new();
                while parser.class() == TokenClass::Text {
                    if parser.byte() == b';' {
                        break;
                    }
                    text.push_str(parser.encoded_text());
                    parser.next_token()?;
                }
                name.get_or_insert_with(String::new).push_str(&text);
                // Leave the terminator for the next iteration.
                parser.unget_token()?;
            },
            TokenClass::Group if parser.token().is_end_group() => {
                parser.unget_token()?;
                break;
            },
            // {\*\keycode ...} and other nested groups
            TokenClass::Group => parser.skip_group()?,
            TokenClass::Control | TokenClass::Unknown => {
                let token = parser.token();
                match (token.major(), token.minor()) {
                    (Major::ParAttr, Minor::StyleNum) => {
                        num = token.param();
                        style.style_type = StyleType::Paragraph;
                    },
                    (Major::CharAttr, Minor::CharStyleNum) => {
                        num = token.param();
                        style.style_type = StyleType::Character;
                    },
                    (Major::StyleAttr, Minor::SectStyleNum) => {
                        num = token.param();
                        style.style_type = StyleType::Section;
                    },
                    (Major::StyleAttr, Minor::BasedOn) => style.based_on = token.param(),
                    (Major::StyleAttr, Minor::Additive) => style.additive = true,
                    (Major::StyleAttr, Minor::Next) => next_par = token.param(),
                    (Major::Destination, Minor::OptDest) => {},
                    _ => style.add_element(StyleElement {
                        class: token.class(),
                        major: token.major(),
                        minor: token.minor(),
                        param: token.param(),
                        text: String::from_utf8_lossy(token.raw_text()).into_owned(),
                    }),
                }
            },
            TokenClass::None => {},
        }
    }

    parser.next_token()?;
    if !parser.token().is_end_group() {
        return Err(parser.error("missing \"}\" in style sheet"));
    }

    let Some(name) = name.map(|n| n.trim().to_string()) else {
        return Err(parser.error_at(
            line,
            column,
            format!("missing style name (style starting at line {})", line),
        ));
    };
    style.num = match num {
        Some(num) => num,
        None if name.starts_with("Normal") || name.starts_with("Standard") => NORMAL_STYLE_NUM,
        None => {
            return Err(parser.error_at(
                line,
                column,
                format!("missing style number for \"{}\"", name),
            ));
        },
    };
    style.next_par = next_par.unwrap_or(style.num);
    style.name = name;
    Ok(style)
}

#[cfg(test)]
mod tests {
    use crate::rtf::parser::RtfParser;
    use crate::rtf::stylesheet::{NORMAL_STYLE_NUM, StyleType};
    use crate::rtf::symbols::Minor;
    use crate::rtf::token::TokenClass;

    fn parse(input: &'static str) -> RtfParser<&'static [u8]> {
        let mut p = RtfParser::new(input.as_bytes());
        p.run().unwrap();
        p
    }

    #[test]
    fn test_paragraph_and_character_styles() {
        let p = parse(
            "{\\stylesheet{\\ql\\fs24 Normal;}{\\s1\\sbasedon0\\snext0\\b\\fs32 heading 1;}\
             {\\*\\cs10\\additive Default Paragraph Font;}}",
        );
        let sheet = p.stylesheet();
        assert_eq!(sheet.len(), 3);

        let normal = sheet.get_by_name("Normal").unwrap();
        assert_eq!(normal.num, NORMAL_STYLE_NUM);
        assert_eq!(normal.next_par, NORMAL_STYLE_NUM);
        assert_eq!(normal.element_count(), 2);

        let heading = sheet.get(1).unwrap();
        assert_eq!(heading.name, "heading 1");
        assert_eq!(heading.based_on, Some(0));
        assert_eq!(heading.next_par, 0);
        let elements = heading.elements();
        assert_eq!(elements[0].minor, Minor::Bold);
        assert_eq!(elements[1].param, Some(32));
        assert_eq!(elements[1].text, "\\fs32");

        let font = sheet.get(10).unwrap();
        assert_eq!(font.style_type, StyleType::Character);
        assert!(font.additive);
    }

    #[test]
    fn test_nested_groups_are_skipped() {
        let p = parse("{\\stylesheet{\\s2{\\*\\keycode \\shift\\ctrl n}\\i Quote;}}");
        let quote = p.stylesheet().get(2).unwrap();
        assert_eq!(quote.name, "Quote");
        assert_eq!(quote.element_count(), 1);
    }

    #[test]
    fn test_missing_name_reports_start_line() {
        let mut p = RtfParser::new(&b"{\\stylesheet\n{\\s0 Normal;}\n{\\s1\\b;}}"[..]);
        let err = p.run().unwrap_err();
        let structural = err.as_structural().unwrap();
        assert_eq!(structural.line, 3);
        assert!(structural.message.contains("line 3"));
    }

    #[test]
    fn test_missing_number_for_custom_name_fails() {
        let mut p = RtfParser::new(&b"{\\stylesheet{\\b Fancy;}}"[..]);
        assert!(p.run().is_err());
    }

    #[test]
    fn test_standard_name_gets_default_number() {
        let p = parse("{\\stylesheet{Standard;}}");
        assert_eq!(p.stylesheet().get(NORMAL_STYLE_NUM).unwrap().name, "Standard");
    }

    #[test]
    fn test_missing_open_brace_fails() {
        let mut p = RtfParser::new(&b"{\\stylesheet\\s1 Heading;}"[..]);
        assert!(p.run().is_err());
    }

    #[test]
    fn test_body_follows_style_sheet() {
        let mut p = RtfParser::new(&b"{\\stylesheet{\\s0 Normal;}}A"[..]);
        let mut texts = Vec::new();
        while p.next_token().unwrap() != TokenClass::Eof {
            p.route_token().unwrap();
            if p.class() == TokenClass::Text {
                texts.push(p.byte());
            }
        }
        assert_eq!(texts, b"A");
    }
}
