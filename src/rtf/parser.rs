//! The RTF reader: tokenizer state, decoded tables and callback registries.
//!
//! [`RtfParser`] owns everything a parse needs. Tokenization lives in the
//! lexer module, dispatch in the router, and the built-in sub-parsers in
//! `destinations`; all of them extend this type through `impl` blocks or take
//! `&mut RtfParser` as their only argument.

use super::charset::DecoderState;
use super::destinations;
use super::error::{RtfError, RtfResult, StructuralError};
use super::options::ParserOptions;
use super::picture::Picture;
use super::source::CharSource;
use super::stylesheet::StyleSheet;
use super::symbols::{Major, Minor};
use super::token::{Token, TokenClass};
use super::types::{ColorTable, FontTable};
use std::collections::HashMap;
use std::io::Read;
use std::rc::Rc;

/// Callback invoked with the parser positioned on the token that caused it.
///
/// Destination handlers consume their group through the same parser; class
/// callbacks usually only inspect the current token.
pub type Handler<R> = Rc<dyn Fn(&mut RtfParser<R>) -> RtfResult<()>>;

/// Streaming RTF tokenizer with pluggable destination sub-parsers.
///
/// # Examples
///
/// ```rust
/// use rtfkit::rtf::{RtfParser, TokenClass};
///
/// let mut parser = RtfParser::new(&b"{\\rtf1 Hi}"[..]);
/// let mut text = String::new();
/// while parser.next_token().unwrap() != TokenClass::Eof {
///     if parser.class() == TokenClass::Text {
///         text.push_str(parser.encoded_text());
///     }
/// }
/// assert_eq!(text, "Hi");
/// ```
pub struct RtfParser<R> {
    pub(crate) source: CharSource<R>,
    pub(crate) token: Token,
    /// Single-slot token pushback
    pub(crate) pending: Option<Token>,
    /// Set once the current token went through its class callback
    pub(crate) class_dispatched: bool,
    pub(crate) decoder: DecoderState,
    options: ParserOptions,
    pub(crate) fonts: FontTable,
    pub(crate) colors: ColorTable,
    pub(crate) stylesheet: StyleSheet,
    pub(crate) picture: Option<Picture>,
    pub(crate) class_callbacks: [Option<Handler<R>>; TokenClass::COUNT],
    pub(crate) destinations: HashMap<Minor, Handler<R>>,
}

impl<R: Read + 'static> RtfParser<R> {
    /// Parser with default options and the built-in destination handlers.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ParserOptions::default())
    }

    pub fn with_options(reader: R, options: ParserOptions) -> Self {
        let mut parser = Self {
            source: CharSource::new(reader),
            token: Token::default(),
            pending: None,
            class_dispatched: false,
            decoder: DecoderState::new(options.default_codepage),
            options,
            fonts: FontTable::new(),
            colors: ColorTable::new(),
            stylesheet: StyleSheet::new(),
            picture: None,
            class_callbacks: Default::default(),
            destinations: HashMap::new(),
        };
        if parser.options.install_default_destinations {
            parser.install_default_destinations();
        }
        parser
    }

    /// Register the built-in handlers for `\*`, `\fonttbl`, `\colortbl`,
    /// `\stylesheet`, `\info`, `\pict` and `\object`, replacing any handler
    /// already set for those keywords.
    pub fn install_default_destinations(&mut self) {
        self.set_destination(Minor::OptDest, destinations::read_optional_destination);
        self.set_destination(Minor::FontTbl, destinations::read_font_table);
        self.set_destination(Minor::ColorTbl, destinations::read_color_table);
        self.set_destination(Minor::StyleSheet, destinations::read_style_sheet);
        self.set_destination(Minor::Info, destinations::read_info_group);
        self.set_destination(Minor::Pict, destinations::read_picture);
        self.set_destination(Minor::Object, destinations::read_object);
    }
}

impl<R: Read> RtfParser<R> {
    /// Register a callback for every routed token of `class`.
    pub fn set_class_callback<F>(&mut self, class: TokenClass, callback: F)
    where
        F: Fn(&mut RtfParser<R>) -> RtfResult<()> + 'static,
    {
        self.class_callbacks[class.index()] = Some(Rc::new(callback));
    }

    pub fn clear_class_callback(&mut self, class: TokenClass) {
        self.class_callbacks[class.index()] = None;
    }

    pub fn class_callback(&self, class: TokenClass) -> Option<Handler<R>> {
        self.class_callbacks[class.index()].clone()
    }

    /// Register the sub-parser for a destination keyword.
    pub fn set_destination<F>(&mut self, minor: Minor, handler: F)
    where
        F: Fn(&mut RtfParser<R>) -> RtfResult<()> + 'static,
    {
        self.destinations.insert(minor, Rc::new(handler));
    }

    pub fn clear_destination(&mut self, minor: Minor) {
        self.destinations.remove(&minor);
    }

    /// Currently registered handler for a destination keyword, e.g. to wrap it.
    pub fn destination(&self, minor: Minor) -> Option<Handler<R>> {
        self.destinations.get(&minor).cloned()
    }

    /// The current token.
    #[inline]
    pub fn token(&self) -> &Token {
        &self.token
    }

    #[inline]
    pub fn class(&self) -> TokenClass {
        self.token.class
    }

    #[inline]
    pub fn major(&self) -> Major {
        self.token.major
    }

    #[inline]
    pub fn minor(&self) -> Minor {
        self.token.minor
    }

    #[inline]
    pub fn param(&self) -> Option<i32> {
        self.token.param
    }

    #[inline]
    pub fn byte(&self) -> u8 {
        self.token.byte
    }

    #[inline]
    pub fn raw_text(&self) -> &[u8] {
        &self.token.raw
    }

    #[inline]
    pub fn encoded_text(&self) -> &str {
        &self.token.encoded
    }

    #[inline]
    pub fn binary(&self) -> &[u8] {
        &self.token.binary
    }

    /// Line of the last character read (1-based).
    #[inline]
    pub fn line(&self) -> usize {
        self.source.line()
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.source.column()
    }

    /// Codepage used to decode the next Text token.
    #[inline]
    pub fn codepage(&self) -> u16 {
        self.decoder.codepage()
    }

    #[inline]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    #[inline]
    pub fn fonts(&self) -> &FontTable {
        &self.fonts
    }

    /// Font table, e.g. to pre-register fonts of a fragment without `\fonttbl`.
    #[inline]
    pub fn fonts_mut(&mut self) -> &mut FontTable {
        &mut self.fonts
    }

    #[inline]
    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    #[inline]
    pub fn stylesheet(&self) -> &StyleSheet {
        &self.stylesheet
    }

    /// Most recently completed picture.
    #[inline]
    pub fn picture(&self) -> Option<&Picture> {
        self.picture.as_ref()
    }

    #[inline]
    pub fn take_picture(&mut self) -> Option<Picture> {
        self.picture.take()
    }

    /// Structural error at the current position.
    pub(crate) fn error(&self, message: impl Into<String>) -> RtfError {
        self.error_at(self.line(), self.column(), message)
    }

    pub(crate) fn error_at(&self, line: usize, column: usize, message: impl Into<String>) -> RtfError {
        StructuralError {
            line,
            column,
            token: self.token.snapshot(),
            message: message.into(),
        }
        .into()
    }
}
