//! RTF tokenizer.
//!
//! Reads one lexical unit at a time from the character source and classifies
//! it through the symbol table. After classification the token passes a few
//! hooks that keep the decoder state in sync with the stream (text decoding,
//! `\ansicpg`, font codepages, group save/restore).

use super::error::RtfResult;
use super::parser::RtfParser;
use super::symbols::{Major, Minor, lookup};
use super::token::{Token, TokenClass};
use std::io::Read;

#[inline]
fn hex_value(c: u8) -> Option<u8> {
    (c as char).to_digit(16).map(|d| d as u8)
}

impl<R: Read> RtfParser<R> {
    /// Read the next token and return its class.
    ///
    /// A token pushed back with [`unget_token`](Self::unget_token) is
    /// returned first, without running the hooks a second time.
    pub fn next_token(&mut self) -> RtfResult<TokenClass> {
        self.class_dispatched = false;
        if let Some(token) = self.pending.take() {
            self.token = token;
            return Ok(self.token.class);
        }
        self.read_token()?;
        self.apply_hooks();
        Ok(self.token.class)
    }

    /// Push the current token back so the next read returns it again.
    ///
    /// Fails when a token is already pending or nothing was read yet.
    pub fn unget_token(&mut self) -> RtfResult<()> {
        if self.pending.is_some() {
            return Err(self.error("token already pending"));
        }
        if self.token.class == TokenClass::None {
            return Err(self.error("no token to unget"));
        }
        self.pending = Some(self.token.clone());
        Ok(())
    }

    /// Class of the next token, leaving it pending.
    pub fn peek_token(&mut self) -> RtfResult<TokenClass> {
        let class = self.next_token()?;
        self.unget_token()?;
        Ok(class)
    }

    /// Queue a synthesized token for the next read.
    pub(crate) fn push_token(&mut self, token: Token) -> RtfResult<()> {
        if self.pending.is_some() {
            return Err(self.error("token already pending"));
        }
        self.pending = Some(token);
        Ok(())
    }

    fn read_token(&mut self) -> RtfResult<()> {
        self.token.reset();
        let Some(c) = self.source.get_char()? else {
            self.token.class = TokenClass::Eof;
            return Ok(());
        };
        self.token.raw.push(c);
        match c {
            b'{' => self.set_group(Major::BeginGroup),
            b'}' => self.set_group(Major::EndGroup),
            b'\t' => {
                self.token.class = TokenClass::Control;
                self.token.major = Major::SpecialChar;
                self.token.minor = Minor::Tab;
            },
            b'\\' => self.read_control()?,
            _ => self.set_text(c),
        }
        Ok(())
    }

    fn set_group(&mut self, major: Major) {
        self.token.class = TokenClass::Group;
        self.token.major = major;
    }

    fn set_text(&mut self, byte: u8) {
        self.token.class = TokenClass::Text;
        self.token.byte = byte;
    }

    /// Control word or control symbol; the backslash is already consumed.
    ///
    /// The next character is read raw so `\<CR>` and `\<LF>` reach the
    /// symbol table as paragraph marks.
    fn read_control(&mut self) -> RtfResult<()> {
        let Some(c) = self.source.get_raw_char()? else {
            self.token.class = TokenClass::Eof;
            return Ok(());
        };
        self.token.raw.push(c);

        if !c.is_ascii_alphabetic() {
            return self.read_control_symbol(c);
        }

        let mut next = self.source.get_char()?;
        while let Some(l) = next.filter(u8::is_ascii_alphabetic) {
            self.token.raw.push(l);
            next = self.source.get_char()?;
        }

        let word = std::str::from_utf8(&self.token.raw[1..]).unwrap_or_default();
        match lookup(word) {
            Some(symbol) => {
                self.token.class = TokenClass::Control;
                self.token.major = symbol.major;
                self.token.minor = symbol.minor;
            },
            None => {
                self.token.class = TokenClass::Unknown;
                self.token.major = Major::Invalid;
                self.token.minor = Minor::Invalid;
            },
        }

        // Digits glued to \pngblip / \jpegblip are image data.
        if !matches!(self.token.minor, Minor::PngBlip | Minor::JpegBlip) {
            next = self.read_parameter(next)?;
        }

        match next {
            Some(b' ') | None => {},
            Some(c) => self.source.unget_char(c),
        }

        if self.token.minor == Minor::BinData
            && let Some(len) = self.token.param.and_then(|n| usize::try_from(n).ok())
        {
            self.token.binary = self.source.read_binary(len)?;
        }
        Ok(())
    }

    /// Parse an optional signed parameter starting at `next`; returns the
    /// character that terminated it.
    fn read_parameter(&mut self, mut next: Option<u8>) -> RtfResult<Option<u8>> {
        let mut negative = false;
        if next == Some(b'-') {
            self.token.raw.push(b'-');
            negative = true;
            next = self.source.get_char()?;
        }
        let mut value: Option<i32> = None;
        while let Some(d) = next.filter(u8::is_ascii_digit) {
            self.token.raw.push(d);
            let digit = i32::from(d - b'0');
            value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit));
            next = self.source.get_char()?;
        }
        self.token.param = value.map(|v| if negative { v.saturating_neg() } else { v });
        Ok(next)
    }

    fn read_control_symbol(&mut self, c: u8) -> RtfResult<()> {
        match c {
            b'\'' => self.read_hex_escape(),
            b'{' | b'}' | b'\\' | b':' => {
                self.set_text(c);
                Ok(())
            },
            _ => {
                let symbol = [c];
                match std::str::from_utf8(&symbol).ok().and_then(lookup) {
                    Some(symbol) => {
                        self.token.class = TokenClass::Control;
                        self.token.major = symbol.major;
                        self.token.minor = symbol.minor;
                    },
                    None => {
                        self.token.class = TokenClass::Unknown;
                        self.token.major = Major::Invalid;
                        self.token.minor = Minor::Invalid;
                    },
                }
                Ok(())
            },
        }
    }

    /// `\'XX`; a malformed escape yields an Unknown token.
    fn read_hex_escape(&mut self) -> RtfResult<()> {
        let mut value = 0u8;
        for _ in 0..2 {
            let Some(c) = self.source.get_char()? else {
                self.token.class = TokenClass::Eof;
                return Ok(());
            };
            match hex_value(c) {
                Some(digit) => {
                    self.token.raw.push(c);
                    value = value << 4 | digit;
                },
                None => {
                    self.source.unget_char(c);
                    self.token.major = Major::Invalid;
                    self.token.minor = Minor::Invalid;
                    return Ok(());
                },
            }
        }
        self.set_text(value);
        Ok(())
    }

    fn apply_hooks(&mut self) {
        match (self.token.class, self.token.major, self.token.minor) {
            (TokenClass::Text, ..) => {
                self.token.encoded = self.decoder.decode(&[self.token.byte]);
            },
            (TokenClass::Control, Major::Unicode, Minor::UnicodeAnsiCodepage) => {
                self.decoder.set_codepage_param(self.token.param);
            },
            (TokenClass::Control, Major::CharSet, minor) => {
                let codepage = match minor {
                    Minor::MacCharSet => 10000,
                    Minor::PcCharSet => 437,
                    Minor::PcaCharSet => 850,
                    _ => 1252,
                };
                self.decoder.set_codepage(codepage);
            },
            (TokenClass::Control, Major::CharAttr, Minor::FontNum) => {
                let codepage = self
                    .token
                    .param
                    .and_then(|num| self.fonts.get(num))
                    .and_then(|font| font.effective_codepage());
                if let Some(codepage) = codepage {
                    self.decoder.set_codepage(codepage);
                }
            },
            (TokenClass::Group, Major::BeginGroup, _) => self.decoder.push_group(),
            (TokenClass::Group, Major::EndGroup, _) => self.decoder.pop_group(),
            _ => {},
        }
    }
}
