//! Byte source underneath the tokenizer.
//!
//! Reads one byte at a time from a buffered reader, drops CR and LF while
//! keeping line/column bookkeeping, and holds a single pushed-back character.
//! The lexer reads the character after a backslash raw, since `\<CR>` and
//! `\<LF>` are paragraph marks.

use std::io::{self, BufRead, BufReader, Read};

pub(crate) struct CharSource<R> {
    reader: BufReader<R>,
    pushed: Option<u8>,
    line: usize,
    column: usize,
    after_cr: bool,
}

impl<R: Read> CharSource<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            pushed: None,
            line: 1,
            column: 0,
            after_cr: false,
        }
    }

    /// 1-based line of the last character read.
    #[inline]
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the last character read (0 before the first one).
    #[inline]
    pub(crate) fn column(&self) -> usize {
        self.column
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.reader.fill_buf()?.first().copied();
        if byte.is_some() {
            self.reader.consume(1);
        }
        Ok(byte)
    }

    /// Next significant character; CR and LF are skipped.
    ///
    /// CR, LF and CRLF each count as one line break.
    pub(crate) fn get_char(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.get_raw_char()? {
                Some(b'\r' | b'\n') => {},
                other => return Ok(other),
            }
        }
    }

    /// Next character including CR and LF, with line bookkeeping.
    ///
    /// The LF of a CRLF pair read here does not start another line when it
    /// is read later.
    pub(crate) fn get_raw_char(&mut self) -> io::Result<Option<u8>> {
        if let Some(c) = self.pushed.take() {
            return Ok(Some(c));
        }
        let Some(c) = self.read_byte()? else {
            return Ok(None);
        };
        match c {
            b'\r' => {
                self.new_line();
                self.after_cr = true;
            },
            b'\n' => {
                if !self.after_cr {
                    self.new_line();
                }
                self.after_cr = false;
            },
            _ => {
                self.after_cr = false;
                self.column += 1;
            },
        }
        Ok(Some(c))
    }

    /// Look at the next significant character without consuming it.
    pub(crate) fn peek_char(&mut self) -> io::Result<Option<u8>> {
        let c = self.get_char()?;
        if let Some(c) = c {
            self.unget_char(c);
        }
        Ok(c)
    }

    /// Push one character back; the slot holds a single character.
    #[inline]
    pub(crate) fn unget_char(&mut self, c: u8) {
        debug_assert!(self.pushed.is_none(), "character pushback slot is full");
        self.pushed = Some(c);
    }

    /// Read up to `len` bytes verbatim, without dropping line breaks.
    pub(crate) fn read_binary(&mut self, len: usize) -> io::Result<Vec<u8>> {
        let mut out = Vec::with_capacity(len.min(64 * 1024));
        if len == 0 {
            return Ok(out);
        }
        if let Some(c) = self.pushed.take() {
            out.push(c);
        }
        let remaining = (len - out.len()) as u64;
        (&mut self.reader).take(remaining).read_to_end(&mut out)?;
        self.column += out.len();
        Ok(out)
    }

    fn new_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(source: &mut CharSource<&[u8]>) -> Vec<u8> {
        let mut out = Vec::new();
        while let Some(c) = source.get_char().unwrap() {
            out.push(c);
        }
        out
    }

    #[test]
    fn test_line_breaks_are_elided() {
        let mut source = CharSource::new(&b"ab\r\ncd\nef\rg"[..]);
        assert_eq!(drain(&mut source), b"abcdefg");
        assert_eq!(source.line(), 4);
        assert_eq!(source.column(), 1);
    }

    #[test]
    fn test_blank_lines_count() {
        let mut source = CharSource::new(&b"a\n\n\nb"[..]);
        assert_eq!(source.get_char().unwrap(), Some(b'a'));
        assert_eq!(source.get_char().unwrap(), Some(b'b'));
        assert_eq!(source.line(), 4);
    }

    #[test]
    fn test_raw_read_keeps_line_breaks() {
        let mut source = CharSource::new(&b"a\r\nb"[..]);
        assert_eq!(source.get_char().unwrap(), Some(b'a'));
        assert_eq!(source.get_raw_char().unwrap(), Some(b'\r'));
        assert_eq!(source.line(), 2);
        // LF of the pair is elided without counting another line.
        assert_eq!(source.get_char().unwrap(), Some(b'b'));
        assert_eq!(source.line(), 2);
        assert_eq!(source.column(), 1);
    }

    #[test]
    fn test_pushback_and_peek() {
        let mut source = CharSource::new(&b"xy"[..]);
        assert_eq!(source.get_char().unwrap(), Some(b'x'));
        source.unget_char(b'x');
        assert_eq!(source.peek_char().unwrap(), Some(b'x'));
        assert_eq!(source.get_char().unwrap(), Some(b'x'));
        assert_eq!(source.get_char().unwrap(), Some(b'y'));
        assert_eq!(source.peek_char().unwrap(), None);
    }

    #[test]
    fn test_binary_keeps_line_breaks() {
        let mut source = CharSource::new(&b"\r\n\x00}rest"[..]);
        assert_eq!(source.read_binary(4).unwrap(), b"\r\n\x00}");
        assert_eq!(drain(&mut source), b"rest");
    }

    #[test]
    fn test_binary_short_read() {
        let mut source = CharSource::new(&b"ab"[..]);
        assert_eq!(source.read_binary(10).unwrap(), b"ab");
    }
}
