//! Active codepage tracking for text decoding.
//!
//! Every `{` saves the codepage in effect and every `}` restores it, so font
//! changes and `\ansicpg` inside a group do not leak out of it. The decoder
//! itself is resolved lazily and dropped whenever the codepage changes.

use crate::common::encoding::{CodepageDecoder, codepage_decoder};
use encoding_rs::WINDOWS_1252;
use log::{trace, warn};

#[derive(Debug, Clone)]
pub(crate) struct DecoderState {
    codepage: u16,
    default_codepage: u16,
    /// `None` means "rebuild on next use"
    decoder: Option<CodepageDecoder>,
    stack: Vec<u16>,
}

impl DecoderState {
    pub(crate) fn new(default_codepage: u16) -> Self {
        Self {
            codepage: default_codepage,
            default_codepage,
            decoder: None,
            stack: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn codepage(&self) -> u16 {
        self.codepage
    }

    /// Number of saved codepages (open groups).
    #[cfg(test)]
    fn depth(&self) -> usize {
        self.stack.len()
    }

    #[cfg(test)]
    fn is_decoder_built(&self) -> bool {
        self.decoder.is_some()
    }

    /// Switch codepage, invalidating the decoder if it changed.
    pub(crate) fn set_codepage(&mut self, codepage: u16) {
        if codepage != self.codepage {
            trace!("codepage {} -> {}", self.codepage, codepage);
            self.codepage = codepage;
            self.decoder = None;
        }
    }

    /// Apply an `\ansicpg` parameter; out-of-range values select the default.
    pub(crate) fn set_codepage_param(&mut self, param: Option<i32>) {
        let codepage = param
            .and_then(|p| u16::try_from(p).ok())
            .unwrap_or(self.default_codepage);
        self.set_codepage(codepage);
    }

    pub(crate) fn push_group(&mut self) {
        self.stack.push(self.codepage);
    }

    pub(crate) fn pop_group(&mut self) {
        let restored = self.stack.pop().unwrap_or(self.default_codepage);
        self.set_codepage(restored);
    }

    /// Decoder for the active codepage, built on demand.
    fn decoder(&mut self) -> CodepageDecoder {
        if let Some(decoder) = self.decoder {
            return decoder;
        }
        let decoder = codepage_decoder(self.codepage).unwrap_or_else(|| {
            warn!(
                "codepage {} is not supported, decoding as windows-1252",
                self.codepage
            );
            CodepageDecoder::Encoding(WINDOWS_1252)
        });
        self.decoder = Some(decoder);
        decoder
    }

    /// Decode bytes with the active codepage; invalid input becomes U+FFFD.
    pub(crate) fn decode(&mut self, bytes: &[u8]) -> String {
        self.decoder().decode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoder_is_lazy_and_invalidated() {
        let mut state = DecoderState::new(1252);
        assert!(!state.is_decoder_built());
        assert_eq!(state.decode(&[0xE9]), "é");
        assert!(state.is_decoder_built());

        state.set_codepage(1251);
        assert!(!state.is_decoder_built());
        assert_eq!(state.decode(&[0xE9]), "й");
    }

    #[test]
    fn test_same_codepage_keeps_decoder() {
        let mut state = DecoderState::new(1252);
        state.decode(b"a");
        state.set_codepage(1252);
        assert!(state.is_decoder_built());
    }

    #[test]
    fn test_group_restore() {
        let mut state = DecoderState::new(1252);
        state.push_group();
        state.set_codepage(932);
        state.push_group();
        state.set_codepage(1251);
        state.pop_group();
        assert_eq!(state.codepage(), 932);
        state.pop_group();
        assert_eq!(state.codepage(), 1252);
        assert_eq!(state.depth(), 0);
    }

    #[test]
    fn test_pop_on_empty_stack_resets_to_default() {
        let mut state = DecoderState::new(1252);
        state.set_codepage(1250);
        state.pop_group();
        assert_eq!(state.codepage(), 1252);
    }

    #[test]
    fn test_ansicpg_out_of_range() {
        let mut state = DecoderState::new(1252);
        state.set_codepage_param(Some(1251));
        assert_eq!(state.codepage(), 1251);
        state.set_codepage_param(Some(70000));
        assert_eq!(state.codepage(), 1252);
        state.set_codepage_param(Some(-1));
        assert_eq!(state.codepage(), 1252);
        state.set_codepage_param(None);
        assert_eq!(state.codepage(), 1252);
    }

    #[test]
    fn test_oem_codepage_is_latin() {
        let mut state = DecoderState::new(1252);
        state.set_codepage(437);
        assert_eq!(state.decode(&[0x82]), "é");
        state.set_codepage(850);
        assert_eq!(state.decode(&[0x90]), "É");
    }

    #[test]
    fn test_unsupported_codepage_falls_back() {
        let mut state = DecoderState::new(1252);
        state.set_codepage(42);
        assert_eq!(state.decode(b"A"), "A");
    }
}
