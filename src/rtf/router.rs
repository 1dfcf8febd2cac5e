//! Token routing and group skipping.

use super::error::RtfResult;
use super::parser::RtfParser;
use super::symbols::Major;
use super::token::TokenClass;
use log::debug;
use std::io::Read;

impl<R: Read> RtfParser<R> {
    /// Dispatch the current token.
    ///
    /// A destination keyword with a registered handler runs that handler
    /// first; the handler reads the rest of its group through this parser.
    /// The class callback then sees whatever token is current afterwards.
    /// Each token read reaches its class callback at most once, so a handler
    /// that routes its terminal token itself is not dispatched twice.
    pub fn route_token(&mut self) -> RtfResult<()> {
        if self.token.class == TokenClass::Control && self.token.major == Major::Destination {
            if let Some(handler) = self.destinations.get(&self.token.minor).cloned() {
                debug!(
                    "destination {:?} at line {}, column {}",
                    self.token.minor,
                    self.line(),
                    self.column()
                );
                handler(self)?;
            }
        }
        self.dispatch_class()
    }

    fn dispatch_class(&mut self) -> RtfResult<()> {
        if self.class_dispatched {
            return Ok(());
        }
        self.class_dispatched = true;
        match self.class_callbacks[self.token.class.index()].clone() {
            Some(callback) => callback(self),
            None => Ok(()),
        }
    }

    /// Consume tokens up to and including the `}` closing the current group.
    ///
    /// Stops quietly at end of input.
    pub fn skip_group(&mut self) -> RtfResult<()> {
        let mut level = 1usize;
        loop {
            match self.next_token()? {
                TokenClass::Eof => return Ok(()),
                TokenClass::Group if self.token.is_begin_group() => level += 1,
                TokenClass::Group => {
                    level -= 1;
                    if level == 0 {
                        return Ok(());
                    }
                },
                _ => {},
            }
        }
    }

    /// Read and route every token until end of input.
    pub fn run(&mut self) -> RtfResult<()> {
        while self.next_token()? != TokenClass::Eof {
            self.route_token()?;
        }
        Ok(())
    }
}
