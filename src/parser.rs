//! Module for parsing lispinho tokens into S-exps.
//!
//! Recursive descent over a lazy Tokenizer, one top-level form per call.
//! Lists are gathered iteratively, so only nesting (not length) recurses.

use derive_getters::Getters;
use log::trace;

use crate::error::{Error, ErrorKind};
use crate::primitive::{Symbol, ToLangString};
use crate::sexp::{ConsList, Sexp};
use crate::token::{Token, TokenKind, Tokenizer};

use self::ParseErrorReason::*;

pub const MAX_DEPTH: usize = 128;


pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    max_depth: usize,
    // Set once the Iterator impl has yielded an error or hit the end.
    done: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParseErrorReason {
    DepthOverflow,
    TrailingQuote,
    UnmatchedOpen,
    UnmatchedClose,
    IsolatedPeriod,
    NotPenultimatePeriod,
}

#[derive(Clone, Debug, Getters)]
pub struct ParseError {
    reason: ParseErrorReason,
    token: Token,
}


/// First form of `src`, or None if it holds no forms.
pub fn parse(src: &str) -> Result<Option<Sexp>, Error> {
    Parser::new(src).parse_sexp()
}

/// Every form of `src`, failing on the first malformed one.
pub fn parse_all(src: &str) -> Result<Vec<Sexp>, Error> {
    Parser::new(src).collect()
}


impl<'a> Parser<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            tokenizer: Tokenizer::new(src),
            max_depth: MAX_DEPTH,
            done: false,
        }
    }

    /// Parse the next top-level form. Ok(None) means the input is exhausted,
    /// which is distinct from successfully parsing Nil.
    pub fn parse_sexp(&mut self) -> Result<Option<Sexp>, Error> {
        let token = self.tokenizer.advance()?;
        let sexp = match token.token {
            TokenKind::End => return Ok(None),
            _ => self.parse_value(token, 0)?,
        };
        trace!("Parsed {}", sexp);
        Ok(Some(sexp))
    }

    fn parse_value(&mut self, token: Token, depth: usize) -> Result<Sexp, Error> {
        match token.token {
            TokenKind::LeftParen => self.parse_list(token, depth + 1),
            TokenKind::Primitive(primitive) => Ok(primitive.into()),
            TokenKind::Quote => self.parse_reader_macro(token, "quote", depth),
            TokenKind::Quasiquote => self.parse_reader_macro(token, "quasiquote", depth),
            TokenKind::Unquote => self.parse_reader_macro(token, "unquote", depth),
            TokenKind::Splice => self.parse_reader_macro(token, "splice", depth),
            TokenKind::RightParen => err(UnmatchedClose, token),
            TokenKind::Period => err(IsolatedPeriod, token),
            TokenKind::End => err(UnmatchedOpen, token),
        }
    }

    // 'x, `x, ,x, and ,@x become (quote x), (quasiquote x), and so on.
    fn parse_reader_macro(
        &mut self,
        token: Token,
        name: &'static str,
        depth: usize,
    ) -> Result<Sexp, Error> {
        if depth >= self.max_depth {
            return err(DepthOverflow, token);
        }
        let next = self.tokenizer.advance()?;
        if let TokenKind::End | TokenKind::RightParen = next.token {
            return err(TrailingQuote, token);
        }
        let value = self.parse_value(next, depth + 1)?;
        Ok(list!(Symbol::reserved(name), value,))
    }

    // Called after the opening paren has been consumed.
    fn parse_list(&mut self, open: Token, depth: usize) -> Result<Sexp, Error> {
        if depth > self.max_depth {
            return err(DepthOverflow, open);
        }

        let mut list = ConsList::new();
        loop {
            let token = self.tokenizer.advance()?;
            match token.token {
                TokenKind::RightParen => return Ok(list.release()),
                TokenKind::End => return err(UnmatchedOpen, open),
                TokenKind::Period => {
                    if list.is_empty() {
                        return err(IsolatedPeriod, token);
                    }
                    let tail = self.parse_improper_tail(&open, token, depth)?;
                    return Ok(list.release_with_tail(tail));
                }
                _ => list.append(self.parse_value(token, depth)?),
            }
        }
    }

    // Exactly one value must sit between a period and the closing paren.
    fn parse_improper_tail(
        &mut self,
        open: &Token,
        period: Token,
        depth: usize,
    ) -> Result<Sexp, Error> {
        let next = self.tokenizer.advance()?;
        let tail = match next.token {
            TokenKind::End => return err(UnmatchedOpen, open.clone()),
            TokenKind::RightParen | TokenKind::Period => {
                return err(NotPenultimatePeriod, period)
            }
            _ => self.parse_value(next, depth)?,
        };

        let close = self.tokenizer.advance()?;
        match close.token {
            TokenKind::RightParen => Ok(tail),
            TokenKind::End => err(UnmatchedOpen, open.clone()),
            _ => err(NotPenultimatePeriod, close),
        }
    }
}

fn err<T>(reason: ParseErrorReason, token: Token) -> Result<T, Error> {
    err_nost!(ParseError { reason, token })
}


impl<'a> Iterator for Parser<'a> {
    type Item = Result<Sexp, Error>;

    /// Stops after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.parse_sexp() {
            Ok(Some(sexp)) => Some(Ok(sexp)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}


impl ErrorKind for ParseError {
    fn reify(&self) -> Sexp {
        list!(
            "ParseError".to_lang_string(),
            format!("{:?}", self.reason).to_lang_string(),
            self.token.to_string().to_lang_string(),
        )
    }
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
