//! Module for breaking lispinho text into tokens.
//!
//! Tokens are produced lazily, one per call, from a borrowed source string.

use derive_getters::Getters;
use log::trace;
use std::str::Chars;

use super::token::{Token, TokenKind};
use crate::error::{Error, ErrorKind};
use crate::primitive::symbol::{is_symbol_char, is_symbol_start};
use crate::primitive::{LangString, Number, Primitive, Symbol, ToLangString};
use crate::sexp::Sexp;


/// Incremental scanner over a source string.
///
/// Once End has been produced, every further request produces End again.
pub struct Tokenizer<'a> {
    src: Chars<'a>,
    line: usize,
    col: usize,
    depth: usize,

    peeked: Option<Token>,
    // Set once End or an error has been yielded by the Iterator impl.
    fused: bool,
}

#[derive(Clone, Debug, Getters, PartialEq)]
pub struct TokenizeError {
    line: usize,
    col: usize,
    kind: TokenizeErrorKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenizeErrorKind {
    UnexpectedChar(char),
    InvalidNumber(String),
    UnterminatedString,
}


impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src: src.chars(),
            line: 1,
            col: 1,
            depth: 0,
            peeked: None,
            fused: false,
        }
    }

    /// Number of currently-unclosed parens among the tokens produced so far.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Current token, without consuming it.
    pub fn peek(&mut self) -> Result<&Token, Error> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.scan().map_err(|e| Error::no_cont(Box::new(e)))?,
        };
        Ok(self.peeked.insert(token))
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        self.next_token().map_err(|e| Error::no_cont(Box::new(e)))
    }

    pub fn next_token(&mut self) -> Result<Token, TokenizeError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.scan(),
        }
    }

    fn scan(&mut self) -> Result<Token, TokenizeError> {
        self.skip_atmosphere();

        let (line, col) = (self.line, self.col);
        let c = match self.bump() {
            Some(c) => c,
            None => {
                return Ok(Token {
                    token: TokenKind::End,
                    line,
                    col,
                })
            }
        };
        let err = |kind| TokenizeError { line, col, kind };

        let token = match c {
            '(' => {
                self.depth += 1;
                TokenKind::LeftParen
            }
            ')' => {
                self.depth = self.depth.saturating_sub(1);
                TokenKind::RightParen
            }
            '\'' => TokenKind::Quote,
            '`' => TokenKind::Quasiquote,
            ',' => {
                if self.peek_char() == Some('@') {
                    self.bump();
                    TokenKind::Splice
                } else {
                    TokenKind::Unquote
                }
            }
            '.' => TokenKind::Period,
            '"' => {
                let mut s = String::new();
                loop {
                    match self.bump() {
                        Some('"') => break,
                        Some(c) => s.push(c),
                        None => return Err(err(TokenizeErrorKind::UnterminatedString)),
                    }
                }
                TokenKind::Primitive(Primitive::LangString(LangString::new(s)))
            }
            c if starts_number(c, self.peek_char()) => {
                let mut s = c.to_string();
                while let Some(next) = self.peek_char() {
                    if !(next.is_ascii_digit() || next == '.') {
                        break;
                    }
                    s.push(next);
                    self.bump();
                }
                match s.parse::<Number>() {
                    Ok(num) => TokenKind::Primitive(Primitive::Number(num)),
                    Err(_) => return Err(err(TokenizeErrorKind::InvalidNumber(s))),
                }
            }
            c if is_symbol_start(c) => {
                let mut s = c.to_string();
                while let Some(next) = self.peek_char() {
                    if !is_symbol_char(next) {
                        break;
                    }
                    s.push(next);
                    self.bump();
                }
                match Symbol::new(s) {
                    Ok(symbol) => TokenKind::Primitive(Primitive::Symbol(symbol)),
                    Err(_) => return Err(err(TokenizeErrorKind::UnexpectedChar(c))),
                }
            }
            c => return Err(err(TokenizeErrorKind::UnexpectedChar(c))),
        };

        let token = Token { token, line, col };
        trace!("Token {}", token);
        Ok(token)
    }

    // Whitespace and comments.
    fn skip_atmosphere(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.bump();
            } else if c == ';' {
                while !matches!(self.peek_char(), Some('\n') | None) {
                    self.bump();
                }
            } else {
                break;
            }
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.src.next()?;
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn peek_char(&self) -> Option<char> {
        self.src.clone().next()
    }
}

fn starts_number(c: char, next: Option<char>) -> bool {
    c.is_ascii_digit() || (c == '-' && next.map_or(false, |n| n.is_ascii_digit()))
}


impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token, TokenizeError>;

    /// Yields every token up to and including End, or up to the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }
        let result = self.next_token();
        self.fused = matches!(
            result,
            Ok(Token {
                token: TokenKind::End,
                ..
            }) | Err(_)
        );
        Some(result)
    }
}


impl ErrorKind for TokenizeError {
    fn reify(&self) -> Sexp {
        let kind = match &self.kind {
            TokenizeErrorKind::UnexpectedChar(c) => format!("Unexpected char `{}'", c),
            TokenizeErrorKind::InvalidNumber(s) => format!("Invalid number {}", s),
            TokenizeErrorKind::UnterminatedString => "Unterminated string".to_string(),
        };
        list!(
            "TokenizeError".to_lang_string(),
            kind.to_lang_string(),
            Number::Integer(self.line as i64),
            Number::Integer(self.col as i64),
        )
    }
}


#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
