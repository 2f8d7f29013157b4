use log::info;
use rustyline::error::ReadlineError;
use rustyline::Editor;
use std::collections::BTreeSet;

use super::cli_helper::CliHelper;
use super::token::TokenKind;
use super::tokenizer::{TokenizeErrorKind, Tokenizer};
use crate::primitive::Symbol;


/// Line-editing source of complete top-level input.
///
/// Each item is a chunk of source with balanced parens (or one the tokenizer
/// rejects, so the error can be reported by evaluation). Lines keep being
/// read while a list or string is still open.
pub struct CliStream {
    editor: Editor<CliHelper>,

    curr_expr: String,
}

enum Completeness {
    Complete,
    // Depth of unclosed parens (at least 1 while inside a string).
    Open(usize),
}

impl CliStream {
    pub fn new(symbols: BTreeSet<Symbol>) -> CliStream {
        let mut editor = Editor::<CliHelper>::new();
        editor.set_helper(Some(CliHelper::new(symbols)));

        CliStream {
            editor,
            curr_expr: String::default(),
        }
    }

    /// Refresh the symbols offered for tab completion.
    pub fn set_symbols(&mut self, symbols: BTreeSet<Symbol>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.set_symbols(symbols);
        }
    }

    fn completeness(&self) -> Completeness {
        let mut tokenizer = Tokenizer::new(&self.curr_expr);
        loop {
            match tokenizer.next_token() {
                Ok(token) if token.token == TokenKind::End => break,
                Ok(_) => continue,
                Err(err) if *err.kind() == TokenizeErrorKind::UnterminatedString => {
                    return Completeness::Open(std::cmp::max(tokenizer.depth(), 1));
                }
                Err(_) => return Completeness::Complete,
            }
        }
        match tokenizer.depth() {
            0 => Completeness::Complete,
            depth => Completeness::Open(depth),
        }
    }
}


impl Iterator for CliStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let line = match self.completeness() {
                Completeness::Open(depth) if !self.curr_expr.is_empty() => {
                    self.editor.readline(&format!("..{}", "  ".repeat(depth)))
                }
                _ => self.editor.readline("> "),
            };

            match line {
                Ok(line) => {
                    if !self.curr_expr.is_empty() {
                        self.curr_expr.push('\n');
                    }
                    self.curr_expr += &line;
                    if let Completeness::Open(_) = self.completeness() {
                        continue;
                    }

                    let expr = std::mem::take(&mut self.curr_expr);
                    if expr.trim().is_empty() {
                        continue;
                    }
                    self.editor.add_history_entry(expr.as_str());
                    return Some(expr);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    // Cancels an expression mid-read.
                    self.curr_expr.clear();
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    info!("End of interactive input");
                    return None;
                }
                Err(err) => {
                    println!("[Readline Error]: {:?}", err);
                    println!();
                    self.curr_expr.clear();
                    continue;
                }
            }
        }
    }
}
