use rustyline::completion::{Candidate, Completer};
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hint, Hinter};
use rustyline::line_buffer::LineBuffer;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::collections::BTreeSet;

use crate::primitive::symbol::is_symbol_char;
use crate::primitive::Symbol;


// Rustyline Helper for CliStream.
pub struct CliHelper {
    symbols: BTreeSet<Symbol>,
}

pub struct CliCandidate {
    symbol: Symbol,
}

impl CliHelper {
    pub fn new(symbols: BTreeSet<Symbol>) -> Self {
        Self { symbols }
    }

    pub fn set_symbols(&mut self, symbols: BTreeSet<Symbol>) {
        self.symbols = symbols;
    }

    fn symbols_with_prefix(&self, prefix: &str) -> Vec<Symbol> {
        self.symbols
            .iter()
            .filter(|symbol| symbol.as_str().starts_with(prefix))
            .cloned()
            .collect()
    }

    fn word_bounds(&self, line: &str, pos: usize) -> (usize, usize) {
        let mut start: usize = 0;
        let mut end: usize = line.len();
        for (i, c) in line.char_indices() {
            if !is_symbol_char(c) {
                if i < pos {
                    start = i + c.len_utf8();
                } else {
                    end = i;
                    break;
                }
            }
        }
        (start, end)
    }
}


impl Completer for CliHelper {
    type Candidate = CliCandidate;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, end) = self.word_bounds(line, pos);
        let symbols = self.symbols_with_prefix(&line[start..end]);
        Ok((
            0,
            symbols
                .into_iter()
                .map(|symbol| CliCandidate { symbol })
                .collect(),
        ))
    }

    fn update(&self, line: &mut LineBuffer, _: usize, elected: &str) {
        let (start, end) = self.word_bounds(line.as_str(), line.pos());
        line.delete_range(start..end);
        line.insert_str(start, elected);
        line.set_pos(start + elected.len());
    }
}


impl Helper for CliHelper {}
impl Hinter for CliHelper {
    type Hint = CliCandidate;
}
impl Highlighter for CliHelper {}
impl Validator for CliHelper {}


impl Candidate for CliCandidate {
    fn display(&self) -> &str {
        self.symbol.as_str()
    }

    fn replacement(&self) -> &str {
        self.symbol.as_str()
    }
}

impl Hint for CliCandidate {
    fn display(&self) -> &str {
        self.symbol.as_str()
    }

    fn completion(&self) -> Option<&str> {
        Some(self.symbol.as_str())
    }
}
