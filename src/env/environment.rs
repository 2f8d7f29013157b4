//! Symbol to value bindings for one call frame.

use log::trace;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::primitive::Symbol;
use crate::sexp::Sexp;


/// Mapping from Symbol to value, chained to the frame it extends.
///
/// An extension sees every binding of its ancestors, while its own bindings
/// (and rebindings) never leak back into them. The global frame has no
/// parent and is mutated in place by `label`.
#[derive(Default)]
pub struct Environment<'p> {
    bindings: HashMap<Symbol, Sexp>,
    parent: Option<&'p Environment<'p>>,
}

impl<'p> Environment<'p> {
    pub fn new() -> Environment<'static> {
        Environment {
            bindings: HashMap::new(),
            parent: None,
        }
    }

    /// New empty frame whose lookups fall back on self.
    pub fn extend(&self) -> Environment<'_> {
        Environment {
            bindings: HashMap::new(),
            parent: Some(self),
        }
    }

    pub fn lookup(&self, symbol: &Symbol) -> Option<&Sexp> {
        let mut env = Some(self);
        while let Some(curr) = env {
            if let Some(value) = curr.bindings.get(symbol) {
                trace!("Lookup {} -> {}", symbol, value);
                return Some(value);
            }
            env = curr.parent;
        }
        trace!("Lookup {} failed", symbol);
        None
    }

    /// Inserts or overwrites in this frame only.
    pub fn bind(&mut self, symbol: Symbol, value: Sexp) {
        trace!("Bind {} <- {}", symbol, value);
        self.bindings.insert(symbol, value);
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.lookup(symbol).is_some()
    }

    /// Every Symbol visible from this frame.
    pub fn symbols(&self) -> BTreeSet<Symbol> {
        let mut symbols = BTreeSet::new();
        let mut env = Some(self);
        while let Some(curr) = env {
            symbols.extend(curr.bindings.keys().cloned());
            env = curr.parent;
        }
        symbols
    }

    /// Number of frames from self to the global frame, inclusive.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut env = self.parent;
        while let Some(curr) = env {
            depth += 1;
            env = curr.parent;
        }
        depth
    }
}


impl<'p> fmt::Debug for Environment<'p> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Environment depth {}, {} local bindings]",
            self.depth(),
            self.bindings.len()
        )
    }
}


#[cfg(test)]
#[path = "./environment_test.rs"]
mod environment_test;
