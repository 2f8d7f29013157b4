//! Module for constructing lists as S-exps front-to-back.
//!
//! Elements are buffered and linked once, on release, so appending is O(1)
//! and no partially-built list is ever observable.

use super::cons::Cons;
use super::sexp::{HeapSexp, Sexp};


#[derive(Debug, Default)]
pub struct ConsList {
    elems: Vec<Sexp>,
}

impl ConsList {
    pub fn new() -> ConsList {
        ConsList::default()
    }

    pub fn append<T: Into<Sexp>>(&mut self, val: T) {
        self.elems.push(val.into());
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Proper list of the appended elements; Nil if none were appended.
    pub fn release(self) -> Sexp {
        self.release_with_tail(Sexp::Nil)
    }

    /// List whose final cdr is `tail`. With no elements, this is `tail` itself.
    pub fn release_with_tail(self, tail: Sexp) -> Sexp {
        self.elems.into_iter().rev().fold(tail, |cdr, car| {
            Cons::new(HeapSexp::new(car), HeapSexp::new(cdr)).into()
        })
    }
}
