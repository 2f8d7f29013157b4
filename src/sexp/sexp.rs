//! Module for representing S-exps.

use std::convert::TryFrom;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use super::cons::Cons;
use super::cons_list::ConsList;
use super::fmt_io_adapter::FmtIoAdapter;
use crate::error::Error;
use crate::parser::Parser;
use crate::primitive::prelude::*;


/// S-exp on the heap.
///
/// Cons cells own their slots through HeapSexps, which keeps Sexp itself a
/// fixed-size value.
pub type HeapSexp = Box<Sexp>;

#[derive(Clone, PartialEq)]
pub enum Sexp {
    Primitive(Primitive),
    Cons(Cons),
    Nil,
}

pub struct SexpIter<'a> {
    current: Option<&'a Sexp>,
}


impl Sexp {
    pub fn is_nil(&self) -> bool {
        matches!(self, Sexp::Nil)
    }

    pub fn iter(&self) -> SexpIter {
        SexpIter {
            current: Some(self),
        }
    }

    /// Cons `front` onto self.
    pub fn push_front<T: Into<Sexp>>(self, front: T) -> Sexp {
        Cons::new(HeapSexp::new(front.into()), HeapSexp::new(self)).into()
    }

    /// Number of elements, ignoring any improper tail.
    pub fn len(&self) -> usize {
        self.iter().filter(|(_, from_cons)| *from_cons).count()
    }

    pub fn is_empty(&self) -> bool {
        self.is_nil()
    }

    /// Whether this is Nil or a Cons chain ending in Nil.
    pub fn is_proper_list(&self) -> bool {
        self.iter().all(|(_, from_cons)| from_cons)
    }

    pub fn write_list<W, F, P>(
        &self,
        w: &mut W,
        depth: usize,
        write_primitive: &mut F,
        write_paren: &mut P,
    ) -> std::io::Result<()>
    where
        W: std::io::Write,
        F: FnMut(&mut W, &Primitive, usize) -> std::io::Result<()>,
        P: FnMut(&mut W, &str, usize) -> std::io::Result<()>,
    {
        const MAX_DISPLAY_DEPTH: usize = 128;

        let cons = match self {
            Sexp::Primitive(primitive) => return write_primitive(w, primitive, depth),
            Sexp::Nil => {
                write_paren(w, "(", depth)?;
                return write_paren(w, ")", depth);
            }
            Sexp::Cons(cons) => cons,
        };
        if depth >= MAX_DISPLAY_DEPTH {
            return write!(w, "(..)");
        }

        write_paren(w, "(", depth)?;
        cons.car()
            .write_list(w, depth + 1, write_primitive, write_paren)?;
        for (val, from_cons) in cons.cdr() {
            if from_cons {
                write!(w, " ")?;
            } else {
                write!(w, " . ")?;
            }
            val.write_list(w, depth + 1, write_primitive, write_paren)?;
        }
        write_paren(w, ")", depth)
    }
}


impl<'a> Iterator for SexpIter<'a> {
    // (Sexp, from_cons).
    //
    // If from_cons is false, the Sexp is the non-Nil tail of an improper list
    // (or a lone Primitive) rather than the car of a Cons. It is necessarily
    // the last element.
    type Item = (&'a Sexp, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let sexp = self.current.take()?;
        match sexp {
            Sexp::Cons(cons) => {
                self.current = Some(cons.cdr());
                Some((cons.car(), true))
            }
            Sexp::Nil => None,
            Sexp::Primitive(_) => Some((sexp, false)),
        }
    }
}

impl<'a> IntoIterator for &'a Sexp {
    // (Sexp, from_cons). See impl Iterator above for more info.
    type Item = (&'a Sexp, bool);
    type IntoIter = SexpIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}

impl Default for Sexp {
    fn default() -> Self {
        Sexp::Nil
    }
}

impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.write_list(
            &mut FmtIoAdapter::new(f),
            0,
            &mut |writer, primitive, _depth| write!(writer, "{}", primitive),
            &mut |writer, paren, _depth| write!(writer, "{}", paren),
        ) {
            Ok(()) => Ok(()),
            Err(_) => Err(fmt::Error),
        }
    }
}


// TryFrom<Sexp-like> impls.
impl TryFrom<Sexp> for Primitive {
    type Error = Sexp;

    fn try_from(value: Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(primitive) = value {
            Ok(primitive)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Sexp> for &'a Primitive {
    type Error = &'a Sexp;

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(primitive) = value {
            Ok(primitive)
        } else {
            Err(value)
        }
    }
}


// From<T> impls.
impl FromStr for Sexp {
    type Err = Error;

    /// Reads the first form of `s`; empty input reads as Nil.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Parser::new(s).parse_sexp()?.unwrap_or_default())
    }
}

impl<T: Into<Sexp>> From<Vec<T>> for Sexp {
    fn from(vec: Vec<T>) -> Self {
        let mut list = ConsList::new();
        for value in vec {
            list.append(value);
        }
        list.release()
    }
}

impl From<HeapSexp> for Sexp {
    fn from(sexp: HeapSexp) -> Self {
        *sexp
    }
}

impl From<Primitive> for Sexp {
    fn from(primitive: Primitive) -> Self {
        Sexp::Primitive(primitive)
    }
}

impl From<Cons> for Sexp {
    fn from(cons: Cons) -> Self {
        Sexp::Cons(cons)
    }
}

impl From<Cons> for HeapSexp {
    fn from(cons: Cons) -> Self {
        HeapSexp::new(Sexp::Cons(cons))
    }
}

// Impl From<T> over Primitive subtypes.
macro_rules! sexp_from {
    ($from:ident, $($tail:tt)*) => {
        impl From<$from> for Sexp {
            fn from(elem: $from) -> Self {
                Sexp::Primitive(Primitive::$from(elem))
            }
        }
        impl From<$from> for HeapSexp {
            fn from(elem: $from) -> Self {
                Self::new(Sexp::Primitive(Primitive::$from(elem)))
            }
        }
        sexp_from!($($tail)*);
    };
    () => {};
}

sexp_from!(Number, Symbol, LangString, BuiltIn, Procedure,);


#[cfg(test)]
#[path = "./sexp_test.rs"]
mod sexp_test;
