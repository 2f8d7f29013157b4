use derive_getters::Getters;
use std::fmt;
use std::rc::Rc;

use super::{Primitive, Symbol};
use crate::sexp::{Cons, ConsList, HeapSexp, Sexp};


/// User-defined closure created by `lambda`.
///
/// Holds only the formal parameters and the body; it is applied in an
/// extension of the *caller's* environment. Both parts are shared so that
/// copying a Procedure out of an environment is cheap.
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct Procedure {
    params: Rc<Vec<Symbol>>,
    body: Rc<Sexp>,
}


impl Procedure {
    /// `body` is a proper list of expressions (or Nil).
    pub fn new(params: Vec<Symbol>, body: Sexp) -> Procedure {
        Procedure {
            params: Rc::new(params),
            body: Rc::new(body),
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Structure equivalent to the `lambda` form which created this.
    pub fn reify(&self) -> Sexp {
        let mut params = ConsList::new();
        for param in self.params.iter() {
            params.append(param.clone());
        }
        let tail = Cons::new(HeapSexp::new(params.release()), HeapSexp::new((*self.body).clone()));
        Sexp::from(tail).push_front(Symbol::reserved("lambda"))
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reify())
    }
}


impl_try_from!(Procedure;
               Sexp       ->  Procedure,
               ref Sexp   ->  ref Procedure,
               Primitive  ->  Procedure,
);
