//! Representation of errors which can be reified as S-exps.
//!
//! General error mechanism that can use any ErrorKind. Reification allows
//! errors from every stage (tokenizing, parsing, evaluation) to be reported
//! and compared as ordinary Lisp lists.

use dyn_clone::DynClone;
use std::fmt;

use crate::interpreter::exec_state::ExecState;
use crate::sexp::Sexp;


/// Creates a stateful Error wrapped in Err.
///
/// Called as:  err!(evaluator, kind).
#[macro_export]
macro_rules! err {
    ($evaluator:expr, $($kind:tt)+) => {
        Err($crate::error::Error::with_cont(
            $evaluator.exec_state().clone(),
            Box::new($($kind)+),
        ))
    };
}

/// Creates a stateless Error wrapped in Err.
///
/// Stateful errors are preferred whenever an evaluator is at hand.
#[macro_export]
macro_rules! err_nost {
    ($($kind:tt)+) => {
        Err($crate::error::Error::no_cont(Box::new($($kind)+)))
    };
}


pub type ErrorCont = ExecState;

#[derive(Clone)]
pub struct Error {
    cont: Option<ErrorCont>,
    kind: Box<dyn ErrorKind>,
}

pub trait ErrorKind: fmt::Debug + DynClone /* fmt::Display auto-impled below */ {
    fn reify(&self) -> Sexp;
}


impl Error {
    /// Prefer using err! for convenience.
    pub fn with_cont(cont: ErrorCont, kind: Box<dyn ErrorKind>) -> Self {
        Self {
            cont: Some(cont),
            kind,
        }
    }

    /// Prefer using stateful Error when possible.
    pub fn no_cont(kind: Box<dyn ErrorKind>) -> Self {
        Self { cont: None, kind }
    }

    pub fn kind(&self) -> &dyn ErrorKind {
        &*self.kind
    }

    pub fn cont(&self) -> Option<&ErrorCont> {
        self.cont.as_ref()
    }
}

impl PartialEq for Error {
    /// Compare kind.
    fn eq(&self, other: &Self) -> bool {
        self.kind().reify() == other.kind().reify()
    }
}

impl fmt::Display for dyn ErrorKind + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reify())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.kind())?;
        if let Some(cont) = &self.cont {
            for frame in cont.iter() {
                write!(f, "{}; ", frame)?;
            }
        }
        Ok(())
    }
}


impl std::error::Error for Error {}

dyn_clone::clone_trait_object!(ErrorKind);
