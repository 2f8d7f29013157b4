//! lispinho: a minimal Lisp.
//!
//! Source text is tokenized lazily, read into cons-cell S-exps, and
//! evaluated against a persistent global environment seeded with the
//! builtins. Values print back in their list notation.
//!
//! Note that the library does *not* setup logging; clients should take care
//! of that. See: https://github.com/rust-lang/log#in-executables.


#[macro_use]
pub mod error;
#[macro_use]
pub mod sexp;

pub mod builtins;
pub mod continuation;
pub mod env;
pub mod interpreter;
pub mod parser;
pub mod primitive;
pub mod printer;
pub mod std_error;
pub mod token;

pub use interpreter::{Interpreter, RunIter};

pub mod prelude {
    pub use crate::env::Environment;
    pub use crate::error::{Error, ErrorKind};
    pub use crate::interpreter::{Evaluator, ExpectedCount, Interpreter, LangError};
    pub use crate::primitive::prelude::*;
    pub use crate::printer::Printer;
    pub use crate::sexp::{Cons, ConsList, HeapSexp, Sexp};
    pub use crate::std_error::StdError;
    // Macros.
    pub use crate::{err, err_nost};
}
