//! Representation of primitives.

use std::fmt;

#[macro_use]
mod try_from_helper;

pub mod builtin;
pub mod number;
pub mod procedure;
pub mod string;
pub mod symbol;

pub use self::builtin::BuiltIn;
pub use self::number::Number;
pub use self::procedure::Procedure;
pub use self::string::{LangString, ToLangString};
pub use self::symbol::{Symbol, ToSymbol};

pub mod prelude {
    pub use super::{BuiltIn, LangString, Number, Primitive, Procedure, Symbol};
    pub use super::{ToLangString, ToSymbol};
}


/// Every non-list value.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Number(Number),
    Symbol(Symbol),
    LangString(LangString),
    BuiltIn(BuiltIn),
    Procedure(Procedure),
}


impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Number(num) => write!(f, "{}", num),
            Primitive::Symbol(s) => write!(f, "{}", s),
            Primitive::LangString(s) => write!(f, "{}", s),
            Primitive::BuiltIn(b) => write!(f, "{}", b),
            Primitive::Procedure(proc) => write!(f, "{}", proc),
        }
    }
}
