use std::borrow::Cow;
use std::fmt;

use self::ExpectedCount::*;
use self::LangError::*;
use crate::error::ErrorKind;
use crate::primitive::{Number, Symbol, ToLangString};
use crate::sexp::Sexp;


/// Errors raised while evaluating.
#[derive(Clone, Debug)]
pub enum LangError {
    ArityMismatch {
        given: usize,
        expected: ExpectedCount,
    },
    InvalidArgument {
        given: Sexp,
        expected: Cow<'static, str>,
    },
    InvalidSexp(Sexp),
    InvalidState {
        actual: Cow<'static, str>,
        expected: Cow<'static, str>,
    },
    UnboundSymbol(Symbol),
    DepthOverflow(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExpectedCount {
    Exactly(usize),
    AtLeast(usize),
}


impl ErrorKind for LangError {
    fn reify(&self) -> Sexp {
        let inner = match self {
            ArityMismatch { given, expected } => list!(
                "Arity mismatch".to_lang_string(),
                Number::Integer(*given as i64),
                expected.to_string().to_lang_string(),
            ),
            InvalidArgument { given, expected } => list!(
                "Invalid argument".to_lang_string(),
                given.clone(),
                expected.to_lang_string(),
            ),
            InvalidSexp(sexp) => list!("Invalid sexp".to_lang_string(), sexp.clone(),),
            InvalidState { actual, expected } => list!(
                "Invalid state".to_lang_string(),
                actual.to_lang_string(),
                expected.to_lang_string(),
            ),
            UnboundSymbol(symbol) => list!("Unbound symbol".to_lang_string(), symbol.clone(),),
            DepthOverflow(depth) => list!(
                "Depth overflow".to_lang_string(),
                Number::Integer(*depth as i64),
            ),
        };
        inner.push_front("LangError".to_lang_string())
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exactly(exactly) => write!(f, "{}", exactly),
            AtLeast(minimum) => write!(f, "at least {}", minimum),
        }
    }
}
