use std::io;

use crate::error::{Error, ErrorKind};
use crate::primitive::LangString;
use crate::sexp::Sexp;


/// Encapsulation of Errors in rust's std module.
#[derive(Clone, Debug)]
pub enum StdError {
    // io::Error is not Clone, so only its rendering is kept.
    Io(io::ErrorKind, String),
}

impl ErrorKind for StdError {
    fn reify(&self) -> Sexp {
        let inner = match self {
            Self::Io(kind, message) => list!(
                LangString::new("IoError"),
                LangString::new(format!("{:?}", kind)),
                LangString::new(message),
            ),
        };
        inner.push_front(LangString::new("StdError"))
    }
}

/// Allow for io::Errors to be used seamlessly with lispinho Errors.
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::no_cont(Box::new(StdError::Io(err.kind(), err.to_string())))
    }
}
