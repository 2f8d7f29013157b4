use std::fmt;

use crate::continuation::Continuation;
use crate::sexp::Sexp;


/// Trace of active applications, innermost on top.
pub type ExecState = Continuation<ExecFrame>;

/// One active application, recorded by its (unevaluated) head.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecFrame {
    context: Sexp,
}

impl ExecFrame {
    pub fn new(context: Sexp) -> Self {
        Self { context }
    }

    /// Frame of top-level evaluation.
    pub fn root() -> Self {
        Self { context: Sexp::Nil }
    }

    pub fn context(&self) -> &Sexp {
        &self.context
    }
}

impl fmt::Display for ExecFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.context.is_nil() {
            write!(f, "[toplevel]")
        } else {
            write!(f, "{}", self.context)
        }
    }
}
