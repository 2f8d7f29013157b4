//! Representation of builtin methods.

use std::fmt;

use crate::env::Environment;
use crate::error::Error;
use crate::interpreter::Evaluator;
use crate::sexp::Sexp;


/// Builtins receive their argument list unevaluated, so special forms and
/// ordinary functions share one calling convention.
pub type BuiltInFn = fn(&Sexp, &mut Environment, &mut Evaluator) -> Result<Sexp, Error>;

#[derive(Clone, Copy)]
pub struct BuiltIn {
    name: &'static str,
    fun: BuiltInFn,
}

impl BuiltIn {
    pub fn new(name: &'static str, fun: BuiltInFn) -> BuiltIn {
        BuiltIn { name, fun }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call(
        &self,
        args: &Sexp,
        env: &mut Environment,
        evaluator: &mut Evaluator,
    ) -> Result<Sexp, Error> {
        (self.fun)(args, env, evaluator)
    }
}

impl PartialEq for BuiltIn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{} @ {:p}]", self.name, &self.fun)
    }
}

impl fmt::Display for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{}]", self.name)
    }
}


impl_try_from!(BuiltIn;
               Sexp       ->  BuiltIn,
               ref Sexp   ->  ref BuiltIn,
               Primitive  ->  BuiltIn,
);
