//! Evaluation of S-exps against an Environment.

use derivative::Derivative;
use log::debug;
use std::borrow::Cow;
use std::io::Write;

use super::exec_state::{ExecFrame, ExecState};
use super::lang_error::{ExpectedCount, LangError};
use crate::env::Environment;
use crate::error::Error;
use crate::primitive::{Primitive, Procedure};
use crate::sexp::{Cons, Sexp};

/// Default limit on nested applications.
pub const MAX_EVAL_DEPTH: usize = 256;


#[derive(Derivative)]
#[derivative(Debug)]
pub struct Evaluator {
    // Sink of the print builtin.
    #[derivative(Debug = "ignore")]
    out: Box<dyn Write>,

    exec_state: ExecState,
    max_depth: usize,
    exit_requested: bool,
}


impl Evaluator {
    pub fn new(out: Box<dyn Write>) -> Self {
        Self {
            out,
            exec_state: ExecState::new(ExecFrame::root()),
            max_depth: MAX_EVAL_DEPTH,
            exit_requested: false,
        }
    }

    pub fn exec_state(&self) -> &ExecState {
        &self.exec_state
    }

    pub fn out(&mut self) -> &mut dyn Write {
        self.out.as_mut()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    /// Nil and non-Symbol Primitives evaluate to themselves, Symbols to their
    /// binding, and Cons cells to the application of their head.
    pub fn eval(&mut self, sexp: &Sexp, env: &mut Environment) -> Result<Sexp, Error> {
        match sexp {
            Sexp::Nil => Ok(Sexp::Nil),
            Sexp::Primitive(Primitive::Symbol(symbol)) => match env.lookup(symbol) {
                Some(value) => Ok(value.clone()),
                None => err!(self, LangError::UnboundSymbol(symbol.clone())),
            },
            Sexp::Primitive(_) => Ok(sexp.clone()),
            Sexp::Cons(cons) => self.apply(cons, env),
        }
    }

    /// Evaluates each element of `body` in order, returning the last value
    /// (Nil for an empty body).
    pub fn eval_sequence(&mut self, body: &Sexp, env: &mut Environment) -> Result<Sexp, Error> {
        let mut last = Sexp::Nil;
        for (expr, from_cons) in body {
            if !from_cons {
                return err!(self, LangError::InvalidSexp(body.clone()));
            }
            last = self.eval(expr, env)?;
        }
        Ok(last)
    }

    /// Evaluated elements of the proper list `args`.
    pub fn evlis(&mut self, args: &Sexp, env: &mut Environment) -> Result<Vec<Sexp>, Error> {
        let mut values = Vec::with_capacity(args.len());
        for (arg, from_cons) in args {
            if !from_cons {
                return err!(self, LangError::InvalidSexp(args.clone()));
            }
            values.push(self.eval(arg, env)?);
        }
        Ok(values)
    }

    /// Unevaluated elements of the proper list `args`.
    pub fn arg_list<'a>(&self, args: &'a Sexp) -> Result<Vec<&'a Sexp>, Error> {
        let mut list = Vec::new();
        for (arg, from_cons) in args {
            if !from_cons {
                return err!(self, LangError::InvalidSexp(args.clone()));
            }
            list.push(arg);
        }
        Ok(list)
    }

    /// Unevaluated elements of `args`, which must number exactly `count`.
    pub fn exact_args<'a>(&self, args: &'a Sexp, count: usize) -> Result<Vec<&'a Sexp>, Error> {
        let list = self.arg_list(args)?;
        if list.len() != count {
            return err!(
                self,
                LangError::ArityMismatch {
                    given: list.len(),
                    expected: ExpectedCount::Exactly(count),
                }
            );
        }
        Ok(list)
    }

    fn apply(&mut self, cons: &Cons, env: &mut Environment) -> Result<Sexp, Error> {
        // The root frame does not count as an application.
        if self.exec_state.depth() > self.max_depth {
            return err!(self, LangError::DepthOverflow(self.max_depth));
        }

        let head = self.eval(cons.car(), env)?;
        self.exec_state.push(ExecFrame::new(cons.car().clone()));
        let result = match &head {
            Sexp::Primitive(Primitive::BuiltIn(builtin)) => {
                debug!("Calling {}", builtin);
                builtin.call(cons.cdr(), env, self)
            }
            Sexp::Primitive(Primitive::Procedure(procedure)) => {
                debug!("Calling procedure {}", cons.car());
                self.call_procedure(procedure, cons.cdr(), env)
            }
            _ => err!(
                self,
                LangError::InvalidArgument {
                    given: head.clone(),
                    expected: Cow::Borrowed("BuiltIn or Procedure"),
                }
            ),
        };
        // Errors have already captured the frame.
        self.exec_state.pop();
        result
    }

    /// Binds the evaluated `args` to the parameters of `procedure` in an
    /// extension of the caller's environment, then evaluates its body there.
    fn call_procedure(
        &mut self,
        procedure: &Procedure,
        args: &Sexp,
        env: &mut Environment,
    ) -> Result<Sexp, Error> {
        let given = self.arg_list(args)?.len();
        if given != procedure.arity() {
            return err!(
                self,
                LangError::ArityMismatch {
                    given,
                    expected: ExpectedCount::Exactly(procedure.arity()),
                }
            );
        }

        let values = self.evlis(args, env)?;
        let mut local = env.extend();
        for (param, value) in procedure.params().iter().zip(values) {
            local.bind(param.clone(), value);
        }
        self.eval_sequence(procedure.body(), &mut local)
    }
}
