//! Top-level driver: reads forms from source and evaluates them against one
//! persistent global environment.

use log::{debug, info};
use std::io::{self, Write};

use super::evaluator::Evaluator;
use crate::builtins::default_env;
use crate::env::Environment;
use crate::error::Error;
use crate::parser::Parser;
use crate::sexp::Sexp;


#[derive(Debug)]
pub struct Interpreter {
    env: Environment<'static>,
    evaluator: Evaluator,
}

/// Lazily evaluates each top-level form of a source string.
///
/// Evaluation errors are yielded and evaluation continues with the next
/// form. Tokenize and parse errors are yielded and end the iteration, as
/// does an `exit` request.
pub struct RunIter<'a, 'i> {
    parser: Parser<'a>,
    interpreter: &'i mut Interpreter,
}


impl Interpreter {
    /// Interpreter whose print output goes to stdout.
    pub fn new() -> Self {
        Self::with_output(Box::new(io::stdout()))
    }

    pub fn with_output(out: Box<dyn Write>) -> Self {
        info!("Creating interpreter");
        Self {
            env: default_env(),
            evaluator: Evaluator::new(out),
        }
    }

    pub fn env(&self) -> &Environment<'static> {
        &self.env
    }
    pub fn env_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }
    pub fn evaluator_mut(&mut self) -> &mut Evaluator {
        &mut self.evaluator
    }

    pub fn exit_requested(&self) -> bool {
        self.evaluator.exit_requested()
    }

    /// Evaluate one already-parsed form in the global environment.
    pub fn eval(&mut self, sexp: &Sexp) -> Result<Sexp, Error> {
        debug!("Evaluating {}", sexp);
        self.evaluator.eval(sexp, &mut self.env)
    }

    /// Evaluate every form of `src`, stopping at the first error.
    ///
    /// Returns the value of the last form, or None if `src` holds no forms.
    pub fn evaluate(&mut self, src: &str) -> Result<Option<Sexp>, Error> {
        let mut last = None;
        for result in self.run(src) {
            last = Some(result?);
        }
        Ok(last)
    }

    pub fn run<'a>(&mut self, src: &'a str) -> RunIter<'a, '_> {
        RunIter {
            parser: Parser::new(src),
            interpreter: self,
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}


impl<'a, 'i> Iterator for RunIter<'a, 'i> {
    type Item = Result<Sexp, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.interpreter.exit_requested() {
            return None;
        }
        Some(match self.parser.next()? {
            Ok(sexp) => self.interpreter.eval(&sexp),
            Err(err) => Err(err),
        })
    }
}
