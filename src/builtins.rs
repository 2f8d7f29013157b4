//! Builtin special forms and functions, and the global environment seeded
//! with them.
//!
//! Every builtin receives its argument list unevaluated; those acting as
//! ordinary functions evaluate their arguments themselves, left to right.

use lazy_static::lazy_static;
use std::borrow::Cow;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::io::Write;

use crate::env::Environment;
use crate::error::Error;
use crate::interpreter::{Evaluator, ExpectedCount, LangError};
use crate::primitive::{BuiltIn, Number, Procedure, Symbol};
use crate::printer::Printer;
use crate::sexp::{Cons, ConsList, HeapSexp, Sexp};


macro_rules! builtins {
    [$($name:literal => $fun:expr),+ $(,)?] => {
        {
            let mut m = HashMap::new();
            $(
                m.insert($name, BuiltIn::new($name, $fun));
            )+
            m
        }
    };
}

lazy_static! {
    pub static ref BUILTINS: HashMap<&'static str, BuiltIn> = builtins![
        "quote" => quote,
        "cond" => cond,
        "label" => label,
        "progn" => progn,
        "lambda" => lambda,
        "print" => print,
        "eval" => eval,
        "quasiquote" => quasiquote,
        "+" => add,
        "-" => sub,
        "*" => mul,
        "/" => div,
        "car" => car,
        "cdr" => cdr,
        "cons" => cons,
        "exit" => exit,
    ];
}

/// Fresh global environment: `nil` plus every builtin.
pub fn default_env() -> Environment<'static> {
    let mut env = Environment::new();
    env.bind(Symbol::reserved("nil"), Sexp::Nil);
    for (name, builtin) in BUILTINS.iter() {
        env.bind(Symbol::reserved(*name), (*builtin).into());
    }
    env
}


pub fn quote(args: &Sexp, _env: &mut Environment, evaluator: &mut Evaluator) -> Result<Sexp, Error> {
    let args = evaluator.exact_args(args, 1)?;
    Ok(args[0].clone())
}

/// (cond (test body...)...)
///
/// Value of the body of the first clause whose test is non-Nil, or of the
/// test itself when that clause has no body. Nil if no test passes.
pub fn cond(args: &Sexp, env: &mut Environment, evaluator: &mut Evaluator) -> Result<Sexp, Error> {
    for clause in evaluator.arg_list(args)? {
        let clause = match clause {
            Sexp::Cons(clause) => clause,
            _ => {
                return err!(
                    evaluator,
                    LangError::InvalidArgument {
                        given: clause.clone(),
                        expected: Cow::Borrowed("cond clause (test body...)"),
                    }
                )
            }
        };

        let test = evaluator.eval(clause.car(), env)?;
        if test.is_nil() {
            continue;
        }
        if clause.cdr().is_nil() {
            return Ok(test);
        }
        return evaluator.eval_sequence(clause.cdr(), env);
    }
    Ok(Sexp::Nil)
}

/// (label symbol expr)
///
/// Binds the value of expr in the current environment. Nothing is bound if
/// evaluating expr fails.
pub fn label(args: &Sexp, env: &mut Environment, evaluator: &mut Evaluator) -> Result<Sexp, Error> {
    let args = evaluator.exact_args(args, 2)?;
    let symbol = match <&Symbol>::try_from(args[0]) {
        Ok(symbol) => symbol.clone(),
        Err(given) => {
            return err!(
                evaluator,
                LangError::InvalidArgument {
                    given: given.clone(),
                    expected: Cow::Borrowed("Symbol"),
                }
            )
        }
    };

    let value = evaluator.eval(args[1], env)?;
    env.bind(symbol, value.clone());
    Ok(value)
}

pub fn progn(args: &Sexp, env: &mut Environment, evaluator: &mut Evaluator) -> Result<Sexp, Error> {
    evaluator.eval_sequence(args, env)
}

/// (lambda (params...) body...)
pub fn lambda(args: &Sexp, _env: &mut Environment, evaluator: &mut Evaluator) -> Result<Sexp, Error> {
    let (params, body) = match args {
        Sexp::Nil => (args, args),
        Sexp::Cons(cons) => (cons.car(), cons.cdr()),
        Sexp::Primitive(_) => return err!(evaluator, LangError::InvalidSexp(args.clone())),
    };
    // Validated now rather than on each call.
    evaluator.arg_list(body)?;

    let mut symbols = Vec::<Symbol>::new();
    for param in evaluator.arg_list(params)? {
        let symbol = match <&Symbol>::try_from(param) {
            Ok(symbol) => symbol,
            Err(given) => {
                return err!(
                    evaluator,
                    LangError::InvalidArgument {
                        given: given.clone(),
                        expected: Cow::Borrowed("Symbol"),
                    }
                )
            }
        };
        if symbols.contains(symbol) {
            return err!(
                evaluator,
                LangError::InvalidArgument {
                    given: param.clone(),
                    expected: Cow::Borrowed("unique name within argument list"),
                }
            );
        }
        symbols.push(symbol.clone());
    }
    Ok(Procedure::new(symbols, body.clone()).into())
}

/// (print expr)
///
/// Writes the value of expr, without a trailing newline. Strings are written
/// without their quotes.
pub fn print(args: &Sexp, env: &mut Environment, evaluator: &mut Evaluator) -> Result<Sexp, Error> {
    let args = evaluator.exact_args(args, 1)?;
    let value = evaluator.eval(args[0], env)?;

    let out = evaluator.out();
    Printer::raw().write(&value, &mut &mut *out)?;
    out.flush()?;
    Ok(Sexp::Nil)
}

/// (eval expr)
///
/// Evaluates the value of expr.
pub fn eval(args: &Sexp, env: &mut Environment, evaluator: &mut Evaluator) -> Result<Sexp, Error> {
    let args = evaluator.exact_args(args, 1)?;
    let expr = evaluator.eval(args[0], env)?;
    evaluator.eval(&expr, env)
}

/// (quasiquote template)
///
/// The template, unevaluated except for (unquote expr) forms, which are
/// replaced by their value, and (splice expr) list elements, which are
/// replaced by the elements of their (list) value.
pub fn quasiquote(
    args: &Sexp,
    env: &mut Environment,
    evaluator: &mut Evaluator,
) -> Result<Sexp, Error> {
    let args = evaluator.exact_args(args, 1)?;
    fill_template(args[0], env, evaluator)
}

fn fill_template(
    template: &Sexp,
    env: &mut Environment,
    evaluator: &mut Evaluator,
) -> Result<Sexp, Error> {
    let mut list = ConsList::new();
    let mut curr = template;
    loop {
        let cons = match curr {
            Sexp::Cons(cons) => cons,
            Sexp::Nil => return Ok(list.release()),
            Sexp::Primitive(_) => return Ok(list.release_with_tail(curr.clone())),
        };

        // Also covers an unquote in tail position, as in `(a . ,b).
        if let Some(expr) = reader_macro_arg(curr, "unquote") {
            let value = evaluator.eval(expr, env)?;
            return Ok(list.release_with_tail(value));
        }

        if let Some(expr) = reader_macro_arg(cons.car(), "splice") {
            let value = evaluator.eval(expr, env)?;
            if !value.is_proper_list() {
                return err!(
                    evaluator,
                    LangError::InvalidArgument {
                        given: value,
                        expected: Cow::Borrowed("list to splice"),
                    }
                );
            }
            for (elem, _) in &value {
                list.append(elem.clone());
            }
        } else {
            list.append(fill_template(cons.car(), env, evaluator)?);
        }
        curr = cons.cdr();
    }
}

// x if sexp is (name x).
fn reader_macro_arg<'a>(sexp: &'a Sexp, name: &str) -> Option<&'a Sexp> {
    let cons = <&Cons>::try_from(sexp).ok()?;
    let head = <&Symbol>::try_from(cons.car()).ok()?;
    let rest = <&Cons>::try_from(cons.cdr()).ok()?;
    if head.as_str() == name && rest.cdr().is_nil() {
        Some(rest.car())
    } else {
        None
    }
}


/// Evaluated arguments, all of which must be Numbers.
fn numbers(args: &Sexp, env: &mut Environment, evaluator: &mut Evaluator) -> Result<Vec<Number>, Error> {
    let mut nums = Vec::new();
    for value in evaluator.evlis(args, env)? {
        match Number::try_from(value) {
            Ok(num) => nums.push(num),
            Err(given) => {
                return err!(
                    evaluator,
                    LangError::InvalidArgument {
                        given,
                        expected: Cow::Borrowed("Number"),
                    }
                )
            }
        }
    }
    Ok(nums)
}

fn overflow(evaluator: &Evaluator, op: &'static str) -> Error {
    Error::with_cont(
        evaluator.exec_state().clone(),
        Box::new(LangError::InvalidState {
            actual: Cow::Owned(format!("integer overflow in {}", op)),
            expected: Cow::Borrowed("result within 64-bit integer range"),
        }),
    )
}

fn at_least_one(evaluator: &Evaluator, nums: &[Number]) -> Result<(), Error> {
    if nums.is_empty() {
        return err!(
            evaluator,
            LangError::ArityMismatch {
                given: 0,
                expected: ExpectedCount::AtLeast(1),
            }
        );
    }
    Ok(())
}

/// Sum of the arguments; 0 with none. Any Float argument makes a Float sum.
pub fn add(args: &Sexp, env: &mut Environment, evaluator: &mut Evaluator) -> Result<Sexp, Error> {
    let mut sum = Number::default();
    for num in numbers(args, env, evaluator)? {
        sum = sum.checked_add(num).ok_or_else(|| overflow(evaluator, "+"))?;
    }
    Ok(sum.into())
}

/// Negation of a single argument, else the first minus the rest.
pub fn sub(args: &Sexp, env: &mut Environment, evaluator: &mut Evaluator) -> Result<Sexp, Error> {
    let nums = numbers(args, env, evaluator)?;
    at_least_one(evaluator, &nums)?;
    if nums.len() == 1 {
        return Ok(nums[0]
            .checked_neg()
            .ok_or_else(|| overflow(evaluator, "-"))?
            .into());
    }

    let mut diff = nums[0];
    for num in &nums[1..] {
        diff = diff.checked_sub(*num).ok_or_else(|| overflow(evaluator, "-"))?;
    }
    Ok(diff.into())
}

pub fn mul(args: &Sexp, env: &mut Environment, evaluator: &mut Evaluator) -> Result<Sexp, Error> {
    let mut product = Number::Integer(1);
    for num in numbers(args, env, evaluator)? {
        product = product
            .checked_mul(num)
            .ok_or_else(|| overflow(evaluator, "*"))?;
    }
    Ok(product.into())
}

/// Always a Float: reciprocal of a single argument, else the first divided
/// by the rest.
pub fn div(args: &Sexp, env: &mut Environment, evaluator: &mut Evaluator) -> Result<Sexp, Error> {
    let nums = numbers(args, env, evaluator)?;
    at_least_one(evaluator, &nums)?;
    if nums.len() == 1 {
        return Ok(Number::Integer(1).div(nums[0]).into());
    }

    let quotient = nums[1..].iter().fold(nums[0], |acc, num| acc.div(*num));
    Ok(quotient.into())
}


fn single_list(
    args: &Sexp,
    env: &mut Environment,
    evaluator: &mut Evaluator,
) -> Result<Option<Cons>, Error> {
    let args = evaluator.exact_args(args, 1)?;
    match evaluator.eval(args[0], env)? {
        Sexp::Cons(cons) => Ok(Some(cons)),
        Sexp::Nil => Ok(None),
        given => err!(
            evaluator,
            LangError::InvalidArgument {
                given,
                expected: Cow::Borrowed("Cons or Nil"),
            }
        ),
    }
}

/// First element of a list; Nil for Nil.
pub fn car(args: &Sexp, env: &mut Environment, evaluator: &mut Evaluator) -> Result<Sexp, Error> {
    Ok(match single_list(args, env, evaluator)? {
        Some(cons) => *cons.consume().0,
        None => Sexp::Nil,
    })
}

/// Rest of a list; Nil for Nil.
pub fn cdr(args: &Sexp, env: &mut Environment, evaluator: &mut Evaluator) -> Result<Sexp, Error> {
    Ok(match single_list(args, env, evaluator)? {
        Some(cons) => *cons.consume().1,
        None => Sexp::Nil,
    })
}

pub fn cons(args: &Sexp, env: &mut Environment, evaluator: &mut Evaluator) -> Result<Sexp, Error> {
    evaluator.exact_args(args, 2)?;
    let mut values = evaluator.evlis(args, env)?.into_iter();
    let car = values.next().unwrap_or_default();
    let cdr = values.next().unwrap_or_default();
    Ok(Cons::new(HeapSexp::new(car), HeapSexp::new(cdr)).into())
}

/// Asks the front end to stop once the current form is done.
pub fn exit(args: &Sexp, _env: &mut Environment, evaluator: &mut Evaluator) -> Result<Sexp, Error> {
    evaluator.exact_args(args, 0)?;
    evaluator.request_exit();
    Ok(Sexp::Nil)
}


#[cfg(test)]
#[path = "./builtins_test.rs"]
mod builtins_test;
