use std::io;

use super::*;

use crate::error::ErrorKind;
use crate::interpreter::Interpreter;
use crate::primitive::ToSymbol;


fn run(src: &str) -> Result<Sexp, Error> {
    let mut interpreter = Interpreter::with_output(Box::new(io::sink()));
    interpreter.evaluate(src).map(|last| last.unwrap_or_default())
}

fn sexp(src: &str) -> Sexp {
    src.parse().unwrap()
}

fn lang_err(kind: LangError) -> Error {
    Error::no_cont(Box::new(kind))
}

#[test]
fn default_env_contents() {
    let env = default_env();
    for name in ["nil", "quote", "cond", "label", "progn", "lambda", "print", "eval", "+"].iter() {
        assert!(env.contains(&name.to_symbol_or_panic()), "{} unbound", name);
    }
    assert_eq!(env.lookup(&"nil".to_symbol_or_panic()), Some(&Sexp::Nil));
}

#[test]
fn quote_arity() {
    assert_eq!(run("(quote (a b))").unwrap(), sexp("(a b)"));
    assert_eq!(
        run("(quote a b)").unwrap_err(),
        lang_err(LangError::ArityMismatch {
            given: 2,
            expected: ExpectedCount::Exactly(1),
        })
    );
}

#[test]
fn cond_clauses() {
    assert_eq!(run("(cond (nil 1) (nil 2) (1 3))").unwrap(), sexp("3"));
    assert_eq!(run("(cond (nil 1))").unwrap(), Sexp::Nil);
    assert_eq!(run("(cond)").unwrap(), Sexp::Nil);
    // A clause without a body yields its test value.
    assert_eq!(run("(cond (nil) ('x))").unwrap(), sexp("x"));
    // A clause body is a sequence.
    assert_eq!(run("(cond (1 (label a 5) (+ a 1)))").unwrap(), sexp("6"));
    assert_eq!(
        run("(cond 1)").unwrap_err(),
        lang_err(LangError::InvalidArgument {
            given: sexp("1"),
            expected: Cow::Borrowed("cond clause (test body...)"),
        })
    );
}

#[test]
fn cond_short_circuits() {
    assert_eq!(
        run("(cond (1 'first) ((label fired 1) 'second)) fired").unwrap_err(),
        lang_err(LangError::UnboundSymbol("fired".to_symbol_or_panic()))
    );
}

#[test]
fn label_binds_after_eval() {
    assert_eq!(run("(label foo 1)").unwrap(), sexp("1"));
    assert_eq!(run("(label foo 1) foo").unwrap(), sexp("1"));

    let mut interpreter = Interpreter::with_output(Box::new(io::sink()));
    assert!(interpreter.evaluate("(label foo undefined)").is_err());
    assert!(!interpreter.env().contains(&"foo".to_symbol_or_panic()));

    assert_eq!(
        run("(label 1 2)").unwrap_err(),
        lang_err(LangError::InvalidArgument {
            given: sexp("1"),
            expected: Cow::Borrowed("Symbol"),
        })
    );
}

#[test]
fn progn_sequence() {
    assert_eq!(run("(progn 1 2 3)").unwrap(), sexp("3"));
    assert_eq!(run("(progn)").unwrap(), Sexp::Nil);
    assert_eq!(run("(progn (label a 1) (label b (+ a 1)) b)").unwrap(), sexp("2"));
}

#[test]
fn lambda_forms() {
    assert_eq!(run("((lambda (x) (+ x 1)) 2)").unwrap(), sexp("3"));
    assert_eq!(run("((lambda ()))").unwrap(), Sexp::Nil);
    assert_eq!(run("((lambda))").unwrap(), Sexp::Nil);
    assert_eq!(run("((lambda () 1 2))").unwrap(), sexp("2"));
    assert_eq!(
        run("(lambda (x x) x)").unwrap_err(),
        lang_err(LangError::InvalidArgument {
            given: sexp("x"),
            expected: Cow::Borrowed("unique name within argument list"),
        })
    );
    assert_eq!(
        run("(lambda (x 1) x)").unwrap_err(),
        lang_err(LangError::InvalidArgument {
            given: sexp("1"),
            expected: Cow::Borrowed("Symbol"),
        })
    );
}

#[test]
fn lambda_display() {
    assert_eq!(
        run("(lambda (x y) (+ x y))").unwrap().to_string(),
        "(lambda (x y) (+ x y))"
    );
    assert_eq!(run("(lambda ())").unwrap().to_string(), "(lambda ())");
}

#[test]
fn eval_twice() {
    assert_eq!(run("(eval '(+ 1 2))").unwrap(), sexp("3"));
    assert_eq!(run("(label x 'y) (label y 7) (eval x)").unwrap(), sexp("7"));
}

#[test]
fn quasiquote_templates() {
    assert_eq!(run("`(a b)").unwrap(), sexp("(a b)"));
    assert_eq!(run("`x").unwrap(), sexp("x"));
    assert_eq!(run("`(a ,(+ 1 2) c)").unwrap(), sexp("(a 3 c)"));
    assert_eq!(run("`(a (b ,(+ 1 1)))").unwrap(), sexp("(a (b 2))"));
    assert_eq!(run("`(a ,@'(1 2) c)").unwrap(), sexp("(a 1 2 c)"));
    assert_eq!(run("`(a ,@nil c)").unwrap(), sexp("(a c)"));
    assert_eq!(run("`(a . ,(+ 1 1))").unwrap(), sexp("(a . 2)"));
    assert_eq!(run("`,(+ 1 1)").unwrap(), sexp("2"));
    assert_eq!(run("`(a . b)").unwrap(), sexp("(a . b)"));
    assert_eq!(
        run("`(a ,@1)").unwrap_err(),
        lang_err(LangError::InvalidArgument {
            given: sexp("1"),
            expected: Cow::Borrowed("list to splice"),
        })
    );
}

#[test]
fn arithmetic() {
    assert_eq!(run("(+)").unwrap(), sexp("0"));
    assert_eq!(run("(+ 3 2)").unwrap(), sexp("5"));
    assert_eq!(run("(+ 1.2 3.4)").unwrap(), sexp("4.6"));
    assert_eq!(run("(+ 1 2.5)").unwrap(), sexp("3.5"));
    assert_eq!(run("(- 5)").unwrap(), sexp("-5"));
    assert_eq!(run("(- 10 1 2)").unwrap(), sexp("7"));
    assert_eq!(run("(*)").unwrap(), sexp("1"));
    assert_eq!(run("(* 2 3 4)").unwrap(), sexp("24"));
    assert_eq!(run("(/ 1 2)").unwrap(), sexp("0.5"));
    assert_eq!(run("(/ 6 3)").unwrap(), sexp("2.0"));
    assert_eq!(run("(/ 4)").unwrap(), sexp("0.25"));
}

#[test]
fn arithmetic_errors() {
    assert_eq!(
        run("(+ 1 'a)").unwrap_err(),
        lang_err(LangError::InvalidArgument {
            given: sexp("a"),
            expected: Cow::Borrowed("Number"),
        })
    );
    assert_eq!(
        run("(-)").unwrap_err(),
        lang_err(LangError::ArityMismatch {
            given: 0,
            expected: ExpectedCount::AtLeast(1),
        })
    );
    let overflow = run("(+ 9223372036854775807 1)").unwrap_err();
    let reified = overflow.kind().reify();
    let (kind, _) = reified.iter().nth(1).unwrap();
    assert_eq!(kind, &sexp("\"Invalid state\""));
}

#[test]
fn list_primitives() {
    assert_eq!(run("(car '(a b))").unwrap(), sexp("a"));
    assert_eq!(run("(cdr '(a b))").unwrap(), sexp("(b)"));
    assert_eq!(run("(car nil)").unwrap(), Sexp::Nil);
    assert_eq!(run("(cdr '())").unwrap(), Sexp::Nil);
    assert_eq!(run("(cons 1 '(2))").unwrap(), sexp("(1 2)"));
    assert_eq!(run("(cons 1 2)").unwrap(), sexp("(1 . 2)"));
    assert_eq!(
        run("(car 1)").unwrap_err(),
        lang_err(LangError::InvalidArgument {
            given: sexp("1"),
            expected: Cow::Borrowed("Cons or Nil"),
        })
    );
}

#[test]
fn exit_requests() {
    let mut interpreter = Interpreter::with_output(Box::new(io::sink()));
    assert_eq!(interpreter.evaluate("1 (exit) 2").unwrap(), Some(Sexp::Nil));
    assert!(interpreter.exit_requested());
}

#[test]
fn improper_args() {
    assert_eq!(
        run("(+ 1 . 2)").unwrap_err(),
        lang_err(LangError::InvalidSexp(sexp("(1 . 2)")))
    );
}
