use super::*;

use crate::primitive::{Number, ToLangString, ToSymbol};


fn sym(name: &str) -> Sexp {
    name.to_symbol_or_panic().into()
}

#[test]
fn vec_into_sexp() {
    let expected: Sexp = "(test ing)".parse().unwrap();
    let v = vec!["test".to_symbol_or_panic(), "ing".to_symbol_or_panic()];
    assert_eq!(<Sexp>::from(v), expected);
    assert_eq!(<Sexp>::from(Vec::<Symbol>::new()), Sexp::Nil);
}

#[test]
fn non_cons() {
    let s: Sexp = "(1 2 3 . 4)".parse().unwrap();
    let mut iter = s.iter();
    assert_eq!(iter.next().unwrap(), (&Number::Integer(1).into(), true));
    assert_eq!(iter.next().unwrap(), (&Number::Integer(2).into(), true));
    assert_eq!(iter.next().unwrap(), (&Number::Integer(3).into(), true));
    assert_eq!(iter.next().unwrap(), (&Number::Integer(4).into(), false));
    assert_eq!(iter.next(), None);
    assert!(!s.is_proper_list());
    assert_eq!(s.len(), 3);
}

#[test]
fn nil_iter() {
    assert_eq!(Sexp::Nil.iter().next(), None);
    assert!(Sexp::Nil.is_proper_list());
    assert_eq!(Sexp::Nil.len(), 0);
}

#[test]
fn list_macro() {
    let built = list!(sym("a"), (sym("b"), Number::Integer(2),), "c".to_lang_string(),);
    let expected: Sexp = "(a (b 2) \"c\")".parse().unwrap();
    assert_eq!(built, expected);
    assert_eq!(list!(), Sexp::Nil);
}

#[test]
fn push_front() {
    let tail: Sexp = "(b c)".parse().unwrap();
    assert_eq!(tail.push_front(sym("a")), "(a b c)".parse().unwrap());
    assert_eq!(Sexp::Nil.push_front(sym("a")), "(a)".parse().unwrap());
}

#[test]
fn release_with_tail() {
    let mut list = ConsList::new();
    list.append(sym("a"));
    list.append(sym("b"));
    assert_eq!(list.len(), 2);
    assert_eq!(
        list.release_with_tail(sym("c")),
        "(a b . c)".parse().unwrap()
    );
    assert_eq!(ConsList::new().release_with_tail(sym("c")), sym("c"));
}

#[test]
fn display_canonical() {
    let cases = [
        ("()", "()"),
        ("(a b c)", "(a b c)"),
        ("(a . b)", "(a . b)"),
        ("(a b . c)", "(a b . c)"),
        ("(a . (b . (c . ())))", "(a b c)"),
        ("'x", "(quote x)"),
        ("`(a ,b ,@c)", "(quasiquote (a (unquote b) (splice c)))"),
        ("(1 -2 3.5 4.0)", "(1 -2 3.5 4.0)"),
        ("(\"hi there\" ())", "(\"hi there\" ())"),
        ("((a) (b (c)))", "((a) (b (c)))"),
    ];
    for (src, printed) in cases.iter() {
        let sexp: Sexp = src.parse().unwrap();
        assert_eq!(sexp.to_string(), *printed);
    }
}

#[test]
fn display_reparse() {
    for src in ["(x (y z) \"s\" 1 2.5)", "(lambda (x) (+ x 1))", "((()))"].iter() {
        let sexp: Sexp = src.parse().unwrap();
        let reparsed: Sexp = sexp.to_string().parse().unwrap();
        assert_eq!(sexp, reparsed);
    }
}

#[test]
fn empty_str_is_nil() {
    assert_eq!("".parse::<Sexp>().unwrap(), Sexp::Nil);
    assert_eq!("  ; just a comment".parse::<Sexp>().unwrap(), Sexp::Nil);
}

#[test]
fn long_list_clone_compare_drop() {
    const LEN: usize = 100_000;
    let src = format!(
        "({})",
        (0..LEN).map(|i| i.to_string()).collect::<Vec<_>>().join(" ")
    );
    let list: Sexp = src.parse().unwrap();
    assert_eq!(list.len(), LEN);

    let copy = list.clone();
    assert!(copy == list);
    let rest = <&Cons>::try_from(&copy).unwrap().cdr().clone();
    assert!(rest != list);

    drop(list);
    drop(rest);
    let (head, tail) = Cons::try_from(copy).unwrap().consume();
    assert_eq!(*head, Sexp::from(Number::Integer(0)));
    assert_eq!(tail.len(), LEN - 1);
}
