use super::*;

use crate::primitive::{Number, ToSymbol};


fn sym(name: &str) -> Symbol {
    name.to_symbol_or_panic()
}

fn int(i: i64) -> Sexp {
    Number::Integer(i).into()
}

#[test]
fn bind_and_lookup() {
    let mut env = Environment::new();
    assert_eq!(env.lookup(&sym("a")), None);

    env.bind(sym("a"), int(1));
    assert_eq!(env.lookup(&sym("a")), Some(&int(1)));

    env.bind(sym("a"), int(2));
    assert_eq!(env.lookup(&sym("a")), Some(&int(2)));
}

#[test]
fn extension_sees_parent() {
    let mut global = Environment::new();
    global.bind(sym("a"), int(1));

    let local = global.extend();
    assert_eq!(local.lookup(&sym("a")), Some(&int(1)));
    assert_eq!(local.depth(), 2);
}

#[test]
fn extension_does_not_leak() {
    let mut global = Environment::new();
    global.bind(sym("a"), int(1));
    {
        let mut local = global.extend();
        local.bind(sym("a"), int(10));
        local.bind(sym("b"), int(2));
        assert_eq!(local.lookup(&sym("a")), Some(&int(10)));
        assert!(local.contains(&sym("b")));
    }
    assert_eq!(global.lookup(&sym("a")), Some(&int(1)));
    assert!(!global.contains(&sym("b")));
}

#[test]
fn symbols_span_chain() {
    let mut global = Environment::new();
    global.bind(sym("a"), int(1));
    let mut local = global.extend();
    local.bind(sym("b"), int(2));
    let mut inner = local.extend();
    inner.bind(sym("a"), int(3));

    let symbols: Vec<Symbol> = inner.symbols().into_iter().collect();
    assert_eq!(symbols, vec![sym("a"), sym("b")]);
    assert_eq!(inner.depth(), 3);
}
