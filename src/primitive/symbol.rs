use std::borrow::Borrow;
use std::fmt;


/// Characters besides alphanumerics which may appear in a Symbol.
pub const SYMBOL_CHARS: [char; 7] = ['_', '-', '+', '*', '/', '>', '<'];

/// Immutable identifier; equality is by name.
///
/// A valid Symbol starts with an alphabetic char or one of SYMBOL_CHARS and
/// continues with alphanumerics or SYMBOL_CHARS. A leading '-' must not be
/// followed by a digit, since that reads as a negative number.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Symbol(String);

pub trait ToSymbol {
    fn to_symbol(&self) -> SymbolResult;

    fn to_symbol_or_panic(&self) -> Symbol {
        self.to_symbol().unwrap()
    }
}

pub type SymbolResult = Result<Symbol, SymbolError>;

#[derive(Clone, Debug, PartialEq)]
pub enum SymbolError {
    Empty,
    InvalidStart(String),
    InvalidChar(String, char),
}

pub fn is_symbol_start(c: char) -> bool {
    c.is_alphabetic() || SYMBOL_CHARS.contains(&c)
}

pub fn is_symbol_char(c: char) -> bool {
    c.is_alphanumeric() || SYMBOL_CHARS.contains(&c)
}

impl Symbol {
    pub fn new<S: AsRef<str>>(sym: S) -> SymbolResult {
        let s = sym.as_ref();
        let mut chars = s.chars();
        match chars.next() {
            None => return Err(SymbolError::Empty),
            Some(first) => {
                let negative_number =
                    first == '-' && chars.clone().next().map_or(false, |c| c.is_ascii_digit());
                if !is_symbol_start(first) || negative_number {
                    return Err(SymbolError::InvalidStart(s.to_string()));
                }
            }
        }
        if let Some(bad) = chars.find(|c| !is_symbol_char(*c)) {
            return Err(SymbolError::InvalidChar(s.to_string(), bad));
        }

        Ok(Symbol(s.to_string()))
    }

    /// Symbol for a name known to be valid at compile time (builtin names,
    /// reader macro heads). Skips validation.
    pub(crate) fn reserved(name: &'static str) -> Symbol {
        Symbol(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}


impl<S: AsRef<str>> ToSymbol for S {
    fn to_symbol(&self) -> SymbolResult {
        Symbol::new(self)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}


impl_try_from!(Symbol;
               Sexp       ->  Symbol,
               ref Sexp   ->  ref Symbol,
               Primitive  ->  Symbol,
);


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_symbols() {
        for name in &["a", "foo-bar", "+", "-", "->foo", "-foo", "x1", "<=>", "_", "*star*"] {
            assert_eq!(name.to_symbol_or_panic().as_str(), *name);
        }
    }

    #[test]
    fn invalid_symbols() {
        assert_eq!(Symbol::new(""), Err(SymbolError::Empty));
        assert_eq!(
            Symbol::new("1abc"),
            Err(SymbolError::InvalidStart("1abc".to_string()))
        );
        assert_eq!(
            Symbol::new("-1"),
            Err(SymbolError::InvalidStart("-1".to_string()))
        );
        assert_eq!(
            Symbol::new("a.b"),
            Err(SymbolError::InvalidChar("a.b".to_string(), '.'))
        );
    }
}
