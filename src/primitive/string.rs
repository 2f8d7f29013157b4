use std::fmt;


/// String literal. Read verbatim (no escape processing), so Display simply
/// surrounds the contents with quotes.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct LangString(String);

pub trait ToLangString {
    fn to_lang_string(&self) -> LangString;
}

impl LangString {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}


impl<S: AsRef<str>> ToLangString for S {
    fn to_lang_string(&self) -> LangString {
        LangString::new(self)
    }
}

impl fmt::Display for LangString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_str())
    }
}


impl_try_from!(LangString;
               Sexp       ->  LangString,
               ref Sexp   ->  ref LangString,
               Primitive  ->  LangString,
);
