//! Representation of lispinho numbers.

use std::{fmt, str};

use self::Number::*;
use super::Primitive;
use crate::sexp::{HeapSexp, Sexp};


#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParseNumberError(String);


/// Generates checked binary ops which stay integral when both operands are
/// Integers and promote to Float otherwise. None signals integer overflow.
macro_rules! checked_op {
    ($($name:ident : $int_op:ident, $op:tt);+ $(;)?) => {
        impl Number {
            $(
                pub fn $name(self, other: Self) -> Option<Self> {
                    match (self, other) {
                        (Integer(a), Integer(b)) => a.$int_op(b).map(Integer),
                        (a, b) => Some(Float(a.as_f64() $op b.as_f64())),
                    }
                }
            )+
        }
    };
}

checked_op!(
    checked_add: checked_add, +;
    checked_sub: checked_sub, -;
    checked_mul: checked_mul, *;
);

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Integer(i) => i as f64,
            Float(f) => f,
        }
    }

    /// Division always yields a Float, even for Integer operands.
    pub fn div(self, other: Self) -> Self {
        Float(self.as_f64() / other.as_f64())
    }

    pub fn checked_neg(self) -> Option<Self> {
        match self {
            Integer(i) => i.checked_neg().map(Integer),
            Float(f) => Some(Float(-f)),
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Integer(0)
    }
}

impl str::FromStr for Number {
    type Err = ParseNumberError;

    /// Anything containing a '.' is a Float; everything else must be an i64.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = if s.contains('.') {
            s.parse::<f64>().ok().map(Float)
        } else {
            s.parse::<i64>().ok().map(Integer)
        };
        parsed.ok_or_else(|| ParseNumberError(s.to_string()))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer(i) => write!(f, "{}", i),
            // Keep a decimal point so Floats read back as Floats.
            Float(ff) if ff.is_finite() && ff.fract() == 0.0 => {
                write!(f, "{:.1}", ff)
            }
            Float(ff) => write!(f, "{}", ff),
        }
    }
}

impl fmt::Display for ParseNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid number literal: {}", self.0)
    }
}


impl From<i64> for Sexp {
    fn from(elem: i64) -> Self {
        Sexp::Primitive(Primitive::Number(Integer(elem)))
    }
}

impl From<f64> for Sexp {
    fn from(elem: f64) -> Self {
        Sexp::Primitive(Primitive::Number(Float(elem)))
    }
}

impl From<i64> for HeapSexp {
    fn from(elem: i64) -> Self {
        HeapSexp::new(elem.into())
    }
}

impl From<f64> for HeapSexp {
    fn from(elem: f64) -> Self {
        HeapSexp::new(elem.into())
    }
}

impl_try_from!(Number;
               Sexp       ->  Number,
               ref Sexp   ->  ref Number,
               Primitive  ->  Number,
);


#[cfg(test)]
#[path = "./number_test.rs"]
mod number_test;
