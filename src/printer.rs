//! Rendering of values for output.

use colored::*;
use std::io::{self, Write};

use crate::primitive::Primitive;
use crate::sexp::Sexp;


/// Writes Sexps in their list notation.
///
/// Unlike Display, strings can be written without their quotes (as `print`
/// does) and parens can be colored by nesting depth.
#[derive(Clone, Copy, Debug, Default)]
pub struct Printer {
    color: bool,
    raw_strings: bool,
}

impl Printer {
    /// Same output as Display.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Output of the print builtin.
    pub fn raw() -> Self {
        Self {
            color: false,
            raw_strings: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn write<W: Write>(&self, sexp: &Sexp, w: &mut W) -> io::Result<()> {
        self.write_at(sexp, w, 0)
    }

    pub fn to_string(&self, sexp: &Sexp) -> io::Result<String> {
        let mut buf = Vec::<u8>::new();
        self.write(sexp, &mut buf)?;
        String::from_utf8(buf).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }

    fn write_at<W: Write>(&self, sexp: &Sexp, w: &mut W, depth: usize) -> io::Result<()> {
        fn paren_color(depth: usize) -> (u8, u8, u8) {
            match depth % 6 {
                0 => (0, 255, 204),
                1 => (204, 51, 0),
                2 => (153, 255, 102),
                3 => (153, 102, 255),
                4 => (255, 255, 102),
                _ => (255, 179, 179),
            }
        }

        sexp.write_list(
            w,
            depth,
            &mut |writer, primitive, depth| self.write_primitive(writer, primitive, depth),
            &mut |writer, paren, depth| {
                if self.color {
                    let (r, g, b) = paren_color(depth);
                    write!(writer, "{}", paren.truecolor(r, g, b))
                } else {
                    write!(writer, "{}", paren)
                }
            },
        )
    }

    fn write_primitive<W: Write>(
        &self,
        w: &mut W,
        primitive: &Primitive,
        depth: usize,
    ) -> io::Result<()> {
        match primitive {
            Primitive::LangString(s) if self.raw_strings => write!(w, "{}", s.as_str()),
            Primitive::Procedure(procedure) => self.write_at(&procedure.reify(), w, depth),
            _ => write!(w, "{}", primitive),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_strings() {
        let sexp: Sexp = "(\"a b\" c)".parse().unwrap();
        assert_eq!(Printer::raw().to_string(&sexp).unwrap(), "(a b c)");
        assert_eq!(Printer::plain().to_string(&sexp).unwrap(), "(\"a b\" c)");
    }

    #[test]
    fn plain_matches_display() {
        for src in ["()", "(a . b)", "(1 (2.5 \"s\") . x)", "sym"].iter() {
            let sexp: Sexp = src.parse().unwrap();
            assert_eq!(Printer::plain().to_string(&sexp).unwrap(), sexp.to_string());
        }
    }

    #[test]
    fn colored_parens() {
        colored::control::set_override(true);
        let sexp: Sexp = "(a (b))".parse().unwrap();
        let text = Printer::plain().with_color(true).to_string(&sexp).unwrap();
        assert!(text.contains("\x1b["));
        assert!(text.contains('a') && text.contains('b'));
        colored::control::unset_override();
    }
}
