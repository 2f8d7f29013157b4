use std::cell::RefCell;
use std::convert::TryFrom;
use std::io::{self, Write};
use std::rc::Rc;

use lispinho::error::Error;
use lispinho::primitive::LangString;
use lispinho::sexp::Sexp;
use lispinho::Interpreter;


/// Output sink shared between an Interpreter and the test inspecting it.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}


pub fn setup() -> (Interpreter, SharedBuffer) {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}

    let out = SharedBuffer::default();
    (Interpreter::with_output(Box::new(out.clone())), out)
}

pub fn results<S: AsRef<str>>(interpreter: &mut Interpreter, s: S) -> Vec<Sexp> {
    interpreter
        .run(s.as_ref())
        .map(|e| e.unwrap())
        .collect::<Vec<_>>()
}

pub fn results_with_errors<S: AsRef<str>>(
    interpreter: &mut Interpreter,
    s: S,
) -> Vec<Result<Sexp, Error>> {
    interpreter.run(s.as_ref()).collect::<Vec<_>>()
}

/// Name of the error variant, as reified.
pub fn error_name(err: &Error) -> String {
    let reified = err.kind().reify();
    let (name, _) = reified.iter().nth(1).unwrap();
    <&LangString>::try_from(name).unwrap().as_str().to_string()
}
