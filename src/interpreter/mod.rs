pub mod evaluator;
pub mod exec_state;
pub mod interpreter;
pub mod lang_error;

pub use evaluator::{Evaluator, MAX_EVAL_DEPTH};
pub use exec_state::{ExecFrame, ExecState};
pub use interpreter::{Interpreter, RunIter};
pub use lang_error::{ExpectedCount, LangError};
