//! lispinho interpreter.
//!
//! Run a source file as:    `lispinho path/to/file.lisp`.
//! Start a REPL as:         `lispinho` (or `lispinho -i file.lisp` to load a
//!                          file first).

use clap::{App, Arg};
use env_logger::{Builder, Env};
use log::{error, info, LevelFilter};
use std::cell::Cell;
use std::fs;
use std::io::{self, Write};
use std::rc::Rc;

use lispinho::error::Error;
use lispinho::printer::Printer;
use lispinho::sexp::Sexp;
use lispinho::token::cli_stream::CliStream;
use lispinho::Interpreter;


fn main() -> Result<(), String> {
    // Setup logging.
    Builder::from_env(Env::default().default_filter_or("warn"))
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = App::new("lispinho")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A minimal Lisp interpreter")
        .arg(
            Arg::new("src_file")
                .value_name("SRC_FILE")
                .help("Source file to evaluate"),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("Start a REPL after evaluating SRC_FILE"),
        )
        .arg(
            Arg::new("max_depth")
                .short('d')
                .long("max-depth")
                .value_name("N")
                .takes_value(true)
                .help("Limit on nested applications"),
        )
        .arg(
            Arg::new("no_color")
                .long("no-color")
                .help("Print results without colored parens"),
        )
        .get_matches();

    let output = ProgramOutput::default();
    let mut interpreter = Interpreter::with_output(Box::new(output.clone()));
    if let Some(depth) = matches.value_of("max_depth") {
        match depth.parse::<usize>() {
            Ok(depth) => interpreter.evaluator_mut().set_max_depth(depth),
            Err(err) => return Err(format!("Invalid max depth {:?}: {}", depth, err)),
        }
    }

    if let Some(path) = matches.value_of("src_file") {
        if let Err(err) = run_file(&mut interpreter, path) {
            print_error(&err);
            std::process::exit(1);
        }
        if !matches.is_present("interactive") || interpreter.exit_requested() {
            return Ok(());
        }
    }

    repl(&mut interpreter, &output, !matches.is_present("no_color"));
    Ok(())
}

/// Evaluate each form of the file at `path`, aborting at the first error.
fn run_file(interpreter: &mut Interpreter, path: &str) -> Result<(), Error> {
    info!("Loading {}", path);
    let src = fs::read_to_string(path)?;
    for result in interpreter.run(&src) {
        result?;
    }
    io::stdout().flush()?;
    Ok(())
}

fn repl(interpreter: &mut Interpreter, output: &ProgramOutput, color: bool) {
    println!("lispinho {}", env!("CARGO_PKG_VERSION"));
    println!("Type (exit) and hit enter to go back to the terminal");
    println!();

    let printer = Printer::plain().with_color(color);
    let mut input = CliStream::new(interpreter.env().symbols());
    while let Some(chunk) = input.next() {
        for result in interpreter.run(&chunk) {
            // End the line left open by print; its Nil result isn't echoed.
            let printed = output.take_written();
            if printed {
                println!();
            }
            match result {
                Ok(val) if printed && val.is_nil() => {}
                Ok(val) => print_result(&printer, &val),
                Err(err) => print_error(&err),
            }
        }
        if interpreter.exit_requested() {
            break;
        }
        input.set_symbols(interpreter.env().symbols());
    }
}

fn print_result(printer: &Printer, val: &Sexp) {
    let mut stdout = io::stdout();
    print!("-> ");
    if let Err(err) = printer.write(val, &mut stdout) {
        error!("Failed to write result: {}", err);
    }
    println!();
}

fn print_error(err: &Error) {
    println!("{}", err.kind().reify());
    if let Some(cont) = err.cont() {
        println!("  --TRACE--");
        for (i, frame) in cont.iter().enumerate() {
            println!("  {})  {}", i, frame);
        }
    }
}


/// Stdout sink for the print builtin which notes whether anything was written.
#[derive(Clone, Default)]
struct ProgramOutput {
    written: Rc<Cell<bool>>,
}

impl ProgramOutput {
    /// Whether anything was written since the last call.
    fn take_written(&self) -> bool {
        self.written.replace(false)
    }
}

impl Write for ProgramOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !buf.is_empty() {
            self.written.set(true);
        }
        io::stdout().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}
