//! Reads a JSON file named on the command line fully into memory and prints
//! one line per parse event, indented by nesting depth.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonsax --example print_events -- document.json
//! ```

use std::process::ExitCode;

use jsonsax::{EventSink, parse};

struct Printer {
    depth: usize,
}

impl Printer {
    fn emit(&self, label: &str) {
        println!("{:indent$}{label}", "", indent = self.depth * 2);
    }
}

impl EventSink for Printer {
    fn on_null(&mut self) {
        self.emit("null");
    }

    fn on_boolean(&mut self, value: bool) {
        self.emit(&format!("boolean {value}"));
    }

    fn on_number(&mut self, value: f64) {
        self.emit(&format!("number {value}"));
    }

    fn on_string(&mut self, value: &[u8]) {
        self.emit(&format!("string {:?}", String::from_utf8_lossy(value)));
    }

    fn on_object_start(&mut self) {
        self.emit("object {");
        self.depth += 1;
    }

    fn on_object_key(&mut self, key: &[u8]) {
        self.emit(&format!("key {:?}", String::from_utf8_lossy(key)));
    }

    fn on_object_end(&mut self) {
        self.depth -= 1;
        self.emit("}");
    }

    fn on_array_start(&mut self) {
        self.emit("array [");
        self.depth += 1;
    }

    fn on_array_end(&mut self) {
        self.depth -= 1;
        self.emit("]");
    }

    fn on_error(&mut self, line: usize, column: usize, message: &str) {
        eprintln!("error at {line}:{column}: {message}");
    }
}

fn main() -> ExitCode {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: print_events <file.json>");
        return ExitCode::FAILURE;
    };

    let source = match std::fs::read_to_string(&path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut printer = Printer { depth: 0 };
    match parse(&source, &mut printer) {
        Ok(()) => ExitCode::SUCCESS,
        // The position was already reported through on_error.
        Err(_) => ExitCode::FAILURE,
    }
}
