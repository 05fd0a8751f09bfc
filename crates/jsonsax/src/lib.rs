//! A single-pass, push-mode (SAX-style) JSON parser.
//!
//! [`parse`] scans a fully buffered JSON document once by recursive descent
//! and reports every construct it recognizes to a caller-supplied
//! [`EventSink`]. The core builds no value tree; [`parse_value`] is a thin
//! consumer layered on the event stream for callers that want one.
//!
//! ```rust
//! use jsonsax::{EventSink, parse};
//!
//! #[derive(Default)]
//! struct Counter {
//!     strings: usize,
//! }
//!
//! impl EventSink for Counter {
//!     fn on_string(&mut self, _value: &[u8]) {
//!         self.strings += 1;
//!     }
//! }
//!
//! let mut counter = Counter::default();
//! parse(r#"["a", "b", {"c": "d"}]"#, &mut counter).unwrap();
//! assert_eq!(counter.strings, 3);
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod error;
mod escape;
mod number;
mod parser;
mod scratch;
mod sink;
mod string;
mod value;

pub use error::{ErrorKind, ParseError};
pub use parser::parse;
pub use sink::EventSink;
pub use value::{Value, ValueBuilder, parse_value};
