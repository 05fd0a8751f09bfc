//! The callback set through which the parser reports a document.

/// Receives one notification per recognized JSON construct.
///
/// Every operation defaults to a no-op, so a consumer only overrides the
/// events it cares about. Callbacks run synchronously on the parsing thread,
/// in document order; borrowed bytes are valid only for the duration of the
/// call. The sink is never stored by the parser.
///
/// A JSON object or array has no materialized representation: its identity
/// is the start/end event pair enclosing its contents.
#[allow(unused_variables)]
pub trait EventSink {
    /// The literal `null`.
    fn on_null(&mut self) {}

    /// The literal `true` or `false`.
    fn on_boolean(&mut self, value: bool) {}

    /// A number token, converted to 64-bit floating point.
    fn on_number(&mut self, value: f64) {}

    /// A decoded string value, as UTF-8 bytes with all escapes resolved.
    fn on_string(&mut self, value: &[u8]) {}

    /// An object opened with `{`.
    fn on_object_start(&mut self) {}

    /// A decoded member key. The member's value events follow before the
    /// next key; duplicate keys are reported in document order.
    fn on_object_key(&mut self, key: &[u8]) {}

    /// The `}` closing the innermost open object.
    fn on_object_end(&mut self) {}

    /// An array opened with `[`.
    fn on_array_start(&mut self) {}

    /// The `]` closing the innermost open array.
    fn on_array_end(&mut self) {}

    /// The first grammar violation. Invoked at most once per parse, right
    /// before [`parse`](crate::parse) returns the error; `line` and
    /// `column` are 1-based and point at the offending character.
    fn on_error(&mut self, line: usize, column: usize, message: &str) {}
}
