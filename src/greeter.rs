//! Greeting logic.

use std::io::{self, Write};

/// Format the greeting for `name`.
///
/// The name passes through verbatim; no validation or escaping is applied.
pub fn greeting(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Write the greeting line for `name` to `out`.
///
/// The formatted text plus its terminating newline go out in a single write.
pub fn greet<W: Write>(out: &mut W, name: &str) -> io::Result<()> {
    let mut line = greeting(name);
    line.push('\n');
    out.write_all(line.as_bytes())
}
