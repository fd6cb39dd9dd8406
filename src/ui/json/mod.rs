//! JSON output utilities for CLI commands.
//!
//! With `--json` every command writes NDJSON (one JSON object per line) to
//! stdout. Event types live in `events`.

pub mod events;

use serde::Serialize;
use std::io::{self, Write};

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_typed_event(&mut out, event)
}

/// Write a typed event to a custom writer.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use events::*;

    #[test]
    fn write_typed_event_writes_ndjson_format() {
        let mut buffer = Vec::new();

        write_typed_event(&mut buffer, &StartEvent::new("gc")).unwrap();
        write_typed_event(&mut buffer, &ErrorEvent::new("gc", "io", "boom")).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with('\n'));
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        for line in lines {
            assert!(serde_json::from_str::<serde_json::Value>(line).is_ok());
        }
    }
}
