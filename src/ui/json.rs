use std::io::{self, Write};

use serde::Serialize;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Build a `{"event": <name>, ...fields}` object from a serializable result.
pub fn result_event(event: &str, result: &impl Serialize) -> serde_json::Value {
    let mut value = serde_json::to_value(result).unwrap_or(serde_json::Value::Null);
    match value.as_object_mut() {
        Some(fields) => {
            fields.insert("event".to_string(), serde_json::Value::from(event));
            value
        }
        None => serde_json::json!({ "event": event, "result": value }),
    }
}

/// Write a result event to stdout.
pub fn emit_result(event: &str, result: &impl Serialize) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &result_event(event, result))
}
