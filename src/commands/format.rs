//! Shared output helpers for commands

use rulekit_core::error::Result;
use rulekit_core::records::header_line;
use serde::Serialize;
use serde_json::json;

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a JSON status message with extra fields
///
/// ```ignore
/// print_json_status("ok", Some("Rules saved"), &[("new", json!(2))])?;
/// ```
pub fn print_json_status(
    status: &str,
    message: Option<&str>,
    extra_fields: &[(&str, serde_json::Value)],
) -> Result<()> {
    let mut output = json!({ "status": status });

    if let Some(obj) = output.as_object_mut() {
        if let Some(msg) = message {
            obj.insert("message".to_string(), json!(msg));
        }
        for (key, value) in extra_fields {
            obj.insert(key.to_string(), value.clone());
        }
    }

    print_json(&output)
}

/// Print a records header line
pub fn print_records_header(mode: &str, extra_fields: &[(&str, String)]) {
    println!("{}", header_line(mode, extra_fields));
}
