//! Line-oriented I/O helpers
//!
//! Readers and writers are generic so sessions can run over stdin/stdout
//! or in-memory buffers alike.

use std::io::{BufRead, Write};

use serde_json::Value;

use super::errors::CliResult;

/// Read one line, without its line ending. Returns None at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> CliResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Write a success response as one JSON line
pub fn write_response<W: Write>(output: &mut W, data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });
    write_value(output, &response)
}

/// Write an error response as one JSON line
pub fn write_error<W: Write>(output: &mut W, code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });
    write_value(output, &response)
}

fn write_value<W: Write>(output: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *output, value)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_endings() {
        let mut input = Cursor::new("first\r\nsecond\n\nlast");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("first"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("second"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some(""));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("last"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_write_response_one_line() {
        let mut out = Vec::new();
        write_response(&mut out, serde_json::json!({"id": 1})).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));

        let parsed: Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(parsed["status"], "ok");
        assert_eq!(parsed["data"]["id"], 1);
    }

    #[test]
    fn test_write_error_shape() {
        let mut out = Vec::new();
        write_error(&mut out, "SOME_CODE", "went wrong").unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["status"], "error");
        assert_eq!(parsed["code"], "SOME_CODE");
        assert_eq!(parsed["message"], "went wrong");
    }
}
