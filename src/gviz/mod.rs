//! This module handles the gviz wire format (the JSON-with-framing response
//! served by Google Sheets' `gviz/tq` endpoint) and its conversion to internal
//! representations

mod parser;
pub use parser::tournaments_from_table;

use std::error::Error;

use serde::Deserialize;
use serde_json::Value;

/// Byte length of the fixed non-JSON prefix
/// (`/*O_o*/\ngoogle.visualization.Query.setResponse(`)
const FRAME_PREFIX_LEN: usize = 47;
/// Byte length of the fixed suffix (`);`)
const FRAME_SUFFIX_LEN: usize = 2;

/// The top-level gviz response payload
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub table: Table,
}

/// The tabular part of a gviz response
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub rows: Vec<Row>,
}

/// One feed row: an ordered sequence of nullable cells
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub c: Vec<Option<Cell>>,
}

impl Row {
    /// The cell at a fixed column position, or None when the cell is missing
    /// or explicitly null
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.c.get(index).and_then(|cell| cell.as_ref())
    }
}

/// One cell: an untyped value plus an optional preformatted display string
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub v: Option<Value>,
    #[serde(default)]
    pub f: Option<String>,
}

impl Cell {
    /// The raw cell value, with JSON null folded into None
    pub fn value(&self) -> Option<&Value> {
        match &self.v {
            Some(Value::Null) | None => None,
            Some(value) => Some(value),
        }
    }

    /// String coercion of the raw value. Absent values become the empty string
    pub fn text(&self) -> String {
        match self.value() {
            None => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// The preformatted display string if the feed supplied one, else the
    /// string coercion of the raw value
    pub fn display_or_text(&self) -> String {
        match &self.f {
            Some(f) => f.clone(),
            None => self.text(),
        }
    }
}

/// Strip the fixed gviz framing around the JSON payload.
///
/// The framing is a fixed contract of the feed (a 47-byte prefix and a 2-byte
/// suffix), not a generic JSON envelope, so anything too short to carry it is
/// rejected outright.
pub fn strip_framing(body: &str) -> Result<&str, Box<dyn Error>> {
    let end = body.len().checked_sub(FRAME_SUFFIX_LEN)
        .filter(|end| *end >= FRAME_PREFIX_LEN)
        .ok_or_else(|| format!("Feed body too short to carry the gviz framing ({} bytes)", body.len()))?;
    if !body.is_char_boundary(FRAME_PREFIX_LEN) || !body.is_char_boundary(end) {
        return Err("Feed body does not match the gviz framing".into());
    }
    Ok(&body[FRAME_PREFIX_LEN..end])
}

/// Parse a complete (framed) feed body into its table
pub fn parse(body: &str) -> Result<Table, Box<dyn Error>> {
    let payload = strip_framing(body)?;
    let response: Response = serde_json::from_str(payload)?;
    Ok(response.table)
}


#[cfg(test)]
mod test {
    use super::*;

    const EXAMPLE_BODY: &str = concat!(
        "/*O_o*/\ngoogle.visualization.Query.setResponse(",
        r#"{"table":{"rows":[{"c":[null,{"v":"Tuesday"},{"v":"Date(2025,9,28)"},{"v":null,"f":"2:30 PM"}]}]}}"#,
        ");");

    #[test]
    fn strips_the_fixed_framing() {
        let payload = strip_framing(EXAMPLE_BODY).unwrap();
        assert!(payload.starts_with('{'));
        assert!(payload.ends_with('}'));
    }

    #[test]
    fn rejects_bodies_shorter_than_the_frame() {
        assert!(strip_framing("").is_err());
        assert!(strip_framing("too short").is_err());
    }

    #[test]
    fn parses_rows_and_cells() {
        let table = parse(EXAMPLE_BODY).unwrap();
        assert_eq!(table.rows.len(), 1);

        let row = &table.rows[0];
        // Explicit nulls and out-of-range positions are both absent
        assert!(row.cell(0).is_none());
        assert!(row.cell(10).is_none());

        assert_eq!(row.cell(1).unwrap().text(), "Tuesday");
        assert_eq!(row.cell(2).unwrap().text(), "Date(2025,9,28)");

        // A null value with a display string: the display text survives
        let time = row.cell(3).unwrap();
        assert!(time.value().is_none());
        assert_eq!(time.display_or_text(), "2:30 PM");
    }

    #[test]
    fn coerces_non_string_values_to_text() {
        let cell = Cell { v: Some(serde_json::json!(42)), f: None };
        assert_eq!(cell.text(), "42");
        let cell = Cell { v: Some(serde_json::json!(true)), f: None };
        assert_eq!(cell.text(), "true");
        let cell = Cell { v: None, f: None };
        assert_eq!(cell.text(), "");
    }
}
