//! CSV codec for the event log.
//!
//! The interchange format is fixed: header `id,tipo,hora,cantidad,notas`,
//! every field double-quoted, inner quotes doubled. Decoding is
//! header-driven rather than positional, so files with reordered or extra
//! columns still import, and the row scanner is an explicit quote state
//! machine kept free of any I/O.

use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::event::CareEvent;

/// Column names, in encode output order.
pub const COLUMNS: [&str; 5] = ["id", "tipo", "hora", "cantidad", "notas"];

/// Serialize the records to CSV text.
///
/// Absent amount/note encode as empty quoted strings; decode collapses
/// them back to absent, which is the only lossy leg of the round trip.
pub fn encode(records: &[CareEvent]) -> String {
    let mut out = String::new();
    out.push_str(&COLUMNS.join(","));

    for ev in records {
        out.push('\n');
        let fields = [
            ev.id.as_str(),
            ev.category.key(),
            ev.timestamp.as_str(),
            ev.amount.as_deref().unwrap_or(""),
            ev.note.as_deref().unwrap_or(""),
        ];
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        }
    }

    out
}

/// Result of a decode: surviving records plus a report of skipped rows
/// (1-based row number and reason), so the caller can surface per-row
/// diagnostics without failing the whole import.
#[derive(Debug, Clone, Default)]
pub struct DecodeReport {
    pub records: Vec<CareEvent>,
    pub skipped: Vec<(usize, String)>,
}

/// Parse CSV text back into event records.
///
/// The first non-empty row is the header; `id`, `tipo` and `hora` must be
/// present (any order), `cantidad`/`notas` are optional. Malformed rows
/// are skipped and reported, never fatal; a missing or incomplete header
/// is the only hard error.
pub fn decode(text: &str) -> AppResult<DecodeReport> {
    let rows = split_rows(text);

    let Some((header, body)) = rows.split_first() else {
        return Err(AppError::CsvFormat("empty input, no header row".into()));
    };

    let col = |name: &str| header.iter().position(|h| h.trim() == name);
    let id_col = col("id").ok_or_else(|| missing_column("id"))?;
    let tipo_col = col("tipo").ok_or_else(|| missing_column("tipo"))?;
    let hora_col = col("hora").ok_or_else(|| missing_column("hora"))?;
    let cantidad_col = col("cantidad");
    let notas_col = col("notas");

    let mut report = DecodeReport::default();

    for (n, row) in body.iter().enumerate() {
        let row_no = n + 2; // header is row 1

        let required = |idx: usize, name: &str| -> Result<&str, String> {
            row.get(idx)
                .map(String::as_str)
                .ok_or_else(|| format!("row has {} fields, no '{}' value", row.len(), name))
        };

        let parsed = (|| -> Result<CareEvent, String> {
            let id = required(id_col, "id")?;
            if id.is_empty() {
                return Err("empty id".into());
            }
            let tipo = required(tipo_col, "tipo")?;
            let category = Category::from_key(tipo)
                .ok_or_else(|| format!("unknown category '{}'", tipo))?;
            let hora = required(hora_col, "hora")?;

            Ok(CareEvent {
                id: id.to_string(),
                category,
                timestamp: hora.to_string(),
                amount: optional_field(row, cantidad_col),
                note: optional_field(row, notas_col),
            })
        })();

        match parsed {
            Ok(ev) => report.records.push(ev),
            Err(reason) => report.skipped.push((row_no, reason)),
        }
    }

    Ok(report)
}

fn missing_column(name: &str) -> AppError {
    AppError::CsvFormat(format!("header is missing the '{}' column", name))
}

/// Missing columns and empty values both decode to absent.
fn optional_field(row: &[String], idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i))
        .filter(|v| !v.is_empty())
        .cloned()
}

/// Scanner state for [`split_rows`].
enum Scan {
    /// Between fields or inside an unquoted field.
    Outside,
    /// Inside a quoted field.
    Inside,
    /// Just saw a quote while inside; the next char decides whether it
    /// was an escape (`""`) or the closing quote.
    QuoteSeen,
}

/// Split raw CSV text into rows of fields.
///
/// Outside quotes a comma ends the field and CR/LF ends the row; inside
/// quotes commas and newlines are literal content and a doubled quote is
/// an escaped literal quote. Rows that end up entirely empty (blank
/// lines) are dropped.
fn split_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut state = Scan::Outside;
    // whether the current row has any content beyond a single empty field
    let mut row_started = false;

    let mut end_row = |row: &mut Vec<String>, field: &mut String, row_started: &mut bool| {
        if *row_started {
            row.push(std::mem::take(field));
            rows.push(std::mem::take(row));
        } else {
            field.clear();
            row.clear();
        }
        *row_started = false;
    };

    for c in text.chars() {
        match state {
            Scan::Outside => match c {
                '"' => {
                    state = Scan::Inside;
                    row_started = true;
                }
                ',' => {
                    row.push(std::mem::take(&mut field));
                    row_started = true;
                }
                '\n' | '\r' => end_row(&mut row, &mut field, &mut row_started),
                other => {
                    field.push(other);
                    row_started = true;
                }
            },
            Scan::Inside => match c {
                '"' => state = Scan::QuoteSeen,
                other => field.push(other),
            },
            Scan::QuoteSeen => match c {
                // doubled quote: literal quote, stay inside
                '"' => {
                    field.push('"');
                    state = Scan::Inside;
                }
                ',' => {
                    row.push(std::mem::take(&mut field));
                    state = Scan::Outside;
                }
                '\n' | '\r' => {
                    state = Scan::Outside;
                    end_row(&mut row, &mut field, &mut row_started);
                }
                // stray char after a closing quote: keep it, back outside
                other => {
                    field.push(other);
                    state = Scan::Outside;
                }
            },
        }
    }

    // flush the final row when the text has no trailing newline
    if matches!(state, Scan::Inside | Scan::QuoteSeen) || row_started {
        row.push(field);
        if row.len() > 1 || !row[0].is_empty() {
            rows.push(row);
        }
    }

    rows
}
