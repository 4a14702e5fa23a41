use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::metadata::Envelope;

const ROW_COLUMNS: [(&str, &str); 8] = [
    ("PRODUCT", "name"),
    ("PRESENTATION", "presentation"),
    ("QTY", "quantity"),
    ("UNIT", "unitOfMeasure"),
    ("EXTRA", "priceGradeExtra"),
    ("FIRST", "priceGradeFirst"),
    ("PER UNIT", "priceGradeUnit"),
    ("VARIATION", "variation"),
];

pub fn render(
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(envelope)?,
    }

    Ok(())
}

fn render_table(envelope: &Envelope<Value>) -> Result<(), CliError> {
    println!("request_id  : {}", envelope.meta.request_id);
    println!("generated_at: {}", envelope.meta.generated_at);
    println!("latency_ms  : {}", envelope.meta.latency_ms);
    if let Some(attempts) = envelope.meta.attempts {
        println!("attempts    : {attempts}");
    }
    for key in ["usedDate", "sourceUrl", "path", "url"] {
        if let Some(value) = envelope.data.get(key).and_then(Value::as_str) {
            println!("{key:<12}: {value}");
        }
    }

    if let Some(rows) = envelope.data.get("rows").and_then(Value::as_array) {
        println!();
        for line in row_table(rows) {
            println!("{line}");
        }
    } else if let Some(text) = envelope.data.get("text").and_then(Value::as_str) {
        println!();
        println!("{text}");
    } else {
        println!("data:");
        let pretty_data = serde_json::to_string_pretty(&envelope.data)?;
        for line in pretty_data.lines() {
            println!("  {line}");
        }
    }

    Ok(())
}

/// Left-aligned columns, one header line plus one line per row.
fn row_table(rows: &[Value]) -> Vec<String> {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            ROW_COLUMNS
                .iter()
                .map(|(_, key)| cell_text(row.get(*key)))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = ROW_COLUMNS
        .iter()
        .enumerate()
        .map(|(index, (header, _))| {
            cells
                .iter()
                .map(|row| row[index].chars().count())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = ROW_COLUMNS.iter().map(|(h, _)| (*h).to_owned()).collect();
    std::iter::once(header)
        .chain(cells)
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, width)| pad(cell, *width))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_owned()
        })
        .collect()
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    format!("{cell}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn row_table_aligns_columns_on_character_width() {
        let rows = vec![
            json!({
                "name": "PAPA CRIOLLA",
                "presentation": "BULTO",
                "quantity": 50,
                "unitOfMeasure": "KILO",
                "priceGradeExtra": "120.000",
                "priceGradeFirst": "110.000",
                "priceGradeUnit": "2.400",
                "variation": "Subió",
            }),
            json!({
                "name": "FRESA",
                "presentation": "CAJA",
                "quantity": 5,
                "unitOfMeasure": "KILO",
                "priceGradeExtra": "9.000",
                "priceGradeFirst": "8.000",
                "priceGradeUnit": "1.800",
                "variation": "Estable",
            }),
        ];

        let lines = row_table(&rows);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("PRODUCT       PRESENTATION  QTY"));
        assert!(lines[1].starts_with("PAPA CRIOLLA  BULTO         50 "));
        assert!(lines[2].starts_with("FRESA         CAJA          5  "));
        assert!(lines[1].ends_with("Subió"));
    }

    #[test]
    fn missing_fields_render_as_empty_cells() {
        assert_eq!(cell_text(None), "");
        assert_eq!(cell_text(Some(&json!(12))), "12");
        assert_eq!(cell_text(Some(&json!("KILO"))), "KILO");
    }
}
