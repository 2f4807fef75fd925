use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// A response with its own tabular layout for `--format table`.
pub trait Tabular {
    /// One line printed above the table, e.g. a score summary.
    fn caption(&self) -> Option<String> {
        None
    }

    fn headers(&self) -> Vec<&'static str>;

    fn rows(&self) -> Vec<Vec<String>>;
}

/// Render a serializable response to a string in the requested format.
///
/// Tables are derived from the JSON shape: objects become key/value rows.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Render a response that defines its own table layout.
pub fn render_tabular<T: Serialize + Tabular>(
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(value, format);
    }

    let rows = value.rows();
    let body = if rows.is_empty() {
        String::from("(no rows)")
    } else {
        table::render_entity_table(&value.headers(), &rows, table_options())
    };
    Ok(match value.caption() {
        Some(caption) => format!("{caption}\n\n{body}"),
        None => body,
    })
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a response that defines its own table layout.
pub fn output_tabular<T: Serialize + Tabular>(
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rendered = render_tabular(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let rows = match serde_json::to_value(value)? {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| vec![key, value_to_cell(&value)])
            .collect::<Vec<_>>(),
        scalar => vec![vec![String::from("value"), value_to_cell(&scalar)]],
    };
    Ok(table::render_entity_table(
        &["key", "value"],
        &rows,
        table_options(),
    ))
}

/// Flatten one JSON value into a single table cell.
pub fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.replace('\n', " "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

/// Cell text for an optional field.
#[must_use]
pub fn opt_cell(value: Option<&str>) -> String {
    value.map_or_else(|| String::from("-"), |v| v.replace('\n', " "))
}
