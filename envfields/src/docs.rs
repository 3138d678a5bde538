//! Documentation tables generated from discovered configuration fields
//!
//! Renders a [`ConfInfo`] as a table with one row per field: the uppercase
//! environment keys, the value that was read (when [`ConfInfo::read`] has
//! run), the declared default, and the note. Useful for `--help`-style
//! output or generated operations documentation.

use askama::Template;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{ContentArrangement, Table};

use crate::field::{ConfInfo, Field};

/// A field's note, prefixed with `Optional.` when the field is optional.
fn note_optional(field: &Field) -> String {
    let note = field.note().unwrap_or_default();
    if !field.optional() {
        return note.to_string();
    }
    if note.is_empty() {
        return "Optional.".to_string();
    }
    format!("Optional. {note}")
}

/// The uppercase half of a field's key list; a custom-named field keeps its
/// single key as-is.
fn keys_upper(field: &Field) -> Vec<String> {
    let keys = field.keys();
    if keys.len() < 2 {
        return keys;
    }
    let half = keys.len() / 2;
    keys[..half].to_vec()
}

/// Renders each field as a row in an ASCII table.
pub fn text_table(info: &ConfInfo) -> String {
    build_text_table(info, None).to_string()
}

/// Renders each field as a row in an ASCII table constrained to `width`
/// characters, wrapping cell content as needed.
pub fn text_table_with_width(info: &ConfInfo, width: u16) -> String {
    build_text_table(info, Some(width)).to_string()
}

fn build_text_table(info: &ConfInfo, width: Option<u16>) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(width) = width {
        table.set_width(width);
    }
    table.set_header(vec!["Keys", "Value", "Default", "Note"]);

    for field in info {
        table.add_row(vec![
            keys_upper(field).join("\n"),
            field.value().to_string(),
            field.default_value().unwrap_or_default().to_string(),
            note_optional(field),
        ]);
    }

    table
}

/// The HTML documentation table for a [`ConfInfo`].
///
/// An owned [`askama::Template`] value: render it standalone with
/// [`html_table`], or construct it yourself and interpolate it into a larger
/// template. Cell content is HTML-escaped.
#[derive(Template)]
#[template(
    source = r#"<table>
	<thead>
		<tr>
			<th>Keys</th>
			<th>Value</th>
			<th>Default</th>
			<th>Note</th>
		</tr>
	</thead>
	<tbody>{% for row in rows %}
		<tr>
			<th>{% for key in row.keys %}{% if loop.index0 > 0 %}<br>{% endif %}{{ key }}{% endfor %}</th>
			<th>{{ row.value }}</th>
			<th>{{ row.default }}</th>
			<th>{{ row.note }}</th>
		</tr>{% endfor %}
	</tbody>
</table>"#,
    ext = "html"
)]
pub struct HtmlTable {
    rows: Vec<HtmlRow>,
}

struct HtmlRow {
    keys: Vec<String>,
    value: String,
    default: String,
    note: String,
}

impl HtmlTable {
    /// Captures one row per field of `info`.
    pub fn new(info: &ConfInfo) -> Self {
        let rows = info
            .iter()
            .map(|field| HtmlRow {
                keys: keys_upper(field),
                value: field.value().to_string(),
                default: field.default_value().unwrap_or_default().to_string(),
                note: note_optional(field),
            })
            .collect();
        Self { rows }
    }
}

/// Renders each field as a row in an HTML table.
pub fn html_table(info: &ConfInfo) -> Result<String, askama::Error> {
    HtmlTable::new(info).render()
}
