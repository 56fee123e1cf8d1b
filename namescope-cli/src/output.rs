use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Emit `data` as pretty JSON under `--json`, otherwise hand it to `render`.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    render: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if opts.json {
        println!("{}", serde_json::to_string_pretty(data)?);
    } else {
        render(data);
    }
    Ok(())
}

/// Horizontal alignment of a column.
#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Right,
}

impl From<Align> for CellAlignment {
    fn from(align: Align) -> Self {
        match align {
            Align::Left => CellAlignment::Left,
            Align::Right => CellAlignment::Right,
        }
    }
}

/// Padding of column `index` out of `count`: two spaces between columns, none at the edges.
fn column_padding(index: usize, count: usize) -> (u16, u16) {
    let left = u16::from(index > 0);
    let right = u16::from(index + 1 < count);
    (left, right)
}

/// Borderless name table. Every column is as wide as its widest cell.
pub struct TabWriter {
    table: Table,
    indent: String,
}

impl TabWriter {
    /// One `(header, alignment)` pair per column.
    pub fn new(columns: Vec<(&str, Align)>) -> Self {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(columns.iter().map(|(header, _)| *header).collect::<Vec<_>>());

        let count = columns.len();
        for (index, (_, align)) in columns.into_iter().enumerate() {
            if let Some(column) = table.column_mut(index) {
                column.set_cell_alignment(align.into());
                column.set_padding(column_padding(index, count));
            }
        }

        TabWriter {
            table,
            indent: String::new(),
        }
    }

    /// Prefix every printed line with `prefix`.
    pub fn indent(mut self, prefix: &str) -> Self {
        self.indent = prefix.to_string();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.table.row_count() == 0
    }

    pub fn row(&mut self, values: Vec<String>) {
        self.table.add_row(values);
    }

    /// Header and rows to stdout.
    pub fn print(&self) {
        for line in self.render_lines(false) {
            println!("{line}");
        }
    }

    /// Rows only, for tables whose header carries no information.
    pub fn print_rows(&self) {
        for line in self.render_lines(true) {
            println!("{line}");
        }
    }

    fn render_lines(&self, skip_header: bool) -> Vec<String> {
        self.table
            .to_string()
            .lines()
            .skip(usize::from(skip_header))
            .map(|line| format!("{}{}", self.indent, line.trim_end()))
            .collect()
    }
}

/// Print `key: value` lines with the values aligned.
pub fn print_fields(fields: &[(&str, String)]) {
    let mut writer = TabWriter::new(vec![("", Align::Left), ("", Align::Left)]);
    for (key, value) in fields {
        writer.row(vec![format!("{key}:"), value.clone()]);
    }
    writer.print_rows();
}
