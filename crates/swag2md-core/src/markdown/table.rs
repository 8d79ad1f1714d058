use indexmap::IndexMap;

use super::Indent;

/// Cell text for a column a row doesn't fill.
pub const NO_CONTENT: &str = "No Content";

/// One table row: column name → cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableLine {
    cells: IndexMap<String, String>,
}

impl TableLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        self.cells.insert(column.to_string(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, column: &str, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    /// Cell text, or [`NO_CONTENT`] when the column was never set.
    pub fn get(&self, column: &str) -> &str {
        self.get_or(column, NO_CONTENT)
    }

    pub fn get_or<'s>(&'s self, column: &str, placeholder: &'s str) -> &'s str {
        self.cells
            .get(column)
            .map(String::as_str)
            .unwrap_or(placeholder)
    }
}

/// A pipe table: header row, separator row, one row per [`TableLine`].
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<TableLine>,
    placeholder: String,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            placeholder: NO_CONTENT.to_string(),
        }
    }

    /// Text shown for missing or blank cells.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn push(&mut self, row: TableLine) {
        self.rows.push(row);
    }

    pub fn render(&self, indent: Indent) -> String {
        let prefix = indent.prefix();
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(format!("{prefix}| {} |", self.columns.join(" | ")));
        lines.push(format!(
            "{prefix}|{}",
            " --- |".repeat(self.columns.len())
        ));
        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .map(|column| {
                    let value = row.get_or(column, &self.placeholder);
                    if value.trim().is_empty() {
                        escape_cell(&self.placeholder)
                    } else {
                        escape_cell(value)
                    }
                })
                .collect();
            lines.push(format!("{prefix}| {} |", cells.join(" | ")));
        }
        lines.join("\n")
    }
}

/// Keep a value inside one cell: escape pipes and fold line breaks.
pub fn escape_cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_column_yields_placeholder() {
        let line = TableLine::new().with("Name", "id");
        assert_eq!(line.get("Name"), "id");
        assert_eq!(line.get("Schema"), NO_CONTENT);
        assert_eq!(line.get_or("Schema", "-"), "-");
    }

    #[test]
    fn test_render_table() {
        let mut table = Table::new(["HTTP Code", "Description", "Schema"]);
        table.push(TableLine::new().with("HTTP Code", "200").with("Description", "OK"));
        table.push(
            TableLine::new()
                .with("HTTP Code", "404")
                .with("Description", "")
                .with("Schema", "Error"),
        );
        insta::assert_snapshot!(table.render(Indent::NONE), @r"
        | HTTP Code | Description | Schema |
        | --- | --- | --- |
        | 200 | OK | No Content |
        | 404 | No Content | Error |
        ");
    }

    #[test]
    fn test_render_indented_with_custom_placeholder() {
        let mut table = Table::new(["A", "B"]).placeholder("-");
        table.push(TableLine::new().with("A", "x|y"));
        assert_eq!(
            table.render(Indent(1)),
            "    | A | B |\n    | --- | --- |\n    | x\\|y | - |"
        );
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
        assert_eq!(escape_cell("line1\nline2"), "line1<br>line2");
    }
}
