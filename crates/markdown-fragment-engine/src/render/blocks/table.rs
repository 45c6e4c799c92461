/// Pipe table with owned delimiter knowledge.
pub struct Table;

impl Table {
    pub const ROW_PREFIX: &'static str = "| ";
    pub const SEPARATOR_PREFIXES: [&'static str; 2] = ["|--", "|:--"];
    pub const PIPE: char = '|';

    pub fn is_row(trimmed: &str) -> bool {
        trimmed.starts_with(Self::ROW_PREFIX)
    }

    pub fn is_separator(trimmed: &str) -> bool {
        Self::SEPARATOR_PREFIXES
            .iter()
            .any(|prefix| trimmed.starts_with(prefix))
    }

    /// Cells of a row line: outer pipes stripped, empty fields dropped.
    pub fn cells(trimmed: &str) -> Vec<&str> {
        trimmed
            .trim_start_matches(Self::PIPE)
            .trim_end_matches(Self::PIPE)
            .split(Self::PIPE)
            .filter(|cell| !cell.is_empty())
            .map(str::trim)
            .collect()
    }
}

/// Rows collected for the table currently open.
#[derive(Debug, Default)]
struct TableAccumulator {
    rows: Vec<String>,
    table_open: bool,
    heading_closed: bool,
}

impl TableAccumulator {
    fn push_row(&mut self, trimmed: &str) {
        self.table_open = true;
        let cell_tag = if self.heading_closed { "td" } else { "th" };

        let mut row = String::from("<tr>");
        for cell in Table::cells(trimmed) {
            row.push_str(&format!("<{cell_tag}>{cell}</{cell_tag}>"));
        }
        row.push_str("</tr>");
        self.rows.push(row);
    }

    /// Only the first separator of a table has any effect.
    fn push_separator(&mut self) {
        self.table_open = true;
        if !self.heading_closed {
            self.heading_closed = true;
            self.rows.push("</thead><tbody>".to_string());
        }
    }

    /// Renders and resets the open table, if any.
    fn flush(&mut self, class: &str) -> Option<String> {
        if !self.table_open {
            return None;
        }

        let mut html = format!("<table class=\"{class}\"><thead>");
        html.push_str(&self.rows.concat());
        if !self.heading_closed {
            html.push_str("</thead><tbody>");
        }
        html.push_str("</tbody></table>");

        *self = Self::default();
        Some(html)
    }
}

/// Converts `| `-prefixed row runs into `<table class="{class}">`.
///
/// Rows before the first `|---|` separator become header cells; later rows
/// become body cells. Column counts are not checked across rows.
pub fn transform(buffer: &str, class: &str) -> String {
    let mut table = TableAccumulator::default();
    let mut out: Vec<String> = Vec::new();

    for line in buffer.split('\n') {
        let trimmed = line.trim();
        if Table::is_row(trimmed) {
            table.push_row(trimmed);
        } else if Table::is_separator(trimmed) {
            table.push_separator();
        } else if let Some(html) = table.flush(class) {
            // The line that ends a table is replaced by it.
            out.push(html);
        } else {
            out.push(line.to_string());
        }
    }
    out.extend(table.flush(class));

    out.join("\n")
}
