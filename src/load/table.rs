/// Minimal reader for the semicolon-delimited inventory files.
///
/// The sources are hand-curated spreadsheets: legacy 8-bit encoding, comma
/// decimals, stray blank columns, trailing empty rows. The reader never
/// fails on cell content; it only drops what the loading contract says to
/// drop (unnamed columns, rows with a blank primary key are handled by the
/// per-table parsers).
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn parse(bytes: &[u8], delimiter: char) -> Table {
        let text = decode(bytes);
        let mut lines = text.lines();
        let header = lines.next().unwrap_or_default();
        let raw_columns = split_delimited(header, delimiter);

        // Blank and spreadsheet-artifact columns are dropped up front.
        let kept: Vec<usize> = raw_columns
            .iter()
            .enumerate()
            .filter(|(_, name)| {
                let name = name.trim();
                !name.is_empty() && !name.starts_with("Unnamed")
            })
            .map(|(index, _)| index)
            .collect();
        let columns = kept
            .iter()
            .map(|&index| raw_columns[index].trim().to_string())
            .collect();

        let rows = lines
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let cells = split_delimited(line, delimiter);
                kept.iter()
                    .map(|&index| cells.get(index).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();

        Table { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |cells| Row {
            columns: &self.columns,
            cells,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [String],
    cells: &'a [String],
}

impl<'a> Row<'a> {
    /// Returns None when the column is absent from the table, Some("") when
    /// the cell is present but unset. The two are distinct on purpose.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.columns
            .iter()
            .position(|name| name == column)
            .map(|index| self.cells.get(index).map(String::as_str).unwrap_or(""))
    }

    pub fn text(&self, column: &str) -> String {
        self.get(column).unwrap_or("").trim().to_string()
    }
}

/// UTF-8 when valid, Latin-1 otherwise. Every Latin-1 byte maps to the
/// Unicode scalar of the same value.
fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&byte| byte as char).collect(),
    }
}

fn split_delimited(line: &str, delimiter: char) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == '"' && current.is_empty() {
            in_quotes = true;
        } else if ch == delimiter {
            cells.push(std::mem::take(&mut current));
        } else if ch != '\r' {
            current.push(ch);
        }
    }
    cells.push(current);
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_drops_unnamed_and_blank_columns() {
        let raw = b"id;name;Unnamed: 2;;note\n1;LEAP;x;y;ok\n";
        let table = Table::parse(raw, ';');
        let row = table.rows().next().expect("one row should parse");
        assert_eq!(row.get("id"), Some("1"));
        assert_eq!(row.get("name"), Some("LEAP"));
        assert_eq!(row.get("note"), Some("ok"));
        assert_eq!(row.get("Unnamed: 2"), None);
    }

    #[test]
    fn parse_distinguishes_blank_cell_from_missing_column() {
        let raw = b"id;scale\n4;\n";
        let table = Table::parse(raw, ';');
        let row = table.rows().next().expect("one row should parse");
        assert_eq!(row.get("scale"), Some(""));
        assert_eq!(row.get("approach"), None);
    }

    #[test]
    fn parse_handles_quoted_cells_with_delimiters() {
        let raw = b"id;authors\n7;\"Diop, A.; Mensah, K.\"\n";
        let table = Table::parse(raw, ';');
        let row = table.rows().next().expect("one row should parse");
        assert_eq!(row.get("authors"), Some("Diop, A.; Mensah, K."));
    }

    #[test]
    fn parse_decodes_latin1_bytes() {
        let raw: &[u8] = b"id;name\n9;Conakry \xe9tude\n";
        let table = Table::parse(raw, ';');
        let row = table.rows().next().expect("one row should parse");
        assert_eq!(row.get("name"), Some("Conakry \u{e9}tude"));
    }

    #[test]
    fn parse_skips_fully_blank_lines() {
        let raw = b"id;name\n1;a\n\n   \n2;b\n";
        let table = Table::parse(raw, ';');
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn row_with_fewer_cells_than_columns_reads_blank() {
        let raw = b"id;name;year\n3;short\n";
        let table = Table::parse(raw, ';');
        let row = table.rows().next().expect("one row should parse");
        assert_eq!(row.get("year"), Some(""));
    }
}
