// src/tabular.rs
//
// Delimited-text parsing: the raw upload blob becomes an ordered sequence
// of flat, untyped records. Domain interpretation happens later, in
// `domain::mapper`.

/// Field delimiter of the upload format. There is no quoting or escaping:
/// a value containing the delimiter shifts the rest of its row. Known
/// limitation of the format, not repaired here.
pub const FIELD_DELIMITER: char = ',';

/// One data row prior to domain interpretation: column names paired with
/// their raw values, in header order. A row shorter than the header keeps
/// its trailing fields unset; fields beyond the header width are dropped
/// at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRecord {
    fields: Vec<(String, Option<String>)>,
}

impl FlatRecord {
    /// Raw value of `column`, if the row carries one.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Column names in header order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn width(&self) -> usize {
        self.fields.len()
    }
}

/// Splits `text` into one record per non-blank data line. The first line
/// is the header; header tokens and values are trimmed. Empty input, or
/// input with only a header line, yields an empty vector rather than an
/// error. Records come back in file order, duplicates included.
pub fn parse(text: &str) -> Vec<FlatRecord> {
    let mut lines = text.lines();

    let headers: Vec<String> = match lines.next() {
        Some(header_line) => header_line
            .split(FIELD_DELIMITER)
            .map(|token| token.trim().to_string())
            .collect(),
        None => return Vec::new(),
    };

    let mut records = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        let mut values = line.split(FIELD_DELIMITER).map(str::trim);
        let fields = headers
            .iter()
            .map(|header| (header.clone(), values.next().map(str::to_string)))
            .collect();

        records.push(FlatRecord { fields });
    }

    records
}
