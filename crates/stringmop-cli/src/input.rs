//! Loading string lists from files.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

/// Loads a list of strings, choosing the format from the file extension.
///
/// - `.json`: a JSON array of strings
/// - `.csv`: the first column of a CSV file with a header row
/// - anything else: one string per non-blank line
pub fn load_strings(path: &Path) -> Result<Vec<String>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let values = match extension.as_deref() {
        Some("json") => {
            let text = read_text(path)?;
            parse_json_list(&text).with_context(|| format!("parse {}", path.display()))?
        }
        Some("csv") => {
            let file = fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
            parse_csv_column(file).with_context(|| format!("parse {}", path.display()))?
        }
        _ => parse_lines(&read_text(path)?),
    };
    debug!(path = %path.display(), count = values.len(), "loaded strings");
    Ok(values)
}

/// Parses a JSON array of strings.
pub fn parse_json_list(text: &str) -> Result<Vec<String>> {
    serde_json::from_str(text).context("expected a JSON array of strings")
}

/// Reads the first column of a headed CSV document.
pub fn parse_csv_column<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut values = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("read CSV row {}", row + 1))?;
        match record.get(0) {
            Some(value) => values.push(value.to_string()),
            None => bail!("CSV row {} has no columns", row + 1),
        }
    }
    Ok(values)
}

/// One string per line, skipping blank lines. Lines keep their own spacing.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_list() {
        let values = parse_json_list(r#"["jamon \nserrano", "Papas Arrugás"]"#).unwrap();
        assert_eq!(values, ["jamon \nserrano", "Papas Arrugás"]);
    }

    #[test]
    fn json_rejects_non_strings() {
        assert!(parse_json_list("[1, 2]").is_err());
        assert!(parse_json_list(r#"{"a": "b"}"#).is_err());
    }

    #[test]
    fn csv_first_column() {
        let data = "name,notes\n\"Jamón Serrano\",cured\nPapas Arrugás,\n";
        let values = parse_csv_column(data.as_bytes()).unwrap();
        assert_eq!(values, ["Jamón Serrano", "Papas Arrugás"]);
    }

    #[test]
    fn lines_skip_blanks() {
        let values = parse_lines("apple\n\n  \nbannana \r\ncherry");
        assert_eq!(values, ["apple", "bannana ", "cherry"]);
    }
}
