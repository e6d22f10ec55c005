//! Rendering fuzzy replacement results.

use std::io::Write;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use stringmop::{FuzzExtraction, FuzzExtractions};

/// Builds a table with one row per source string.
pub fn extraction_table(result: &FuzzExtractions) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            header_cell("Source"),
            header_cell("Replacement"),
            header_cell("Score"),
        ]);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for extraction in result {
        table.add_row(vec![
            Cell::new(printable(&extraction.source)),
            replacement_cell(extraction),
            Cell::new(format_score(extraction.score)),
        ]);
    }
    table
}

/// Prints the table followed by a one-line match count.
pub fn print_table(result: &FuzzExtractions) {
    println!("{}", extraction_table(result));
    println!(
        "Matched {} of {} source strings",
        result.matched_count(),
        result.len()
    );
}

/// Writes the results as pretty JSON.
pub fn write_json<W: Write>(result: &FuzzExtractions, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, result).context("serialize results")?;
    writeln!(writer).context("write results")?;
    Ok(())
}

/// Writes `source,replacement,score` rows; a missing replacement is an empty field.
pub fn write_csv<W: Write>(result: &FuzzExtractions, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer
        .write_record(["source", "replacement", "score"])
        .context("write CSV header")?;
    for extraction in result {
        writer
            .write_record([
                extraction.source.as_str(),
                extraction.replacement.as_deref().unwrap_or(""),
                format_score(extraction.score).as_str(),
            ])
            .context("write CSV row")?;
    }
    writer.flush().context("flush CSV output")?;
    Ok(())
}

/// Scores print with two decimals.
pub fn format_score(score: f64) -> String {
    format!("{score:.2}")
}

fn replacement_cell(extraction: &FuzzExtraction) -> Cell {
    match &extraction.replacement {
        Some(replacement) => Cell::new(printable(replacement)).fg(Color::Green),
        None => Cell::new("-").add_attribute(Attribute::Dim),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

/// Shows control whitespace escaped so rows stay on one line.
fn printable(value: &str) -> String {
    value.escape_debug().to_string()
}
