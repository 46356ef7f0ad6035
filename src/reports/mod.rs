use coltrans::analysis::CharFrequency;
use coltrans::cipher::Encoding;
use coltrans::error::TrResult;
use coltrans::grid::Grid;
use coltrans::key::Key;
use coltrans::search::CandidateResult;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::path::Path;

fn grid_table(headers: Vec<String>, grid: &Grid) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.set_header(headers.into_iter().map(|h| {
        Cell::new(h)
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Center)
    }));

    for row in grid.row_cells() {
        let cells: Vec<Cell> = row
            .iter()
            .map(|c| match c {
                Some(ch) => Cell::new(ch).set_alignment(CellAlignment::Center),
                None => Cell::new("-")
                    .fg(Color::DarkGrey)
                    .set_alignment(CellAlignment::Center),
            })
            .collect();
        table.add_row(cells);
    }
    table
}

pub fn print_plaintext_grid(grid: &Grid) {
    println!("\nPlaintext Grid");
    let headers = (1..=grid.columns()).map(|i| i.to_string()).collect();
    println!("{}", grid_table(headers, grid));
}

/// Headers show the rank of the column read at each position.
pub fn print_cipher_grid(encoding: &Encoding, key: &Key) {
    println!("\nCiphertext Grid");
    let headers = encoding
        .column_order
        .iter()
        .map(|col| key.ranks()[col].to_string())
        .collect();
    println!("{}", grid_table(headers, &encoding.cipher_grid));
}

pub fn print_candidates(shown: &[CandidateResult], total: usize) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("Len").add_attribute(Attribute::Bold),
        Cell::new("Decoded").fg(Color::Cyan),
    ]);

    if let Some(col) = table.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (i, c) in shown.iter().enumerate() {
        let key = c
            .key
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let key_cell = if i == 0 {
            Cell::new(format!("[{}]", key)).fg(Color::Green)
        } else {
            Cell::new(format!("[{}]", key))
        };

        table.add_row(vec![
            Cell::new(i + 1),
            key_cell,
            Cell::new(c.key_length),
            Cell::new(&c.decoded),
        ]);
    }

    println!("\nCandidates ({} of {})", shown.len(), total);
    println!("{}", table);
}

pub fn print_frequencies(freqs: &[CharFrequency]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.set_header(vec![
        Cell::new("Char").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("%").fg(Color::Cyan),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for f in freqs {
        table.add_row(vec![
            Cell::new(f.ch).set_alignment(CellAlignment::Center),
            Cell::new(f.count),
            Cell::new(format!("{:.1}", f.percent)),
        ]);
    }

    let total: usize = freqs.iter().map(|f| f.count).sum();
    println!("\n{}", table);
    println!("Total characters: {}", total);
}

pub fn write_candidates_csv(path: &Path, candidates: &[CandidateResult]) -> TrResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["key", "key_length", "decoded"])?;

    for c in candidates {
        let key = c
            .key
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        wtr.write_record([key, c.key_length.to_string(), c.decoded.clone()])?;
    }

    wtr.flush()?;
    Ok(())
}
