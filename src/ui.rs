#![cfg(feature = "std")]

use std::fmt::Write;

use crate::{
    board::Board,
    grid::{CellStatus, ColumnLabel, Coordinate, Grid},
};

fn header(out: &mut String, size: usize, width: usize) {
    out.push_str("   ");
    for c in 0..size {
        let _ = write!(out, " {:>width$}", ColumnLabel(c), width = width);
    }
    out.push('\n');
}

fn render_cells<F>(size: usize, width: usize, mut cell: F) -> String
where
    F: FnMut(Coordinate) -> String,
{
    // the last column has the longest name
    let width = width.max(ColumnLabel(size.saturating_sub(1)).to_string().len());
    let mut out = String::new();
    header(&mut out, size, width);
    for r in 0..size {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..size {
            let _ = write!(out, " {:>width$}", cell(Coordinate::new(r, c)), width = width);
        }
        out.push('\n');
    }
    out
}

/// A strategy's view of the opponent board with lettered columns.
pub fn render_status(status: &Grid<CellStatus>) -> String {
    render_cells(status.size(), 1, |coord| {
        status.at(coord).unwrap_or_default().glyph().to_string()
    })
}

/// Density scores, right-aligned to the widest value.
pub fn render_density(density: &Grid<u64>) -> String {
    let widest = density
        .iter()
        .map(|(_, v)| v.to_string().len())
        .max()
        .unwrap_or(1);
    render_cells(density.size(), widest, |coord| {
        density.at(coord).unwrap_or(0).to_string()
    })
}

/// The fleet board: `#` intact ship, `X` hit, `o` miss, `.` open water.
pub fn render_board(board: &Board) -> String {
    render_cells(board.size(), 1, |coord| {
        let glyph = match (board.ship_at(coord).is_some(), board.is_fired(coord)) {
            (true, true) => 'X',
            (true, false) => '#',
            (false, true) => 'o',
            (false, false) => '.',
        };
        glyph.to_string()
    })
}
