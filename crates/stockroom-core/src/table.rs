//! # Table Renderer
//!
//! Renders headers and pre-formatted cells as a box-drawing table.
//!
//! ```text
//! ┌────────┬────────┬────────┬───────┬───────┐   ◄── top border
//! │ Name   │ Brand  │ Type   │ Price │ Stock │
//! ├────────┼────────┼────────┼───────┼───────┤   ◄── header separator
//! │ Widget │ AcmeCo │ Gadget │ 9.99  │ 10    │
//! └────────┴────────┴────────┴───────┴───────┘   ◄── bottom border
//! ```
//!
//! Widths count `char`s, not terminal columns. Wide or combining characters
//! will misalign; nothing is wrapped or truncated.

use std::fmt::Write;

/// Horizontal border glyphs: left corner, column junction, right corner.
struct Border {
    left: char,
    mid: char,
    right: char,
}

const TOP: Border = Border {
    left: '┌',
    mid: '┬',
    right: '┐',
};

const SEPARATOR: Border = Border {
    left: '├',
    mid: '┼',
    right: '┤',
};

const BOTTOM: Border = Border {
    left: '└',
    mid: '┴',
    right: '┘',
};

/// Computes each column's width from the headers and every row.
///
/// Cells past the last header are ignored.
pub fn column_widths<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();

    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.as_ref().chars().count());
        }
    }

    widths
}

fn push_line(out: &mut String, widths: &[usize], border: &Border) {
    out.push(border.left);
    for (i, width) in widths.iter().enumerate() {
        out.extend(std::iter::repeat('─').take(width + 2));
        if i + 1 < widths.len() {
            out.push(border.mid);
        }
    }
    out.push(border.right);
    out.push('\n');
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map_or("", |c| c.as_ref());
        // Writing into a String cannot fail.
        let _ = write!(out, "│ {:<width$} ", cell, width = *width);
    }
    out.push_str("│\n");
}

/// Renders a full table.
///
/// Short rows are padded with empty cells. Every line, including the last,
/// ends with `\n`.
///
/// ## Example
/// ```rust
/// use stockroom_core::render_table;
///
/// let table = render_table(&["Name", "Stock"], &[vec!["A", "1"]]);
/// assert_eq!(
///     table,
///     "┌──────┬───────┐\n\
///      │ Name │ Stock │\n\
///      ├──────┼───────┤\n\
///      │ A    │ 1     │\n\
///      └──────┴───────┘\n"
/// );
/// ```
pub fn render_table<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>]) -> String {
    let widths = column_widths(headers, rows);
    let mut out = String::new();

    push_line(&mut out, &widths, &TOP);
    push_row(&mut out, headers, &widths);
    push_line(&mut out, &widths, &SEPARATOR);

    for row in rows {
        push_row(&mut out, row, &widths);
    }

    push_line(&mut out, &widths, &BOTTOM);
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
