/// Plain-text table rendering for habit listings
///
/// Renders habits in a bordered grid with their full-history longest streak,
/// which is the per-habit statistic shown in listings.

use chrono::NaiveDate;
use crate::domain::{streak, Habit};

const HEADERS: [&str; 7] = [
    "Id",
    "Name",
    "Description",
    "Frequency",
    "Longest Streak",
    "Start Date",
    "End Date",
];

/// Render a habit listing as a bordered table
pub fn render_habits(habits: &[Habit], as_of: NaiveDate) -> String {
    let rows: Vec<Vec<String>> = habits
        .iter()
        .map(|habit| {
            vec![
                habit.id.to_string(),
                habit.name.clone(),
                habit.description.clone(),
                habit.frequency.to_string(),
                streak::streak_history(habit, as_of).to_string(),
                habit.start_date.to_string(),
                habit.end_date.to_string(),
            ]
        })
        .collect();

    render(&HEADERS, &rows)
}

/// Render headers and rows as a bordered grid
///
/// Column widths grow to fit the widest cell; all cells are left-aligned.
fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let border: String = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };

    let format_row = |cells: &[String]| -> String {
        let mut line = String::from("|");
        for (i, cell) in cells.iter().enumerate() {
            line.push_str(&format!(" {:<width$} |", cell, width = widths[i]));
        }
        line.push('\n');
        line
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&format_row(&header_cells));
    out.push_str(&border);
    for row in rows {
        out.push_str(&format_row(row));
    }
    out.push_str(&border);
    out
}
