//! Terminal UI utilities.
//!
//! A small box-drawing table used for the verbose scan summary.

use colored::*;
use console::{measure_text_width, truncate_str};

const MAX_CELL_WIDTH: usize = 60;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        if row.len() == self.headers.len() {
            self.rows.push(row);
        }
    }

    pub fn print(&self) {
        if self.headers.is_empty() {
            return;
        }

        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| measure_text_width(h))
            .collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i]
                    .max(measure_text_width(cell))
                    .min(MAX_CELL_WIDTH);
            }
        }

        let sep = |left: &str, mid: &str, right: &str| {
            let mut line = String::from("  ");
            line.push_str(left);
            for (i, width) in widths.iter().enumerate() {
                line.push_str(&"─".repeat(width + 2));
                line.push_str(if i < widths.len() - 1 { mid } else { right });
            }
            line
        };

        println!("{}", sep("┌", "┬", "┐"));
        print!("  │");
        for (header, width) in self.headers.iter().zip(&widths) {
            let pad = width.saturating_sub(measure_text_width(header));
            print!(" {}{} │", header.bold(), " ".repeat(pad));
        }
        println!();
        println!("{}", sep("├", "┼", "┤"));

        for row in &self.rows {
            print!("  │");
            for (cell, width) in row.iter().zip(&widths) {
                let shown = truncate_str(cell, *width, "...");
                let pad = width.saturating_sub(measure_text_width(&shown));
                print!(" {}{} │", shown, " ".repeat(pad));
            }
            println!();
        }
        println!("{}", sep("└", "┴", "┘"));
    }
}
