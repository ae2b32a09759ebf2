//! CLI output formatting for the photo roll.
//!
//! Each view has a `format_*` function (returns `Vec<String>` or `String`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ```text
//! Photos
//! 001 8f3c2a1e-…  2026-08-23 10:41:09  38.2 KB
//! 002 d94b07cc-…  2026-08-21 18:02:55  41.7 KB
//!
//! 2 photos
//! ```

use crate::store::ImageRecord;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Human-readable byte size: bytes, KB, or MB with one decimal.
fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

/// One line per record: index, id, creation time, stored size.
pub fn format_record_line(index: usize, record: &ImageRecord) -> String {
    format!(
        "{} {}  {}  {}",
        format_index(index),
        record.id,
        record.created_at.format("%Y-%m-%d %H:%M:%S"),
        format_size(record.image_data.len())
    )
}

/// Format the whole roll, newest first, with a count footer.
pub fn format_roll(records: &[ImageRecord]) -> Vec<String> {
    if records.is_empty() {
        return vec!["No photos yet".to_string()];
    }

    let mut lines = vec!["Photos".to_string()];
    for (i, record) in records.iter().enumerate() {
        lines.push(format_record_line(i + 1, record));
    }
    lines.push(String::new());
    let noun = if records.len() == 1 { "photo" } else { "photos" };
    lines.push(format!("{} {}", records.len(), noun));
    lines
}

pub fn print_roll(records: &[ImageRecord]) {
    for line in format_roll(records) {
        println!("{}", line);
    }
}

pub fn format_added(record: &ImageRecord) -> String {
    format!(
        "Added {} ({})",
        record.id,
        format_size(record.image_data.len())
    )
}

pub fn print_added(record: &ImageRecord) {
    println!("{}", format_added(record));
}

pub fn format_removed(record: &ImageRecord) -> String {
    format!("Removed {}", record.id)
}

pub fn print_removed(record: &ImageRecord) {
    println!("{}", format_removed(record));
}
