//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use ecrist_search::CatalogRecord;
use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Print one product as an indented row: name, category, material, price.
pub fn print_product(index: usize, record: &CatalogRecord) {
    println!(
        "{:>3}. {}  {}",
        index,
        record.name.bold(),
        format_price(&record.price).dimmed()
    );
    let material = record.material.as_deref().unwrap_or("-");
    println!("     {} · {}", record.category.cyan(), material);
}

/// Format a duration for display
///
/// Search calls are usually sub-millisecond, so microseconds are shown too.
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 0.001 {
        format!("{}µs", duration.as_micros())
    } else if secs < 1.0 {
        format!("{:.1}ms", secs * 1000.0)
    } else {
        format!("{:.2}s", secs)
    }
}

/// Format a decimal price string, leaving it out when unknown
pub fn format_price(price: &str) -> String {
    if price.is_empty() {
        String::new()
    } else {
        format!("{} €", price)
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_duration_micros() {
        assert_eq!(format_duration(Duration::from_micros(250)), "250µs");
    }

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration(Duration::from_micros(1500)), "1.5ms");
    }

    #[test]
    fn test_format_duration_secs() {
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.50s");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("12.99"), "12.99 €");
        assert_eq!(format_price(""), "");
    }

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "product", "products"), "1 product");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(0, "product", "products"), "0 products");
    }
}
