//! Console output helpers.
//!
//! Small styled-print helpers shared by the subcommands. Status lines go to
//! stdout; errors go to stderr so failures stay visible when stdout is
//! piped.

use std::fmt::Display;

use console::style;

/// Prints a section header for a workflow phase.
pub fn print_section(title: &str) {
    println!("\n{}\n", style(format!("----- {} -----", title.to_uppercase())).cyan().bold());
}

/// Prints an aligned label/value status line.
pub fn print_status<T: Display>(label: &str, value: T) {
    println!("  {:<18} {}", format!("{label}:"), value);
}

/// Prints a success line with a green check mark.
pub fn print_success(message: &str) {
    println!("  {} {}", style("✓").green().bold(), style(message).bold());
}

/// Prints an error line with a red cross to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), style(message).red());
}
