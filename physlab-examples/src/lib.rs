//! Shared helpers for the physlab example binaries.

/// Prints a section banner: the title over a rule of matching width.
pub fn banner(title: &str) {
    println!("{title}");
    println!("{}", "-".repeat(title.chars().count()));
}
