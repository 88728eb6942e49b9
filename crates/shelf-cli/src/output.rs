//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use std::io::{self, Write};

use anyhow::Result;
use shelf_core::{Book, Config};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print the whole library as a numbered list
    pub fn print_library(&self, books: &[Book]) -> Result<()> {
        self.write_library(&mut io::stdout().lock(), books)
    }

    fn write_library(&self, out: &mut impl Write, books: &[Book]) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                writeln!(out, "=== My Library ===")?;
                if books.is_empty() {
                    writeln!(out, "No books in library yet.")?;
                    return Ok(());
                }
                for (index, book) in books.iter().enumerate() {
                    writeln!(out, "{}. {}", index + 1, book.describe())?;
                }
                writeln!(out, "\nTotal books: {}", books.len())?;
            }
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(books)?)?;
            }
            OutputFormat::Quiet => {
                for book in books {
                    writeln!(out, "{}", book.title)?;
                }
            }
        }
        Ok(())
    }

    /// Print a single book
    pub fn print_book(&self, book: &Book) -> Result<()> {
        self.write_book(&mut io::stdout().lock(), book)
    }

    fn write_book(&self, out: &mut impl Write, book: &Book) -> Result<()> {
        match self.format {
            OutputFormat::Human => writeln!(out, "{}", book.describe())?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(book)?)?,
            OutputFormat::Quiet => writeln!(out, "{}", book.title)?,
        }
        Ok(())
    }

    /// Print the effective configuration
    pub fn print_config(&self, config: &Config, config_path: &std::path::Path) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                println!("Config file:  {}", config_path.display());
                println!("data_dir:     {}", config.data_dir.display());
                println!("seed_samples: {}", config.seed_samples);
                println!("log_file:     {}", config.log_path().display());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(config)?);
            }
            OutputFormat::Quiet => {
                println!("{}", config_path.display());
            }
        }
        Ok(())
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }
}
