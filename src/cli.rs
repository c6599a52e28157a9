use std::path::PathBuf;

use clap::Parser;

use crate::search::NumberFormat;

#[derive(Parser)]
#[command(name = "flower-search")]
#[command(about = "Search a flower catalog by name, year, or price", long_about = None)]
pub struct Cli {
    /// Search query; each word must independently match an item by name,
    /// year, or price. Empty shows the whole (scoped) catalog.
    #[arg(default_value = "")]
    pub query: String,

    /// Category scope: all, birthdays, weddings, or funerals.
    #[arg(short, long, default_value = "all")]
    pub scope: String,

    /// JSON catalog file; defaults to the built-in sample catalog.
    #[arg(short = 'c', long = "catalog")]
    pub catalog: Option<PathBuf>,

    /// Decimal separator used when parsing numeric query tokens.
    #[arg(long, value_enum, default_value_t = DecimalSeparator::Period)]
    pub decimal_separator: DecimalSeparator,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum DecimalSeparator {
    Period,
    Comma,
}

impl From<DecimalSeparator> for NumberFormat {
    fn from(separator: DecimalSeparator) -> Self {
        match separator {
            DecimalSeparator::Period => Self::Period,
            DecimalSeparator::Comma => Self::Comma,
        }
    }
}
