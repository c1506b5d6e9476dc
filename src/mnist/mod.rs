// This module contains all the code that reads MNIST-style CSV files

use thiserror::Error;

mod load_mnist;
pub use load_mnist::{load_mnist, read_mnist};

// How to read a CSV file of labeled images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    // Whether the first row holds column names rather than an image
    pub has_headers: bool,
    // Stop after this many images
    pub max_examples: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            has_headers: true,
            max_examples: usize::MAX,
        }
    }
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing label on line {line}")]
    MissingLabel { line: u64 },

    #[error("No pixel values on line {line}")]
    MissingPixels { line: u64 },

    #[error("Invalid pixel {value:?} on line {line}, column {column}")]
    InvalidPixel {
        line: u64,
        column: usize,
        value: String,
    },
}
