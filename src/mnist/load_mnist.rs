use std::fs::File;
use std::io;
use std::path::Path;

use super::{LoadError, LoadOptions};
use crate::{Observation, Pixel};

// Load labeled images from a csv file.
// The expected format is:
// - An optional header row (present by default)
// - One image per row
// - Each row starts with the class label
// - The rest of the row consists of the pixel values as integers, usually 0-255
// - Every row has the same number of fields
pub fn load_mnist(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<Vec<Observation>, LoadError> {
    let file = File::open(path).map_err(csv::Error::from)?;
    read_mnist(file, options)
}

// As above, but from any reader
pub fn read_mnist<R: io::Read>(
    reader: R,
    options: &LoadOptions,
) -> Result<Vec<Observation>, LoadError> {
    // Use the CSV crate. It rejects rows whose length differs from the first one.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(options.has_headers)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let observations = reader
        .records()
        .take(options.max_examples)
        .map(|result| parse_record(&result?))
        .collect();
    observations
}

fn parse_record(record: &csv::StringRecord) -> Result<Observation, LoadError> {
    let line = record.position().map_or(0, |position| position.line());

    let label = match record.get(0) {
        Some(label) if !label.is_empty() => label,
        _ => return Err(LoadError::MissingLabel { line }),
    };
    if record.len() < 2 {
        return Err(LoadError::MissingPixels { line });
    }

    let pixels = record
        .iter()
        .enumerate()
        .skip(1) // Skip the label
        .map(|(column, value)| {
            value
                .parse::<Pixel>()
                .map_err(|_| LoadError::InvalidPixel {
                    line,
                    column,
                    value: value.to_owned(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Observation::new(label, pixels))
}
