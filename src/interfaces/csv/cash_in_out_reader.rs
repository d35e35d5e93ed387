use crate::domain::asset::CashInOut;
use crate::error::{AssetError, Result};
use std::io::Read;

/// Reads cash-in-out records from a CSV source.
///
/// The header row uses the camelCase field names of [`CashInOut`]; optional
/// columns may be left empty. Whitespace is trimmed around every field.
pub struct CashInOutReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CashInOutReader<R> {
    /// Creates a new `CashInOutReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes records.
    pub fn records(self) -> impl Iterator<Item = Result<CashInOut>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(AssetError::from))
    }

    /// Reads every record, failing on the first malformed row.
    pub fn read_all(self) -> Result<Vec<CashInOut>> {
        self.records().collect()
    }
}
