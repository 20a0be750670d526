use {
    super::{cell, header_keys},
    crate::Record,
    std::io::Write,
    tap::Pipe,
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not write headers")]
    WritingHeaders(#[source] csv::Error),
    #[error("Writing record #{idx}")]
    WritingRecord {
        idx: usize,
        #[source]
        source: csv::Error,
    },
    #[error("Could not flush the csv writer")]
    Flushing(#[source] std::io::Error),
}

type Result<T> = std::result::Result<T, self::Error>;

/// Header row from the first record, then one row per record. Quoting of
/// delimiters, quotes and newlines is the csv crate's standard behavior.
pub fn write_records<W: Write>(writer: W, records: &[Record]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().from_writer(writer);
    let headers = header_keys(records);
    writer
        .write_record(&headers)
        .map_err(self::Error::WritingHeaders)?;
    records
        .iter()
        .enumerate()
        .try_for_each(|(idx, record)| {
            headers
                .iter()
                .map(|header| cell(record, header))
                .collect::<Vec<_>>()
                .pipe(|row| writer.write_record(&row))
                .map_err(|source| self::Error::WritingRecord { idx, source })
        })
        .and_then(|()| writer.flush().map_err(self::Error::Flushing))
}
