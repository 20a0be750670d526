use {
    super::{cell, header_keys},
    crate::Record,
    itertools::Itertools,
    std::io::Write,
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not write the header rows")]
    WritingHeaders(#[source] std::io::Error),
    #[error("Writing record #{idx}")]
    WritingRecord {
        idx: usize,
        #[source]
        source: std::io::Error,
    },
}

type Result<T> = std::result::Result<T, self::Error>;

fn row<C: std::fmt::Display>(cells: impl IntoIterator<Item = C>) -> String {
    format!("| {} |", cells.into_iter().join(" | "))
}

/// Pipe-delimited table: header row from the first record, a `---`
/// separator row, then csv-shaped data rows. Pipes inside values are not
/// escaped.
pub fn write_records<W: Write>(mut writer: W, records: &[Record]) -> Result<()> {
    let headers = header_keys(records);
    writeln!(writer, "{}", row(headers.iter()))
        .and_then(|()| writeln!(writer, "{}", row(headers.iter().map(|_| "---"))))
        .map_err(self::Error::WritingHeaders)?;
    records.iter().enumerate().try_for_each(|(idx, record)| {
        writeln!(writer, "{}", row(headers.iter().map(|header| cell(record, header))))
            .map_err(|source| self::Error::WritingRecord { idx, source })
    })
}
