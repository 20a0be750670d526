use {
    super::{cell, header_keys},
    crate::Record,
    itertools::Itertools,
    std::io::Write,
    tap::Pipe,
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Writing record #{idx}")]
    WritingRecord {
        idx: usize,
        #[source]
        source: std::io::Error,
    },
}

type Result<T> = std::result::Result<T, self::Error>;

/// Single quotes inside the literal are doubled; everything else passes
/// through verbatim.
fn quoted(value: String) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// One `INSERT INTO <table> (<columns>) VALUES (<values>);` statement per
/// record, one per line. Columns come from the first record's keys.
pub fn write_records<W: Write>(mut writer: W, records: &[Record], table: &str) -> Result<()> {
    let headers = header_keys(records);
    let columns = headers.iter().join(", ");
    records.iter().enumerate().try_for_each(|(idx, record)| {
        headers
            .iter()
            .map(|header| cell(record, header).pipe(quoted))
            .join(", ")
            .pipe(|values| writeln!(writer, "INSERT INTO {table} ({columns}) VALUES ({values});"))
            .map_err(|source| self::Error::WritingRecord { idx, source })
    })
}

#[cfg(test)]
mod tests {
    use super::quoted;

    #[test]
    fn test_quoted_doubles_single_quotes() {
        assert_eq!(quoted("O'Brien".to_string()), "'O''Brien'");
        assert_eq!(quoted("plain".to_string()), "'plain'");
    }
}
