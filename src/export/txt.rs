use {super::display_value, crate::Record, std::io::Write};

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

/// One `key: value` line per field using each record's own full key set
/// (no header row), then a blank line after every record.
pub fn write_records<W: Write>(mut writer: W, records: &[Record]) -> Result<()> {
    records.iter().enumerate().try_for_each(|(idx, record)| {
        record
            .iter()
            .try_for_each(|(key, value)| writeln!(writer, "{key}: {}", display_value(value)))
            .and_then(|()| writeln!(writer))
            .map_err(|source| self::Error::WritingRecord { idx, source })
    })
}
