use {serde::Serialize, std::io::Write};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not serialize records to yaml")]
    Serializing(#[source] serde_yaml::Error),
}

type Result<T> = std::result::Result<T, self::Error>;

/// Serializes the whole record sequence with its nesting intact. The only
/// writer whose output parses back into the original structure.
pub fn write_records<W: Write, T: Serialize>(writer: W, records: &[T]) -> Result<()> {
    serde_yaml::to_writer(writer, records).map_err(self::Error::Serializing)
}
