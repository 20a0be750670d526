use {
    crate::Record,
    std::{fs::File, io::BufReader, path::Path},
    tap::Tap,
    tracing::instrument,
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not open input file '{path}'")]
    Opening {
        path: Box<str>,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not parse '{path}' as an array of JSON objects")]
    Parsing {
        path: Box<str>,
        #[source]
        source: serde_json::Error,
    },
}

type Result<T> = std::result::Result<T, self::Error>;

/// Reads the whole input document into memory. Anything other than a
/// top-level array of objects is a parse error.
#[instrument]
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    File::open(path)
        .map_err(|source| self::Error::Opening {
            path: path.display().to_string().into(),
            source,
        })
        .map(BufReader::new)
        .and_then(|reader| {
            serde_json::from_reader::<_, Vec<Record>>(reader).map_err(|source| self::Error::Parsing {
                path: path.display().to_string().into(),
                source,
            })
        })
        .map(|records| records.tap(|records| tracing::debug!(count = records.len(), "loaded records")))
}
