use {
    crate::{Record, flat_key::flatten::flattened_record},
    serde_json::Value,
    std::{
        fmt,
        fs::File,
        io::{BufWriter, Write},
        path::{Path, PathBuf},
        str::FromStr,
    },
    tap::Pipe,
    tracing::instrument,
};

pub mod csv;
pub mod md;
pub mod sql;
pub mod txt;
pub mod yaml;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Txt,
    Md,
    Sql,
    Yaml,
}

impl Format {
    pub const ALL: [Format; 5] = [Format::Csv, Format::Txt, Format::Md, Format::Sql, Format::Yaml];

    /// The identifier accepted on the command line, doubling as the
    /// default output file extension.
    pub fn identifier(self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Txt => "txt",
            Format::Md => "md",
            Format::Sql => "sql",
            Format::Yaml => "yaml",
        }
    }

    /// Writers that lay records out as flat text need a first record to
    /// derive a shape from; the structured writer does not.
    fn requires_records(self) -> bool {
        !matches!(self, Format::Yaml)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Format {
    type Err = self::Error;

    fn from_str(identifier: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.identifier() == identifier)
            .ok_or_else(|| self::Error::UnsupportedFormat {
                identifier: identifier.into(),
            })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unsupported output format '{identifier}', supported formats are: csv, txt, md, sql, yaml")]
    UnsupportedFormat { identifier: Box<str> },
    #[error("No records to lay out as {format}")]
    NoRecords { format: Format },
    #[error("Could not create output file '{path}'")]
    CreatingOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not flush output file '{path}'")]
    FlushingOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Writing csv output")]
    Csv(#[source] self::csv::Error),
    #[error("Writing txt output")]
    Txt(#[source] self::txt::Error),
    #[error("Writing md output")]
    Md(#[source] self::md::Error),
    #[error("Writing sql output")]
    Sql(#[source] self::sql::Error),
    #[error("Writing yaml output")]
    Yaml(#[source] self::yaml::Error),
}

type Result<T> = std::result::Result<T, self::Error>;

#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Collapse nesting into dotted columns before the flat-text writers
    /// see the records. Off by default: without it, nested values reach
    /// the writers untouched and render as compact JSON text.
    pub flatten: bool,
    /// Table name used by the sql writer.
    pub sql_table: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            flatten: false,
            sql_table: "records".to_string(),
        }
    }
}

/// Cell rendering shared by the csv/txt/md/sql writers. Containers only
/// show up here when flattening is off.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(value) => value.to_string(),
        Value::Number(value) => value.to_string(),
        Value::String(value) => value.clone(),
        container => container.to_string(),
    }
}

/// Column names for the tabular writers: the first record's keys, in
/// document order. Later records' extra keys are dropped.
pub(crate) fn header_keys(records: &[Record]) -> Vec<String> {
    records
        .first()
        .map(|record| record.keys().cloned().collect())
        .unwrap_or_default()
}

pub(crate) fn cell(record: &Record, key: &str) -> String {
    record.get(key).unwrap_or(&Value::Null).pipe(display_value)
}

#[instrument(skip(writer, records), fields(count = records.len()))]
pub fn render<W: Write>(writer: &mut W, records: &[Record], format: Format, options: &ExportOptions) -> Result<()> {
    if format.requires_records() && records.is_empty() {
        return Err(self::Error::NoRecords { format });
    }
    let flat;
    let records = match options.flatten && format.requires_records() {
        true => {
            flat = records.iter().cloned().map(flattened_record).collect::<Vec<_>>();
            flat.as_slice()
        }
        false => records,
    };
    match format {
        Format::Csv => self::csv::write_records(writer, records).map_err(self::Error::Csv),
        Format::Txt => self::txt::write_records(writer, records).map_err(self::Error::Txt),
        Format::Md => self::md::write_records(writer, records).map_err(self::Error::Md),
        Format::Sql => self::sql::write_records(writer, records, &options.sql_table).map_err(self::Error::Sql),
        Format::Yaml => self::yaml::write_records(writer, records).map_err(self::Error::Yaml),
    }
}

/// Writes the whole output in one pass. Precondition failures surface
/// before the output file is created; the handle is flushed and released
/// on every exit path by scope.
#[instrument(skip(records), fields(count = records.len()))]
pub fn export_to_path(path: &Path, records: &[Record], format: Format, options: &ExportOptions) -> Result<()> {
    if format.requires_records() && records.is_empty() {
        return Err(self::Error::NoRecords { format });
    }
    File::create(path)
        .map_err(|source| self::Error::CreatingOutput {
            path: path.to_path_buf(),
            source,
        })
        .map(BufWriter::new)
        .and_then(|mut writer| {
            render(&mut writer, records, format, options).and_then(|()| {
                writer.flush().map_err(|source| self::Error::FlushingOutput {
                    path: path.to_path_buf(),
                    source,
                })
            })
        })
}

#[extension_traits::extension(pub trait PathFormatExt)]
impl Path {
    /// Default output path: the input path with its extension replaced by
    /// the format identifier.
    fn with_format_extension(&self, format: Format) -> PathBuf {
        self.with_extension(format.identifier())
    }
}
