use {
    anyhow::{Context, Result, ensure},
    clap::Parser,
    jsonexport::{
        export::{ExportOptions, Format, PathFormatExt, export_to_path},
        input::read_records,
    },
    std::path::PathBuf,
    tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser, Debug)]
#[command(name = "jsonexport")]
#[command(about = "Convert a JSON array of objects into csv, txt, md, sql or yaml", long_about = None)]
struct Args {
    /// Path to the input JSON file
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Output format: csv, txt, md, sql or yaml
    #[arg(short = 's', long = "format", default_value = "csv")]
    format: Format,

    /// Path to the output file (defaults to the input path with the
    /// format identifier as its extension)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Collapse nested objects and arrays into dotted columns before
    /// writing csv, txt, md or sql
    #[arg(long)]
    flatten: bool,

    /// Table name for sql output (defaults to the input file stem)
    #[arg(long)]
    table: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        true => EnvFilter::new("jsonexport=debug,info"),
        false => EnvFilter::new("jsonexport=info"),
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    ensure!(
        args.file.exists(),
        "The file '{}' does not exist. Please check the -f file path.",
        args.file.display()
    );

    let output = args
        .output
        .unwrap_or_else(|| args.file.with_format_extension(args.format));
    let options = ExportOptions {
        flatten: args.flatten,
        sql_table: args.table.unwrap_or_else(|| {
            args.file
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "records".to_string())
        }),
    };

    let records = read_records(&args.file).context("loading input")?;
    export_to_path(&output, &records, args.format, &options)
        .with_context(|| format!("writing {} output", args.format))?;

    println!("Conversion successful. Output file: {}", output.display());
    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error:?}");
    }
}
