//! sheet2sql CLI - delimited tabular data to SQL scripts.

use clap::Parser;
use sheet2sql::{
    generate_script, DelimitedReader, Dialect, OverridesConfig, PinyinMode, PlanOptions,
    SqlGenError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser)]
#[command(name = "sheet2sql")]
#[command(about = "Generate DROP/CREATE/INSERT SQL scripts from delimited tabular data")]
#[command(version)]
struct Cli {
    /// Input file (CSV or other delimited text)
    input: PathBuf,

    /// Target database dialect: sqlserver, mysql or oracle
    #[arg(short, long, default_value = "sqlserver")]
    dialect: String,

    /// Output table name [default: input file stem]
    #[arg(short, long)]
    table: Option<String>,

    /// Header transliteration mode: full or initials
    #[arg(short, long)]
    mode: Option<String>,

    /// Path to YAML column overrides file
    #[arg(long)]
    columns: Option<PathBuf>,

    /// Field delimiter: a single character, or "tab"
    #[arg(long, default_value = ",")]
    delimiter: String,

    /// Input byte encoding label (utf-8, gbk, gb2312, ...)
    #[arg(long, default_value = "utf-8")]
    encoding: String,

    /// 1-based row number holding the column headers
    #[arg(long, default_value = "1")]
    header_row: usize,

    /// Limit the number of data rows read from the input
    #[arg(long)]
    max_rows: Option<usize>,

    /// Write the script to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "warn")]
    verbosity: String,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), SqlGenError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format)
        .map_err(|e| SqlGenError::Config(e.to_string()))?;

    let dialect: Dialect = cli.dialect.parse()?;

    let config = match &cli.columns {
        Some(path) => {
            let config = OverridesConfig::load(path)?;
            info!("Loaded column overrides from {:?}", path);
            config
        }
        None => OverridesConfig::default(),
    };

    // Explicit flag beats the overrides file; both beat the default.
    let mode = match &cli.mode {
        Some(mode) => mode.parse::<PinyinMode>()?,
        None => config.pinyin_mode.unwrap_or_default(),
    };

    let table = cli
        .table
        .clone()
        .or_else(|| config.table.clone())
        .or_else(|| {
            cli.input
                .file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_default();

    if cli.header_row == 0 {
        return Err(SqlGenError::Config(
            "--header-row is 1-based and must be at least 1".to_string(),
        ));
    }

    let reader = DelimitedReader::new()
        .with_delimiter(parse_delimiter(&cli.delimiter)?)
        .with_encoding(&cli.encoding)?
        .with_header_row(cli.header_row - 1)
        .with_max_rows(cli.max_rows);

    let data = reader.read_path(&cli.input)?;
    info!(
        rows = data.rows.len(),
        columns = data.headers.len(),
        "Read input from {:?}",
        cli.input
    );

    let script = generate_script(dialect, &table, &data, &config.columns, PlanOptions { mode });

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &script)?;
            info!("Wrote script to {:?}", path);
        }
        None => print!("{}", script),
    }

    Ok(())
}

/// Parse the delimiter argument into a single byte.
fn parse_delimiter(arg: &str) -> Result<u8, SqlGenError> {
    if arg.eq_ignore_ascii_case("tab") || arg == "\\t" {
        return Ok(b'\t');
    }
    match arg.as_bytes() {
        [b] => Ok(*b),
        _ => Err(SqlGenError::Config(format!(
            "Delimiter must be a single character: {:?}",
            arg
        ))),
    }
}

fn setup_logging(verbosity: &str, format: &str) -> Result<(), String> {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr; stdout is reserved for the generated script.
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimiter_single_char() {
        assert_eq!(parse_delimiter(",").unwrap(), b',');
        assert_eq!(parse_delimiter(";").unwrap(), b';');
    }

    #[test]
    fn test_parse_delimiter_tab_aliases() {
        assert_eq!(parse_delimiter("tab").unwrap(), b'\t');
        assert_eq!(parse_delimiter("\\t").unwrap(), b'\t');
    }

    #[test]
    fn test_parse_delimiter_rejects_multichar() {
        assert!(parse_delimiter("||").is_err());
        assert!(parse_delimiter("").is_err());
    }
}
