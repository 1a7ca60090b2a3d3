use clap::Parser;
use sheet_inspector::cli;
use sheet_inspector::writer::DEFAULT_OUTPUT;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sheet-inspect")]
#[command(about = "Inspect a spreadsheet workbook: extents, formulas and keyword-labelled cells.")]
#[command(long_about = "sheet-inspect - workbook diagnostics

Opens a workbook read-only (xlsx, xlsm, xlsb, xls, ods), walks every sheet
in stored order and prints:
  - the sheet extent (rows × columns)
  - a preview of the first 20 rows × 15 columns
  - formulas found in the first 100 rows × 50 columns
  - text cells containing a tracked keyword
    (face, kpi, energy, coherence, pentagram, breath, ratio, axis,
     phi, golden, element, ball, pillar)

A JSON summary is written afterwards. Nothing is written on failure.

EXIT CODES:
  0  success
  1  workbook could not be analyzed
  2  workbook not found

EXAMPLES:
  sheet-inspect dashboard.xlsx
  sheet-inspect dashboard.xlsx -o summary.json
  RUST_LOG=sheet_inspector=debug sheet-inspect dashboard.xlsx")]
#[command(version)]
struct Cli {
    /// Path to the workbook
    file: PathBuf,

    /// Where to write the JSON summary
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Log loading and scanning details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "sheet_inspector=debug"
    } else {
        "sheet_inspector=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli::inspect(&cli.file, &cli.output) {
        Ok(()) => ExitCode::from(cli::EXIT_SUCCESS),
        Err(err) => {
            cli::report_failure(&err);
            ExitCode::from(cli::exit_code(&err))
        }
    }
}
