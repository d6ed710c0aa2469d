use anthology::config::init_logging;
use anthology::input::xml::read_collection_file;
use anthology::*;
use anyhow::Context;
use clap::Parser;
use log::{error, info, warn};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Bibliographic records for ACL Anthology papers
///
/// Reads Anthology collection XML files, resolves every paper against its
/// volume and writes the papers either as BibTeX records or as a JSON
/// array of flat dicts.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Collection XML files
    #[clap(required = true, value_name = "file")]
    files: Vec<PathBuf>,

    /// Leave abstracts out of BibTeX records
    #[clap(long)]
    concise: bool,

    /// Read options from "file". Command-line options override it
    #[clap(short('g'), long, value_name = "file")]
    configfile: Option<PathBuf>,

    /// Turn on debugging output
    #[clap(short, long)]
    debug: bool,

    /// Normalise ISBNs with hyphens in the correct places on output
    #[clap(long)]
    isbn_normalise: bool,

    /// Also write the log to "file"
    #[clap(long, value_name = "file")]
    logfile: Option<PathBuf>,

    /// Write output to "file" instead of stdout
    #[clap(short, long, value_name = "file")]
    output: Option<PathBuf>,

    #[clap(long, value_name = "bibtex|json", default_value_t)]
    output_format: OutputFormat,

    /// Log errors only
    #[clap(short, long)]
    quiet: bool,

    /// Turn on tracing output, implies debug
    #[clap(long)]
    trace: bool,
}

impl Args {
    fn log_level(&self) -> &'static str {
        if self.trace {
            "trace"
        } else if self.debug {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _logger = init_logging(args.log_level(), args.logfile.as_deref())?;

    let mut config = match &args.configfile {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("cannot read configuration file '{}'", path.display()))?,
        None => Config::default(),
    };
    config.isbn_normalise |= args.isbn_normalise;
    config.concise |= args.concise;
    let config = Arc::new(config);
    let formatter: Arc<dyn Formatter> = Arc::new(MarkupFormatter);

    let mut records = Vec::new();
    let mut dicts = Vec::new();
    let (mut warnings, mut errors) = (0, 0);
    for file in &args.files {
        let collection = read_collection_file(file, Arc::clone(&config), Arc::clone(&formatter))
            .with_context(|| format!("cannot read collection '{}'", file.display()))?;
        for paper in collection.papers() {
            let exported = match args.output_format {
                OutputFormat::BibTeX => paper.as_bibtex(config.concise).map(|r| records.push(r)),
                OutputFormat::Json => paper
                    .as_dict()
                    .map(|d| dicts.push(serde_json::Value::Object(d))),
            };
            if let Err(e) = exported {
                error!("Skipping paper {}: {}", paper.full_id(), e);
                errors += 1;
            }
            warnings += paper.diagnostics().warnings().len();
            errors += paper.diagnostics().errors().len();
        }
    }

    let text = match args.output_format {
        OutputFormat::BibTeX => records.join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(&dicts)?,
    };
    match &args.output {
        Some(path) => std::fs::write(path, text + "\n")
            .with_context(|| format!("cannot write '{}'", path.display()))?,
        None => writeln!(std::io::stdout().lock(), "{}", text)?,
    }

    let count = records.len() + dicts.len();
    if errors > 0 || warnings > 0 {
        warn!("Wrote {} papers with {} warnings and {} errors", count, warnings, errors);
    } else {
        info!("Wrote {} papers", count);
    }
    Ok(())
}
