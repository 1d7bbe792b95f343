use clap::Parser;
use danfe::{InvoiceRecord, PipelineBuilder, PipelineError};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

/// Render the DANFE of an NF-e invoice record (JSON) to a PDF file.
#[derive(Parser, Debug)]
#[command(name = "danfe", version, about, long_about = None)]
struct Args {
    /// Invoice record in JSON
    record: PathBuf,

    /// Where to write the PDF
    output: PathBuf,

    /// Layout configuration in JSON; absent fields keep their defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also write the laid-out pages as JSON draw commands
    #[arg(long, value_name = "FILE")]
    dump_commands: Option<PathBuf>,
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();
    let args = Args::parse();

    let mut builder = PipelineBuilder::new();
    if let Some(path) = &args.config {
        builder = builder.with_config_file(path)?;
    }
    let pipeline = builder.build()?;

    log::info!("Loading invoice record from {}", args.record.display());
    let record = InvoiceRecord::from_reader(BufReader::new(File::open(&args.record)?))?;

    let gaps = record.data_gaps();
    if !gaps.is_empty() {
        eprintln!("{} field(s) printed as placeholders:", gaps.len());
        for gap in &gaps {
            eprintln!("  {gap}");
        }
    }

    if let Some(path) = &args.dump_commands {
        let pages = pipeline.layout(&record);
        fs::write(path, serde_json::to_vec_pretty(&pages)?)?;
        log::info!("Wrote {} page(s) of draw commands to {}", pages.len(), path.display());
    }

    pipeline.generate_to_file(&record, &args.output)?;
    println!("Successfully generated {}", args.output.display());
    Ok(())
}
