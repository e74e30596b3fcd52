use std::{fs::File, io::Write, path::PathBuf};

use clap::Parser;
use domain_count::domain::customer::Customer;
use fake::{Fake, Faker};

/// Writes a csv of fake customers, e.g. to benchmark the importer
#[derive(Parser)]
#[command(name = "generate-customers")]
struct GenerateInput {
    /// Total of customer rows to generate
    #[arg(short, long, default_value_t = 10_000)]
    rows: usize,
    /// Output file path. If missing the csv is written to stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn write_customers<W: Write>(rows: usize, w: W) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(w);

    for _ in 0..rows {
        let customer: Customer = Faker.fake();
        wtr.serialize(customer)?;
    }
    wtr.flush()?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = GenerateInput::parse();

    match input.out {
        Some(path) => write_customers(input.rows, File::create(path)?),
        None => write_customers(input.rows, std::io::stdout().lock()),
    }
}
