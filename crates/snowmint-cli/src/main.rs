mod config;
mod telemetry;

use anyhow::Context;
use clap::Parser;
use config::{CliArgs, CliConfig};
use serde::Serialize;
use snowmint::{IdGenerator, SnowflakeId};
use std::io::{self, BufWriter, Write};

/// Components of one ID, as printed by `decode`.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct DecodedId {
    id: i64,
    timestamp: u64,
    unix_millis: u64,
    worker_id: u64,
    sequence: u64,
}

impl From<SnowflakeId> for DecodedId {
    fn from(id: SnowflakeId) -> Self {
        Self {
            id: id.to_i64(),
            timestamp: id.timestamp(),
            unix_millis: id.unix_millis(),
            worker_id: id.worker_id(),
            sequence: id.sequence(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = CliConfig::try_from(args)?;

    telemetry::init_tracing()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match config {
        CliConfig::Generate { worker_id, count } => generate(&mut out, worker_id, count)?,
        CliConfig::Decode { ids } => decode(&mut out, &ids)?,
    }
    out.flush()?;
    Ok(())
}

fn generate(out: &mut impl Write, worker_id: i64, count: usize) -> anyhow::Result<()> {
    let generator = IdGenerator::new(worker_id).context("failed to create ID generator")?;
    tracing::info!(worker_id, count, "Minting IDs");

    for _ in 0..count {
        let id = generator.generate_id().context("failed to mint ID")?;
        writeln!(out, "{id}")?;
    }
    Ok(())
}

fn decode(out: &mut impl Write, ids: &[i64]) -> anyhow::Result<()> {
    for &raw in ids {
        let raw = u64::try_from(raw)
            .with_context(|| format!("{raw} is not a valid ID: reserved bit is set"))?;
        let decoded = DecodedId::from(SnowflakeId::from_raw(raw));
        serde_json::to_writer(&mut *out, &decoded)?;
        writeln!(out)?;
    }
    Ok(())
}
