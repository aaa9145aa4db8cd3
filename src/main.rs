use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use disaster_impact::config::PipelineConfig;
use disaster_impact::constants::canonical_source_name;
use disaster_impact::io;
use disaster_impact::logging;
use disaster_impact::pipeline::Pipeline;
use disaster_impact::schema::{RecordSchema, SchemaValidator, STANDARD_SCHEMA_JSON};

#[derive(Parser)]
#[command(name = "disaster_impact")]
#[command(about = "Consolidate and link disaster events across humanitarian data sources")]
#[command(version = "0.1.0")]
struct Cli {
    /// Pipeline configuration (TOML). Falls back to $DISASTER_IMPACT_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split, consolidate and link every extract in a directory
    Run {
        /// Directory of per-source CSV extracts
        #[arg(long)]
        input_dir: PathBuf,
        /// Unified table to write
        #[arg(long)]
        output: PathBuf,
        /// Also write each source's consolidated table into this directory
        #[arg(long = "write-consolidated", value_name = "DIR")]
        consolidated_dir: Option<PathBuf>,
        /// Write the run report as JSON
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Split and consolidate a single source extract
    Consolidate {
        /// CSV extract to read
        #[arg(long)]
        input: PathBuf,
        /// Consolidated table to write
        #[arg(long)]
        output: PathBuf,
        /// Source name; defaults to the file name
        #[arg(long)]
        source: Option<String>,
        /// Schema override for the extract
        #[arg(long)]
        schema: Option<PathBuf>,
    },
    /// Check extract rows against their JSON schema
    Validate {
        /// CSV extract to check
        #[arg(long)]
        input: PathBuf,
        /// Schema to validate against; defaults to the bundled record schema
        #[arg(long)]
        schema: Option<PathBuf>,
    },
}

fn source_for(input: &Path, source: Option<String>) -> Result<String> {
    match source {
        Some(name) => Ok(canonical_source_name(&name)),
        None => input
            .file_stem()
            .and_then(|s| s.to_str())
            .map(canonical_source_name)
            .context("cannot derive a source name from the input path; pass --source"),
    }
}

fn load_schema(path: Option<&Path>) -> Result<(RecordSchema, SchemaValidator)> {
    let content = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read schema '{}'", path.display()))?,
        None => STANDARD_SCHEMA_JSON.to_string(),
    };
    let document: serde_json::Value = serde_json::from_str(&content).context("schema is not valid JSON")?;
    Ok((RecordSchema::from_json(&document)?, SchemaValidator::compile(&document)?))
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = PipelineConfig::load(cli.config.as_deref()).context("failed to load pipeline configuration")?;

    match cli.command {
        Commands::Run {
            input_dir,
            output,
            consolidated_dir,
            report,
        } => {
            println!("🚀 Running disaster impact pipeline...");
            let pipeline = Pipeline::new(&config)?;
            let run = match pipeline.run_directory(&input_dir, &output, consolidated_dir.as_deref()) {
                Ok(run) => run,
                Err(e) => {
                    error!("Pipeline run failed: {}", e);
                    println!("❌ Pipeline run failed: {}", e);
                    return Err(e.into());
                }
            };

            println!("\n📊 Run {}:", run.run_id);
            for source in &run.sources {
                println!(
                    "   {}: {} rows loaded, {} after country split, {} consolidated",
                    source.source, source.rows_loaded, source.rows_after_split, source.consolidated_records
                );
                if !source.skipped_groups.is_empty() {
                    println!("      ⚠️  {} group(s) skipped for missing ids", source.skipped_groups.len());
                }
            }
            println!("   Unified records: {}", run.unified_records);
            println!("   Spanning several sources: {}", run.multi_source_records);
            if run.unresolved_total() > 0 {
                warn!("{} country name(s) could not be resolved", run.unresolved_total());
                println!("\n⚠️  Unresolved country names:");
                for (name, count) in &run.unresolved_countries {
                    println!("   - {} ({})", name, count);
                }
            }
            println!("   Output file: {}", output.display());

            if let Some(path) = report {
                let body = serde_json::to_string_pretty(&run)?;
                fs::write(&path, body).with_context(|| format!("failed to write report '{}'", path.display()))?;
                info!(path = %path.display(), "Wrote run report");
            }
            println!("✅ Pipeline completed in {:.2}s", run.duration_secs);
        }
        Commands::Consolidate {
            input,
            output,
            source,
            schema,
        } => {
            println!("🔨 Consolidating {}...", input.display());
            let source = source_for(&input, source)?;
            let (schema, validator) = load_schema(schema.as_deref())?;
            let table = io::read_table(&input, &source, schema, Some(&validator))
                .with_context(|| format!("failed to read extract '{}'", input.display()))?;

            let pipeline = Pipeline::new(&config)?;
            let (consolidated, split) = pipeline.prepare_source(&table)?;
            io::write_consolidated_to(&output, &consolidated)?;

            println!("   Rows loaded: {}", table.len());
            println!("   Rows after country split: {}", split.rows_out);
            println!("   Consolidated records: {}", consolidated.len());
            if split.unresolved_total() > 0 {
                println!("   ⚠️  Unresolved country names: {}", split.unresolved_total());
            }
            println!("✅ Wrote {}", output.display());
        }
        Commands::Validate { input, schema } => {
            let (schema, validator) = load_schema(schema.as_deref())?;
            let (rows, failing) = io::validate_rows(&input, &schema, &validator)
                .with_context(|| format!("failed to read extract '{}'", input.display()))?;

            for failure in &failing {
                println!("❌ Row {}:", failure.row + 1);
                for violation in &failure.violations {
                    println!("   - {}", violation);
                }
            }
            if failing.is_empty() {
                println!("✅ All {} row(s) conform", rows);
            } else {
                anyhow::bail!("{} of {} row(s) failed validation", failing.len(), rows);
            }
        }
    }
    Ok(())
}
