use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use geojson_trim::config::{AllowListBuilder, FilterConfig, Preset};
use geojson_trim::io::OutputStyle;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "geojson-trim")]
#[command(version, about = "Trim GeoJSON feature properties to an allow-list")]
#[command(long_about = "Trim GeoJSON feature properties to an allow-list\n\n\
    Output is pretty-printed with 2-space indentation by default.\n\n\
    Keep a fixed set of keys:\n  \
    geojson-trim filter input.geojson -o output.geojson --keep GEOID,owner_1\n\n\
    Use a built-in list:\n  \
    geojson-trim filter input.geojson -o output.geojson --preset without-exemption\n\n\
    Count features with a missing or blank owner:\n  \
    geojson-trim count-missing output.geojson --field owner_1")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output for debugging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Keep only allow-listed keys in every feature's properties
    Filter {
        /// Input GeoJSON file path
        input: PathBuf,

        /// Output GeoJSON file path (created or overwritten)
        #[arg(short, long)]
        output: PathBuf,

        /// Property keys to keep (repeatable, comma-separated lists allowed)
        #[arg(short, long, value_name = "KEY")]
        keep: Vec<String>,

        /// File with one property key per line ('#' starts a comment)
        #[arg(long, value_name = "PATH")]
        keep_file: Option<PathBuf>,

        /// Built-in allow-list to start from
        #[arg(long, value_enum)]
        preset: Option<Preset>,

        /// Compact JSON output (default is pretty-printed with indentation)
        #[arg(long)]
        compact: bool,
    },
    /// Count features whose property is absent, null or blank
    CountMissing {
        /// Input GeoJSON file path
        input: PathBuf,

        /// Property key to check
        #[arg(short, long, default_value = "owner_1")]
        field: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Filter {
            input,
            output,
            keep,
            keep_file,
            preset,
            compact,
        } => {
            if keep.is_empty() && keep_file.is_none() && preset.is_none() {
                bail!("No properties to keep: pass --keep, --keep-file or --preset");
            }

            let mut builder = AllowListBuilder::new();
            if let Some(preset) = preset {
                builder = builder.preset(preset);
            }
            builder = builder.keys(&keep);
            if let Some(path) = &keep_file {
                builder = builder
                    .key_file(path)
                    .with_context(|| format!("Failed to read key file: {}", path.display()))?;
            }
            let allow = builder.build().context("Invalid allow-list")?;

            if cli.verbose {
                let keys: Vec<&str> = allow.iter().collect();
                eprintln!("Keeping {} key(s): {}", keys.len(), keys.join(", "));
                eprintln!("Reading input file: {}", input.display());
            }

            let style = if compact {
                OutputStyle::Compact
            } else {
                OutputStyle::Pretty
            };
            let config = FilterConfig::new(input, output, allow).style(style);

            let stats = geojson_trim::filter_file(&config)
                .with_context(|| format!("Failed to filter {}", config.input.display()))?;

            if cli.verbose {
                eprintln!(
                    "Processed {} feature(s): kept {} propert(ies), dropped {}",
                    stats.features, stats.kept, stats.dropped
                );
            }

            println!("Saved filtered GeoJSON to {}", config.output.display());
        }
        Commands::CountMissing { input, field, json } => {
            if cli.verbose {
                eprintln!("Reading input file: {}", input.display());
            }

            let report = geojson_trim::count_missing_file(&input, &field)
                .with_context(|| format!("Failed to scan {}", input.display()))?;

            if cli.verbose {
                eprintln!("Scanned {} feature(s)", report.total);
                for index in &report.missing_indices {
                    eprintln!("  missing: feature #{}", index);
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "Number of features with missing or empty '{}': {}",
                    report.field,
                    report.count()
                );
            }
        }
    }

    Ok(())
}
