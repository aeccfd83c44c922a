use clap::Parser;
use hybridimg::io::{load_image, save_image};
use hybridimg::{BandSpec, FilterOptions, HybridComposer, HybridConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Hybrid image generator (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BandConfigJson {
    sigma: f64,
    size: usize,
    band: String,
}

impl BandConfigJson {
    fn to_spec(&self) -> hybridimg::HybridResult<BandSpec> {
        BandSpec::parse(self.sigma, self.size, &self.band)
    }
}

/// Hybrid parameters have no defaults; only execution switches do.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Config {
    left_path: PathBuf,
    right_path: PathBuf,
    output_path: PathBuf,
    left: BandConfigJson,
    right: BandConfigJson,
    mixin_ratio: f64,
    scale_factor: f64,
    #[serde(default)]
    parallel: bool,
    #[serde(default)]
    simd: bool,
    #[serde(default)]
    separable: bool,
}

impl Config {
    fn hybrid_config(&self) -> hybridimg::HybridResult<HybridConfig> {
        Ok(HybridConfig {
            first: self.left.to_spec()?,
            second: self.right.to_spec()?,
            mixin_ratio: self.mixin_ratio,
            scale_factor: self.scale_factor,
        })
    }

    fn filter_options(&self) -> FilterOptions {
        if self.parallel && !cfg!(feature = "rayon") {
            tracing::warn!("`parallel` requested but this build lacks the `rayon` feature");
        }
        if self.simd && !cfg!(feature = "simd") {
            tracing::warn!("`simd` requested but this build lacks the `simd` feature");
        }
        FilterOptions {
            parallel: self.parallel,
            simd: self.simd,
            separable: self.separable,
        }
    }
}

#[derive(Debug, Serialize)]
struct Summary {
    output_path: PathBuf,
    width: usize,
    height: usize,
    channels: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("hybridimg=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;

    let composer =
        HybridComposer::new(config.hybrid_config()?)?.with_options(config.filter_options());

    let left = load_image(&config.left_path)?;
    let right = load_image(&config.right_path)?;
    let hybrid = composer.compose(left.view(), right.view())?;
    save_image(&config.output_path, &hybrid)?;
    tracing::info!(
        output = %config.output_path.display(),
        width = hybrid.width(),
        height = hybrid.height(),
        channels = hybrid.channels(),
        "hybrid image written"
    );

    let summary = Summary {
        output_path: config.output_path,
        width: hybrid.width(),
        height: hybrid.height(),
        channels: hybrid.channels(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
