use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use linecode::export::{export_csv, export_csv_table, export_svg};
use linecode::noise::{NoiseAugmenter, NoiseConfig};
use linecode::render::{RenderOptions, Theme, render_ascii, render_svg, render_svg_grid};
use linecode::{BitSequence, Scheme, Signal, Waveform, catalog, compare_all, encode};
use serde_json::json;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable levels and terminal plot
    Text,
    /// Machine-readable JSON
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormat {
    /// A string of 0 and 1 characters
    Bits,
    /// Hexadecimal bytes, unpacked MSB-first
    Hex,
    /// Base64 bytes, unpacked MSB-first
    Base64,
}

/// Encode binary sequences into line-code waveforms
#[derive(Parser, Debug)]
#[command(name = "linecode")]
#[command(author, version, about = "Encode binary sequences into line-code waveforms", long_about = None)]
struct Cli {
    /// Binary sequence to encode (e.g. 101010)
    #[arg(required_unless_present = "list_schemes")]
    bits: Option<String>,

    /// Line-coding scheme
    #[arg(short, long, default_value = "NRZ-L")]
    scheme: String,

    /// Encode with every scheme in catalogue order
    #[arg(long, conflicts_with = "scheme")]
    compare: bool,

    /// How to interpret the input argument
    #[arg(short, long, value_enum, default_value = "bits")]
    input: InputFormat,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Add Gaussian noise with this standard deviation
    #[arg(long, num_args = 0..=1, default_missing_value = "0.2", value_name = "STD_DEV")]
    noise: Option<f64>,

    /// Seed for the noise generator
    #[arg(long, requires = "noise")]
    seed: Option<u64>,

    /// Show bit labels on plots
    #[arg(long)]
    labels: bool,

    /// Plot theme (dark, light, soft-gray)
    #[arg(long, default_value = "dark")]
    theme: Theme,

    /// Trace colour for SVG plots (e.g. #ff6600)
    #[arg(long)]
    color: Option<String>,

    /// Export the time/level table as CSV
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Export the plot as SVG
    #[arg(long, value_name = "PATH")]
    svg: Option<PathBuf>,

    /// List supported schemes and exit
    #[arg(long)]
    list_schemes: bool,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable in JSON mode.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Err(e) = run(&cli) {
        match cli.output {
            OutputFormat::Text => eprintln!("Error: {e:#}"),
            OutputFormat::Json => {
                let body = json!({ "status": "error", "error": format!("{e:#}") });
                println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
            }
        }
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.list_schemes {
        return list_schemes(cli.output);
    }

    let raw = cli.bits.as_deref().unwrap_or_default();
    let bits = match cli.input {
        InputFormat::Bits => BitSequence::parse(raw)?,
        InputFormat::Hex => BitSequence::from_hex(raw)?,
        InputFormat::Base64 => BitSequence::from_base64(raw)?,
    };

    let signals = if cli.compare {
        compare_all(&bits)
    } else {
        let scheme: Scheme = cli.scheme.parse()?;
        vec![encode(&bits, scheme)]
    };
    info!(bits = bits.len(), schemes = signals.len(), "encoded input");

    let mut noise = cli
        .noise
        .map(|std_dev| {
            NoiseAugmenter::new(NoiseConfig {
                std_dev,
                seed: cli.seed,
            })
        })
        .transpose()?;
    if let Some(augmenter) = &noise {
        debug!(seed = augmenter.seed(), "noise enabled");
    }

    let waveforms: Vec<Waveform> = signals
        .iter()
        .map(|signal| match noise.as_mut() {
            Some(augmenter) => augmenter.apply(signal),
            None => signal.to_waveform(),
        })
        .collect();

    let options = RenderOptions {
        theme: cli.theme,
        trace_color: cli.color.clone(),
        show_labels: cli.labels,
        title: None,
    };

    if let Some(path) = &cli.csv {
        let exported = match waveforms.as_slice() {
            [single] => export_csv(single, path),
            many => export_csv_table(many, path),
        };
        exported.with_context(|| format!("Failed to export CSV to {}", path.display()))?;
    }

    if let Some(path) = &cli.svg {
        let svg = match waveforms.as_slice() {
            [single] => render_svg(single, &bits, &options),
            many => render_svg_grid(many, &bits, &options),
        };
        export_svg(&svg, path)
            .with_context(|| format!("Failed to export SVG to {}", path.display()))?;
    }

    match cli.output {
        OutputFormat::Text => print_text(&bits, &signals, &waveforms, &options, cli),
        OutputFormat::Json => print_json(&bits, &signals, &waveforms, noise.as_ref())?,
    }

    Ok(())
}

fn list_schemes(output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => {
            for (name, scheme) in catalog() {
                println!("{name:<24} {} sample(s) per bit", scheme.samples_per_bit());
            }
        }
        OutputFormat::Json => {
            let schemes: Vec<Scheme> = catalog().map(|(_, scheme)| scheme).collect();
            let body = json!({ "status": "success", "data": { "schemes": schemes } });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }
    Ok(())
}

fn print_text(
    bits: &BitSequence,
    signals: &[Signal],
    waveforms: &[Waveform],
    options: &RenderOptions,
    cli: &Cli,
) {
    println!("Bits: {bits} ({} bits)", bits.len());
    for (signal, waveform) in signals.iter().zip(waveforms) {
        println!();
        println!("{} Encoding", signal.scheme());
        println!("  Samples: {}", signal.len());
        println!("  Levels: {:?}", signal.levels());
        if cli.noise.is_some() {
            let noisy: Vec<String> = waveform.samples().iter().map(|s| format!("{s:.3}")).collect();
            println!("  Noisy Samples: [{}]", noisy.join(", "));
        }
        println!();
        print!("{}", render_ascii(waveform, bits, options));
    }
    if let Some(path) = &cli.csv {
        println!();
        println!("CSV exported to: {}", path.display());
    }
    if let Some(path) = &cli.svg {
        println!("SVG exported to: {}", path.display());
    }
}

fn print_json(
    bits: &BitSequence,
    signals: &[Signal],
    waveforms: &[Waveform],
    noise: Option<&NoiseAugmenter>,
) -> Result<()> {
    let noise_info = noise.map(|augmenter| {
        json!({
            "std_dev": augmenter.std_dev(),
            "seed": augmenter.seed(),
        })
    });
    let data = json!({
        "bits": bits,
        "signals": signals,
        "waveforms": noise.map(|_| waveforms),
        "noise": noise_info,
    });
    let body = json!({ "status": "success", "data": data });
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
