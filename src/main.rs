use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use ean13render::rendering::Canvas;
use ean13render::{BarcodeRenderer, RenderConfig, Rgba};

/// Encode an EAN-13 / UPC-A code and inspect the rendered barcode
#[derive(Parser, Debug)]
#[command(name = "ean13render", version, about)]
struct Cli {
    /// 12 (UPC-A) or 13 (EAN-13) digits, including the check digit
    digits: String,

    /// JSON render configuration; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pixels per module
    #[arg(long)]
    scale: Option<f64>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<f64>,

    /// Bar color as #RRGGBB or #RRGGBBAA
    #[arg(long)]
    bar_color: Option<Rgba>,

    /// Background color as #RRGGBB or #RRGGBBAA
    #[arg(long)]
    background_color: Option<Rgba>,

    #[arg(long, value_enum, default_value_t = Format::Pattern)]
    format: Format,

    /// Print DIGITS followed by their computed check digit instead of encoding
    #[arg(long)]
    append_check_digit: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// 95 characters of 1 (bar) and 0 (space)
    Pattern,
    /// Normalized digits and the width of each bar/space run
    Runs,
    /// Text preview of the rendered image
    Ascii,
    /// Image size and SHA-256 of its pixels
    Digest,
}

/// Rows printed by the ascii preview
const ASCII_ROWS: u32 = 4;

fn load_config(cli: &Cli) -> anyhow::Result<RenderConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            RenderConfig::from_json_str(&json)?
        }
        None => RenderConfig {
            height: 50.0,
            ..Default::default()
        },
    };
    if let Some(scale) = cli.scale {
        config.scale = scale;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(c) = cli.bar_color {
        config.bar_color = c;
    }
    if let Some(c) = cli.background_color {
        config.background_color = c;
    }
    Ok(config)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.append_check_digit {
        println!("{}", ean13render::append_check_digit(&cli.digits)?);
        return Ok(());
    }

    let config = load_config(&cli)?;
    log::debug!("render config: {config:?}");

    match cli.format {
        Format::Pattern => {
            println!("{}", ean13render::encode(&cli.digits)?.to_bit_string());
        }
        Format::Runs => {
            let seq = ean13render::encode(&cli.digits)?;
            let digits: String = seq.digits().iter().map(|&d| char::from(b'0' + d)).collect();
            let runs: String = seq.modules().iter().map(|m| m.width.to_string()).collect();
            println!("{digits} {runs}");
        }
        Format::Ascii | Format::Digest => {
            let mut renderer = BarcodeRenderer::with_config(config);
            renderer.set_barcode(cli.digits.as_str());
            renderer.prepare()?;
            let image = renderer.barcode_image()?;
            if let Format::Digest = cli.format {
                println!("{}x{} {}", image.width, image.height, image.digest());
                return Ok(());
            }
            let (width, height) = image.dimensions();
            for y in 0..height.min(ASCII_ROWS) {
                let row: String = (0..width)
                    .map(|x| match image.pixel(x, y) {
                        Some(p) if p == config.bar_color => '█',
                        _ => ' ',
                    })
                    .collect();
                println!("{row}");
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("ean13render: {e:#}");
        std::process::exit(1);
    }
}
