use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "gradient-noise", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render parameters to a PNG.
    Render(RenderArgs),
    /// Print the normalized canonical parameter JSON.
    Params(ParamsArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Parameter JSON file; defaults are used when omitted.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Output width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Post-processing quality.
    #[arg(long, value_enum, default_value_t = QualityChoice::Export)]
    quality: QualityChoice,

    /// Built-in color preset applied on top of the parameters.
    #[arg(long)]
    preset: Option<String>,

    /// Flatten onto an opaque background color (#rrggbb).
    #[arg(long)]
    background: Option<String>,

    /// Dedicated worker thread count.
    #[arg(long)]
    threads: Option<usize>,

    /// Render on the calling thread only.
    #[arg(long)]
    sequential: bool,

    /// Print the SHA-256 of the raw RGBA buffer.
    #[arg(long)]
    digest: bool,
}

#[derive(Parser, Debug)]
struct ParamsArgs {
    /// Parameter JSON file; defaults are used when omitted.
    #[arg(long)]
    params: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum QualityChoice {
    Preview,
    Export,
}

impl From<QualityChoice> for gradient_noise::Quality {
    fn from(q: QualityChoice) -> Self {
        match q {
            QualityChoice::Preview => gradient_noise::Quality::Preview,
            QualityChoice::Export => gradient_noise::Quality::Export,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Params(args) => cmd_params(args),
    }
}

fn load_generator(path: Option<&Path>) -> anyhow::Result<gradient_noise::GradientGenerator> {
    let mut generator = gradient_noise::GradientGenerator::new();
    if let Some(path) = path {
        let payload = std::fs::read_to_string(path)
            .with_context(|| format!("read parameters '{}'", path.display()))?;
        generator
            .update_params(&payload)
            .with_context(|| format!("parse parameters '{}'", path.display()))?;
    }
    Ok(generator)
}

fn parse_background(s: &str) -> anyhow::Result<[u8; 3]> {
    let hex = s.trim().trim_start_matches('#');
    anyhow::ensure!(
        hex.len() == 6 && hex.is_ascii(),
        "background must be #rrggbb, got '{s}'"
    );
    let byte = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .with_context(|| format!("background must be #rrggbb, got '{s}'"))
    };
    Ok([byte(0)?, byte(2)?, byte(4)?])
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut generator = load_generator(args.params.as_deref())?;
    if let Some(name) = &args.preset {
        generator.apply_color_preset(name)?;
    }

    let opts = gradient_noise::RenderOpts {
        quality: args.quality.into(),
        background: args.background.as_deref().map(parse_background).transpose()?,
        parallel: !args.sequential,
        threads: args.threads,
    };
    anyhow::ensure!(
        args.width > 0 && args.height > 0,
        "width and height must be non-zero"
    );

    let raster = generator.render(args.width, args.height, &opts)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &raster.data,
        raster.width,
        raster.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    if args.digest {
        println!("{}", sha256_hex(&raster.data));
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_params(args: ParamsArgs) -> anyhow::Result<()> {
    let generator = load_generator(args.params.as_deref())?;
    let value = gradient_noise::encode_params(generator.params())?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
