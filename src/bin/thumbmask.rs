use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "thumbmask", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a gesture script over an image and write the flattened JPEG.
    Mask(MaskArgs),
    /// List or search the font catalog.
    Fonts(FontsArgs),
}

#[derive(Parser, Debug)]
struct MaskArgs {
    /// Source image (PNG, JPEG, WebP, ...).
    #[arg(long)]
    image: PathBuf,

    /// Gesture script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Output JPEG path.
    #[arg(long)]
    out: PathBuf,

    /// Also write the payload (instruction + base64 image) as JSON.
    #[arg(long)]
    payload: Option<PathBuf>,

    /// JPEG quality (1-100); overrides THUMBMASK_JPEG_QUALITY.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: Option<u8>,
}

#[derive(Parser, Debug)]
struct FontsArgs {
    /// Case-insensitive substring filter.
    #[arg(long)]
    search: Option<String>,
}

#[derive(serde::Serialize)]
struct PayloadJson<'a> {
    instruction: &'a str,
    image_base64: String,
    width: u32,
    height: u32,
    strokes: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Mask(args) => cmd_mask(args),
        Command::Fonts(args) => cmd_fonts(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_script_json(path: &Path) -> anyhow::Result<thumbmask::GestureScript> {
    let f = File::open(path).with_context(|| format!("open script '{}'", path.display()))?;
    let r = BufReader::new(f);
    let script: thumbmask::GestureScript =
        serde_json::from_reader(r).with_context(|| "parse gesture script JSON")?;
    Ok(script)
}

fn cmd_mask(args: MaskArgs) -> anyhow::Result<()> {
    let script = read_script_json(&args.script)?;
    script.validate()?;

    let mut opts = thumbmask::EditorOpts::from_env();
    if let Some(q) = args.quality {
        opts.jpeg_quality = q;
    }

    let bytes = std::fs::read(&args.image)
        .with_context(|| format!("read image '{}'", args.image.display()))?;
    let mut session = thumbmask::EditorSession::open_bytes(&bytes, opts)?;
    script.replay(&mut session)?;

    let payload = session.payload().context("build edit payload")?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &payload.flattened_image)
        .with_context(|| format!("write jpeg '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());

    if let Some(path) = &args.payload {
        let canvas = session.compositor().canvas();
        let json = PayloadJson {
            instruction: &payload.instruction,
            image_base64: payload.image_base64(),
            width: canvas.width,
            height: canvas.height,
            strokes: session.timeline().active().len(),
        };
        let f = File::create(path)
            .with_context(|| format!("create payload '{}'", path.display()))?;
        serde_json::to_writer_pretty(f, &json).with_context(|| "write payload JSON")?;
        eprintln!("wrote {}", path.display());
    }

    println!("{}", payload.instruction);
    Ok(())
}

fn cmd_fonts(args: FontsArgs) -> anyhow::Result<()> {
    let query = args.search.as_deref().unwrap_or("");
    let hits = thumbmask::instruction::fonts::search(query);
    if hits.is_empty() {
        anyhow::bail!("no font matches '{query}'");
    }
    for family in hits {
        println!("{family}");
    }
    Ok(())
}
