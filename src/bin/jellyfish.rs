use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "jellyfish", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a range of frames as a numbered PNG sequence.
    Frames(FramesArgs),
    /// Render an MP4 video (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Open an interactive window (requires the `preview` feature).
    Preview(PreviewArgs),
    /// Print the scene of one frame as JSON.
    Dump(DumpArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Sketch config JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the noise seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the default number of frames.
    #[arg(long)]
    duration: Option<u64>,

    /// Override the canvas width.
    #[arg(long)]
    width: Option<u32>,

    /// Override the canvas height.
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    cfg: ConfigArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    cfg: ConfigArgs,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive). Defaults to the configured duration.
    #[arg(long)]
    end: Option<u64>,

    /// File name prefix.
    #[arg(long, default_value = "frame")]
    prefix: String,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    cfg: ConfigArgs,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    cfg: ConfigArgs,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    #[command(flatten)]
    cfg: ConfigArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Render(args) => cmd_render(args),
        Command::Preview(args) => cmd_preview(args),
        Command::Dump(args) => cmd_dump(args),
    }
}

fn load_config(args: &ConfigArgs) -> anyhow::Result<jellyfish::SketchConfig> {
    let mut cfg = match &args.config {
        Some(path) => jellyfish::SketchConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => jellyfish::SketchConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    if let Some(duration) = args.duration {
        cfg.duration = jellyfish::FrameIndex(duration);
    }
    if let Some(width) = args.width {
        cfg.canvas.width = width;
    }
    if let Some(height) = args.height {
        cfg.canvas.height = height;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn animator(cfg: &jellyfish::SketchConfig) -> anyhow::Result<jellyfish::Animator> {
    Ok(jellyfish::Animator::new(cfg, jellyfish::AnimatorOpts::default())?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.cfg)?;
    let mut animator = animator(&cfg)?;

    let frame = animator.render_frame(jellyfish::FrameIndex(args.frame))?;

    jellyfish::write_png(&args.out, &frame)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.cfg)?;
    let end = args.end.map_or(cfg.duration, jellyfish::FrameIndex);
    let range = jellyfish::FrameRange::new(jellyfish::FrameIndex(args.start), end)?;

    let mut animator = animator(&cfg)?;
    tracing::info!(sink = "png", dir = %args.out_dir.display(), "writing frame sequence");
    let mut sink = jellyfish::PngSequenceSink::new(&args.out_dir, args.prefix);
    animator.render_range(range, &mut sink)?;

    eprintln!(
        "wrote {} frames to {}",
        sink.written().len(),
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.cfg)?;
    if !jellyfish::encode::ffmpeg::is_ffmpeg_on_path() {
        anyhow::bail!("ffmpeg not found on PATH");
    }

    let mut animator = animator(&cfg)?;
    tracing::info!(sink = "ffmpeg", out = %args.out.display(), "encoding mp4");
    let mut sink = jellyfish::FfmpegSink::new(jellyfish::FfmpegSinkOpts::new(&args.out));
    animator.render_range(cfg.default_range(), &mut sink)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

#[cfg(feature = "preview")]
fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.cfg)?;
    let frames = jellyfish::preview::run(&cfg)?;
    eprintln!("showed {frames} frames");
    Ok(())
}

#[cfg(not(feature = "preview"))]
fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    load_config(&args.cfg)?;
    anyhow::bail!("this build has no preview window; rebuild with `--features preview`")
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.cfg)?;
    let mut animator = animator(&cfg)?;
    let scene = animator.scene_at(jellyfish::FrameIndex(args.frame));
    let json = serde_json::to_string_pretty(&scene).context("serialize scene")?;
    println!("{json}");
    Ok(())
}
