use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "switchlight", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the scene at one instant as a PNG.
    Frame(FrameArgs),
    /// Render every frame of the script as a PNG sequence.
    Render(RenderArgs),
    /// Print the scene journal as JSON lines.
    Trace(TraceArgs),
    /// Write a demo input script.
    SampleScript(SampleArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Virtual time in milliseconds.
    #[arg(long)]
    at_ms: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Directory receiving `frame_00000.png` and onward.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Input script JSON.
    #[arg(long)]
    script: PathBuf,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Trace(args) => cmd_trace(args),
        Command::SampleScript(args) => cmd_sample(args),
    }
}

fn load(path: &std::path::Path) -> anyhow::Result<switchlight::Script> {
    switchlight::Script::from_path(path)
        .with_context(|| format!("load script '{}'", path.display()))
}

fn ensure_parent_dir(path: &std::path::Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let script = load(&args.script)?;
    let mut renderer = switchlight::create_renderer(switchlight::RendererKind::Cpu);
    let frame = switchlight::render_frame(
        &script,
        switchlight::SimTime(args.at_ms),
        renderer.as_mut(),
    )?;

    ensure_parent_dir(&args.out)?;
    switchlight::write_png(&args.out, &frame)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let script = load(&args.script)?;
    let mut renderer = switchlight::create_renderer(switchlight::RendererKind::Cpu);
    let mut sink = switchlight::PngSequenceSink::new(&args.out_dir);
    let stats = switchlight::render_range(&script, renderer.as_mut(), &mut sink)?;

    eprintln!(
        "wrote {} frames to {}",
        stats.frames_rendered,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let script = load(&args.script)?;
    let events = switchlight::trace(&script)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for ev in &events {
        serde_json::to_writer(&mut out, ev).context("serialize trace event")?;
        writeln!(out).context("write trace")?;
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    ensure_parent_dir(&args.out)?;
    let f = std::fs::File::create(&args.out)
        .with_context(|| format!("create '{}'", args.out.display()))?;
    serde_json::to_writer_pretty(f, &switchlight::Script::sample())
        .with_context(|| format!("write script '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
