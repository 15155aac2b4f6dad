use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "frameline", version)]
struct Cli {
    /// Log filter used when `RUST_LOG` is unset (e.g. `info`, `frameline=debug`).
    #[arg(long, global = true, default_value = "warn")]
    log: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one frame of a scene and print its overlay state as JSON.
    Frame(FrameArgs),
    /// Evaluate a range of frames and print a JSON array of frame states.
    Range(RangeArgs),
    /// Drain a job batch through the priority queue and print the dequeue order.
    Queue(QueueArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override the scene's exit window (frames).
    #[arg(long)]
    exit_window: Option<u32>,

    /// Evaluate even if the scene fails validation.
    #[arg(long, default_value_t = false)]
    lenient: bool,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frame to evaluate (may be negative).
    #[arg(long, allow_negative_numbers = true)]
    frame: i64,
}

#[derive(Parser, Debug)]
struct RangeArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// First frame (inclusive). Defaults to 0.
    #[arg(long, allow_negative_numbers = true)]
    start: Option<i64>,

    /// Last frame (exclusive). Defaults to the scene duration.
    #[arg(long, allow_negative_numbers = true)]
    end: Option<i64>,

    /// Evaluate frames in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads. Only valid with `--parallel`.
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct QueueArgs {
    /// Input job batch JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Range(args) => cmd_range(args),
        Command::Queue(args) => cmd_queue(args),
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_scene(args: &SceneArgs) -> anyhow::Result<frameline::Scene> {
    let mut scene = frameline::Scene::from_path(&args.in_path)
        .with_context(|| format!("load scene '{}'", args.in_path.display()))?;
    if let Some(w) = args.exit_window {
        scene.timing_mut().exit_window = w;
    }
    match scene.validate() {
        Ok(()) => {}
        Err(e) if args.lenient => {
            tracing::warn!(error = %e, "scene failed validation; evaluating anyway");
        }
        Err(e) => return Err(e).context("validate scene"),
    }
    Ok(scene)
}

fn write_json<T: serde::Serialize>(out: Option<&Path>, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json.as_bytes())
                .with_context(|| format!("write json '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("write stdout")?;
        }
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene)?;
    let state = scene.evaluate_frame(args.frame);
    write_json(args.scene.out.as_deref(), &state)
}

fn cmd_range(args: RangeArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene)?;
    let full = scene.full_range();
    let range = frameline::FrameRange::new(
        args.start.unwrap_or(full.start),
        args.end.unwrap_or(full.end),
    )?;

    let states = match args.threads {
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .context("build rayon pool")?;
            pool.install(|| scene.evaluate_range(range, true))
        }
        None => scene.evaluate_range(range, args.parallel),
    };
    tracing::info!(frames = states.len(), "evaluated range");
    write_json(args.scene.out.as_deref(), &states)
}

#[derive(serde::Serialize)]
struct QueueReport {
    order: Vec<frameline::ProcessingJob>,
    status: frameline::QueueStatus,
}

fn cmd_queue(args: QueueArgs) -> anyhow::Result<()> {
    let batch = frameline::JobBatch::from_path(&args.in_path)
        .with_context(|| format!("load job batch '{}'", args.in_path.display()))?;
    batch.validate().context("validate job batch")?;

    let mut queue = frameline::ProcessingQueue::new();
    queue.extend(batch.jobs);

    let mut order = Vec::new();
    while let Some(job) = queue.process_with(|job| job) {
        tracing::info!(job = %job.id, priority = ?job.priority, "processed");
        order.push(job);
    }

    let report = QueueReport {
        order,
        status: queue.queue_status(),
    };
    write_json(args.out.as_deref(), &report)
}
