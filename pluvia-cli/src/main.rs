use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pluvia", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate configured routes against a radar frame window.
    Check(CheckArgs),
    /// Build the precipitation composite only.
    Composite(CompositeArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Directory of radar frame images, composited in file-name order.
    #[arg(long)]
    frames: PathBuf,

    /// Route configuration JSON ({"bounds"?: .., "routes": [..]}).
    #[arg(long)]
    config: PathBuf,

    /// Directory for the composite and per-route annotated maps.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Evaluate routes in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct CompositeArgs {
    /// Directory of radar frame images, composited in file-name order.
    #[arg(long)]
    frames: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

/// On-disk route configuration. Bounds default to the Catalonia radar
/// extent when omitted.
#[derive(serde::Deserialize, Debug)]
struct CheckConfig {
    #[serde(default)]
    bounds: Option<pluvia::BoundingBox>,
    routes: Vec<pluvia::Route>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Composite(args) => cmd_composite(args),
    }
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let frames = load_frames(&args.frames)?;
    let config = load_config(&args.config)?;
    let bounds = match config.bounds {
        Some(bounds) => {
            bounds.validate()?;
            bounds
        }
        None => pluvia::BoundingBox::catalonia(),
    };
    let threading = pluvia::EvalThreading {
        parallel: args.parallel,
        threads: args.threads,
    };

    let Some(report) = pluvia::check_routes(&frames, &config.routes, bounds, &threading)? else {
        anyhow::bail!("no frames found in '{}'", args.frames.display());
    };

    println!("{}", serde_json::to_string_pretty(&report.outcomes)?);

    if let Some(out_dir) = args.out_dir {
        std::fs::create_dir_all(&out_dir)
            .with_context(|| format!("create output dir '{}'", out_dir.display()))?;

        let composite_path = out_dir.join("composite.png");
        std::fs::write(&composite_path, pluvia::encode_png(report.composite.raster())?)
            .with_context(|| format!("write '{}'", composite_path.display()))?;
        eprintln!("wrote {}", composite_path.display());

        let raster = report.composite.raster();
        for outcome in &report.outcomes {
            let from = pluvia::project(outcome.route.from, bounds, raster.width(), raster.height());
            let to = pluvia::project(outcome.route.to, bounds, raster.width(), raster.height());
            let annotated =
                pluvia::annotate_route(raster, from, to, outcome.verdict.will_rain);

            let map_path = out_dir.join(format!("{}_map.png", outcome.route.id));
            std::fs::write(&map_path, pluvia::encode_png(&annotated)?)
                .with_context(|| format!("write '{}'", map_path.display()))?;
            eprintln!("wrote {}", map_path.display());
        }
    }

    Ok(())
}

fn cmd_composite(args: CompositeArgs) -> anyhow::Result<()> {
    let frames = load_frames(&args.frames)?;
    let Some(comp) = pluvia::composite(&frames)? else {
        anyhow::bail!("no frames found in '{}'", args.frames.display());
    };

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, pluvia::encode_png(comp.raster())?)
        .with_context(|| format!("write '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} frames, {} to {})",
        args.out.display(),
        comp.times().len(),
        comp.window_start(),
        comp.window_end()
    );
    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<CheckConfig> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read config '{}'", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parse config '{}'", path.display()))
}

/// Load every PNG in `dir` as a frame, ordered by file name, labeled by file
/// stem.
fn load_frames(dir: &Path) -> anyhow::Result<Vec<pluvia::Frame>> {
    let mut paths = Vec::new();
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read frames dir '{}'", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
        {
            paths.push(path);
        }
    }
    paths.sort();

    let mut frames = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes =
            std::fs::read(&path).with_context(|| format!("read frame '{}'", path.display()))?;
        let raster = pluvia::decode_frame(&bytes)
            .with_context(|| format!("decode frame '{}'", path.display()))?;
        let time = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        frames.push(pluvia::Frame { time, raster });
    }
    Ok(frames)
}
