use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use qrstyle::PlanRenderer as _;

#[derive(Parser, Debug)]
#[command(name = "qrstyle", version)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print or write the render plan as JSON.
    Plan(SingleArgs),
    /// Write an SVG file.
    Svg(SingleArgs),
    /// Write a PNG file.
    Png(PngArgs),
    /// Render one file per non-empty line of an input file.
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct StyleArgs {
    /// Style settings JSON file.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Override one setting, e.g. `--set dotStyle=dots`. Repeatable.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    overrides: Vec<(String, String)>,
}

#[derive(Args, Debug)]
struct SingleArgs {
    /// Payload to encode.
    #[arg(long)]
    data: String,

    #[command(flatten)]
    style: StyleArgs,

    /// Output path. `plan` prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PngArgs {
    #[command(flatten)]
    single: SingleArgs,

    /// Pixels per canvas unit.
    #[arg(long, default_value_t = 2.0)]
    scale: f32,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Text file with one payload per line.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    style: StyleArgs,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Pixels per canvas unit for PNG output.
    #[arg(long, default_value_t = 2.0)]
    scale: f32,

    /// Render on the calling thread instead of the rayon pool.
    #[arg(long)]
    sequential: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Svg,
    Png,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Png(args) => cmd_png(args),
        Command::Batch(args) => cmd_batch(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (k, v) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let k = k.trim();
    if k.is_empty() {
        return Err(format!("empty key in '{raw}'"));
    }
    Ok((k.to_owned(), v.to_owned()))
}

fn load_settings(style: &StyleArgs) -> anyhow::Result<qrstyle::StyleSettings> {
    let base = match &style.settings {
        Some(path) => qrstyle::StyleSettings::from_path(path)
            .with_context(|| format!("load settings '{}'", path.display()))?,
        None => qrstyle::StyleSettings::default(),
    };
    if style.overrides.is_empty() {
        return Ok(base);
    }
    base.with_overrides(style.overrides.iter().cloned())
        .with_context(|| "apply --set overrides")
}

fn plan_for(args: &SingleArgs) -> anyhow::Result<qrstyle::RenderPlan> {
    let settings = load_settings(&args.style)?;
    let plan = qrstyle::render(&args.data, &settings).with_context(|| "render qr plan")?;
    for w in &plan.warnings {
        tracing::warn!(?w, "plan warning");
    }
    tracing::info!(fingerprint = %plan.fingerprint(), modules = plan.module_count, "planned");
    Ok(plan)
}

fn require_out(out: &Option<PathBuf>) -> anyhow::Result<&Path> {
    out.as_deref()
        .ok_or_else(|| anyhow::anyhow!("--out is required for this command"))
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_plan(args: SingleArgs) -> anyhow::Result<()> {
    let plan = plan_for(&args)?;
    let json = serde_json::to_string_pretty(&plan).with_context(|| "serialize plan")?;
    match &args.out {
        Some(out) => {
            ensure_parent(out)?;
            std::fs::write(out, json)
                .with_context(|| format!("write plan '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_svg(args: SingleArgs) -> anyhow::Result<()> {
    let out = require_out(&args.out)?;
    let plan = plan_for(&args)?;
    write_svg(&plan, out)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_png(args: PngArgs) -> anyhow::Result<()> {
    let out = require_out(&args.single.out)?;
    let plan = plan_for(&args.single)?;
    let resources = args.single.style.settings.as_deref().and_then(Path::parent);
    let mut renderer = raster_renderer(args.scale, resources);
    write_png(&mut renderer, &plan, out)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read payloads '{}'", args.in_path.display()))?;
    let payloads: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if payloads.is_empty() {
        anyhow::bail!("no payloads in '{}'", args.in_path.display());
    }

    let settings = load_settings(&args.style)?;
    let opts = qrstyle::BatchOptions {
        parallel: !args.sequential,
        threads: None,
    };
    let plans = qrstyle::render_batch_with(payloads.as_slice(), &settings, &opts)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    let mut renderer = raster_renderer(args.scale, args.in_path.parent());
    let mut failed = 0usize;
    for (i, result) in plans.into_iter().enumerate() {
        let plan = match result {
            Ok(plan) => plan,
            Err(e) => {
                tracing::error!(line = i + 1, error = %e, "render failed");
                failed += 1;
                continue;
            }
        };
        let out = match args.format {
            OutputFormat::Svg => {
                let out = args.out_dir.join(format!("qr-{:04}.svg", i + 1));
                write_svg(&plan, &out)?;
                out
            }
            OutputFormat::Png => {
                let out = args.out_dir.join(format!("qr-{:04}.png", i + 1));
                write_png(&mut renderer, &plan, &out)?;
                out
            }
        };
        eprintln!("wrote {}", out.display());
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} payloads failed to render", payloads.len());
    }
    Ok(())
}

fn write_svg(plan: &qrstyle::RenderPlan, out: &Path) -> anyhow::Result<()> {
    ensure_parent(out)?;
    let svg = qrstyle::plan_to_svg(plan)?;
    std::fs::write(out, svg).with_context(|| format!("write svg '{}'", out.display()))
}

fn raster_renderer(scale: f32, resources: Option<&Path>) -> qrstyle::RasterRenderer {
    let renderer = qrstyle::RasterRenderer::new(scale);
    match resources {
        Some(dir) => renderer.with_resources_dir(dir),
        None => renderer,
    }
}

fn write_png(
    renderer: &mut qrstyle::RasterRenderer,
    plan: &qrstyle::RenderPlan,
    out: &Path,
) -> anyhow::Result<()> {
    ensure_parent(out)?;
    let frame = renderer
        .render_plan(plan)
        .with_context(|| "rasterize plan")?;
    qrstyle::write_png(&frame, out).with_context(|| format!("write png '{}'", out.display()))
}
