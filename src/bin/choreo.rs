use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "choreo", version)]
struct Cli {
    /// Log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one scroll offset and print the update as JSON.
    Eval(EvalArgs),
    /// Sweep a scroll range and print one JSON line per changed update.
    Trace(TraceArgs),
    /// Validate a page document and print a summary.
    Check(CheckArgs),
    /// Print the scroll offset that brings a region just below the page chrome.
    Anchor(AnchorArgs),
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Input page document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scroll offset in pixels.
    #[arg(long)]
    scroll: f64,

    /// Override the document's viewport height.
    #[arg(long)]
    viewport: Option<f64>,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Input page document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First scroll offset.
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Last scroll offset (inclusive).
    #[arg(long)]
    to: f64,

    /// Distance between consecutive offsets.
    #[arg(long, default_value_t = 100.0)]
    step: f64,

    /// Override the document's viewport height.
    #[arg(long)]
    viewport: Option<f64>,

    /// Print every tick, including unchanged ones.
    #[arg(long, default_value_t = false)]
    no_elide: bool,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input page document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct AnchorArgs {
    /// Input page document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Target region name.
    #[arg(long)]
    region: String,
}

/// Update keyed by region names instead of handles.
#[derive(serde::Serialize)]
struct LabeledUpdate<'a> {
    scroll: choreo::ScrollState,
    #[serde(skip_serializing_if = "Option::is_none")]
    progress: Option<choreo::ReadingProgress>,
    states: BTreeMap<String, &'a choreo::VisualState>,
}

impl<'a> LabeledUpdate<'a> {
    fn new(registry: &choreo::Registry, update: &'a choreo::FrameUpdate) -> Self {
        Self {
            scroll: update.scroll,
            progress: update.progress,
            states: update
                .states
                .iter()
                .map(|(id, s)| (registry.label(*id), s))
                .collect(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Eval(args) => cmd_eval(args),
        Command::Trace(args) => cmd_trace(args),
        Command::Check(args) => cmd_check(args),
        Command::Anchor(args) => cmd_anchor(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load(
    path: &std::path::Path,
) -> anyhow::Result<(choreo::PageDocument, choreo::PageLayout, choreo::Registry)> {
    let doc = choreo::PageDocument::from_path(path)?;
    let (layout, registry) = doc
        .build()
        .with_context(|| format!("build choreography '{}'", path.display()))?;
    Ok((doc, layout, registry))
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let (doc, layout, registry) = load(&args.in_path)?;
    let viewport = args.viewport.unwrap_or(doc.viewport_height);

    let mut ch = choreo::Choreographer::new(registry, &layout);
    let update = ch.evaluate(choreo::ScrollState::new(args.scroll, viewport));
    let out = serde_json::to_string_pretty(&LabeledUpdate::new(ch.registry(), &update))
        .context("serialize update")?;
    println!("{out}");
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    if !(args.step.is_finite() && args.step > 0.0) {
        anyhow::bail!("--step must be a positive number");
    }
    if !(args.from.is_finite() && args.to.is_finite()) {
        anyhow::bail!("--from and --to must be finite");
    }
    if args.to < args.from {
        anyhow::bail!("--to must not be below --from");
    }

    let (doc, layout, registry) = load(&args.in_path)?;
    let viewport = args.viewport.unwrap_or(doc.viewport_height);
    let opts = choreo::ChoreographerOpts {
        elide_unchanged: !args.no_elide,
    };
    let mut ch = choreo::Choreographer::with_opts(registry, &layout, opts);

    let steps = ((args.to - args.from) / args.step).floor() as u64;
    let mut elided = 0u64;
    for i in 0..=steps {
        let scroll = args.from + (i as f64) * args.step;
        ch.push_scroll(choreo::ScrollState::new(scroll, viewport));
        let Some(update) = ch.tick() else {
            elided += 1;
            continue;
        };
        let line = serde_json::to_string(&LabeledUpdate::new(ch.registry(), &update))
            .context("serialize update")?;
        println!("{line}");
    }
    eprintln!("{} ticks, {elided} unchanged", steps + 1);
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let (_, layout, registry) = load(&args.in_path)?;
    let tracked = registry.tracked_regions();
    let detached = tracked
        .iter()
        .filter(|id| choreo::try_probe(&layout, **id).is_none())
        .count();

    println!("regions:  {} ({} tracked, {detached} detached)", layout.len(), tracked.len());
    println!("parallax: {}", registry.parallax().len());
    println!("reveal:   {}", registry.reveal().len());
    println!("scenes:   {}", registry.scenes().len());
    println!("sticky:   {}", registry.sticky().len());
    println!(
        "related:  {}",
        if registry.related().is_some() { "yes" } else { "no" }
    );
    Ok(())
}

fn cmd_anchor(args: AnchorArgs) -> anyhow::Result<()> {
    let (_, layout, registry) = load(&args.in_path)?;
    let id = layout
        .id(&args.region)
        .with_context(|| format!("unknown region '{}'", args.region))?;
    let geom = choreo::try_probe(&layout, id)
        .with_context(|| format!("region '{}' is not attached", args.region))?;

    let cfg = registry.config();
    let target = choreo::anchor_scroll_target(geom.top, cfg.chrome_height_px, cfg.anchor_margin_px);
    println!("{target}");
    Ok(())
}
