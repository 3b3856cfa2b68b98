use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use scroll_timeline::{
    ElementId, ElementTransform, HeadlessHost, HeroImage, HeroPage, MeasuredNode, PageConfig,
    PageLayout, PinPlacement, PinState, ScrollRange, Viewport,
};
use tracing_subscriber::EnvFilter;

/// Wall time used to run the intro to completion before sampling scroll states.
const INTRO_SETTLE_SECS: f64 = 10.0;
const SETTLE_FPS: f64 = 60.0;
const MAX_SETTLE_FRAMES: u32 = 60 * 60;

#[derive(Parser, Debug)]
#[command(name = "scroll-timeline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the intro as JSON frames.
    Intro(IntroArgs),
    /// Print element transforms and pin state at a scroll offset.
    Scroll(ScrollArgs),
    /// Print the page layout with measured rects.
    Layout(LayoutArgs),
}

#[derive(Args, Debug)]
struct PageArgs {
    /// Page config JSON (defaults to the built-in page).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 800.0)]
    height: f64,
}

#[derive(Parser, Debug)]
struct IntroArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Frames per second to sample.
    #[arg(long, default_value_t = 30)]
    fps: u32,
}

#[derive(Parser, Debug)]
struct ScrollArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Document scroll offset in pixels.
    #[arg(long)]
    offset: f64,

    /// Let scrub smoothing catch up with the offset before sampling.
    #[arg(long)]
    settle: bool,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Directory serving the asset prefix; inspects the hero image when given.
    #[arg(long)]
    assets: Option<PathBuf>,
}

#[derive(serde::Serialize)]
struct ElementState {
    id: ElementId,
    transform: ElementTransform,
}

#[derive(serde::Serialize)]
struct IntroFrame {
    time: f64,
    elements: Vec<ElementState>,
}

#[derive(serde::Serialize)]
struct ScrollReport {
    offset: f64,
    range: Option<ScrollRange>,
    raw_progress: Option<f64>,
    smoothed_progress: Option<f64>,
    pin_state: Option<PinState>,
    pin_placement: Option<PinPlacement>,
    elements: Vec<ElementState>,
}

#[derive(serde::Serialize)]
struct LayoutReport {
    viewport: Viewport,
    layout: PageLayout,
    rects: Vec<MeasuredNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hero_image: Option<HeroImage>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Intro(args) => cmd_intro(args),
        Command::Scroll(args) => cmd_scroll(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn load_page(args: &PageArgs) -> anyhow::Result<(PageConfig, Viewport)> {
    let config = match &args.config {
        Some(path) => PageConfig::from_path(path)
            .with_context(|| format!("load page config '{}'", path.display()))?,
        None => PageConfig::default(),
    };
    let viewport = Viewport::new(args.width, args.height).context("viewport size")?;
    Ok((config, viewport))
}

fn element_states(page: &HeroPage<HeadlessHost>) -> Vec<ElementState> {
    page.controller()
        .elements()
        .filter_map(|e| {
            e.transform.map(|transform| ElementState {
                id: e.id,
                transform,
            })
        })
        .collect()
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), value).context("write JSON to stdout")?;
    println!();
    Ok(())
}

fn cmd_intro(args: IntroArgs) -> anyhow::Result<()> {
    if args.fps == 0 {
        anyhow::bail!("--fps must be > 0");
    }
    let (config, viewport) = load_page(&args.page)?;
    let mut page = HeroPage::headless(&config, viewport)?;
    let duration = scroll_timeline::intro_timeline(page.targets())?.duration();

    let fps = f64::from(args.fps);
    let frames = (duration * fps).ceil() as u64;
    let mut out = Vec::new();
    for i in 0..=frames {
        let time = i as f64 / fps;
        page.controller_mut().tick(time);
        out.push(IntroFrame {
            time,
            elements: element_states(&page),
        });
    }
    print_json(&out)
}

fn cmd_scroll(args: ScrollArgs) -> anyhow::Result<()> {
    if !args.offset.is_finite() {
        anyhow::bail!("--offset must be finite");
    }
    let (config, viewport) = load_page(&args.page)?;
    let mut page = HeroPage::headless(&config, viewport)?;

    let controller = page.controller_mut();
    controller.tick(0.0);
    controller.tick(INTRO_SETTLE_SECS);
    controller.host_mut().set_scroll(args.offset);
    controller.on_scroll(args.offset);

    if args.settle {
        let mut now = INTRO_SETTLE_SECS;
        for _ in 0..MAX_SETTLE_FRAMES {
            if controller.smoothed_progress() == controller.raw_progress() {
                break;
            }
            now += 1.0 / SETTLE_FPS;
            controller.tick(now);
        }
    }

    let container = page.targets().container;
    let controller = page.controller();
    let report = ScrollReport {
        offset: args.offset,
        range: controller.scroll_range(),
        raw_progress: controller.raw_progress(),
        smoothed_progress: controller.smoothed_progress(),
        pin_state: controller.pin_state(),
        pin_placement: controller.host().pin_placement(container),
        elements: element_states(&page),
    };
    print_json(&report)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let (config, viewport) = load_page(&args.page)?;
    let mut layout = PageLayout::build(&config)?;
    let hero_image = args
        .assets
        .as_deref()
        .map(|root: &Path| HeroImage::inspect(root, &config));
    if let Some(image) = &hero_image {
        layout.size_hero_image(image, &config);
    }
    let report = LayoutReport {
        viewport,
        rects: layout.measure(viewport),
        layout,
        hero_image,
    };
    print_json(&report)
}
