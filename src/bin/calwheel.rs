use std::path::PathBuf;

use anyhow::Context as _;
use chrono::{Datelike, NaiveDateTime};
use clap::{Parser, Subcommand};

use calwheel::{
    JsonFileRepository, StateRepository, Wheel, WheelDocument, WheelInput, local_datetime,
};

#[derive(Parser, Debug)]
#[command(name = "calwheel", version)]
struct Cli {
    /// Log debug details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a wheel document to SVG, optionally also PNG.
    Render(RenderArgs),
    /// Write a document seeded with the sample events.
    Example(ExampleArgs),
    /// Merge events from an iCalendar file into a document.
    ImportIcs(ImportIcsArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input wheel document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Also rasterize to this PNG path.
    #[arg(long)]
    png: Option<PathBuf>,

    /// PNG side in pixels.
    #[arg(long, default_value_t = 1024)]
    px: u32,

    /// Instant treated as now, `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`. Defaults to the
    /// local clock.
    #[arg(long, value_parser = parse_now)]
    now: Option<NaiveDateTime>,

    /// Render as if the pointer were over the event with this uid.
    #[arg(long)]
    hover: Option<String>,
}

#[derive(Parser, Debug)]
struct ExampleArgs {
    /// Output wheel document JSON.
    #[arg(long)]
    out: PathBuf,

    /// Year to anchor the sample events to. Defaults to the current year.
    #[arg(long)]
    year: Option<i32>,
}

#[derive(Parser, Debug)]
struct ImportIcsArgs {
    /// iCalendar file to read.
    #[arg(long)]
    ics: PathBuf,

    /// Wheel document to update; created when missing.
    #[arg(long)]
    doc: PathBuf,
}

fn parse_now(raw: &str) -> Result<NaiveDateTime, String> {
    local_datetime::parse(raw)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Example(args) => cmd_example(args),
        Command::ImportIcs(args) => cmd_import_ics(args),
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

fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let doc = WheelDocument::from_path(&args.in_path)
        .with_context(|| format!("load wheel document '{}'", args.in_path.display()))?;
    let now = args.now.unwrap_or_else(local_now);

    let mut wheel = Wheel::new();
    if let Some(uid) = args.hover {
        wheel.pointer_enter(uid);
    }
    let markup = wheel.render_svg(&WheelInput::from_document(&doc, now));
    let svg = calwheel::to_standalone_svg(&markup);

    calwheel::write_standalone_svg(&args.out, &markup)?;
    eprintln!("wrote {}", args.out.display());

    if let Some(png_path) = args.png {
        let png = calwheel::rasterize_png(&svg, args.px)?;
        if let Some(parent) = png_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(&png_path, png)
            .with_context(|| format!("write png '{}'", png_path.display()))?;
        eprintln!("wrote {}", png_path.display());
    }
    Ok(())
}

fn cmd_example(args: ExampleArgs) -> anyhow::Result<()> {
    let year = args.year.unwrap_or_else(|| local_now().year());
    let doc = WheelDocument::example(year)?;
    JsonFileRepository::<WheelDocument>::new(&args.out).save(&doc)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_import_ics(args: ImportIcsArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.ics)
        .with_context(|| format!("read ics '{}'", args.ics.display()))?;

    let repo = JsonFileRepository::<WheelDocument>::new(&args.doc);
    let mut doc = if args.doc.exists() {
        repo.load()
            .with_context(|| format!("load wheel document '{}'", args.doc.display()))?
    } else {
        WheelDocument::default()
    };

    let imported = calwheel::parse_ics(&text, &doc.range)?;
    let found = imported.len();
    let added = calwheel::merge_events(&mut doc.events, imported);
    repo.save(&doc)?;
    eprintln!(
        "imported {added} of {found} events into {}",
        args.doc.display()
    );
    Ok(())
}
