use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "popfit", version)]
struct Cli {
    /// Log solver decisions to stderr (repeat for more detail).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a placement request and print the result as JSON.
    Place(PlaceArgs),
    /// Solve a placement request and write the bubble outline as SVG.
    Bubble(BubbleArgs),
    /// Size a grid menu of uniform items.
    Menu(MenuArgs),
}

#[derive(Parser, Debug)]
struct PlaceArgs {
    /// Input request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct BubbleArgs {
    /// Input request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Corner radius of the bubble; also used as the arrow-to-corner padding.
    #[arg(long, default_value_t = 15.0)]
    corner_radius: f64,

    /// Outline stroke width; zero disables the stroke.
    #[arg(long, default_value_t = 0.0)]
    border_width: f64,
}

#[derive(Parser, Debug)]
struct MenuArgs {
    /// Number of menu items.
    #[arg(long)]
    items: usize,

    /// Screen width the menu is presented on.
    #[arg(long)]
    screen_width: f64,

    /// Clearance kept from the left and right screen edges.
    #[arg(long, default_value_t = 10.0)]
    edge: f64,

    /// Cap on the number of columns.
    #[arg(long)]
    max_per_row: Option<usize>,

    /// Cap on the number of rows.
    #[arg(long)]
    max_rows: Option<usize>,
}

#[derive(serde::Serialize)]
struct MenuReport {
    items_per_row: usize,
    content_size: popfit::Size,
    max_content_size: popfit::Size,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Place(args) => cmd_place(args),
        Command::Bubble(args) => cmd_bubble(args),
        Command::Menu(args) => cmd_menu(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_place(args: PlaceArgs) -> anyhow::Result<()> {
    let req = popfit::PlacementRequest::from_json_file(&args.in_path)?;

    let result = popfit::compute_placement(&req);
    let json = serde_json::to_string_pretty(&result.report())?;

    match args.out {
        Some(out) => write_output(&out, &json),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn cmd_bubble(args: BubbleArgs) -> anyhow::Result<()> {
    let style = popfit::BubbleStyle {
        corner_radius: args.corner_radius,
        border_width: args.border_width,
        ..popfit::BubbleStyle::default()
    };
    style.validate()?;

    let req = popfit::PlacementRequest::from_json_file(&args.in_path)?
        .with_arrow_padding(style.arrow_padding());

    let result = popfit::compute_placement(&req);
    write_output(&args.out, &popfit::bubble_svg(&result, &style))
}

fn cmd_menu(args: MenuArgs) -> anyhow::Result<()> {
    if !args.screen_width.is_finite() || args.screen_width < 0.0 {
        anyhow::bail!("--screen-width must be finite and >= 0");
    }
    if !args.edge.is_finite() || args.edge < 0.0 {
        anyhow::bail!("--edge must be finite and >= 0");
    }
    let layout = popfit::GridLayout::standard();
    let available = (args.screen_width - 2.0 * args.edge).max(0.0);
    let cap = layout.max_content_size(args.max_per_row, args.max_rows);

    let report = MenuReport {
        items_per_row: layout.items_per_row(available.min(cap.width)),
        content_size: layout.content_size(args.items, available, cap),
        max_content_size: cap,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
