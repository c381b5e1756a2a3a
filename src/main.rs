use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use shogiban::layout::PanePlacement;
use shogiban::{Address, ConfigError, GlobalConfig, Layout, LayoutError, Point, Rect, ScreenEngine};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("layout failed: {0}")]
    Layout(#[from] LayoutError),
    #[error("configuration failed: {0}")]
    Config(#[from] ConfigError),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "shogiban", about = "Inspect shogi game-screen geometry for a window size")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct WindowArgs {
    /// Client area width in pixels.
    #[arg(long, env = "SHOGIBAN_WIDTH")]
    width: f64,
    /// Client area height in pixels.
    #[arg(long, env = "SHOGIBAN_HEIGHT")]
    height: f64,
    /// Client area top (e.g. below a menu strip).
    #[arg(long, default_value_t = 0.0)]
    top: f64,
    /// Draw the board from the second player's side.
    #[arg(long)]
    reverse: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve one screen point to a board square or hand slot.
    Probe {
        #[command(flatten)]
        window: WindowArgs,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// List every address with its on-screen rectangle.
    Slots {
        #[command(flatten)]
        window: WindowArgs,
    },
}

#[derive(Serialize)]
struct ProbeReport {
    layout: Layout,
    logical: Point,
    address: Option<Address>,
    label: String,
}

#[derive(Serialize)]
struct SlotReport {
    address: Address,
    label: String,
    screen: Rect,
}

#[derive(Serialize)]
struct SlotsReport {
    layout: Layout,
    kifu_pane: PanePlacement,
    slots: Vec<SlotReport>,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Probe { window, x, y } => run_probe(&window, Point::new(x, y)),
        Command::Slots { window } => run_slots(&window),
    }
}

fn fitted_engine(window: &WindowArgs) -> Result<(ScreenEngine<GlobalConfig>, Layout), CliError> {
    let mut config = GlobalConfig::from_env()?;
    if window.reverse {
        config.board_reverse = true;
    }
    let mut engine = ScreenEngine::new(config);
    let layout = engine.fit_to_client(Rect::new(0.0, window.top, window.width, window.height))?;
    Ok((engine, layout))
}

fn run_probe(window: &WindowArgs, screen: Point) -> Result<(), CliError> {
    let (engine, layout) = fitted_engine(window)?;
    let address = engine.resolve_screen(screen);
    let report = ProbeReport {
        layout,
        logical: engine.transform().inverse_affine(screen),
        address,
        label: address.map_or_else(|| "none".to_owned(), |a| a.to_string()),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_slots(window: &WindowArgs) -> Result<(), CliError> {
    let (engine, layout) = fitted_engine(window)?;
    let slots = Address::all()
        .map(|address| SlotReport { address, label: address.to_string(), screen: engine.screen_rect(address) })
        .collect();
    let report = SlotsReport { layout, kifu_pane: engine.kifu_pane(), slots };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
