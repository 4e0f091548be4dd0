use serde::Serialize;
use std::io::Read;
use tracing_subscriber::EnvFilter;
use visionboard::{Board, BoardConfig, Viewport, cards_from_json_str, example_cards};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Board(visionboard::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Board(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<visionboard::Error> for CliError {
    fn from(value: visionboard::Error) -> Self {
        Self::Board(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Simulate,
    Links,
    Example,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    config: Option<String>,
    pretty: bool,
    steps: usize,
    window_width: f64,
    window_height: f64,
    time_ms: f64,
    dragged: Option<String>,
    out: Option<String>,
}

#[derive(Serialize)]
struct LinkOut<'a> {
    from: &'a str,
    to: &'a str,
    d: String,
}

fn usage() -> &'static str {
    "visionboard-cli\n\
\n\
USAGE:\n\
  visionboard-cli [simulate] [--steps <n>] [--width <w>] [--height <h>] [--time-ms <t>] [--config <path>] [--dragged <id>] [--pretty] [--out <path>] [<path>|-]\n\
  visionboard-cli links [--time-ms <t>] [--pretty] [--out <path>] [<path>|-]\n\
  visionboard-cli example [--pretty] [--out <path>]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the board JSON is read from stdin.\n\
  - --width/--height are the window size; the config's reservedBottom is excluded from the board.\n\
  - simulate advances the sway clock by the config's frame interval per step.\n\
  - Set RUST_LOG (e.g. RUST_LOG=visionboard=debug) for diagnostics on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        command: Command::Simulate,
        steps: 1,
        window_width: 1000.0,
        window_height: 920.0,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "simulate" => args.command = Command::Simulate,
            "links" => args.command = Command::Links,
            "example" => args.command = Command::Example,
            "--pretty" => args.pretty = true,
            "--steps" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.steps = n.parse::<usize>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--width" => {
                let Some(w) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.window_width = parse_finite(w)?;
            }
            "--height" => {
                let Some(h) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.window_height = parse_finite(h)?;
            }
            "--time-ms" => {
                let Some(t) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.time_ms = parse_finite(t)?;
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--dragged" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.dragged = Some(id.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn parse_finite(s: &str) -> Result<f64, CliError> {
    let v = s.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CliError::Usage(usage()))
    }
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let mut text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    text.push('\n');
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn load_config(path: Option<&str>) -> Result<BoardConfig, CliError> {
    match path {
        None => Ok(BoardConfig::default()),
        Some(path) => Ok(BoardConfig::load(path)?),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Example => write_json(&example_cards(), args.pretty, args.out.as_deref()),
        Command::Simulate => {
            let text = read_input(args.input.as_deref())?;
            let cards = cards_from_json_str(&text)?;
            let viewport =
                Viewport::from_window(args.window_width, args.window_height, config.reserved_bottom);
            let mut board = Board::new(cards, viewport, &config)?;
            if let Some(id) = args.dragged.as_deref() {
                board.begin_drag(id)?;
            }

            tracing::info!(
                cards = board.cards().len(),
                steps = args.steps,
                width = viewport.width,
                height = viewport.height,
                "simulating"
            );
            for frame in 0..args.steps {
                board.step_at(args.time_ms + frame as f64 * config.frame_interval_ms);
            }
            write_json(&board.cards(), args.pretty, args.out.as_deref())
        }
        Command::Links => {
            let text = read_input(args.input.as_deref())?;
            let cards = cards_from_json_str(&text)?;
            let links: Vec<LinkOut<'_>> = otter::links(&cards, args.time_ms)
                .into_iter()
                .map(|l| LinkOut {
                    from: l.from,
                    to: l.to,
                    d: l.path.to_svg_path(),
                })
                .collect();
            write_json(&links, args.pretty, args.out.as_deref())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
