use std::collections::BTreeMap;
use std::process::ExitCode;

use anyhow::{Context as _, Result, bail};
use clap::Parser;
use doge::shibe::DEFAULT_DENSITY;
use doge::{DogeError, Options, SeasonChoice, Shibe, Tty, season};
use rand::SeedableRng as _;
use rand::rngs::StdRng;

/// Wow print shibe to terminal, such random words.
#[derive(clap::Parser, Debug)]
#[command(name = "doge", author, version, about, long_about = None)]
struct Args {
    /// wow shibe file, by embedded name or path
    #[arg(long = "shibe")]
    shibe: Option<String>,

    /// wow no doge show :(
    #[arg(long)]
    no_shibe: bool,

    /// wow shibe season congrate
    #[arg(long, value_parser = clap::builder::PossibleValuesParser::new(season::keys().chain(["none"])))]
    season: Option<String>,

    /// such frequency based
    #[arg(short, long)]
    frequency: bool,

    /// beautiful step, the largest jump between ranks in frequency mode
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u64).range(1..))]
    step: u64,

    /// pretty minimum, shortest word kept when filtering stopwords
    #[arg(long, default_value_t = 1)]
    min_length: usize,

    /// such filter, remove many common words from input lol
    #[arg(short = 's', long)]
    filter_stopwords: bool,

    /// such max height
    #[arg(long)]
    max_height: Option<usize>,

    /// such max width
    #[arg(long)]
    max_width: Option<usize>,

    /// such word density percent, max is 100, default is 30, wow
    #[arg(short, long, default_value_t = DEFAULT_DENSITY, allow_negative_numbers = true)]
    density: f64,

    /// very reproducible, seed the randomness
    #[arg(long)]
    seed: Option<u64>,

    /// Log level pairs of the form <MODULE>:<LEVEL>.
    #[arg(long)]
    log_levels: Option<Vec<String>>,
}

impl Args {
    fn options(&self) -> Options {
        Options {
            density: self.density,
            frequency: self.frequency,
            step: self.step as usize,
            filter_stopwords: self.filter_stopwords,
            min_length: self.min_length,
            shibe: self.shibe.clone(),
            no_shibe: self.no_shibe,
            season: self
                .season
                .as_deref()
                .and_then(SeasonChoice::parse)
                .unwrap_or_default(),
        }
    }
}

/// Convert a series of <MODULE>:<LEVEL> pairs into actionable `(module, LevelFilter)` pairs
fn as_level_pairs(config: &[String]) -> Result<Vec<(&str, simplelog::LevelFilter)>> {
    let mut pairs = Vec::with_capacity(config.len());
    for c in config {
        let tokens: Vec<&str> = c.split(":").collect();
        if tokens.len() != 2 {
            bail!("Flag config pair was not of the form <MODULE>:<LEVEL>: '{c}'");
        }
        pairs.push((
            tokens[0],
            match tokens[1].to_lowercase().as_str() {
                "trace" => simplelog::LevelFilter::Trace,
                "debug" => simplelog::LevelFilter::Debug,
                "info" => simplelog::LevelFilter::Info,
                "warn" => simplelog::LevelFilter::Warn,
                "error" => simplelog::LevelFilter::Error,
                "off" => simplelog::LevelFilter::Off,
                _ => bail!("Unrecognized level name in '{c}'"),
            },
        ))
    }

    Ok(pairs)
}

/// Loggers write to stderr only, stdout belongs to the shibe.
fn initialize_logging(module_path_filters: &[(&str, simplelog::LevelFilter)]) -> Result<()> {
    simplelog::CombinedLogger::init(
        module_path_filters
            .iter()
            .map(|(module_path_filter, level)| {
                simplelog::TermLogger::new(
                    *level,
                    simplelog::ConfigBuilder::new()
                        .add_filter_allow(module_path_filter.to_string())
                        .build(),
                    simplelog::TerminalMode::Stderr,
                    simplelog::ColorChoice::Auto,
                ) as Box<dyn simplelog::SharedLogger>
            })
            .collect(),
    )
    .map_err(|e| e.into())
}

fn log_levels(levels_arg: Option<&[String]>) -> Result<Vec<(&str, simplelog::LevelFilter)>> {
    let mut log_levels = BTreeMap::from([("doge", simplelog::LevelFilter::Warn)]);

    for (module, level) in levels_arg
        .map(as_level_pairs)
        .unwrap_or(Ok(vec![]))
        .context("Log level override parsing failed")?
    {
        log_levels.insert(module, level);
    }
    Ok(log_levels.into_iter().collect())
}

fn run(args: &Args) -> Result<(), DogeError> {
    let tty = Tty::probe().with_limits(args.max_width, args.max_height);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let today = chrono::Local::now().date_naive();

    let shibe = Shibe::new(args.options(), tty, &mut rng);
    let canvas = shibe.render(&mut rng, today, std::io::stdin().lock())?;
    doge::print_doge(&canvas, std::io::stdout().lock())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_levels = match log_levels(args.log_levels.as_deref()) {
        Ok(log_levels) => log_levels,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::FAILURE;
        }
    };
    let _ = initialize_logging(&log_levels[..]);
    log::trace!("Logging initialized, arguments parsed...");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            if e.is_encoding() {
                let (_, advice) = doge::error::locale_exit_code(&doge::error::locale());
                eprintln!("{advice}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}
