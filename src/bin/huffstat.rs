use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use huffstat::{Analysis, Config, FrequencyTable};

const USAGE: &str = "usage: huffstat <FILE> [--config <TOML>] [--json]";

struct Args {
    input: PathBuf,
    config: Option<PathBuf>,
    json: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut input = None;
    let mut config = None;
    let mut json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument {:?}\n{}", arg, USAGE),
        }
    }

    Ok(Args {
        input: input.context(USAGE)?,
        config,
        json,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    log::debug!("config: {:?}", config);

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let table = FrequencyTable::from_text(&text, config.lowercase, config.strip_newlines);
    log::info!(
        "{}: {} symbols, {} distinct",
        args.input.display(),
        table.total(),
        table.len()
    );

    let analysis = Analysis::run(table, config.fixed_width)
        .with_context(|| format!("analyzing {}", args.input.display()))?;

    if args.json {
        println!("{}", analysis.to_json()?);
    } else {
        print!("{}", analysis);
    }
    Ok(())
}
