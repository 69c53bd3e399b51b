use std::{env, io};

use anyhow::{Context, bail};
use colored::Colorize;
use config::{RenderMode, RunConfig};
use liblife::board::TileState;

mod config;
mod pacer;
mod prompt;
mod render;
mod run;

const USAGE: &str = "Usage: runner [iterations|-] [config.json|-] [text|png|both|none]";

/// Positional arguments, where `-` or a missing argument means the default.
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    iterations: Option<usize>,
    config_path: Option<String>,
    render: Option<RenderMode>,
}

/// Returns `None` when help was asked for.
fn parse_args<I>(args: I) -> anyhow::Result<Option<Args>>
where
    I: IntoIterator<Item = String>,
{
    let args = args.into_iter().collect::<Vec<_>>();

    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        return Ok(None);
    }

    if args.len() > 3 {
        bail!("Expected at most 3 arguments, got {}\n{USAGE}", args.len());
    }

    let given = |index: usize| args.get(index).filter(|arg| *arg != "-");

    let iterations = given(0)
        .map(|arg| {
            prompt::parse_iterations(arg)
                .with_context(|| format!("Bad iteration count {arg:?}\n{USAGE}"))
        })
        .transpose()?;

    let render = given(2)
        .map(|arg| {
            arg.parse::<RenderMode>()
                .with_context(|| format!("Unknown render mode {arg:?}\n{USAGE}"))
        })
        .transpose()?;

    Ok(Some(Args {
        iterations,
        config_path: given(1).cloned(),
        render,
    }))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(args) = parse_args(env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };

    let mut config = match &args.config_path {
        Some(config_path) => RunConfig::load(config_path)
            .with_context(|| format!("Couldn't load config {config_path}\n{USAGE}"))?,
        None => RunConfig::default(),
    };

    if let Some(render) = args.render {
        config.render = render;
    }

    let iterations = match args.iterations {
        Some(iterations) => iterations,
        None => prompt::ask_iterations(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    let run_id = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    let summary = run::run_simulation(&config, iterations, &run_id)?;

    let generations_per_second =
        summary.iterations as f32 / summary.elapsed.as_secs_f32().max(f32::EPSILON);

    println!(
        "{} {} generations in {:.2?} ({:.1} gen/s), {} alive at the end, {} boards sampled",
        "done".bright_green(),
        summary.iterations,
        summary.elapsed,
        generations_per_second,
        summary.final_board.count_cells(TileState::Alive),
        summary.samples,
    );

    if let Some((oldest, _)) = summary.recent.iter().next() {
        println!(
            "     kept generations {oldest}..={} in memory",
            summary.iterations
        );
    }

    if let Some(final_image) = summary.final_image {
        println!("     final board saved to {}", final_image.display().to_string().bold());
    }

    Ok(())
}
