use std::io::{self, Write};

use tracing::{debug, instrument};

use crate::application::run_comparison;
use crate::cli::args::{Cli, Commands, Strategy};
use crate::cli::report::{self, ChartOptions};
use crate::cli::CliResult;
use crate::config::Settings;
use crate::domain::{build_tree_iterative, build_tree_recursive};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    match &cli.command {
        None => _compare(&settings, false, false),
        Some(Commands::Compare { no_plot, no_wait }) => _compare(&settings, *no_plot, *no_wait),
        Some(Commands::Show {
            strategy,
            height,
            root,
            json,
        }) => _show(&settings, *strategy, *height, *root, *json),
    }
}

#[instrument(skip(settings))]
fn _compare(settings: &Settings, no_plot: bool, no_wait: bool) -> CliResult<()> {
    debug!("settings: {:?}", settings);
    let comparison = run_comparison(settings)?;

    let mut stdout = io::stdout().lock();
    report::write_results(&mut stdout, &comparison)?;
    if !no_plot {
        report::render_chart(&mut stdout, &comparison, ChartOptions::default())?;
    }
    stdout.flush()?;
    drop(stdout);

    if !no_plot && !no_wait {
        report::wait_for_dismiss(&mut io::stdin().lock())?;
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _show(
    settings: &Settings,
    strategy: Strategy,
    height: i64,
    root: Option<i64>,
    json: bool,
) -> CliResult<()> {
    let root = root.unwrap_or(settings.root);
    let mut stdout = io::stdout().lock();
    match strategy {
        Strategy::Recursive => {
            report::write_tree(&mut stdout, &build_tree_recursive(height, root), json)
        }
        Strategy::Iterative => {
            report::write_tree(&mut stdout, &build_tree_iterative(height, root), json)
        }
    }
}
