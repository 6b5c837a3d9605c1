//! Reporting: per-height timing tables, the comparison chart and tree printing.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use itertools::Itertools;
use rgb::RGB8;
use serde::Serialize;
use textplots::{Chart, ColorPlot, LabelBuilder, LabelFormat, Shape};
use tracing::instrument;

use super::output;
use crate::application::Comparison;
use crate::domain::TreeDisplay;

pub const CHART_TITLE: &str = "Performance comparison";
pub const X_LABEL: &str = "Tree height";
pub const Y_LABEL: &str = "Time (sec)";
pub const RECURSIVE_LABEL: &str = "Recursive";
pub const ITERATIVE_LABEL: &str = "Iterative";

const RECURSIVE_COLOR: RGB8 = RGB8 { r: 31, g: 119, b: 180 };
const ITERATIVE_COLOR: RGB8 = RGB8 { r: 255, g: 127, b: 14 };

/// Chart size in terminal braille dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 120,
            height: 60,
        }
    }
}

/// Axis ranges `(xmin, xmax, ymin, ymax)` covering both series.
///
/// Degenerate ranges are widened so the chart always has a drawable area.
pub fn chart_bounds(comparison: &Comparison) -> (f32, f32, f32, f32) {
    let heights = comparison.heights();
    let xmin = heights.first().copied().unwrap_or(0) as f32;
    let mut xmax = heights.last().copied().unwrap_or(0) as f32;
    if xmax <= xmin {
        xmax = xmin + 1.0;
    }
    let ymax = (comparison.max_seconds() * 1.1) as f32;
    let ymax = if ymax > 0.0 { ymax } else { 1e-6 };
    (xmin, xmax, 0.0, ymax)
}

// Comparison guarantees aligned series, zip_eq cannot panic here
fn points(heights: &[u32], seconds: &[f64]) -> Vec<(f32, f32)> {
    heights
        .iter()
        .zip_eq(seconds)
        .map(|(&h, &s)| (h as f32, s as f32))
        .collect()
}

fn write_section<W: Write>(
    out: &mut W,
    title: &str,
    heights: &[u32],
    seconds: &[f64],
) -> io::Result<()> {
    writeln!(out, "\n{}:", title)?;
    for (height, secs) in heights.iter().zip_eq(seconds) {
        writeln!(out, "Height {}: {:.6} sec", height, secs)?;
    }
    Ok(())
}

/// Writes the recursive section, then the iterative section, one line per height.
pub fn write_results<W: Write>(out: &mut W, comparison: &Comparison) -> io::Result<()> {
    write_section(
        out,
        "Recursive implementation",
        comparison.heights(),
        comparison.recursive(),
    )?;
    write_section(
        out,
        "Iterative implementation",
        comparison.heights(),
        comparison.iterative(),
    )
}

fn write_legend<W: Write>(out: &mut W, label: &str, color: RGB8) -> io::Result<()> {
    writeln!(out, "  {} {}", "━━━".truecolor(color.r, color.g, color.b), label)
}

/// Draws both series as a colored line chart with title, axis labels and legend.
///
/// Y-axis ticks use the same six decimals as the timing tables.
#[instrument(level = "debug", skip(out, comparison))]
pub fn render_chart<W: Write>(
    out: &mut W,
    comparison: &Comparison,
    options: ChartOptions,
) -> io::Result<()> {
    let recursive = points(comparison.heights(), comparison.recursive());
    let iterative = points(comparison.heights(), comparison.iterative());
    let (xmin, xmax, ymin, ymax) = chart_bounds(comparison);

    writeln!(out)?;
    writeln!(out, "{}", CHART_TITLE.cyan().bold())?;
    writeln!(out, "  {}", Y_LABEL)?;

    let recursive_shape = Shape::Lines(&recursive);
    let iterative_shape = Shape::Lines(&iterative);
    let mut chart = Chart::new_with_y_range(options.width, options.height, xmin, xmax, ymin, ymax);
    let chart = chart
        .y_label_format(LabelFormat::Custom(Box::new(|v: f32| format!("{v:.6}"))))
        .linecolorplot(&recursive_shape, RECURSIVE_COLOR)
        .linecolorplot(&iterative_shape, ITERATIVE_COLOR);
    chart.axis();
    chart.figures();
    write!(out, "{chart}")?;

    writeln!(out, "{:>width$}", X_LABEL, width = (options.width / 2) as usize)?;
    write_legend(out, RECURSIVE_LABEL, RECURSIVE_COLOR)?;
    write_legend(out, ITERATIVE_LABEL, ITERATIVE_COLOR)
}

/// Blocks until a line (or end of input) is read from `input`.
pub fn wait_for_dismiss<R: BufRead>(input: &mut R) -> io::Result<()> {
    output::prompt("Press Enter to close");
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

/// Writes a tree either as termtree text or as its JSON mapping.
pub fn write_tree<T, W>(out: &mut W, tree: &T, json: bool) -> super::CliResult<()>
where
    T: TreeDisplay + Serialize,
    W: Write,
{
    if json {
        serde_json::to_writer(&mut *out, tree)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", tree.to_tree_string())?;
    }
    Ok(())
}
