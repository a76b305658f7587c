use std::path::Path;

use colored::Colorize;
use dr_core::{MAX_TARGET, MIN_TARGET, ProbabilityTable, ReachConfig, format};
use plotters::prelude::*;

/// Width of the longest terminal bar, in cells.
const BAR_WIDTH: f64 = 40.0;

pub fn run(config: &ReachConfig, svg: Option<&Path>, force: bool) -> Result<(), String> {
    let table = config.table();

    match svg {
        Some(path) => {
            if path.exists() && !force {
                return Err(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ));
            }
            draw_svg(&table, path)?;
            tracing::info!(path = %path.display(), "wrote SVG chart");
            println!("  Chart written to {}", path.display());
        }
        None => print_bars(&table, config),
    }

    Ok(())
}

fn print_bars(table: &ProbabilityTable, config: &ReachConfig) {
    let max = table.max_probability();
    let insights = table.insights();

    println!("  Probability distribution ({MIN_TARGET}-{MAX_TARGET})");
    println!();
    for row in table.rows() {
        let p = row.probability();
        let cells = if max > 0.0 {
            (p / max * BAR_WIDTH).round() as usize
        } else {
            0
        };
        let bar = "█".repeat(cells);
        let bar = if insights.most_likely.contains(&row.target) {
            bar.green()
        } else if insights.least_likely.contains(&row.target) {
            bar.yellow()
        } else {
            bar.normal()
        };
        println!(
            "  {:>2} │{bar}{} {}",
            row.target,
            " ".repeat(BAR_WIDTH as usize - cells),
            format::percent(p, config)
        );
    }
}

fn draw_svg(table: &ProbabilityTable, path: &Path) -> Result<(), String> {
    let root = SVGBackend::new(path, (1280, 480)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let y_max = (table.max_probability() * 1.08).max(0.01);
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Probability Distribution ({MIN_TARGET}-{MAX_TARGET})"),
            ("sans-serif", 24),
        )
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(64)
        .build_cartesian_2d((MIN_TARGET..MAX_TARGET + 1).into_segmented(), 0.0..y_max)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Number")
        .y_desc("Probability")
        .draw()
        .map_err(|e| e.to_string())?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.filled())
                .margin(2)
                .data(
                    table
                        .rows()
                        .iter()
                        .map(|row| (row.target.get(), row.probability())),
                ),
        )
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())?;
    Ok(())
}
