use colored::Colorize;
use dr_core::{ReachConfig, format};

pub fn run(config: &ReachConfig) -> Result<(), String> {
    let insights = config.table().insights();
    let lines = format::insight_lines(&insights, config);

    println!("  {}", "Insights".bold());
    println!();
    println!("  {}", lines[0].green());
    println!("  {}", lines[1].yellow());
    println!("  {}", lines[2]);

    Ok(())
}
