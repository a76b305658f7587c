use colored::Colorize;
use dr_core::{ReachConfig, TargetNumber, format, reachability};

pub fn run(config: &ReachConfig, number: &str, json: bool) -> Result<(), String> {
    let target = number
        .parse::<TargetNumber>()
        .map_err(|e| e.to_string())?;
    let result = reachability(target, config.days);

    if json {
        let multipliers: Vec<_> = result
            .multipliers()
            .map(|(day, m)| serde_json::json!({ "day": day, "multiplier": m }))
            .collect();
        let out = serde_json::json!({
            "number": result.target,
            "days": result.days,
            "count": result.count(),
            "day_range": [result.range.first(), result.range.last()],
            "probability": result.probability(),
            "percent": result.percent(),
            "multipliers": multipliers,
        });
        let text = serde_json::to_string_pretty(&out)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    let lines = format::summary_lines(&result, config);
    println!("  {}", lines[0].bold());
    for line in &lines[1..] {
        println!("  {line}");
    }

    if result.is_reachable() {
        println!();
        for (day, multiplier) in result.multipliers() {
            println!(
                "  {:>2} × {:<2} = {}",
                day,
                multiplier,
                result.target.to_string().dimmed()
            );
        }
    }

    Ok(())
}
