use crate::config::ReachConfig;
use crate::day::Day;
use crate::insights::Insights;
use crate::reach::Reachability;
use crate::target::TargetNumber;

/// How many distinct counts the insight summary lists.
const TOP_COUNTS: usize = 8;

/// Formats a probability as a fraction, e.g. `0.19355`.
pub fn decimal(probability: f64, config: &ReachConfig) -> String {
    format!("{probability:.prec$}", prec = config.decimals)
}

/// Formats a probability as a percentage, e.g. `19.35%`.
pub fn percent(probability: f64, config: &ReachConfig) -> String {
    format!("{:.prec$}%", probability * 100.0, prec = config.percent_decimals)
}

/// Formats contributing days as `[1, 2, 3]`, or `—` when there are none.
pub fn days_list(days: &[Day]) -> String {
    if days.is_empty() {
        return "—".to_string();
    }
    let joined: Vec<String> = days.iter().map(Day::to_string).collect();
    format!("[{}]", joined.join(", "))
}

/// Formats target numbers as `1, 37, 41`.
pub fn number_list(targets: &[TargetNumber]) -> String {
    let joined: Vec<String> = targets.iter().map(TargetNumber::to_string).collect();
    joined.join(", ")
}

/// The three-line result shown after checking one number.
pub fn summary_lines(result: &Reachability, config: &ReachConfig) -> Vec<String> {
    let p = result.probability();
    vec![
        format!(
            "Number {} is reachable by {} day(s) out of {}.",
            result.target,
            result.count(),
            result.range.day_count()
        ),
        format!(
            "Probability: {} (≈ {})",
            decimal(p, config),
            percent(p, config)
        ),
        format!("Days: {}", days_list(&result.days)),
    ]
}

/// Human-readable insight lines: most likely, least likely, distinct counts.
pub fn insight_lines(insights: &Insights, config: &ReachConfig) -> Vec<String> {
    vec![
        extreme_line(
            "Most",
            &insights.most_likely,
            insights.most_count,
            insights.most_probability(),
            config,
        ),
        extreme_line(
            "Least",
            &insights.least_likely,
            insights.least_count,
            insights.least_probability(),
            config,
        ),
        format!(
            "Unique reach counts across numbers: {:?} (top values shown)",
            &insights.distinct_counts[..insights.distinct_counts.len().min(TOP_COUNTS)]
        ),
    ]
}

fn extreme_line(
    label: &str,
    targets: &[TargetNumber],
    count: usize,
    probability: f64,
    config: &ReachConfig,
) -> String {
    let days = if count == 1 { "day" } else { "days" };
    let odds = format!(
        "probability ≈ {} or {}",
        decimal(probability, config),
        percent(probability, config)
    );
    if targets.len() == 1 {
        format!(
            "{label} likely number: {} (reachable by {count} different {days} → {odds})",
            number_list(targets)
        )
    } else {
        format!(
            "{label} likely numbers: {} (each reachable by {count} {days} → {odds})",
            number_list(targets)
        )
    }
}
