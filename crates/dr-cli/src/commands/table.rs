use comfy_table::{CellAlignment, ContentArrangement, Table};
use dr_core::{ReachConfig, format};

pub fn run(config: &ReachConfig) -> Result<(), String> {
    let probabilities = config.table();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Number", "Days", "Probability", "Percent", "Reachable by"]);

    for row in probabilities.rows() {
        let p = row.probability();
        table.add_row(vec![
            row.target.to_string(),
            row.count().to_string(),
            format::decimal(p, config),
            format::percent(p, config),
            format::days_list(&row.days),
        ]);
    }

    for index in 0..4 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("{table}");
    println!();
    println!(
        "  {} numbers over days {}",
        probabilities.rows().len(),
        probabilities.range()
    );

    Ok(())
}
