use std::path::Path;

use dr_core::{ReachConfig, ReachError, export_csv};

pub fn run(config: &ReachConfig, output: &Path, force: bool) -> Result<(), String> {
    let table = config.table();

    export_csv(&table, output, config, force).map_err(|e| match e {
        ReachError::ExportExists(path) => format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ),
        other => format!("failed to save CSV: {other}"),
    })?;

    println!(
        "  CSV exported to: {} ({} rows)",
        output.display(),
        table.rows().len()
    );

    Ok(())
}
