use comfy_table::{Row, Table, presets};

use crate::registry::Registry;

/// Renders the registry as a table. The active dataset is marked with
/// an asterisk.
pub(crate) fn datasets_table(registry: &Registry) -> Table {
    let active = registry.active().map(|(idx, _)| idx);

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_header(Row::from(vec![
        "#", "project", "network path", "DTD revision", "target output",
    ]));

    for (idx, record) in registry.iter() {
        let marker = if Some(idx) == active { "*" } else { "" };
        table.add_row(vec![
            format!("{idx}{marker}"),
            record.project_name().to_string(),
            record.network_path().to_string(),
            record.dtd_revision().to_string(),
            record.target_output().label().to_string(),
        ]);
    }

    table
}

/// Returns one line per dataset, suitable as menu items.
pub(crate) fn dataset_items(registry: &Registry) -> Vec<String> {
    registry
        .iter()
        .map(|(_, record)| {
            format!(
                "{} [{}] {}, {}",
                record.project_name(),
                record.dtd_revision(),
                record.network_path(),
                record.target_output().label(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DatasetRecord;
    use crate::store::Store;
    use crate::target::TargetOutput;

    type TestResult = anyhow::Result<()>;

    fn registry() -> anyhow::Result<Registry> {
        Ok(Registry::with_records(
            Store::new("datasets.json"),
            vec![
                DatasetRecord::new(
                    "Alpha",
                    "//srv/a",
                    "6.0.3",
                    TargetOutput::Paper,
                )?,
                DatasetRecord::new(
                    "Beta",
                    "//srv/b",
                    "4.1",
                    TargetOutput::Unknown("html".into()),
                )?,
            ],
        ))
    }

    #[test]
    fn datasets_table_marks_active() -> TestResult {
        let mut registry = registry()?;
        registry.select(Some(2))?;

        let table = datasets_table(&registry).to_string();
        assert!(table.contains("Paper (PDF)"));
        assert!(table.contains("html"));
        assert!(table.contains("2*"));
        assert!(!table.contains("1*"));

        Ok(())
    }

    #[test]
    fn dataset_items_ok() -> TestResult {
        let items = dataset_items(&registry()?);
        assert_eq!(
            items,
            vec![
                "Alpha [6.0.3] //srv/a, Paper (PDF)",
                "Beta [4.1] //srv/b, html",
            ]
        );

        Ok(())
    }
}
