use anyhow::Result;
use clap::ValueEnum;
use model::{DashboardData, MockDataProvider};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FixtureFormat {
    Json,
    Yaml,
}

/// Serializes the full mock dashboard snapshot.
pub fn render_fixtures(format: FixtureFormat) -> Result<String> {
    let snapshot = MockDataProvider::new().snapshot();
    debug!(
        "Rendering {} transactions, {} bills as {:?}",
        snapshot.transactions.len(),
        snapshot.bills.len(),
        format
    );

    let rendered = match format {
        FixtureFormat::Json => serde_json::to_string_pretty(&snapshot)?,
        FixtureFormat::Yaml => serde_yaml::to_string(&snapshot)?,
    };
    Ok(rendered)
}

pub fn fixtures(format: FixtureFormat) -> Result<()> {
    println!("{}", render_fixtures(format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::DashboardSnapshot;

    #[test]
    fn test_json_fixtures_match_provider() {
        let rendered = render_fixtures(FixtureFormat::Json).unwrap();
        let parsed: DashboardSnapshot = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, MockDataProvider::new().snapshot());
    }

    #[test]
    fn test_yaml_fixtures_match_provider() {
        let rendered = render_fixtures(FixtureFormat::Yaml).unwrap();
        let parsed: DashboardSnapshot = serde_yaml::from_str(&rendered).unwrap();
        assert_eq!(parsed, MockDataProvider::new().snapshot());
    }

    #[test]
    fn test_amounts_are_exact_strings() {
        let rendered = render_fixtures(FixtureFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert!(value["transactions"][0]["amount"].is_string());
        assert_eq!(value["user"]["name"], "Alex Morgan");
    }
}
