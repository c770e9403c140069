use crate::model::{DriveMode, Taz};
use serde::{Deserialize, Serialize};

/// run-level configuration for a path search engine. the number of skim sets
/// and retained alternatives are model inputs, not engine constants.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SearchConfig {
    /// number of line-haul utility variants evaluated per tap pair.
    pub skim_sets: usize,
    /// number of retained best-path alternatives.
    pub alternatives: usize,
    /// when true, park-and-ride taps whose lot has no remaining capacity are
    /// dropped from the drive-side tap set.
    #[serde(default)]
    pub capacity_constrained: bool,
    /// how drive legs are staged at the tap.
    #[serde(default)]
    pub drive_mode: DriveMode,
    #[serde(default)]
    pub trace: TraceConfig,
}

/// zone pairs whose searches should emit the per-alternative debug report.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TraceConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub origins: Vec<Taz>,
    #[serde(default)]
    pub destinations: Vec<Taz>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_read_from_toml() {
        let config: SearchConfig = toml::from_str(
            r#"
            skim_sets = 3
            alternatives = 4
            capacity_constrained = true
            drive_mode = "kiss_and_ride"

            [trace]
            enabled = true
            origins = [100, 101]
            destinations = [200]
            "#,
        )
        .expect("configuration failed to deserialize");

        assert_eq!(config.skim_sets, 3);
        assert_eq!(config.alternatives, 4);
        assert!(config.capacity_constrained);
        assert_eq!(config.drive_mode, DriveMode::KissAndRide);
        assert!(config.trace.enabled);
        assert_eq!(config.trace.origins, vec![100, 101]);
        assert_eq!(config.trace.destinations, vec![200]);
    }

    #[test]
    fn test_optional_sections_default() {
        let config: SearchConfig = toml::from_str(
            r#"
            skim_sets = 1
            alternatives = 2
            "#,
        )
        .expect("configuration failed to deserialize");

        assert!(!config.capacity_constrained);
        assert_eq!(config.drive_mode, DriveMode::ParkAndRide);
        assert!(!config.trace.enabled);
        assert!(config.trace.origins.is_empty());
    }
}
