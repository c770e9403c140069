use crate::model::search::TraceConfig;
use crate::model::Taz;
use std::collections::HashSet;

/// predicate over (origin, destination) analysis-zone pairs that gates the
/// per-alternative debug report.
#[derive(Debug, Default)]
pub struct ZonePairTracer {
    pairs: HashSet<(Taz, Taz)>,
}

impl ZonePairTracer {
    /// build the traced pair set as the cross product of the configured
    /// origin and destination zones. disabled tracing yields an empty set.
    pub fn new(config: &TraceConfig) -> ZonePairTracer {
        let mut pairs = HashSet::new();
        if config.enabled {
            for &otaz in &config.origins {
                for &dtaz in &config.destinations {
                    pairs.insert((otaz, dtaz));
                }
            }
        }
        ZonePairTracer { pairs }
    }

    pub fn matches(&self, otaz: Taz, dtaz: Taz) -> bool {
        self.pairs.contains(&(otaz, dtaz))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cross_product_of_configured_zones() {
        let tracer = ZonePairTracer::new(&TraceConfig {
            enabled: true,
            origins: vec![100, 101],
            destinations: vec![200],
        });
        assert!(tracer.matches(100, 200));
        assert!(tracer.matches(101, 200));
        assert!(!tracer.matches(200, 100));
        assert!(!tracer.matches(100, 100));
    }

    #[test]
    fn test_disabled_tracer_matches_nothing() {
        let tracer = ZonePairTracer::new(&TraceConfig {
            enabled: false,
            origins: vec![100],
            destinations: vec![200],
        });
        assert!(!tracer.matches(100, 200));
    }
}
