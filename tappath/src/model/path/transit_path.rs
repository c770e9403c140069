use crate::model::{AccessEgress, Tap};

/// utilities at or below this value mark a path as not available. such
/// candidates are never retained and never enter a choice model.
pub const UNAVAILABLE: f64 = -999.0;

/// one candidate itinerary: a (boarding tap, alighting tap, skim set) triple
/// for a mode combination, with its three independently-cached component
/// utilities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitPath {
    pub board: Tap,
    pub alight: Tap,
    pub skim_set: usize,
    pub combo: AccessEgress,
    pub access: f64,
    pub line_haul: f64,
    pub egress: f64,
}

impl TransitPath {
    /// total utility, the sole ranking key.
    pub fn total(&self) -> f64 {
        self.access + self.line_haul + self.egress
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_total_is_sum_of_components() {
        let path = TransitPath {
            board: 10,
            alight: 20,
            skim_set: 1,
            combo: AccessEgress::WalkWalk,
            access: -1.25,
            line_haul: -4.5,
            egress: -0.75,
        };
        assert_eq!(path.total(), -6.5);
    }
}
