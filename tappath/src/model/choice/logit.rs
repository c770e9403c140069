use crate::model::choice::ChoiceError;
use crate::model::path::BestPaths;

/// multinomial logit model over the live alternatives of a [`BestPaths`]
/// result. alternatives enter in slot order with their total utility as the
/// systematic utility, so a chosen index refers back into the same result.
#[derive(Debug)]
pub struct PathLogit {
    slots: Vec<usize>,
    weights: Vec<f64>,
    total_weight: f64,
}

impl PathLogit {
    pub fn new(best: &BestPaths) -> PathLogit {
        let mut slots = Vec::with_capacity(best.alternatives());
        let mut weights = Vec::with_capacity(best.alternatives());
        for (slot, alt) in best.live() {
            slots.push(slot);
            weights.push(alt.utility.exp());
        }
        let total_weight = weights.iter().sum();
        PathLogit {
            slots,
            weights,
            total_weight,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// log of the summed exponentiated utilities, the composite
    /// accessibility measure over the retained paths. negative infinity
    /// when nothing is available.
    pub fn logsum(&self) -> f64 {
        if self.total_weight > 0.0 {
            self.total_weight.ln()
        } else {
            f64::NEG_INFINITY
        }
    }

    /// choice probability per live alternative, in slot order.
    pub fn probabilities(&self) -> Vec<f64> {
        if self.total_weight > 0.0 {
            self.weights.iter().map(|w| w / self.total_weight).collect()
        } else {
            vec![]
        }
    }

    /// select the slot whose cumulative probability first exceeds the
    /// uniform deviate. a deviate at or beyond the cumulative mass fails
    /// rather than returning an out-of-range slot.
    ///
    /// the walk compares in weight space: the running weight sum reproduces
    /// `total_weight` exactly at the last slot, so `deviate = 1.0` cannot
    /// round past the end of the distribution.
    pub fn choose(&self, deviate: f64) -> Result<usize, ChoiceError> {
        if self.is_empty() || self.total_weight <= 0.0 {
            return Err(ChoiceError::NoAlternatives);
        }
        let threshold = deviate * self.total_weight;
        let mut cumulative = 0.0;
        for (slot, weight) in self.slots.iter().zip(&self.weights) {
            cumulative += weight;
            if threshold < cumulative {
                return Ok(*slot);
            }
        }
        Err(ChoiceError::NoAlternatives)
    }
}

/// logsum over the live alternatives of a best-path result.
pub fn logsum(best: &BestPaths) -> f64 {
    PathLogit::new(best).logsum()
}

/// draw one retained path given a uniform random deviate in [0, 1).
pub fn choose(best: &BestPaths, deviate: f64) -> Result<usize, ChoiceError> {
    PathLogit::new(best).choose(deviate)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::path::TransitPath;
    use crate::model::AccessEgress;
    use rand::Rng;

    fn best_with_utilities(utilities: &[f64], alternatives: usize) -> BestPaths {
        let paths = utilities
            .iter()
            .enumerate()
            .map(|(i, u)| TransitPath {
                board: 10 + i,
                alight: 20,
                skim_set: i,
                combo: AccessEgress::WalkWalk,
                access: *u,
                line_haul: 0.0,
                egress: 0.0,
            })
            .collect::<Vec<_>>();
        BestPaths::trim(paths, alternatives)
    }

    #[test]
    fn test_logsum_matches_closed_form() {
        let best = best_with_utilities(&[-1.0, -2.0], 4);
        let expected = ((-1.0f64).exp() + (-2.0f64).exp()).ln();
        assert!((logsum(&best) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_logsum_of_empty_set_is_negative_infinity() {
        let best = BestPaths::empty(3);
        assert_eq!(logsum(&best), f64::NEG_INFINITY);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let best = best_with_utilities(&[-0.5, -1.5, -3.0], 5);
        let probabilities = PathLogit::new(&best).probabilities();
        assert_eq!(probabilities.len(), 3);
        let total: f64 = probabilities.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
        // higher utility, higher probability
        assert!(probabilities.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_zero_deviate_selects_first_slot() {
        let best = best_with_utilities(&[-1.0, -2.0, -4.0], 4);
        assert_eq!(choose(&best, 0.0), Ok(0));
    }

    #[test]
    fn test_deviate_walks_cumulative_distribution() {
        let best = best_with_utilities(&[-1.0, -2.0], 4);
        let p0 = PathLogit::new(&best).probabilities()[0];
        assert_eq!(choose(&best, p0 - 1e-9), Ok(0));
        assert_eq!(choose(&best, p0 + 1e-9), Ok(1));
    }

    #[test]
    fn test_deviate_at_or_beyond_mass_fails() {
        let best = best_with_utilities(&[-1.0, -2.0], 4);
        assert_eq!(choose(&best, 1.0), Err(ChoiceError::NoAlternatives));
        assert_eq!(choose(&best, 7.5), Err(ChoiceError::NoAlternatives));
    }

    #[test]
    fn test_empty_set_fails() {
        let best = BestPaths::empty(3);
        assert_eq!(choose(&best, 0.0), Err(ChoiceError::NoAlternatives));
    }

    #[test]
    fn test_sampled_deviates_stay_in_range() {
        let best = best_with_utilities(&[-1.0, -2.5, -0.25], 3);
        let model = PathLogit::new(&best);
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let deviate: f64 = rng.random_range(0.0..1.0);
            let slot = model.choose(deviate).expect("deviate in [0,1) must choose");
            assert!(slot < 3);
        }
    }
}
