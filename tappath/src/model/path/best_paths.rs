use crate::model::path::{TransitPath, UNAVAILABLE};
use crate::model::Tap;
use itertools::Itertools;
use std::cmp::Ordering;

/// one retained alternative, read back out of a [`BestPaths`] slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathAlternative {
    pub board: Tap,
    pub alight: Tap,
    pub skim_set: usize,
    pub utility: f64,
}

/// the best-N result of one search call: four parallel arrays ordered by
/// descending total utility. unfilled slots hold negative infinity and
/// zero-valued taps; [`BestPaths::alternative`] hides them behind an
/// `Option`. each call returns a fresh value, so results carry no state
/// beyond the search that produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct BestPaths {
    utilities: Vec<f64>,
    boards: Vec<Tap>,
    alights: Vec<Tap>,
    skim_sets: Vec<usize>,
}

impl BestPaths {
    /// an all-sentinel result with `alternatives` empty slots, the shape
    /// returned when a zone pair has no transit connectivity.
    pub fn empty(alternatives: usize) -> BestPaths {
        BestPaths {
            utilities: vec![f64::NEG_INFINITY; alternatives],
            boards: vec![0; alternatives],
            alights: vec![0; alternatives],
            skim_sets: vec![0; alternatives],
        }
    }

    /// reduce a candidate list to its best `alternatives` paths by descending
    /// total utility. the sort is stable, so candidates with equal utility
    /// keep their enumeration order. candidates at or below [`UNAVAILABLE`]
    /// never occupy a slot.
    pub fn trim(paths: Vec<TransitPath>, alternatives: usize) -> BestPaths {
        let ranked = paths.into_iter().sorted_by(|a, b| {
            b.total()
                .partial_cmp(&a.total())
                .unwrap_or(Ordering::Equal)
        });

        let mut best = BestPaths::empty(alternatives);
        let mut count = 0;
        for path in ranked {
            if path.total() <= UNAVAILABLE {
                continue;
            }
            best.utilities[count] = path.total();
            best.boards[count] = path.board;
            best.alights[count] = path.alight;
            best.skim_sets[count] = path.skim_set;
            count += 1;
            if count == alternatives {
                break;
            }
        }
        best
    }

    /// number of slots, live or not.
    pub fn alternatives(&self) -> usize {
        self.utilities.len()
    }

    /// number of live (non-sentinel) alternatives.
    pub fn len(&self) -> usize {
        self.utilities.iter().filter(|u| **u > UNAVAILABLE).count()
    }

    /// true when no alternative is available.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// the slot utilities in rank order, sentinel slots included.
    pub fn utilities(&self) -> &[f64] {
        &self.utilities
    }

    /// the alternative at a slot, or `None` for a sentinel slot.
    pub fn alternative(&self, slot: usize) -> Option<PathAlternative> {
        let utility = *self.utilities.get(slot)?;
        if utility <= UNAVAILABLE {
            return None;
        }
        Some(PathAlternative {
            board: self.boards[slot],
            alight: self.alights[slot],
            skim_set: self.skim_sets[slot],
            utility,
        })
    }

    /// iterate over (slot, alternative) for live slots only.
    pub fn live(&self) -> impl Iterator<Item = (usize, PathAlternative)> + '_ {
        (0..self.alternatives()).filter_map(|slot| Some((slot, self.alternative(slot)?)))
    }

    /// slot index of the highest-utility live alternative, if any.
    pub fn best_alternative(&self) -> Option<usize> {
        self.live().next().map(|(slot, _)| slot)
    }

    /// overwrite one slot's utility in place, keeping its taps and skim set.
    /// used when retained paths are re-priced with person-specific context.
    pub(crate) fn set_utility(&mut self, slot: usize, utility: f64) {
        self.utilities[slot] = utility;
    }

    /// line-oriented report of every slot: alternative index, utility,
    /// boarding tap, alighting tap, skim set.
    pub fn log_alternatives(&self, header: &str) {
        log::info!("{header}");
        log::info!(
            "{:>11} {:>12} {:>8} {:>8} {:>6}",
            "alternative",
            "utility",
            "board",
            "alight",
            "set"
        );
        for slot in 0..self.alternatives() {
            log::info!(
                "{:>11} {:>12.4} {:>8} {:>8} {:>6}",
                slot,
                self.utilities[slot],
                self.boards[slot],
                self.alights[slot],
                self.skim_sets[slot]
            );
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::AccessEgress;

    fn path(board: Tap, alight: Tap, skim_set: usize, total: f64) -> TransitPath {
        TransitPath {
            board,
            alight,
            skim_set,
            combo: AccessEgress::WalkWalk,
            access: total,
            line_haul: 0.0,
            egress: 0.0,
        }
    }

    #[test]
    fn test_trim_orders_descending_and_bounds_length() {
        let candidates = vec![
            path(10, 20, 0, -5.0),
            path(11, 20, 0, -2.0),
            path(10, 21, 1, -9.0),
            path(11, 21, 1, -1.0),
        ];
        let best = BestPaths::trim(candidates, 3);
        assert_eq!(best.len(), 3);
        assert_eq!(best.utilities()[..3], [-1.0, -2.0, -5.0]);
        let top = best.alternative(0).expect("slot 0 should be live");
        assert_eq!((top.board, top.alight, top.skim_set), (11, 21, 1));
    }

    #[test]
    fn test_trim_excludes_unavailable_candidates() {
        let candidates = vec![
            path(10, 20, 0, UNAVAILABLE),
            path(11, 20, 0, UNAVAILABLE - 50.0),
            path(12, 20, 0, -3.0),
        ];
        let best = BestPaths::trim(candidates, 4);
        assert_eq!(best.len(), 1);
        assert!(best.utilities()[1..].iter().all(|u| *u == f64::NEG_INFINITY));
        assert_eq!(best.alternative(1), None);
        assert!(best.utilities().iter().all(|u| *u > UNAVAILABLE || *u == f64::NEG_INFINITY));
    }

    #[test]
    fn test_trim_breaks_ties_by_input_order() {
        let candidates = vec![
            path(10, 20, 0, -4.0),
            path(11, 21, 0, -4.0),
            path(12, 22, 0, -4.0),
        ];
        let best = BestPaths::trim(candidates, 2);
        assert_eq!(best.alternative(0).map(|a| a.board), Some(10));
        assert_eq!(best.alternative(1).map(|a| a.board), Some(11));
    }

    #[test]
    fn test_empty_result_is_all_sentinel() {
        let best = BestPaths::empty(4);
        assert!(best.is_empty());
        assert_eq!(best.best_alternative(), None);
        assert!(best.utilities().iter().all(|u| *u == f64::NEG_INFINITY));
        assert!((0..4).all(|slot| best.alternative(slot).is_none()));
    }

    #[test]
    fn test_best_alternative_is_first_live_slot() {
        let best = BestPaths::trim(vec![path(10, 20, 0, -8.0), path(11, 20, 1, -6.5)], 5);
        assert_eq!(best.best_alternative(), Some(0));
        assert_eq!(best.alternative(0).map(|a| a.board), Some(11));
    }
}
