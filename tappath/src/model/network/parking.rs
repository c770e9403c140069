use crate::model::LotId;
use dashmap::DashMap;

/// parking/staging lot attributes for a drive-accessible tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TapParking {
    pub lot: LotId,
    /// total spaces. a lot is exhausted once recorded use reaches this value.
    pub capacity: u32,
}

/// concurrent per-lot arrival counters, shared across worker threads.
///
/// the lot assignment algorithm that decides who parks where lives outside
/// this crate; only the bookkeeping the capacity-eligibility rule reads is
/// kept here.
#[derive(Debug, Default)]
pub struct LotUsage {
    counts: DashMap<LotId, u32>,
}

impl LotUsage {
    pub fn new() -> LotUsage {
        LotUsage {
            counts: DashMap::new(),
        }
    }

    pub fn get(&self, lot: LotId) -> u32 {
        self.counts.get(&lot).map(|c| *c).unwrap_or(0)
    }

    pub fn record(&self, lot: LotId) {
        *self.counts.entry(lot).or_insert(0) += 1;
    }

    pub fn reset(&self) {
        self.counts.clear();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_record_and_reset() {
        let usage = LotUsage::new();
        assert_eq!(usage.get(3), 0);
        usage.record(3);
        usage.record(3);
        usage.record(7);
        assert_eq!(usage.get(3), 2);
        assert_eq!(usage.get(7), 1);
        usage.reset();
        assert_eq!(usage.get(3), 0);
        assert_eq!(usage.get(7), 0);
    }
}
