use crate::model::{AccessEgress, LegMode, Tap, TimePeriod};
use dashmap::DashMap;

/// key for a memoized access-leg utility. `zone` is the origin micro-zone
/// for walk access and the origin analysis zone for drive access; the leg
/// mode keeps the two id spaces from colliding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AccessKey {
    pub mode: LegMode,
    pub zone: usize,
    pub tap: Tap,
}

/// key for a memoized egress-leg utility. `zone` is the destination
/// micro-zone for walk egress and the destination analysis zone for drive
/// egress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EgressKey {
    pub mode: LegMode,
    pub tap: Tap,
    pub zone: usize,
}

/// key for a memoized line-haul utility vector (one element per skim set).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineHaulKey {
    pub combo: AccessEgress,
    pub period: TimePeriod,
    pub board: Tap,
    pub alight: Tap,
}

/// process-wide memoization of piecewise path utilities, shared by every
/// worker's search engine for the duration of a simulation run.
///
/// lookups follow an optimistic, lock-free discipline: read, compute outside
/// the map on a miss, then insert-if-absent. concurrent workers may race to
/// compute the same key; the first insert wins and every racer returns the
/// resident value. this is tolerated as wasted work rather than prevented,
/// since evaluators are pure and recomputation is idempotent.
#[derive(Debug, Default)]
pub struct UtilityCache {
    access: DashMap<AccessKey, f64>,
    egress: DashMap<EgressKey, f64>,
    line_haul: DashMap<LineHaulKey, Vec<f64>>,
}

impl UtilityCache {
    pub fn new() -> UtilityCache {
        Default::default()
    }

    /// return the memoized access utility for `key`, computing and storing it
    /// on a miss. a lost insert race returns the winner's (identical) value.
    pub fn access_or_compute<E>(
        &self,
        key: AccessKey,
        compute: impl FnOnce() -> Result<f64, E>,
    ) -> Result<f64, E> {
        if let Some(hit) = self.access.get(&key) {
            return Ok(*hit);
        }
        let value = compute()?;
        Ok(*self.access.entry(key).or_insert(value).value())
    }

    /// return the memoized egress utility for `key`, computing and storing it
    /// on a miss.
    pub fn egress_or_compute<E>(
        &self,
        key: EgressKey,
        compute: impl FnOnce() -> Result<f64, E>,
    ) -> Result<f64, E> {
        if let Some(hit) = self.egress.get(&key) {
            return Ok(*hit);
        }
        let value = compute()?;
        Ok(*self.egress.entry(key).or_insert(value).value())
    }

    /// return the memoized line-haul utility vector for `key`, computing and
    /// storing it on a miss. the whole vector is inserted atomically so
    /// readers never observe a partially-filled skim set.
    pub fn line_haul_or_compute<E>(
        &self,
        key: LineHaulKey,
        compute: impl FnOnce() -> Result<Vec<f64>, E>,
    ) -> Result<Vec<f64>, E> {
        if let Some(hit) = self.line_haul.get(&key) {
            return Ok(hit.clone());
        }
        let values = compute()?;
        Ok(self.line_haul.entry(key).or_insert(values).value().clone())
    }

    /// clear all three maps. callers must guarantee quiescence: no concurrent
    /// search may be in flight. used between simulation iterations that
    /// change shadow prices or skim data.
    pub fn reset(&self) {
        self.access.clear();
        self.egress.clear();
        self.line_haul.clear();
    }

    /// entry counts (access, egress, line-haul), for diagnostics.
    pub fn entry_counts(&self) -> (usize, usize, usize) {
        (self.access.len(), self.egress.len(), self.line_haul.len())
    }
}
