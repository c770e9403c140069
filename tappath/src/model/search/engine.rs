use crate::model::cache::{AccessKey, EgressKey, LineHaulKey, UtilityCache};
use crate::model::network::TransitNetwork;
use crate::model::path::{BestPaths, TransitPath};
use crate::model::search::{SearchConfig, SearchError, ZonePairTracer};
use crate::model::utility::{IndexPair, PathAttributes, PiecewiseUtilities};
use crate::model::{AccessEgress, DriveMode, LegMode, Mgra, Tap, Taz, TimePeriod};
use std::sync::Arc;
use uom::si::length::mile;
use uom::si::time::minute;

/// per-worker transit path search engine.
///
/// each worker thread owns one engine (and with it the mutable rider-context
/// scratch state); all engines share one [`UtilityCache`] and one
/// [`TransitNetwork`]. every search returns a fresh [`BestPaths`] value, so
/// calls carry no ordering dependencies between them.
pub struct PathSearchEngine {
    network: Arc<dyn TransitNetwork>,
    cache: Arc<UtilityCache>,
    utilities: Arc<PiecewiseUtilities>,
    config: SearchConfig,
    tracer: ZonePairTracer,
    rider: PathAttributes,
}

impl PathSearchEngine {
    pub fn new(
        network: Arc<dyn TransitNetwork>,
        cache: Arc<UtilityCache>,
        utilities: Arc<PiecewiseUtilities>,
        config: SearchConfig,
    ) -> Result<PathSearchEngine, SearchError> {
        if config.skim_sets == 0 {
            return Err(SearchError::InvalidConfig(
                "skim_sets must be at least 1".to_string(),
            ));
        }
        if config.alternatives == 0 {
            return Err(SearchError::InvalidConfig(
                "alternatives must be at least 1".to_string(),
            ));
        }
        let tracer = ZonePairTracer::new(&config.trace);
        log::debug!(
            "built PathSearchEngine with {} skim sets, {} alternatives",
            config.skim_sets,
            config.alternatives
        );
        Ok(PathSearchEngine {
            network,
            cache,
            utilities,
            config,
            tracer,
            rider: PathAttributes::default(),
        })
    }

    /// replace the rider/tour context used when populating leg attributes.
    /// affects only this worker's engine.
    pub fn set_rider_context(&mut self, rider: PathAttributes) {
        self.rider = rider;
    }

    /// find the best N paths for one mode combination, zone pair and
    /// departure period. an all-sentinel result means no transit option
    /// exists for this triple; callers treat that as "mode unavailable",
    /// not as a failure.
    pub fn find_best(
        &self,
        combo: AccessEgress,
        period: TimePeriod,
        orig: Mgra,
        dest: Mgra,
        debug: bool,
    ) -> Result<BestPaths, SearchError> {
        let traced = debug || self.trace_matches(orig, dest);
        let candidates = self.enumerate(combo, period, orig, dest, traced)?;
        if candidates.is_empty() {
            log::debug!(
                "no {combo} candidates between mgra {orig} and mgra {dest} in period {period}"
            );
            return Ok(BestPaths::empty(self.config.alternatives));
        }
        let best = BestPaths::trim(candidates, self.config.alternatives);
        if traced {
            best.log_alternatives(&format!(
                "best {combo} paths, mgra {orig} -> mgra {dest}, period {period}"
            ));
        }
        Ok(best)
    }

    /// total utility of one specific path, computed from fresh evaluator
    /// calls with the engine's current rider context, bypassing the cache.
    pub fn path_utility(
        &self,
        combo: AccessEgress,
        period: TimePeriod,
        orig: Mgra,
        dest: Mgra,
        board: Tap,
        alight: Tap,
        skim_set: usize,
    ) -> Result<f64, SearchError> {
        let access = match combo.access_mode() {
            LegMode::Walk => self.walk_access_utility(orig, board, false)?,
            LegMode::Drive => {
                let otaz = self.taz_of(orig)?;
                self.drive_access_utility(otaz, board, false)?
            }
        };
        let egress = match combo.egress_mode() {
            LegMode::Walk => self.walk_egress_utility(alight, dest, false)?,
            LegMode::Drive => {
                let dtaz = self.taz_of(dest)?;
                self.drive_egress_utility(alight, dtaz, false)?
            }
        };
        let line_haul = self.line_haul_utility(period, board, alight, skim_set, false)?;
        Ok(access + line_haul + egress)
    }

    /// re-price every retained alternative with the engine's current rider
    /// context. taps and skim sets keep their slots; only utilities change,
    /// so downstream choice indexes stay valid.
    pub fn personalize(
        &self,
        combo: AccessEgress,
        period: TimePeriod,
        orig: Mgra,
        dest: Mgra,
        best: &BestPaths,
        debug: bool,
    ) -> Result<BestPaths, SearchError> {
        let mut result = best.clone();
        for (slot, alt) in best.live() {
            let utility =
                self.path_utility(combo, period, orig, dest, alt.board, alt.alight, alt.skim_set)?;
            result.set_utility(slot, utility);
        }
        if debug || self.trace_matches(orig, dest) {
            result.log_alternatives(&format!(
                "person-specific {combo} paths, mgra {orig} -> mgra {dest}, period {period}"
            ));
        }
        Ok(result)
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn trace_matches(&self, orig: Mgra, dest: Mgra) -> bool {
        match (self.network.taz_of(orig), self.network.taz_of(dest)) {
            (Some(otaz), Some(dtaz)) => self.tracer.matches(otaz, dtaz),
            _ => false,
        }
    }

    /// build one candidate per admissible (board, alight, skim set) triple.
    /// iteration order is boarding taps x alighting taps x skim sets, which
    /// fixes top-N tie-breaking for identical inputs.
    fn enumerate(
        &self,
        combo: AccessEgress,
        period: TimePeriod,
        orig: Mgra,
        dest: Mgra,
        traced: bool,
    ) -> Result<Vec<TransitPath>, SearchError> {
        // resolve the zone each leg is priced from. a missing analysis-zone
        // mapping on a drive side means no drive connectivity at all.
        let access_zone = match combo.access_mode() {
            LegMode::Walk => orig,
            LegMode::Drive => match self.network.taz_of(orig) {
                Some(taz) => taz,
                None => return Ok(vec![]),
            },
        };
        let egress_zone = match combo.egress_mode() {
            LegMode::Walk => dest,
            LegMode::Drive => match self.network.taz_of(dest) {
                Some(taz) => taz,
                None => return Ok(vec![]),
            },
        };

        let boarding = self.leg_taps(combo.access_mode(), orig, access_zone)?;
        let alighting = self.leg_taps(combo.egress_mode(), dest, egress_zone)?;
        if boarding.is_empty() || alighting.is_empty() {
            return Ok(vec![]);
        }

        let mut paths =
            Vec::with_capacity(boarding.len() * alighting.len() * self.config.skim_sets);
        for &board in &boarding {
            let access_key = AccessKey {
                mode: combo.access_mode(),
                zone: access_zone,
                tap: board,
            };
            let access = self.cache.access_or_compute(access_key, || {
                match combo.access_mode() {
                    LegMode::Walk => self.walk_access_utility(orig, board, traced),
                    LegMode::Drive => self.drive_access_utility(access_zone, board, traced),
                }
            })?;

            for &alight in &alighting {
                let egress_key = EgressKey {
                    mode: combo.egress_mode(),
                    tap: alight,
                    zone: egress_zone,
                };
                let egress = self.cache.egress_or_compute(egress_key, || {
                    match combo.egress_mode() {
                        LegMode::Walk => self.walk_egress_utility(alight, dest, traced),
                        LegMode::Drive => self.drive_egress_utility(alight, egress_zone, traced),
                    }
                })?;

                let line_haul_key = LineHaulKey {
                    combo,
                    period,
                    board,
                    alight,
                };
                let line_haul = self.cache.line_haul_or_compute(line_haul_key, || {
                    (0..self.config.skim_sets)
                        .map(|set| self.line_haul_utility(period, board, alight, set, traced))
                        .collect()
                })?;

                for (skim_set, utility) in line_haul.iter().enumerate() {
                    paths.push(TransitPath {
                        board,
                        alight,
                        skim_set,
                        combo,
                        access,
                        line_haul: *utility,
                        egress,
                    });
                }
            }
        }
        Ok(paths)
    }

    /// the admissible tap set for one leg. walk legs take the micro-zone's
    /// walk taps as-is; drive legs take the analysis zone's drive taps,
    /// capacity-filtered for park-and-ride under capacity constraints.
    fn leg_taps(&self, mode: LegMode, mgra: Mgra, zone: usize) -> Result<Vec<Tap>, SearchError> {
        match mode {
            LegMode::Walk => Ok(self.network.walk_taps(mgra).to_vec()),
            LegMode::Drive => {
                let taps = self.network.drive_taps(zone, self.config.drive_mode);
                self.capacity_filtered(taps)
            }
        }
    }

    fn capacity_filtered(&self, taps: &[Tap]) -> Result<Vec<Tap>, SearchError> {
        if !self.config.capacity_constrained || self.config.drive_mode == DriveMode::KissAndRide {
            return Ok(taps.to_vec());
        }
        let mut eligible = Vec::with_capacity(taps.len());
        for &tap in taps {
            let parking = self
                .network
                .parking(tap)
                .ok_or(SearchError::MissingParkingInfo(tap))?;
            if self.network.lot_use(parking.lot) < parking.capacity {
                eligible.push(tap);
            }
        }
        Ok(eligible)
    }

    fn walk_access_utility(
        &self,
        mgra: Mgra,
        tap: Tap,
        traced: bool,
    ) -> Result<f64, SearchError> {
        let time = self
            .network
            .walk_time(mgra, tap)
            .ok_or(SearchError::MissingWalkTime(mgra, tap))?;
        let mut attrs = self.rider.clone();
        attrs.access_walk_time = time.get::<minute>();
        let utility = PiecewiseUtilities::scalar(
            self.utilities.walk_access.as_ref(),
            IndexPair::new(mgra, tap),
            &attrs,
            "walk access",
        )?;
        if traced {
            log::debug!("walk access mgra {mgra} -> tap {tap}: utility {utility:.4}");
        }
        Ok(utility)
    }

    fn drive_access_utility(&self, taz: Taz, tap: Tap, traced: bool) -> Result<f64, SearchError> {
        let mode = self.config.drive_mode;
        let time = self
            .network
            .drive_time(taz, tap, mode)
            .ok_or(SearchError::MissingDriveTime(taz, tap))?;
        let dist = self
            .network
            .drive_distance(taz, tap, mode)
            .ok_or(SearchError::MissingDriveDistance(taz, tap))?;
        let mut attrs = self.rider.clone();
        attrs.drive_time_to_tap = time.get::<minute>();
        attrs.drive_dist_to_tap = dist.get::<mile>();
        let utility = PiecewiseUtilities::scalar(
            self.utilities.drive_access.as_ref(),
            IndexPair::new(taz, tap),
            &attrs,
            "drive access",
        )?;
        if traced {
            log::debug!("drive access taz {taz} -> tap {tap}: utility {utility:.4}");
        }
        Ok(utility)
    }

    fn walk_egress_utility(
        &self,
        tap: Tap,
        mgra: Mgra,
        traced: bool,
    ) -> Result<f64, SearchError> {
        let time = self
            .network
            .walk_time(mgra, tap)
            .ok_or(SearchError::MissingWalkTime(mgra, tap))?;
        let mut attrs = self.rider.clone();
        attrs.egress_walk_time = time.get::<minute>();
        let utility = PiecewiseUtilities::scalar(
            self.utilities.walk_egress.as_ref(),
            IndexPair::new(tap, mgra),
            &attrs,
            "walk egress",
        )?;
        if traced {
            log::debug!("walk egress tap {tap} -> mgra {mgra}: utility {utility:.4}");
        }
        Ok(utility)
    }

    fn drive_egress_utility(&self, tap: Tap, taz: Taz, traced: bool) -> Result<f64, SearchError> {
        let mode = self.config.drive_mode;
        let time = self
            .network
            .drive_time(taz, tap, mode)
            .ok_or(SearchError::MissingDriveTime(taz, tap))?;
        let dist = self
            .network
            .drive_distance(taz, tap, mode)
            .ok_or(SearchError::MissingDriveDistance(taz, tap))?;
        let mut attrs = self.rider.clone();
        attrs.drive_time_to_tap = time.get::<minute>();
        attrs.drive_dist_to_tap = dist.get::<mile>();
        let utility = PiecewiseUtilities::scalar(
            self.utilities.drive_egress.as_ref(),
            IndexPair::new(tap, taz),
            &attrs,
            "drive egress",
        )?;
        if traced {
            log::debug!("drive egress tap {tap} -> taz {taz}: utility {utility:.4}");
        }
        Ok(utility)
    }

    fn line_haul_utility(
        &self,
        period: TimePeriod,
        board: Tap,
        alight: Tap,
        skim_set: usize,
        traced: bool,
    ) -> Result<f64, SearchError> {
        let mut attrs = self.rider.clone();
        attrs.period = period;
        attrs.skim_set = skim_set;
        let utility = PiecewiseUtilities::scalar(
            self.utilities.line_haul.as_ref(),
            IndexPair::new(board, alight),
            &attrs,
            "line haul",
        )?;
        if traced {
            log::debug!(
                "line haul tap {board} -> tap {alight}, period {period}, set {skim_set}: utility {utility:.4}"
            );
        }
        Ok(utility)
    }

    fn taz_of(&self, mgra: Mgra) -> Result<Taz, SearchError> {
        self.network
            .taz_of(mgra)
            .ok_or(SearchError::MissingZoneMapping(mgra))
    }
}
