use crate::model::network::{LotUsage, TapParking, TransitNetwork};
use crate::model::{DriveMode, LotId, Mgra, Tap, Taz};
use std::collections::HashMap;
use uom::si::f64::{Length, Time};
use uom::si::length::mile;
use uom::si::time::minute;

const NO_TAPS: &[Tap] = &[];

/// in-memory connectivity provider built from per-zone tap lists.
///
/// tap lists keep insertion order, which fixes the engine's enumeration
/// order. connector times/distances are stored per (zone, tap) pair; a tap
/// listed for a zone without a matching connector record is a data
/// inconsistency the engine treats as fatal.
#[derive(Debug, Default)]
pub struct TabularTransitNetwork {
    taz_by_mgra: HashMap<Mgra, Taz>,
    walk_taps: HashMap<Mgra, Vec<Tap>>,
    walk_times: HashMap<(Mgra, Tap), Time>,
    drive_taps: HashMap<(Taz, DriveMode), Vec<Tap>>,
    drive_times: HashMap<(Taz, Tap, DriveMode), Time>,
    drive_distances: HashMap<(Taz, Tap, DriveMode), Length>,
    parking: HashMap<Tap, TapParking>,
    usage: LotUsage,
}

impl TabularTransitNetwork {
    pub fn new() -> TabularTransitNetwork {
        Default::default()
    }

    /// register a micro-zone inside its containing analysis zone.
    pub fn with_mgra(mut self, mgra: Mgra, taz: Taz) -> TabularTransitNetwork {
        self.taz_by_mgra.insert(mgra, taz);
        self
    }

    /// connect a micro-zone to a tap on foot.
    pub fn with_walk_connector(
        mut self,
        mgra: Mgra,
        tap: Tap,
        walk_minutes: f64,
    ) -> TabularTransitNetwork {
        self.walk_taps.entry(mgra).or_default().push(tap);
        self.walk_times
            .insert((mgra, tap), Time::new::<minute>(walk_minutes));
        self
    }

    /// connect an analysis zone to a tap by car.
    pub fn with_drive_connector(
        mut self,
        taz: Taz,
        tap: Tap,
        mode: DriveMode,
        drive_minutes: f64,
        drive_miles: f64,
    ) -> TabularTransitNetwork {
        self.drive_taps.entry((taz, mode)).or_default().push(tap);
        self.drive_times
            .insert((taz, tap, mode), Time::new::<minute>(drive_minutes));
        self.drive_distances
            .insert((taz, tap, mode), Length::new::<mile>(drive_miles));
        self
    }

    /// attach a parking lot record to a drive-accessible tap.
    pub fn with_parking(mut self, tap: Tap, lot: LotId, capacity: u32) -> TabularTransitNetwork {
        self.parking.insert(tap, TapParking { lot, capacity });
        self
    }
}

impl TransitNetwork for TabularTransitNetwork {
    fn walk_taps(&self, mgra: Mgra) -> &[Tap] {
        self.walk_taps
            .get(&mgra)
            .map(|taps| taps.as_slice())
            .unwrap_or(NO_TAPS)
    }

    fn drive_taps(&self, taz: Taz, mode: DriveMode) -> &[Tap] {
        self.drive_taps
            .get(&(taz, mode))
            .map(|taps| taps.as_slice())
            .unwrap_or(NO_TAPS)
    }

    fn taz_of(&self, mgra: Mgra) -> Option<Taz> {
        self.taz_by_mgra.get(&mgra).copied()
    }

    fn walk_time(&self, mgra: Mgra, tap: Tap) -> Option<Time> {
        self.walk_times.get(&(mgra, tap)).copied()
    }

    fn drive_time(&self, taz: Taz, tap: Tap, mode: DriveMode) -> Option<Time> {
        self.drive_times.get(&(taz, tap, mode)).copied()
    }

    fn drive_distance(&self, taz: Taz, tap: Tap, mode: DriveMode) -> Option<Length> {
        self.drive_distances.get(&(taz, tap, mode)).copied()
    }

    fn parking(&self, tap: Tap) -> Option<&TapParking> {
        self.parking.get(&tap)
    }

    fn lot_use(&self, lot: LotId) -> u32 {
        self.usage.get(lot)
    }

    fn record_lot_use(&self, lot: LotId) {
        self.usage.record(lot);
    }

    fn reset_lot_use(&self) {
        self.usage.reset();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_tap_lists_keep_insertion_order() {
        let network = TabularTransitNetwork::new()
            .with_mgra(1, 100)
            .with_walk_connector(1, 11, 4.0)
            .with_walk_connector(1, 10, 6.0)
            .with_walk_connector(1, 12, 2.0);
        assert_eq!(network.walk_taps(1), &[11, 10, 12]);
    }

    #[test]
    fn test_missing_zone_has_no_taps() {
        let network = TabularTransitNetwork::new();
        assert!(network.walk_taps(99).is_empty());
        assert!(network
            .drive_taps(99, DriveMode::ParkAndRide)
            .is_empty());
        assert_eq!(network.taz_of(99), None);
    }

    #[test]
    fn test_connector_units() {
        let network = TabularTransitNetwork::new().with_drive_connector(
            100,
            10,
            DriveMode::ParkAndRide,
            12.0,
            5.5,
        );
        let time = network
            .drive_time(100, 10, DriveMode::ParkAndRide)
            .expect("connector time missing");
        let dist = network
            .drive_distance(100, 10, DriveMode::ParkAndRide)
            .expect("connector distance missing");
        assert!((time.get::<minute>() - 12.0).abs() < 1e-9);
        assert!((dist.get::<mile>() - 5.5).abs() < 1e-9);
        assert_eq!(network.drive_time(100, 10, DriveMode::KissAndRide), None);
    }
}
