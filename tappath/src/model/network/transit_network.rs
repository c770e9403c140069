use crate::model::network::TapParking;
use crate::model::{DriveMode, LotId, Mgra, Tap, Taz};
use uom::si::f64::{Length, Time};

/// zone/access-point connectivity consumed by the path search engine.
///
/// implementations are read-only after construction apart from the lot-use
/// counters, and are shared by every worker thread via `Arc`. tap sets must
/// iterate in a stable order so that candidate enumeration (and therefore
/// top-N tie-breaking) is reproducible.
pub trait TransitNetwork: Send + Sync {
    /// taps reachable on foot from a micro-zone. empty when none.
    fn walk_taps(&self, mgra: Mgra) -> &[Tap];

    /// taps reachable by car from an analysis zone, NOT capacity-filtered;
    /// the engine applies the parking capacity rule.
    fn drive_taps(&self, taz: Taz, mode: DriveMode) -> &[Tap];

    /// the analysis zone containing a micro-zone.
    fn taz_of(&self, mgra: Mgra) -> Option<Taz>;

    /// walk time between a micro-zone and a tap it is connected to.
    fn walk_time(&self, mgra: Mgra, tap: Tap) -> Option<Time>;

    /// drive time between an analysis zone and a tap it is connected to.
    fn drive_time(&self, taz: Taz, tap: Tap, mode: DriveMode) -> Option<Time>;

    /// drive distance between an analysis zone and a tap it is connected to.
    fn drive_distance(&self, taz: Taz, tap: Tap, mode: DriveMode) -> Option<Length>;

    /// parking lot record for a drive-accessible tap, if one exists.
    fn parking(&self, tap: Tap) -> Option<&TapParking>;

    /// vehicles currently assigned to a lot by the enclosing simulation.
    fn lot_use(&self, lot: LotId) -> u32;

    /// record one additional vehicle arrival at a lot.
    fn record_lot_use(&self, lot: LotId);

    /// zero every lot counter. called between simulation iterations.
    fn reset_lot_use(&self);
}
