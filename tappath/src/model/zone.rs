use serde::{Deserialize, Serialize};

/// micro-zone identifier, the finest spatial unit for trip ends. 0 is "no mapping".
pub type Mgra = usize;
/// analysis zone identifier, a coarser aggregation containing micro-zones.
pub type Taz = usize;
/// transit access point (boarding/alighting location) identifier.
pub type Tap = usize;
/// parking/staging lot identifier associated with a drive-accessible tap.
pub type LotId = usize;

/// broad departure time windows used to key line-haul utilities.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimePeriod {
    Ea,
    Am,
    Md,
    Pm,
    Ev,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 5] = [
        TimePeriod::Ea,
        TimePeriod::Am,
        TimePeriod::Md,
        TimePeriod::Pm,
        TimePeriod::Ev,
    ];

    pub fn index(&self) -> usize {
        match self {
            TimePeriod::Ea => 0,
            TimePeriod::Am => 1,
            TimePeriod::Md => 2,
            TimePeriod::Pm => 3,
            TimePeriod::Ev => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimePeriod::Ea => "EA",
            TimePeriod::Am => "AM",
            TimePeriod::Md => "MD",
            TimePeriod::Pm => "PM",
            TimePeriod::Ev => "EV",
        }
    }
}

impl std::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// whether a single trip leg is covered on foot or by car.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LegMode {
    Walk,
    Drive,
}

/// the three supported access/egress mode combinations for a transit trip.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccessEgress {
    WalkWalk,
    WalkDrive,
    DriveWalk,
}

impl AccessEgress {
    pub const ALL: [AccessEgress; 3] = [
        AccessEgress::WalkWalk,
        AccessEgress::WalkDrive,
        AccessEgress::DriveWalk,
    ];

    pub fn access_mode(&self) -> LegMode {
        match self {
            AccessEgress::WalkWalk | AccessEgress::WalkDrive => LegMode::Walk,
            AccessEgress::DriveWalk => LegMode::Drive,
        }
    }

    pub fn egress_mode(&self) -> LegMode {
        match self {
            AccessEgress::WalkWalk | AccessEgress::DriveWalk => LegMode::Walk,
            AccessEgress::WalkDrive => LegMode::Drive,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccessEgress::WalkWalk => "walk-transit-walk",
            AccessEgress::WalkDrive => "walk-transit-drive",
            AccessEgress::DriveWalk => "drive-transit-walk",
        }
    }
}

impl std::fmt::Display for AccessEgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// how the drive leg of a drive-access or drive-egress path is staged.
/// parking capacity constraints apply to park-and-ride only; kiss-and-ride
/// drops the rider off and is always eligible.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum DriveMode {
    #[default]
    ParkAndRide,
    KissAndRide,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_access_egress_leg_modes() {
        assert_eq!(AccessEgress::WalkWalk.access_mode(), LegMode::Walk);
        assert_eq!(AccessEgress::WalkWalk.egress_mode(), LegMode::Walk);
        assert_eq!(AccessEgress::WalkDrive.egress_mode(), LegMode::Drive);
        assert_eq!(AccessEgress::DriveWalk.access_mode(), LegMode::Drive);
    }

    #[test]
    fn test_period_indices_are_dense() {
        for (idx, period) in TimePeriod::ALL.iter().enumerate() {
            assert_eq!(period.index(), idx);
        }
    }
}
