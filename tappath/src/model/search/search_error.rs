use crate::model::utility::UtilityError;
use crate::model::{Mgra, Tap, Taz};

/// fatal path-search failures. "no connectivity" is not among them: an empty
/// tap set produces an empty result, not an error. everything here signals a
/// specification or network-data mismatch the enclosing run must abort on,
/// since retrying a deterministic computation cannot change the outcome.
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
    #[error("tap {0} is drive-connected but has no parking record while capacity constraints are active")]
    MissingParkingInfo(Tap),
    #[error("micro-zone {0} has no containing analysis zone")]
    MissingZoneMapping(Mgra),
    #[error("no walk connector time between micro-zone {0} and tap {1}")]
    MissingWalkTime(Mgra, Tap),
    #[error("no drive connector time between zone {0} and tap {1}")]
    MissingDriveTime(Taz, Tap),
    #[error("no drive connector distance between zone {0} and tap {1}")]
    MissingDriveDistance(Taz, Tap),
    #[error(transparent)]
    Utility(#[from] UtilityError),
}
