pub mod cache;
pub mod choice;
pub mod network;
pub mod path;
pub mod search;
pub mod utility;
mod zone;

pub use zone::{AccessEgress, DriveMode, LegMode, LotId, Mgra, Tap, Taz, TimePeriod};
