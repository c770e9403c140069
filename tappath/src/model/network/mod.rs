mod parking;
mod tabular;
mod transit_network;

pub use parking::{LotUsage, TapParking};
pub use tabular::TabularTransitNetwork;
pub use transit_network::TransitNetwork;
