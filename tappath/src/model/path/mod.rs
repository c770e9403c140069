mod best_paths;
mod transit_path;

pub use best_paths::{BestPaths, PathAlternative};
pub use transit_path::{TransitPath, UNAVAILABLE};
