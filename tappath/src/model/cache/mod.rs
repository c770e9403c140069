mod utility_cache;

pub use utility_cache::{AccessKey, EgressKey, LineHaulKey, UtilityCache};
