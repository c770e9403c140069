//! tappath finds the best transit itineraries between two micro-zones for a
//! departure window and chooses one stochastically.
//!
//! for each access/egress mode combination the engine enumerates the
//! cross-product of admissible boarding and alighting access points ("taps"),
//! sums independently-memoized access, line-haul and egress utilities into
//! candidate paths, keeps the best N by total utility, and exposes a
//! multinomial logit model over the retained set for path choice and logsum
//! computation.
//!
//! workers each own a [`model::search::PathSearchEngine`] and share one
//! [`model::cache::UtilityCache`] and one connectivity provider across the
//! simulation run.
pub mod model;
