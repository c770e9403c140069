#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ChoiceError {
    /// the retained path set has nothing to choose from, or the supplied
    /// deviate lies at or beyond the cumulative probability mass. callers
    /// apply their own fallback policy; the engine never picks a default.
    #[error("no eligible path alternative to choose from")]
    NoAlternatives,
}
