#[derive(thiserror::Error, Debug)]
pub enum UtilityError {
    #[error("unknown attribute '{0}' in utility specification")]
    UnknownAttribute(String),
    #[error("utility specification has no expression for index pair ({0}, {1})")]
    UnknownIndexPair(usize, usize),
    #[error("utility specification returned an empty result vector for {0}")]
    EmptyResult(String),
}
