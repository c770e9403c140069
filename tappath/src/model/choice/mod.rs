mod choice_error;
mod logit;

pub use choice_error::ChoiceError;
pub use logit::{choose, logsum, PathLogit};
