mod assumed;
mod errors;

pub use assumed::{DefaultAssumed, RunningIndex};
pub use errors::{BcaError, BcaErrorCategory, BcaResult, DecodeResult};
