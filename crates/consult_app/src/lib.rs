mod consult;
mod submission;

pub use consult::*;
pub use submission::*;
