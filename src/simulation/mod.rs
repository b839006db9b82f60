pub mod batch;
pub use batch::*;

pub mod tally;
pub use tally::*;
