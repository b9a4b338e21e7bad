mod product;
mod stats;

pub use product::*;
pub use stats::*;
