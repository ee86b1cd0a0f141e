pub mod rng;
pub mod vectors;

pub use rng::{Lfg31, Snapshot};
