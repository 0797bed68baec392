pub mod example;
pub mod network;

pub use example::{Example, Target};
pub use network::{Network, WeightInit};
