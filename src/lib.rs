pub mod math;
pub mod activation;
pub mod loss;
pub mod network;
pub mod train;
pub mod features;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use math::gaussian::Gaussian;
pub use activation::activation::HiddenActivation;
pub use loss::cross_entropy::CrossEntropyLoss;
pub use loss::mae::MaeLoss;
pub use loss::output_policy::OutputPolicy;
pub use network::example::{Example, Target};
pub use network::network::{Network, WeightInit};
pub use train::report::TrainReport;
pub use error::{Error, Result};
