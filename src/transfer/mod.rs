pub mod estimator;
pub mod progress;
pub mod types;


pub use estimator::*;
pub use progress::*;
pub use types::*;
