pub mod matcher;
pub mod normalize;
pub mod resample;

pub use matcher::*;
pub use normalize::*;
pub use resample::*;
