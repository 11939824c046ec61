pub mod preprocessor;
pub mod stage;
pub mod traits;
pub mod types;

pub use preprocessor::*;
pub use stage::*;
pub use traits::*;
pub use types::*;
