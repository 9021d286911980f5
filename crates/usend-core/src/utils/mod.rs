/// Utility modules
pub mod logging;
pub mod template;
pub mod validation;

pub use logging::*;
pub use template::*;
pub use validation::*;
