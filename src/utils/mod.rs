// Utils compartidos

pub mod format;
pub mod ids;

pub use format::*;
pub use ids::*;
