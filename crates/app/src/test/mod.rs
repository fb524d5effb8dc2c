
pub use context::*;
