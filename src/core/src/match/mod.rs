pub mod engine;
pub mod events;
pub mod result;
pub mod selection;
pub mod statistics;
pub mod strength;

pub use engine::*;
pub use events::*;
pub use result::*;
pub use selection::*;
pub use statistics::*;
pub use strength::*;
