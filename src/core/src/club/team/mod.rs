pub mod builder;
pub mod development;
pub mod tactics;
pub mod team;
pub mod training;

pub use builder::*;
pub use development::*;
pub use tactics::*;
pub use team::*;
pub use training::*;
