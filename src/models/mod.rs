pub mod inputs;
pub mod plan;
pub mod profile;

pub use inputs::*;
pub use plan::*;
pub use profile::*;
