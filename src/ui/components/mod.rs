pub mod gauge;
pub mod input;

pub use gauge::{calorie_gauge, protein_gauge, steps_gauge};
pub use input::{InputWidget, SelectWidget};
