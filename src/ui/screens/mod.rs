pub mod form;
pub mod plan;

pub use form::{FormField, FormScreen};
pub use plan::PlanScreen;
