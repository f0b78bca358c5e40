pub mod error;
pub mod observation;
pub mod selection;
pub mod variable;

pub use error::GwlError;
pub use observation::{CsvColumns, Observation};
pub use selection::FilterSelection;
pub use variable::Variable;
