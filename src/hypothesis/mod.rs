mod growth;
mod table;

pub use growth::Growth;
pub use table::{Hypothesis, HypothesisTable, Preset};
