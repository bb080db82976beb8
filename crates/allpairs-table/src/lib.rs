pub mod parse;
pub mod types;

pub use parse::{load_table, parse_table, TableError};
pub use types::{Parameter, ParameterTable};
