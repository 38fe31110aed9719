pub mod engine;
pub mod error;
pub mod tables;
pub mod trace;

pub use engine::{Configuration, Engine, normalize, normalize_tokens};
pub use error::{MalformedInput, TableError};
pub use tables::TransitionTable;
pub use trace::{Action, Step, TraceTable};
