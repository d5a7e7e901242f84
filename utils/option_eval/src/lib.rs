pub mod eval;

pub use eval::{Outcome, Report, Terminal, Transform, evaluate};
