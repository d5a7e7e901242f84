#![no_std]

// O module
mod o;
pub use o::O;

mod cmp;

mod error;
pub use error::AbsentError;
