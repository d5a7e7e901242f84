use core::fmt;
use core::hash::{Hash, Hasher};

use crate::o::O;

/// Hash written for every `O::Absent`, whatever `T` is.
const ABSENT_HASH: u64 = 1;

impl<T: PartialEq> PartialEq for O<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (O::Present(a), O::Present(b)) => a == b,
            (O::Absent, O::Absent) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for O<T> {}

impl<T: Hash> Hash for O<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // No tag is written: a present value hashes exactly like the value itself.
        match self {
            O::Present(val) => val.hash(state),
            O::Absent => state.write_u64(ABSENT_HASH),
        }
    }
}

impl<T: fmt::Display> fmt::Display for O<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            O::Present(val) => write!(f, "Present({})", val),
            O::Absent => f.write_str("Absent"),
        }
    }
}
