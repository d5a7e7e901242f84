use crate::error::AbsentError;

/// A value that is either held (`Present`) or missing (`Absent`).
///
/// The tag is fixed at construction. Extraction and mapping consume the
/// container and the predicates only borrow it, so no operation can change the
/// tag of an existing instance. Borrow with [`O::as_ref`] to map or extract
/// without giving the value up.
#[derive(Debug, Clone, Copy)]
pub enum O<T> {
    Present(T),
    Absent,
}

impl<T> Default for O<T> {
    fn default() -> Self {
        O::Absent
    }
}

impl<T> O<T> {
    /// Constructs an `O::Present(val)` variant.
    pub const fn present(val: T) -> Self {
        O::Present(val)
    }

    /// Constructs an `O::Absent` variant.
    pub const fn absent() -> Self {
        O::Absent
    }

    /// Returns true if nothing is held.
    pub const fn is_absent(&self) -> bool {
        matches!(self, O::Absent)
    }

    /// Returns true if a value is held.
    pub const fn is_present(&self) -> bool {
        matches!(self, O::Present(_))
    }

    /// Returns the held value.
    ///
    /// # Panics
    /// Panics with the [`AbsentError`] message on `O::Absent`. Use
    /// [`O::try_unwrap`] to handle that case as an error instead.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            O::Present(val) => val,
            O::Absent => {
                #[cfg(feature = "log")]
                log::error!("{}", AbsentError);
                panic!("{}", AbsentError)
            }
        }
    }

    /// Returns the held value, or [`AbsentError`] on `O::Absent`.
    pub fn try_unwrap(self) -> Result<T, AbsentError> {
        match self {
            O::Present(val) => Ok(val),
            O::Absent => {
                #[cfg(feature = "log")]
                log::debug!("try_unwrap on absent O");
                Err(AbsentError)
            }
        }
    }

    /// Expects the value to be present, panics with `msg` if not.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            O::Present(val) => val,
            O::Absent => {
                #[cfg(feature = "log")]
                log::error!("{}: {}", msg, AbsentError);
                panic!("{}: {}", msg, AbsentError)
            }
        }
    }

    /// Returns the held value, or `default` if there is nothing.
    ///
    /// `default` is evaluated by the caller either way; reach for
    /// [`O::unwrap_or_else`] when building it is expensive.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            O::Present(val) => val,
            O::Absent => default,
        }
    }

    /// Returns the held value, or calls `f` to compute one.
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            O::Present(val) => val,
            O::Absent => f(),
        }
    }

    /// Maps `O<T>` to `O<U>` by applying `f` to the held value.
    ///
    /// `f` only ever sees a held value; on `O::Absent` it is not called.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> O<U> {
        match self {
            O::Present(val) => O::Present(f(val)),
            O::Absent => O::Absent,
        }
    }

    /// Applies `f` to the held value, or returns `default`.
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            O::Present(val) => f(val),
            O::Absent => default,
        }
    }

    /// Applies `f` to the held value, or calls `default` to compute a result.
    ///
    /// Exactly one of the two closures runs.
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            O::Present(val) => f(val),
            O::Absent => default(),
        }
    }

    /// Converts from `&O<T>` to `O<&T>`.
    pub const fn as_ref(&self) -> O<&T> {
        match self {
            O::Present(val) => O::Present(val),
            O::Absent => O::Absent,
        }
    }
}
