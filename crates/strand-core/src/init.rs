//! Element initialization strategies for filling constructors.

/// How a filling constructor initializes its slots.
///
/// The strategy is an explicit runtime value rather than a build-time
/// switch, so the same binary can construct containers under either mode.
#[derive(Clone, Copy, Debug)]
pub enum InitStrategy<T> {
    /// Every slot receives a clone of the given value.
    Repeat(T),
    /// Slot `i` receives `f(i)`.
    FromIndex(fn(usize) -> T),
}

impl<T: Clone> InitStrategy<T> {
    /// Materialize the element for slot `index`.
    pub fn element(&self, index: usize) -> T {
        match self {
            Self::Repeat(value) => value.clone(),
            Self::FromIndex(f) => f(index),
        }
    }
}

impl<T: Default> InitStrategy<T> {
    /// The zero-fill strategy: every slot is `T::default()`.
    pub fn zeroed() -> Self {
        Self::Repeat(T::default())
    }
}
