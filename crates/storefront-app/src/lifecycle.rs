//! Fetch lifecycle state machine
//!
//! Every data-dependent screen shares the same load-settle progression:
//! `Idle → Loading → Ready(T) | Failed(message)`, re-entering `Loading`
//! only when the screen's trigger fires again (remount, or a changed
//! product id on the detail screen). Transitions are pure methods on the
//! value; no UI framework is involved, so reducers can be exercised
//! directly in tests.

/// Load-settle state for one screen's fetched data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lifecycle<T> {
    /// Nothing requested yet
    Idle,
    /// A fetch is in flight
    Loading,
    /// Fetch settled successfully
    Ready(T),
    /// Fetch settled with the user-facing error text
    Failed(String),
}

// Manual impl: `Idle` needs no `T`, so no `T: Default` bound
impl<T> Default for Lifecycle<T> {
    fn default() -> Self {
        Lifecycle::Idle
    }
}

impl<T> Lifecycle<T> {
    /// Enter the loading state, discarding any previous disposition
    pub fn begin(&mut self) {
        *self = Lifecycle::Loading;
    }

    /// Settle with data, clearing any previous error
    pub fn succeed(&mut self, value: T) {
        *self = Lifecycle::Ready(value);
    }

    /// Settle with the user-facing error message
    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Lifecycle::Failed(message.into());
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Lifecycle::Loading)
    }

    /// True once the fetch has either succeeded or failed
    pub fn is_settled(&self) -> bool {
        matches!(self, Lifecycle::Ready(_) | Lifecycle::Failed(_))
    }

    /// The settled data, if any
    pub fn data(&self) -> Option<&T> {
        match self {
            Lifecycle::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The settled error text, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            Lifecycle::Failed(message) => Some(message),
            _ => None,
        }
    }
}
