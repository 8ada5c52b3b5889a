/// Persisted "already submitted" flag, injected into the [`crate::Session`].
///
/// The flag is read once at session construction and written at most once,
/// on the first accepted submission. Nothing in this system ever clears it.
pub trait FlagStore {
    /// The error type for this store.
    type Error: Into<anyhow::Error>;

    /// Whether a submission was already recorded.
    fn is_set(&self) -> Result<bool, Self::Error>;

    /// Record that a submission succeeded.
    fn set(&mut self) -> Result<(), Self::Error>;
}

/// In-memory flag store for tests and throwaway sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryFlag {
    set: bool,
}

impl InMemoryFlag {
    /// Create an unset flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flag that is already set, as after a previous submission.
    pub fn already_set() -> Self {
        Self { set: true }
    }
}

impl FlagStore for InMemoryFlag {
    type Error = std::convert::Infallible;

    fn is_set(&self) -> Result<bool, Self::Error> {
        Ok(self.set)
    }

    fn set(&mut self) -> Result<(), Self::Error> {
        self.set = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_flag_round_trip() {
        let mut flag = InMemoryFlag::new();
        assert!(!flag.is_set().unwrap());
        flag.set().unwrap();
        assert!(flag.is_set().unwrap());
    }
}
