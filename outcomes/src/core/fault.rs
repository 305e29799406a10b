//! Opaque fault storage.

use std::fmt;
use std::sync::Arc;

/// An error captured alongside an outcome.
///
/// The library never inspects a fault; it only keeps it and hands it back.
/// Cloning a fault is cheap and shares the underlying error.
#[derive(Clone)]
pub struct Fault(Arc<anyhow::Error>);

impl Fault {
    /// Wraps an already type-erased error.
    #[must_use]
    pub fn from_anyhow(error: anyhow::Error) -> Self {
        Self(Arc::new(error))
    }

    /// Creates a fault from a plain message.
    #[must_use]
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::from_anyhow(anyhow::Error::msg(message))
    }

    /// Returns the stored error.
    #[must_use]
    pub fn error(&self) -> &anyhow::Error {
        &self.0
    }

    /// Attempts to view the stored error as a concrete type.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    /// Returns true if both handles share the same underlying error.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<E> From<E> for Fault
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::from_anyhow(anyhow::Error::new(error))
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_fault_from_std_error() {
        let fault = Fault::from(io::Error::new(io::ErrorKind::NotFound, "missing file"));

        assert_eq!(fault.to_string(), "missing file");
        let io_err = fault.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_fault_from_message() {
        let fault = Fault::msg("boom");
        assert_eq!(fault.to_string(), "boom");
        assert!(fault.downcast_ref::<io::Error>().is_none());
    }

    #[test]
    fn test_fault_clone_shares_error() {
        let fault = Fault::from_anyhow(anyhow::anyhow!("shared"));
        let copy = fault.clone();

        assert!(fault.ptr_eq(&copy));
        assert!(!fault.ptr_eq(&Fault::msg("shared")));
    }
}
