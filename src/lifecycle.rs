// lifecycle.rs - Scoped registrations
//
// Listeners, intervals and frame callbacks are acquired into a `Scoped`
// guard. Dropping the guard releases the registration exactly once, however
// the owner went away.

/// Something registered with the host that must be undone
pub trait Teardown {
    fn teardown(&mut self);
}

#[must_use = "dropping the guard releases the registration immediately"]
pub struct Scoped<T: Teardown> {
    inner: Option<T>,
}

impl<T: Teardown> Scoped<T> {
    pub fn new(inner: T) -> Self {
        Self { inner: Some(inner) }
    }

    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }

    /// Release early; later calls and the eventual drop are no-ops
    pub fn release(&mut self) {
        if let Some(mut inner) = self.inner.take() {
            inner.teardown();
        }
    }
}

impl<T: Teardown> Drop for Scoped<T> {
    fn drop(&mut self) {
        self.release();
    }
}
