//!
//! Accessors for the value behind a [`Secret`].
//!

use crate::{Secret, Strategy};

/// Borrow the inner secret value.
pub trait PeekInterface<S> {
    /// Only method providing shared access to the secret value.
    fn peek(&self) -> &S;
}

/// Consume the wrapper and hand back the inner value.
pub trait ExposeInterface<S> {
    /// Consume the secret and return the inner value
    fn expose(self) -> S;
}

impl<S, I> PeekInterface<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn peek(&self) -> &S {
        &self.inner_secret
    }
}

impl<S, I> ExposeInterface<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn expose(self) -> S {
        self.inner_secret
    }
}
