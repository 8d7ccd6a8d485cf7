//! Scoped event-listener registration.
//!
//! A [`ListenerScope`] remembers every listener it attached to its
//! [`ListenerHost`] and detaches all of them on [`ListenerScope::release`] or
//! when dropped, so no listener outlives the widget that registered it. The
//! host is a trait so the bookkeeping is testable without a browser; the DOM
//! implementation lives in [`crate::web`].

#[cfg(test)]
#[path = "listeners_test.rs"]
mod listeners_test;

/// Errors raised while registering or removing listeners.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListenerError {
    /// The host refused to register the listener.
    #[error("failed to attach {event} listener: {message}")]
    Attach { event: &'static str, message: String },

    /// The host refused to remove the listener.
    #[error("failed to detach {event} listener: {message}")]
    Detach { event: &'static str, message: String },
}

/// Registration flags passed through to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListenerOptions {
    /// `false` lets the handler call `preventDefault` (wheel zoom needs it).
    pub passive: bool,
    pub capture: bool,
}

/// Something listeners can be attached to and detached from.
pub trait ListenerHost {
    /// The callback being registered.
    type Handler;
    /// Whatever the host needs to remove the listener later.
    type Token;

    /// Register `handler` for `event`.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError::Attach`] if the host rejects the listener.
    fn attach(&self, event: &'static str, handler: Self::Handler, options: ListenerOptions) -> Result<Self::Token, ListenerError>;

    /// Remove a listener previously returned by [`ListenerHost::attach`].
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError::Detach`] if the host fails to remove it.
    fn detach(&self, token: Self::Token) -> Result<(), ListenerError>;
}

/// One listener waiting to be attached.
pub struct ListenerSpec<T> {
    pub event: &'static str,
    pub handler: T,
    pub options: ListenerOptions,
}

impl<T> ListenerSpec<T> {
    #[must_use]
    pub fn new(event: &'static str, handler: T, options: ListenerOptions) -> Self {
        Self { event, handler, options }
    }
}

/// Listeners attached to one host, released together.
pub struct ListenerScope<H: ListenerHost> {
    name: &'static str,
    host: H,
    tokens: Vec<H::Token>,
}

impl<H: ListenerHost> ListenerScope<H> {
    #[must_use]
    pub fn new(name: &'static str, host: H) -> Self {
        Self { name, host, tokens: Vec::new() }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of listeners currently attached.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Attach one listener.
    ///
    /// # Errors
    ///
    /// Propagates the host's attach error; listeners already in the scope stay.
    pub fn attach(&mut self, event: &'static str, handler: H::Handler, options: ListenerOptions) -> Result<(), ListenerError> {
        let token = self.host.attach(event, handler, options)?;
        self.tokens.push(token);
        tracing::debug!(scope = self.name, event, "listener attached");
        Ok(())
    }

    /// Attach a batch of listeners, all or nothing.
    ///
    /// # Errors
    ///
    /// On the first failure every listener in the scope is released and the
    /// attach error is returned.
    pub fn attach_all(&mut self, specs: impl IntoIterator<Item = ListenerSpec<H::Handler>>) -> Result<(), ListenerError> {
        for spec in specs {
            if let Err(err) = self.attach(spec.event, spec.handler, spec.options) {
                tracing::warn!(scope = self.name, error = %err, "attach failed; releasing scope");
                self.release();
                return Err(err);
            }
        }
        Ok(())
    }

    /// Detach every listener, newest first. Returns how many were detached
    /// cleanly; failures are logged and the token is dropped regardless.
    pub fn release(&mut self) -> usize {
        let mut released = 0;
        while let Some(token) = self.tokens.pop() {
            match self.host.detach(token) {
                Ok(()) => released += 1,
                Err(err) => tracing::warn!(scope = self.name, error = %err, "listener release failed"),
            }
        }
        if released > 0 {
            tracing::debug!(scope = self.name, released, "listeners released");
        }
        released
    }
}

impl<H: ListenerHost> Drop for ListenerScope<H> {
    fn drop(&mut self) {
        self.release();
    }
}
