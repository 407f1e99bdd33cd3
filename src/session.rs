//! Per-connection session state.
//!
//! The session is an explicit value owned by the shell that drives this
//! library, one per interactive connection. It is never stored in a
//! process-wide global and is reset simply by dropping it and starting
//! a fresh one on reconnect.

/// Ephemeral state for one interactive client session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    logged_in: bool,
    current_user: Option<String>,
    is_registering: bool,
}

impl Session {
    /// A fresh session: logged out, not registering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the account gate has been passed.
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Email of the authenticated user, if any.
    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    /// Whether the shell is currently showing the registration form.
    pub fn is_registering(&self) -> bool {
        self.is_registering
    }

    /// Switch the session to the registration flow.
    pub fn begin_registration(&mut self) {
        self.is_registering = true;
    }

    /// Return from the registration flow to the login flow.
    pub fn end_registration(&mut self) {
        self.is_registering = false;
    }

    /// Mark the session authenticated as `email`.
    ///
    /// Callers invoke this only after
    /// [`crate::auth::CredentialStore::authenticate`] returned `true`.
    pub fn log_in(&mut self, email: impl Into<String>) {
        self.logged_in = true;
        self.current_user = Some(email.into());
        self.is_registering = false;
    }

    /// Clear authentication state.
    pub fn log_out(&mut self) {
        self.logged_in = false;
        self.current_user = None;
    }
}
