//! Admin gate for content management.
//!
//! This is a demo gate, not access control: the password is a plain static
//! string compared as-is, the authenticated flag lives only in memory for
//! the session, and there is no hashing or rate limiting. It only decides
//! whether management commands are offered.

/// Password used when none is configured
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Session-scoped admin gate
#[derive(Debug, Clone)]
pub struct AdminGate {
    password: String,
    authenticated: bool,
}

impl Default for AdminGate {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_PASSWORD)
    }
}

impl AdminGate {
    /// Create a gate for the given password
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            authenticated: false,
        }
    }

    /// Create a gate with the configured password
    pub fn from_config() -> anyhow::Result<Self> {
        Ok(Self::new(crate::config::config()?.admin_password.clone()))
    }

    /// Try to authenticate. Returns whether the input matched.
    pub fn login(&mut self, input: &str) -> bool {
        if input == self.password {
            self.authenticated = true;
            tracing::info!("Admin session started");
            true
        } else {
            tracing::warn!("Admin login rejected");
            false
        }
    }

    /// End the admin session
    pub fn logout(&mut self) {
        if self.authenticated {
            tracing::info!("Admin session ended");
        }
        self.authenticated = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
