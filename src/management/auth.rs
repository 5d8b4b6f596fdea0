use crate::types::TokenPair;

/// Whether the token handshake has completed for this process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    Uninitialized,
    Ready(TokenPair),
}

/// In-memory owner of the token pair.
///
/// Tokens are never persisted: each process fetches a new pair on its first
/// authenticated request and keeps it until it exits. The manager is owned
/// by a single repository and mutated through `&mut`, which is enough as
/// long as one process runs one command chain. Serving several commands
/// concurrently would need the status behind a lock.
#[derive(Debug, Default)]
pub struct TokenManager {
    status: AuthStatus,
}

impl TokenManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &AuthStatus {
        &self.status
    }

    pub fn current(&self) -> Option<&TokenPair> {
        match &self.status {
            AuthStatus::Ready(tokens) => Some(tokens),
            AuthStatus::Uninitialized => None,
        }
    }

    /// Moves to [`AuthStatus::Ready`].
    ///
    /// The first pair stored wins; returns `false` and keeps the existing
    /// pair if the manager is already ready.
    pub fn store(&mut self, tokens: TokenPair) -> bool {
        if let AuthStatus::Ready(_) = self.status {
            return false;
        }
        self.status = AuthStatus::Ready(tokens);
        true
    }
}

