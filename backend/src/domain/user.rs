//! User data model.

use std::fmt;

/// Store-assigned user identifier.
///
/// Identifiers are minted by the user store, start at zero, and are never
/// reused within one store instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw integer value, as carried on the wire.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User fields supplied before the store assigns an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    /// Public nickname.
    pub nickname: String,
    /// Contact email address.
    pub email: String,
}

impl UserDraft {
    /// Build a draft from its parts.
    pub fn new(nickname: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            email: email.into(),
        }
    }

    /// Attach the identifier minted by the store.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            nickname: self.nickname,
            email: self.email,
        }
    }
}

/// Registered user.
///
/// ## Invariants
/// - `id` never changes once the store has assigned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    nickname: String,
    email: String,
}

impl User {
    /// Stable user identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Public nickname.
    #[must_use]
    pub fn nickname(&self) -> &str {
        self.nickname.as_str()
    }

    /// Contact email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Full replacement of the profile fields, keeping the identifier.
    #[must_use]
    pub fn with_profile(self, nickname: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: self.id,
            nickname: nickname.into(),
            email: email.into(),
        }
    }

    pub(crate) fn with_id(self, id: UserId) -> Self {
        Self { id, ..self }
    }
}
