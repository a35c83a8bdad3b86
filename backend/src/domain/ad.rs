//! Classified ad data model.
//!
//! An [`Ad`] moves through `created (unpublished)` -> `published` <->
//! `unpublished` -> deleted. Only its author may move it; title and text may be
//! revised in any live state without touching the publication flag.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::UserId;

/// Store-assigned ad identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AdId(i64);

impl AdId {
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

impl From<i64> for AdId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<AdId> for i64 {
    fn from(value: AdId) -> Self {
        value.0
    }
}

impl fmt::Display for AdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ad fields supplied before the store assigns an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdDraft {
    /// Headline shown in listings.
    pub title: String,
    /// Body text.
    pub text: String,
    /// Author recorded at creation.
    pub author_id: UserId,
    /// Whether the ad shows up in the public listing.
    pub published: bool,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Last content modification timestamp.
    pub modified: DateTime<Utc>,
}

impl AdDraft {
    /// Draft for a fresh, unpublished ad created at `now`.
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        author_id: UserId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            author_id,
            published: false,
            created: now,
            modified: now,
        }
    }

    /// Attach the identifier minted by the store.
    #[must_use]
    pub fn into_ad(self, id: AdId) -> Ad {
        Ad {
            id,
            title: self.title,
            text: self.text,
            author_id: self.author_id,
            published: self.published,
            created: self.created,
            modified: self.modified,
        }
    }
}

/// Stored classified ad.
///
/// ## Invariants
/// - `id` never changes once the store has assigned it.
/// - `author_id` never changes after creation; every transition below keeps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ad {
    id: AdId,
    title: String,
    text: String,
    author_id: UserId,
    published: bool,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
}

impl Ad {
    /// Stable ad identifier.
    #[must_use]
    pub fn id(&self) -> AdId {
        self.id
    }

    /// Headline shown in listings.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Body text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Author recorded at creation.
    #[must_use]
    pub fn author_id(&self) -> UserId {
        self.author_id
    }

    /// Whether the ad shows up in the public listing.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.published
    }

    /// Creation timestamp.
    #[must_use]
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Last content modification timestamp.
    #[must_use]
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    /// Whether `user_id` is this ad's author.
    #[must_use]
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    /// Replacement record with the publication flag set to `published`.
    ///
    /// `modified` is left as it was. Earlier deployments of this service
    /// cleared it to the zero time on every status change; neither clearing
    /// nor bumping it is done here, so only content edits move it.
    #[must_use]
    pub fn with_publication(self, published: bool) -> Self {
        Self { published, ..self }
    }

    /// Replacement record with new title and text, stamped at `at`.
    #[must_use]
    pub fn with_content(
        self,
        title: impl Into<String>,
        text: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            modified: at,
            ..self
        }
    }

    pub(crate) fn with_id(self, id: AdId) -> Self {
        Self { id, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rstest::{fixture, rstest};

    #[fixture]
    fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    #[fixture]
    fn ad(created_at: DateTime<Utc>) -> Ad {
        AdDraft::new("hello", "world", UserId::new(1), created_at).into_ad(AdId::new(0))
    }

    #[rstest]
    fn fresh_draft_is_unpublished_with_matching_timestamps(created_at: DateTime<Utc>) {
        let draft = AdDraft::new("hello", "world", UserId::new(1), created_at);

        assert!(!draft.published);
        assert_eq!(draft.created, created_at);
        assert_eq!(draft.modified, created_at);
    }

    #[rstest]
    fn publication_toggle_keeps_everything_else(ad: Ad) {
        let published = ad.clone().with_publication(true);

        assert!(published.is_published());
        assert_eq!(published.id(), ad.id());
        assert_eq!(published.title(), ad.title());
        assert_eq!(published.author_id(), ad.author_id());
        assert_eq!(published.created(), ad.created());
        assert_eq!(published.modified(), ad.modified());
    }

    #[rstest]
    fn content_edit_stamps_modified_and_keeps_publication(ad: Ad, created_at: DateTime<Utc>) {
        let later = created_at + Duration::minutes(5);
        let revised = ad.with_publication(true).with_content("привет", "мир", later);

        assert_eq!(revised.title(), "привет");
        assert_eq!(revised.text(), "мир");
        assert!(revised.is_published());
        assert_eq!(revised.created(), created_at);
        assert_eq!(revised.modified(), later);
    }

    #[rstest]
    #[case(1, true)]
    #[case(2, false)]
    fn authorship_compares_author_id(ad: Ad, #[case] user: i64, #[case] expected: bool) {
        assert_eq!(ad.is_authored_by(UserId::new(user)), expected);
    }
}
