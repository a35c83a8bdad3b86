//! Equality filter over the full ad set.

use chrono::{DateTime, Utc};

use crate::domain::{Ad, AdId, UserId};

/// Conjunction of optional equality predicates applied by
/// [`AdsQuery::find_ads`](crate::domain::ports::AdsQuery::find_ads).
///
/// An unset predicate always holds, so the default filter matches every ad.
/// `hidden` is carried for callers that send it but is not enforced: the
/// filter never looks at the publication flag.
///
/// # Examples
/// ```
/// use classifieds::domain::{AdFilter, UserId};
///
/// let filter = AdFilter::default()
///     .with_title("Cats")
///     .with_author_id(UserId::new(1));
/// assert_eq!(filter.title.as_deref(), Some("Cats"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdFilter {
    /// Exact ad identifier.
    pub id: Option<AdId>,
    /// Exact title.
    pub title: Option<String>,
    /// Exact author identifier.
    pub author_id: Option<UserId>,
    /// Exact creation timestamp.
    pub created: Option<DateTime<Utc>>,
    /// Exact modification timestamp.
    pub modified: Option<DateTime<Utc>>,
    /// Requested visibility; inert.
    pub hidden: bool,
}

impl AdFilter {
    /// Restrict to one ad identifier.
    #[must_use]
    pub fn with_id(mut self, id: AdId) -> Self {
        self.id = Some(id);
        self
    }

    /// Restrict to an exact title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Restrict to one author.
    #[must_use]
    pub fn with_author_id(mut self, author_id: UserId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    /// Restrict to an exact creation timestamp.
    #[must_use]
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Restrict to an exact modification timestamp.
    #[must_use]
    pub fn with_modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = Some(modified);
        self
    }

    /// Whether `ad` satisfies every set predicate.
    #[must_use]
    pub fn matches(&self, ad: &Ad) -> bool {
        self.id.is_none_or(|id| ad.id() == id)
            && self.title.as_deref().is_none_or(|title| ad.title() == title)
            && self.author_id.is_none_or(|author| ad.author_id() == author)
            && self.created.is_none_or(|created| ad.created() == created)
            && self.modified.is_none_or(|modified| ad.modified() == modified)
    }
}
