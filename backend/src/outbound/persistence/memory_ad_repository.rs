//! In-memory implementation of the ad repository port.

use async_trait::async_trait;

use crate::domain::ports::{AdRepository, AdRepositoryError};
use crate::domain::{Ad, AdDraft, AdId};

use super::memory_table::{IdentifierSpaceExhausted, MemoryTable};

/// Process-local ad store. Contents are lost on restart.
///
/// # Examples
/// ```
/// # use classifieds::domain::{AdDraft, UserId};
/// # use classifieds::domain::ports::AdRepository;
/// # use classifieds::outbound::persistence::InMemoryAdRepository;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let repo = InMemoryAdRepository::default();
/// let draft = AdDraft::new("Bike", "Red", UserId::new(0), chrono::Utc::now());
/// let id = repo.add(draft).await?;
/// assert_eq!(repo.get_by_id(id).await?.title(), "Bike");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryAdRepository {
    table: MemoryTable<AdId, Ad>,
}

fn map_exhausted(error: IdentifierSpaceExhausted) -> AdRepositoryError {
    AdRepositoryError::query(error.to_string())
}

#[async_trait]
impl AdRepository for InMemoryAdRepository {
    async fn add(&self, draft: AdDraft) -> Result<AdId, AdRepositoryError> {
        self.table
            .insert_with(|id| draft.into_ad(id))
            .await
            .map_err(map_exhausted)
    }

    async fn get_by_id(&self, id: AdId) -> Result<Ad, AdRepositoryError> {
        self.table
            .get(id)
            .await
            .ok_or_else(|| AdRepositoryError::not_found(id))
    }

    async fn update(&self, id: AdId, ad: Ad) -> Result<(), AdRepositoryError> {
        if self.table.replace(id, ad.with_id(id)).await {
            Ok(())
        } else {
            Err(AdRepositoryError::not_found(id))
        }
    }

    async fn delete(&self, id: AdId) -> Result<(), AdRepositoryError> {
        self.table.remove(id).await;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Ad>, AdRepositoryError> {
        Ok(self.table.values().await)
    }

    async fn list_published(&self) -> Result<Vec<Ad>, AdRepositoryError> {
        Ok(self.table.values_where(Ad::is_published).await)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use chrono::{DateTime, TimeZone, Utc};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::UserId;

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    fn draft(title: &str, now: DateTime<Utc>) -> AdDraft {
        AdDraft::new(title, "text", UserId::new(0), now)
    }

    #[rstest]
    #[tokio::test]
    async fn three_adds_get_sequential_identifiers(now: DateTime<Utc>) {
        let repo = InMemoryAdRepository::default();
        let mut ids = Vec::new();
        for title in ["a", "b", "c"] {
            ids.push(repo.add(draft(title, now)).await.expect("add"));
        }
        assert_eq!(ids, vec![AdId::new(0), AdId::new(1), AdId::new(2)]);
    }

    #[rstest]
    #[tokio::test]
    async fn stored_ad_carries_its_identifier(now: DateTime<Utc>) {
        let repo = InMemoryAdRepository::default();
        let id = repo.add(draft("a", now)).await.expect("add");
        let ad = repo.get_by_id(id).await.expect("stored");
        assert_eq!(ad, draft("a", now).into_ad(id));
        assert_eq!(ad.created(), ad.modified());
    }

    #[rstest]
    #[tokio::test]
    async fn update_keys_by_address_not_by_payload(now: DateTime<Utc>) {
        let repo = InMemoryAdRepository::default();
        let first = repo.add(draft("a", now)).await.expect("add");
        let second = repo.add(draft("b", now)).await.expect("add");

        let impostor = draft("renamed", now).into_ad(second);
        repo.update(first, impostor).await.expect("update");

        let stored = repo.get_by_id(first).await.expect("stored");
        assert_eq!(stored.id(), first);
        assert_eq!(stored.title(), "renamed");
        assert_eq!(repo.get_by_id(second).await.expect("untouched").title(), "b");
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_missing_ad_is_not_found(now: DateTime<Utc>) {
        let repo = InMemoryAdRepository::default();
        let error = repo
            .update(AdId::new(5), draft("a", now).into_ad(AdId::new(5)))
            .await
            .expect_err("missing");
        assert_eq!(error, AdRepositoryError::not_found(AdId::new(5)));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_is_idempotent_and_ids_are_not_reused(now: DateTime<Utc>) {
        let repo = InMemoryAdRepository::default();
        let id = repo.add(draft("a", now)).await.expect("add");
        repo.delete(id).await.expect("delete");
        repo.delete(id).await.expect("second delete");
        repo.delete(AdId::new(99)).await.expect("never existed");

        assert!(matches!(
            repo.get_by_id(id).await,
            Err(AdRepositoryError::NotFound { .. })
        ));
        assert_eq!(repo.add(draft("b", now)).await.expect("add"), AdId::new(1));
    }

    #[rstest]
    #[tokio::test]
    async fn list_published_is_the_published_subset(now: DateTime<Utc>) {
        let repo = InMemoryAdRepository::default();
        for title in ["a", "b", "c"] {
            repo.add(draft(title, now)).await.expect("add");
        }
        let ad = repo.get_by_id(AdId::new(1)).await.expect("stored");
        repo.update(ad.id(), ad.with_publication(true))
            .await
            .expect("publish");

        let published = repo.list_published().await.expect("list");
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].id(), AdId::new(1));
        assert_eq!(repo.list_all().await.expect("list").len(), 3);
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_adds_never_share_an_identifier(now: DateTime<Utc>) {
        let repo = Arc::new(InMemoryAdRepository::default());
        let handles: Vec<_> = (0..64)
            .map(|n| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.add(draft(&format!("ad {n}"), now)).await })
            })
            .collect();

        let mut ids = BTreeSet::new();
        for handle in handles {
            ids.insert(handle.await.expect("task").expect("add").get());
        }
        assert_eq!(ids, (0..64).collect::<BTreeSet<i64>>());
    }
}
