//! Tests for the classifieds service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{MockAdRepository, MockUserRepository};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

#[fixture]
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

const ALICE: UserId = UserId::new(0);
const BOB: UserId = UserId::new(1);

fn service(
    ads: MockAdRepository,
    users: MockUserRepository,
    now: DateTime<Utc>,
) -> ClassifiedsService<MockAdRepository, MockUserRepository> {
    ClassifiedsService::new(
        Arc::new(ads),
        Arc::new(users),
        Arc::new(FixtureClock { utc_now: now }),
    )
}

fn stored_ad(id: i64, author: UserId, created: DateTime<Utc>) -> Ad {
    AdDraft::new("Bike for sale", "Barely used", author, created).into_ad(AdId::new(id))
}

fn expect_ad(ads: &mut MockAdRepository, ad: Ad) {
    ads.expect_get_by_id()
        .with(eq(ad.id()))
        .times(1)
        .return_once(move |_| Ok(ad));
}

#[rstest]
#[tokio::test]
async fn create_ad_stamps_clock_and_starts_unpublished(now: DateTime<Utc>) {
    let mut ads = MockAdRepository::new();
    ads.expect_add()
        .withf(move |draft| {
            draft.title == "Bike for sale"
                && draft.author_id == ALICE
                && !draft.published
                && draft.created == now
                && draft.modified == now
        })
        .times(1)
        .return_once(|_| Ok(AdId::new(0)));

    let ad = service(ads, MockUserRepository::new(), now)
        .create_ad(CreateAdRequest {
            title: "Bike for sale".into(),
            text: "Barely used".into(),
            author_id: ALICE,
        })
        .await
        .expect("ad created");

    assert_eq!(ad.id(), AdId::new(0));
    assert!(!ad.is_published());
    assert_eq!(ad.created(), now);
    assert_eq!(ad.modified(), now);
}

#[rstest]
#[tokio::test]
async fn create_ad_maps_store_failure_to_internal(now: DateTime<Utc>) {
    let mut ads = MockAdRepository::new();
    ads.expect_add()
        .times(1)
        .return_once(|_| Err(AdRepositoryError::query("identifier space exhausted")));

    let error = service(ads, MockUserRepository::new(), now)
        .create_ad(CreateAdRequest {
            title: "t".into(),
            text: "x".into(),
            author_id: ALICE,
        })
        .await
        .expect_err("store failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn update_ad_status_publishes_for_author_and_keeps_modified(now: DateTime<Utc>) {
    let created = now - Duration::hours(2);
    let mut ads = MockAdRepository::new();
    expect_ad(&mut ads, stored_ad(0, ALICE, created));
    ads.expect_update()
        .withf(move |id, ad| *id == AdId::new(0) && ad.is_published() && ad.modified() == created)
        .times(1)
        .return_once(|_, _| Ok(()));

    let ad = service(ads, MockUserRepository::new(), now)
        .update_ad_status(UpdateAdStatusRequest {
            ad_id: AdId::new(0),
            published: true,
            author_id: ALICE,
        })
        .await
        .expect("status updated");

    assert!(ad.is_published());
    assert_eq!(ad.created(), created);
    assert_eq!(ad.modified(), created);
    assert_eq!(ad.title(), "Bike for sale");
}

#[rstest]
#[tokio::test]
async fn update_ad_status_denies_non_author_without_writing(now: DateTime<Utc>) {
    let mut ads = MockAdRepository::new();
    expect_ad(&mut ads, stored_ad(0, ALICE, now));
    ads.expect_update().times(0);

    let error = service(ads, MockUserRepository::new(), now)
        .update_ad_status(UpdateAdStatusRequest {
            ad_id: AdId::new(0),
            published: true,
            author_id: BOB,
        })
        .await
        .expect_err("non-author denied");

    assert_eq!(error.code(), ErrorCode::Forbidden);
}

#[rstest]
#[tokio::test]
async fn update_ad_status_reports_missing_ad(now: DateTime<Utc>) {
    let mut ads = MockAdRepository::new();
    ads.expect_get_by_id()
        .times(1)
        .return_once(|id| Err(AdRepositoryError::not_found(id)));
    ads.expect_update().times(0);

    let error = service(ads, MockUserRepository::new(), now)
        .update_ad_status(UpdateAdStatusRequest {
            ad_id: AdId::new(9),
            published: true,
            author_id: ALICE,
        })
        .await
        .expect_err("missing ad");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "ad 9 not found");
}

#[rstest]
#[tokio::test]
async fn update_ad_replaces_content_and_stamps_modified(now: DateTime<Utc>) {
    let created = now - Duration::days(1);
    let mut ads = MockAdRepository::new();
    expect_ad(&mut ads, stored_ad(4, ALICE, created).with_publication(true));
    ads.expect_update()
        .withf(move |_, ad| ad.title() == "Red bike" && ad.modified() == now)
        .times(1)
        .return_once(|_, _| Ok(()));

    let ad = service(ads, MockUserRepository::new(), now)
        .update_ad(UpdateAdRequest {
            ad_id: AdId::new(4),
            title: "Red bike".into(),
            text: "Now with bell".into(),
            author_id: ALICE,
        })
        .await
        .expect("ad updated");

    assert_eq!(ad.text(), "Now with bell");
    assert_eq!(ad.created(), created);
    assert_eq!(ad.modified(), now);
    assert!(ad.is_published());
    assert_eq!(ad.author_id(), ALICE);
}

#[rstest]
#[tokio::test]
async fn update_ad_denies_non_author(now: DateTime<Utc>) {
    let mut ads = MockAdRepository::new();
    expect_ad(&mut ads, stored_ad(4, ALICE, now));
    ads.expect_update().times(0);

    let error = service(ads, MockUserRepository::new(), now)
        .update_ad(UpdateAdRequest {
            ad_id: AdId::new(4),
            title: "Mine now".into(),
            text: "x".into(),
            author_id: BOB,
        })
        .await
        .expect_err("non-author denied");

    assert_eq!(error.code(), ErrorCode::Forbidden);
}

#[rstest]
#[case::author(ALICE, None)]
#[case::stranger(BOB, Some(ErrorCode::Forbidden))]
#[tokio::test]
async fn delete_ad_is_author_only(
    now: DateTime<Utc>,
    #[case] actor: UserId,
    #[case] expected: Option<ErrorCode>,
) {
    let mut ads = MockAdRepository::new();
    expect_ad(&mut ads, stored_ad(2, ALICE, now));
    ads.expect_delete()
        .with(eq(AdId::new(2)))
        .times(usize::from(expected.is_none()))
        .returning(|_| Ok(()));

    let result = service(ads, MockUserRepository::new(), now)
        .delete_ad(DeleteAdRequest {
            ad_id: AdId::new(2),
            user_id: actor,
        })
        .await;

    assert_eq!(result.err().map(|error| error.code()), expected);
}

#[rstest]
#[tokio::test]
async fn find_ads_keeps_only_matching_ads(now: DateTime<Utc>) {
    let mut ads = MockAdRepository::new();
    let all = vec![
        stored_ad(0, ALICE, now),
        stored_ad(1, BOB, now),
        AdDraft::new("Sofa", "Comfy", ALICE, now).into_ad(AdId::new(2)),
    ];
    ads.expect_list_all().times(1).return_once(move || Ok(all));

    let found = service(ads, MockUserRepository::new(), now)
        .find_ads(
            AdFilter::default()
                .with_title("Bike for sale")
                .with_author_id(ALICE),
        )
        .await
        .expect("search succeeds");

    let ids: Vec<_> = found.iter().map(Ad::id).collect();
    assert_eq!(ids, vec![AdId::new(0)]);
}

#[rstest]
#[tokio::test]
async fn find_ads_without_predicates_returns_everything(now: DateTime<Utc>) {
    let mut ads = MockAdRepository::new();
    let all = vec![
        stored_ad(0, ALICE, now),
        stored_ad(1, BOB, now).with_publication(true),
    ];
    ads.expect_list_all().times(1).return_once(move || Ok(all));

    let found = service(ads, MockUserRepository::new(), now)
        .find_ads(AdFilter::default())
        .await
        .expect("search succeeds");

    assert_eq!(found.len(), 2);
}

#[rstest]
#[tokio::test]
async fn list_published_ads_passes_store_snapshot_through(now: DateTime<Utc>) {
    let mut ads = MockAdRepository::new();
    let published = vec![stored_ad(1, BOB, now).with_publication(true)];
    let expected = published.clone();
    ads.expect_list_published()
        .times(1)
        .return_once(move || Ok(published));

    let listed = service(ads, MockUserRepository::new(), now)
        .list_published_ads()
        .await
        .expect("listing succeeds");

    assert_eq!(listed, expected);
}

#[rstest]
#[tokio::test]
async fn get_ad_maps_missing_to_not_found(now: DateTime<Utc>) {
    let mut ads = MockAdRepository::new();
    ads.expect_get_by_id()
        .returning(|id| Err(AdRepositoryError::not_found(id)));

    let error = service(ads, MockUserRepository::new(), now)
        .get_ad(AdId::new(3))
        .await
        .expect_err("missing ad");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn create_user_returns_assigned_identifier(now: DateTime<Utc>) {
    let mut users = MockUserRepository::new();
    users
        .expect_add()
        .with(eq(UserDraft::new("alice", "alice@example.com")))
        .times(1)
        .return_once(|_| Ok(UserId::new(0)));

    let user = service(MockAdRepository::new(), users, now)
        .create_user(CreateUserRequest {
            nickname: "alice".into(),
            email: "alice@example.com".into(),
        })
        .await
        .expect("user created");

    assert_eq!(user.id(), UserId::new(0));
    assert_eq!(user.nickname(), "alice");
}

#[rstest]
#[tokio::test]
async fn update_user_replaces_own_profile(now: DateTime<Utc>) {
    let mut users = MockUserRepository::new();
    users
        .expect_get_by_id()
        .with(eq(ALICE))
        .return_once(|id| Ok(UserDraft::new("alice", "old@example.com").into_user(id)));
    users
        .expect_update()
        .withf(|id, user| *id == ALICE && user.email() == "new@example.com")
        .times(1)
        .return_once(|_, _| Ok(()));

    let user = service(MockAdRepository::new(), users, now)
        .update_user(UpdateUserRequest {
            user_id: ALICE,
            nickname: "alice".into(),
            email: "new@example.com".into(),
            updater_id: ALICE,
        })
        .await
        .expect("profile updated");

    assert_eq!(user.id(), ALICE);
    assert_eq!(user.email(), "new@example.com");
}

#[rstest]
#[tokio::test]
async fn update_user_denies_other_users(now: DateTime<Utc>) {
    let mut users = MockUserRepository::new();
    users
        .expect_get_by_id()
        .return_once(|id| Ok(UserDraft::new("alice", "a@example.com").into_user(id)));
    users.expect_update().times(0);

    let error = service(MockAdRepository::new(), users, now)
        .update_user(UpdateUserRequest {
            user_id: ALICE,
            nickname: "mallory".into(),
            email: "m@example.com".into(),
            updater_id: BOB,
        })
        .await
        .expect_err("other user denied");

    assert_eq!(error.code(), ErrorCode::Forbidden);
}

#[rstest]
#[tokio::test]
async fn update_user_reports_missing_target_before_ownership(now: DateTime<Utc>) {
    let mut users = MockUserRepository::new();
    users
        .expect_get_by_id()
        .return_once(|id| Err(UserRepositoryError::not_found(id)));

    let error = service(MockAdRepository::new(), users, now)
        .update_user(UpdateUserRequest {
            user_id: UserId::new(7),
            nickname: "ghost".into(),
            email: "g@example.com".into(),
            updater_id: BOB,
        })
        .await
        .expect_err("missing user");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn delete_user_requires_existing_user(now: DateTime<Utc>) {
    let mut users = MockUserRepository::new();
    users
        .expect_get_by_id()
        .return_once(|id| Err(UserRepositoryError::not_found(id)));
    users.expect_delete().times(0);

    let error = service(MockAdRepository::new(), users, now)
        .delete_user(UserId::new(42))
        .await
        .expect_err("missing user");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "user 42 not found");
}

#[rstest]
#[tokio::test]
async fn user_store_failure_is_internal(now: DateTime<Utc>) {
    let mut users = MockUserRepository::new();
    users
        .expect_get_by_id()
        .return_once(|_| Err(UserRepositoryError::query("lock poisoned")));

    let error = service(MockAdRepository::new(), users, now)
        .get_user(ALICE)
        .await
        .expect_err("store failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}
