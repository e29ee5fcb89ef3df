use super::*;
use crate::service::guild::GuildService;

/// Tests that an owner missing from both cache and lookup stays null.
///
/// The guild is cached without an owner, the refresh fails and the owner lookup
/// fails. The record must still carry every other cached field.
///
/// Expected: Ok with owner_id None and the remaining fields populated
#[tokio::test]
async fn unresolvable_owner_yields_null() {
    let directory = FakeDirectory::default()
        .with_guild(111)
        .with_cached(ownerless_record(111, "No Owner"));

    let record = GuildService::new(&directory)
        .collect_one(GuildId::new(111))
        .await
        .unwrap();

    assert_eq!(record.owner_id, None);
    assert_eq!(record.name.as_deref(), Some("No Owner"));
    assert_eq!(record.member_count, Some(42));
    assert_eq!(record.premium_tier, Some(2));
    assert!(record.icon_url.is_some());
    assert_eq!(directory.calls(), vec!["refresh:111", "owner:111"]);
}

/// Tests that the owner lookup fills in a missing owner.
///
/// Expected: Ok with owner_id from the dedicated lookup
#[tokio::test]
async fn owner_lookup_fills_missing_owner() {
    let directory = FakeDirectory::default()
        .with_guild(111)
        .with_cached(ownerless_record(111, "Lookup"))
        .with_owner(111, 999);

    let record = GuildService::new(&directory)
        .collect_one(GuildId::new(111))
        .await
        .unwrap();

    assert_eq!(record.owner_id.as_deref(), Some("999"));
}

/// Tests that a known owner skips the dedicated lookup.
///
/// Expected: Ok with the refreshed owner and no owner call issued
#[tokio::test]
async fn known_owner_skips_lookup() {
    let directory = FakeDirectory::default()
        .with_guild(111)
        .with_cached(ownerless_record(111, "Cached"))
        .with_refreshed(owned_record(111, "Refreshed", 555))
        .with_owner(111, 999);

    let record = GuildService::new(&directory)
        .collect_one(GuildId::new(111))
        .await
        .unwrap();

    assert_eq!(record.owner_id.as_deref(), Some("555"));
    assert_eq!(record.name.as_deref(), Some("Refreshed"));
    assert_eq!(directory.calls(), vec!["refresh:111"]);
}

/// Tests that a failed refresh falls back to cached data.
///
/// Expected: Ok with the cached values
#[tokio::test]
async fn refresh_failure_uses_cache() {
    let directory = FakeDirectory::default()
        .with_guild(111)
        .with_cached(owned_record(111, "Stale", 555));

    let record = GuildService::new(&directory)
        .collect_one(GuildId::new(111))
        .await
        .unwrap();

    assert_eq!(record.name.as_deref(), Some("Stale"));
    assert_eq!(record.owner_id.as_deref(), Some("555"));
}

/// Tests that an uncached guild is built from the refresh alone.
///
/// Expected: Ok with refreshed values
#[tokio::test]
async fn uncached_guild_uses_refresh() {
    let directory = FakeDirectory::default()
        .with_guild(111)
        .with_refreshed(owned_record(111, "Fetched", 555));

    let record = GuildService::new(&directory)
        .collect_one(GuildId::new(111))
        .await
        .unwrap();

    assert_eq!(record.name.as_deref(), Some("Fetched"));
}

/// Tests that a guild with no data at all is a per-guild failure.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unavailable_guild_fails() {
    let directory = FakeDirectory::default().with_guild(111);

    let result = GuildService::new(&directory)
        .collect_one(GuildId::new(111))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

/// Tests the counters when every guild succeeds.
///
/// Expected: fetched equals guild_count and records are keyed by ID
#[tokio::test]
async fn collect_all_counts_every_guild() {
    let directory = FakeDirectory::default()
        .with_guild(333)
        .with_guild(111)
        .with_cached(owned_record(111, "First", 1))
        .with_cached(owned_record(333, "Second", 3));

    let collection = GuildService::new(&directory).collect_all().await;

    assert_eq!(collection.guild_count, 2);
    assert_eq!(collection.fetched, 2);
    assert_eq!(collection.records.keys().copied().collect::<Vec<_>>(), vec![111, 333]);
}

/// Tests that one failing guild neither aborts nor counts.
///
/// Expected: fetched is lower than guild_count, other guilds still collected
#[tokio::test]
async fn collect_all_skips_failed_guild() {
    let directory = FakeDirectory::default()
        .with_guild(111)
        .with_guild(222)
        .with_guild(333)
        .with_cached(owned_record(111, "First", 1))
        .with_cached(owned_record(333, "Third", 3));

    let collection = GuildService::new(&directory).collect_all().await;

    assert_eq!(collection.guild_count, 3);
    assert_eq!(collection.fetched, 2);
    assert!(collection.fetched <= collection.guild_count);
    assert!(!collection.records.contains_key(&222));
    assert!(collection.records.contains_key(&333));
}

/// Tests that guilds are processed in ascending ID order.
///
/// Expected: refresh calls issued lowest ID first
#[tokio::test]
async fn collect_all_is_sequential_in_id_order() {
    let directory = FakeDirectory::default()
        .with_guild(300)
        .with_guild(100)
        .with_guild(200)
        .with_cached(owned_record(100, "A", 1))
        .with_cached(owned_record(200, "B", 1))
        .with_cached(owned_record(300, "C", 1));

    GuildService::new(&directory).collect_all().await;

    assert_eq!(
        directory.calls(),
        vec!["refresh:100", "refresh:200", "refresh:300"]
    );
}
