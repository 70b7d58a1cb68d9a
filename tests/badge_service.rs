use std::sync::Arc;
use std::time::Duration;

use modrinth_badge::badge::{BadgeRenderer, BadgeRequest};
use modrinth_badge::generate_badge;
use modrinth_badge::services::{BadgeCache, BadgeService};
use modrinth_badge::utils::ManualClock;

fn service_with_clock(ttl: Duration) -> (BadgeService, BadgeCache, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::default());
    let cache = BadgeCache::builder()
        .ttl(ttl)
        .clock(clock.clone())
        .build()
        .unwrap();
    let service = BadgeService::new(BadgeRenderer::default(), Some(cache.clone()));
    (service, cache, clock)
}

#[tokio::test]
async fn test_cached_badge_matches_fresh_render() {
    let (service, _cache, _clock) = service_with_clock(Duration::from_secs(300));
    let request = BadgeRequest::new(true, "modrinth", "42 downloads");

    let expected = generate_badge(true, "modrinth", "42 downloads");
    assert_eq!(service.badge(&request).await, expected);
    assert_eq!(service.badge(&request).await, expected);
}

#[tokio::test]
async fn test_distinct_requests_get_distinct_entries() {
    let (service, cache, _clock) = service_with_clock(Duration::from_secs(300));

    service.badge(&BadgeRequest::new(false, "build", "passing")).await;
    service.badge(&BadgeRequest::new(true, "build", "passing")).await;
    service.badge(&BadgeRequest::new(false, "build", "failing")).await;

    assert_eq!(cache.len().await, 3);
}

#[tokio::test]
async fn test_expired_badge_is_rerendered_and_refreshed() {
    let ttl = Duration::from_secs(300);
    let (service, cache, clock) = service_with_clock(ttl);
    let request = BadgeRequest::new(false, "build", "passing");
    let key = request.cache_key();

    service.badge(&request).await;
    clock.advance(ttl);
    assert_eq!(cache.get(&key).await, None);

    // A miss re-renders and puts a fresh entry over the stale one
    service.badge(&request).await;
    assert!(cache.get(&key).await.is_some());
    assert_eq!(cache.len().await, 1);
    assert_eq!(cache.sweep().await, 0);
}

#[tokio::test]
async fn test_sweeper_lifecycle_through_service() {
    let clock = Arc::new(ManualClock::default());
    let cache = BadgeCache::builder()
        .ttl(Duration::from_secs(60))
        .sweep_interval(Duration::from_millis(10))
        .clock(clock.clone())
        .build()
        .unwrap();
    let service = BadgeService::new(BadgeRenderer::default(), Some(cache.clone()));
    let sweeper = cache.start();

    service.badge(&BadgeRequest::new(false, "a", "b")).await;
    clock.advance(Duration::from_secs(61));

    let mut swept = false;
    for _ in 0..200 {
        tokio::time::sleep(Duration::from_millis(10)).await;
        if cache.is_empty().await {
            swept = true;
            break;
        }
    }
    assert!(swept);
    sweeper.stop().await.unwrap();
}
