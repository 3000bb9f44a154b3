/// Year cache population: single population per year, no partial entries on
/// failure, retry on the next call, and per-year isolation of slow loads.
mod helpers;

use futures::future::join_all;
use helpers::*;
use holiday_cn::{DateType, HolidayError, YearCache};
use std::sync::Arc;
use std::time::Duration;

fn cache_over(source: &Arc<StaticSource>) -> YearCache {
    YearCache::new(source.clone())
}

#[tokio::test]
async fn test_second_load_reuses_cached_year() {
    let source = Arc::new(StaticSource::new().with_year(2024, schedule_2024()));
    let cache = cache_over(&source);

    let first = cache.get_or_load(2024).await.unwrap();
    let second = cache.get_or_load(2024).await.unwrap();

    assert_eq!(source.fetch_count(), 1);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.len(), RECORDS_2024);
    assert_eq!(cache.cached_years().await, vec![2024]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_callers_share_one_population() {
    let source = Arc::new(
        StaticSource::new()
            .with_year(2024, schedule_2024())
            .with_delay(2024, Duration::from_millis(100)),
    );
    let cache = cache_over(&source);

    let tasks = (0..32).map(|_| {
        let cache = cache.clone();
        tokio::spawn(async move { cache.get_or_load(2024).await })
    });
    let results = join_all(tasks).await;

    let schedules: Vec<_> = results
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .collect();

    assert_eq!(source.fetch_count(), 1);
    assert!(schedules.iter().all(|s| Arc::ptr_eq(s, &schedules[0])));
}

#[tokio::test]
async fn test_unavailable_year_is_not_cached() {
    let source = Arc::new(StaticSource::new());
    let cache = cache_over(&source);

    let err = cache.get_or_load(2031).await.unwrap_err();
    assert_eq!(err.kind(), "SourceUnavailable");
    assert!(err.message().starts_with("unable to load holiday data for 2031"));
    assert!(!cache.is_cached(2031).await);

    // every call retries from scratch
    cache.get_or_load(2031).await.unwrap_err();
    assert_eq!(source.fetch_count(), 2);
}

#[tokio::test]
async fn test_failed_load_is_retried_by_next_caller() {
    let source = Arc::new(
        StaticSource::new()
            .with_year(2024, schedule_2024())
            .failing_first(1),
    );
    let cache = cache_over(&source);

    assert!(matches!(
        cache.get_or_load(2024).await,
        Err(HolidayError::SourceUnavailable(_))
    ));
    assert!(!cache.is_cached(2024).await);

    let schedule = cache.get_or_load(2024).await.unwrap();
    assert_eq!(schedule.len(), RECORDS_2024);
    assert_eq!(source.fetch_count(), 2);
    assert!(cache.is_cached(2024).await);
}

#[tokio::test]
async fn test_duplicate_date_aborts_population() {
    let document = schedule_json(
        2024,
        &[
            ("劳动节", "2024-05-01", true),
            ("劳动节", "2024-05-02", true),
            ("劳动节", "2024-05-01", true),
        ],
    );
    let source = Arc::new(StaticSource::new().with_year(2024, document));
    let cache = cache_over(&source);

    let err = cache.get_or_load(2024).await.unwrap_err();
    assert_eq!(err.kind(), "InvalidDate");
    assert!(cache.cached_years().await.is_empty());
}

#[tokio::test]
async fn test_malformed_document_aborts_population() {
    let source = Arc::new(StaticSource::new().with_year(2024, "<html>404</html>"));
    let cache = cache_over(&source);

    let err = cache.get_or_load(2024).await.unwrap_err();
    assert_eq!(err.kind(), "MalformedSource");
    assert!(!cache.is_cached(2024).await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_slow_year_does_not_block_other_years() {
    let source = Arc::new(
        StaticSource::new()
            .with_year(2024, schedule_2024())
            .with_year(2025, schedule_json(2025, &[("元旦", "2025-01-01", true)]))
            .with_delay(2024, Duration::from_secs(2)),
    );
    let cache = cache_over(&source);

    let slow = {
        let cache = cache.clone();
        tokio::spawn(async move { cache.get_or_load(2024).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    let fast = tokio::time::timeout(Duration::from_millis(500), cache.get_or_load(2025))
        .await
        .expect("2025 must not wait for 2024")
        .unwrap();
    assert_eq!(fast.len(), 1);

    assert_eq!(slow.await.unwrap().unwrap().len(), RECORDS_2024);
}

#[tokio::test]
async fn test_out_of_year_records_are_not_stored() {
    // a break starting on 2022-12-31 is published with the 2023 schedule
    let document = schedule_json(
        2023,
        &[
            ("元旦", "2022-12-31", true),
            ("元旦", "2023-01-07", false),
            ("春节", "2023-01-22", true),
        ],
    );
    let source = Arc::new(StaticSource::new().with_year(2023, document));
    let cache = cache_over(&source);

    let schedule = cache.get_or_load(2023).await.unwrap();
    assert_eq!(schedule.len(), 2);
    assert!(schedule.iter().all(|d| d.date.format("%Y").to_string() == "2023"));

    // the skipped record still counts as the preceding off-day
    let makeup = schedule
        .iter()
        .find(|d| d.date.to_string() == "2023-01-07")
        .unwrap();
    assert_eq!(makeup.date_type, DateType::WorkDayAfterHoliday);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_callers_of_failing_year_each_get_error() {
    let source = Arc::new(StaticSource::new().with_delay(2031, Duration::from_millis(20)));
    let cache = cache_over(&source);

    let tasks = (0..8).map(|_| {
        let cache = cache.clone();
        tokio::spawn(async move { cache.get_or_load(2031).await })
    });
    let results = join_all(tasks).await;

    for joined in results {
        let err = joined.unwrap().unwrap_err();
        assert_eq!(err.kind(), "SourceUnavailable");
        assert!(err.message().starts_with("unable to load holiday data for 2031"));
    }

    // waiters retry one after another, nothing is left behind
    assert_eq!(source.fetch_count(), 8);
    assert!(!cache.is_cached(2031).await);
    assert!(cache.cached_years().await.is_empty());
}
