use std::sync::Arc;
use std::time::Duration;

use kv_shortener::application::services::ShortenerService;
use kv_shortener::domain::keys;
use kv_shortener::domain::store::KeyValueStore;
use kv_shortener::error::AppError;
use kv_shortener::infrastructure::store::MemoryStore;
use kv_shortener::utils::base62;

fn engine() -> (ShortenerService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (ShortenerService::new(store.clone()), store)
}

const MINUTE: Duration = Duration::from_secs(60);

#[tokio::test]
async fn test_worked_example() {
    let (engine, _store) = engine();

    let c1 = engine.shorten("https://example.com", 60).await.unwrap();
    let again = engine.shorten("https://example.com", 60).await.unwrap();
    assert_eq!(c1, again);

    assert_eq!(engine.unshorten(&c1).await.unwrap(), "https://example.com");

    let err = engine.shorten_info("doesnotexist").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_repeated_shorten_does_not_advance_counter() {
    let (engine, _store) = engine();

    for _ in 0..5 {
        engine.shorten("https://example.com", 10).await.unwrap();
    }

    assert_eq!(engine.last_allocated_id().await.unwrap(), Some(1));
}

#[tokio::test]
async fn test_distinct_urls_get_distinct_codes() {
    let (engine, _store) = engine();

    let a = engine.shorten("https://a.example.com", 10).await.unwrap();
    let b = engine.shorten("https://b.example.com", 10).await.unwrap();
    let c = engine.shorten("https://a.example.com/", 10).await.unwrap();

    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_ne!(b, c);
}

#[tokio::test]
async fn test_round_trip_and_detail_integrity() {
    let (engine, _store) = engine();
    let urls = [
        "https://example.com",
        "https://example.com/path?q=1&r=two#frag",
        "http://localhost:8080/ünïcødé",
        "not even a url",
    ];

    for url in urls {
        let code = engine.shorten(url, 15).await.unwrap();

        assert_eq!(engine.unshorten(&code).await.unwrap(), url);

        let detail = engine.shorten_info(&code).await.unwrap();
        assert_eq!(detail.url, url);
        assert_eq!(detail.expired, 15);
    }
}

#[tokio::test]
async fn test_codes_decode_to_increasing_ids() {
    let (engine, _store) = engine();

    let mut previous = 0;
    for i in 0..200 {
        let code = engine
            .shorten(&format!("https://example.com/{i}"), 60)
            .await
            .unwrap();
        let id = base62::decode(&code).unwrap();

        assert!(id > previous, "{code} decoded to {id}, previous {previous}");
        previous = id;
    }

    assert_eq!(previous, 200);
}

#[tokio::test(start_paused = true)]
async fn test_link_expires_after_requested_minutes() {
    let (engine, _store) = engine();

    let code = engine.shorten("https://example.com", 5).await.unwrap();

    tokio::time::advance(5 * MINUTE - Duration::from_secs(1)).await;
    assert_eq!(engine.unshorten(&code).await.unwrap(), "https://example.com");
    assert!(engine.shorten_info(&code).await.is_ok());

    tokio::time::advance(Duration::from_secs(1)).await;
    assert!(matches!(
        engine.unshorten(&code).await.unwrap_err(),
        AppError::NotFound { .. }
    ));
    assert!(matches!(
        engine.shorten_info(&code).await.unwrap_err(),
        AppError::NotFound { .. }
    ));
}

#[tokio::test(start_paused = true)]
async fn test_expired_url_gets_fresh_code() {
    let (engine, _store) = engine();

    let first = engine.shorten("https://example.com", 1).await.unwrap();
    tokio::time::advance(MINUTE).await;

    let second = engine.shorten("https://example.com", 1).await.unwrap();

    assert_ne!(first, second);
    assert!(engine.unshorten(&first).await.is_err());
    assert_eq!(engine.unshorten(&second).await.unwrap(), "https://example.com");
    assert_eq!(engine.last_allocated_id().await.unwrap(), Some(2));
}

#[tokio::test(start_paused = true)]
async fn test_dedup_keeps_original_expiry() {
    let (engine, _store) = engine();

    let code = engine.shorten("https://example.com", 2).await.unwrap();
    tokio::time::advance(MINUTE).await;

    // A repeated request with a longer expiry reuses the code without extending it.
    assert_eq!(engine.shorten("https://example.com", 60).await.unwrap(), code);

    tokio::time::advance(MINUTE).await;
    assert!(engine.unshorten(&code).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_zero_expiry_never_expires() {
    let (engine, _store) = engine();

    let code = engine.shorten("https://example.com", 0).await.unwrap();
    tokio::time::advance(Duration::from_secs(10 * 365 * 24 * 3600)).await;

    assert_eq!(engine.unshorten(&code).await.unwrap(), "https://example.com");
    assert_eq!(engine.shorten_info(&code).await.unwrap().expired, 0);
}

#[tokio::test]
async fn test_validation_happens_before_store_access() {
    let (engine, store) = engine();

    assert!(matches!(
        engine.shorten("", 10).await.unwrap_err(),
        AppError::Validation { .. }
    ));
    assert!(matches!(
        engine.shorten("https://example.com", -3).await.unwrap_err(),
        AppError::Validation { .. }
    ));

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_counter_survives_in_store() {
    let (engine, store) = engine();

    store.set(keys::NEXT_URL_ID, "61", None).await.unwrap();

    let code = engine.shorten("https://example.com", 10).await.unwrap();

    assert_eq!(code, "10");
    assert_eq!(engine.last_allocated_id().await.unwrap(), Some(62));
}

#[tokio::test]
async fn test_engines_sharing_a_store_share_the_counter() {
    let store = Arc::new(MemoryStore::new());
    let first = ShortenerService::new(store.clone());
    let second = ShortenerService::new(store.clone());

    let a = first.shorten("https://a.example.com", 10).await.unwrap();
    let b = second.shorten("https://b.example.com", 10).await.unwrap();

    assert_eq!((a.as_str(), b.as_str()), ("1", "2"));
    assert_eq!(second.shorten("https://a.example.com", 10).await.unwrap(), a);
}
