//! Concurrent Resolution Tests
//!
//! A built engine is shared read-only across tasks; resolution from many
//! threads must agree with single-threaded results and every fallback must
//! be reported exactly once.

use std::sync::Arc;

use resource_resolver::{Reason, RecordingSink, ResolveOptions, ResolverConfig};

const TASKS: usize = 16;
const ROUNDS: usize = 50;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_resolution_is_consistent() {
    let engine = Arc::new(ui_catalog::standard_engine_with(ResolverConfig::quiet(), None).unwrap());
    let options = ResolveOptions::new().with_size("lg").with_color("primary");
    let expected = engine.resolve("transport", "bus", &options).unwrap();

    let mut handles = Vec::new();
    for _ in 0..TASKS {
        let engine = Arc::clone(&engine);
        let options = options.clone();
        handles.push(tokio::spawn(async move {
            (0..ROUNDS)
                .map(|_| engine.resolve("transport", "bus", &options).unwrap())
                .collect::<Vec<_>>()
        }));
    }

    for handle in handles {
        for resolved in handle.await.unwrap() {
            assert_eq!(resolved, expected);
        }
    }
    assert_eq!(engine.diagnostic_counts().fallbacks, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_fallbacks_are_counted_once_each() {
    let sink = Arc::new(RecordingSink::new());
    let engine = Arc::new(
        ui_catalog::standard_engine_with(ResolverConfig::quiet(), Some(sink.clone())).unwrap(),
    );

    let mut handles = Vec::new();
    for task in 0..TASKS {
        let engine = Arc::clone(&engine);
        handles.push(tokio::spawn(async move {
            for round in 0..ROUNDS {
                let action = format!("missing-{}-{}", task, round);
                let resolved = engine
                    .resolve("status", &action, &ResolveOptions::new())
                    .unwrap();
                assert_eq!(resolved.descriptor.identifier, "QuestionCircleOutlined");

                let token = engine.token("color-primary", &action).unwrap();
                assert_eq!(token.value, "#0ea5e9");
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let expected = (TASKS * ROUNDS * 2) as u64;
    assert_eq!(engine.diagnostic_counts().fallbacks, expected);

    let events = sink.events();
    assert_eq!(events.len() as u64, expected);
    assert!(events.iter().all(|e| e.reason == Reason::ActionNotFound));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_describe_from_many_readers() {
    let engine = Arc::new(ui_catalog::standard_engine_with(ResolverConfig::quiet(), None).unwrap());
    let reference = engine.describe();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move { engine.describe() })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), reference);
    }
}
