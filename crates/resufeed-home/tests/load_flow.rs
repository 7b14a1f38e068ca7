//! End-to-end load flow over a seeded in-memory store: the same
//! list-parse-finish path the fetch effect drives.

use resufeed_home::state::{resume_count_label, HomeState, HomeView};
use resufeed_home::store::{load_resumes, MemoryKvStore, ParsePolicy};

#[tokio::test]
async fn empty_store_lands_in_the_empty_state() {
    let store = MemoryKvStore::new();
    let mut state = HomeState::new();
    assert_eq!(state.view(), HomeView::Loading);

    state.begin_loading();
    let records = load_resumes(&store, ParsePolicy::Skip).await.unwrap();
    state.finish(records);

    assert!(state.resumes.is_empty());
    assert_eq!(state.view(), HomeView::Empty);
}

#[tokio::test]
async fn two_records_land_in_the_populated_state() {
    let mut store = MemoryKvStore::new();
    store.insert(
        "resume:a",
        r#"{"id":"a","companyName":"Acme","feedback":{"overallScore":82}}"#,
    );
    store.insert("resume:b", r#"{"id":"b","companyName":"Globex"}"#);
    // Outside the resume key pattern; must not be listed.
    store.insert("job:c", r#"{"id":"c"}"#);

    let mut state = HomeState::new();
    state.begin_loading();
    let records = load_resumes(&store, ParsePolicy::Skip).await.unwrap();
    state.finish(records);

    assert_eq!(state.view(), HomeView::Populated);
    assert_eq!(state.resumes.len(), 2);
    let ids: Vec<_> = state.resumes.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(resume_count_label(state.resumes.len()), "2 Resumes");
}

#[tokio::test]
async fn skip_policy_tolerates_one_bad_record() {
    let mut store = MemoryKvStore::new();
    store.insert("resume:good", r#"{"id":"good"}"#);
    store.insert("resume:bad", "definitely not json");

    let records = load_resumes(&store, ParsePolicy::Skip).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "good");
}

#[tokio::test]
async fn strict_policy_lands_in_the_failed_state() {
    let mut store = MemoryKvStore::new();
    store.insert("resume:bad", "definitely not json");

    let mut state = HomeState::new();
    state.begin_loading();
    match load_resumes(&store, ParsePolicy::Strict).await {
        Ok(_) => panic!("strict parse must fail on a bad record"),
        Err(error) => state.fail(error.to_string()),
    }

    assert_eq!(state.view(), HomeView::Failed);
    assert!(state.error_message().unwrap().contains("resume:bad"));
}
