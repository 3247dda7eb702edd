use phonebook_core::{Contact, ContactDraft, ContactId, ContactRepository, HttpContactRepository, RepoError};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use warp::http::StatusCode;
use warp::Filter;

#[tokio::test]
async fn fetch_decodes_numeric_and_string_ids() {
    let (base_url, store) = start_server();
    store.lock().unwrap().extend([
        json!({"id": 1, "name": "Ann", "number": "123"}),
        json!({"id": "a7", "name": "Cid", "number": "44-55"}),
    ]);

    let repo = HttpContactRepository::new(base_url, "persons");
    let contacts = repo.fetch_all().await.unwrap();

    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].id, ContactId::from("1"));
    assert_eq!(contacts[1].id, ContactId::from("a7"));
    assert_eq!(contacts[1].number, "44-55");
}

#[tokio::test]
async fn create_posts_the_draft_and_returns_the_assigned_id() {
    let (base_url, store) = start_server();

    let repo = HttpContactRepository::new(base_url, "persons");
    let created = repo
        .create(&ContactDraft::new("Bob", "555"))
        .await
        .unwrap();

    assert_eq!(created.id, ContactId::from("1"));
    assert_eq!(created.name, "Bob");
    assert_eq!(created.number, "555");

    let records = store.lock().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "Bob");
}

#[tokio::test]
async fn update_replaces_the_record_in_place() {
    let (base_url, store) = start_server();
    store
        .lock()
        .unwrap()
        .push(json!({"id": 1, "name": "Ann", "number": "123"}));

    let repo = HttpContactRepository::new(base_url, "persons");
    let id = ContactId::from("1");
    let updated = repo
        .update(&id, &Contact::new("1", "Ann", "999"))
        .await
        .unwrap();
    assert_eq!(updated.number, "999");

    let contacts = repo.fetch_all().await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].number, "999");
}

#[tokio::test]
async fn update_of_a_missing_record_is_not_found() {
    let (base_url, _store) = start_server();

    let repo = HttpContactRepository::new(base_url, "persons");
    let id = ContactId::from("42");
    let err = repo
        .update(&id, &Contact::new("42", "Ghost", "000"))
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::NotFound(missing) if missing == id));
}

#[tokio::test]
async fn remove_deletes_the_record() {
    let (base_url, store) = start_server();
    store
        .lock()
        .unwrap()
        .push(json!({"id": 1, "name": "Ann", "number": "123"}));

    let repo = HttpContactRepository::new(base_url, "persons");
    repo.remove(&ContactId::from("1")).await.unwrap();

    assert!(store.lock().unwrap().is_empty());
}

#[tokio::test]
async fn remove_of_a_missing_record_is_not_found() {
    let (base_url, _store) = start_server();

    let repo = HttpContactRepository::new(base_url, "persons");
    let err = repo.remove(&ContactId::from("9")).await.unwrap_err();

    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn non_success_status_on_the_collection_maps_to_api_error() {
    let (base_url, _store) = start_server();

    let repo = HttpContactRepository::new(base_url, "missing");
    let err = repo.fetch_all().await.unwrap_err();

    assert!(matches!(err, RepoError::Api { status: 404 }));
}

#[tokio::test]
async fn undecodable_payload_maps_to_invalid_data() {
    let (base_url, store) = start_server();
    store
        .lock()
        .unwrap()
        .push(json!({"id": true, "name": "Ann", "number": "123"}));

    let repo = HttpContactRepository::new(base_url, "persons");
    let err = repo.fetch_all().await.unwrap_err();

    assert!(matches!(err, RepoError::InvalidData(_)));
}

type Store = Arc<Mutex<Vec<Value>>>;

/// Spawns a flat JSON collection server on an ephemeral port and returns its
/// base URL plus a handle on the backing records.
fn start_server() -> (String, Store) {
    let store: Store = Arc::new(Mutex::new(Vec::new()));

    let list = warp::path("persons")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_store(store.clone()))
        .map(|store: Store| warp::reply::json(&*store.lock().unwrap()));

    let create = warp::path("persons")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .map(|draft: Value, store: Store| {
            let mut records = store.lock().unwrap();
            let record = json!({
                "id": records.len() as u64 + 1,
                "name": draft["name"],
                "number": draft["number"],
            });
            records.push(record.clone());
            warp::reply::json(&record)
        });

    let update = warp::path("persons")
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::put())
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .map(|id: String, body: Value, store: Store| {
            let mut records = store.lock().unwrap();
            match records
                .iter_mut()
                .find(|record| id_matches(&record["id"], &id))
            {
                Some(slot) => {
                    *slot = body.clone();
                    warp::reply::with_status(warp::reply::json(&body), StatusCode::OK)
                }
                None => not_found(),
            }
        });

    let delete = warp::path("persons")
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::delete())
        .and(with_store(store.clone()))
        .map(|id: String, store: Store| {
            let mut records = store.lock().unwrap();
            match records
                .iter()
                .position(|record| id_matches(&record["id"], &id))
            {
                Some(position) => {
                    records.remove(position);
                    warp::reply::with_status(warp::reply::json(&json!({})), StatusCode::OK)
                }
                None => not_found(),
            }
        });

    let routes = list.or(create).or(update).or(delete);
    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    (format!("http://{addr}"), store)
}

fn with_store(
    store: Store,
) -> impl Filter<Extract = (Store,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || store.clone())
}

fn id_matches(value: &Value, id: &str) -> bool {
    match value {
        Value::String(text) => text == id,
        Value::Number(number) => number.to_string() == id,
        _ => false,
    }
}

fn not_found() -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&json!({"error": "not found"})),
        StatusCode::NOT_FOUND,
    )
}
