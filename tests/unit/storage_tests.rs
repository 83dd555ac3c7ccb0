use serde_json::json;

use cvkit::resume::model::{ResumeDocument, Template};
use cvkit::resume::normalize::normalize;
use cvkit::storage::{DOCUMENT_KEY, KvStore, MemoryStore, ResumeStore, SqliteStore};

#[test]
fn sqlite_backed_store_round_trips_a_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cvkit.db");

    let doc = normalize(&json!({
        "personal": { "name": "Ada" },
        "skills": "math, engines"
    }));

    {
        let mut store = ResumeStore::new(SqliteStore::open(&path).unwrap());
        store.save_document(&doc).unwrap();
        store.save_template(Template::Modern).unwrap();
    }

    let store = ResumeStore::new(SqliteStore::open(&path).unwrap());
    assert_eq!(store.load_document(), doc);
    assert_eq!(store.load_template(), Template::Modern);
}

#[test]
fn corrupt_stored_document_is_not_an_error() {
    let mut kv = MemoryStore::new();
    kv.set(DOCUMENT_KEY, b"\x00\x01 definitely not json").unwrap();
    let store = ResumeStore::new(kv);
    assert_eq!(store.load_document(), ResumeDocument::blank());
}

#[test]
fn stored_json_of_the_wrong_shape_is_normalized_not_rejected() {
    let mut kv = MemoryStore::new();
    kv.set(DOCUMENT_KEY, br#"{"education": "none", "summary": 5}"#)
        .unwrap();
    let store = ResumeStore::new(kv);
    let doc = store.load_document();
    assert_eq!(doc.summary, "5");
    assert_eq!(doc.education.len(), 1);
}

#[test]
fn last_writer_wins() {
    let mut store = ResumeStore::new(MemoryStore::new());
    let mut first = ResumeDocument::blank();
    first.summary = "first".into();
    let mut second = ResumeDocument::blank();
    second.summary = "second".into();

    store.save_document(&first).unwrap();
    store.save_document(&second).unwrap();
    assert_eq!(store.load_document().summary, "second");
}

#[test]
fn persisted_format_round_trips_through_the_normalizer() {
    let doc = normalize(&json!({
        "projects": [{ "name": "Legacy Project", "description": "Old." }],
        "skills": "Rust, SQL"
    }));
    let mut store = ResumeStore::new(MemoryStore::new());
    store.save_document(&doc).unwrap();

    // normalize(serialize(normalize(x))) == normalize(x)
    assert_eq!(store.load_document(), doc);
}
