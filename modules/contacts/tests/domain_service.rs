//! Integration tests for the contact domain service against real storage.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod support;

use contacts::domain::error::DomainError;
use contacts::domain::model::NewContact;
use support::{address, phone, sample_contact, test_service};
use uuid::Uuid;

#[tokio::test]
async fn create_persists_all_children_with_parent_id() {
    let svc = test_service().await;

    let mut input = sample_contact("ada@example.com");
    input.phones = vec![
        phone("100", "home"),
        phone("200", "work"),
        phone("300", "mobile"),
    ];
    input.addresses = vec![address("1 main st", "london"), address("2 side st", "paris")];

    let created = svc.create_contact(input).await.expect("create failed");

    assert_eq!(created.phones.len(), 3);
    assert_eq!(created.addresses.len(), 2);
    assert!(created.phones.iter().all(|p| p.contact_id == created.contact.id));
    assert!(
        created
            .addresses
            .iter()
            .all(|a| a.contact_id == created.contact.id)
    );

    // The created aggregate does not join the document-type lookup.
    assert!(created.document_type.is_none());

    // Stored aggregate matches what was returned.
    let stored = svc
        .get_contact_by_email("ada@example.com")
        .await
        .expect("lookup failed");
    assert_eq!(stored.phones.len(), 3);
    assert_eq!(stored.addresses.len(), 2);
}

#[tokio::test]
async fn create_accepts_empty_child_lists() {
    let svc = test_service().await;

    let mut input = sample_contact("empty@example.com");
    input.phones = vec![];
    input.addresses = vec![];

    let created = svc.create_contact(input).await.expect("create failed");
    assert!(created.phones.is_empty());
    assert!(created.addresses.is_empty());
}

#[tokio::test]
async fn create_rejects_invalid_email() {
    let svc = test_service().await;

    let mut input = sample_contact("not-an-email");
    input.email = "not-an-email".to_owned();

    let err = svc.create_contact(input).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn round_trip_returns_equal_aggregate() {
    let svc = test_service().await;

    let created = svc
        .create_contact(sample_contact("roundtrip@example.com"))
        .await
        .expect("create failed");

    let fetched = svc
        .get_contact_by_email("roundtrip@example.com")
        .await
        .expect("lookup failed");

    assert_eq!(fetched.contact.id, created.contact.id);
    assert_eq!(fetched.contact.first_name, created.contact.first_name);
    assert_eq!(fetched.contact.last_name, created.contact.last_name);
    assert_eq!(fetched.contact.birth_date, created.contact.birth_date);
    assert_eq!(
        fetched.contact.document_number,
        created.contact.document_number
    );
    assert_eq!(fetched.contact.email, created.contact.email);

    let phone_numbers: Vec<_> = fetched.phones.iter().map(|p| &p.phone_number).collect();
    assert_eq!(phone_numbers, vec!["+44 20 7946 0001"]);
    let cities: Vec<_> = fetched.addresses.iter().map(|a| &a.city).collect();
    assert_eq!(cities, vec!["london"]);

    // The lookup joins the seeded document type; creation does not.
    assert_eq!(fetched.document_type.as_ref().unwrap().id, 1);
}

#[tokio::test]
async fn get_by_email_fails_with_not_found() {
    let svc = test_service().await;

    let err = svc
        .get_contact_by_email("missing@example.com")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::ContactNotFound));
}

#[tokio::test]
async fn search_matches_first_name_last_name_and_document_number() {
    let svc = test_service().await;

    let mut a = sample_contact("a@example.com");
    a.first_name = "smithers".to_owned();
    let mut b = sample_contact("b@example.com");
    b.last_name = "blacksmith".to_owned();
    let mut c = sample_contact("c@example.com");
    c.document_number = "smith-9".to_owned();
    let mut d = sample_contact("d@example.com");
    d.first_name = "jones".to_owned();
    d.last_name = "jones".to_owned();
    d.document_number = "J-1".to_owned();

    for input in [a, b, c, d] {
        svc.create_contact(input).await.expect("create failed");
    }

    let found = svc.search_by_personal_data("smith").await.expect("search failed");
    let mut emails: Vec<_> = found.iter().map(|c| c.contact.email.clone()).collect();
    emails.sort();
    assert_eq!(emails, vec!["a@example.com", "b@example.com", "c@example.com"]);

    // Full aggregates come back from the search.
    assert!(found.iter().all(|c| !c.phones.is_empty()));
    assert!(found.iter().all(|c| c.document_type.is_some()));
}

#[tokio::test]
async fn search_returns_empty_list_when_nothing_matches() {
    let svc = test_service().await;

    svc.create_contact(sample_contact("x@example.com"))
        .await
        .expect("create failed");

    let found = svc
        .search_by_personal_data("zzz-no-such-term")
        .await
        .expect("search failed");
    assert!(found.is_empty());
}

#[tokio::test]
async fn phone_search_returns_all_contacts_sharing_the_number() {
    let svc = test_service().await;

    let mut a = sample_contact("one@example.com");
    a.phones = vec![phone("555-0001", "home")];
    let mut b = sample_contact("two@example.com");
    b.phones = vec![phone("555-0001", "work"), phone("555-0002", "home")];
    let mut c = sample_contact("three@example.com");
    c.phones = vec![phone("555-0003", "home")];

    for input in [a, b, c] {
        svc.create_contact(input).await.expect("create failed");
    }

    let found = svc
        .search_by_phone_number("555-0001")
        .await
        .expect("search failed");
    let mut emails: Vec<_> = found.iter().map(|c| c.contact.email.clone()).collect();
    emails.sort();
    assert_eq!(emails, vec!["one@example.com", "two@example.com"]);

    // Exact match only; no substring semantics for phone numbers.
    let found = svc.search_by_phone_number("555").await.expect("search failed");
    assert!(found.is_empty());
}

#[tokio::test]
async fn address_search_matches_substring() {
    let svc = test_service().await;

    let mut a = sample_contact("home@example.com");
    a.addresses = vec![address("742 evergreen terrace", "springfield")];
    let mut b = sample_contact("office@example.com");
    b.addresses = vec![address("10 downing street", "london")];

    for input in [a, b] {
        svc.create_contact(input).await.expect("create failed");
    }

    let found = svc.search_by_address("evergreen").await.expect("search failed");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].contact.email, "home@example.com");

    let found = svc.search_by_address("nowhere").await.expect("search failed");
    assert!(found.is_empty());
}

#[tokio::test]
async fn edit_fails_with_not_found() {
    let svc = test_service().await;

    let err = svc
        .edit_contact(Uuid::new_v4(), sample_contact("ghost@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::ContactNotFound));
}

#[tokio::test]
async fn edit_overwrites_scalar_fields_unconditionally() {
    let svc = test_service().await;

    let created = svc
        .create_contact(sample_contact("before@example.com"))
        .await
        .expect("create failed");

    let update = NewContact {
        first_name: "grace".to_owned(),
        last_name: "hopper".to_owned(),
        birth_date: "1906-12-09".parse().unwrap(),
        document_number: "GH-1906".to_owned(),
        document_type_id: 2,
        email: "after@example.com".to_owned(),
        phones: vec![],
        addresses: vec![],
    };

    let edited = svc
        .edit_contact(created.contact.id, update)
        .await
        .expect("edit failed");
    assert_eq!(edited.contact.first_name, "grace");
    assert_eq!(edited.contact.email, "after@example.com");
    assert_eq!(edited.contact.document_type_id, 2);

    // Persisted: the old email no longer resolves, the new one does.
    let err = svc.get_contact_by_email("before@example.com").await.unwrap_err();
    assert!(matches!(err, DomainError::ContactNotFound));
    let stored = svc
        .get_contact_by_email("after@example.com")
        .await
        .expect("lookup failed");
    assert_eq!(stored.contact.document_number, "GH-1906");
}

#[tokio::test]
async fn edit_with_fewer_children_leaves_trailing_rows_unchanged() {
    let svc = test_service().await;

    let mut input = sample_contact("positional@example.com");
    input.addresses = vec![
        address("first street", "alpha"),
        address("second street", "beta"),
        address("third street", "gamma"),
    ];
    input.phones = vec![];
    let created = svc.create_contact(input).await.expect("create failed");

    let baseline = svc
        .get_contact_by_email("positional@example.com")
        .await
        .expect("lookup failed");
    assert_eq!(baseline.addresses.len(), 3);

    let mut update = sample_contact("positional@example.com");
    update.addresses = vec![address("replacement street", "delta")];
    update.phones = vec![];

    let edited = svc
        .edit_contact(created.contact.id, update)
        .await
        .expect("edit failed");

    // Only the first slot takes the incoming values; the trailing rows keep
    // their content.
    assert_eq!(edited.addresses.len(), 3);
    assert_eq!(edited.addresses[0].address, "replacement street");
    assert_eq!(edited.addresses[0].city, "delta");
    assert_eq!(edited.addresses[1].address, baseline.addresses[1].address);
    assert_eq!(edited.addresses[1].city, baseline.addresses[1].city);
    assert_eq!(edited.addresses[2].address, baseline.addresses[2].address);
    assert_eq!(edited.addresses[2].city, baseline.addresses[2].city);

    // Identifiers are stable; no rows were added or removed.
    let stored = svc
        .get_contact_by_email("positional@example.com")
        .await
        .expect("lookup failed");
    let mut stored_ids: Vec<_> = stored.addresses.iter().map(|a| a.id).collect();
    let mut baseline_ids: Vec<_> = baseline.addresses.iter().map(|a| a.id).collect();
    stored_ids.sort();
    baseline_ids.sort();
    assert_eq!(stored_ids, baseline_ids);
}

#[tokio::test]
async fn edit_with_more_children_drops_the_extra_entries() {
    let svc = test_service().await;

    let mut input = sample_contact("droptail@example.com");
    input.phones = vec![phone("111", "home")];
    input.addresses = vec![];
    let created = svc.create_contact(input).await.expect("create failed");

    let mut update = sample_contact("droptail@example.com");
    update.phones = vec![phone("222", "work"), phone("333", "mobile"), phone("444", "fax")];
    update.addresses = vec![];

    let edited = svc
        .edit_contact(created.contact.id, update)
        .await
        .expect("edit failed");

    // Only the existing slot is written to; the extra incoming entries are
    // silently dropped.
    assert_eq!(edited.phones.len(), 1);
    assert_eq!(edited.phones[0].phone_number, "222");
    assert_eq!(edited.phones[0].phone_type, "work");

    let stored = svc
        .get_contact_by_email("droptail@example.com")
        .await
        .expect("lookup failed");
    assert_eq!(stored.phones.len(), 1);
    assert_eq!(stored.phones[0].phone_number, "222");
}

#[tokio::test]
async fn delete_removes_parent_and_all_children() {
    let svc = test_service().await;

    let mut input = sample_contact("gone@example.com");
    input.phones = vec![phone("900", "home"), phone("901", "work")];
    input.addresses = vec![address("nowhere lane", "void")];
    let created = svc.create_contact(input).await.expect("create failed");

    svc.delete_contact(created.contact.id)
        .await
        .expect("delete failed");

    let err = svc.get_contact_by_email("gone@example.com").await.unwrap_err();
    assert!(matches!(err, DomainError::ContactNotFound));

    // Owned rows are gone too; the phone number no longer resolves.
    let found = svc.search_by_phone_number("900").await.expect("search failed");
    assert!(found.is_empty());
    let found = svc.search_by_address("nowhere").await.expect("search failed");
    assert!(found.is_empty());

    // A second delete by the same id fails with not-found.
    let err = svc.delete_contact(created.contact.id).await.unwrap_err();
    assert!(matches!(err, DomainError::ContactNotFound));
}
