//! Integration tests for address book CRUD operations.

use contact_book::{AddOutcome, AddressBook, BookError, ContactName, Record};

fn named(name: &str) -> Record {
    Record::new(ContactName::new(name).unwrap())
}

#[test]
fn test_insertion_order_is_preserved() {
    let mut book = AddressBook::new();
    for name in ["Charlie", "Alice", "Bob"] {
        book.add_record(named(name)).unwrap();
    }
    let names: Vec<_> = book.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Charlie", "Alice", "Bob"]);
}

#[test]
fn test_duplicate_name_fails_but_compound_add_updates() {
    let mut book = AddressBook::new();
    book.add_record(named("Alice")).unwrap();

    // Strict add: same name is a collision.
    let err = book.add_record(named("Alice")).unwrap_err();
    assert!(matches!(err, BookError::DuplicateName(_)));

    // The compound `add` flow treats the same name as an update instead.
    let outcome = book.upsert_contact("Alice", &["0501234567"]).unwrap();
    assert_eq!(outcome, AddOutcome::Updated);
    assert_eq!(book.len(), 1);
    assert_eq!(book.find("Alice").unwrap().phones.len(), 1);
}

#[test]
fn test_delete_removes_exactly_one_record() {
    let mut book = AddressBook::new();
    book.add_record(named("Alice")).unwrap();
    book.add_record(named("Bob")).unwrap();

    book.delete("Alice");
    assert_eq!(book.len(), 1);
    assert!(book.find("Alice").is_none());
    assert!(book.find("Bob").is_some());

    // Repeating the delete changes nothing.
    book.delete("Alice");
    assert_eq!(book.len(), 1);
}

#[test]
fn test_full_contact_lifecycle() {
    let mut book = AddressBook::new();

    book.upsert_contact("Alice", &["0501234567", "0509999999"])
        .unwrap();
    book.set_birthday("Alice", Some("24.06.1991")).unwrap();
    book.update_phone("Alice", "0509999999", "0508888888")
        .unwrap();
    book.remove_phone_from("Alice", "0501234567").unwrap();

    let record = book.find("Alice").unwrap();
    assert_eq!(record.phones_display(), "0508888888");
    assert_eq!(
        record.to_string(),
        "Contact name: Alice, birthday: 24.06.1991, phones: 0508888888"
    );

    book.delete("Alice");
    assert!(book.is_empty());
}

#[test]
fn test_searches_share_the_same_store_order() {
    let mut book = AddressBook::new();
    book.upsert_contact("Anna Harris", &["1111111111"]).unwrap();
    book.upsert_contact("Hanna Doe", &["2222222222"]).unwrap();
    book.upsert_contact("Bob Harris", &["1111111111"]).unwrap();

    let by_name: Vec<_> = book
        .find_by_name_part("nna")
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(by_name, vec!["Anna Harris", "Hanna Doe"]);

    let by_phone: Vec<_> = book
        .find_by_phone("1111111111")
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(by_phone, vec!["Anna Harris", "Bob Harris"]);
}
