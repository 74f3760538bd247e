//! Properties of records and the address book through the public API.

use contact_book::{AddressBook, Field, Phone, Record, RecordError, ValidationError};

#[test]
fn test_phone_rejects_wrong_length_or_non_digits() {
    let bad = [
        "",
        "1",
        "123456789",
        "12345678901",
        "123456789a",
        "12345 7890",
        "(123)45678",
        "+380501234",
    ];
    for candidate in bad {
        assert_eq!(
            Phone::new(candidate),
            Err(ValidationError::InvalidPhone(candidate.to_string())),
            "{:?} should be rejected",
            candidate
        );
    }
}

#[test]
fn test_phone_accepts_ten_digits_verbatim() {
    for candidate in ["0000000000", "0123456789", "5555555555"] {
        let phone = Phone::new(candidate).unwrap();
        assert_eq!(phone.value(), candidate);
        assert_eq!(phone.to_string(), candidate);
    }
}

#[test]
fn test_phone_count_follows_add_edit_remove() {
    let mut record = Record::new("John");

    record.add_phone("1111111111").unwrap();
    record.add_phone("2222222222").unwrap();
    assert_eq!(record.phones().len(), 2);

    record.edit_phone("1111111111", "3333333333").unwrap();
    assert_eq!(record.phones().len(), 2);
    assert_eq!(record.phones()[0].value(), "3333333333");

    record.remove_phone("3333333333").unwrap();
    assert_eq!(record.phones().len(), 1);
    assert!(record.find_phone("3333333333").is_none());
}

#[test]
fn test_record_errors() {
    let mut record = Record::new("John");
    assert!(matches!(
        record.add_phone("nope"),
        Err(RecordError::Validation(_))
    ));
    assert_eq!(
        record.remove_phone("1111111111"),
        Err(RecordError::PhoneNotFound("1111111111".to_string()))
    );
}

#[test]
fn test_address_book_lifecycle() {
    let mut book = AddressBook::new();
    let mut record = Record::new("John");
    record.add_phone("1234567890").unwrap();
    record.add_phone("5555555555").unwrap();
    book.add_record(record);

    let found = book.find("John").expect("John should be present");
    assert_eq!(found.name().value(), "John");
    assert_eq!(
        found.to_string(),
        "Contact name: John, phones: 1234567890; 5555555555"
    );
    assert_eq!(book.to_string(), "John: 1234567890, 5555555555");

    let deleted = book.delete("John").expect("John should be deleted");
    assert_eq!(deleted.name().value(), "John");
    assert!(book.find("John").is_none());
    assert!(book.delete("John").is_none());
}
