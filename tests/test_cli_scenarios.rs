//! End-to-end command scenarios.
//!
//! Each test feeds a script through the same loop the binary runs and checks
//! the exact replies.

mod session;
use session::{run_lines, run_session};

#[test]
fn test_add_with_single_argument_asks_for_name_and_phone() {
    let output = run_lines(&["add 1234567890", "exit"]);
    assert_eq!(output, vec!["Give me name and phone please.", "Good bye!"]);
}

#[test]
fn test_add_then_phone() {
    let output = run_lines(&["add John 1234567890", "phone John", "exit"]);
    assert_eq!(output, vec!["Contact added.", "1234567890", "Good bye!"]);
}

#[test]
fn test_phone_unknown_contact() {
    let output = run_lines(&["phone Unknown", "exit"]);
    assert_eq!(output, vec!["Contact not found", "Good bye!"]);
}

#[test]
fn test_phone_without_name() {
    let output = run_lines(&["phone", "exit"]);
    assert_eq!(output, vec!["Enter user name", "Good bye!"]);
}

#[test]
fn test_all_with_no_contacts() {
    let output = run_lines(&["all", "exit"]);
    assert_eq!(output, vec!["No contacts.", "Good bye!"]);
}

#[test]
fn test_change_unknown_contact() {
    let output = run_lines(&["change Ghost 5555555555", "exit"]);
    assert_eq!(output, vec!["Contact not found", "Good bye!"]);
}

#[test]
fn test_exit_terminates_loop() {
    let (session, output) = run_session(&["exit", "add John 1234567890", "all"]);
    assert_eq!(output, vec!["Good bye!"]);
    assert!(session.book().is_empty());
}

#[test]
fn test_close_is_exit() {
    let output = run_lines(&["CLOSE"]);
    assert_eq!(output, vec!["Good bye!"]);
}

#[test]
fn test_end_of_input_says_good_bye() {
    let output = run_lines(&["hello"]);
    assert_eq!(output, vec!["How can i help you?", "Good bye!"]);
}

#[test]
fn test_invalid_phone_is_rejected() {
    let output = run_lines(&["add John 12345", "add John 123-456-78", "phone John", "exit"]);
    assert_eq!(
        output,
        vec![
            "Give me name and phone please.",
            "Give me name and phone please.",
            "Contact not found",
            "Good bye!",
        ]
    );
}

#[test]
fn test_add_existing_name_overwrites() {
    let output = run_lines(&["add John 1111111111", "add John 2222222222", "all"]);
    assert_eq!(
        output,
        vec!["Contact added.", "Contact added.", "John: 2222222222", "Good bye!"]
    );
}

#[test]
fn test_full_session() {
    let (session, output) = run_session(&[
        "Hello",
        "",
        "   ",
        "add John 1234567890",
        "add Jane 0987654321",
        "change John 1111111111",
        "change John 22",
        "phone John",
        "all",
        "delete John",
        "exit",
    ]);

    assert_eq!(
        output,
        vec![
            "How can i help you?",
            "Contact added.",
            "Contact added.",
            "Contact updated.",
            "Give me name and phone please.",
            "1111111111",
            "John: 1111111111",
            "Jane: 0987654321",
            "Invalid command",
            "Good bye!",
        ]
    );

    let summary = session.metrics().summary();
    assert_eq!(summary.commands_total, 9);
    assert_eq!(summary.unknown_commands_total, 1);
    assert_eq!(summary.blank_lines_total, 2);
}
