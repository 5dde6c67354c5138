use test_utils::lines_to_text;

use super::Transcript;
use crate::domain::models::Author;
use crate::domain::models::Turn;

#[test]
fn it_labels_turns_by_author() {
    let turns = vec![
        Turn::new(Author::Model, "hi there"),
        Turn::new(Author::User, "hello"),
    ];
    let text = lines_to_text(&Transcript::as_lines(&turns, 40));

    assert_eq!(text, "Gemini\nhi there\n \nYou\nhello\n ");
}

#[test]
fn it_renders_an_empty_history_to_nothing() {
    assert!(Transcript::as_lines(&[], 40).is_empty());
}
