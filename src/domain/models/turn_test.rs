use super::Author;
use super::Turn;

#[test]
fn it_executes_new() {
    let turn = Turn::new(Author::User, "Hi there!");
    assert_eq!(turn.author, Author::User);
    assert_eq!(turn.parts(), &["Hi there!".to_string()]);
    assert_eq!(turn.text(), "Hi there!");
}

#[test]
fn it_joins_parts_with_newlines() {
    let turn = Turn {
        author: Author::Model,
        parts: vec!["first".to_string(), "second".to_string()],
    };
    assert_eq!(turn.text(), "first\nsecond");
}

#[test]
fn it_maps_authors_to_wire_roles() {
    assert_eq!(Author::User.as_role(), "user");
    assert_eq!(Author::Model.as_role(), "model");
}
