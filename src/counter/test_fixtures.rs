//! Shared test fixtures for counter tests.

use crate::language::CommentSyntax;

pub fn c_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["//"], vec![("/*", "*/")])
}

pub fn shell_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["#"], vec![])
}

/// Python syntax with triple-quoted strings as block comments
pub fn python_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["#"], vec![("\"\"\"", "\"\"\""), ("'''", "'''")])
}
