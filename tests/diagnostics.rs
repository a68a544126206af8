use minicalc::{ast::SyntaxTree, error::Diagnostic, text::TextSpan};

fn rendered(source: &str) -> Vec<String> {
    SyntaxTree::parse(source).diagnostics()
                             .iter()
                             .map(|d| d.render(source))
                             .collect()
}

#[test]
fn underlines_bad_character() {
    assert_eq!(rendered("2+$3"),
               ["Error at 2: bad character input: `$`\n    2+$3\n      ^"]);
}

#[test]
fn underlines_whole_token() {
    assert_eq!(rendered("1 22"),
               ["Error at 2: unexpected token NumberToken, expected EndOfFileToken\n    1 22\n      \
                 ^^"]);
}

#[test]
fn missing_token_gets_one_caret_at_end_of_line() {
    assert_eq!(rendered("(2+3"),
               ["Error at 4: unexpected token EndOfFileToken, expected \
                 CloseParenthesisToken\n    (2+3\n        ^"]);
}

#[test]
fn columns_follow_characters() {
    let lines = rendered("\u{1F600}+");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Error at 0: bad character input: `\u{1F600}`\n    \u{1F600}+\n    ^");
    assert_eq!(lines[1],
               "Error at 2: unexpected token PlusToken, expected NumberToken\n    \u{1F600}+\n     ^");
}

#[test]
fn tabs_are_kept_in_the_underline() {
    let diagnostic = Diagnostic::new(TextSpan::new(2, 1), "here");
    assert_eq!(diagnostic.render("\t1$"), "Error at 2: here\n    \t1$\n    \t ^");
}
