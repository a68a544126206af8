use minicalc::{
    ast::SyntaxKind,
    interpreter::lexer::{Scanner, tokenize},
};

fn kinds(source: &str) -> Vec<SyntaxKind> {
    tokenize(source).0.iter().map(|t| t.kind).collect()
}

#[test]
fn scans_every_operator() {
    use SyntaxKind::*;

    assert_eq!(kinds("1+2-3*4/(5)"),
               [NumberToken,
                PlusToken,
                NumberToken,
                MinusToken,
                NumberToken,
                AsteriskToken,
                NumberToken,
                SlashToken,
                OpenParenthesisToken,
                NumberToken,
                CloseParenthesisToken,
                EndOfFileToken]);
}

#[test]
fn tokens_carry_position_text_and_value() {
    let (tokens, diagnostics) = tokenize("12 + 345");
    assert!(diagnostics.is_empty());

    let number = &tokens[0];
    assert_eq!((number.position, number.text.as_str(), number.value), (0, "12", Some(12)));

    let plus = &tokens[2];
    assert_eq!((plus.kind, plus.position, plus.value), (SyntaxKind::PlusToken, 3, None));

    let last = &tokens[4];
    assert_eq!((last.position, last.text.as_str(), last.value), (5, "345", Some(345)));
    assert_eq!(last.span().end(), 8);
}

#[test]
fn whitespace_runs_become_one_token() {
    let (tokens, _) = tokenize("1 \t\n 2");
    assert_eq!(tokens[1].kind, SyntaxKind::WhitespaceToken);
    assert_eq!(tokens[1].text, " \t\n ");
    assert_eq!(tokens[2].position, 5);
}

#[test]
fn end_of_file_repeats_forever() {
    let mut scanner = Scanner::new("7");
    assert_eq!(scanner.next_token().kind, SyntaxKind::NumberToken);
    for _ in 0..3 {
        let token = scanner.next_token();
        assert_eq!(token.kind, SyntaxKind::EndOfFileToken);
        assert_eq!(token.position, 1);
    }
}

#[test]
fn empty_source_is_just_end_of_file() {
    assert_eq!(kinds(""), [SyntaxKind::EndOfFileToken]);
}

#[test]
fn bad_character_is_reported() {
    let (tokens, diagnostics) = tokenize("2+$3");
    assert_eq!(tokens[2].kind, SyntaxKind::BadToken);
    assert_eq!(tokens[2].text, "$");
    assert_eq!(tokens[3].value, Some(3));

    assert_eq!(diagnostics.len(), 1);
    let diagnostic = diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.message, "bad character input: `$`");
    assert_eq!(diagnostic.span.start, 2);
}

#[test]
fn positions_count_utf16_code_units() {
    let (tokens, diagnostics) = tokenize("1+é2");
    assert_eq!(tokens[2].kind, SyntaxKind::BadToken);
    assert_eq!(tokens[2].position, 2);
    assert_eq!(tokens[3].position, 3);
    assert_eq!(tokens[4].position, 4);
    assert!(diagnostics.iter().any(|d| d.message.contains('é')));
}

#[test]
fn astral_characters_take_two_positions() {
    let (tokens, diagnostics) = tokenize("\u{1F600}1");
    assert_eq!(tokens[0].kind, SyntaxKind::BadToken);
    assert_eq!(tokens[0].span().length, 2);
    assert_eq!(tokens[1].position, 2);
    assert_eq!(tokens[2].position, 3);

    let diagnostic = diagnostics.iter().next().unwrap();
    assert_eq!((diagnostic.span.start, diagnostic.span.length), (0, 2));
}

#[test]
fn oversized_number_is_a_bad_token() {
    let (tokens, diagnostics) = tokenize("99999999999999999999");
    assert_eq!(tokens[0].kind, SyntaxKind::BadToken);
    assert_eq!(tokens[0].value, None);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.iter().all(|d| d.message.contains("99999999999999999999")));
}

#[test]
fn largest_integer_still_scans() {
    let (tokens, diagnostics) = tokenize("9223372036854775807");
    assert!(diagnostics.is_empty());
    assert_eq!(tokens[0].value, Some(i64::MAX));
}
