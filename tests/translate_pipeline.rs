//! End-to-end translation tests — pseudocode text → tokens → Python code.

use pseudopy::translate::{
    translate, ErrorKind, LexErrorPolicy, TokenKind, TranslateError, TranslateOptions, Translator,
};

fn code(src: &str) -> String {
    match translate(src) {
        Ok(t) => t.code,
        Err(e) => panic!("translation of {src:?} failed: {e}"),
    }
}

// =============================================================================
// Basic statements
// =============================================================================

#[test]
fn arithmetic_round_trip() {
    assert_eq!(code("x = 1 + 2"), "x = (1 + 2)");
    assert_eq!(code("x = 1 + 2 - 3"), "x = ((1 + 2) - 3)");
}

#[test]
fn conditional() {
    assert_eq!(
        code("IF x greater 5 THEN PRINT x END"),
        "if x > 5:\n    print(x)"
    );
}

#[test]
fn loop_upper_bound_is_inclusive() {
    assert_eq!(
        code("FOR i = 1 TO 3 THEN PRINT i END"),
        "for i in range(1, 3 + 1):\n    print(i)"
    );
}

#[test]
fn while_loop() {
    assert_eq!(
        code("WHILE n less 10 THEN n = n + 1 END"),
        "while n < 10:\n    n = (n + 1)"
    );
}

#[test]
fn print_string_literal() {
    assert_eq!(code(r#"PRINT "Hello, World""#), r#"print("Hello, World")"#);
}

#[test]
fn if_else_and_elif() {
    assert_eq!(
        code("IF x equals 0 THEN PRINT \"zero\" ELSE PRINT x END"),
        "if x == 0:\n    print(\"zero\")\nelse:\n    print(x)"
    );
    assert_eq!(
        code("IF x less 0 THEN PRINT 0 ELIF x greater 0 THEN PRINT 1 END"),
        "if x < 0:\n    print(0)\nelif x > 0:\n    print(1)"
    );
}

// =============================================================================
// Whole programs
// =============================================================================

#[test]
fn statement_order_is_preserved() {
    let src = "a = 1\nb = 2\nPRINT b\nPRINT a\n";
    assert_eq!(code(src), "a = 1\nb = 2\nprint(b)\nprint(a)");
}

#[test]
fn multi_line_program_with_nested_blocks() {
    let src = r#"
total = 0
FOR i = 1 TO 10 THEN
    IF i greater 5 THEN
        total = total + i
        PRINT total
    ELSE
        PRINT "small"
    END
END
PRINT total
"#;
    let expected = "\
total = 0
for i in range(1, 10 + 1):
    if i > 5:
        total = (total + i)
        print(total)
    else:
        print(\"small\")
print(total)";
    assert_eq!(code(src), expected);
}

#[test]
fn custom_indent_width() {
    let translator = Translator::new(TranslateOptions {
        emit: pseudopy::translate::EmitOptions { indent_width: 2 },
        ..Default::default()
    });
    let out = translator
        .translate("WHILE x less 3 THEN IF x equals 1 THEN PRINT x END END")
        .unwrap();
    assert_eq!(out.code, "while x < 3:\n  if x == 1:\n    print(x)");
}

#[test]
fn integer_literals_of_any_width() {
    assert_eq!(code("x = 99999999999999999999999"), "x = 99999999999999999999999");
    assert_eq!(
        code("FOR i = 007 TO 123456789012345678901234567890 THEN PRINT i END"),
        "for i in range(7, 123456789012345678901234567890 + 1):\n    print(i)"
    );
    assert_eq!(code("x = 000"), "x = 0");
}

// =============================================================================
// Large inputs
// =============================================================================

#[test]
fn very_long_sum_translates() {
    let terms = 200_000;
    let mut src = String::from("x = 1");
    src.push_str(&" + 1".repeat(terms));

    let expected = format!("x = {}1{}", "(".repeat(terms), " + 1)".repeat(terms));
    assert_eq!(code(&src), expected);
}

#[test]
fn deeply_nested_blocks_are_rejected_cleanly() {
    let depth = 5_000;
    let mut src = "WHILE x less 1 THEN ".repeat(depth);
    src.push_str("PRINT x");
    src.push_str(&" END".repeat(depth));

    match translate(&src) {
        Err(TranslateError::Syntax { error, .. }) => {
            assert_eq!(error.message, "blocks nested more than 100 levels deep");
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
}

// =============================================================================
// Tokens
// =============================================================================

#[test]
fn reserved_words_take_priority() {
    let t = translate("IF iffy greater 1 THEN PRINT iffy END").unwrap();
    assert_eq!(t.tokens[0].kind, TokenKind::If);
    assert_eq!(t.tokens[1].kind, TokenKind::Identifier("iffy".into()));
}

#[test]
fn token_listing_triples() {
    let t = translate("x = 5\nPRINT x").unwrap();
    let listing: Vec<String> = t.tokens.iter().map(|t| t.to_string()).collect();
    assert_eq!(
        listing,
        vec![
            "(IDENTIFIER, x, 1)",
            "(ASSIGN, =, 1)",
            "(NUMBER, 5, 1)",
            "(PRINT, PRINT, 2)",
            "(IDENTIFIER, x, 2)",
        ]
    );
}

#[test]
fn translation_is_deterministic() {
    let src = "FOR i = 1 TO 3 THEN x = x + i END PRINT x";
    assert_eq!(translate(src), translate(src));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn blank_input_reports_no_input() {
    assert_eq!(translate(" \n\t\n"), Err(TranslateError::NoInput));
}

#[test]
fn missing_then_is_syntax_error() {
    match translate("IF x greater 5 PRINT x END") {
        Err(TranslateError::Syntax { error, .. }) => assert_eq!(error.kind, ErrorKind::Syntax),
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn illegal_characters_are_all_reported() {
    match translate("x = 5 @\nPRINT x ?") {
        Err(TranslateError::Lexical { errors, tokens }) => {
            let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
            assert_eq!(
                messages,
                vec!["illegal character '@'", "illegal character '?'"]
            );
            assert_eq!(errors[1].line, 2);
            let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
            assert_eq!(
                kinds,
                vec![
                    TokenKind::Identifier("x".into()),
                    TokenKind::Assign,
                    TokenKind::Number("5".into()),
                    TokenKind::Print,
                    TokenKind::Identifier("x".into()),
                ]
            );
        }
        other => panic!("expected lexical error, got {other:?}"),
    }
}

#[test]
fn keep_going_translates_around_illegal_characters() {
    let translator = Translator::new(TranslateOptions {
        lex_errors: LexErrorPolicy::Continue,
        ..Default::default()
    });
    let t = translator.translate("x = 5 @\nPRINT x").unwrap();
    assert_eq!(t.code, "x = 5\nprint(x)");
    assert_eq!(t.warnings.len(), 1);
}

#[test]
fn multiple_elif_clauses_are_rejected() {
    let src = "IF x equals 1 THEN PRINT 1 ELIF x equals 2 THEN PRINT 2 ELIF x equals 3 THEN PRINT 3 END";
    assert!(matches!(translate(src), Err(TranslateError::Syntax { .. })));
}

#[test]
fn error_message_is_human_readable() {
    let err = translate("PRINT").unwrap_err();
    assert_eq!(
        err.to_string(),
        "[1:6] syntax error: expected an expression, found end of input"
    );
}
