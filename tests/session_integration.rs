//! End-to-end behaviour of a calculator session driven one key at a time.

use tallykey::calc::{evaluate_current, evaluate_final, format_number, Operator, Session, Token};

fn run(keys: &str) -> Session {
    let mut session = Session::new();
    for c in keys.chars() {
        session
            .ingest(c)
            .unwrap_or_else(|e| panic!("key {:?} rejected: {}", c, e));
    }
    session
}

#[test]
fn digit_only_input_evaluates_to_the_numeral() {
    for numeral in ["7", "42", "1234567890", "3.25", "0.5", "100.001"] {
        let mut session = run(numeral);
        session.ingest('=').unwrap();
        let expected: f64 = numeral.parse().unwrap();
        assert_eq!(session.main_text(), format_number(expected), "{}", numeral);

        let tokens = [Token::number(expected)];
        assert_eq!(evaluate_final(&tokens), Ok(expected));
    }
}

#[test]
fn evaluation_is_left_to_right() {
    let tokens = [
        Token::number(3.0),
        Token::operator(Operator::Plus),
        Token::number(4.0),
        Token::operator(Operator::Multiply),
        Token::number(2.0),
    ];
    assert_eq!(evaluate_final(&tokens), Ok(14.0));

    let mut session = run("3+4*2");
    assert_eq!(session.main_text(), "3+4×2");
    session.ingest('=').unwrap();
    assert_eq!(session.main_text(), "14");
}

#[test]
fn sign_handling() {
    let mut session = run("-5");
    assert_eq!(session.main_text(), "-5");
    session.ingest('=').unwrap();
    assert_eq!(session.main_text(), "-5");
}

#[test]
fn operator_replacement_leaves_one_pending_operator() {
    let session = run("5+-");
    assert_eq!(session.main_text(), "5-");
    assert_eq!(session.builder().tokens(), &[Token::number(5.0)]);
    assert_eq!(session.builder().pending(), "-");
}

#[test]
fn equals_then_digit_starts_fresh() {
    let mut session = run("5+3=");
    assert_eq!(session.main_text(), "8");
    session.ingest('2').unwrap();
    assert_eq!(session.main_text(), "2");
}

#[test]
fn equals_then_operator_continues() {
    let mut session = run("5+3=");
    assert_eq!(session.main_text(), "8");
    for c in "+1=".chars() {
        session.ingest(c).unwrap();
    }
    assert_eq!(session.main_text(), "9");
}

#[test]
fn undo_collapses_to_empty() {
    let mut session = run("12");
    session.undo();
    assert_eq!(session.main_text(), "1");
    session.undo();
    assert_eq!(session.main_text(), "0");
    session.undo();
    assert_eq!(session.main_text(), "0");
}

#[test]
fn empty_evaluation_is_zero() {
    assert_eq!(evaluate_final(&[]), Ok(0.0));
    assert_eq!(evaluate_current(&[]), Ok(0.0));
    let mut session = Session::new();
    session.ingest('=').unwrap();
    assert_eq!(session.main_text(), "0");
}

#[test]
fn percentage() {
    let tokens = [
        Token::number(50.0),
        Token::operator(Operator::Percentage),
        Token::number(2.0),
    ];
    assert_eq!(evaluate_final(&tokens), Ok(2500.0));
    assert_eq!(run("50%2=").main_text(), "2500");
}

#[test]
fn division_by_zero_renders_a_sentinel() {
    assert_eq!(run("7/0=").main_text(), "Infinity");
    assert_eq!(run("-7/0=").main_text(), "-Infinity");
    assert_eq!(run("0./0=").main_text(), "NaN");
}

#[test]
fn subtotal_follows_committed_tokens() {
    let mut session = run("10");
    assert_eq!(session.subtotal_text(), "");
    session.ingest('÷').unwrap();
    assert_eq!(session.subtotal_text(), "10");
    session.ingest('4').unwrap();
    assert_eq!(session.subtotal_text(), "10");
    session.ingest('-').unwrap();
    assert_eq!(session.subtotal_text(), "2.5");
    session.ingest('=').unwrap();
    assert_eq!(session.main_text(), "2.5");
    assert_eq!(session.subtotal_text(), "");
}

#[test]
fn malformed_sequences_never_lose_the_last_state() {
    let mut session = run("8×");
    let before = session.readout();
    for c in ['+', '%', '÷'] {
        session.ingest(c).unwrap();
    }
    assert_eq!(session.main_text(), "8÷");
    assert!(session.ingest('#').is_err());
    assert_eq!(session.main_text(), "8÷");
    assert_eq!(before.subtotal_text, session.subtotal_text());
}

#[test]
fn display_always_matches_tokens_and_fragment() {
    let mut session = Session::new();
    for c in "12.5×-3+.25%4--1=".chars() {
        session.ingest(c).unwrap();
        let builder = session.builder();
        if builder.is_blank() || builder.is_evaluated() {
            continue;
        }
        let rendered: String = builder
            .tokens()
            .iter()
            .map(Token::display_text)
            .chain(std::iter::once(builder.pending().to_string()))
            .collect();
        assert_eq!(rendered, builder.display(), "after {:?}", c);
    }
}
