#![forbid(unsafe_code)]

//! End-to-end keyboard sessions: catalog keys dispatched into the
//! expression builder, with drag reordering in between.

use mathpad_core::{ExpressionBuilder, Op, Signal, Token};
use mathpad_grid::{DragReorder, GridBounds, GridSpec, KeyDef, default_layout};

fn press(builder: &mut ExpressionBuilder, keys: &[KeyDef], id: &str) -> Option<Signal> {
    let key = keys
        .iter()
        .find(|k| k.id == id)
        .unwrap_or_else(|| panic!("no key with id {id}"));
    builder.dispatch(&key.action)
}

fn number(v: &str) -> Token {
    Token::Number(v.to_string())
}

#[test]
fn typing_and_committing_a_line() {
    let keys = default_layout();
    let mut builder = ExpressionBuilder::new();

    for id in ["N1", "N2", "PL", "N3", "DT", "N5"] {
        assert!(press(&mut builder, &keys, id).is_none());
    }
    assert_eq!(
        builder.tokens(),
        &[number("12"), Token::Operator(Op::Add), number("3.5")]
    );

    assert_eq!(press(&mut builder, &keys, "NL"), Some(Signal::Commit));
    let line = builder.commit_line().expect("non-empty line commits");
    assert_eq!(line.len(), 3);
    assert!(builder.tokens().is_empty());
}

#[test]
fn quick_keys_and_builder_bar_interplay() {
    let keys = default_layout();
    let mut builder = ExpressionBuilder::new();

    // ½ then × then a mixed number typed through the builder bar.
    press(&mut builder, &keys, "H1");
    press(&mut builder, &keys, "mu");
    press(&mut builder, &keys, "MX");
    press(&mut builder, &keys, "N2");
    builder.advance_fraction();
    press(&mut builder, &keys, "N1");
    builder.advance_fraction();
    press(&mut builder, &keys, "N3");
    builder.advance_fraction();

    assert_eq!(
        builder.tokens(),
        &[
            Token::Fraction {
                numerator: "1".into(),
                denominator: "2".into(),
            },
            Token::Operator(Op::Times),
            Token::MixedNumber {
                whole: "2".into(),
                numerator: "1".into(),
                denominator: "3".into(),
            },
        ]
    );
}

#[test]
fn square_and_exponent_keys() {
    let keys = default_layout();
    let mut builder = ExpressionBuilder::new();

    press(&mut builder, &keys, "N5");
    press(&mut builder, &keys, "s2");
    assert_eq!(
        builder.tokens(),
        &[Token::Exponent {
            base: "5".into(),
            power: "2".into(),
        }]
    );

    press(&mut builder, &keys, "N7");
    press(&mut builder, &keys, "en");
    press(&mut builder, &keys, "N3");
    builder.confirm_exponent();
    assert_eq!(builder.tokens().len(), 2);
    assert_eq!(
        builder.tokens()[1],
        Token::Exponent {
            base: "7".into(),
            power: "3".into(),
        }
    );
}

#[test]
fn reordered_keys_keep_their_actions() {
    let mut keys = default_layout();
    let mut drag = DragReorder::new(GridSpec::default());
    let bounds = GridBounds::new(0.0, 0.0, 308.0, 220.0);

    // Swap the ÷ key (index 6) with the ⌫ key (index 4).
    drag.toggle_edit_mode();
    drag.begin_drag(6, 300.0, 20.0);
    let cell_w = (308.0 - 4.0 * 6.0) / 7.0;
    drag.update_drag(4.0 * (cell_w + 4.0) + 1.0, 1.0, bounds, keys.len());
    assert_eq!(drag.end_drag(&mut keys), Some((6, 4)));
    drag.toggle_edit_mode();

    assert_eq!(keys[4].id, "dv");
    assert_eq!(keys[6].id, "BK");

    // The moved key still dispatches its own action.
    let mut builder = ExpressionBuilder::new();
    builder.submit_digit('8');
    builder.dispatch(&keys[4].action);
    assert_eq!(
        builder.tokens(),
        &[number("8"), Token::Operator(Op::Divide)]
    );
}

#[test]
fn free_text_flows_into_committed_line() {
    let keys = default_layout();
    let mut builder = ExpressionBuilder::new();

    press(&mut builder, &keys, "ab");
    builder.push_text("total");
    press(&mut builder, &keys, "N4"); // digits still route to math tokens
    assert_eq!(press(&mut builder, &keys, "NL"), Some(Signal::Commit));

    let line = builder.commit_line().expect("line with text commits");
    assert_eq!(line, vec![Token::Text("total".into()), number("4")]);
}
