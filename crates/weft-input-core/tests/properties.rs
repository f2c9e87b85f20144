use proptest::prelude::*;
use weft_input_core::{
    InputMode, NumberField, NumberInput, NumberMode, Reconcile, format_number, sanitize,
};

// Digit-only text passes integer sanitization untouched.
proptest! {
    #[test]
    fn prop_integer_digits_unchanged(digits in "[0-9]{1,15}") {
        let s = sanitize(&digits, NumberMode::Integer);
        prop_assert_eq!(s.text.as_str(), digits.as_str());
        prop_assert_eq!(s.value, Some(digits.parse::<u64>().unwrap() as f64));
    }
}

// Extra points collapse into one; digits keep their order.
proptest! {
    #[test]
    fn prop_decimal_single_point(raw in "[0-9.]{0,20}") {
        let s = sanitize(&raw, NumberMode::Decimal);
        let points = s.text.matches('.').count();
        prop_assert!(points <= 1);
        prop_assert_eq!(points == 1, raw.contains('.'));

        let digits_in: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        let digits_out: String = s.text.chars().filter(|c| c.is_ascii_digit()).collect();
        prop_assert_eq!(digits_in, digits_out);

        if let Some(first) = raw.find('.') {
            prop_assert_eq!(s.text.find('.'), Some(raw[..first].len()));
        }
    }
}

// Nothing numeric in, nothing reported out.
proptest! {
    #[test]
    fn prop_empty_reports_none(raw in "[^0-9.]{0,12}", decimal in any::<bool>()) {
        let s = sanitize(&raw, NumberMode::from_decimal_flag(decimal));
        prop_assert!(s.text.is_empty());
        prop_assert_eq!(s.value, None);
    }
}

// Arbitrary input never leaves anything but digits and at most one point.
proptest! {
    #[test]
    fn prop_sanitized_text_is_clean(raw in ".{0,24}", decimal in any::<bool>()) {
        let mode = NumberMode::from_decimal_flag(decimal);
        let s = sanitize(&raw, mode);
        prop_assert!(s.text.chars().all(|c| c.is_ascii_digit() || (decimal && c == '.')));
        prop_assert_eq!(s.value.is_none(), s.text.is_empty());
    }
}

// Construction shows the value's text.
proptest! {
    #[test]
    fn prop_initial_buffer_round_trip(n in -1_000_000_000i64..1_000_000_000i64) {
        let field = NumberField::new(Some(n as f64), NumberMode::Integer);
        prop_assert_eq!(field.raw(), n.to_string());
        let text = format_number(n as f64);
        prop_assert_eq!(text.as_str(), n.to_string());
    }
}

// A trailing point survives any external update until edited away.
proptest! {
    #[test]
    fn prop_trailing_point_survives(whole in 0u32..100_000, other in proptest::option::of(0u32..100_000)) {
        let mut field = NumberField::new(Some(whole as f64), NumberMode::Decimal);
        let typed = format!("{whole}.");
        prop_assert_eq!(field.edit(&typed), Some(whole as f64));

        let outcome = field.set_value(other.map(f64::from));
        prop_assert!(!matches!(outcome, Some(Reconcile::Replace(_))));
        prop_assert_eq!(field.raw(), typed.as_str());
    }
}

#[test]
fn test_point_shortcut_values() {
    assert_eq!(sanitize(".", NumberMode::Decimal).value, Some(0.0));
    assert_eq!(sanitize("5.", NumberMode::Decimal).value, Some(5.0));
    assert_eq!(sanitize(".5", NumberMode::Decimal).value, Some(0.5));
}

#[test]
fn test_null_construction() {
    assert_eq!(NumberField::new(None, NumberMode::Integer).raw(), "");
}

#[test]
fn test_input_mode_fixed_after_construction() {
    let mut input = NumberInput::decimal(Some(1.0), |_| {});
    assert_eq!(input.input_mode(), InputMode::Decimal);

    input.render(|mut props| {
        props.on_change.fire("abc");
    });
    input.set_value(None);
    input.set_value(Some(3.0));

    let hint = input.render(|props| props.input_mode);
    assert_eq!(hint, InputMode::Decimal);
    assert_eq!(NumberInput::integer(None, |_| {}).input_mode(), InputMode::Numeric);
}

#[test]
fn test_typing_session() {
    // Owner that accepts every reported value.
    let mut owner: Option<f64> = Some(12.0);
    let mut field = NumberField::new(owner, NumberMode::Decimal);

    for keystrokes in ["12.", "12.0", "12.05", "12.05x", "1205", ""] {
        owner = field.edit(keystrokes);
        field.set_value(owner);
    }

    assert_eq!(owner, None);
    assert_eq!(field.raw(), "");
}
