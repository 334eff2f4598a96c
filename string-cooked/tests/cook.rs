#![allow(clippy::expect_used, clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use string_cooked::CoercionTarget;
use string_cooked::CookError;
use string_cooked::Symbol;
use string_cooked::Value;
use string_cooked::cook;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn object(entries: Vec<(&str, Value)>) -> Value {
    entries.into_iter().collect()
}

#[test]
fn cooks_the_proposal_example() {
    let cooked = cook(&["mmm ... ", " cooked string"], &["delicious"]).unwrap();
    assert_eq!(cooked, "mmm ... delicious cooked string");
}

#[test]
fn interleaves_segments_and_substitutions() {
    assert_eq!(cook!(["a", "b", "c"], 1, 2).unwrap(), "a1b2c");
    assert_eq!(cook!(["a", "b", "c"], 1).unwrap(), "a1b");
    assert_eq!(cook!(Vec::<&str>::new()).unwrap(), "");
    assert_eq!(cook!(["x"]).unwrap(), "x");
}

#[test]
fn interleaving_law_holds_for_every_shape() {
    let segments = strings(&["s0", "s1", "s2", "s3", "s4"]);
    let substitutions = strings(&["A", "B", "C", "D", "E", "F"]);

    for segment_count in 0..=segments.len() {
        for substitution_count in 0..=substitutions.len() {
            let template = &segments[..segment_count];
            let subs = &substitutions[..substitution_count];

            let mut expected = String::new();
            for (index, segment) in template.iter().enumerate() {
                expected.push_str(segment);
                if index + 1 < segment_count {
                    expected.push_str(subs.get(index).map_or("", String::as_str));
                }
            }

            let cooked = cook(template, subs).unwrap();
            assert_eq!(
                cooked, expected,
                "{segment_count} segments, {substitution_count} substitutions"
            );
        }
    }
}

#[test]
fn cooking_twice_gives_the_same_string() {
    let template = Value::from(vec!["total: ", " (", ")"]);
    let subs = [Value::from(12.5), Value::from(true)];
    let first = cook(&template, &subs).unwrap();
    let second = cook(&template, &subs).unwrap();
    assert_eq!(first, "total: 12.5 (true)");
    assert_eq!(first, second);
}

#[test]
fn round_trips_a_composed_string() {
    let name = "Ada";
    let count = 3;
    let composed = format!("Hello {name}, you have {count} new messages.");

    let cooked = cook!(["Hello ", ", you have ", " new messages."], name, count).unwrap();
    assert_eq!(cooked, composed);
}

#[test]
fn nullish_templates_fail_to_convert() {
    assert_eq!(cook(&Value::Null, &["x"]), Err(CookError::Conversion));
    assert_eq!(cook(&Value::Undefined, &["x"]), Err(CookError::Conversion));
    assert_eq!(
        cook(&None::<Vec<&str>>, &[] as &[&str]),
        Err(CookError::Conversion)
    );
}

#[test]
fn nullish_check_comes_before_length() {
    // The wrapper would short-circuit on length 0 if the check ran later.
    let err = cook(&Value::Null, &[Value::Symbol(Symbol::anonymous())]).unwrap_err();
    assert_eq!(err, CookError::Conversion);
}

#[test]
fn zero_or_invalid_length_short_circuits() {
    // Index keys exist, and a symbol sits in the substitutions, but neither is read.
    let poisoned = Value::Symbol(Symbol::new("never read"));
    for length in [
        Value::from(0),
        Value::from(-5),
        Value::from(f64::NAN),
        Value::from(f64::NEG_INFINITY),
        Value::from("not a number"),
        Value::Undefined,
    ] {
        let template = object(vec![("length", length.clone()), ("0", poisoned.clone())]);
        let cooked = cook(&template, std::slice::from_ref(&poisoned)).unwrap();
        assert_eq!(cooked, "", "length {length:?}");
    }
}

#[test]
fn primitive_templates_without_length_cook_to_empty() {
    for template in [Value::from(42), Value::Bool(true), Value::Symbol(Symbol::anonymous())] {
        assert_eq!(cook(&template, &["ignored"]).unwrap(), "");
    }
}

#[test]
fn length_larger_than_contents_reports_missing_segment() {
    let template = object(vec![("length", Value::from(2)), ("0", Value::from("a"))]);
    assert_eq!(
        cook(&template, &["b"]),
        Err(CookError::MissingSegment { index: 1 })
    );

    let explicit_undefined = object(vec![
        ("length", Value::from(2)),
        ("0", Value::from("a")),
        ("1", Value::Undefined),
    ]);
    assert_eq!(
        cook(&explicit_undefined, &["b"]),
        Err(CookError::MissingSegment { index: 1 })
    );
}

#[test]
fn infinite_length_clamps_then_misses_the_next_segment() {
    let template = object(vec![("length", Value::from(f64::INFINITY)), ("0", Value::from("a"))]);
    assert_eq!(
        cook(&template, &["b"]),
        Err(CookError::MissingSegment { index: 1 })
    );
}

#[test]
fn fractional_length_truncates_before_the_short_circuit() {
    let below_one = object(vec![("length", Value::from(0.5)), ("0", Value::from("a"))]);
    assert_eq!(cook(&below_one, &["b"]).unwrap(), "");

    let above_one = object(vec![
        ("length", Value::from(1.9)),
        ("0", Value::from("a")),
        ("1", Value::from("c")),
    ]);
    assert_eq!(cook(&above_one, &["b"]).unwrap(), "a");
}

#[test]
fn symbols_fail_string_conversion() {
    let symbol = Value::Symbol(Symbol::new("s"));
    let expected = Err(CookError::SymbolConversion {
        target: CoercionTarget::String,
    });

    let with_symbol_segment = Value::Array(vec![Value::from("a"), symbol.clone()]);
    assert_eq!(cook(&with_symbol_segment, &[Value::from(1)]), expected);

    let template = Value::from(vec!["a", "b"]);
    assert_eq!(cook(&template, &[symbol]), expected);
}

#[test]
fn symbol_length_fails_number_conversion() {
    let template = object(vec![("length", Value::Symbol(Symbol::anonymous()))]);
    assert_eq!(
        cook(&template, &[] as &[Value]),
        Err(CookError::SymbolConversion {
            target: CoercionTarget::Number,
        })
    );
}

#[test]
fn array_like_objects_cook_like_arrays() {
    let template = object(vec![
        ("length", Value::from("3")),
        ("0", Value::from("<")),
        ("1", Value::from(1)),
        ("2", Value::from(">")),
        ("3", Value::from("beyond length")),
    ]);
    let subs = [Value::from(vec![1, 2]), Value::Null, Value::from("extra")];
    assert_eq!(cook(&template, &subs).unwrap(), "<1,21null>");
}

#[test]
fn substitutions_use_standard_coercion() {
    let template = Value::from(vec!["", "|", "|", "|", "|", "|", ""]);
    let subs = [
        Value::from(1e21),
        Value::from(-0.0),
        Value::from(0.000001),
        Value::Null,
        Value::Undefined,
        Value::from_iter([("k", Value::from(1))]),
    ];
    assert_eq!(
        cook(&template, &subs).unwrap(),
        "1e+21|0|0.000001|null|undefined|[object Object]"
    );
}

#[test]
fn templates_decode_from_json() -> anyhow::Result<()> {
    let template: Value = serde_json::from_str(r#"["Hi ", "! You are ", "."]"#)?;
    let subs: Vec<Value> = serde_json::from_str(r#"["Grace", 85]"#)?;
    assert_eq!(cook(&template, &subs)?, "Hi Grace! You are 85.");

    let array_like: Value = serde_json::from_str(r#"{"length": 2, "0": "[", "1": "]"}"#)?;
    assert_eq!(cook(&array_like, &[Value::from(true)])?, "[true]");
    Ok(())
}
