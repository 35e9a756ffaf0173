use pretty_assertions::assert_eq;
use sprig::frontends::{CharStyle, GoFrontend};
use sprig::*;

// ═══════════════════════════════════════════════════════════════════════
// Persistence across calls
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_bindings_persist_across_calls() {
    let mut env = Environment::new();
    let ctx = EvalContext::default();
    evaluate("var a = 10", &mut env, &ctx).unwrap();
    assert_eq!(
        evaluate("var b = a + 5", &mut env, &ctx).unwrap(),
        vec![Some(Value::Integer(15))]
    );
}

#[test]
fn test_later_names_see_earlier_names_in_same_batch() {
    let mut session = Session::new();
    assert_eq!(
        session.evaluate("var a = 2; var b = a * a").unwrap(),
        vec![Some(Value::Integer(2)), Some(Value::Integer(4))]
    );
}

#[test]
fn test_rebinding_replaces_value() {
    let mut session = Session::new();
    session.evaluate("var a = 1").unwrap();
    session.evaluate(r#"var a = "one""#).unwrap();
    assert_eq!(session.env().get("a"), Some(&Value::string("one")));
    assert_eq!(session.env().len(), 1);
}

#[test]
fn test_undefined_identifier_has_no_value() {
    let mut session = Session::new();
    assert_eq!(
        session.evaluate("var a, b = missing, 1").unwrap(),
        vec![None, Some(Value::Integer(1))]
    );
    assert!(!session.env().contains("a"));
}

#[test]
fn test_failed_slot_unbinds_previous_value() {
    let mut session = Session::new();
    session.evaluate("var x = 1").unwrap();
    session.evaluate("var x = 1 / 0").unwrap();
    assert_eq!(session.evaluate("var y = x").unwrap(), vec![None]);
}

// ═══════════════════════════════════════════════════════════════════════
// Protected names
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_rebinding_true_is_ignored() {
    let mut session = Session::new();
    assert_eq!(
        session.evaluate("var true = 1").unwrap(),
        vec![Some(Value::Integer(1))]
    );
    assert_eq!(
        session.evaluate("var t = true").unwrap(),
        vec![Some(Value::TRUE)]
    );
    assert_eq!(session.env().get("true"), Some(&Value::TRUE));
}

#[test]
fn test_custom_prelude() {
    let prelude = Prelude::standard().with("answer", Value::Integer(42));
    let mut env = Environment::with_prelude(prelude);
    let results = evaluate(
        "var a, answer = answer + 1, 0",
        &mut env,
        &EvalContext::default(),
    )
    .unwrap();
    assert_eq!(
        results,
        vec![Some(Value::Integer(43)), Some(Value::Integer(0))]
    );
    assert_eq!(env.get("answer"), Some(&Value::Integer(42)));
}

// ═══════════════════════════════════════════════════════════════════════
// Zero values
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_zero_values() {
    let mut session = Session::new();
    assert_eq!(session.evaluate("var a int").unwrap(), vec![Some(Value::Integer(0))]);
    assert_eq!(session.evaluate("var a string").unwrap(), vec![Some(Value::string(""))]);
    assert_eq!(session.evaluate("var a rune").unwrap(), vec![Some(Value::Char('0'))]);
    assert_eq!(session.evaluate("var a float32").unwrap(), vec![Some(Value::Float(0.0))]);
}

#[test]
fn test_unknown_type_without_initializer_has_no_value() {
    let mut session = Session::new();
    assert_eq!(session.evaluate("var a, b bool").unwrap(), vec![None, None]);
}

#[test]
fn test_zero_values_can_be_disabled() {
    let ctx = EvalContext::default().with_zero_values(false);
    let mut session = Session::with_frontend(GoFrontend::new(), ctx);
    assert_eq!(session.evaluate("var a int").unwrap(), vec![None]);
}

#[test]
fn test_composite_type_leaves_only_its_slot_empty() {
    let mut session = Session::new();
    assert_eq!(
        session.evaluate("var a = 1; var b []int").unwrap(),
        vec![Some(Value::Integer(1)), None]
    );
    assert_eq!(session.env().get("a"), Some(&Value::Integer(1)));
}

#[test]
fn test_pointer_and_qualified_types_have_no_value() {
    let mut session = Session::new();
    assert_eq!(
        session
            .evaluate("var p *int; var t time.Duration; var m map[string]int; var n = 2")
            .unwrap(),
        vec![None, None, None, Some(Value::Integer(2))]
    );
}

#[test]
fn test_composite_type_with_initializer_uses_the_value() {
    let mut session = Session::new();
    assert_eq!(
        session.evaluate("var d time.Duration = 5").unwrap(),
        vec![Some(Value::Integer(5))]
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Declaration forms
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_grouped_and_const_declarations() {
    let mut session = Session::new();
    assert_eq!(
        session
            .evaluate("const ( x = 2; y = 3 ) var z = x * y")
            .unwrap(),
        vec![
            Some(Value::Integer(2)),
            Some(Value::Integer(3)),
            Some(Value::Integer(6)),
        ]
    );
}

#[test]
fn test_func_declarations_are_skipped() {
    let mut session = Session::new();
    assert_eq!(
        session
            .evaluate("func f(x int) int { return x * 2 }\nvar a = 1")
            .unwrap(),
        vec![Some(Value::Integer(1))]
    );
}

#[test]
fn test_type_and_import_declarations_are_skipped() {
    let mut session = Session::new();
    assert_eq!(
        session.evaluate("type T int; var a = 1").unwrap(),
        vec![Some(Value::Integer(1))]
    );
    assert_eq!(
        session
            .evaluate("import \"fmt\"; import ( \"os\"; s \"strings\" ); var b = a + 1")
            .unwrap(),
        vec![Some(Value::Integer(2))]
    );
    assert_eq!(
        session
            .evaluate("type ( P struct { x int }; Q = []P ) var c = b * 2")
            .unwrap(),
        vec![Some(Value::Integer(4))]
    );
}

#[test]
fn test_raw_string_literal() {
    let mut session = Session::new();
    assert_eq!(
        session.evaluate(r"var s = `raw\n` + `x`").unwrap(),
        vec![Some(Value::string(r"raw\nx"))]
    );
}

#[test]
fn test_raw_string_spanning_lines() {
    let mut session = Session::new();
    assert_eq!(
        session.evaluate("var s = `a\nb`\nvar t = 1").unwrap(),
        vec![Some(Value::string("a\nb")), Some(Value::Integer(1))]
    );
}

#[test]
fn test_leading_dot_float() {
    let mut session = Session::new();
    assert_eq!(
        session.evaluate("var a, b = .5, 2 * .25").unwrap(),
        vec![Some(Value::Float(0.5)), Some(Value::Float(0.5))]
    );
}

#[test]
fn test_empty_source() {
    let mut session = Session::new();
    assert!(session.evaluate("").unwrap().is_empty());
    assert_eq!(session.evaluate_line("").unwrap(), "");
}

// ═══════════════════════════════════════════════════════════════════════
// Parse errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_parse_error_is_fatal_and_binds_nothing() {
    let mut session = Session::new();
    let err = session.evaluate("var a = 1; var b = ").unwrap_err();
    assert!(!err.message.is_empty());
    assert!(session.env().is_empty());
}

#[test]
fn test_parse_error_reports_location() {
    let mut session = Session::new();
    let err = session.evaluate("var a = 1\nvar b = ;").unwrap_err();
    let loc = err.location.as_ref().expect("location");
    assert_eq!(loc.file, "input.go");
    assert_eq!(loc.line, 2);
    assert!(err.to_string().starts_with("Parse error:"));
}

// ═══════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_render_line() {
    let mut session = Session::new();
    assert_eq!(
        session
            .evaluate_line(r#"var a, b, c, d, e = 5 * -5, 5.0 / 2, "go", 'a', 1 / 0"#)
            .unwrap(),
        "-25, 2.500000e+00, go, a, <no value>"
    );
}

#[test]
fn test_render_booleans() {
    let mut session = Session::new();
    assert_eq!(
        session.evaluate_line("var a, b = 1 <= 1, 1 < 1").unwrap(),
        "true, false"
    );
}

#[test]
fn test_render_code_points() {
    let frontend = GoFrontend::with_char_style(CharStyle::CodePoint);
    let mut session = Session::with_frontend(frontend, EvalContext::default());
    assert_eq!(session.evaluate_line("var a = 'a'").unwrap(), "97");
}
