use pretty_assertions::assert_eq;
use sprig::*;

#[test]
fn test_standard_prelude() {
    let env = Environment::new();
    assert_eq!(env.get("true"), Some(&Value::TRUE));
    assert_eq!(env.get("false"), Some(&Value::FALSE));
    assert_eq!(env.prelude().names().collect::<Vec<_>>(), vec!["true", "false"]);
    assert!(env.is_empty());
}

#[test]
fn test_define_and_lookup() {
    let mut env = Environment::new();
    assert!(env.define("a", Value::Integer(1)));
    assert_eq!(env.lookup("a"), Ok(&Value::Integer(1)));
    assert_eq!(
        env.lookup("b"),
        Err(EvalError::UndefinedVariable {
            name: "b".to_string()
        })
    );
}

#[test]
fn test_prelude_names_cannot_be_rebound_or_removed() {
    let mut env = Environment::new();
    assert!(!env.define("false", Value::Integer(0)));
    assert_eq!(env.undefine("false"), None);
    env.bind_slot("true", None);
    assert_eq!(env.get("true"), Some(&Value::TRUE));
    assert_eq!(env.get("false"), Some(&Value::FALSE));
}

#[test]
fn test_bindings_keep_first_definition_order() {
    let mut env = Environment::new();
    env.define("b", Value::Integer(1));
    env.define("a", Value::Integer(2));
    env.define("b", Value::Integer(3));
    let names: Vec<&str> = env.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(env.get("b"), Some(&Value::Integer(3)));
}

#[test]
fn test_bind_slot() {
    let mut env = Environment::new();
    env.bind_slot("a", Some(&Value::Integer(1)));
    assert!(env.contains("a"));
    env.bind_slot("a", None);
    assert!(!env.contains("a"));
}

#[test]
fn test_clear_keeps_prelude() {
    let mut env = Environment::new();
    env.define("a", Value::Integer(1));
    env.clear();
    assert_eq!(env.len(), 0);
    assert!(env.contains("true"));
}

#[test]
fn test_empty_prelude() {
    let mut env = Environment::with_prelude(Prelude::empty());
    assert!(!env.contains("true"));
    assert!(env.define("true", Value::Integer(1)));
    assert_eq!(env.get("true"), Some(&Value::Integer(1)));
}
