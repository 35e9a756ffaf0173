//! Declaration evaluation
//!
//! Every declared name produces exactly one result slot. A slot holds the
//! value of its initializer, or nothing when that initializer failed. A
//! failure is local to its slot: siblings and later declarations are still
//! evaluated, and bindings made earlier are kept.

use tracing::{debug, trace};

use crate::ast::{Declaration, TypeExpr, ValueSpec};
use crate::{Environment, EvalContext, EvalError, Value};

use super::Evaluate;

/// Evaluate a batch of declarations in order, binding as it goes.
pub fn eval_declarations(
    decls: &[Declaration],
    env: &mut Environment,
    ctx: &EvalContext,
) -> Vec<Option<Value>> {
    let mut slots = Vec::new();
    for decl in decls {
        slots.extend(eval_declaration(decl, env, ctx));
    }
    slots
}

/// Evaluate one declaration. `func`, `type` and `import` declarations
/// produce no slots.
pub fn eval_declaration(
    decl: &Declaration,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Vec<Option<Value>> {
    match decl {
        Declaration::Value(decl) => {
            let mut slots = Vec::with_capacity(decl.specs.len());
            for spec in &decl.specs {
                slots.extend(eval_value_spec(spec, env, ctx));
            }
            slots
        }
        Declaration::Skipped(skipped) => {
            trace!(kind = ?skipped.kind, tokens = %skipped.tokens, "skipping declaration");
            Vec::new()
        }
    }
}

/// Evaluate one `names [type] [= values]` spec.
///
/// Names pair with values by index. A name past the end of the value list
/// falls back to the zero value of the declared type, if the spec has no
/// values at all, zero values are enabled and the type is a bare name;
/// otherwise its slot is empty.
pub fn eval_value_spec(
    spec: &ValueSpec,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Vec<Option<Value>> {
    let zero = match &spec.ty {
        Some(TypeExpr::Name(name)) if spec.values.is_empty() && ctx.zero_values => {
            zero_value(&name.to_string())
        }
        _ => None,
    };

    let mut slots = Vec::with_capacity(spec.names.len());
    for (i, ident) in spec.names.iter().enumerate() {
        let name = ident.to_string();
        let result = match spec.values.get(i) {
            Some(expr) => expr.eval(env, ctx),
            None => zero
                .clone()
                .ok_or_else(|| EvalError::MissingInitializer { name: name.clone() }),
        };

        let slot = match result {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(%name, error = %err, "no value");
                None
            }
        };
        env.bind_slot(&name, slot.as_ref());
        slots.push(slot);
    }
    slots
}

/// The zero value for a declared primitive type name.
///
/// `byte` and `rune` default to the character `'0'`.
pub fn zero_value(type_name: &str) -> Option<Value> {
    match type_name {
        "int" => Some(Value::Integer(0)),
        "string" => Some(Value::string("")),
        "byte" | "rune" => Some(Value::Char('0')),
        "float32" => Some(Value::Float(0.0)),
        _ => None,
    }
}
