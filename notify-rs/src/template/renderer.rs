//! Template evaluation
//!
//! Renders a parsed template against a variable bag. Rendering is a pure
//! function and never fails: unknown keys leave their markers as literal
//! text, falsy conditionals drop their span, lists expand once per element.

use crate::template::parser::{parse, Node};
use crate::template::value::{Value, VariableBag};
use std::collections::HashMap;

/// Render a template string with the given variables.
///
/// Substitution rules:
/// - `{{KEY}}` is replaced by the scalar's text form; keys missing from the
///   bag (or holding an entity/list) stay literal.
/// - `{{#if KEY}}BODY{{/if}}` becomes `BODY` when the value is truthy and
///   nothing otherwise. A `KEY` not present in the bag keeps the block
///   markers as literal text while `BODY` is still evaluated.
/// - `{{#each KEY}}ITEM{{/each}}` concatenates `ITEM` once per list
///   element; `{{this.prop}}` and `{{#if this.prop}}` resolve against the
///   element, where a missing property is falsy.
pub fn render(template: &str, vars: &VariableBag) -> String {
    let nodes = parse(template);
    let mut out = String::new();
    render_nodes(&nodes, vars, None, &mut out);
    out
}

fn render_nodes(
    nodes: &[Node],
    vars: &VariableBag,
    scope: Option<&HashMap<String, Value>>,
    out: &mut String,
) {
    for node in nodes {
        match node {
            Node::Literal(text) => out.push_str(text),
            Node::Variable { path, raw } => {
                match resolve(path, vars, scope).and_then(Value::as_scalar_text) {
                    Some(text) => out.push_str(&text),
                    None => out.push_str(raw),
                }
            }
            Node::If {
                path,
                body,
                raw_open,
            } => {
                // `this.` paths are resolved per element, so an absent
                // property means falsy. A named key must be in the bag for
                // the block to be processed at all.
                let item_scoped = path == "this" || path.starts_with("this.");
                let head = path.split('.').next().unwrap_or(path);
                if !item_scoped && !vars.contains_key(head) {
                    out.push_str(raw_open);
                    render_nodes(body, vars, scope, out);
                    out.push_str("{{/if}}");
                } else if resolve(path, vars, scope).is_some_and(Value::is_truthy) {
                    render_nodes(body, vars, scope, out);
                }
            }
            Node::Each {
                key,
                body,
                raw_open,
            } => match vars.get(key) {
                Some(Value::List(items)) => {
                    for item in items {
                        render_nodes(body, vars, Some(item), out);
                    }
                }
                // Not a list, or not in the bag: the block stays literal.
                _ => {
                    out.push_str(raw_open);
                    render_nodes(body, vars, scope, out);
                    out.push_str("{{/each}}");
                }
            },
        }
    }
}

/// Look up a dotted path in the bag or the current loop element.
fn resolve<'a>(
    path: &str,
    vars: &'a VariableBag,
    scope: Option<&'a HashMap<String, Value>>,
) -> Option<&'a Value> {
    let mut parts = path.splitn(2, '.');
    let head = parts.next()?;
    let prop = parts.next();

    if head == "this" {
        return scope?.get(prop?);
    }

    let base = vars.get(head)?;
    match prop {
        None => Some(base),
        Some(prop) => match base {
            Value::Entity(fields) => fields.get(prop),
            _ => None,
        },
    }
}
