//! HEAD and DEPS reference rewriting

use smol_str::SmolStr;
use tracing::trace;

use super::IdMap;
use crate::base::PLACEHOLDER;
use crate::syntax::Sentence;

/// Delimiters accepted between DEPS entries, in priority order. A field uses
/// the first one it contains for all of its entries.
const DEPS_DELIMITERS: [char; 3] = ['|', ';', ' '];

/// Canonical DEPS delimiter used when a field is rewritten
const DEPS_JOIN: &str = "|";

/// Rewrite every token's HEAD and DEPS references through `map`.
///
/// References that are not mapped (including the root `0` and `_`) are kept.
/// Returns the number of fields that changed.
pub fn rewrite_references(sentence: &mut Sentence, map: &IdMap) -> usize {
    let mut changed = 0;
    for token in sentence.tokens_mut() {
        if let Some(new_head) = map.remap(&token.fields.head) {
            let new_head = SmolStr::new(new_head.to_string());
            if new_head != token.fields.head {
                trace!(token = %token.id, old = %token.fields.head, new = %new_head, "rewrote HEAD");
                token.fields.head = new_head;
                changed += 1;
            }
        }
        if let Some(new_deps) = rewrite_deps(&token.fields.deps, map) {
            trace!(token = %token.id, old = %token.fields.deps, new = %new_deps, "rewrote DEPS");
            token.fields.deps = SmolStr::new(new_deps);
            changed += 1;
        }
    }
    changed
}

/// Rewrite the head references of one DEPS value.
///
/// Returns `None` when no reference changes, so the field can be kept
/// verbatim. Otherwise the entries are rejoined with `|` and blank entries
/// are dropped.
pub fn rewrite_deps(deps: &str, map: &IdMap) -> Option<String> {
    if deps == PLACEHOLDER || deps.trim().is_empty() {
        return None;
    }

    let delimiter = DEPS_DELIMITERS
        .into_iter()
        .find(|d| deps.contains(*d))
        .unwrap_or(DEPS_DELIMITERS[0]);

    let mut changed = false;
    let mut parts = Vec::new();
    for part in deps.split(delimiter).map(str::trim).filter(|p| !p.is_empty()) {
        let (head, relation) = match part.split_once(':') {
            Some((head, relation)) => (head, Some(relation)),
            None => (part, None),
        };
        let head = match map.remap(head) {
            Some(new_head) if new_head.to_string() != head => {
                changed = true;
                new_head.to_string()
            }
            _ => head.to_string(),
        };
        parts.push(match relation {
            Some(relation) => format!("{head}:{relation}"),
            None => head,
        });
    }

    changed.then(|| parts.join(DEPS_JOIN))
}
