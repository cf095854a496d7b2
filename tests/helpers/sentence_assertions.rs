//! Assertions over integrated sentences.

use cobra::{Record, Sentence, TokenId};

/// ID column of every record, in document order
pub fn ids(sentence: &Sentence) -> Vec<String> {
    sentence.records.iter().map(Record::id_text).collect()
}

/// HEAD column of every token
pub fn heads(sentence: &Sentence) -> Vec<String> {
    sentence
        .tokens()
        .map(|token| token.fields.head.to_string())
        .collect()
}

/// DEPS column of every token
pub fn deps(sentence: &Sentence) -> Vec<String> {
    sentence
        .tokens()
        .map(|token| token.fields.deps.to_string())
        .collect()
}

/// FORM of the token with id `id`
pub fn form_of(sentence: &Sentence, id: u32) -> String {
    sentence
        .tokens()
        .find(|token| token.id.get() == id)
        .map(|token| token.fields.form.to_string())
        .unwrap_or_else(|| panic!("no token {id}"))
}

/// Token ids are exactly 1..=count in document order
pub fn assert_contiguous(sentence: &Sentence) {
    let actual: Vec<u32> = sentence.tokens().map(|token| token.id.get()).collect();
    let expected: Vec<u32> = (1..=actual.len() as u32).collect();
    assert_eq!(actual, expected, "token ids are not contiguous");
}

/// Every numeric HEAD names a token of the sentence (or the root)
pub fn assert_heads_resolve(sentence: &Sentence) {
    for token in sentence.tokens() {
        if let Some(head) = token.head_id() {
            assert!(
                sentence.token(head).is_some(),
                "token {} points at missing head {head}",
                token.id
            );
        }
    }
}

/// Every numeric DEPS head names a token of the sentence, and no token lists
/// itself
pub fn assert_deps_resolve(sentence: &Sentence) {
    for token in sentence.tokens() {
        let deps = token.fields.deps.as_str();
        let delimiter = ['|', ';', ' ']
            .into_iter()
            .find(|d| deps.contains(*d))
            .unwrap_or('|');
        for part in deps.split(delimiter).filter(|part| !part.is_empty()) {
            let head = part.split(':').next().unwrap_or(part);
            let Ok(head) = head.parse::<TokenId>() else {
                continue;
            };
            assert!(
                sentence.token(head).is_some(),
                "token {} lists missing DEPS head {head}",
                token.id
            );
            assert_ne!(head, token.id, "token {} lists itself in DEPS", token.id);
        }
    }
}
