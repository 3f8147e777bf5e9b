//! # Storage Layer
//!
//! The store is a flat JSON object read fully into memory:
//!
//! ```text
//! {
//!   "u, understanding": "Strategy: ...",
//!   "a, analysis": "Strategy: ..."
//! }
//! ```
//!
//! Each key is a comma-separated list of aliases; each value is the note
//! every one of those aliases resolves to. On load the key is split into a
//! [`Topic`] and two lookup structures are built:
//!
//! - an alias → record index for note retrieval
//! - the full alias list, sorted ascending, for listings and membership
//!   probes
//!
//! A store is immutable after load; `reload` replaces it wholesale. Saving
//! rejoins each topic's aliases with `", "`, so load → save → load yields an
//! equivalent mapping.

use crate::error::{Result, RevzError};
use crate::model::Topic;
use crate::{search, sort};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

pub mod fs;

#[derive(Debug)]
pub struct SkillStore {
    topics: Vec<Topic>,
    index: HashMap<String, usize>,
    alias_order: Vec<String>,
}

impl SkillStore {
    /// Builds a store from parsed topics.
    ///
    /// `origin` only labels error messages. Fails with
    /// [`RevzError::MalformedStore`] when a topic has no aliases, an alias
    /// is empty, or an alias appears in more than one topic.
    pub fn new(topics: Vec<Topic>, origin: &Path) -> Result<Self> {
        let mut index = HashMap::new();
        let mut alias_order = Vec::new();

        for (i, topic) in topics.iter().enumerate() {
            if topic.aliases.is_empty() {
                return Err(malformed(origin, "entry with no aliases"));
            }
            for alias in &topic.aliases {
                if alias.is_empty() {
                    return Err(malformed(origin, format!("empty alias in entry {}", i + 1)));
                }
                if index.insert(alias.clone(), i).is_some() {
                    return Err(malformed(
                        origin,
                        format!("alias {alias:?} appears in more than one entry"),
                    ));
                }
                alias_order.push(alias.clone());
            }
        }

        sort::bubble_sort(&mut alias_order);

        Ok(Self {
            topics,
            index,
            alias_order,
        })
    }

    /// Parses the JSON store format.
    pub fn from_json_str(text: &str, origin: &Path) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| malformed(origin, format!("invalid JSON: {e}")))?;

        let map = value
            .as_object()
            .ok_or_else(|| malformed(origin, "top level is not an object"))?;

        let mut topics = Vec::with_capacity(map.len());
        for (key, value) in map {
            let note = value
                .as_str()
                .ok_or_else(|| malformed(origin, format!("value for {key:?} is not a string")))?;
            let aliases: Vec<String> = key.split(',').map(|a| a.trim().to_string()).collect();
            topics.push(Topic::new(aliases, note.to_string()));
        }

        Self::new(topics, origin)
    }

    /// The note `alias` resolves to. Case-sensitive exact match.
    pub fn lookup(&self, alias: &str) -> Result<&str> {
        self.index
            .get(alias)
            .map(|&i| self.topics[i].note.as_str())
            .ok_or_else(|| RevzError::AliasNotFound(alias.to_string()))
    }

    /// Membership probe against the sorted alias list.
    pub fn contains_alias(&self, alias: &str) -> bool {
        search::contains(&self.alias_order, &alias.to_string())
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Every alias in the store, ascending.
    pub fn aliases(&self) -> &[String] {
        &self.alias_order
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Serializes back to the flat-object wire format, pretty-printed.
    pub fn to_json_string(&self) -> Result<String> {
        let mut map = serde_json::Map::new();
        for topic in &self.topics {
            map.insert(topic.wire_key(), Value::String(topic.note.clone()));
        }
        let text = serde_json::to_string_pretty(&Value::Object(map))?;
        Ok(text)
    }
}

fn malformed(origin: &Path, reason: impl Into<String>) -> RevzError {
    RevzError::MalformedStore {
        path: origin.to_path_buf(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn origin() -> PathBuf {
        PathBuf::from("skills.json")
    }

    fn sample() -> SkillStore {
        SkillStore::from_json_str(
            r#"{"u, understanding": "noteA", "a, analysis": "noteB"}"#,
            &origin(),
        )
        .unwrap()
    }

    #[test]
    fn every_alias_resolves_to_its_note() {
        let store = sample();
        assert_eq!(store.lookup("u").unwrap(), "noteA");
        assert_eq!(store.lookup("understanding").unwrap(), "noteA");
        assert_eq!(store.lookup("a").unwrap(), "noteB");
    }

    #[test]
    fn unknown_alias_is_alias_not_found() {
        let store = sample();
        let err = store.lookup("z").unwrap_err();
        assert!(matches!(err, RevzError::AliasNotFound(ref a) if a == "z"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let store = sample();
        assert!(store.lookup("U").is_err());
    }

    #[test]
    fn aliases_come_back_sorted() {
        let store = sample();
        assert_eq!(store.aliases(), ["a", "analysis", "u", "understanding"]);
    }

    #[test]
    fn membership_probe_agrees_with_lookup() {
        let store = sample();
        assert!(store.contains_alias("analysis"));
        assert!(!store.contains_alias("z"));
    }

    #[test]
    fn keys_without_spaces_still_split() {
        let store = SkillStore::from_json_str(r#"{"x,y": "n"}"#, &origin()).unwrap();
        assert_eq!(store.lookup("x").unwrap(), "n");
        assert_eq!(store.lookup("y").unwrap(), "n");
    }

    #[test]
    fn non_object_document_is_malformed() {
        let err = SkillStore::from_json_str(r#"["a"]"#, &origin()).unwrap_err();
        assert!(matches!(err, RevzError::MalformedStore { .. }));
    }

    #[test]
    fn non_string_value_is_malformed() {
        let err = SkillStore::from_json_str(r#"{"a": 3}"#, &origin()).unwrap_err();
        assert!(matches!(err, RevzError::MalformedStore { .. }));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = SkillStore::from_json_str("{not json", &origin()).unwrap_err();
        assert!(matches!(err, RevzError::MalformedStore { .. }));
    }

    #[test]
    fn duplicate_alias_across_entries_is_rejected() {
        let err =
            SkillStore::from_json_str(r#"{"a, b": "one", "b, c": "two"}"#, &origin()).unwrap_err();
        match err {
            RevzError::MalformedStore { reason, .. } => assert!(reason.contains("\"b\"")),
            other => panic!("expected MalformedStore, got {other:?}"),
        }
    }

    #[test]
    fn empty_alias_is_rejected() {
        let err = SkillStore::from_json_str(r#"{"a, ": "one"}"#, &origin()).unwrap_err();
        assert!(matches!(err, RevzError::MalformedStore { .. }));
    }

    #[test]
    fn round_trip_preserves_the_mapping() {
        let store = sample();
        let dumped = store.to_json_string().unwrap();
        let reloaded = SkillStore::from_json_str(&dumped, &origin()).unwrap();

        assert_eq!(reloaded.len(), store.len());
        for alias in store.aliases() {
            assert_eq!(
                reloaded.lookup(alias).unwrap(),
                store.lookup(alias).unwrap()
            );
        }
    }

    #[test]
    fn notes_keep_embedded_newlines() {
        let store = SkillStore::from_json_str(r#"{"a": "line one\nline two"}"#, &origin()).unwrap();
        assert_eq!(store.lookup("a").unwrap(), "line one\nline two");
    }
}
