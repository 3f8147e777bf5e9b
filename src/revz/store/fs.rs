use super::SkillStore;
use crate::error::{Result, RevzError};
use crate::model::Topic;
use std::fs;
use std::path::Path;

pub const SKILLS_FILENAME: &str = "skills.json";

/// Loads a store from a `skills.json` file.
///
/// Fails with [`RevzError::FileNotFound`] when the path does not exist and
/// [`RevzError::MalformedStore`] when the content is not the expected flat
/// object shape.
pub fn load(path: &Path) -> Result<SkillStore> {
    if !path.exists() {
        return Err(RevzError::FileNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(RevzError::Io)?;
    SkillStore::from_json_str(&text, path)
}

/// Writes the store back to disk in the wire format, creating the parent
/// directory if needed.
pub fn save(store: &SkillStore, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(RevzError::Io)?;
        }
    }
    let text = store.to_json_string()?;
    fs::write(path, text).map_err(RevzError::Io)?;
    Ok(())
}

/// The stock records `revz init` seeds a fresh store with.
pub fn default_topics() -> Vec<Topic> {
    vec![
        Topic::new(
            vec!["u".into(), "understanding".into()],
            "Strategy: Summarise in your own words.\n\
             Keywords: \"own words\", \"summarise\", \"points\".\n\
             Marks: 1 per point."
                .into(),
        ),
        Topic::new(
            vec!["a".into(), "analysis".into()],
            "Strategy: Quote, technique, connotations, effects.\n\
             Keywords: \"close reference\", \"show\", \"language\".\n\
             Marks: 1 for brief, 2 for 2 large points.\n\
             Tip: go for 1 mark most of the time."
                .into(),
        ),
        Topic::new(
            vec!["e".into(), "evaluation".into()],
            "Strategy: State why the target is good/bad, quote, give brief \
             analysis, repeat once.\n\
             Keywords: synonyms of \"how well\"/\"how badly\".\n\
             Marks: 2-3.\n\
             Tip: agree with the question."
                .into(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn load_missing_file_is_file_not_found() {
        let dir = tempdir().unwrap();
        let err = load(&dir.path().join("skills.json")).unwrap_err();
        assert!(matches!(err, RevzError::FileNotFound(_)));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("skills.json");

        let store = SkillStore::new(default_topics(), &path).unwrap();
        save(&store, &path).unwrap();
        let reloaded = load(&path).unwrap();

        assert_eq!(reloaded.len(), store.len());
        assert_eq!(
            reloaded.lookup("understanding").unwrap(),
            store.lookup("u").unwrap()
        );
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("skills.json");

        let store = SkillStore::new(default_topics(), &path).unwrap();
        save(&store, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn default_topics_form_a_valid_store() {
        let store = SkillStore::new(default_topics(), &PathBuf::from("seed")).unwrap();
        assert_eq!(store.len(), 3);
        assert!(store.contains_alias("e"));
        assert!(store.lookup("evaluation").unwrap().contains("Strategy"));
    }
}
