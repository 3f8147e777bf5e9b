//! # API Facade
//!
//! The single entry point for every operation, regardless of front-end.
//! The facade owns the loaded store, the settings, and the resolved paths;
//! it returns structured `Result` types and never touches the terminal.
//! Argument parsing, formatting, and exit codes belong to the binary.

use crate::config::Settings;
use crate::error::Result;
use crate::model::Topic;
use crate::store::{fs, SkillStore};
use std::path::PathBuf;

/// Where one scope keeps its files.
#[derive(Debug, Clone)]
pub struct StorePaths {
    pub dir: PathBuf,
}

impl StorePaths {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn skills_file(&self) -> PathBuf {
        self.dir.join(fs::SKILLS_FILENAME)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.dir.join(Settings::file_name())
    }
}

/// What [`RevisionApi::seed`] did for each file it considered.
#[derive(Debug, Default)]
pub struct SeedOutcome {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct RevisionApi {
    store: SkillStore,
    settings: Settings,
    paths: StorePaths,
}

impl RevisionApi {
    /// Loads the store and settings for the given scope.
    ///
    /// A missing or malformed store file fails here, before any operation
    /// runs; front-ends are expected to abort on it rather than continue
    /// with partial data.
    pub fn open(paths: StorePaths) -> Result<Self> {
        let store = fs::load(&paths.skills_file())?;
        let settings = Settings::load(&paths.dir)?;
        Ok(Self {
            store,
            settings,
            paths,
        })
    }

    pub fn lookup(&self, alias: &str) -> Result<&str> {
        self.store.lookup(alias)
    }

    pub fn topics(&self) -> &[Topic] {
        self.store.topics()
    }

    /// Every alias, ascending.
    pub fn aliases(&self) -> &[String] {
        self.store.aliases()
    }

    pub fn contains_alias(&self, alias: &str) -> bool {
        self.store.contains_alias(alias)
    }

    /// Re-reads the store file, replacing the in-memory records wholesale.
    pub fn reload(&mut self) -> Result<()> {
        self.store = fs::load(&self.paths.skills_file())?;
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_dark(&mut self, dark: bool) -> Result<()> {
        self.settings.dark = dark;
        self.settings.save(&self.paths.dir)
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    /// Writes the stock `skills.json` and `settings.json` into the scope
    /// directory. Existing files are left alone unless `force` is set.
    pub fn seed(paths: &StorePaths, force: bool) -> Result<SeedOutcome> {
        let mut outcome = SeedOutcome::default();

        let skills = paths.skills_file();
        if skills.exists() && !force {
            outcome.skipped.push(skills);
        } else {
            let store = SkillStore::new(fs::default_topics(), &skills)?;
            fs::save(&store, &skills)?;
            outcome.written.push(skills);
        }

        let settings = paths.settings_file();
        if settings.exists() && !force {
            outcome.skipped.push(settings);
        } else {
            Settings::default().save(&paths.dir)?;
            outcome.written.push(settings);
        }

        Ok(outcome)
    }
}
