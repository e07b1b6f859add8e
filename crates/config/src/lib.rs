//! Configuration for the Ihya asset builder.
//!
//! Values are layered, later layers winning:
//!
//! 1. built-in defaults ([`Config::default`]);
//! 2. a TOML file, either given explicitly or `config.toml` in the platform
//!    configuration directory;
//! 3. `IHYA_*` environment variables, with `__` separating nested keys
//!    (`IHYA_SOURCES__QURAN=/data/quran.db`);
//! 4. command-line [`Overrides`].

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use ihya_assets::{Format, OutputPaths};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Prefix of environment variables read into the configuration.
pub const ENV_PREFIX: &str = "IHYA_";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: Format,
    pub sources: Sources,
    pub output: Output,
}

/// Input locations.
///
/// Relative database paths are resolved against `database_dir`; the
/// commentary path is used as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sources {
    pub database_dir: PathBuf,
    /// Original-script verse text
    pub quran: PathBuf,
    /// English translation
    pub translation: PathBuf,
    /// Word-by-word transliteration
    pub words: PathBuf,
    /// Morphological segments
    pub corpus: PathBuf,
    /// Commentary JSONL
    pub commentary: PathBuf,
}
impl Default for Sources {
    fn default() -> Self {
        Self {
            database_dir: PathBuf::from("databases"),
            quran: PathBuf::from("quran.db"),
            translation: PathBuf::from("en_sahih.db"),
            words: PathBuf::from("words.db"),
            corpus: PathBuf::from("corpus.db"),
            commentary: PathBuf::from("deepseek_analysis_results.jsonl"),
        }
    }
}
impl Sources {
    fn database(&self, path: &Path) -> PathBuf {
        self.database_dir.join(path)
    }

    pub fn quran_path(&self) -> PathBuf {
        self.database(&self.quran)
    }

    pub fn translation_path(&self) -> PathBuf {
        self.database(&self.translation)
    }

    pub fn words_path(&self) -> PathBuf {
        self.database(&self.words)
    }

    pub fn corpus_path(&self) -> PathBuf {
        self.database(&self.corpus)
    }
}

/// Output locations. File names are resolved against `directory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Output {
    pub directory: PathBuf,
    pub chapters: PathBuf,
    /// Defaults to the format's own verse file name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verses: Option<PathBuf>,
    pub commentary: PathBuf,
    /// Indent the generated JSON
    pub pretty: bool,
}
impl Default for Output {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("assets"),
            chapters: PathBuf::from("surahs.json"),
            verses: None,
            commentary: PathBuf::from("ihya_tafsir.json"),
            pretty: false,
        }
    }
}
impl Output {
    pub fn paths(&self, format: Format) -> OutputPaths {
        let verses = self.verses.clone().unwrap_or_else(|| PathBuf::from(format.default_verses_filename()));
        OutputPaths {
            chapters: self.directory.join(&self.chapters),
            verses: self.directory.join(verses),
            commentary: self.directory.join(&self.commentary),
        }
    }
}

/// Values given on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub format: Option<Format>,
    pub database_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub commentary: Option<PathBuf>,
    pub pretty: bool,
}
impl Overrides {
    fn apply(&self, mut figment: Figment) -> Figment {
        if let Some(format) = self.format {
            figment = figment.merge(Serialized::default("format", format));
        }
        if let Some(dir) = &self.database_dir {
            figment = figment.merge(Serialized::default("sources.database_dir", dir));
        }
        if let Some(dir) = &self.output_dir {
            figment = figment.merge(Serialized::default("output.directory", dir));
        }
        if let Some(path) = &self.commentary {
            figment = figment.merge(Serialized::default("sources.commentary", path));
        }
        if self.pretty {
            figment = figment.merge(Serialized::default("output.pretty", true));
        }
        figment
    }
}

impl Config {
    /// `config.toml` in the platform configuration directory, if one can be determined.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ihya").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Defaults, file and environment layers, without command-line overrides.
    ///
    /// An explicit `file` must exist; the default file is optional.
    pub fn figment(file: Option<&Path>) -> Result<Figment> {
        let figment = Figment::from(Serialized::defaults(Config::default()));
        let figment = match file {
            Some(path) if !path.is_file() => exn::bail!(ErrorKind::InvalidPath(path.to_path_buf())),
            Some(path) => figment.merge(Toml::file_exact(path)),
            None => match Self::default_path() {
                Some(path) => figment.merge(Toml::file(path)),
                None => figment,
            },
        };
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Load the fully layered configuration.
    #[instrument(level = "debug", skip(overrides))]
    pub fn load(file: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let figment = overrides.apply(Self::figment(file)?);
        let config: Self = figment.extract().or_raise(|| ErrorKind::Load)?;
        tracing::debug!(format = %config.format, "Loaded configuration");
        Ok(config)
    }

    pub fn output_paths(&self) -> OutputPaths {
        self.output.paths(self.format)
    }
}
