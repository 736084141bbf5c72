//! Loader for RON dialogue scripts at startup.

use bevy::prelude::*;
use ron::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::resources::{DialogueRegistry, DialogueScript};

/// Error type for script loading failures.
#[derive(Debug)]
pub struct ScriptLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ScriptLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// On-disk wrapper so one file can hold several scripts.
#[derive(Debug, Deserialize)]
pub struct ScriptFile {
    pub scripts: Vec<DialogueScript>,
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub fn parse_script_file(contents: &str) -> Result<Vec<DialogueScript>, ron::error::SpannedError> {
    ron_options()
        .from_str::<ScriptFile>(contents)
        .map(|file| file.scripts)
}

/// Load every `*.ron` script file under `base_path`. Files that fail to
/// parse are reported and skipped; the rest still load.
pub fn load_all_scripts(base_path: &Path) -> (DialogueRegistry, Vec<ScriptLoadError>) {
    let mut registry = DialogueRegistry::default();
    let mut errors = Vec::new();

    let entries = match fs::read_dir(base_path) {
        Ok(entries) => entries,
        Err(e) => {
            errors.push(ScriptLoadError {
                file: base_path.display().to_string(),
                message: format!("IO error: {}", e),
            });
            return (registry, errors);
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("ron") {
            continue;
        }
        let file_name = path.display().to_string();

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                errors.push(ScriptLoadError {
                    file: file_name,
                    message: format!("IO error: {}", e),
                });
                continue;
            }
        };

        match parse_script_file(&contents) {
            Ok(scripts) => {
                for script in scripts {
                    registry.scripts.insert(script.id.clone(), script);
                }
            }
            Err(e) => errors.push(ScriptLoadError {
                file: file_name,
                message: format!("Parse error: {}", e),
            }),
        }
    }

    (registry, errors)
}

/// A minimal built-in conversation so the game stays playable when the
/// asset directory is missing entirely.
pub fn fallback_registry() -> DialogueRegistry {
    let mut registry = DialogueRegistry::default();
    let script = DialogueScript {
        id: "intro".to_string(),
        lines: vec![
            "You made it. Few do.".to_string(),
            "The old shrines still answer, if you find them.".to_string(),
        ],
        unlock_on_end: None,
    };
    registry.scripts.insert(script.id.clone(), script);
    registry
}

/// Populate the registry resource from disk, falling back to the built-in
/// script when nothing loads.
pub(crate) fn setup_dialogue_registry(mut registry: ResMut<DialogueRegistry>) {
    let (loaded, errors) = load_all_scripts(Path::new("assets/dialogue"));
    for error in &errors {
        error!("{}", error);
    }

    if loaded.scripts.is_empty() {
        warn!("No dialogue scripts found, using built-in fallback");
        *registry = fallback_registry();
    } else {
        info!("Loaded {} dialogue scripts", loaded.scripts.len());
        *registry = loaded;
    }
}
