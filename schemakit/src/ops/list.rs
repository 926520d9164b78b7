//! List operation - module files and their registration state.

use std::{fs, path::Path};

use eyre::{Result, WrapErr};
use schemakit_codegen::pipeline::phases::registry_layout;
use schemakit_config::Config;
use schemakit_core::ModuleName;
use schemakit_patch::{CompositePatcher, RegistryPatcher};

use crate::reports::{ListReport, ModuleStatus};

/// Execute the list operation.
///
/// A missing module directory lists nothing. Missing registry or composite
/// files are reported as warnings and count as "not registered".
pub fn list(config: &Config, root: &Path) -> Result<ListReport> {
    let modules_dir = config.modules_dir(root);
    let mut warnings = Vec::new();

    let registry = read_optional(&config.registry_path(root), root, &mut warnings);
    let composite = read_optional(&config.composite_path(root), root, &mut warnings);

    let registry_patcher = RegistryPatcher::new(registry_layout(config))?;
    let composite_patcher = CompositePatcher::new(&config.module.namespace);

    let modules = module_names(&modules_dir, &config.paths.extension)?
        .into_iter()
        .map(|module| {
            let registry = registry.as_deref().unwrap_or_default();
            let composite = composite.as_deref().unwrap_or_default();
            ModuleStatus {
                name: module.to_string(),
                imported: registry_patcher.has_import(registry, &module),
                listed: registry_patcher.has_list_entry(registry, &module),
                composed: composite_patcher.has_entry(composite, &module),
            }
        })
        .collect();

    Ok(ListReport {
        modules_dir: relative(&modules_dir, root),
        modules,
        warnings,
    })
}

/// Module identifiers of the files in `dir` with `extension`, sorted.
fn module_names(dir: &Path, extension: &str) -> Result<Vec<ModuleName>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries =
        fs::read_dir(dir).wrap_err_with(|| format!("failed to read '{}'", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let path = entry
            .wrap_err_with(|| format!("failed to read '{}'", dir.display()))?
            .path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.push(stem.to_string());
        }
    }
    names.sort();

    Ok(names.into_iter().map(ModuleName::new).collect())
}

fn read_optional(path: &Path, root: &Path, warnings: &mut Vec<String>) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "cannot read file");
            warnings.push(format!("cannot read {}: {}", relative(path, root), err));
            None
        }
    }
}

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_list_registration_state() {
        let temp = TempDir::new().unwrap();
        let schemas = temp.path().join("schemas");
        fs::create_dir_all(schemas.join("modules")).unwrap();
        fs::create_dir_all(schemas.join("objects")).unwrap();
        fs::write(schemas.join("modules/hero.ts"), "").unwrap();
        fs::write(schemas.join("modules/quote.ts"), "").unwrap();
        fs::write(schemas.join("modules/notes.md"), "").unwrap();
        fs::write(
            schemas.join("index.ts"),
            "import modulesHero from './modules/hero'\nimport modulesQuote from './modules/quote'\n\nconst modules = [modulesHero]\n",
        )
        .unwrap();
        fs::write(
            schemas.join("objects/builder.ts"),
            "of: [\n  {type: 'module.hero'},\n]\n",
        )
        .unwrap();

        let report = list(&Config::default(), temp.path()).unwrap();

        assert!(report.warnings.is_empty());
        assert_eq!(report.modules_dir, "schemas/modules");
        assert_eq!(
            report.modules,
            vec![
                ModuleStatus {
                    name: "hero".to_string(),
                    imported: true,
                    listed: true,
                    composed: true,
                },
                ModuleStatus {
                    name: "quote".to_string(),
                    imported: true,
                    listed: false,
                    composed: false,
                },
            ]
        );
    }

    #[test]
    fn test_list_without_schema_tree() {
        let temp = TempDir::new().unwrap();
        let report = list(&Config::default(), temp.path()).unwrap();

        assert!(report.modules.is_empty());
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[0].starts_with("cannot read schemas/index.ts"));
    }
}
