//! List command report data structures.

use super::output::{Output, Report};

/// Registration state of one module file.
#[derive(Debug, PartialEq, Eq)]
pub struct ModuleStatus {
    pub name: String,
    /// The registry imports the module.
    pub imported: bool,
    /// The registry list references the module.
    pub listed: bool,
    /// The composite file has the module's type entry.
    pub composed: bool,
}

impl ModuleStatus {
    fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.imported {
            missing.push("import");
        }
        if !self.listed {
            missing.push("list entry");
        }
        if !self.composed {
            missing.push("type entry");
        }
        missing
    }
}

/// Report data from listing modules.
#[derive(Debug)]
pub struct ListReport {
    /// Module directory, relative to the project directory.
    pub modules_dir: String,
    pub modules: Vec<ModuleStatus>,
    /// Files that could not be read.
    pub warnings: Vec<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if self.modules.is_empty() {
            out.preformatted(&format!("No modules in {}", self.modules_dir));
            return;
        }

        out.section("Modules");
        for module in &self.modules {
            let missing = module.missing();
            if missing.is_empty() {
                out.list_item(&module.name);
            } else {
                out.list_item(&format!("{} (missing: {})", module.name, missing.join(", ")));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_render_marks_missing_parts() {
        let report = ListReport {
            modules_dir: "schemas/modules".to_string(),
            modules: vec![
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
            ],
            warnings: Vec::new(),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            vec!["Modules:", "- hero", "- quote (missing: list entry, type entry)"]
        );
    }

    #[test]
    fn test_render_empty() {
        let report = ListReport {
            modules_dir: "schemas/modules".to_string(),
            modules: Vec::new(),
            warnings: vec!["cannot read schemas/index.ts".to_string()],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "warning: cannot read schemas/index.ts",
                "No modules in schemas/modules"
            ]
        );
    }
}
