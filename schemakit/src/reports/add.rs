//! Add command report data structures.

use schemakit_codegen::pipeline::ChangeKind;

use super::output::{Output, Report};

/// One file the scaffold touched (or would touch in a dry run).
#[derive(Debug)]
pub struct ChangedFile {
    /// Path relative to the project directory.
    pub path: String,
    pub kind: ChangeKind,
    pub content: String,
}

/// Report data from adding a module.
#[derive(Debug)]
pub struct AddReport {
    /// Module identifier.
    pub module: String,
    /// Qualified type name.
    pub type_name: String,
    /// Nothing was written.
    pub dry_run: bool,
    pub files: Vec<ChangedFile>,
    pub warnings: Vec<String>,
    pub notes: Vec<String>,
}

impl Report for AddReport {
    fn render(&self, out: &mut dyn Output) {
        if self.dry_run {
            out.title(&format!("Dry run: adding {} ({})", self.module, self.type_name));
        } else {
            out.title(&format!("Added {} ({})", self.module, self.type_name));
        }

        for file in &self.files {
            let line = format!("{} ({})", file.path, file.kind);
            if file.kind.is_change() {
                out.added_item(&line);
            } else {
                out.list_item(&line);
            }
        }

        if self.dry_run {
            for file in self.files.iter().filter(|f| f.kind.is_change()) {
                out.newline();
                out.divider(&file.path);
                out.preformatted(file.content.trim_end());
            }
        }

        for note in &self.notes {
            out.note(note);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    fn report(dry_run: bool) -> AddReport {
        AddReport {
            module: "bar".to_string(),
            type_name: "module.bar".to_string(),
            dry_run,
            files: vec![
                ChangedFile {
                    path: "schemas/modules/bar.ts".to_string(),
                    kind: ChangeKind::Created,
                    content: "export default {}\n".to_string(),
                },
                ChangedFile {
                    path: "schemas/objects/builder.ts".to_string(),
                    kind: ChangeKind::Unchanged,
                    content: String::new(),
                },
            ],
            warnings: vec!["list literal not found".to_string()],
            notes: Vec::new(),
        }
    }

    #[test]
    fn test_render() {
        let mut out = RecordingOutput::default();
        report(false).render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "# Added bar (module.bar)",
                "+ schemas/modules/bar.ts (created)",
                "- schemas/objects/builder.ts (unchanged)",
                "warning: list literal not found",
            ]
        );
    }

    #[test]
    fn test_render_dry_run_shows_content() {
        let mut out = RecordingOutput::default();
        let report = report(true);
        report.render(&mut out);

        assert_eq!(out.lines[0], "# Dry run: adding bar (module.bar)");
        assert!(out.lines.contains(&"-- schemas/modules/bar.ts --".to_string()));
        assert!(out.lines.contains(&"export default {}".to_string()));
        assert!(!out.lines.contains(&"-- schemas/objects/builder.ts --".to_string()));
    }
}
