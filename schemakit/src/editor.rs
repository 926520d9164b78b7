//! Opening the new module file in an editor.
//!
//! The editor runs detached from the scaffold: the process is started and
//! nothing waits for it. A watcher thread logs its exit status, but only while
//! this process is still alive, so that log is best-effort.

use std::{
    fmt, io,
    path::Path,
    process::{Child, Command, Stdio},
    thread,
};

/// Placeholder replaced by the file path in the command template.
const PATH_PLACEHOLDER: &str = "{path}";

/// An editor invocation built from a command template such as `code -r {path}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    program: String,
    args: Vec<String>,
}

impl EditorCommand {
    /// Split `template` on whitespace and substitute `{path}`.
    ///
    /// The path is appended as the last argument when the template has no
    /// placeholder. Returns `None` for an empty template.
    pub fn from_template(template: &str, path: &Path) -> Option<Self> {
        let path = path.display().to_string();
        let mut words = template.split_whitespace();
        let program = words.next()?.replace(PATH_PLACEHOLDER, &path);

        let mut args: Vec<String> = words.map(|w| w.replace(PATH_PLACEHOLDER, &path)).collect();
        if !template.contains(PATH_PLACEHOLDER) {
            args.push(path);
        }

        Some(Self { program, args })
    }

    fn spawn(&self) -> io::Result<Child> {
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
    }
}

impl fmt::Display for EditorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Launch the editor on `path` without waiting for it.
///
/// Failures are logged and never returned. The editor's output is discarded;
/// its exit status is logged only if it ends before this process does.
pub fn open(template: &str, path: &Path) {
    let Some(command) = EditorCommand::from_template(template, path) else {
        tracing::warn!("editor command is empty; not opening {}", path.display());
        return;
    };

    let child = match command.spawn() {
        Ok(child) => child,
        Err(err) => {
            tracing::warn!(command = %command, error = %err, "failed to launch editor");
            return;
        }
    };
    tracing::info!(command = %command, pid = child.id(), "editor launched");

    let label = command.to_string();
    if let Err(err) = thread::Builder::new()
        .name("editor-watch".to_string())
        .spawn(move || watch(child, &label))
    {
        tracing::debug!(error = %err, "cannot watch editor process");
    }
}

fn watch(mut child: Child, command: &str) {
    match child.wait() {
        Ok(status) if status.success() => tracing::debug!(command, "editor exited"),
        Ok(status) => tracing::warn!(command, %status, "editor exited with an error"),
        Err(err) => tracing::warn!(command, error = %err, "lost track of editor process"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_substitutes_path() {
        let cmd = EditorCommand::from_template("code -r {path}", Path::new("schemas/modules/bar.ts"))
            .unwrap();
        assert_eq!(cmd.program, "code");
        assert_eq!(cmd.args, vec!["-r", "schemas/modules/bar.ts"]);
        assert_eq!(cmd.to_string(), "code -r schemas/modules/bar.ts");
    }

    #[test]
    fn test_template_without_placeholder_appends_path() {
        let cmd = EditorCommand::from_template("  vim  ", Path::new("a.ts")).unwrap();
        assert_eq!(cmd.program, "vim");
        assert_eq!(cmd.args, vec!["a.ts"]);
    }

    #[test]
    fn test_placeholder_inside_argument() {
        let cmd = EditorCommand::from_template("subl {path}:1", Path::new("a.ts")).unwrap();
        assert_eq!(cmd.args, vec!["a.ts:1"]);
    }

    #[test]
    fn test_empty_template() {
        assert!(EditorCommand::from_template("   ", Path::new("a.ts")).is_none());
    }

    #[test]
    #[cfg(unix)]
    fn test_spawned_editor_does_not_inherit_pipes() {
        let cmd = EditorCommand::from_template("true", Path::new("a.ts")).unwrap();
        let mut child = cmd.spawn().unwrap();
        assert!(child.stdout.is_none());
        assert!(child.stderr.is_none());
        child.wait().unwrap();
    }

    #[test]
    fn test_open_missing_program_does_not_fail() {
        open("schemakit-no-such-editor-binary {path}", Path::new("a.ts"));
    }
}
