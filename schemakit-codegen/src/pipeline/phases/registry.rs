//! Registry phase - imports the module and adds it to the module list.

use eyre::Result;
use schemakit_config::Config;
use schemakit_patch::{RegistryLayout, RegistryPatcher, SourceFile};

use super::report_edit;
use crate::pipeline::{ChangeKind, Phase, ScaffoldContext};

/// Phase that patches the registry file.
///
/// The file is written back whenever it was read successfully, even if
/// neither the import nor the list entry changed.
pub struct RegistryPhase;

impl Phase for RegistryPhase {
    fn name(&self) -> &'static str {
        "registry"
    }

    fn description(&self) -> &'static str {
        "Add the module import and list entry to the registry"
    }

    fn run(&self, ctx: &mut ScaffoldContext) -> Result<()> {
        let mut file = SourceFile::open(ctx.config.registry_path(&ctx.root))?;
        let patcher = RegistryPatcher::new(registry_layout(&ctx.config))?;

        let patch = patcher.patch(file.content(), &ctx.module);
        let path = file.path().to_path_buf();
        report_edit(ctx, self.name(), &path, "import", patch.import);
        report_edit(ctx, self.name(), &path, "list entry", patch.entry);

        file.set_content(patch.content);
        if !ctx.dry_run {
            file.save()?;
        }

        let kind = if file.is_modified() {
            ChangeKind::Updated
        } else {
            ChangeKind::Unchanged
        };
        ctx.record(path, kind, file.content().to_string());
        Ok(())
    }
}

/// The registry layout described by `config`.
pub fn registry_layout(config: &Config) -> RegistryLayout {
    RegistryLayout {
        list: config.registry.list.clone(),
        entry_prefix: config.registry.entry_prefix.clone(),
        import_dir: config.import_dir(),
        section_marker: config.registry.marker(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_patch_default() {
        assert_eq!(registry_layout(&Config::default()), RegistryLayout::default());
    }

    #[test]
    fn test_layout_follows_config() {
        let mut config = Config::default();
        config.paths.modules = "blocks/".to_string();
        config.registry.list = "blocks".to_string();
        config.registry.entry_prefix = "block".to_string();
        config.registry.section_marker = vec!["// Blocks".to_string()];

        let layout = registry_layout(&config);
        assert_eq!(layout.import_dir, "./blocks");
        assert_eq!(layout.list, "blocks");
        assert_eq!(layout.entry_prefix, "block");
        assert_eq!(layout.section_marker, "// Blocks\n");
    }
}
