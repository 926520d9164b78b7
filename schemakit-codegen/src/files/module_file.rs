//! Module definition file generator.

use std::path::{Path, PathBuf};

use schemakit_config::Config;
use schemakit_core::{FileRules, GeneratedFile, ModuleName};

use crate::CodeFile;
use crate::ast::{ArrowFn, Call, Export, Import, JsArray, JsObject, Value};

/// Schema helper every module file is wrapped in.
const DEFINE_FIELD: &str = "defineField";

/// Package the schema helper is imported from.
const SCHEMA_PACKAGE: &str = "sanity";

/// The `<modules>/<identifier>.<ext>` schema definition for one module.
///
/// Always overwritten: re-running the scaffolder resets the module to the
/// template.
#[derive(Debug, Clone)]
pub struct ModuleFile {
    module: ModuleName,
    namespace: String,
    icon: String,
    relative_path: PathBuf,
}

impl ModuleFile {
    pub fn new(config: &Config, module: &ModuleName) -> Self {
        Self {
            module: module.clone(),
            namespace: config.module.namespace.clone(),
            icon: config.module.icon.clone(),
            relative_path: config.module_path(Path::new(""), module),
        }
    }

    fn title_field() -> Call {
        Call::new(DEFINE_FIELD).arg(
            JsObject::new()
                .string("name", "title")
                .string("title", "Title")
                .string("type", "string"),
        )
    }

    fn definition(&self) -> Call {
        Call::new(DEFINE_FIELD).arg(
            JsObject::new()
                .string("name", self.module.qualified(&self.namespace))
                .string("title", self.module.title())
                .arrow_fn("icon", ArrowFn::new("", Value::string(&self.icon)))
                .string("type", "object")
                .array("fields", JsArray::new().push(Self::title_field())),
        )
    }
}

impl GeneratedFile for ModuleFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.relative_path)
    }

    fn rules(&self) -> FileRules {
        FileRules::always()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .import(Import::new(SCHEMA_PACKAGE).named(DEFINE_FIELD))
            .export(Export::default_value(self.definition()))
            .render()
    }
}
