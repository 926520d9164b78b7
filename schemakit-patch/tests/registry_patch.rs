//! Registry patching against realistic index files.

use schemakit_core::ModuleName;
use schemakit_patch::{Anchor, Edit, Miss, RegistryLayout, RegistryPatcher};

fn patcher() -> RegistryPatcher {
    RegistryPatcher::new(RegistryLayout::default()).expect("default layout compiles")
}

const INDEX_TS: &str = r#"import {type SchemaTypeDefinition} from 'sanity'

// Documents
// ---------------
import page from './documents/page'

// Modules
// ---------------
import modulesHero from './modules/hero'
import modulesGallery from './modules/gallery'

// Objects
// ---------------
import builder from './objects/builder'

const documents = [page]

const modules = [
  modulesHero,
  modulesGallery,
]

export const schemaTypes: SchemaTypeDefinition[] = [...documents, ...modules, builder]
"#;

#[test]
fn test_patch_inserts_import_and_entry() {
    let patch = patcher().patch(INDEX_TS, &ModuleName::new("bar"));

    assert_eq!(patch.import, Edit::Inserted(Anchor::AfterLastImport));
    assert_eq!(patch.entry, Edit::Inserted(Anchor::AfterLastElement));
    assert!(patch.is_changed());
    assert!(patch.content.contains(
        "import modulesGallery from './modules/gallery'\nimport modulesBar from './modules/bar'\n\n// Objects"
    ));
    assert!(
        patch
            .content
            .contains("const modules = [\n  modulesHero,\n  modulesGallery,\n  modulesBar,\n]")
    );
    // Other lists are untouched
    assert!(patch.content.contains("const documents = [page]"));
}

#[test]
fn test_patch_twice_is_idempotent() {
    let p = patcher();
    let module = ModuleName::new("bar");

    let first = p.patch(INDEX_TS, &module);
    let second = p.patch(&first.content, &module);

    assert_eq!(second.import, Edit::AlreadyPresent);
    assert_eq!(second.entry, Edit::AlreadyPresent);
    assert!(!second.is_changed());
    assert_eq!(second.content, first.content);
    assert_eq!(second.content.matches("modulesBar").count(), 2);
}

#[test]
fn test_multi_line_list_keeps_indentation() {
    let content = "const modules = [\n  moduleFoo,\n]\n";
    let patched = patcher().insert_list_entry(content, &ModuleName::new("bar"));

    assert_eq!(patched.edit, Edit::Inserted(Anchor::AfterLastElement));
    assert_eq!(
        patched.content,
        "const modules = [\n  moduleFoo,\n  modulesBar,\n]\n"
    );
}

#[test]
fn test_multi_line_list_without_trailing_comma() {
    let content = "const modules = [\n    moduleFoo,\n    moduleBaz\n]\n";
    let patched = patcher().insert_list_entry(content, &ModuleName::new("bar"));

    assert_eq!(
        patched.content,
        "const modules = [\n    moduleFoo,\n    moduleBaz,\n    modulesBar,\n]\n"
    );
}

#[test]
fn test_multi_line_list_falls_back_to_two_spaces() {
    let content = "const modules = [\n    moduleFoo,\n    ...shared\n]\n";
    let patched = patcher().insert_list_entry(content, &ModuleName::new("bar"));

    assert_eq!(patched.edit, Edit::Inserted(Anchor::DefaultIndent));
    assert_eq!(
        patched.content,
        "const modules = [\n    moduleFoo,\n    ...shared,\n  modulesBar,\n]\n"
    );
}

#[test]
fn test_single_line_list() {
    let patched = patcher().insert_list_entry("const modules = [moduleFoo]", &ModuleName::new("bar"));

    assert_eq!(patched.edit, Edit::Inserted(Anchor::SingleLine));
    assert_eq!(patched.content, "const modules = [moduleFoo, modulesBar]");
}

#[test]
fn test_single_line_list_with_trailing_comma() {
    let patched =
        patcher().insert_list_entry("const modules = [moduleFoo,]", &ModuleName::new("bar"));
    assert_eq!(patched.content, "const modules = [moduleFoo, modulesBar,]");
}

#[test]
fn test_empty_list() {
    let patched = patcher().insert_list_entry("const modules = []", &ModuleName::new("bar"));
    assert_eq!(patched.content, "const modules = [modulesBar]");
}

#[test]
fn test_entry_with_longer_name_is_not_a_duplicate() {
    let content = "const modules = [modulesBarChart]";
    let patched = patcher().insert_list_entry(content, &ModuleName::new("bar"));
    assert_eq!(patched.content, "const modules = [modulesBarChart, modulesBar]");
}

#[test]
fn test_missing_list_is_skipped() {
    let content = "export default []\n";
    let patched = patcher().insert_list_entry(content, &ModuleName::new("bar"));

    assert_eq!(patched.edit, Edit::Skipped(Miss::NoListLiteral));
    assert_eq!(patched.content, content);
}

#[test]
fn test_import_falls_back_to_section_marker() {
    let content = "// Modules\n// ---------------\n\nconst modules = []\n";
    let patched = patcher().insert_import(content, &ModuleName::new("bar"));

    assert_eq!(patched.edit, Edit::Inserted(Anchor::SectionMarker));
    assert_eq!(
        patched.content,
        "// Modules\n// ---------------\nimport modulesBar from './modules/bar'\n\nconst modules = []\n"
    );
}

#[test]
fn test_import_without_anchor_is_skipped() {
    let content = "import page from './documents/page'\n\nconst modules = []\n";
    let patched = patcher().insert_import(content, &ModuleName::new("bar"));

    assert_eq!(patched.edit, Edit::Skipped(Miss::NoImportAnchor));
    assert_eq!(patched.content, content);
}

#[test]
fn test_import_goes_after_last_module_import_in_scan_order() {
    let content = "import modulesA from './modules/a'\nimport x from './x'\nimport modulesB from './modules/b'\n";
    let patched = patcher().insert_import(content, &ModuleName::new("c"));

    assert_eq!(
        patched.content,
        "import modulesA from './modules/a'\nimport x from './x'\nimport modulesB from './modules/b'\nimport modulesC from './modules/c'\n"
    );
}

#[test]
fn test_custom_layout() {
    let layout = RegistryLayout {
        list: "blocks".to_string(),
        entry_prefix: "block".to_string(),
        import_dir: "./blocks".to_string(),
        section_marker: String::new(),
    };
    let p = RegistryPatcher::new(layout).unwrap();
    let content = "import blockHero from './blocks/hero'\n\nexport const blocks = [blockHero]\n";

    let patch = p.patch(content, &ModuleName::new("quote"));
    assert_eq!(
        patch.content,
        "import blockHero from './blocks/hero'\nimport blockQuote from './blocks/quote'\n\nexport const blocks = [blockHero, blockQuote]\n"
    );
}

const SEMICOLON_INDEX_TS: &str = "// Modules
// ---------------
import modulesHero from './modules/hero';

const modules = [
  modulesHero,
];
";

#[test]
fn test_semicolon_registry_patch_twice_is_idempotent() {
    let p = patcher();
    let module = ModuleName::new("bar");

    let first = p.patch(SEMICOLON_INDEX_TS, &module);
    assert_eq!(first.import, Edit::Inserted(Anchor::AfterLastImport));

    let second = p.patch(&first.content, &module);
    assert_eq!(second.import, Edit::AlreadyPresent);
    assert_eq!(second.entry, Edit::AlreadyPresent);
    assert_eq!(second.content, first.content);
    assert_eq!(
        second.content.matches("import modulesBar from './modules/bar'").count(),
        1
    );
}

#[test]
fn test_existing_semicolon_import_is_present() {
    let content = "import modulesHero from './modules/hero';\nimport modulesBar from './modules/bar';\n";
    let patched = patcher().insert_import(content, &ModuleName::new("bar"));

    assert_eq!(patched.edit, Edit::AlreadyPresent);
    assert_eq!(patched.content, content);
}
