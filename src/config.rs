use std::path::{Path, PathBuf};

use crate::types::TemplateKind;

pub const DEFAULT_ROOT: &str = "users";
pub const DEFAULT_SCHEMA: &str = "index";
pub const DEFAULT_TYPE_TAG: &str = "Query";

/// `<root>/<schema>`
pub fn schema_dir(root: &str, schema: &str) -> PathBuf {
    let mut p = PathBuf::from(root);
    p.push(schema);
    p
}

/// `<dir>/<schema><extension>`, e.g. `users/signUp/signUp.typeDefs.js`.
pub fn template_path(dir: &Path, schema: &str, kind: TemplateKind) -> PathBuf {
    dir.join(format!("{schema}{}", kind.extension()))
}
