use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::config::{schema_dir, template_path};
use crate::paths::{ensure_dir, exists};
use crate::templates::render_kind;
use crate::types::{SchemaType, TemplateKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

impl Outcome {
    pub fn path(&self) -> &Path {
        match self {
            Outcome::Created(p) | Outcome::AlreadyExists(p) => p,
        }
    }
}

/// Receives each per-file outcome as soon as it happens.
pub trait Reporter {
    fn report(&mut self, outcome: &Outcome);
}

impl Reporter for Vec<Outcome> {
    fn report(&mut self, outcome: &Outcome) {
        self.push(outcome.clone());
    }
}

/// Writes `<root>/<schema>/<schema>.resolvers.js` and `<schema>.typeDefs.js`.
///
/// Files that already exist are left untouched and reported as such. There is no rollback:
/// if the second write fails, the first file stays on disk.
pub fn scaffold(
    schema: &str,
    root: &str,
    type_tag: &str,
    reporter: &mut impl Reporter,
) -> anyhow::Result<()> {
    let schema_type = SchemaType::from_tag(type_tag);
    let dir = schema_dir(root, schema);
    ensure_dir(&dir)?;

    for kind in TemplateKind::ALL {
        let path = template_path(&dir, schema, kind);
        if exists(&path) {
            debug!(path = %path.display(), "skipping existing file");
            reporter.report(&Outcome::AlreadyExists(path));
            continue;
        }
        fs::write(&path, render_kind(kind, schema, schema_type))
            .with_context(|| format!("failed to write {}", path.display()))?;
        debug!(path = %path.display(), template = %kind, "wrote file");
        reporter.report(&Outcome::Created(path));
    }

    Ok(())
}
