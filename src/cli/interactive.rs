use std::io::Write;

use anyhow::Context;
use inquire::{Confirm, Select, Text};
use tracing::debug;

use crate::config::{DEFAULT_ROOT, DEFAULT_SCHEMA};
use crate::scaffold::{Reporter, scaffold};
use crate::types::SchemaType;

use super::render;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Answers {
    pub schema: String,
    pub root: String,
    pub schema_type: SchemaType,
    pub confirm: bool,
}

pub(super) trait Prompter {
    fn text(&mut self, message: &str, default: &str) -> anyhow::Result<String>;
    fn select(&mut self, message: &str, choices: &[SchemaType]) -> anyhow::Result<SchemaType>;
    fn confirm(&mut self, message: &str) -> anyhow::Result<bool>;
}

pub(super) struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn text(&mut self, message: &str, default: &str) -> anyhow::Result<String> {
        Text::new(message)
            .with_default(default)
            .prompt()
            .with_context(|| format!("prompt failed: {message}"))
    }

    fn select(&mut self, message: &str, choices: &[SchemaType]) -> anyhow::Result<SchemaType> {
        Select::new(message, choices.to_vec())
            .prompt()
            .with_context(|| format!("prompt failed: {message}"))
    }

    fn confirm(&mut self, message: &str) -> anyhow::Result<bool> {
        Confirm::new(message)
            .with_default(true)
            .prompt()
            .with_context(|| format!("prompt failed: {message}"))
    }
}

pub(super) fn ask(prompter: &mut impl Prompter) -> anyhow::Result<Answers> {
    let schema = prompter.text("Enter a schema name.", DEFAULT_SCHEMA)?;
    let root = prompter.text("Enter the root folder.", DEFAULT_ROOT)?;
    let schema_type = prompter.select("Choose a schema type.", &SchemaType::ALL)?;
    let confirm = prompter.confirm("Create?")?;
    Ok(Answers {
        schema,
        root,
        schema_type,
        confirm,
    })
}

/// Asks, then scaffolds and writes the exit notice to `out` only if the user confirmed.
pub(super) fn run(
    prompter: &mut impl Prompter,
    reporter: &mut impl Reporter,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let answers = ask(prompter)?;
    if !answers.confirm {
        debug!("scaffold declined");
        return Ok(());
    }
    scaffold(
        &answers.schema,
        &answers.root,
        answers.schema_type.as_str(),
        reporter,
    )?;
    writeln!(out, "{}", render::exit_notice())?;
    Ok(())
}
