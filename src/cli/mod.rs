use std::io::IsTerminal;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use tracing::trace;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::config::{DEFAULT_ROOT, DEFAULT_TYPE_TAG};
use crate::scaffold::scaffold;

mod interactive;
mod render;

use interactive::InquirePrompter;
use render::TerminalReporter;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "gsc")]
#[command(about = "Scaffold GraphQL resolver and type-definition files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print the version number.
    #[arg(short = 'v', long = "version", default_value_t = false)]
    pub version: bool,

    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    pub color: ColorMode,

    /// `tracing` filter directives; overrides `RUST_LOG`.
    #[arg(long, global = true, hide = true)]
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create a template.
    #[command(
        visible_alias = "tpl",
        override_usage = "gsc template <schema> --root [root] --type [type]"
    )]
    Template(TemplateArgs),

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

#[derive(Debug, Clone, Args)]
pub struct TemplateArgs {
    pub schema: String,

    /// Enter the root directory.
    #[arg(
        short,
        long,
        value_name = "root",
        num_args = 0..=1,
        default_value = DEFAULT_ROOT,
        default_missing_value = DEFAULT_ROOT
    )]
    pub root: String,

    /// Enter a name for the type. Query | Mutation
    #[arg(
        short = 't',
        long = "type",
        value_name = "type",
        num_args = 0..=1,
        default_value = DEFAULT_TYPE_TAG,
        default_missing_value = DEFAULT_TYPE_TAG
    )]
    pub schema_type: String,
}

pub fn init_tracing(cli: &Cli) {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::WARN.into());
    let filter = match cli.log_filter.as_deref() {
        Some(directives) => builder.parse_lossy(directives),
        None => builder.from_env_lossy(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    colored::control::set_override(should_color(&cli));

    match cli.command {
        Some(Command::Template(args)) => {
            trace!(
                schema = %args.schema,
                root = %args.root,
                schema_type = %args.schema_type,
                "template"
            );
            scaffold(
                &args.schema,
                &args.root,
                &args.schema_type,
                &mut TerminalReporter,
            )
        }
        Some(Command::Unknown(args)) => {
            trace!(?args, "unrecognized command");
            println!("{}", render::command_not_found());
            Cli::command().print_help()?;
            Ok(())
        }
        None => interactive::run(
            &mut InquirePrompter,
            &mut TerminalReporter,
            &mut std::io::stdout(),
        ),
    }
}

fn should_color(cli: &Cli) -> bool {
    match cli.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}
