use crate::constants::{exit_codes, verbosity, DEFAULT_TEMPLATE_DIR};
use crate::error::Result;
use crate::ioutils::{parse_key_values, read_vars_json};
use crate::variables::VariableSet;
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// promptkit - render prompt templates and run prompt chains.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a prompt template.
    Render(RenderArgs),

    /// Show a template's required variables, and check supplied ones.
    Validate(ValidateArgs),

    /// List available templates.
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Execute a prompt chain.
    Chain(ChainArgs),
}

/// Template root selection shared by every command.
#[derive(clap::Args, Debug, Clone)]
pub struct DirArgs {
    /// Template directory.
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_TEMPLATE_DIR)]
    pub dir: PathBuf,
}

/// Variable inputs shared by commands that render.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct VarArgs {
    /// Variable in `key=value` form; repeatable. Overrides `--vars`.
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub var: Vec<String>,

    /// Variables as a JSON object, or `-` to read it from stdin.
    #[arg(long = "vars", value_name = "JSON")]
    pub vars: Option<String>,
}

impl VarArgs {
    pub fn is_empty(&self) -> bool {
        self.var.is_empty() && self.vars.is_none()
    }

    /// Merges `--vars` and `--var` into one set.
    pub fn to_variables(&self) -> Result<VariableSet> {
        let mut variables = match &self.vars {
            Some(source) => read_vars_json(source)?,
            None => VariableSet::new(),
        };
        variables.merge(&parse_key_values(&self.var)?);
        Ok(variables)
    }
}

#[derive(Parser, Debug, Clone)]
pub struct RenderArgs {
    /// Template name.
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    #[command(flatten)]
    pub dir: DirArgs,

    #[command(flatten)]
    pub vars: VarArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Template name.
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    #[command(flatten)]
    pub dir: DirArgs,

    #[command(flatten)]
    pub vars: VarArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    #[command(flatten)]
    pub dir: DirArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct ChainArgs {
    /// Chain definition file (YAML, or JSON with a `.json` extension).
    #[arg(value_name = "CHAIN_FILE")]
    pub chain: PathBuf,

    #[command(flatten)]
    pub dir: DirArgs,

    #[command(flatten)]
    pub vars: VarArgs,

    /// Fail a step when one of its variable expressions cannot be rendered.
    #[arg(long)]
    pub strict: bool,

    /// Print every captured step output before the final output.
    #[arg(long = "show-intermediates")]
    pub show_intermediates: bool,
}

/// Parse command line arguments, printing help when a command is missing.
pub fn get_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if matches!(
            e.kind(),
            ErrorKind::MissingSubcommand
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        ) {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
