use crate::{
    chain::{ChainDefinition, ChainExecutor},
    cli::args::{ChainArgs, Cli, Commands, ListArgs, RenderArgs, ValidateArgs},
    config::Config,
    error::Result,
    registry::TemplateRegistry,
    renderer::{PromptRenderer, TemplateRenderer},
    validation::validate,
};
use log::debug;
use std::io::Write;
use std::path::Path;

/// Executes the parsed command, writing its output to stdout.
pub fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch(cli.command, &mut out)
}

/// Executes `command`, writing its output to `out`.
pub fn dispatch(command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Render(args) => render(args, out),
        Commands::Validate(args) => validate_template(args, out),
        Commands::List(args) => list(args, out),
        Commands::Chain(args) => chain(args, out),
    }
}

/// Loads the configuration and registry of a template root.
fn load(dir: &Path) -> Result<(Config, TemplateRegistry)> {
    let config = Config::load_config(dir)?;
    let registry = TemplateRegistry::load_with_config(dir, &config)?;
    Ok((config, registry))
}

fn render(args: RenderArgs, out: &mut impl Write) -> Result<()> {
    let (_, registry) = load(&args.dir.dir)?;
    let record = registry.get(&args.template)?;
    let vars = args.vars.to_variables()?;

    validate(&record.metadata.required_vars, &vars)?;

    let engine = PromptRenderer::new();
    let result = engine.render(&record.content, &vars, registry.includes())?;
    write!(out, "{}", result.output)?;
    Ok(())
}

fn validate_template(args: ValidateArgs, out: &mut impl Write) -> Result<()> {
    let (_, registry) = load(&args.dir.dir)?;
    let record = registry.get(&args.template)?;

    if !record.metadata.has_required_vars() {
        writeln!(out, "No required variables.")?;
        return Ok(());
    }

    writeln!(out, "Required variables for '{}':", record.name)?;
    for name in &record.metadata.required_vars {
        writeln!(out, "  - {name}")?;
    }

    if !args.vars.is_empty() {
        let vars = args.vars.to_variables()?;
        validate(&record.metadata.required_vars, &vars)?;
        writeln!(out, "All required variables supplied.")?;
    }
    Ok(())
}

fn list(args: ListArgs, out: &mut impl Write) -> Result<()> {
    let (_, registry) = load(&args.dir.dir)?;

    if registry.is_empty() {
        writeln!(out, "No templates found.")?;
        return Ok(());
    }

    for record in registry.list() {
        let description = if record.metadata.description.is_empty() {
            "(no description)"
        } else {
            record.metadata.description.as_str()
        };
        writeln!(out, "{:<20} {}", record.name, description)?;
    }
    Ok(())
}

fn chain(args: ChainArgs, out: &mut impl Write) -> Result<()> {
    let def = ChainDefinition::from_file(&args.chain)?;
    let (config, registry) = load(&args.dir.dir)?;
    let vars = args.vars.to_variables()?;

    let strict = args.strict || config.strict_resolution;
    debug!("Variable resolution is {}.", if strict { "strict" } else { "lenient" });

    let engine = PromptRenderer::new();
    let result = ChainExecutor::new(&registry, &engine)
        .strict_resolution(strict)
        .execute(&def, &vars)?;

    if args.show_intermediates {
        for (name, output) in &result.intermediates {
            writeln!(out, "=== {name} ===")?;
            writeln!(out, "{output}")?;
        }
        writeln!(out, "=== output ===")?;
    }
    write!(out, "{}", result.output)?;
    Ok(())
}
