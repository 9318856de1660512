//! spar's main application entry point.
//! Parses arguments, runs the generator and hands the result to the writer.

use spar::{
    cli::{get_args, Args},
    composer::Composer,
    config::{get_config, Settings},
    error::{default_error_handler, Result},
    generator::{Generator, Scope},
    logger::init_logger,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    store::{EmbeddedStore, FileSystemStore, TemplateStore},
    writer::{plan_writes, write_files},
};

fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Merges the configuration file with command-line flags
/// 2. Selects the template store
/// 3. Runs the generator to completion
/// 4. Decides overwrites for every file, then writes them
fn run(args: Args) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let settings = Settings::resolve(&args, get_config(&current_dir)?);

    let store: Box<dyn TemplateStore> = match &settings.templates_dir {
        Some(dir) => {
            println!("Using templates from '{}'", dir.display());
            Box::new(FileSystemStore::new(dir))
        }
        None => Box::new(EmbeddedStore::new()),
    };
    let renderer = MiniJinjaRenderer::new();
    let generator =
        Generator::new(Composer::new(&*store, &renderer)).with_policy(settings.invalid_attributes);

    let mut scope = Scope::new(args.tokens());
    scope.root_path = Some(settings.output_dir.clone().unwrap_or(current_dir));

    let generation = generator.generate(scope)?;

    if settings.dry_run {
        for file in &generation.files {
            println!("--- {}", file.destination.display());
            println!("{}", file.content);
        }
        return Ok(());
    }

    let prompt = DialoguerPrompter::new();
    let plan = plan_writes(&generation.files, &prompt, settings.force)?;
    write_files(&generation.files, &plan)?;

    for (file, action) in generation.files.iter().zip(&plan) {
        println!("{}: '{}'", action, file.destination.display());
    }
    Ok(())
}
