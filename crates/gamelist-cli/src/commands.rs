use super::args::{Cli, Commands};
use super::handlers;
use crate::catalog::load_catalog;
use crate::config::Config;
use crate::handlers::list::ListOptions;
use crate::presentation::ConsoleRenderer;
use crate::types::OutputFormat;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;

    // --catalog beats the config file; neither means the built-in catalog
    let catalog_path = cli.catalog.or_else(|| config.catalog.clone());
    let catalog = load_catalog(catalog_path.as_deref())?;

    let renderer = ConsoleRenderer::new(cli.format == OutputFormat::Json);

    let Some(command) = cli.command else {
        return handlers::guidance::handle(catalog.len());
    };

    match command {
        Commands::List {
            search,
            genre,
            sort,
            per_page,
            page,
            clamp,
        } => handlers::list::handle(
            &catalog,
            &config.defaults,
            &renderer,
            ListOptions {
                search,
                genre,
                sort,
                per_page,
                page,
                clamp,
            },
        ),

        Commands::Genres => handlers::genres::handle(&catalog, &renderer),

        Commands::Browse => {
            let stdin = std::io::stdin();
            handlers::browse::handle(&catalog, &config.defaults, &renderer, stdin.lock())
        }
    }
}
