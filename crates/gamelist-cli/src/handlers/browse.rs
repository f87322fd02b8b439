use anyhow::{Result, bail};
use gamelist_engine::{Catalog, ViewAction, reduce};
use gamelist_types::{Error, GenreFilter, OutOfRange, ViewParameters, page_number};
use std::io::BufRead;

use crate::config::ViewDefaults;
use crate::presentation::presenters::{
    Surface, present_browse_help, present_catalog_page, present_genre_list,
};
use crate::presentation::{ConsoleRenderer, Renderer};

/// One line of input in a browse session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Apply(ViewAction),
    Next,
    Prev,
    Show,
    Genres,
    Help,
    Quit,
}

/// Parse a session line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<BrowseCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "search" => BrowseCommand::Apply(ViewAction::SetSearchTerm(rest.to_string())),
        "genre" => BrowseCommand::Apply(ViewAction::SetGenreFilter(GenreFilter::from(
            rest.to_string(),
        ))),
        "sort" => BrowseCommand::Apply(ViewAction::SetSortKey(rest.parse()?)),
        "per-page" | "size" => BrowseCommand::Apply(ViewAction::SetPageSize(rest.parse()?)),
        "page" => {
            let page: i64 = rest.parse().map_err(|_| {
                Error::invalid_parameter(format!("page must be a number, got '{}'", rest))
            })?;
            BrowseCommand::Apply(ViewAction::SetPage(page_number(page)?))
        }
        "next" => BrowseCommand::Next,
        "prev" | "previous" => BrowseCommand::Prev,
        "show" => BrowseCommand::Show,
        "genres" => BrowseCommand::Genres,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "exit" | "q" => BrowseCommand::Quit,
        other => bail!("unknown command '{}' (type 'help' for a list)", other),
    };

    Ok(Some(command))
}

/// Owns the mutable view parameters for an interactive session.
pub struct BrowseSession<'a> {
    catalog: &'a Catalog,
    params: ViewParameters,
    policy: OutOfRange,
}

impl<'a> BrowseSession<'a> {
    pub fn new(catalog: &'a Catalog, defaults: &ViewDefaults) -> Self {
        Self {
            catalog,
            params: defaults.initial_parameters(),
            policy: defaults.out_of_range,
        }
    }

    pub fn params(&self) -> &ViewParameters {
        &self.params
    }

    /// Apply one action; on error the previous parameters stay in place.
    pub fn apply(&mut self, action: ViewAction) -> Result<()> {
        self.params = reduce(&self.params, action)?;
        Ok(())
    }

    /// Returns `false` when already on the last page.
    pub fn next_page(&mut self) -> Result<bool> {
        let view = self.catalog.view_with(&self.params, self.policy)?;
        if !view.has_next_page() {
            return Ok(false);
        }
        let target = view.current_page + 1;
        self.apply(ViewAction::SetPage(target))?;
        Ok(true)
    }

    /// Returns `false` when already on the first page.
    pub fn prev_page(&mut self) -> Result<bool> {
        let view = self.catalog.view_with(&self.params, self.policy)?;
        if !view.has_previous_page() {
            return Ok(false);
        }
        // From an out-of-range page, step back onto the last real page
        let target = (view.current_page - 1).min(view.page_count.max(1));
        self.apply(ViewAction::SetPage(target))?;
        Ok(true)
    }

    pub fn render(&self, renderer: &impl Renderer) -> Result<()> {
        let view = self.catalog.view_with(&self.params, self.policy)?;
        renderer.render(present_catalog_page(&view, &self.params, Surface::Browse))
    }
}

pub fn handle(
    catalog: &Catalog,
    defaults: &ViewDefaults,
    renderer: &ConsoleRenderer,
    input: impl BufRead,
) -> Result<()> {
    let mut session = BrowseSession::new(catalog, defaults);
    session.render(renderer)?;

    for line in input.lines() {
        let line = line?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                renderer.render_warning(&format!("Error: {:#}", e))?;
                continue;
            }
        };
        log::debug!("browse command: {:?}", command);

        match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => renderer.render(present_browse_help())?,
            BrowseCommand::Genres => renderer.render(present_genre_list(catalog.genres()))?,
            BrowseCommand::Show => session.render(renderer)?,
            BrowseCommand::Next => {
                if session.next_page()? {
                    session.render(renderer)?;
                } else {
                    renderer.render_warning("Already on the last page")?;
                }
            }
            BrowseCommand::Prev => {
                if session.prev_page()? {
                    session.render(renderer)?;
                } else {
                    renderer.render_warning("Already on the first page")?;
                }
            }
            BrowseCommand::Apply(action) => match session.apply(action) {
                Ok(()) => session.render(renderer)?,
                Err(e) => renderer.render_warning(&format!("Error: {:#}", e))?,
            },
        }
    }

    log::debug!("browse session ended with {:?}", session.params());
    Ok(())
}
