use anyhow::Result;
use gamelist_engine::Catalog;

use crate::presentation::presenters::present_genre_list;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(catalog: &Catalog, renderer: &ConsoleRenderer) -> Result<()> {
    renderer.render(present_genre_list(catalog.genres()))
}
