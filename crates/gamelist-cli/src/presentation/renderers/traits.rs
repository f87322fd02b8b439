use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;

use crate::presentation::view_models::CommandResultViewModel;

pub trait Renderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display;

    /// Recoverable problems (bad input in an interactive session, etc.)
    fn render_warning(&self, message: &str) -> Result<()>;
}
