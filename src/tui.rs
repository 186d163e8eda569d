use anyhow::Result;

use crate::model::{GalleryConfig, RepositoryRecord};

#[derive(Clone, Debug)]
pub struct TuiRunOptions {
    pub config: GalleryConfig,
    pub projects: Vec<RepositoryRecord>,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
