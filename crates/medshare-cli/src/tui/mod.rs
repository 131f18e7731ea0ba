mod app;
mod view;

use medshare_core::catalog::Catalog;
use medshare_core::config::Config;

pub fn run_picker(catalog: &Catalog, config: &Config) -> color_eyre::Result<Option<String>> {
    Ok(app::run_picker(catalog, config, false)?.into_iter().next())
}

/// Run the picker with TAB-toggled multi selection. Returns names in catalog order.
pub fn run_multi_picker(catalog: &Catalog, config: &Config) -> color_eyre::Result<Vec<String>> {
    app::run_picker(catalog, config, true)
}
