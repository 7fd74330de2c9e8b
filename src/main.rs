use std::rc::Rc;

mod catalog;
mod components;
mod config;
mod model;
mod projection;
mod state;
mod util;

use catalog::Catalog;
use components::{App, AppProps, LoadError, LoadErrorProps};
use config::GameConfig;

fn main() {
    util::init_logging();
    let config = GameConfig::from_document();
    match Catalog::builtin() {
        Ok(catalog) => {
            log::info!("loaded {} stations", catalog.len());
            yew::Renderer::<App>::with_props(AppProps {
                catalog: Rc::new(catalog),
                config: Rc::new(config),
            })
            .render();
        }
        Err(e) => {
            log::error!("cannot start: {e}");
            yew::Renderer::<LoadError>::with_props(LoadErrorProps {
                message: e.to_string(),
            })
            .render();
        }
    }
    util::remove_loading_screen();
}
