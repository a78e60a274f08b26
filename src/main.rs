use leptos::prelude::*;
use project_manager_ui::app::App;
use project_manager_ui::config::AppConfig;
use project_manager_ui::logging;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    logging::init(config.log_level);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
