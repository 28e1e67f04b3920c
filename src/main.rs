use dioxus::prelude::*;
use dashboard_shell::pages::Dashboard;
use dashboard_shell::ShellConfig;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

// Shell settings bundled with the app
static SHELL_CONFIG: &str = include_str!("../assets/shell.json");

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logging: {err}");
    }
    dioxus::launch(App);
}

fn load_config() -> ShellConfig {
    match ShellConfig::from_json(SHELL_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(%err, "falling back to default shell configuration");
            ShellConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    use_context_provider(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
