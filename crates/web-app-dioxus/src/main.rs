#![warn(clippy::pedantic)]

use std::sync::{Arc, Mutex};

use dioxus::prelude::*;
use log::error;

use liftlog_storage as storage;
use liftlog_web_app as web_app;

use component::{
    navbar::Navbar,
    render::{Content, NotificationDialog},
};

mod component;

const BULMA_CSS: &str = "https://cdn.jsdelivr.net/npm/bulma@1.0.4/css/bulma.min.css";

type Storage = storage::JsonStorage<storage::LocalStorage>;

static APP: GlobalSignal<web_app::App<Storage>> =
    Signal::global(|| web_app::App::new(storage::JsonStorage::new(storage::LocalStorage)));

fn main() {
    init_logging();
    set_panic_hook();
    dioxus::launch(App);
}

fn init_logging() {
    let _ = web_app::log::init(Arc::new(Mutex::new(storage::JsonStorage::new(
        storage::LocalStorage,
    ))));
}

fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        error!("{info}");
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("main"))
            .map(|el| {
                el.set_inner_html(&format!("
                    <section class=\"section\">
                        <div class=\"container\">
                            <div class=\"message is-danger\">
                                <div class=\"message-header\">
                                    <p>Something went wrong</p>
                                </div>
                                <div class=\"message-body\">
                                    <div class=\"block\">
                                        An unexpected error occurred and the application cannot continue.
                                    </div>
                                    <div class=\"block\">
                                        <pre>{info}</pre>
                                    </div>
                                    <div class=\"block field is-grouped is-grouped-centered\">
                                        <button class=\"button\" onclick=\"location.reload()\">
                                            Reload page
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </section>
                "));
                Some(())
            });
    }));
}

#[component]
fn App() -> Element {
    use_effect(|| apply_theme(APP.read().settings().current_theme()));

    let view = APP.read().view();

    rsx! {
        document::Link { rel: "stylesheet", href: BULMA_CSS }

        Navbar { screen: view.screen }
        div {
            class: "container is-max-desktop py-4 px-2",
            Content { node: view.content }
        }
        if let Some(notification) = view.notification {
            NotificationDialog { notification }
        }
    }
}

fn apply_theme(theme: web_app::Theme) {
    let value = match theme {
        web_app::Theme::Dark => "dark",
        web_app::Theme::Light | web_app::Theme::System => "light",
    };
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        if let Err(err) = root.set_attribute("data-theme", value) {
            error!("failed to apply theme: {err:?}");
        }
    }
}
