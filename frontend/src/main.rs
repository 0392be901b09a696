use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn, Level};
use web_sys::{window, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod shell;
mod styles;
mod contact {
    pub mod form;
    pub mod sink;
    pub mod section;
}
mod pages {
    pub mod landing;
    pub mod legal;
}
mod components {
    pub mod footer;
}

use content::{Icon, CONTACT, NAV_LINKS};
use pages::{
    landing::Landing,
    legal::{LegalNotice, NotFound, TermsOfSale},
};
use shell::NavState;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/mentions-legales")]
    LegalNotice,
    #[at("/cgv")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::LegalNotice => {
            info!("Rendering Legal notice page");
            html! { <LegalNotice /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfSale /> }
        },
        Route::NotFound => {
            info!("Rendering Not found page");
            html! { <NotFound /> }
        },
    }
}

pub enum NavMsg {
    ToggleMenu,
    CloseMenu,
    Scrolled(f64),
}

pub struct Nav {
    state: NavState,
    scroll_listener: Option<Closure<dyn FnMut()>>,
}

impl Component for Nav {
    type Message = NavMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let scroll_listener = window().map(|window| {
            let win = window.clone();
            let callback = Closure::wrap(Box::new(move || {
                let scroll_y = win.scroll_y().unwrap_or(0.0);
                link.send_message(NavMsg::Scrolled(scroll_y));
            }) as Box<dyn FnMut()>);

            if window
                .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                .is_err()
            {
                warn!("Could not attach scroll listener, nav stays unscrolled");
            }
            callback
        });

        Self {
            state: NavState::default(),
            scroll_listener,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            NavMsg::ToggleMenu => {
                self.state.toggle_menu();
                true
            }
            NavMsg::CloseMenu => {
                let was_open = self.state.menu_open;
                self.state.close_menu();
                was_open
            }
            // only re-render when crossing the threshold
            NavMsg::Scrolled(scroll_y) => self.state.on_scroll(scroll_y),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toggle_menu = ctx.link().callback(|e: MouseEvent| {
            e.prevent_default();
            NavMsg::ToggleMenu
        });
        // anchors still navigate, we only fold the menu
        let close_menu = ctx.link().callback(|_: MouseEvent| NavMsg::CloseMenu);

        let menu_class = if self.state.menu_open {
            "nav-right mobile-menu-open"
        } else {
            "nav-right"
        };

        html! {
            <nav class={classes!("top-nav", self.state.scrolled.then(|| "scrolled"))}>
                <div class="nav-content">
                    <a href="/" class="nav-logo">
                        <span class="logo-mark">{ Icon::Building.glyph() }</span>
                        <span>
                            <span class="logo-name">{ CONTACT.company }</span>
                            <span class="logo-tagline">{ CONTACT.tagline }</span>
                        </span>
                    </a>

                    <button class="burger-menu" onclick={toggle_menu}>
                        { if self.state.menu_open { "✕" } else { "☰" } }
                    </button>
                    <div class={menu_class}>
                        { for NAV_LINKS.iter().map(|link| {
                            let (class, label) = if link.is_contact() {
                                ("nav-cta", "Devis gratuit")
                            } else {
                                ("nav-link", link.label)
                            };
                            html! {
                                <a href={link.href()} class={class} onclick={close_menu.clone()}>
                                    { label }
                                </a>
                            }
                        })}
                    </div>
                </div>
            </nav>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(callback)) = (window(), self.scroll_listener.take()) {
            let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{ styles::GLOBAL }</style>
            <Nav />
            <main class="page">
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
