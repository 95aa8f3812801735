mod about;
mod backdrop;
mod contact;
mod footer;
mod heading;
mod hero;
mod icon;
mod nav;
mod navigation;
mod projects;
mod skills;
mod splash;

use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::config::SiteConfig;
use crate::content::PROFILE;

use about::About;
use backdrop::Backdrop;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use nav::{MobileNav, SideNav};
use navigation::use_section_tracking;
use projects::Projects;
use skills::Skills;
use splash::Splash;

pub use navigation::Navigator;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="build-time" content=env!("BUILD_TIME") />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-900 text-gray-200">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The whole single page: splash first, then navigation and the sections.
#[component]
fn Portfolio() -> impl IntoView {
    let config = SiteConfig::default();
    let (is_loading, set_is_loading) = signal(true);

    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| set_is_loading.set(false), config.splash_ms());
    Effect::new(move |_| start(()));

    let home = NodeRef::<html::Section>::new();
    let about = NodeRef::<html::Section>::new();
    let skills = NodeRef::<html::Section>::new();
    let projects = NodeRef::<html::Section>::new();
    let contact = NodeRef::<html::Section>::new();

    let navigator = use_section_tracking(
        &config,
        [
            ("home", home),
            ("about", about),
            ("skills", skills),
            ("projects", projects),
            ("contact", contact),
        ],
    );
    provide_context(navigator);

    view! {
        <Title text=PROFILE.role />
        <Show when=move || !is_loading.get() fallback=|| view! { <Splash /> }>
            <div class="min-h-screen bg-gray-900 text-gray-200 overflow-x-hidden">
                <MobileNav />
                <SideNav />
                <div class="lg:ml-20 xl:ml-64 transition-all duration-300 pt-16 lg:pt-0">
                    <Backdrop depth=config.parallax_depth />
                    {view! {
                        <Hero node_ref=home />
                        <About node_ref=about />
                        <Skills node_ref=skills />
                        <Projects node_ref=projects />
                        <Contact node_ref=contact />
                    }
                        .into_any()}
                    <Footer />
                </div>
            </div>
        </Show>
    }
}
