use chrono::{Datelike, Utc};
use leptos::prelude::*;

use super::icon::SvgIcon;
use crate::content::{Icon, PROFILE, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="py-12 lg:py-16 bg-gray-900 border-t border-gray-700/50 relative overflow-hidden">
            <div class="container mx-auto px-4 sm:px-6 relative z-10">
                <div class="text-center">
                    <a
                        href="#"
                        class="text-2xl lg:text-3xl font-bold text-emerald-400 mb-4 lg:mb-6 inline-block"
                    >
                        <span class="flex items-center justify-center">
                            <SvgIcon
                                icon=Icon::Sparkles
                                class="h-6 w-6 lg:h-8 lg:w-8 mr-2 lg:mr-3 text-amber-400"
                            />
                            {PROFILE.name}
                        </span>
                    </a>
                    <p class="text-gray-400 mb-6 lg:mb-8 max-w-md mx-auto text-sm lg:text-lg">
                        {PROFILE.tagline}
                    </p>
                    <div class="flex justify-center space-x-4 lg:space-x-6 mb-6 lg:mb-8">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.label
                                        class=format!(
                                            "p-2 lg:p-3 bg-gray-800 rounded-xl lg:rounded-2xl border-2 border-gray-700 shadow-lg hover:shadow-xl transition-all duration-300 transform hover:-translate-y-1 hover:scale-110 hover:border-emerald-400 {}",
                                            link.accent.text_class(),
                                        )
                                    >
                                        <SvgIcon icon=link.icon class="h-4 w-4 lg:h-6 lg:w-6" />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="border-t border-gray-700/50 pt-6 lg:pt-8">
                        <p class="text-gray-500 text-sm lg:text-base">
                            {format!(
                                "© {year} {}. Crafted with passion and precision.",
                                PROFILE.name,
                            )}
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
