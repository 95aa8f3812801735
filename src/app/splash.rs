use leptos::prelude::*;

use super::icon::SvgIcon;
use crate::content::{Icon, PROFILE};

#[component]
pub fn Splash() -> impl IntoView {
    view! {
        <div class="fixed inset-0 flex items-center justify-center bg-gray-900 z-50">
            <div class="flex flex-col items-center">
                <div class="relative mb-8">
                    <div class="w-20 h-20 md:w-24 md:h-24 border-4 border-emerald-400/20 rounded-full"></div>
                    <div class="w-20 h-20 md:w-24 md:h-24 border-4 border-emerald-400 border-t-transparent rounded-full animate-spin absolute top-0 left-0"></div>
                    <div class="absolute inset-0 flex items-center justify-center">
                        <SvgIcon
                            icon=Icon::Sparkles
                            class="h-6 w-6 md:h-8 md:w-8 text-emerald-400 animate-pulse"
                        />
                    </div>
                </div>
                <h2 class="text-xl md:text-2xl font-bold text-emerald-400 mb-4 text-center">
                    {PROFILE.name}
                </h2>
                <p class="text-gray-400 mb-6 animate-pulse text-center px-4">
                    {PROFILE.splash_line}
                </p>
                <div class="flex space-x-2">
                    {(0..3)
                        .map(|i| {
                            view! {
                                <div
                                    class="w-2 h-2 md:w-3 md:h-3 bg-emerald-400 rounded-full animate-bounce"
                                    style=format!("animation-delay: {:.1}s", i as f64 * 0.2)
                                ></div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
