use std::convert::Infallible;

use leptos::prelude::*;
use leptos_use::{
    use_mouse_with_options, use_window_size, UseMouseCoordType, UseMouseOptions, UseMouseReturn,
    UseMouseSourceType, UseWindowSizeReturn,
};

use crate::parallax::{layer_transform, sampled_ratio};

/// Blurred blobs and grid behind the page, drifting with the pointer.
#[component]
pub fn Backdrop(depth: f64) -> impl IntoView {
    let UseMouseReturn {
        x, y, source_type, ..
    } = use_mouse_with_options(
        UseMouseOptions::default().coord_type(UseMouseCoordType::<Infallible>::Client),
    );
    let UseWindowSizeReturn { width, height } = use_window_size();
    let ratio = Memo::new(move |_| {
        let sample = match source_type.get() {
            UseMouseSourceType::Unset => None,
            _ => Some((x.get(), y.get())),
        };
        sampled_ratio(sample, width.get(), height.get())
    });

    let layer = move |factor: f64| move || format!("transform: {}", layer_transform(ratio.get(), depth * factor));

    view! {
        <div class="fixed inset-0 -z-10 overflow-hidden">
            <div
                class="absolute top-10 left-5 w-48 h-48 md:w-72 md:h-72 transition-transform duration-700 ease-out"
                style=layer(1.0)
            >
                <div class="w-full h-full bg-emerald-400/5 rounded-full blur-3xl animate-float-slow"></div>
            </div>
            <div
                class="absolute bottom-20 right-5 w-56 h-56 md:w-96 md:h-96 transition-transform duration-700 ease-out"
                style=layer(-0.6)
            >
                <div class="w-full h-full bg-purple-400/5 rounded-full blur-3xl animate-float-reverse"></div>
            </div>
            <div
                class="absolute top-1/2 left-1/2 w-40 h-40 md:w-64 md:h-64 transition-transform duration-700 ease-out"
                style=layer(0.4)
            >
                <div class="w-full h-full bg-amber-400/5 rounded-full blur-3xl animate-pulse-slow"></div>
            </div>
            <div class="absolute inset-0 opacity-5 bg-grid-emerald"></div>
        </div>
    }
}
