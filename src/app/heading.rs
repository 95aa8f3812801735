use leptos::prelude::*;

#[component]
pub fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-12 lg:mb-20">
            <h2 class="text-3xl sm:text-4xl md:text-5xl lg:text-6xl font-bold mb-4 lg:mb-6">
                <span class="text-emerald-400">{title}</span>
            </h2>
            <div class="w-20 lg:w-32 h-1 bg-emerald-400 mx-auto rounded-full mb-3 lg:mb-4"></div>
            <p class="text-gray-400 text-base lg:text-lg max-w-3xl mx-auto">{subtitle}</p>
        </div>
    }
}
