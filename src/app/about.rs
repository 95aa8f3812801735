use leptos::{html, prelude::*};

use super::heading::SectionHeading;
use super::icon::SvgIcon;
use super::navigation::Navigator;
use crate::content::{Icon, ABOUT_HIGHLIGHTS, ABOUT_STACK, PROFILE};

const CORNERS: [&str; 4] = [
    "absolute top-3 left-3 lg:top-4 lg:left-4 w-6 h-6 lg:w-8 lg:h-8 border-t-2 border-l-2 border-emerald-400 opacity-60",
    "absolute top-3 right-3 lg:top-4 lg:right-4 w-6 h-6 lg:w-8 lg:h-8 border-t-2 border-r-2 border-purple-400 opacity-60",
    "absolute bottom-3 left-3 lg:bottom-4 lg:left-4 w-6 h-6 lg:w-8 lg:h-8 border-b-2 border-l-2 border-amber-400 opacity-60",
    "absolute bottom-3 right-3 lg:bottom-4 lg:right-4 w-6 h-6 lg:w-8 lg:h-8 border-b-2 border-r-2 border-emerald-400 opacity-60",
];

#[component]
pub fn About(node_ref: NodeRef<html::Section>) -> impl IntoView {
    let nav = expect_context::<Navigator>();

    view! {
        <section id="about" node_ref=node_ref class="py-16 lg:py-24 relative overflow-hidden">
            <div class="absolute inset-0 bg-gray-800/30"></div>
            <div class="absolute top-5 right-5 lg:top-10 lg:right-10 w-12 h-12 lg:w-20 lg:h-20 bg-emerald-400/10 rounded-full blur-xl"></div>
            <div class="absolute bottom-10 left-5 lg:bottom-20 lg:left-10 w-20 h-20 lg:w-32 lg:h-32 bg-purple-400/10 rounded-full blur-xl"></div>

            <div class="container mx-auto px-4 sm:px-6 relative z-10">
                <SectionHeading
                    title="About Me"
                    subtitle="Passionate developer crafting digital solutions with precision and creativity"
                />

                <div class="grid grid-cols-1 xl:grid-cols-2 gap-8 lg:gap-16 items-center">
                    <div class="relative group order-2 xl:order-1">
                        <div class="relative bg-gray-800 rounded-2xl lg:rounded-3xl p-6 lg:p-8 border-2 border-gray-700 shadow-2xl transform group-hover:scale-105 transition-transform duration-700">
                            {CORNERS
                                .iter()
                                .map(|class| view! { <div class=*class></div> })
                                .collect_view()}
                            <div class="text-center">
                                <div class="w-48 h-48 sm:w-56 sm:h-56 lg:w-64 lg:h-64 mx-auto mb-6 lg:mb-8 rounded-xl lg:rounded-2xl bg-gray-700 border-2 border-gray-600 flex items-center justify-center shadow-2xl">
                                    <SvgIcon
                                        icon=Icon::User
                                        class="h-20 w-20 sm:h-24 sm:w-24 lg:h-32 lg:w-32 text-gray-400"
                                    />
                                </div>
                                <div class="grid grid-cols-3 gap-3 lg:gap-4 mb-6 lg:mb-8">
                                    {ABOUT_STACK
                                        .iter()
                                        .map(|tech| {
                                            view! {
                                                <div class="bg-gray-800/50 rounded-lg p-2 lg:p-3 border border-gray-700">
                                                    <div class="text-xs text-gray-400">{*tech}</div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="space-y-6 lg:space-y-8 order-1 xl:order-2">
                        <h3 class="text-2xl sm:text-3xl lg:text-4xl font-bold text-gray-300">
                            "Crafting Digital Excellence"
                        </h3>
                        <div class="space-y-4 lg:space-y-6">
                            <p class="text-gray-300 leading-relaxed text-base lg:text-lg">
                                "I'm a passionate "
                                <span class="text-emerald-400 font-semibold">"Full-Stack Developer"</span>
                                " with hands-on experience building scalable web applications. I thrive on turning complex challenges into elegant, user-centric solutions that make a real difference."
                            </p>
                            <p class="text-gray-300 leading-relaxed text-base lg:text-lg">
                                "My journey in tech started with curiosity about how things work behind the screen. From building my first website to developing full-stack applications, every project has been a learning experience that fuels my passion for creating meaningful digital solutions."
                            </p>
                        </div>

                        <div class="grid grid-cols-2 gap-4 lg:gap-6 py-4 lg:py-6">
                            {ABOUT_HIGHLIGHTS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <div class="flex items-center space-x-2 lg:space-x-3 bg-gray-800/50 rounded-lg lg:rounded-xl p-3 lg:p-4 border border-gray-700">
                                            <span class="text-xl lg:text-2xl">{item.emoji}</span>
                                            <span class="text-gray-300 font-medium text-sm lg:text-base">
                                                {item.text}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="flex flex-wrap gap-4 lg:gap-6 pt-4 lg:pt-6">
                            <a
                                href=PROFILE.resume_href
                                download=PROFILE.resume_file_name
                                class="px-6 py-3 lg:px-8 lg:py-4 bg-emerald-500 hover:bg-emerald-600 text-white rounded-xl lg:rounded-2xl transition-all duration-300 transform hover:-translate-y-1 shadow-xl lg:shadow-2xl hover:shadow-3xl flex items-center group text-sm lg:text-base"
                            >
                                <SvgIcon
                                    icon=Icon::Download
                                    class="h-4 w-4 lg:h-5 lg:w-5 mr-2 lg:mr-3 group-hover:scale-110 transition-transform duration-300"
                                />
                                "Download Resume"
                            </a>
                            <button
                                class="px-6 py-3 lg:px-8 lg:py-4 border-2 border-gray-700 text-gray-300 rounded-xl lg:rounded-2xl hover:border-emerald-400 hover:text-emerald-400 transition-all duration-300 transform hover:-translate-y-1 flex items-center group text-sm lg:text-base"
                                on:click=move |_| nav.go("projects")
                            >
                                <SvgIcon
                                    icon=Icon::CodeBracket
                                    class="h-4 w-4 lg:h-5 lg:w-5 mr-2 lg:mr-3 group-hover:scale-110 transition-transform duration-300"
                                />
                                "View Projects"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
