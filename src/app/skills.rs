use leptos::{html, prelude::*};

use super::heading::SectionHeading;
use super::icon::SvgIcon;
use crate::content::{Icon, SkillGroup, SKILL_GROUPS};

#[component]
pub fn Skills(node_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section id="skills" node_ref=node_ref class="py-16 lg:py-24 relative overflow-hidden">
            <div class="absolute inset-0 bg-gray-900/50"></div>
            <div class="absolute inset-0 opacity-5">
                <div class="absolute inset-0 bg-dots-emerald"></div>
            </div>

            <div class="container mx-auto px-4 sm:px-6 relative z-10">
                <SectionHeading
                    title="Technical Skills"
                    subtitle="Technologies and tools I use to bring ideas to life"
                />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 lg:gap-8">
                    {SKILL_GROUPS.iter().map(|group| view! { <SkillCard group=*group /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(group: SkillGroup) -> impl IntoView {
    view! {
        <div class="group relative bg-gray-800 rounded-2xl lg:rounded-3xl border-2 border-gray-700 shadow-xl lg:shadow-2xl hover:shadow-3xl transition-all duration-500 transform hover:-translate-y-2 lg:hover:-translate-y-3">
            <div class=format!("{} h-2 rounded-t-2xl lg:rounded-t-3xl", group.accent.bar_class())></div>
            <div class="p-6 lg:p-8">
                <div class="flex items-center mb-4 lg:mb-6">
                    <div class=format!(
                        "p-2 lg:p-3 bg-gray-700 rounded-lg lg:rounded-xl shadow-lg {}",
                        group.accent.text_class(),
                    )>
                        <SvgIcon icon=group.icon class="h-6 w-6 lg:h-8 lg:w-8" />
                    </div>
                    <div class="ml-3 lg:ml-4">
                        <h3 class="text-lg lg:text-xl font-bold text-gray-200">{group.category}</h3>
                        {group
                            .badge
                            .map(|badge| {
                                view! {
                                    <div class="inline-flex items-center px-2 py-0.5 lg:px-3 lg:py-1 bg-amber-400/10 border border-amber-400/20 rounded-full mt-1">
                                        <SvgIcon
                                            icon=Icon::Star
                                            class="h-2 w-2 lg:h-3 lg:w-3 text-amber-400 mr-1"
                                        />
                                        <span class="text-amber-400 text-xs font-bold">{badge}</span>
                                    </div>
                                }
                            })}
                    </div>
                </div>
                <div class="flex flex-wrap gap-2 lg:gap-3">
                    {group
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <span class="px-3 py-1.5 lg:px-4 lg:py-2 bg-gray-700 text-gray-200 rounded-lg lg:rounded-xl text-xs lg:text-sm font-medium shadow-lg hover:shadow-xl transition-all duration-300 hover:scale-105 border border-gray-600 hover:border-emerald-400">
                                    {*skill}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
