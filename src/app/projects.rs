use leptos::{html, prelude::*};

use super::heading::SectionHeading;
use super::icon::SvgIcon;
use crate::content::{project_ordinal, Icon, Project, PROJECTS};

#[component]
pub fn Projects(node_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section id="projects" node_ref=node_ref class="py-16 lg:py-24 relative overflow-hidden">
            <div class="absolute inset-0 bg-gray-800/20"></div>
            <div class="container mx-auto px-4 sm:px-6 relative z-10">
                <SectionHeading
                    title="Featured Projects"
                    subtitle="A showcase of my recent work and creative solutions"
                />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 lg:gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| view! { <ProjectCard project=*project index=i /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    view! {
        <div class="group relative bg-gray-800 rounded-2xl lg:rounded-3xl border-2 border-gray-700 shadow-xl lg:shadow-2xl hover:shadow-3xl transition-all duration-500 transform hover:-translate-y-2 lg:hover:-translate-y-4 overflow-hidden">
            <Show when=move || project.featured>
                <div class="absolute top-3 left-3 lg:top-4 lg:left-4 bg-amber-500 text-gray-900 text-xs font-bold px-3 py-1 lg:px-4 lg:py-2 rounded-full z-10 flex items-center shadow-lg">
                    <SvgIcon icon=Icon::Star class="h-2 w-2 lg:h-3 lg:w-3 mr-1" />
                    "Featured"
                </div>
            </Show>
            <div
                class="h-48 lg:h-64 relative overflow-hidden bg-gray-700 bg-cover bg-center bg-no-repeat"
                style=format!("background-image: url('{}')", project.image)
            ></div>
            <div class="p-6 lg:p-8">
                <h3 class="text-lg lg:text-xl font-bold text-gray-200 mb-3 lg:mb-4 group-hover:text-emerald-400 transition-colors duration-300">
                    {project.title}
                </h3>
                <p class="text-gray-400 mb-4 lg:mb-6 leading-relaxed text-sm lg:text-base">
                    {project.description}
                </p>
                <div class="flex flex-wrap gap-1.5 lg:gap-2 mb-4 lg:mb-6">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-2 py-1 bg-gray-700 text-gray-300 rounded text-xs border border-gray-600">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex justify-between items-center">
                    <a
                        href=project.demo_link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center px-4 py-2 lg:px-6 lg:py-3 bg-emerald-500 hover:bg-emerald-600 text-white rounded-lg lg:rounded-xl transition-all duration-300 transform hover:-translate-y-1 shadow-lg hover:shadow-xl group/link text-sm lg:text-base"
                    >
                        <span>"Live Demo"</span>
                        <SvgIcon
                            icon=Icon::ArrowTopRightOnSquare
                            class="h-3 w-3 lg:h-4 lg:w-4 ml-1 lg:ml-2 group-hover/link:translate-x-1 transition-transform duration-300"
                        />
                    </a>
                    <span class="text-gray-500 text-xs lg:text-sm">{project_ordinal(index)}</span>
                </div>
            </div>
        </div>
    }
}
