use leptos::{html, prelude::*};

use super::heading::SectionHeading;
use super::icon::SvgIcon;
use crate::content::CONTACT_CARDS;

const FIELD_CLASS: &str = "w-full px-3 py-2 lg:px-4 lg:py-3 bg-gray-700 border-2 border-gray-600 rounded-lg lg:rounded-xl focus:ring-2 focus:ring-emerald-400 focus:border-transparent text-white transition-all duration-300 shadow-lg text-sm lg:text-base";
const LABEL_CLASS: &str = "block text-sm font-medium mb-2 lg:mb-3 text-gray-400";

#[component]
pub fn Contact(node_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section id="contact" node_ref=node_ref class="py-16 lg:py-24 relative overflow-hidden">
            <div class="absolute inset-0 bg-gray-900/50"></div>
            <div class="container mx-auto px-4 sm:px-6 relative z-10">
                <SectionHeading
                    title="Get In Touch"
                    subtitle="Let's discuss your next project or opportunity"
                />
                <div class="max-w-6xl mx-auto">
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 lg:gap-12">
                        <MessageForm />
                        <div class="space-y-6 lg:space-y-8">
                            <div>
                                <h3 class="text-2xl lg:text-3xl font-bold mb-4 lg:mb-6 text-gray-200">
                                    "Contact Information"
                                </h3>
                                <p class="text-gray-400 text-base lg:text-lg leading-relaxed">
                                    "Feel free to reach out to me for any questions or opportunities. I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision."
                                </p>
                            </div>
                            <div class="grid grid-cols-1 gap-4 lg:gap-6">
                                {CONTACT_CARDS
                                    .iter()
                                    .map(|card| {
                                        view! {
                                            <a
                                                href=card.link
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="flex items-center p-4 lg:p-6 bg-gray-800 rounded-xl lg:rounded-2xl border-2 border-gray-600 shadow-lg hover:shadow-xl transition-all duration-300 transform hover:-translate-y-1 lg:hover:-translate-y-2 group cursor-pointer"
                                            >
                                                <div class=format!(
                                                    "p-2 lg:p-4 rounded-lg bg-gray-700 group-hover:bg-emerald-400/10 transition-colors duration-300 {}",
                                                    card.accent.text_class(),
                                                )>
                                                    <SvgIcon icon=card.icon class="h-5 w-5 lg:h-6 lg:w-6" />
                                                </div>
                                                <div class="ml-4 lg:ml-6">
                                                    <h4 class="font-semibold text-gray-200 group-hover:text-white transition-colors duration-300 text-sm lg:text-base">
                                                        {card.title}
                                                    </h4>
                                                    <p class="text-gray-400 text-xs lg:text-sm mt-1">
                                                        {card.content}
                                                    </p>
                                                </div>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Visual-only form; there is no backend to deliver messages to.
#[component]
fn MessageForm() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-2xl lg:rounded-3xl border-2 border-gray-700 shadow-xl lg:shadow-2xl p-6 lg:p-8 transform hover:shadow-3xl transition-all duration-500">
            <h3 class="text-2xl lg:text-3xl font-bold mb-6 lg:mb-8 text-gray-200">"Send Message"</h3>
            <form
                class="space-y-4 lg:space-y-6"
                on:submit=move |ev| {
                    ev.prevent_default();
                    log::debug!("contact form submitted; no backend configured");
                }
            >
                <div class="grid grid-cols-1 gap-4 lg:gap-6">
                    <div>
                        <label for="name" class=LABEL_CLASS>
                            "Your Name"
                        </label>
                        <input type="text" id="name" class=FIELD_CLASS placeholder="Your Name" />
                    </div>
                    <div>
                        <label for="email" class=LABEL_CLASS>
                            "Email Address"
                        </label>
                        <input
                            type="email"
                            id="email"
                            class=FIELD_CLASS
                            placeholder="your@email.com"
                        />
                    </div>
                    <div>
                        <label for="subject" class=LABEL_CLASS>
                            "Subject"
                        </label>
                        <input
                            type="text"
                            id="subject"
                            class=FIELD_CLASS
                            placeholder="Project Discussion"
                        />
                    </div>
                    <div>
                        <label for="message" class=LABEL_CLASS>
                            "Your Message"
                        </label>
                        <textarea
                            id="message"
                            rows="4"
                            class=FIELD_CLASS
                            placeholder="Hello, I would like to talk about..."
                        ></textarea>
                    </div>
                </div>
                <button
                    type="submit"
                    class="w-full px-6 py-3 lg:px-6 lg:py-4 bg-emerald-500 hover:bg-emerald-600 text-white rounded-xl lg:rounded-2xl transition-all duration-300 transform hover:-translate-y-1 shadow-xl lg:shadow-2xl hover:shadow-3xl font-bold text-sm lg:text-lg"
                >
                    "Send Message"
                </button>
            </form>
        </div>
    }
}
