use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_window};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::config::{ScrollAlign, SiteConfig};
use crate::tracker::{Bounds, FrameGate, Measure, ScrollHost, SectionTracker};

type SectionRef = NodeRef<html::Section>;

impl Measure for SectionRef {
    fn bounds(&self) -> Option<Bounds> {
        let el = self.get_untracked()?;
        Some(Bounds::new(el.offset_top() as f64, el.offset_height() as f64))
    }
}

#[derive(Debug, Clone, Copy)]
struct PageHost {
    menu_open: RwSignal<bool>,
}

impl ScrollHost<SectionRef> for PageHost {
    fn smooth_scroll(&self, target: &SectionRef, align: ScrollAlign) {
        let el = if let Some(el) = target.get_untracked() {
            el
        } else {
            log::warn!("navigation target is not mounted");
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(align.into());
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn collapse_menu(&self) {
        self.menu_open.set(false);
    }
}

/// Handle shared through context with every component that navigates or
/// highlights the active section.
#[derive(Clone, Copy)]
pub struct Navigator {
    tracker: StoredValue<SectionTracker<SectionRef>>,
    host: PageHost,
    active: RwSignal<String>,
}

impl Navigator {
    pub fn go(&self, id: &str) {
        let host = self.host;
        let res = self.tracker.with_value(|t| t.scroll_to(id, &host));
        if let Err(e) = res {
            log::error!("navigation failed: {e}");
        }
    }

    /// Reactive.
    pub fn is_active(&self, id: &str) -> bool {
        self.active.with(|active| active == id)
    }

    /// Reactive.
    pub fn is_menu_open(&self) -> bool {
        self.host.menu_open.get()
    }

    pub fn toggle_menu(&self) {
        self.host.menu_open.update(|open| *open = !*open);
    }
}

/// Registers the page sections and follows the window scroll position for
/// the lifetime of the calling component.
pub fn use_section_tracking<const N: usize>(
    config: &SiteConfig,
    sections: [(&'static str, SectionRef); N],
) -> Navigator {
    let mut tracker = SectionTracker::new(config.default_section, config.scroll_align);
    for (id, node_ref) in sections {
        if let Err(e) = tracker.register(id, node_ref) {
            log::error!("couldn't register section: {e}");
        }
    }
    let tracker = StoredValue::new(tracker);
    let active = RwSignal::new(config.default_section.to_string());
    let gate = StoredValue::new(FrameGate::default());
    let margin = config.activation_margin;

    // only one measurement per animation frame, however many scroll events arrive
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        if !gate.try_update_value(|g| g.try_schedule()).unwrap_or(false) {
            return;
        }
        request_animation_frame(move || {
            gate.update_value(|g| g.complete());
            let offset = window().scroll_y().unwrap_or_default();
            if let Some(id) = tracker
                .try_update_value(|t| t.compute_active_section(offset, margin))
                .flatten()
            {
                active.set(id);
            }
        });
    });

    Navigator {
        tracker,
        host: PageHost {
            menu_open: RwSignal::new(false),
        },
        active,
    }
}
