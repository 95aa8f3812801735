//! Active-section tracking and smooth-scroll navigation.
//!
//! [`SectionTracker`] owns the ordered registry of page sections and the id of
//! the section currently in view. It never touches the DOM directly: element
//! handles are measured through [`Measure`] and scrolled through
//! [`ScrollHost`], so the browser binding lives in `app` and the logic here can
//! be exercised with plain values.

use thiserror::Error;

use crate::config::ScrollAlign;

/// Vertical span of a laid-out section, relative to the top of the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `[top, top + height)`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// A handle whose on-screen region can be measured at call time.
pub trait Measure {
    /// `None` while the element has not been laid out yet.
    fn bounds(&self) -> Option<Bounds>;
}

/// The host environment's side of navigation.
pub trait ScrollHost<H> {
    /// Start an animated scroll that brings `target` to the viewport. Fire and forget.
    fn smooth_scroll(&self, target: &H, align: ScrollAlign);

    /// Dismiss any open mobile navigation menu.
    fn collapse_menu(&self) {}
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("no section registered with id `{0}`")]
    UnknownSection(String),
    #[error("section id must not be empty")]
    EmptyId,
}

#[derive(Debug, Clone)]
struct Section<H> {
    id: String,
    element: H,
}

#[derive(Debug, Clone)]
pub struct SectionTracker<H> {
    sections: Vec<Section<H>>,
    active: String,
    align: ScrollAlign,
}

impl<H> SectionTracker<H> {
    pub fn new(default_section: impl Into<String>, align: ScrollAlign) -> Self {
        Self {
            sections: Vec::new(),
            active: default_section.into(),
            align,
        }
    }

    /// Adds a section at the end of the navigation order. Registering an id
    /// again swaps the handle and keeps the original position.
    pub fn register(&mut self, id: impl Into<String>, element: H) -> Result<(), TrackerError> {
        let id = id.into();
        if id.is_empty() {
            return Err(TrackerError::EmptyId);
        }
        match self.sections.iter_mut().find(|s| s.id == id) {
            Some(existing) => {
                log::debug!("re-registering section `{id}`");
                existing.element = element;
            }
            None => self.sections.push(Section { id, element }),
        }
        Ok(())
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Starts a smooth scroll to `id` and collapses the mobile menu.
    ///
    /// The active id is left alone here; it follows the viewport as the
    /// animation produces scroll samples.
    pub fn scroll_to(&self, id: &str, host: &impl ScrollHost<H>) -> Result<(), TrackerError> {
        host.collapse_menu();
        let section = self
            .sections
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| TrackerError::UnknownSection(id.to_string()))?;
        host.smooth_scroll(&section.element, self.align);
        Ok(())
    }
}

impl<H: Measure> SectionTracker<H> {
    /// Recomputes the section under `scroll_offset + activation_margin`.
    ///
    /// When spans overlap the later section wins. Returns the new id only if
    /// the active section changed.
    pub fn compute_active_section(
        &mut self,
        scroll_offset: f64,
        activation_margin: f64,
    ) -> Option<String> {
        let position = scroll_offset + activation_margin;
        let hit = self
            .sections
            .iter()
            .filter_map(|s| match s.element.bounds() {
                Some(bounds) => Some((s, bounds)),
                None => {
                    log::trace!("section `{}` not measurable yet", s.id);
                    None
                }
            })
            .filter(|(_, bounds)| bounds.contains(position))
            .last()
            .map(|(s, _)| s.id.as_str())?;

        if hit == self.active {
            return None;
        }
        log::debug!("active section {} -> {hit}", self.active);
        self.active = hit.to_string();
        Some(self.active.clone())
    }
}

/// Coalesces scroll events so layout is measured at most once per frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// `true` if the caller should request a frame now.
    pub fn try_schedule(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Call from inside the frame callback, before sampling.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Region(Option<Bounds>);

    impl Region {
        fn at(top: f64, height: f64) -> Self {
            Self(Some(Bounds::new(top, height)))
        }
    }

    impl Measure for Region {
        fn bounds(&self) -> Option<Bounds> {
            self.0
        }
    }

    #[derive(Default)]
    struct RecordingHost {
        scrolls: RefCell<Vec<(Region, ScrollAlign)>>,
        collapses: Cell<usize>,
    }

    impl ScrollHost<Region> for RecordingHost {
        fn smooth_scroll(&self, target: &Region, align: ScrollAlign) {
            self.scrolls.borrow_mut().push((*target, align));
        }

        fn collapse_menu(&self) {
            self.collapses.set(self.collapses.get() + 1);
        }
    }

    fn page() -> SectionTracker<Region> {
        let mut tracker = SectionTracker::new("home", ScrollAlign::Start);
        tracker.register("home", Region::at(0.0, 800.0)).unwrap();
        tracker.register("about", Region::at(800.0, 600.0)).unwrap();
        tracker.register("skills", Region::at(1400.0, 500.0)).unwrap();
        tracker
    }

    fn full_page() -> SectionTracker<Region> {
        let mut tracker = page();
        tracker.register("projects", Region::at(1900.0, 900.0)).unwrap();
        tracker.register("contact", Region::at(2800.0, 700.0)).unwrap();
        tracker
    }

    #[test]
    fn test_margin_moves_activation_point() {
        let mut tracker = page();
        assert_eq!(tracker.compute_active_section(750.0, 100.0), Some("about".to_string()));
        assert_eq!(tracker.active(), "about");

        assert_eq!(tracker.compute_active_section(0.0, 100.0), Some("home".to_string()));
        assert_eq!(tracker.active(), "home");
    }

    #[test]
    fn test_offset_inside_section_selects_it() {
        let mut tracker = page();
        for (offset, expected) in [(850.0, "about"), (1399.0, "about"), (1400.0, "skills"), (10.0, "home")] {
            tracker.compute_active_section(offset, 0.0);
            assert_eq!(tracker.active(), expected, "offset {offset}");
        }
    }

    #[test]
    fn test_repeated_sample_is_idempotent() {
        let mut tracker = page();
        assert!(tracker.compute_active_section(1500.0, 100.0).is_some());
        assert_eq!(tracker.compute_active_section(1500.0, 100.0), None);
        assert_eq!(tracker.compute_active_section(1500.0, 100.0), None);
        assert_eq!(tracker.active(), "skills");
    }

    #[test]
    fn test_no_match_keeps_active() {
        let mut tracker = SectionTracker::new("home", ScrollAlign::Start);
        tracker.register("home", Region::at(200.0, 800.0)).unwrap();
        tracker.register("about", Region::at(1000.0, 600.0)).unwrap();

        tracker.compute_active_section(1200.0, 0.0);
        assert_eq!(tracker.active(), "about");

        // above the first section
        assert_eq!(tracker.compute_active_section(0.0, 100.0), None);
        assert_eq!(tracker.active(), "about");

        // past the last section
        assert_eq!(tracker.compute_active_section(5000.0, 100.0), None);
        assert_eq!(tracker.active(), "about");
    }

    #[test]
    fn test_overlap_prefers_later_section() {
        let mut tracker = SectionTracker::new("home", ScrollAlign::Start);
        tracker.register("home", Region::at(0.0, 1000.0)).unwrap();
        tracker.register("about", Region::at(900.0, 600.0)).unwrap();

        assert_eq!(tracker.compute_active_section(950.0, 0.0), Some("about".to_string()));
    }

    #[test]
    fn test_unmeasured_sections_are_skipped() {
        let mut tracker = SectionTracker::new("home", ScrollAlign::Start);
        tracker.register("home", Region(None)).unwrap();
        tracker.register("about", Region::at(800.0, 600.0)).unwrap();
        tracker.register("skills", Region(None)).unwrap();

        assert_eq!(tracker.compute_active_section(100.0, 0.0), None);
        assert_eq!(tracker.active(), "home");
        assert_eq!(tracker.compute_active_section(900.0, 0.0), Some("about".to_string()));
    }

    #[test]
    fn test_nothing_registered() {
        let mut tracker: SectionTracker<Region> = SectionTracker::new("home", ScrollAlign::Start);
        assert!(tracker.is_empty());
        assert_eq!(tracker.compute_active_section(300.0, 100.0), None);
        assert_eq!(tracker.active(), "home");
    }

    #[test]
    fn test_reregister_replaces_handle_in_place() {
        let mut tracker = page();
        tracker.register("about", Region::at(5000.0, 100.0)).unwrap();

        assert_eq!(tracker.len(), 3);
        assert_eq!(tracker.sections().collect::<Vec<_>>(), vec!["home", "about", "skills"]);
        // old geometry no longer resolves to about
        tracker.compute_active_section(900.0, 0.0);
        assert_eq!(tracker.active(), "home");
        tracker.compute_active_section(5050.0, 0.0);
        assert_eq!(tracker.active(), "about");
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut tracker: SectionTracker<Region> = SectionTracker::new("home", ScrollAlign::Start);
        assert_eq!(tracker.register("", Region(None)), Err(TrackerError::EmptyId));
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_scroll_to_known_section() {
        let tracker = page();
        let host = RecordingHost::default();

        tracker.scroll_to("skills", &host).unwrap();

        assert_eq!(*host.scrolls.borrow(), vec![(Region::at(1400.0, 500.0), ScrollAlign::Start)]);
        assert_eq!(host.collapses.get(), 1);
        // active only follows real scroll samples
        assert_eq!(tracker.active(), "home");
    }

    #[test]
    fn test_scroll_to_unknown_section() {
        let tracker = page();
        let host = RecordingHost::default();

        let err = tracker.scroll_to("blog", &host).unwrap_err();

        assert_eq!(err, TrackerError::UnknownSection("blog".to_string()));
        assert_eq!(err.to_string(), "no section registered with id `blog`");
        assert!(host.scrolls.borrow().is_empty());
        assert_eq!(host.collapses.get(), 1);
    }

    #[test]
    fn test_monotonic_sweep_visits_sections_in_order() {
        let mut tracker = full_page();
        let mut visited = vec![tracker.active().to_string()];

        let mut offset = 0.0;
        while offset < 3500.0 {
            if let Some(id) = tracker.compute_active_section(offset, 100.0) {
                visited.push(id);
            }
            offset += 7.0;
        }

        assert_eq!(visited, vec!["home", "about", "skills", "projects", "contact"]);
    }

    #[test]
    fn test_frame_gate_coalesces_until_complete() {
        let mut gate = FrameGate::default();
        assert!(gate.try_schedule());
        assert!(gate.is_pending());
        assert!(!gate.try_schedule());
        assert!(!gate.try_schedule());

        gate.complete();
        assert!(!gate.is_pending());
        assert!(gate.try_schedule());
    }
}
