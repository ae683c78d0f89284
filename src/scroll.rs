//! Scroll-synchronized UI state.
//!
//! Everything here is a pure function of the current scroll offset and the
//! live layout measured by the caller. Section boundaries are never cached:
//! the adapter re-measures them on every scroll event.

use crate::config::ScrollThresholds;

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Two fixed presentation tiers for the sticky header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderTier {
    #[default]
    Base,
    Elevated,
}

impl HeaderTier {
    pub fn background(self) -> &'static str {
        match self {
            Self::Base => "rgba(10, 15, 28, 0.9)",
            Self::Elevated => "rgba(10, 15, 28, 0.95)",
        }
    }

    pub fn backdrop_filter(self) -> &'static str {
        match self {
            Self::Base => "blur(20px)",
            Self::Elevated => "blur(25px)",
        }
    }

    pub fn inline_style(self) -> String {
        let background = self.background();
        let filter = self.backdrop_filter();
        format!("background: {background}; backdrop-filter: {filter};")
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
    pub header_height: f64,
}

/// A watched reveal target and its current top edge relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealProbe {
    pub id: usize,
    pub top: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollDecision {
    pub header: HeaderTier,
    pub active_section: Option<String>,
    pub back_to_top_visible: bool,
    pub reveal: Vec<usize>,
}

pub fn header_tier(scroll_y: f64, thresholds: &ScrollThresholds) -> HeaderTier {
    if scroll_y > thresholds.header_elevate_after {
        HeaderTier::Elevated
    } else {
        HeaderTier::Base
    }
}

pub fn back_to_top_visible(scroll_y: f64, thresholds: &ScrollThresholds) -> bool {
    scroll_y > thresholds.back_to_top_after
}

/// Returns the last section, in document order, whose activation window
/// contains `scroll_y`.
pub fn active_section<'a>(
    viewport: &Viewport,
    sections: &'a [Section],
    thresholds: &ScrollThresholds,
) -> Option<&'a Section> {
    sections
        .iter()
        .rev()
        .find(|section| {
            let window_top = section.top - viewport.header_height - thresholds.active_section_lead;
            let window_bottom = window_top + section.height;
            viewport.scroll_y >= window_top && viewport.scroll_y < window_bottom
        })
}

pub fn reveal_targets(
    viewport: &Viewport,
    probes: &[RevealProbe],
    thresholds: &ScrollThresholds,
) -> Vec<usize> {
    let line = viewport.height - thresholds.reveal_margin;
    probes
        .iter()
        .filter(|probe| probe.top < line)
        .map(|probe| probe.id)
        .collect()
}

pub fn derive(
    viewport: &Viewport,
    sections: &[Section],
    probes: &[RevealProbe],
    thresholds: &ScrollThresholds,
) -> ScrollDecision {
    ScrollDecision {
        header: header_tier(viewport.scroll_y, thresholds),
        active_section: active_section(viewport, sections, thresholds)
            .map(|section| section.id.clone()),
        back_to_top_visible: back_to_top_visible(viewport.scroll_y, thresholds),
        reveal: reveal_targets(viewport, probes, thresholds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<Section> {
        vec![
            Section::new("home", 0.0, 800.0),
            Section::new("about", 800.0, 600.0),
            Section::new("skills", 1_400.0, 700.0),
        ]
    }

    fn viewport(scroll_y: f64) -> Viewport {
        Viewport {
            scroll_y,
            height: 900.0,
            header_height: 0.0,
        }
    }

    #[test]
    fn header_is_base_up_to_and_including_the_threshold() {
        let thresholds = ScrollThresholds::default();
        for y in [0.0, 42.0, 99.9, 100.0] {
            assert_eq!(header_tier(y, &thresholds), HeaderTier::Base, "y = {y}");
        }
        for y in [100.1, 250.0, 10_000.0] {
            assert_eq!(header_tier(y, &thresholds), HeaderTier::Elevated, "y = {y}");
        }
    }

    #[test]
    fn back_to_top_appears_strictly_after_threshold() {
        let thresholds = ScrollThresholds::default();
        assert!(!back_to_top_visible(0.0, &thresholds));
        assert!(!back_to_top_visible(300.0, &thresholds));
        assert!(back_to_top_visible(300.5, &thresholds));
    }

    #[test]
    fn active_section_window_is_led_by_header_and_offset() {
        let thresholds = ScrollThresholds::default();
        let sections = layout();

        let at = |y: f64, header: f64| {
            let viewport = Viewport {
                scroll_y: y,
                height: 900.0,
                header_height: header,
            };
            active_section(&viewport, &sections, &thresholds).map(|section| section.id.clone())
        };

        assert_eq!(at(0.0, 0.0).as_deref(), Some("home"));
        assert_eq!(at(699.0, 0.0).as_deref(), Some("home"));
        assert_eq!(at(700.0, 0.0).as_deref(), Some("about"));
        assert_eq!(at(620.0, 80.0).as_deref(), Some("about"));
        assert_eq!(at(1_999.0, 0.0).as_deref(), Some("skills"));
        assert_eq!(at(2_000.0, 0.0), None);
    }

    #[test]
    fn overlapping_windows_resolve_to_the_last_section() {
        let thresholds = ScrollThresholds::default();
        let sections = vec![
            Section::new("hero", 0.0, 1_000.0),
            Section::new("intro", 200.0, 400.0),
        ];

        let found = active_section(&viewport(300.0), &sections, &thresholds);
        assert_eq!(found.map(|section| section.id.as_str()), Some("intro"));
    }

    #[test]
    fn reveal_line_sits_above_viewport_bottom() {
        let thresholds = ScrollThresholds::default();
        let probes = [
            RevealProbe { id: 0, top: -20.0 },
            RevealProbe { id: 1, top: 749.0 },
            RevealProbe { id: 2, top: 750.0 },
            RevealProbe { id: 3, top: 1_200.0 },
        ];

        assert_eq!(reveal_targets(&viewport(0.0), &probes, &thresholds), vec![0, 1]);
    }

    #[test]
    fn derive_combines_every_decision() {
        let thresholds = ScrollThresholds::default();
        let probes = [RevealProbe { id: 7, top: 10.0 }];

        let decision = derive(&viewport(900.0), &layout(), &probes, &thresholds);
        assert_eq!(
            decision,
            ScrollDecision {
                header: HeaderTier::Elevated,
                active_section: Some("about".to_string()),
                back_to_top_visible: true,
                reveal: vec![7],
            }
        );

        let top = derive(&viewport(0.0), &layout(), &[], &thresholds);
        assert_eq!(top.header, HeaderTier::Base);
        assert!(!top.back_to_top_visible);
        assert!(top.reveal.is_empty());
    }

    #[test]
    fn header_styles_differ_per_tier() {
        assert_eq!(
            HeaderTier::Elevated.inline_style(),
            "background: rgba(10, 15, 28, 0.95); backdrop-filter: blur(25px);"
        );
        assert_ne!(HeaderTier::Base.inline_style(), HeaderTier::Elevated.inline_style());
    }
}
