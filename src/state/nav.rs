/// Navigation bar state derived from the page scroll position.
///
/// Everything here is recomputed from the latest scroll sample and
/// the latest section rectangles; across samples only the last active
/// section and the anchors of sections already seen are kept.

use iced::widget::container;
use iced::Rectangle;

/// Offset past which the nav bar gets its solid background
pub const SCROLLED_THRESHOLD: f32 = 10.0;

/// Horizontal probe line (window coordinates) used by scroll-spy
pub const PROBE_Y: f32 = 100.0;

/// Measure-and-correct rounds allowed for one nav click
pub const MAX_SEEK_STEPS: u8 = 8;

/// Widget id of the container wrapping the page scrollable
pub fn viewport_id() -> container::Id {
    container::Id::new("page-viewport")
}

/// Page sections reachable from the nav bar, in nav order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Experience,
    Education,
    Projects,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Education,
        Section::Projects,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Projects => "Projects",
        }
    }

    /// Widget id of the section's outer container
    pub fn container_id(self) -> container::Id {
        container::Id::new(match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Projects => "projects",
        })
    }

    /// Position in page order (same as nav order)
    fn index(self) -> usize {
        Section::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }
}

pub fn is_scrolled(offset_y: f32) -> bool {
    offset_y > SCROLLED_THRESHOLD
}

/// First section, in nav order, whose rectangle straddles the probe line
pub fn active_section(bounds: &[(Section, Rectangle)], probe_y: f32) -> Option<Section> {
    Section::ALL.iter().copied().find(|section| {
        bounds
            .iter()
            .filter(|(s, _)| s == section)
            .any(|(_, rect)| rect.y <= probe_y && rect.y + rect.height >= probe_y)
    })
}

/// Next move while bringing a section's top to the top of the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Seek {
    /// The section's top is on screen: scroll by this much and stop
    Land(f32),
    /// Scroll by this much, then measure again
    Step(f32),
    /// No section on screen to orient by
    Lost,
}

/// Decide how to move toward `target` given the viewport and the
/// sections currently on screen. Rectangles are clipped to the viewport,
/// so a top sitting on the viewport's upper edge may be hidden above it;
/// in that case we back up half a screen and look again.
pub fn seek(target: Section, viewport: Rectangle, visible: &[(Section, Rectangle)]) -> Seek {
    if let Some((_, rect)) = visible.iter().find(|(s, _)| *s == target) {
        let below_top = rect.y - viewport.y;
        return if below_top > 0.5 {
            Seek::Land(below_top)
        } else {
            Seek::Step(-viewport.height / 2.0)
        };
    }

    let target_index = target.index();
    if visible.iter().any(|(s, _)| s.index() < target_index) {
        Seek::Step(viewport.height)
    } else if visible.iter().any(|(s, _)| s.index() > target_index) {
        Seek::Step(-viewport.height)
    } else {
        Seek::Lost
    }
}

/// Scroll state of the page plus what the nav bar derives from it
#[derive(Debug, Clone, Default)]
pub struct NavState {
    pub offset_y: f32,
    /// Top of the scrollable viewport in window coordinates
    pub viewport_top: f32,
    pub scrolled: bool,
    pub active: Option<Section>,
    /// Latest on-screen rectangle per visible section
    bounds: Vec<(Section, Rectangle)>,
    /// Content offsets of sections that have been seen at least once
    anchors: [Option<f32>; 5],
}

impl NavState {
    pub fn scrolled_to(&mut self, offset_y: f32, viewport_top: f32) {
        self.offset_y = offset_y;
        self.viewport_top = viewport_top;
        self.scrolled = is_scrolled(offset_y);
    }

    /// Record a section's visible rectangle (or its absence) and
    /// recompute the active section
    pub fn section_bounds(&mut self, section: Section, rect: Option<Rectangle>) {
        self.bounds.retain(|(s, _)| *s != section);
        if let Some(rect) = rect {
            // A section's top is only trustworthy when it isn't clipped by the viewport
            if rect.y > self.viewport_top {
                self.anchors[section.index()] =
                    Some(self.offset_y + rect.y - self.viewport_top);
            }
            self.bounds.push((section, rect));
        }
        if let Some(active) = active_section(&self.bounds, PROBE_Y) {
            self.active = Some(active);
        }
    }

    /// Content offset to scroll to for a section, if known
    pub fn anchor(&self, section: Section) -> Option<f32> {
        self.anchors[section.index()]
    }

    /// First guess for sections never seen yet: evenly spread. The
    /// guess is refined with `seek` once the page has moved there.
    pub fn estimated_fraction(section: Section) -> f32 {
        (section.index() + 1) as f32 / (Section::ALL.len() + 2) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};

    fn rect(top: f32, height: f32) -> Rectangle {
        Rectangle::new(Point::new(0.0, top), Size::new(800.0, height))
    }

    #[test]
    fn test_scrolled_threshold_is_strict() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
    }

    #[test]
    fn test_active_section_straddles_probe() {
        let bounds = vec![
            (Section::About, rect(-400.0, 450.0)),
            (Section::Skills, rect(50.0, 600.0)),
        ];
        assert_eq!(active_section(&bounds, PROBE_Y), Some(Section::Skills));
    }

    #[test]
    fn test_first_match_in_nav_order_wins() {
        let bounds = vec![
            (Section::Skills, rect(100.0, 300.0)),
            (Section::About, rect(-200.0, 300.0)),
        ];
        assert_eq!(active_section(&bounds, PROBE_Y), Some(Section::About));
    }

    #[test]
    fn test_no_match_keeps_previous_active() {
        let mut nav = NavState::default();
        nav.section_bounds(Section::Education, Some(rect(20.0, 400.0)));
        assert_eq!(nav.active, Some(Section::Education));

        // Hero area: education scrolled out, nothing on the probe line
        nav.section_bounds(Section::Education, None);
        nav.section_bounds(Section::About, Some(rect(500.0, 300.0)));
        assert_eq!(nav.active, Some(Section::Education));
    }

    #[test]
    fn test_anchor_records_content_offset() {
        let mut nav = NavState::default();
        nav.scrolled_to(300.0, 0.0);
        nav.section_bounds(Section::Projects, Some(rect(250.0, 900.0)));

        assert_eq!(nav.anchor(Section::Projects), Some(550.0));
        assert_eq!(nav.anchor(Section::About), None);
        assert!(nav.scrolled);
    }

    const VIEWPORT: Rectangle = Rectangle {
        x: 0.0,
        y: 64.0,
        width: 800.0,
        height: 756.0,
    };
    const PAGE_H: f32 = 6350.0;

    /// Content-space (top, height) of each section; projects dwarf the rest
    fn layout() -> Vec<(Section, f32, f32)> {
        vec![
            (Section::About, 760.0, 540.0),
            (Section::Skills, 1300.0, 700.0),
            (Section::Experience, 2000.0, 500.0),
            (Section::Education, 2500.0, 450.0),
            (Section::Projects, 2950.0, 2950.0),
        ]
    }

    fn visible_at(offset: f32) -> Vec<(Section, Rectangle)> {
        layout()
            .into_iter()
            .filter_map(|(section, top, height)| {
                let on_screen = Rectangle {
                    x: 0.0,
                    y: VIEWPORT.y + top - offset,
                    width: VIEWPORT.width,
                    height,
                };
                VIEWPORT.intersection(&on_screen).map(|r| (section, r))
            })
            .collect()
    }

    /// Start from the relative estimate and follow `seek` the way the
    /// app does; returns the final scroll offset
    fn settle(target: Section) -> f32 {
        let max = PAGE_H - VIEWPORT.height;
        let mut offset = NavState::estimated_fraction(target) * max;

        for _ in 0..MAX_SEEK_STEPS {
            match seek(target, VIEWPORT, &visible_at(offset)) {
                Seek::Land(dy) => return (offset + dy).clamp(0.0, max),
                Seek::Step(dy) => offset = (offset + dy).clamp(0.0, max),
                Seek::Lost => panic!("lost while seeking {:?}", target),
            }
        }
        panic!("{:?} not reached in {} steps", target, MAX_SEEK_STEPS);
    }

    #[test]
    fn test_estimate_alone_misses_tall_sections() {
        let max = PAGE_H - VIEWPORT.height;
        let guess = NavState::estimated_fraction(Section::Projects) * max;
        assert!(guess - 2950.0 > VIEWPORT.height);
    }

    #[test]
    fn test_nav_click_lands_on_section_top() {
        for (section, top, _) in layout() {
            let landed = settle(section);
            assert!((landed - top).abs() < 0.01, "{:?} at {}", section, landed);
        }
    }

    #[test]
    fn test_seek_lands_when_top_visible() {
        let visible = vec![(Section::Education, rect(VIEWPORT.y + 120.0, 300.0))];
        assert_eq!(seek(Section::Education, VIEWPORT, &visible), Seek::Land(120.0));
    }

    #[test]
    fn test_seek_backs_up_when_top_clipped() {
        let visible = vec![(Section::Projects, rect(VIEWPORT.y, VIEWPORT.height))];
        assert_eq!(
            seek(Section::Projects, VIEWPORT, &visible),
            Seek::Step(-VIEWPORT.height / 2.0)
        );
    }

    #[test]
    fn test_seek_direction_from_neighbours() {
        let above = vec![(Section::About, rect(VIEWPORT.y, 400.0))];
        assert_eq!(
            seek(Section::Projects, VIEWPORT, &above),
            Seek::Step(VIEWPORT.height)
        );

        let below = vec![(Section::Projects, rect(VIEWPORT.y, 700.0))];
        assert_eq!(
            seek(Section::Skills, VIEWPORT, &below),
            Seek::Step(-VIEWPORT.height)
        );

        assert_eq!(seek(Section::Skills, VIEWPORT, &[]), Seek::Lost);
    }
}
