use serde::{Deserialize, Serialize};

use crate::navigation::{Layout, ScrollMotion};
use crate::sections::Section;

pub const DEFAULT_PROBE_LINE: f64 = 100.0;

/// Page scroll tuning, read from the `scroll` block of the profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Distance in px from the viewport top at which the current section is sampled.
    pub probe_line: f64,
    pub behavior: ScrollMotion,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            probe_line: DEFAULT_PROBE_LINE,
            behavior: ScrollMotion::default(),
        }
    }
}

/// Decides which section is active from the current layout.
///
/// A section is a candidate when the probe line falls within its vertical
/// extent. Candidates are taken in [`Section::ALL`] order and the first one
/// wins, so a section missing from the document simply never matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    probe_line: f64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_LINE)
    }
}

impl From<&ScrollConfig> for ScrollTracker {
    fn from(config: &ScrollConfig) -> Self {
        Self::new(config.probe_line)
    }
}

impl ScrollTracker {
    pub fn new(probe_line: f64) -> Self {
        Self { probe_line }
    }

    pub fn probe_line(&self) -> f64 {
        self.probe_line
    }

    /// First section, in declaration order, whose bounds span the probe line.
    pub fn locate<L: Layout + ?Sized>(&self, layout: &L) -> Option<Section> {
        Section::ALL.into_iter().find(|&section| {
            layout
                .bounds(section)
                .is_some_and(|bounds| bounds.contains(self.probe_line))
        })
    }

    /// The section that should be active after a scroll event. Keeps `current`
    /// when nothing spans the probe line.
    pub fn next_active<L: Layout + ?Sized>(&self, layout: &L, current: Section) -> Section {
        self.locate(layout).unwrap_or(current)
    }

    /// Applies one scroll tick to `active`. Returns whether it changed, so
    /// callers only notify readers on an actual section change.
    pub fn update<L: Layout + ?Sized>(&self, layout: &L, active: &mut Section) -> bool {
        let next = self.next_active(layout, *active);
        if next == *active {
            return false;
        }
        *active = next;
        true
    }
}
