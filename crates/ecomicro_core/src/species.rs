//! Species data model for the cultivation catalog.
//!
//! All catalog data is defined at build time as `static` values, so the
//! types here borrow `'static` strings instead of owning allocations.

use std::fmt;

/// Growing difficulty, shown as a badge on cards and used as a filter facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Display label as shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Médio",
            Difficulty::Hard => "Difícil",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Descriptive skill level, parallel to [`Difficulty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub fn label(&self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "Iniciante",
            DifficultyLevel::Intermediate => "Intermediário",
            DifficultyLevel::Advanced => "Avançado",
        }
    }
}

/// Light requirement facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Light {
    Indirect,
    Full,
    FullOrIndirect,
}

impl Light {
    pub const ALL: [Light; 3] = [Light::Indirect, Light::Full, Light::FullOrIndirect];

    pub fn label(&self) -> &'static str {
        match self {
            Light::Indirect => "Indireta",
            Light::Full => "Plena",
            Light::FullOrIndirect => "Plena/Indireta",
        }
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Known icon kinds for timeline steps.
///
/// The data model only names the icon; resolving it to a renderable glyph
/// happens at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepIcon {
    Droplets,
    Moon,
    Sprout,
    Sun,
    Scissors,
    Leaf,
    Clock,
}

/// Day marker for a timeline step: a single day or a display range like "5-7".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayMarker {
    Day(u16),
    Range(&'static str),
}

impl fmt::Display for DayMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayMarker::Day(day) => write!(f, "{day}"),
            DayMarker::Range(label) => f.write_str(label),
        }
    }
}

impl DayMarker {
    /// First day covered by the marker, used for ordering checks.
    pub fn start_day(&self) -> u16 {
        match self {
            DayMarker::Day(day) => *day,
            DayMarker::Range(label) => label
                .split(|c: char| !c.is_ascii_digit())
                .find(|s| !s.is_empty())
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
        }
    }
}

/// One dated instruction in a species' cultivation timeline.
#[derive(Debug, Clone, Copy)]
pub struct TimelineStep {
    pub day: DayMarker,
    pub title: &'static str,
    pub icon: StepIcon,
    pub description: &'static str,
    pub details: Option<&'static str>,
    pub image: Option<&'static str>,
}

/// A cultivable microgreen variety with its cultivation metadata.
#[derive(Debug, Clone, Copy)]
pub struct Species {
    /// Unique slug, e.g. `"rabanete-roxo"`.
    pub id: &'static str,
    pub name: &'static str,
    /// Main image URL.
    pub image: &'static str,
    /// Display duration, e.g. "5 dias".
    pub cultivation_time: &'static str,
    /// Numeric day count backing the time-range facet.
    pub cultivation_days: u16,
    pub light: Light,
    /// Display watering frequency, e.g. "2x por dia".
    pub watering: &'static str,
    pub difficulty: Difficulty,
    pub difficulty_level: DifficultyLevel,
    pub benefits: &'static [&'static str],
    pub flavor: Option<&'static str>,
    pub video: Option<&'static str>,
    pub timeline: &'static [TimelineStep],
}

impl Species {
    pub fn has_timeline(&self) -> bool {
        !self.timeline.is_empty()
    }
}
