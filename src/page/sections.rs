// sections.rs - Section order, anchors and nav links
//
// The anchor ids are the page's only external contract: each must exist
// exactly once so scroll-to-section can find it.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{EngineError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Publications,
    Awards,
    Lab,
    Experience,
    Skills,
    Personal,
    Contact,
}

/// Which animated scene sits behind a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    HeroPlanets,
    SubtlePlanets,
    Constellation,
}

impl Backdrop {
    /// Name the host keys its scene components by
    pub fn as_str(self) -> &'static str {
        match self {
            Backdrop::HeroPlanets => "hero",
            Backdrop::SubtlePlanets => "subtle",
            Backdrop::Constellation => "constellation",
        }
    }
}

/// Top-to-bottom
pub const PAGE_ORDER: [Section; 9] = [
    Section::Hero,
    Section::About,
    Section::Publications,
    Section::Awards,
    Section::Lab,
    Section::Experience,
    Section::Skills,
    Section::Personal,
    Section::Contact,
];

impl Section {
    /// Hero has no anchor; it is reached by scrolling to 0
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Section::Hero => None,
            Section::About => Some("about"),
            Section::Publications => Some("publications"),
            Section::Awards => Some("awards"),
            Section::Lab => Some("lab"),
            Section::Experience => Some("experience"),
            Section::Skills => Some("skills"),
            Section::Personal => Some("personal"),
            Section::Contact => Some("contact"),
        }
    }

    pub fn backdrop(self) -> Backdrop {
        match self {
            Section::Hero => Backdrop::HeroPlanets,
            Section::Lab | Section::Experience | Section::Contact => Backdrop::Constellation,
            Section::About
            | Section::Publications
            | Section::Awards
            | Section::Skills
            | Section::Personal => Backdrop::SubtlePlanets,
        }
    }

    /// All anchor ids, in page order
    pub fn anchors() -> impl Iterator<Item = &'static str> {
        PAGE_ORDER.into_iter().filter_map(Section::anchor)
    }
}

impl FromStr for Section {
    type Err = EngineError;

    fn from_str(id: &str) -> Result<Self> {
        let id = id.strip_prefix('#').unwrap_or(id);
        PAGE_ORDER
            .into_iter()
            .find(|s| s.anchor() == Some(id))
            .ok_or_else(|| EngineError::UnknownSection(id.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub section: Section,
    pub label: &'static str,
    pub mobile_label: &'static str,
}

impl NavLink {
    const fn new(section: Section, label: &'static str) -> Self {
        Self { section, label, mobile_label: label }
    }
}

/// Desktop bar and mobile overlay share targets; labels differ once
pub const NAV_LINKS: [NavLink; 6] = [
    NavLink::new(Section::About, "About"),
    NavLink::new(Section::Publications, "Research"),
    NavLink::new(Section::Awards, "Awards"),
    NavLink { section: Section::Lab, label: "Lab", mobile_label: "Lab Work" },
    NavLink::new(Section::Experience, "Experience"),
    NavLink::new(Section::Contact, "Contact"),
];

/// Check that every section anchor appears exactly once among `ids`.
/// Ids that are not section anchors are ignored.
pub fn validate_anchors<'a>(ids: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for id in ids {
        *seen.entry(id).or_default() += 1;
    }
    for anchor in Section::anchors() {
        match seen.get(anchor).copied().unwrap_or(0) {
            0 => return Err(EngineError::MissingAnchor(anchor.to_string())),
            1 => {}
            _ => return Err(EngineError::DuplicateAnchor(anchor.to_string())),
        }
    }
    Ok(())
}
