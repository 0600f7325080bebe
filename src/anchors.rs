/// Identifiers shared between the navigation bar and the section blocks.
/// Sections take their DOM id from here, so a nav link can only point at an
/// id that some section actually renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionAnchor {
    Hero,
    Pillars,
    Play,
    Planner,
    Mentor,
    Insurance,
    Community,
    Cta,
}

impl SectionAnchor {
    pub fn id(self) -> &'static str {
        match self {
            SectionAnchor::Hero => "hero",
            SectionAnchor::Pillars => "pillars",
            SectionAnchor::Play => "play",
            SectionAnchor::Planner => "planner",
            SectionAnchor::Mentor => "mentor",
            SectionAnchor::Insurance => "insurance",
            SectionAnchor::Community => "community",
            SectionAnchor::Cta => "cta",
        }
    }
}

/// The nine blocks of the page, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSection {
    Hero,
    Pillars,
    Play,
    Planner,
    Mentor,
    Insurance,
    Community,
    Sustain,
    Footer,
}

impl PageSection {
    pub const ALL: [PageSection; 9] = [
        PageSection::Hero,
        PageSection::Pillars,
        PageSection::Play,
        PageSection::Planner,
        PageSection::Mentor,
        PageSection::Insurance,
        PageSection::Community,
        PageSection::Sustain,
        PageSection::Footer,
    ];

    /// Anchors rendered inside this block. The hero also carries the
    /// call-to-action row.
    #[cfg(test)]
    pub fn anchors(self) -> &'static [SectionAnchor] {
        match self {
            PageSection::Hero => &[SectionAnchor::Hero, SectionAnchor::Cta],
            PageSection::Pillars => &[SectionAnchor::Pillars],
            PageSection::Play => &[SectionAnchor::Play],
            PageSection::Planner => &[SectionAnchor::Planner],
            PageSection::Mentor => &[SectionAnchor::Mentor],
            PageSection::Insurance => &[SectionAnchor::Insurance],
            PageSection::Community => &[SectionAnchor::Community],
            PageSection::Sustain | PageSection::Footer => &[],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: SectionAnchor,
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { label: "Pillars", anchor: SectionAnchor::Pillars },
    NavLink { label: "Play", anchor: SectionAnchor::Play },
    NavLink { label: "Planner", anchor: SectionAnchor::Planner },
    NavLink { label: "Mentor", anchor: SectionAnchor::Mentor },
    NavLink { label: "Insurance 101", anchor: SectionAnchor::Insurance },
    NavLink { label: "Community", anchor: SectionAnchor::Community },
];

pub const HEADER_CTA: NavLink = NavLink {
    label: "Get Early Access",
    anchor: SectionAnchor::Cta,
};

/// Every control in the header that scrolls somewhere.
#[cfg(test)]
pub fn header_links() -> impl Iterator<Item = NavLink> {
    NAV_LINKS.into_iter().chain(std::iter::once(HEADER_CTA))
}
