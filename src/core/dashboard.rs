//! Onboarding dashboard navigation: which section is shown and, inside the
//! onboarding section, which card of the carousel is active.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Onboarding,
    Progress,
    Mentorship,
    Social,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Onboarding,
        Section::Progress,
        Section::Mentorship,
        Section::Social,
    ];

    pub fn index(self) -> usize {
        use Section::*;
        match self {
            Onboarding => 0,
            Progress => 1,
            Mentorship => 2,
            Social => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Onboarding => "Onboarding",
            Section::Progress => "Progress",
            Section::Mentorship => "Mentorship",
            Section::Social => "Social",
        }
    }

    pub fn panel(self) -> Panel {
        panel_for_index(self.index())
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Content variant rendered for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Cards,
    Overview,
    Mentorship,
    Social,
}

/// Total mapping from a sidebar index to the panel it shows.
///
/// Indices the sidebar never emits fall back to the cards panel.
pub fn panel_for_index(index: usize) -> Panel {
    match index {
        1 => Panel::Overview,
        2 => Panel::Mentorship,
        3 => Panel::Social,
        _ => Panel::Cards,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionSelection {
    active: Section,
}

impl SectionSelection {
    pub fn active(&self) -> Section {
        self.active
    }

    pub fn active_index(&self) -> usize {
        self.active.index()
    }

    /// Select by sidebar index; anything outside the known sections lands on
    /// Onboarding.
    pub fn select(&mut self, index: usize) -> Section {
        self.active = Section::from_index(index).unwrap_or_default();
        self.active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    Checklist,
    ResourceLibrary,
    InteractiveTutorials,
}

impl Card {
    pub const ALL: [Card; 3] = [
        Card::Checklist,
        Card::ResourceLibrary,
        Card::InteractiveTutorials,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Card::Checklist => "Onboarding Checklist",
            Card::ResourceLibrary => "Resources",
            Card::InteractiveTutorials => "Interactive Tutorials",
        }
    }
}

/// Rotating cards of the onboarding section. Both directions wrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    active: usize,
}

impl Carousel {
    pub const LEN: usize = Card::ALL.len();

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_card(&self) -> Card {
        Card::ALL[self.active]
    }

    pub fn next(&mut self) -> usize {
        self.active = (self.active + 1) % Self::LEN;
        self.active
    }

    pub fn previous(&mut self) -> usize {
        self.active = (self.active + Self::LEN - 1) % Self::LEN;
        self.active
    }

    /// One marker per card, `true` for the active one.
    pub fn indicator(&self) -> [bool; Self::LEN] {
        std::array::from_fn(|i| i == self.active)
    }
}

/// Section selection plus the carousel that lives inside the cards panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardNavigator {
    selection: SectionSelection,
    carousel: Carousel,
}

impl DashboardNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self) -> Section {
        self.selection.active()
    }

    pub fn panel(&self) -> Panel {
        panel_for_index(self.selection.active_index())
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Switch sections. Leaving the onboarding section drops its carousel, so
    /// coming back starts at the first card again.
    pub fn select_section(&mut self, index: usize) -> Section {
        let previous = self.selection.active();
        let current = self.selection.select(index);
        if current != previous {
            self.carousel = Carousel::default();
            tracing::debug!(from = %previous, to = %current, "Dashboard section changed");
        }
        current
    }

    pub fn next_card(&mut self) -> usize {
        let index = self.carousel.next();
        tracing::debug!(card = index, "Carousel advanced");
        index
    }

    pub fn previous_card(&mut self) -> usize {
        let index = self.carousel.previous();
        tracing::debug!(card = index, "Carousel rewound");
        index
    }
}
