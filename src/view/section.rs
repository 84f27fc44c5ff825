use std::fmt;

/// Named page regions, in page order.
///
/// The order of [`Section::ALL`] is the scroll-spy tie-break: when several
/// section tops sit inside the active band, the earliest one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Section {
    #[default]
    Home,
    Expertise,
    Work,
    Blog,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Expertise,
        Section::Work,
        Section::Blog,
        Section::Contact,
    ];

    /// Anchor identifier the layout exposes for this section
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Expertise => "expertise",
            Section::Work => "work",
            Section::Blog => "blog",
            Section::Contact => "contact",
        }
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Expertise => "Expertise",
            Section::Work => "Work",
            Section::Blog => "Insights",
            Section::Contact => "Contact",
        }
    }

    /// Sections linked from the navigation bar (contact has its own button)
    pub fn nav_links() -> &'static [Section] {
        &Section::ALL[..4]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}
