#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Grouped,
    ByYear,
}

impl DisplayMode {
    pub const ALL: [Self; 2] = [Self::Grouped, Self::ByYear];

    /// Maps a toolbar button id to a mode; only `"year"` splits by year.
    pub fn from_button_id(id: &str) -> Self {
        if id == "year" {
            Self::ByYear
        } else {
            Self::Grouped
        }
    }

    pub fn button_id(self) -> &'static str {
        match self {
            Self::Grouped => "all",
            Self::ByYear => "year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Grouped => "All Disasters",
            Self::ByYear => "Disasters By Year",
        }
    }

    pub fn shows_year_titles(self) -> bool {
        self == Self::ByYear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_year_button_selects_split_mode() {
        assert_eq!(DisplayMode::from_button_id("year"), DisplayMode::ByYear);
        assert_eq!(DisplayMode::from_button_id("all"), DisplayMode::Grouped);
        assert_eq!(DisplayMode::from_button_id(""), DisplayMode::Grouped);
        assert_eq!(DisplayMode::from_button_id("Year"), DisplayMode::Grouped);
    }

    #[test]
    fn button_ids_round_trip() {
        for mode in DisplayMode::ALL {
            assert_eq!(DisplayMode::from_button_id(mode.button_id()), mode);
        }
    }

    #[test]
    fn titles_only_in_split_mode() {
        assert!(!DisplayMode::Grouped.shows_year_titles());
        assert!(DisplayMode::ByYear.shows_year_titles());
    }
}
