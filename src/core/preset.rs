//! Presentation presets: identical update behavior, different fragment
//! aesthetics.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preset {
    #[default]
    Orchid,
    Ember,
}

impl Preset {
    /// Parse a `data-preset` attribute value. Unknown or missing values fall
    /// back to the default preset.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("ember") => Preset::Ember,
            _ => Preset::Orchid,
        }
    }

    /// Fragment shader entry point implementing this preset.
    pub fn fragment_entry(self) -> &'static str {
        match self {
            Preset::Orchid => "fs_orchid",
            Preset::Ember => "fs_ember",
        }
    }
}
