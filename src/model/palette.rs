/// A named color set selectable alongside the locale.
///
/// Threaded through the render input but not consulted by any ring: ring colors come
/// from the fixed season table and from categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Lookup key, see [`Palette::by_name`].
    pub name: &'static str,
    /// Hex colors in display order.
    pub colors: &'static [&'static str],
}

pub(crate) const SPECTRAL: Palette = Palette {
    name: "spectral",
    colors: &[
        "#9e0142", "#d53e4f", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#e6f598", "#abdda4",
        "#66c2a5", "#3288bd", "#5e4fa2",
    ],
};

pub(crate) const CLAUDE: Palette = Palette {
    name: "claude",
    colors: &[
        "#cc785c", "#d4a27f", "#ebdbbc", "#f0efea", "#bfb8a8", "#8a8275", "#61aaf2", "#191919",
    ],
};

static PALETTES: [Palette; 2] = [SPECTRAL, CLAUDE];

impl Palette {
    /// Built-in palette with the given name.
    pub fn by_name(name: &str) -> Option<&'static Palette> {
        PALETTES.iter().find(|p| p.name == name)
    }
}

impl Default for Palette {
    fn default() -> Self {
        SPECTRAL
    }
}
