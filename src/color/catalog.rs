//! Static best/avoid palettes for each season

use serde::Serialize;

use crate::color::season::Season;

/// Garment colors recommended for, and discouraged for, one season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonPalette {
    pub best: [&'static str; 4],
    pub avoid: [&'static str; 4],
}

impl SeasonPalette {
    /// Swatches offered for a quick drape test: best colors first, then avoid colors
    pub fn drape_swatches(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.best.iter().chain(self.avoid.iter()).copied()
    }
}

/// Look up the palettes for a season
pub fn lookup(season: Season) -> &'static SeasonPalette {
    match season {
        Season::DeepWinter => &DEEP_WINTER,
        Season::CoolWinter => &COOL_WINTER,
        Season::ClearWinter => &CLEAR_WINTER,
        Season::DeepAutumn => &DEEP_AUTUMN,
        Season::WarmAutumn => &WARM_AUTUMN,
        Season::SoftAutumn => &SOFT_AUTUMN,
        Season::WarmSpring => &WARM_SPRING,
        Season::LightSpring => &LIGHT_SPRING,
        Season::ClearSpring => &CLEAR_SPRING,
        Season::LightSummer => &LIGHT_SUMMER,
        Season::CoolSummer => &COOL_SUMMER,
        Season::SoftSummer => &SOFT_SUMMER,
    }
}

static DEEP_WINTER: SeasonPalette = SeasonPalette {
    best: ["#111111", "#191970", "#800020", "#FFFFFF"],
    avoid: ["#F5F5DC", "#FFDAB9", "#E6E6FA", "#FFFACD"],
};

static COOL_WINTER: SeasonPalette = SeasonPalette {
    best: ["#000080", "#C0C0C0", "#FF007F", "#000000"],
    avoid: ["#D2691E", "#DAA520", "#8B4513", "#556B2F"],
};

static CLEAR_WINTER: SeasonPalette = SeasonPalette {
    best: ["#0000FF", "#00FF00", "#FF0000", "#FFFFFF"],
    avoid: ["#BC8F8F", "#A9A9A9", "#C0C0C0", "#F5F5DC"],
};

static DEEP_AUTUMN: SeasonPalette = SeasonPalette {
    best: ["#4E3524", "#654321", "#800000", "#FFD700"],
    avoid: ["#E0FFFF", "#F0F8FF", "#FFB6C1", "#FFFFFF"],
};

static WARM_AUTUMN: SeasonPalette = SeasonPalette {
    best: ["#D2691E", "#8B4513", "#556B2F", "#DAA520"],
    avoid: ["#0000FF", "#FF00FF", "#C0C0C0", "#4682B4"],
};

static SOFT_AUTUMN: SeasonPalette = SeasonPalette {
    best: ["#BC8F8F", "#8FBC8F", "#BDB76B", "#CD853F"],
    avoid: ["#000000", "#FF0000", "#0000FF", "#FFFF00"],
};

static WARM_SPRING: SeasonPalette = SeasonPalette {
    best: ["#FF8C00", "#FFD700", "#32CD32", "#FF69B4"],
    avoid: ["#4B0082", "#191970", "#2F4F4F", "#000000"],
};

static LIGHT_SPRING: SeasonPalette = SeasonPalette {
    best: ["#FFFACD", "#FFB6C1", "#AFEEEE", "#98FB98"],
    avoid: ["#000000", "#800020", "#191970", "#3E4E23"],
};

static CLEAR_SPRING: SeasonPalette = SeasonPalette {
    best: ["#FFFF00", "#00FF7F", "#FF4500", "#EE82EE"],
    avoid: ["#BC8F8F", "#BDB76B", "#A9A9A9", "#F5F5DC"],
};

static LIGHT_SUMMER: SeasonPalette = SeasonPalette {
    best: ["#F0F8FF", "#FFB6C1", "#E0FFFF", "#F5F5DC"],
    avoid: ["#8B4513", "#DAA520", "#000000", "#FF8C00"],
};

static COOL_SUMMER: SeasonPalette = SeasonPalette {
    best: ["#4682B4", "#D8BFD8", "#B0C4DE", "#708090"],
    avoid: ["#FF8C00", "#FFD700", "#D2691E", "#800000"],
};

static SOFT_SUMMER: SeasonPalette = SeasonPalette {
    best: ["#778899", "#BC8F8F", "#A9A9A9", "#B0E0E6"],
    avoid: ["#FF0000", "#000000", "#00FF00", "#FFFFFF"],
};
