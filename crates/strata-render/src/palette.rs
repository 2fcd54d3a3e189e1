use serde::{Deserialize, Serialize};
use strata_calendar::Source;
use strata_geom::Rgb;
use strata_iso::FaceKind;

use crate::constants::{GITEA_COLOR, GITHUB_COLOR, GROUND_COLOR, LEFT_DARKEN, RIGHT_DARKEN};

/// Fixed darkening steps for the side faces, faking one light direction.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shading {
    pub left: f32,
    pub right: f32,
}

impl Default for Shading {
    fn default() -> Self {
        Self {
            left: LEFT_DARKEN,
            right: RIGHT_DARKEN,
        }
    }
}

impl Shading {
    pub fn apply(&self, base: Rgb) -> ShadedColors {
        ShadedColors {
            top: base,
            left: base.darker(self.left),
            right: base.darker(self.right),
        }
    }
}

/// Fill for each face of one prism.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShadedColors {
    pub top: Rgb,
    pub left: Rgb,
    pub right: Rgb,
}

impl ShadedColors {
    #[inline]
    pub fn get(&self, face: FaceKind) -> Rgb {
        match face {
            FaceKind::Top => self.top,
            FaceKind::Left => self.left,
            FaceKind::Right => self.right,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub gitea: Rgb,
    pub github: Rgb,
    /// Muted fill for days without any activity.
    pub ground: Rgb,
    pub shading: Shading,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            gitea: GITEA_COLOR,
            github: GITHUB_COLOR,
            ground: GROUND_COLOR,
            shading: Shading::default(),
        }
    }
}

impl Palette {
    pub fn base(&self, source: Source) -> Rgb {
        match source {
            Source::Gitea => self.gitea,
            Source::GitHub => self.github,
        }
    }

    pub fn shade_source(&self, source: Source) -> ShadedColors {
        self.shading.apply(self.base(source))
    }

    /// Ground tiles are flat, so only the top color is ever painted.
    pub fn shade_ground(&self) -> ShadedColors {
        self.shading.apply(self.ground)
    }
}
