use chrono::NaiveDate;
use serde::Serialize;
use strata_calendar::{Source, SourceCounts};

use crate::mapper::HoverInfo;

pub const TOOLTIP_OFFSET_X: f32 = 10.0;
pub const TOOLTIP_OFFSET_Y: f32 = -30.0;

/// Display model for the hover popup.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tooltip {
    /// e.g. `Mon Jan 01 2024`
    pub title: String,
    /// `GitHub: 5`, `Gitea: 3`; top of the stack first.
    pub lines: Vec<String>,
    pub date: NaiveDate,
    pub counts: SourceCounts,
    pub anchor_x: f32,
    pub anchor_y: f32,
}

impl Tooltip {
    pub fn from_hover(info: &HoverInfo) -> Self {
        let lines = Source::ALL
            .iter()
            .rev()
            .map(|s| format!("{}: {}", s.label(), info.counts.get(*s)))
            .collect();
        Self {
            title: info.date.format("%a %b %d %Y").to_string(),
            lines,
            date: info.date,
            counts: info.counts,
            anchor_x: info.screen_x + TOOLTIP_OFFSET_X,
            anchor_y: info.screen_y + TOOLTIP_OFFSET_Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tooltip;
    use crate::mapper::HoverInfo;
    use chrono::NaiveDate;
    use strata_calendar::{Source, SourceCounts};
    use strata_render::PrismId;

    #[test]
    fn tooltip_lists_every_source_and_offsets_anchor() {
        let info = HoverInfo {
            prism: PrismId(0),
            record: 0,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            counts: SourceCounts::from_pairs([(Source::GitHub, 5)]),
            screen_x: 100.0,
            screen_y: 200.0,
        };
        let t = Tooltip::from_hover(&info);
        assert_eq!(t.title, "Mon Jan 01 2024");
        assert_eq!(t.lines, vec!["GitHub: 5".to_string(), "Gitea: 0".to_string()]);
        assert_eq!((t.anchor_x, t.anchor_y), (110.0, 170.0));
    }
}
