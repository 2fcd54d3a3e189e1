use chrono::NaiveDate;
use strata_calendar::{DayRecord, SourceCounts};
use strata_geom::Vec2;
use strata_render::{Frame, PrismId};

use crate::tooltip::Tooltip;

/// What the pointer is resting on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HoverInfo {
    pub prism: PrismId,
    /// Index into the fused record set the frame was rendered from.
    pub record: usize,
    pub date: NaiveDate,
    pub counts: SourceCounts,
    pub screen_x: f32,
    pub screen_y: f32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(HoverInfo),
}

/// Hover state machine bound to one frame and the records it was drawn from.
///
/// At most one prism is hovered at a time. The last enter wins, and a leave
/// only clears the state if it names the prism currently hovered, so a late
/// leave from a neighbouring tile cannot cancel a newer hover.
#[derive(Debug, Default)]
pub struct HitMapper {
    frame: Frame,
    records: Vec<DayRecord>,
    state: HoverState,
}

impl HitMapper {
    pub fn new(frame: Frame, records: Vec<DayRecord>) -> Self {
        Self {
            frame,
            records,
            state: HoverState::Idle,
        }
    }

    #[inline]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    #[inline]
    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }

    #[inline]
    pub fn state(&self) -> &HoverState {
        &self.state
    }

    pub fn hovered(&self) -> Option<&HoverInfo> {
        match &self.state {
            HoverState::Hovering(info) => Some(info),
            HoverState::Idle => None,
        }
    }

    /// The day a prism was drawn for.
    pub fn record_for(&self, prism: PrismId) -> Option<&DayRecord> {
        self.frame
            .get(prism)
            .and_then(|p| self.records.get(p.record))
    }

    /// Installs a freshly rendered frame. Any hover refers to the old one and
    /// is dropped.
    pub fn replace_frame(&mut self, frame: Frame, records: Vec<DayRecord>) {
        if self.hovered().is_some() {
            log::debug!(target: "hit", "frame replaced while hovering; state cleared");
        }
        self.frame = frame;
        self.records = records;
        self.state = HoverState::Idle;
    }

    /// Pointer entered `prism` at screen position (`x`, `y`). Unknown prisms
    /// leave the state untouched.
    pub fn pointer_enter(&mut self, prism: PrismId, x: f32, y: f32) -> &HoverState {
        let Some(render) = self.frame.get(prism) else {
            log::debug!(target: "hit", "enter on unknown prism {:?}", prism);
            return &self.state;
        };
        let Some(rec) = self.records.get(render.record) else {
            log::debug!(target: "hit", "prism {:?} points past the record set", prism);
            return &self.state;
        };
        self.state = HoverState::Hovering(HoverInfo {
            prism,
            record: render.record,
            date: rec.date,
            counts: rec.counts,
            screen_x: x,
            screen_y: y,
        });
        &self.state
    }

    /// Pointer left `prism`. Ignored unless `prism` is the one hovered.
    pub fn pointer_leave(&mut self, prism: PrismId) -> &HoverState {
        match self.hovered().map(|h| h.prism) {
            Some(current) if current == prism => self.state = HoverState::Idle,
            Some(current) => {
                log::debug!(
                    target: "hit",
                    "stale leave {:?} while hovering {:?}",
                    prism,
                    current
                );
            }
            None => {}
        }
        &self.state
    }

    /// Hit-tests a frame-space point and drives enter/leave from the result.
    /// Staying on the same prism only moves the tooltip anchor.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> &HoverState {
        let hit = self.hit_test(Vec2::new(x, y));
        let current = self.hovered().map(|h| h.prism);
        match (current, hit) {
            (Some(cur), Some(id)) if cur == id => {
                if let HoverState::Hovering(info) = &mut self.state {
                    info.screen_x = x;
                    info.screen_y = y;
                }
            }
            (cur, hit) => {
                if let Some(cur) = cur {
                    self.pointer_leave(cur);
                }
                if let Some(id) = hit {
                    self.pointer_enter(id, x, y);
                }
            }
        }
        &self.state
    }

    /// Topmost prism with a face under `p`. Later prisms are painted over
    /// earlier ones, so the search runs back to front.
    pub fn hit_test(&self, p: Vec2) -> Option<PrismId> {
        self.frame
            .iter()
            .rev()
            .find(|(_, prism)| prism.contains(p))
            .map(|(id, _)| id)
    }

    /// Tooltip for the current hover, if any.
    pub fn tooltip(&self) -> Option<Tooltip> {
        self.hovered().map(Tooltip::from_hover)
    }
}

#[cfg(test)]
mod tests {
    use super::{HitMapper, HoverState};
    use chrono::NaiveDate;
    use strata_calendar::{DayRecord, Source, SourceCounts};
    use strata_render::{FrameOptions, PrismId, render_frame};

    fn mapper() -> HitMapper {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let records = vec![DayRecord {
            date,
            counts: SourceCounts::from_pairs([(Source::Gitea, 2), (Source::GitHub, 2)]),
        }];
        let frame = render_frame(&records, &FrameOptions::default());
        HitMapper::new(frame, records)
    }

    #[test]
    fn unknown_prism_is_ignored() {
        let mut m = mapper();
        assert_eq!(*m.pointer_enter(PrismId(99), 0.0, 0.0), HoverState::Idle);
    }

    #[test]
    fn move_within_prism_updates_anchor_only() {
        let mut m = mapper();
        // 2024-01-01 is a Monday: cell (0, 1), origin (-12, 7). The upper prism's
        // top diamond sits 50px up, centered at (-12, -36).
        m.pointer_move(-12.0, -36.0);
        let first = *m.hovered().unwrap();
        assert_eq!(first.prism, PrismId(1));
        m.pointer_move(-11.0, -35.0);
        let second = *m.hovered().unwrap();
        assert_eq!(second.prism, first.prism);
        assert_eq!((second.screen_x, second.screen_y), (-11.0, -35.0));
    }

    #[test]
    fn stacked_prisms_resolve_to_the_same_record() {
        let m = mapper();
        let a = m.record_for(PrismId(0)).unwrap();
        let b = m.record_for(PrismId(1)).unwrap();
        assert_eq!(a, b);
    }
}
