// Wheel-driven section snapping.
//
// The controller only decides; the caller owns the DOM side (preventing the
// default wheel scroll, issuing the smooth scroll and arming the cooldown
// timer that calls `release`).

/// First section, in document order, whose top offset lies below `midpoint`.
///
/// Order matters more than distance: the first match wins even if a later
/// section is closer.
#[inline]
pub fn next_section_below(section_tops: &[f64], midpoint: f64) -> Option<f64> {
    for &top in section_tops {
        if top > midpoint {
            return Some(top);
        }
    }
    None
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SnapState {
    #[default]
    Idle,
    Snapping,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelDecision {
    /// Let the browser scroll normally.
    PassThrough,
    /// Suppress the default scroll and smooth-scroll to this top offset.
    SnapTo(f64),
}

#[derive(Clone, Debug)]
pub struct SnapController {
    state: SnapState,
    threshold_px: f64,
}

impl SnapController {
    /// `threshold_px` is the minimum distance between the current scroll
    /// position and the target for a snap to trigger.
    pub fn new(threshold_px: f64) -> Self {
        Self {
            state: SnapState::Idle,
            threshold_px,
        }
    }

    /// Threshold as a fraction of the viewport height.
    pub fn for_viewport(viewport_height: f64, fraction: f64) -> Self {
        Self::new(viewport_height * fraction)
    }

    pub fn state(&self) -> SnapState {
        self.state
    }

    pub fn threshold_px(&self) -> f64 {
        self.threshold_px
    }

    /// Handle one wheel event. A `SnapTo` result has already moved the
    /// controller to `Snapping`.
    pub fn on_wheel(
        &mut self,
        delta_y: f64,
        scroll_y: f64,
        viewport_height: f64,
        section_tops: &[f64],
    ) -> WheelDecision {
        if self.state == SnapState::Snapping || delta_y <= 0.0 {
            return WheelDecision::PassThrough;
        }
        let midpoint = scroll_y + viewport_height / 2.0;
        match next_section_below(section_tops, midpoint) {
            Some(top) if top - scroll_y > self.threshold_px => {
                self.state = SnapState::Snapping;
                WheelDecision::SnapTo(top)
            }
            _ => WheelDecision::PassThrough,
        }
    }

    /// Cooldown expiry: back to `Idle` whether or not the scroll finished.
    pub fn release(&mut self) {
        self.state = SnapState::Idle;
    }
}
