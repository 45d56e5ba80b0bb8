//! Mobile navigation toggle state machine
//!
//! The sidebar toggle is modelled as an explicit three-phase state machine
//! with a pure transition function; the `dom` adapter owns the corresponding
//! DOM mutations (creating/removing the toggle button and syncing the
//! `sidebar-open` markers on sidebar and body). Keeping transitions pure
//! makes every resize/click path testable without a rendering engine.

/// Lifecycle phase of the mobile toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarPhase {
    /// Viewport is above the mobile breakpoint; no toggle control exists and
    /// both open markers are cleared.
    Absent,
    /// Toggle control exists, sidebar hidden.
    Closed,
    /// Toggle control exists, sidebar shown; open markers applied to the
    /// sidebar and the document body.
    Open,
}

/// Inputs that can change the sidebar phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    /// The viewport was resized to the given CSS-pixel width. Also used for
    /// the initial evaluation on attach.
    Resized {
        /// New viewport width.
        width: u32,
    },
    /// The toggle control was clicked.
    ToggleClicked,
    /// A click landed outside the sidebar while it may be open.
    OutsideClick,
}

/// True when `width` is at or below the mobile breakpoint.
#[must_use]
pub const fn is_mobile_width(width: u32, breakpoint: u32) -> bool {
    width <= breakpoint
}

/// Pure transition function for the sidebar toggle.
///
/// Crossing above the breakpoint forces [`SidebarPhase::Absent`] regardless
/// of prior state; crossing below creates the control in the closed phase but
/// never reopens it. Toggle clicks flip open/closed, and an outside click
/// only ever closes.
#[must_use]
pub const fn next_phase(current: SidebarPhase, event: SidebarEvent, breakpoint: u32) -> SidebarPhase {
    match event {
        SidebarEvent::Resized { width } => {
            if is_mobile_width(width, breakpoint) {
                match current {
                    SidebarPhase::Absent => SidebarPhase::Closed,
                    other => other,
                }
            } else {
                SidebarPhase::Absent
            }
        }
        SidebarEvent::ToggleClicked => match current {
            SidebarPhase::Absent => SidebarPhase::Absent,
            SidebarPhase::Closed => SidebarPhase::Open,
            SidebarPhase::Open => SidebarPhase::Closed,
        },
        SidebarEvent::OutsideClick => match current {
            SidebarPhase::Open => SidebarPhase::Closed,
            other => other,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MOBILE_BREAKPOINT;

    const BP: u32 = MOBILE_BREAKPOINT;

    #[test]
    fn narrow_resize_creates_closed_control() {
        let phase = next_phase(SidebarPhase::Absent, SidebarEvent::Resized { width: 500 }, BP);
        assert_eq!(phase, SidebarPhase::Closed);
    }

    #[test]
    fn breakpoint_width_counts_as_mobile() {
        let phase = next_phase(SidebarPhase::Absent, SidebarEvent::Resized { width: 768 }, BP);
        assert_eq!(phase, SidebarPhase::Closed);
        let phase = next_phase(phase, SidebarEvent::Resized { width: 769 }, BP);
        assert_eq!(phase, SidebarPhase::Absent);
    }

    #[test]
    fn narrow_resize_keeps_open_state() {
        let phase = next_phase(SidebarPhase::Open, SidebarEvent::Resized { width: 400 }, BP);
        assert_eq!(phase, SidebarPhase::Open);
    }

    #[test]
    fn wide_resize_forces_absent_from_any_phase() {
        for start in [SidebarPhase::Absent, SidebarPhase::Closed, SidebarPhase::Open] {
            let phase = next_phase(start, SidebarEvent::Resized { width: 1024 }, BP);
            assert_eq!(phase, SidebarPhase::Absent);
        }
    }

    #[test]
    fn toggle_flips_open_and_closed() {
        let open = next_phase(SidebarPhase::Closed, SidebarEvent::ToggleClicked, BP);
        assert_eq!(open, SidebarPhase::Open);
        let closed = next_phase(open, SidebarEvent::ToggleClicked, BP);
        assert_eq!(closed, SidebarPhase::Closed);
    }

    #[test]
    fn toggle_is_noop_when_absent() {
        let phase = next_phase(SidebarPhase::Absent, SidebarEvent::ToggleClicked, BP);
        assert_eq!(phase, SidebarPhase::Absent);
    }

    #[test]
    fn outside_click_only_closes() {
        assert_eq!(
            next_phase(SidebarPhase::Open, SidebarEvent::OutsideClick, BP),
            SidebarPhase::Closed
        );
        assert_eq!(
            next_phase(SidebarPhase::Closed, SidebarEvent::OutsideClick, BP),
            SidebarPhase::Closed
        );
        assert_eq!(
            next_phase(SidebarPhase::Absent, SidebarEvent::OutsideClick, BP),
            SidebarPhase::Absent
        );
    }

    #[test]
    fn custom_breakpoint_is_respected() {
        let phase = next_phase(SidebarPhase::Absent, SidebarEvent::Resized { width: 900 }, 1000);
        assert_eq!(phase, SidebarPhase::Closed);
    }
}
