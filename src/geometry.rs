//! Resize geometry: the proposed-rectangle model and the aspect corrector.
//!
//! Everything in this module is pure and platform-free so the correction
//! policy can be unit tested without a window system. The interceptor copies
//! the OS rectangle in, runs [`apply_aspect`], and copies the result back.

/// Rectangle in screen coordinates, field-for-field the layout of a Win32
/// `RECT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width of the proposal; negative when the rectangle is inverted.
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Which of the eight drag handles the user is manipulating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    /// Translate the edge code a resize-in-progress notification carries in
    /// its `WPARAM` (the documented `WMSZ_*` values, 1 through 8). Codes
    /// outside that range are not resize handles and map to `None`.
    pub fn from_wmsz(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Left),
            2 => Some(Self::Right),
            3 => Some(Self::Top),
            4 => Some(Self::TopLeft),
            5 => Some(Self::TopRight),
            6 => Some(Self::Bottom),
            7 => Some(Self::BottomLeft),
            8 => Some(Self::BottomRight),
            _ => None,
        }
    }

    fn is_top_corner(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    fn is_left_corner(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }
}

/// Validated width/height proportion, fixed for the lifetime of an
/// installation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio(f32);

impl AspectRatio {
    /// Build a ratio from the two install inputs. Anything that is not a
    /// strictly positive finite pair is rejected before any state changes.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Some(Self(width / height))
        } else {
            None
        }
    }

    /// Width divided by height, e.g. ~1.78 for 16:9.
    pub fn value(self) -> f32 {
        self.0
    }
}

/// Correct `rect` in place so its proportions honor `ratio`, anchoring the
/// side(s) the user is not dragging.
///
/// Policy per dragged handle:
/// - Top/Bottom edge: the proposed height is authoritative; width is
///   rederived with the left edge fixed.
/// - Left/Right edge: the proposed width is authoritative; height is
///   rederived with the top edge fixed.
/// - Corner: whichever dimension the drag deviates from least is the one the
///   user is driving; that dimension is kept and the other rederived, moving
///   the corner's own edge and anchoring the opposite one. Width-driving
///   wins exact ties.
///
/// Derived dimensions round to the nearest integer, halves away from zero. A
/// derived dimension that rounds to zero or below keeps the prior dimension
/// instead, so a drag can never collapse the window.
///
/// Returns `false` without touching `rect` when the proposal has no positive
/// area; `true` once the policy has run.
pub fn apply_aspect(rect: &mut Rect, edge: ResizeEdge, ratio: AspectRatio) -> bool {
    let ratio = ratio.value();
    let w = rect.width();
    let h = rect.height();
    if w <= 0 || h <= 0 {
        return false;
    }

    let height_from_width = |new_w: i32| {
        let derived = (new_w as f32 / ratio).round() as i32;
        if derived > 0 { derived } else { h }
    };
    let width_from_height = |new_h: i32| {
        let derived = (new_h as f32 * ratio).round() as i32;
        if derived > 0 { derived } else { w }
    };

    match edge {
        // Horizontal edge drag: height is what the user changed, width follows.
        ResizeEdge::Top | ResizeEdge::Bottom => {
            rect.right = rect.left + width_from_height(h);
        }
        // Vertical edge drag: width is what the user changed, height follows.
        ResizeEdge::Left | ResizeEdge::Right => {
            rect.bottom = rect.top + height_from_width(w);
        }
        corner => {
            let implied_h = w as f32 / ratio;
            let implied_w = h as f32 * ratio;
            let width_drive_err = (implied_h - h as f32).abs();
            let height_drive_err = (implied_w - w as f32).abs();

            if width_drive_err <= height_drive_err {
                let new_h = height_from_width(w);
                if corner.is_top_corner() {
                    // top moves, bottom anchored
                    rect.top = rect.bottom - new_h;
                } else {
                    // bottom moves, top anchored
                    rect.bottom = rect.top + new_h;
                }
            } else {
                let new_w = width_from_height(h);
                if corner.is_left_corner() {
                    // left moves, right anchored
                    rect.left = rect.right - new_w;
                } else {
                    // right moves, left anchored
                    rect.right = rect.left + new_w;
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(w: f32, h: f32) -> AspectRatio {
        AspectRatio::new(w, h).unwrap()
    }

    #[test]
    fn ratio_rejects_degenerate_inputs() {
        assert!(AspectRatio::new(16.0, 9.0).is_some());
        assert!(AspectRatio::new(0.0, 9.0).is_none());
        assert!(AspectRatio::new(16.0, 0.0).is_none());
        assert!(AspectRatio::new(-16.0, 9.0).is_none());
        assert!(AspectRatio::new(16.0, -9.0).is_none());
        assert!(AspectRatio::new(f32::NAN, 9.0).is_none());
        assert!(AspectRatio::new(16.0, f32::INFINITY).is_none());
    }

    #[test]
    fn wmsz_codes_map_to_the_eight_handles() {
        assert_eq!(ResizeEdge::from_wmsz(1), Some(ResizeEdge::Left));
        assert_eq!(ResizeEdge::from_wmsz(2), Some(ResizeEdge::Right));
        assert_eq!(ResizeEdge::from_wmsz(3), Some(ResizeEdge::Top));
        assert_eq!(ResizeEdge::from_wmsz(4), Some(ResizeEdge::TopLeft));
        assert_eq!(ResizeEdge::from_wmsz(5), Some(ResizeEdge::TopRight));
        assert_eq!(ResizeEdge::from_wmsz(6), Some(ResizeEdge::Bottom));
        assert_eq!(ResizeEdge::from_wmsz(7), Some(ResizeEdge::BottomLeft));
        assert_eq!(ResizeEdge::from_wmsz(8), Some(ResizeEdge::BottomRight));
        assert_eq!(ResizeEdge::from_wmsz(0), None);
        assert_eq!(ResizeEdge::from_wmsz(9), None);
    }

    #[test]
    fn right_edge_drag_keeps_width_and_rederives_height() {
        let mut rect = Rect::new(0, 0, 1600, 1000);
        assert!(apply_aspect(&mut rect, ResizeEdge::Right, ratio(16.0, 9.0)));
        assert_eq!(rect, Rect::new(0, 0, 1600, 900));
    }

    #[test]
    fn left_edge_drag_anchors_top_and_adjusts_bottom() {
        let mut rect = Rect::new(100, 100, 900, 700);
        assert!(apply_aspect(&mut rect, ResizeEdge::Left, ratio(16.0, 9.0)));
        // The dragged left edge stays where the user put it; only the bottom
        // moves to restore the ratio.
        assert_eq!(rect, Rect::new(100, 100, 900, 550));
    }

    #[test]
    fn bottom_edge_drag_keeps_height_and_rederives_width() {
        let mut rect = Rect::new(0, 0, 800, 500);
        assert!(apply_aspect(&mut rect, ResizeEdge::Bottom, ratio(16.0, 9.0)));
        assert_eq!(rect, Rect::new(0, 0, 889, 500));
    }

    #[test]
    fn top_edge_drag_keeps_left_fixed() {
        let mut rect = Rect::new(50, 20, 850, 620);
        assert!(apply_aspect(&mut rect, ResizeEdge::Top, ratio(16.0, 9.0)));
        assert_eq!(rect, Rect::new(50, 20, 1117, 620));
    }

    #[test]
    fn topleft_corner_drives_by_width_when_width_error_is_smaller() {
        // 1920x1000 proposal against 16:9. Height implied by the width is
        // 1080 (error 80); width implied by the height is ~1777.8 (error
        // ~142.2). Width wins, height is rederived, the bottom edge stays
        // anchored and the top moves up.
        let mut rect = Rect::new(0, 80, 1920, 1080);
        assert!(apply_aspect(&mut rect, ResizeEdge::TopLeft, ratio(16.0, 9.0)));
        assert_eq!(rect, Rect::new(0, 0, 1920, 1080));
    }

    #[test]
    fn bottomleft_corner_drives_by_height_for_a_tall_ratio() {
        // 9:16 portrait lock. The width implied by the height (562.5, error
        // 62.5) deviates less than the height implied by the width (~888.9,
        // error ~111.1), so height drives and the left edge moves while the
        // right stays anchored.
        let mut rect = Rect::new(0, 0, 500, 1000);
        assert!(apply_aspect(&mut rect, ResizeEdge::BottomLeft, ratio(9.0, 16.0)));
        assert_eq!(rect, Rect::new(-63, 0, 500, 1000));
    }

    #[test]
    fn corner_tie_breaks_toward_width() {
        // With a 1:1 lock both deviations are exactly 20. Width-driving must
        // win the tie: height is rederived (top moves for a top corner). If
        // the comparison were ever inverted this would come out as a
        // 100-wide rectangle instead.
        let mut rect = Rect::new(0, 0, 120, 100);
        assert!(apply_aspect(&mut rect, ResizeEdge::TopRight, ratio(1.0, 1.0)));
        assert_eq!(rect, Rect::new(0, -20, 120, 100));
    }

    #[test]
    fn bottomright_corner_moves_bottom_with_top_anchored() {
        let mut rect = Rect::new(10, 10, 970, 560);
        assert!(apply_aspect(&mut rect, ResizeEdge::BottomRight, ratio(16.0, 9.0)));
        // 960 wide drives; height becomes 540 from the anchored top edge.
        assert_eq!(rect, Rect::new(10, 10, 970, 550));
    }

    #[test]
    fn derived_dimension_rounding_to_zero_keeps_the_prior_value() {
        // A near-zero width proposal would derive a zero height; the prior
        // height is kept so the window cannot collapse.
        let mut rect = Rect::new(0, 0, 1, 300);
        assert!(apply_aspect(&mut rect, ResizeEdge::Right, ratio(16.0, 1.0)));
        assert_eq!(rect, Rect::new(0, 0, 1, 300));

        // Same guard on the width-deriving path.
        let mut rect = Rect::new(0, 0, 300, 1);
        assert!(apply_aspect(&mut rect, ResizeEdge::Top, ratio(1.0, 16.0)));
        assert_eq!(rect, Rect::new(0, 0, 300, 1));
    }

    #[test]
    fn non_positive_proposal_is_left_untouched() {
        let mut rect = Rect::new(0, 0, 0, 100);
        assert!(!apply_aspect(&mut rect, ResizeEdge::Right, ratio(16.0, 9.0)));
        assert_eq!(rect, Rect::new(0, 0, 0, 100));

        let mut rect = Rect::new(50, 80, 40, 70);
        assert!(!apply_aspect(&mut rect, ResizeEdge::TopLeft, ratio(16.0, 9.0)));
        assert_eq!(rect, Rect::new(50, 80, 40, 70));
    }

    #[test]
    fn edge_then_counterpart_drag_round_trips_within_one_unit() {
        // Resize to an arbitrary width via the right edge, then rederive the
        // width from the resulting height the way a bottom drag would.
        // Integer rounding may drift by at most one unit.
        let locked = ratio(16.0, 9.0);
        for start_width in [345, 777, 1234, 1919] {
            let mut rect = Rect::new(0, 0, start_width, 600);
            assert!(apply_aspect(&mut rect, ResizeEdge::Right, locked));
            assert!(apply_aspect(&mut rect, ResizeEdge::Bottom, locked));
            assert!((rect.width() - start_width).abs() <= 1);
        }
    }
}
