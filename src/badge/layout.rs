//! Badge geometry.
//!
//! Text widths and anchors live in the 110px text scale; box widths are in
//! the 11px display scale (the text group is drawn at `scale(.1)`).

use super::BadgeRequest;
use super::text_width::TextWidthCalculator;

/// Horizontal padding either side of a text run (110px scale).
pub const PADDING: f64 = 50.0;
/// Logo edge length (display scale).
pub const ICON_WIDTH: f64 = 14.0;
pub const ICON_X: f64 = 5.0;
pub const ICON_Y: f64 = 3.0;
/// Gap between the logo and the label text (display scale).
pub const ICON_PADDING: f64 = 3.0;
/// Badge height (display scale).
pub const HEIGHT: f64 = 20.0;

/// Resolved geometry for a single badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeLayout {
    pub logo: bool,
    /// Measured label width; only drawn when `label_x` is set.
    pub label_text_width: f64,
    /// Measured content width; only drawn when `content_x` is set.
    pub content_text_width: f64,
    pub left_width: f64,
    pub right_width: f64,
    pub total_width: f64,
    /// Label text anchor, `None` for an empty label.
    pub label_x: Option<f64>,
    /// Content text anchor, `None` for empty content.
    pub content_x: Option<f64>,
}

impl BadgeLayout {
    pub fn compute(request: &BadgeRequest, calculator: &TextWidthCalculator) -> Self {
        let has_label = !request.label.is_empty();
        let has_content = !request.content.is_empty();
        let label_text_width = calculator.measure(&request.label);
        let content_text_width = calculator.measure(&request.content);

        let left_width = match (request.logo, has_label) {
            (true, false) => 2.0 * PADDING / 10.0 + ICON_WIDTH,
            (true, true) => {
                ICON_X + ICON_WIDTH + ICON_PADDING + label_text_width / 10.0 + PADDING / 10.0
            }
            (false, true) => (label_text_width + 2.0 * PADDING) / 10.0,
            (false, false) => 0.0,
        };

        let right_width = if has_content {
            (content_text_width + 2.0 * PADDING) / 10.0
        } else {
            0.0
        };

        let label_x = match (request.logo, has_label) {
            (_, false) => None,
            (true, true) => Some(
                (ICON_WIDTH + ICON_PADDING + 1.0) * 10.0 + label_text_width / 2.0 + PADDING,
            ),
            (false, true) => Some(PADDING + label_text_width / 2.0),
        };

        let content_x = has_content.then(|| {
            if left_width == 0.0 {
                PADDING + content_text_width / 2.0
            } else {
                (left_width - 1.0) * 10.0 + PADDING + content_text_width / 2.0
            }
        });

        Self {
            logo: request.logo,
            label_text_width,
            content_text_width,
            left_width,
            right_width,
            total_width: left_width + right_width,
            label_x,
            content_x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn layout(logo: bool, label: &str, content: &str) -> BadgeLayout {
        BadgeLayout::compute(
            &BadgeRequest::new(logo, label, content),
            &TextWidthCalculator::default(),
        )
    }

    #[rstest]
    #[case::label_and_content(false, "build", "passing", 37.0, 51.0, Some(185.0), Some(615.0))]
    #[case::logo_label_content(true, "modrinth", "42 downloads", 78.0, 87.0, Some(485.0), Some(1205.0))]
    #[case::logo_and_content(true, "", "42 downloads", 24.0, 87.0, None, Some(665.0))]
    #[case::content_only(false, "", "passing", 0.0, 51.0, None, Some(255.0))]
    #[case::label_only(false, "build", "", 37.0, 0.0, Some(185.0), None)]
    #[case::logo_only(true, "", "", 24.0, 0.0, None, None)]
    #[case::logo_and_label(true, "modrinth", "", 78.0, 0.0, Some(485.0), None)]
    #[case::empty(false, "", "", 0.0, 0.0, None, None)]
    fn test_layout_branches(
        #[case] logo: bool,
        #[case] label: &str,
        #[case] content: &str,
        #[case] left_width: f64,
        #[case] right_width: f64,
        #[case] label_x: Option<f64>,
        #[case] content_x: Option<f64>,
    ) {
        let l = layout(logo, label, content);
        assert_eq!(l.left_width, left_width);
        assert_eq!(l.right_width, right_width);
        assert_eq!(l.total_width, left_width + right_width);
        assert_eq!(l.label_x, label_x);
        assert_eq!(l.content_x, content_x);
    }

    #[test]
    fn test_text_widths_are_carried_through() {
        let l = layout(true, "modrinth", "42 downloads");
        assert_eq!(l.label_text_width, 510.0);
        assert_eq!(l.content_text_width, 770.0);
        assert!(l.logo);
    }

    #[test]
    fn test_content_starts_after_left_segment() {
        // (left - 1) * 10 is the left edge of the content run in text scale
        let l = layout(false, "build", "passing");
        let content_left_edge = l.content_x.unwrap() - l.content_text_width / 2.0 - PADDING;
        assert_eq!(content_left_edge, (l.left_width - 1.0) * 10.0);
    }
}
