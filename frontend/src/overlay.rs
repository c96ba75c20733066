use shared::{Defect, Severity};

pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 2.0;
pub const ZOOM_STEP: f64 = 0.25;

/// Zoom and selection state for the defect visualization.
///
/// Local to the results view and never shared across sessions. Exactly one
/// defect is selected at a time: hovering selects transiently, clicking pins
/// the selection until another region is hovered or clicked.
pub struct OverlayState {
    pub zoom: f64,
    selected: Option<String>,
    pinned: bool,
}

impl OverlayState {
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            selected: None,
            pinned: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn pointer_enter(&mut self, id: &str) {
        self.selected = Some(id.to_string());
        self.pinned = false;
    }

    pub fn pointer_leave(&mut self, id: &str) {
        if !self.pinned && self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
    }

    pub fn click(&mut self, id: &str) {
        self.selected = Some(id.to_string());
        self.pinned = true;
    }
}

/// Positions a defect's box on the unscaled image layout. The zoom transform
/// is applied to the whole image+overlay group instead, so percentage
/// positions stay locked to the underlying pixels at any zoom level.
pub fn defect_box_style(defect: &Defect) -> String {
    format!(
        "left: {}%; top: {}%; width: {}%; height: {}%;",
        defect.x, defect.y, defect.width, defect.height
    )
}

pub fn group_style(zoom: f64) -> String {
    format!("transform: scale({zoom}); transform-origin: center; transition: transform 0.3s ease;")
}

pub fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "severity-low",
        Severity::Medium => "severity-medium",
        Severity::High => "severity-high",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defect(id: &str, x: f64, y: f64, width: f64, height: f64) -> Defect {
        Defect {
            id: id.into(),
            kind: "Scratch".into(),
            x,
            y,
            width,
            height,
            confidence: 0.9,
            severity: Severity::High,
        }
    }

    #[test]
    fn zoom_steps_stay_clamped() {
        let mut overlay = OverlayState::new();
        for _ in 0..10 {
            overlay.zoom_in();
        }
        assert_eq!(overlay.zoom, ZOOM_MAX);
        for _ in 0..10 {
            overlay.zoom_out();
        }
        assert_eq!(overlay.zoom, ZOOM_MIN);
        overlay.reset_zoom();
        assert_eq!(overlay.zoom, 1.0);
    }

    #[test]
    fn hover_selects_and_leave_clears() {
        let mut overlay = OverlayState::new();
        overlay.pointer_enter("DEF001");
        assert_eq!(overlay.selected(), Some("DEF001"));
        overlay.pointer_leave("DEF001");
        assert_eq!(overlay.selected(), None);
    }

    #[test]
    fn click_pins_until_another_region_is_entered() {
        let mut overlay = OverlayState::new();
        overlay.click("DEF001");
        overlay.pointer_leave("DEF001");
        assert_eq!(overlay.selected(), Some("DEF001"));

        overlay.pointer_enter("DEF002");
        assert_eq!(overlay.selected(), Some("DEF002"));
        overlay.pointer_leave("DEF002");
        assert_eq!(overlay.selected(), None);
    }

    #[test]
    fn leave_of_a_different_region_keeps_selection() {
        let mut overlay = OverlayState::new();
        overlay.pointer_enter("DEF002");
        overlay.pointer_leave("DEF001");
        assert_eq!(overlay.selected(), Some("DEF002"));
    }

    // Rendered geometry: the box is laid out in percent of the unscaled image
    // and the group is scaled uniformly about its center, so the box center
    // divided by the rendered image size must equal the normalized center.
    #[test]
    fn defect_center_alignment_holds_at_every_zoom() {
        let d = defect("DEF001", 25.0, 15.0, 8.0, 3.0);
        let (img_w, img_h) = (1280.0_f64, 960.0_f64);

        let mut zoom = ZOOM_MIN;
        while zoom <= ZOOM_MAX + 1e-9 {
            let rendered_w = img_w * zoom;
            let rendered_h = img_h * zoom;
            let center_x = (d.x + d.width / 2.0) / 100.0 * img_w * zoom;
            let center_y = (d.y + d.height / 2.0) / 100.0 * img_h * zoom;

            let fx = center_x / rendered_w;
            let fy = center_y / rendered_h;
            assert!((fx - (d.x + d.width / 2.0) / 100.0).abs() < 1e-12);
            assert!((fy - (d.y + d.height / 2.0) / 100.0).abs() < 1e-12);
            zoom += ZOOM_STEP;
        }
    }

    #[test]
    fn box_style_uses_percent_of_unscaled_layout() {
        let d = defect("DEF001", 25.0, 15.0, 8.0, 3.0);
        assert_eq!(
            defect_box_style(&d),
            "left: 25%; top: 15%; width: 8%; height: 3%;"
        );
    }
}
