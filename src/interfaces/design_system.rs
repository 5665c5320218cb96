use eframe::egui;

/// Light design system for the predictor window
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(250, 251, 253);
    pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(243, 245, 249);
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(248, 249, 250); // #F8F9FA
    pub const BG_RESULT: egui::Color32 = egui::Color32::from_rgb(240, 248, 255); // #F0F8FF
    pub const BG_INPUT: egui::Color32 = egui::Color32::WHITE;

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(46, 134, 171); // #2E86AB
    pub const ACCENT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(162, 59, 114); // #A23B72
    pub const GRADIENT_START: egui::Color32 = egui::Color32::from_rgb(102, 126, 234); // #667EEA
    pub const GRADIENT_END: egui::Color32 = egui::Color32::from_rgb(118, 75, 162); // #764BA2

    // Status
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(200, 35, 51);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(44, 62, 80); // #2C3E50
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(102); // #666
    pub const TEXT_ON_ACCENT: egui::Color32 = egui::Color32::WHITE;

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(224, 224, 224); // #E0E0E0

    // --- Metrics ---

    pub const ROUNDING_MEDIUM: f32 = 10.0;
    pub const ROUNDING_LARGE: f32 = 15.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    pub const COMPACT_MAX_WIDTH: f32 = 640.0;

    // --- Styles ---

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::light();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    /// Standard Card Styling
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Highlighted frame around the predicted price
    pub fn result_frame(emphasized: bool) -> egui::Frame {
        if emphasized {
            egui::Frame::NONE
                .fill(Self::GRADIENT_END)
                .corner_radius(Self::ROUNDING_LARGE)
                .inner_margin(Self::SPACING_LARGE as i8)
                .shadow(egui::epaint::Shadow {
                    offset: [0, 10],
                    blur: 30,
                    spread: 0,
                    color: egui::Color32::from_black_alpha(50),
                })
        } else {
            egui::Frame::NONE
                .fill(Self::BG_RESULT)
                .corner_radius(Self::ROUNDING_MEDIUM)
                .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
                .inner_margin(Self::SPACING_LARGE as i8)
        }
    }

    /// Application Main Layout Frame
    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }
}
