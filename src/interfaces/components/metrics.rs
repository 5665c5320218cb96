use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// The predicted price box.
///
/// `emphasized` selects the gradient-colored variant used by the wide layout.
pub fn render_price_card(ui: &mut egui::Ui, price: &str, caption: Option<&str>, emphasized: bool) {
    let (title_color, value_color) = if emphasized {
        (DesignSystem::TEXT_ON_ACCENT, DesignSystem::TEXT_ON_ACCENT)
    } else {
        (DesignSystem::TEXT_PRIMARY, DesignSystem::TEXT_PRIMARY)
    };
    let title = if emphasized {
        "💰 Predicted House Price"
    } else {
        "Predicted House Price"
    };

    DesignSystem::result_frame(emphasized).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(title).size(18.0).strong().color(title_color));
            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.label(
                egui::RichText::new(price)
                    .size(if emphasized { 36.0 } else { 30.0 })
                    .strong()
                    .color(value_color),
            );

            if let Some(text) = caption {
                ui.add_space(DesignSystem::SPACING_SMALL);
                ui.label(egui::RichText::new(text).size(12.0).color(title_color));
            }
        });
    });
}

/// Inline red message box
pub fn render_error_banner(ui: &mut egui::Ui, message: &str) {
    egui::Frame::NONE
        .fill(DesignSystem::DANGER.linear_multiply(0.12))
        .corner_radius(DesignSystem::ROUNDING_MEDIUM)
        .stroke(egui::Stroke::new(1.0, DesignSystem::DANGER))
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(message).strong().color(DesignSystem::DANGER));
        });
}
