use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Framed panel holding one block of the property overview
pub struct Card {
    title: Option<&'static str>,
    min_height: f32,
    accent: Option<egui::Color32>,
}

impl Card {
    pub fn new() -> Self {
        Self {
            title: None,
            min_height: 0.0,
            accent: None,
        }
    }

    pub fn title(mut self, title: &'static str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = height;
        self
    }

    /// Colored border, used for the info box around the checklist
    pub fn accent(mut self, color: egui::Color32) -> Self {
        self.accent = Some(color);
        self
    }

    pub fn show(self, ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) -> egui::Response {
        let frame = match self.accent {
            Some(color) => DesignSystem::card_frame().stroke(egui::Stroke::new(2.0, color)),
            None => DesignSystem::card_frame(),
        };

        frame
            .show(ui, |ui| {
                ui.set_min_height(self.min_height);

                if let Some(title) = self.title {
                    ui.label(
                        egui::RichText::new(title)
                            .size(14.0)
                            .color(DesignSystem::TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.add_space(DesignSystem::SPACING_SMALL);
                }

                add_contents(ui);
            })
            .response
    }
}
