use crate::application::prediction_service::PredictionService;
use crate::config::UiLayout;
use crate::domain::housing::FurnishingStatus;
use crate::domain::housing::features::AREA_RANGE;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::metrics::{render_error_banner, render_price_card};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::prediction_view_model::{
    AREA_STEP, BATHROOM_OPTIONS, BEDROOM_OPTIONS, HouseForm, PARKING_OPTIONS, PredictionOutcome,
    PredictionViewModel, STORY_OPTIONS, YesNo,
};
use eframe::egui;

/// Window state: the form, the last outcome and the shared service
pub struct HousePriceApp {
    service: &'static PredictionService,
    layout: UiLayout,
    form: HouseForm,
    outcome: Option<PredictionOutcome>,
}

impl HousePriceApp {
    pub fn new(service: &'static PredictionService, layout: UiLayout) -> Self {
        Self {
            service,
            layout,
            form: HouseForm::default(),
            outcome: None,
        }
    }

    fn run_prediction(&mut self) {
        self.outcome = Some(PredictionViewModel::predict(self.service, &self.form));
    }

    fn render_load_banner(&self, ui: &mut egui::Ui) {
        if let Some(message) = PredictionViewModel::load_banner(self.service) {
            render_error_banner(ui, &message);
            ui.add_space(DesignSystem::SPACING_SMALL);
        }
    }

    fn render_predict_button(&mut self, ui: &mut egui::Ui, label: &str) {
        let enabled = PredictionViewModel::can_predict(self.service);
        let button = egui::Button::new(
            egui::RichText::new(label)
                .size(16.0)
                .strong()
                .color(DesignSystem::TEXT_ON_ACCENT),
        )
        .fill(DesignSystem::GRADIENT_START)
        .corner_radius(DesignSystem::ROUNDING_MEDIUM)
        .min_size(egui::vec2(ui.available_width(), 40.0));

        if ui.add_enabled(enabled, button).clicked() {
            self.run_prediction();
        }
    }

    fn render_outcome(&self, ui: &mut egui::Ui, emphasized: bool) {
        match &self.outcome {
            Some(PredictionOutcome::Price(price)) => {
                let caption = emphasized.then_some("Based on the provided features and market analysis");
                render_price_card(ui, price, caption, emphasized);
            }
            Some(PredictionOutcome::Error(message)) => render_error_banner(ui, message),
            None => {}
        }
    }

    // --- Wide layout: inputs in the side panel ---

    fn render_wide(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Built with 🦀 using egui • House Price Prediction ML Model")
                        .size(12.0)
                        .color(DesignSystem::TEXT_SECONDARY),
                );
            });
        });

        egui::SidePanel::left("house_features")
            .default_width(300.0)
            .min_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(DesignSystem::SPACING_SMALL);
                    ui.label(
                        egui::RichText::new("🔧 House Features")
                            .size(20.0)
                            .strong()
                            .color(DesignSystem::ACCENT_SECONDARY),
                    );
                    ui.separator();

                    section_heading(ui, "📏 Basic Information");
                    area_input(ui, &mut self.form.area);
                    select(ui, "Number of Bedrooms", &mut self.form.bedrooms, &BEDROOM_OPTIONS);
                    select(ui, "Number of Bathrooms", &mut self.form.bathrooms, &BATHROOM_OPTIONS);
                    select(ui, "Number of Stories", &mut self.form.stories, &STORY_OPTIONS);

                    section_heading(ui, "🏡 Property Features");
                    yes_no(ui, "Main Road Access", &mut self.form.mainroad);
                    yes_no(ui, "Guest Room", &mut self.form.guestroom);
                    yes_no(ui, "Basement", &mut self.form.basement);
                    yes_no(ui, "Hot Water Heating", &mut self.form.hotwaterheating);
                    yes_no(ui, "Air Conditioning", &mut self.form.airconditioning);

                    section_heading(ui, "🚗 Additional Features");
                    select(ui, "Parking Spaces", &mut self.form.parking, &PARKING_OPTIONS);
                    yes_no(ui, "Preferred Area", &mut self.form.prefarea);
                    furnishing_select(ui, "Furnishing Status", &mut self.form.furnishing_status);
                });
            });

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("🏠 House Price Prediction System")
                                .size(34.0)
                                .strong()
                                .color(DesignSystem::ACCENT_PRIMARY),
                        );
                        ui.label(
                            egui::RichText::new(
                                "Get accurate house price predictions using machine learning",
                            )
                            .size(15.0)
                            .color(DesignSystem::TEXT_SECONDARY),
                        );
                    });
                    ui.add_space(DesignSystem::SPACING_LARGE);
                    self.render_load_banner(ui);

                    ui.columns(2, |columns| {
                        self.render_summary(&mut columns[0]);

                        let ui = &mut columns[1];
                        sub_header(ui, "🎯 Price Prediction");
                        self.render_predict_button(ui, "🔮 Predict House Price");
                        ui.add_space(DesignSystem::SPACING_MEDIUM);
                        self.render_outcome(ui, true);
                    });
                });
            });
    }

    fn render_summary(&self, ui: &mut egui::Ui) {
        sub_header(ui, "📊 Property Summary");

        Card::new().min_height(180.0).show(ui, |ui| {
            egui::Grid::new("property_summary")
                .num_columns(2)
                .striped(true)
                .spacing([DesignSystem::SPACING_LARGE, DesignSystem::SPACING_SMALL])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Feature").strong());
                    ui.label(egui::RichText::new("Value").strong());
                    ui.end_row();

                    for row in self.form.summary_rows() {
                        ui.label(row.feature);
                        ui.label(row.value);
                        ui.end_row();
                    }
                });
        });

        ui.add_space(DesignSystem::SPACING_MEDIUM);

        Card::new()
            .title("🔍 Property Features:")
            .accent(DesignSystem::ACCENT_PRIMARY)
            .show(ui, |ui| {
                for item in self.form.checklist() {
                    ui.label(format!("{} {}", item.marker(), item.label));
                }
            });
    }

    // --- Compact layout: single centered page ---

    fn render_compact(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(DesignSystem::COMPACT_MAX_WIDTH);

                        ui.label(
                            egui::RichText::new("🏠 House Price Predictor")
                                .size(30.0)
                                .strong()
                                .color(DesignSystem::TEXT_PRIMARY),
                        );
                        ui.add_space(DesignSystem::SPACING_LARGE);
                        self.render_load_banner(ui);

                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            ui.heading("Enter House Details");
                            ui.add_space(DesignSystem::SPACING_SMALL);

                            let form = &mut self.form;
                            ui.columns(2, |columns| {
                                let left = &mut columns[0];
                                area_input(left, &mut form.area);
                                select(left, "Bedrooms", &mut form.bedrooms, &BEDROOM_OPTIONS);
                                select(left, "Bathrooms", &mut form.bathrooms, &BATHROOM_OPTIONS);
                                select(left, "Stories", &mut form.stories, &STORY_OPTIONS);
                                select(left, "Parking Spaces", &mut form.parking, &PARKING_OPTIONS);
                                furnishing_select(left, "Furnishing", &mut form.furnishing_status);

                                let right = &mut columns[1];
                                yes_no(right, "Main Road Access", &mut form.mainroad);
                                yes_no(right, "Guest Room", &mut form.guestroom);
                                yes_no(right, "Basement", &mut form.basement);
                                yes_no(right, "Hot Water Heating", &mut form.hotwaterheating);
                                yes_no(right, "Air Conditioning", &mut form.airconditioning);
                                yes_no(right, "Preferred Area", &mut form.prefarea);
                            });

                            ui.add_space(DesignSystem::SPACING_MEDIUM);
                            self.render_predict_button(ui, "Predict Price");
                            ui.add_space(DesignSystem::SPACING_MEDIUM);
                            self.render_outcome(ui, false);
                        });
                    });
                });
            });
    }
}

impl eframe::App for HousePriceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        match self.layout {
            UiLayout::Wide => self.render_wide(ctx),
            UiLayout::Compact => self.render_compact(ctx),
        }
    }
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(DesignSystem::SPACING_MEDIUM);
    ui.label(egui::RichText::new(text).size(15.0).strong());
    ui.add_space(4.0);
}

fn sub_header(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(20.0)
            .strong()
            .color(DesignSystem::ACCENT_SECONDARY),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);
}

/// Bounded area input with ± buttons stepping by `AREA_STEP`
fn area_input(ui: &mut egui::Ui, area: &mut i64) {
    let min = i64::from(*AREA_RANGE.start());
    let max = i64::from(*AREA_RANGE.end());
    let step = i64::from(AREA_STEP);

    ui.label("Area (sq ft)");
    ui.horizontal(|ui| {
        ui.add(
            egui::DragValue::new(&mut *area)
                .range(min..=max)
                .speed(step as f64),
        )
        .on_hover_text("Total area of the house in square feet");
        if ui.small_button("−").clicked() {
            *area = (*area - step).clamp(min, max);
        }
        if ui.small_button("+").clicked() {
            *area = (*area + step).clamp(min, max);
        }
    });
    ui.add_space(4.0);
}

fn select(ui: &mut egui::Ui, label: &str, value: &mut u8, options: &[u8]) {
    ui.label(label);
    egui::ComboBox::from_id_salt(label)
        .selected_text(value.to_string())
        .width(ui.available_width() - DesignSystem::SPACING_SMALL)
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(value, *option, option.to_string());
            }
        });
    ui.add_space(4.0);
}

fn yes_no(ui: &mut egui::Ui, label: &str, value: &mut YesNo) {
    ui.label(label);
    egui::ComboBox::from_id_salt(label)
        .selected_text(value.label())
        .width(ui.available_width() - DesignSystem::SPACING_SMALL)
        .show_ui(ui, |ui| {
            for option in YesNo::OPTIONS {
                ui.selectable_value(value, option, option.label());
            }
        });
    ui.add_space(4.0);
}

fn furnishing_select(ui: &mut egui::Ui, label: &str, value: &mut FurnishingStatus) {
    ui.label(label);
    egui::ComboBox::from_id_salt(label)
        .selected_text(value.as_str())
        .width(ui.available_width() - DesignSystem::SPACING_SMALL)
        .show_ui(ui, |ui| {
            for option in FurnishingStatus::ALL {
                ui.selectable_value(value, option, option.as_str());
            }
        })
        .response
        .on_hover_text("Current furnishing status");
    ui.add_space(4.0);
}
