use eframe::egui;

use crate::controller::SearchController;
use crate::i18n::{self, Language};

use super::style;

pub enum StatusAction {
    None,
    CycleLocale,
}

/// Barre de statut : resume de l'etat courant, horodatage de la derniere
/// reponse et bouton de changement de langue.
pub fn show(ui: &mut egui::Ui, controller: &SearchController, locale: Language) -> StatusAction {
    let mut action = StatusAction::None;

    let frame = egui::Frame::new()
        .fill(style::CARD_INNER_BG)
        .inner_margin(egui::Margin { left: 12, right: 12, top: 4, bottom: 4 });

    frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.allocate_ui_with_layout(
            egui::vec2(ui.available_width(), 20.0),
            egui::Layout::left_to_right(egui::Align::Center),
            |ui| {
                ui.label(
                    egui::RichText::new(i18n::summary_text(locale, &controller.summary()))
                        .size(11.0)
                        .color(style::TEXT_TERTIARY),
                );

                if let Some(updated) = controller.last_updated() {
                    ui.label(
                        egui::RichText::new("\u{2502}")
                            .size(11.0)
                            .color(style::STROKE_SUBTLE),
                    );
                    ui.label(
                        egui::RichText::new(i18n::t(
                            locale,
                            "updated_at",
                            &[("time", &updated.format("%H:%M").to_string())],
                        ))
                        .size(11.0)
                        .color(style::TEXT_TERTIARY),
                    );
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let toggle = ui.add(
                        egui::Button::new(
                            egui::RichText::new(locale.label())
                                .size(11.0)
                                .color(style::TEXT_SECONDARY),
                        )
                        .fill(egui::Color32::TRANSPARENT)
                        .frame(false),
                    );
                    if toggle.clicked() {
                        action = StatusAction::CycleLocale;
                    }
                });
            },
        );
    });

    action
}
