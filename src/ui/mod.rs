mod result_card;
mod search_bar;
mod status_bar;
mod style;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::controller::SearchController;
use crate::fonts;
use crate::i18n::{self, Language};

/// Delai de rotation du placeholder de la barre de recherche
const PLACEHOLDER_ROTATION: Duration = Duration::from_secs(5);

pub struct DeepSearchApp {
    controller: SearchController,
    // Etat d'ouverture des panneaux de metadonnees, par identifiant de resultat
    expanded: HashSet<i64>,
    locale: Language,
    placeholder_index: usize,
    placeholder_changed_at: Instant,
    focus_pending: bool,
}

impl DeepSearchApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, controller: SearchController) -> Self {
        Self {
            controller,
            expanded: HashSet::new(),
            locale: Language::En,
            placeholder_index: 0,
            placeholder_changed_at: Instant::now(),
            focus_pending: true,
        }
    }
}

impl eframe::App for DeepSearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.controller.poll() {
            ctx.request_repaint();
        }

        style::apply(ctx);

        // Rotation du placeholder
        if self.placeholder_changed_at.elapsed() >= PLACEHOLDER_ROTATION {
            self.placeholder_index =
                (self.placeholder_index + 1) % search_bar::PLACEHOLDER_QUERIES.len();
            self.placeholder_changed_at = Instant::now();
            ctx.request_repaint();
        }
        let placeholder = search_bar::PLACEHOLDER_QUERIES[self.placeholder_index];

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            match status_bar::show(ui, &self.controller, self.locale) {
                status_bar::StatusAction::None => {}
                status_bar::StatusAction::CycleLocale => {
                    self.locale = self.locale.cycle();
                }
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(i18n::ts(self.locale, "app_title"))
                        .size(22.0)
                        .strong()
                        .color(style::TEXT_PRIMARY),
                );
            });
            ui.add_space(4.0);

            // 1. Barre de recherche
            let loading = self.controller.loading();
            let can_reset = self.controller.can_reset();
            let action = search_bar::show(
                ui,
                self.controller.query_mut(),
                placeholder,
                loading,
                can_reset,
                &mut self.focus_pending,
                self.locale,
            );
            match action {
                search_bar::SearchAction::None => {}
                search_bar::SearchAction::Submit => self.controller.submit(),
                search_bar::SearchAction::Reset => {
                    self.controller.reset();
                    self.expanded.clear();
                    self.focus_pending = true;
                }
            }

            // 2. Bandeau d'erreur, sous le formulaire
            if let Some(error) = self.controller.error() {
                let banner = egui::Frame::new()
                    .fill(style::DANGER_BG)
                    .corner_radius(egui::CornerRadius::same(6u8))
                    .inner_margin(egui::Margin::same(10))
                    .stroke(egui::Stroke::new(1.0, style::DANGER));
                banner.show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new(error)
                            .size(12.0)
                            .color(style::DANGER),
                    );
                });
            }

            ui.add_space(8.0);

            // 3. Liste des resultats
            if !self.controller.results().is_empty() {
                ui.label(
                    egui::RichText::new(i18n::ts(self.locale, "results_heading"))
                        .size(15.0)
                        .strong()
                        .color(style::TEXT_PRIMARY),
                );
                ui.add_space(4.0);

                let query = self.controller.query().to_string();
                egui::ScrollArea::vertical()
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        for (index, result) in self.controller.results().iter().enumerate() {
                            result_card::show(
                                ui,
                                result,
                                &query,
                                index,
                                &mut self.expanded,
                                self.locale,
                            );
                        }
                    });
            } else if self.controller.is_empty_state() {
                let panel = egui::Frame::new()
                    .fill(style::CARD_BG)
                    .corner_radius(egui::CornerRadius::same(8u8))
                    .inner_margin(egui::Margin::same(24))
                    .stroke(egui::Stroke::new(1.0, style::STROKE_SUBTLE));
                panel.show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(i18n::ts(self.locale, "empty_title"))
                                .size(15.0)
                                .strong()
                                .color(style::TEXT_PRIMARY),
                        );
                        ui.label(
                            egui::RichText::new(i18n::ts(self.locale, "empty_hint"))
                                .size(12.0)
                                .color(style::TEXT_SECONDARY),
                        );
                    });
                });
            }
        });

        // Repaint regulier tant qu'une requete est en vol
        if self.controller.loading() {
            ctx.request_repaint_after(Duration::from_millis(50));
        } else {
            ctx.request_repaint_after(PLACEHOLDER_ROTATION);
        }
    }
}

/// Charge la police Vazirmatn provisionnee si elle est presente ;
/// son absence n'est pas une erreur, egui garde ses polices par defaut.
pub fn install_fonts(ctx: &egui::Context) {
    let path = std::path::Path::new("public/fonts").join(fonts::UI_FONT_FILE);
    if let Ok(bytes) = std::fs::read(&path) {
        let mut definitions = egui::FontDefinitions::default();
        definitions
            .font_data
            .insert("vazirmatn".to_owned(), Arc::new(egui::FontData::from_owned(bytes)));
        if let Some(family) = definitions.families.get_mut(&egui::FontFamily::Proportional) {
            family.insert(0, "vazirmatn".to_owned());
        }
        ctx.set_fonts(definitions);
        log::debug!("loaded Vazirmatn from {}", path.display());
    }
}
