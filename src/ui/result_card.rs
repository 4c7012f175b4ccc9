use std::collections::HashSet;

use eframe::egui;

use crate::highlight;
use crate::i18n::{self, Language};
use crate::types::SearchResult;

use super::style;

/// Affiche une carte de resultat : badge du document, score, contenu avec
/// les tokens de la requete surlignes, et panneau de metadonnees repliable.
///
/// `expanded` porte l'etat d'ouverture par identifiant de resultat ; le
/// basculement est local a la carte et rien ne se replie automatiquement.
pub fn show(
    ui: &mut egui::Ui,
    result: &SearchResult,
    query: &str,
    index: usize,
    expanded: &mut HashSet<i64>,
    locale: Language,
) {
    let frame = egui::Frame::new()
        .fill(style::CARD_BG)
        .corner_radius(egui::CornerRadius::same(8u8))
        .inner_margin(egui::Margin { left: 16, right: 16, top: 12, bottom: 12 })
        .stroke(egui::Stroke::new(1.0, style::STROKE_SUBTLE));

    frame.show(ui, |ui| {
        ui.set_width(ui.available_width());

        // En-tete : rang + badge document a gauche, score a droite
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("#{}", index + 1))
                    .size(11.0)
                    .color(style::TEXT_TERTIARY)
                    .monospace(),
            );
            ui.label(
                egui::RichText::new(i18n::t(
                    locale,
                    "result_badge",
                    &[("id", &result.id.to_string())],
                ))
                .size(11.0)
                .color(style::ACCENT),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let percentage = result.score_percentage();
                let mut score_text = i18n::t(
                    locale,
                    "confidence",
                    &[("pct", &percentage.to_string())],
                );
                // Le score brut (3 decimales) n'apparait que s'il est fini
                if let Some(label) = result.score_label() {
                    score_text.push_str(&format!(" \u{00B7} {}", label));
                }
                ui.label(
                    egui::RichText::new(score_text)
                        .size(11.0)
                        .color(style::score_color(percentage)),
                );
            });
        });

        ui.label(
            egui::RichText::new(i18n::ts(locale, "result_title"))
                .size(14.0)
                .strong()
                .color(style::TEXT_PRIMARY),
        );

        // Contenu avec surlignage des tokens de la requete
        ui.label(content_layout(result, query));

        // Panneau de metadonnees, visible seulement si le resultat en porte
        if !result.metadata.is_empty() {
            ui.add_space(4.0);
            let is_open = expanded.contains(&result.id);
            let arrow = if is_open { "\u{25B2}" } else { "\u{25BC}" };
            let toggle = ui.add(
                egui::Button::new(
                    egui::RichText::new(format!(
                        "{} {}",
                        arrow,
                        i18n::ts(locale, "metadata_toggle")
                    ))
                    .size(12.0)
                    .color(style::TEXT_SECONDARY),
                )
                .fill(egui::Color32::TRANSPARENT)
                .frame(false),
            );
            if toggle.clicked() {
                if is_open {
                    expanded.remove(&result.id);
                } else {
                    expanded.insert(result.id);
                }
            }

            if expanded.contains(&result.id) {
                let inner = egui::Frame::new()
                    .fill(style::CARD_INNER_BG)
                    .corner_radius(egui::CornerRadius::same(6u8))
                    .inner_margin(egui::Margin::same(8));
                inner.show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    for (key, value) in &result.metadata {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(key.to_uppercase())
                                    .size(10.0)
                                    .color(style::TEXT_TERTIARY),
                            );
                            ui.label(
                                egui::RichText::new(value.to_string())
                                    .size(12.0)
                                    .color(style::TEXT_PRIMARY),
                            );
                        });
                    }
                });
            }
        }
    });

    ui.add_space(6.0);
}

fn content_layout(result: &SearchResult, query: &str) -> egui::text::LayoutJob {
    let base = egui::TextFormat {
        font_id: egui::FontId::proportional(13.0),
        color: style::TEXT_SECONDARY,
        ..Default::default()
    };
    let marked = egui::TextFormat {
        font_id: egui::FontId::proportional(13.0),
        color: style::TEXT_PRIMARY,
        background: style::HIGHLIGHT_BG,
        ..Default::default()
    };

    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = f32::INFINITY;
    for segment in highlight::highlight(&result.content, query) {
        let format = if segment.is_match { marked.clone() } else { base.clone() };
        job.append(&segment.text, 0.0, format);
    }
    job
}
