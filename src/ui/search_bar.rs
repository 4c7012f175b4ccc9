use eframe::egui;

use crate::i18n::{self, Language};

use super::style;

/// Suggestions de requetes affichees en placeholder, en rotation
pub const PLACEHOLDER_QUERIES: &[&str] = &[
    "Summaries about climate risk in 2024 reports",
    "Customer feedback mentioning onboarding issues",
    "Research insights on generative AI breakthroughs",
    "Key takeaways from quarterly financial filings",
];

pub enum SearchAction {
    None,
    Submit,
    Reset,
}

/// Affiche la barre de recherche : champ texte, bouton de recherche et
/// bouton de reinitialisation.
///
/// - `focus_pending` : mis a `false` apres avoir applique le focus une seule fois.
pub fn show(
    ui: &mut egui::Ui,
    query: &mut String,
    placeholder: &str,
    loading: bool,
    can_reset: bool,
    focus_pending: &mut bool,
    locale: Language,
) -> SearchAction {
    let mut action = SearchAction::None;

    ui.add_space(8.0);

    let frame = egui::Frame::new()
        .fill(style::CARD_BG)
        .corner_radius(egui::CornerRadius::same(8u8))
        .inner_margin(egui::Margin { left: 12, right: 12, top: 10, bottom: 10 })
        .stroke(egui::Stroke::new(1.0, style::STROKE_SUBTLE));

    frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            // Icone loupe
            ui.label(
                egui::RichText::new("\u{1F50D}")
                    .size(14.0)
                    .color(style::TEXT_TERTIARY),
            );

            let button_label = if loading {
                i18n::ts(locale, "search_button_loading")
            } else {
                i18n::ts(locale, "search_button")
            };
            let button_w = 140.0;
            let text_w = ui.available_width() - button_w - ui.spacing().item_spacing.x;

            let response = ui.add_sized(
                egui::vec2(text_w.max(80.0), 24.0),
                egui::TextEdit::singleline(query)
                    .hint_text(
                        egui::RichText::new(placeholder)
                            .color(style::TEXT_DISABLED)
                            .size(14.0),
                    )
                    .font(egui::TextStyle::Body)
                    .text_color(style::TEXT_PRIMARY)
                    .frame(false)
                    .desired_width(f32::INFINITY)
                    .interactive(!loading),
            );

            // Focus applique une seule fois (evite de voler le focus chaque frame)
            if *focus_pending {
                response.request_focus();
                *focus_pending = false;
            }

            // Entree dans le champ = soumission
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                action = SearchAction::Submit;
                response.request_focus();
            }

            let submit = ui.add_enabled(
                !loading,
                egui::Button::new(
                    egui::RichText::new(button_label)
                        .size(13.0)
                        .color(style::TEXT_PRIMARY),
                )
                .fill(egui::Color32::from_rgb(29, 78, 137)),
            );
            if submit.clicked() {
                action = SearchAction::Submit;
            }
        });
    });

    // Bouton de reinitialisation, inactif pendant une recherche en cours
    ui.horizontal(|ui| {
        let reset = ui.add_enabled(
            can_reset && !loading,
            egui::Button::new(
                egui::RichText::new(i18n::ts(locale, "reset_button"))
                    .size(12.0)
                    .color(style::TEXT_SECONDARY),
            )
            .fill(egui::Color32::TRANSPARENT)
            .stroke(egui::Stroke::new(1.0, style::STROKE_SUBTLE)),
        );
        if reset.clicked() {
            action = SearchAction::Reset;
        }
    });

    ui.add_space(4.0);

    action
}
