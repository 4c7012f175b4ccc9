use eframe::egui;

/// Palette sombre bleu/ardoise, reprise du theme web d'origine
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(96, 165, 250);
pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(226, 232, 240);
pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);
pub const TEXT_TERTIARY: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);
pub const TEXT_DISABLED: egui::Color32 = egui::Color32::from_rgb(71, 85, 105);
pub const PANEL_BG: egui::Color32 = egui::Color32::from_rgb(2, 6, 23);
pub const CARD_BG: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);
pub const CARD_INNER_BG: egui::Color32 = egui::Color32::from_rgb(10, 16, 32);
pub const STROKE_SUBTLE: egui::Color32 = egui::Color32::from_rgb(51, 65, 85);
pub const DANGER: egui::Color32 = egui::Color32::from_rgb(252, 165, 165);
pub const DANGER_BG: egui::Color32 = egui::Color32::from_rgb(69, 10, 10);
// Fond du texte surligne — bleu translucide comme le <mark> d'origine
pub const HIGHLIGHT_BG: egui::Color32 = egui::Color32::from_rgba_premultiplied(30, 58, 95, 160);
pub const SCORE_GREEN: egui::Color32 = egui::Color32::from_rgb(74, 222, 128);
pub const SCORE_YELLOW: egui::Color32 = egui::Color32::from_rgb(250, 204, 21);
pub const SCORE_ORANGE: egui::Color32 = egui::Color32::from_rgb(251, 146, 60);

pub fn score_color(percentage: u8) -> egui::Color32 {
    if percentage > 80 {
        SCORE_GREEN
    } else if percentage > 65 {
        SCORE_YELLOW
    } else {
        SCORE_ORANGE
    }
}

pub fn apply(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.override_text_color = Some(TEXT_PRIMARY);
    style.visuals.panel_fill = PANEL_BG;
    style.visuals.window_fill = CARD_BG;
    style.visuals.window_stroke = egui::Stroke::new(1.0, STROKE_SUBTLE);
    style.visuals.widgets.noninteractive.bg_fill = egui::Color32::TRANSPARENT;
    style.visuals.widgets.inactive.bg_fill = CARD_BG;
    style.visuals.widgets.hovered.bg_fill = egui::Color32::from_rgb(30, 41, 59);
    style.visuals.widgets.active.bg_fill = egui::Color32::from_rgb(51, 65, 85);
    style.visuals.selection.bg_fill = egui::Color32::from_rgba_premultiplied(40, 70, 110, 100);
    style.visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    style.visuals.window_corner_radius = egui::CornerRadius::same(8u8);
    style.visuals.widgets.noninteractive.corner_radius = egui::CornerRadius::same(6u8);
    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(6u8);
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(6u8);
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(6u8);

    ctx.set_style(style);
}
