// src/ui/helpers.rs
use crate::ui::layout::{PRIMARY, TEXT_DARK};
use egui::{Button, Color32, Frame, RichText, Stroke, Ui, Vec2};

/// Filled blue button. Returns `true` when clicked.
pub fn primary_button(ui: &mut Ui, label: &str, size: Vec2) -> bool {
    let text = RichText::new(label).strong().color(Color32::WHITE);
    ui.add(Button::new(text).fill(PRIMARY).min_size(size)).clicked()
}

/// Bordered button that can be greyed out.
pub fn outline_button(ui: &mut Ui, label: &str, size: Vec2, enabled: bool) -> bool {
    let btn = Button::new(RichText::new(label).strong().color(TEXT_DARK))
        .fill(Color32::WHITE)
        .stroke(Stroke::new(1.0, Color32::GRAY))
        .min_size(size);
    ui.add_enabled(enabled, btn).clicked()
}

/// Small rounded label, used for difficulty and category tags.
pub fn badge(ui: &mut Ui, text: &str, fill: Color32, color: Color32) {
    Frame::default()
        .fill(fill)
        .corner_radius(3u8)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().strong().color(color));
        });
}

/// Caption over a big number, as on the results screen.
pub fn stat_tile(ui: &mut Ui, caption: &str, value: &str, color: Color32, width: f32) {
    Frame::default()
        .fill(Color32::from_gray(248))
        .stroke(Stroke::new(1.0, Color32::from_gray(235)))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(width);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(caption.to_uppercase()).small().strong().color(Color32::GRAY));
                ui.label(RichText::new(value).size(28.0).strong().color(color));
            });
        });
}
