use crate::PortalApp;
use crate::app::ExamCard;
use crate::ui::helpers::badge;
use crate::ui::layout::{CANVAS, PRIMARY, TEXT_DARK, accent};
use egui::{
    Align, Button, CentralPanel, Color32, Context, Frame, Layout, Margin, RichText, ScrollArea,
    Stroke, TextEdit, Ui,
};

const CARD_WIDTH: f32 = 280.0;

pub fn ui_dashboard(app: &mut PortalApp, ctx: &Context) {
    // Cards are built before the closure so the search box can borrow `app.search`
    let cards = app.exam_cards();
    let mut picked: Option<String> = None;

    CentralPanel::default()
        .frame(Frame::default().fill(CANVAS).inner_margin(Margin::same(24)))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new("Employee Dashboard").strong().color(TEXT_DARK));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.add(
                        TextEdit::singleline(&mut app.search)
                            .hint_text("🔍 Search assessments...")
                            .desired_width(240.0),
                    );
                });
            });
            ui.separator();

            if !app.message.is_empty() {
                ui.label(RichText::new(&app.message).color(Color32::DARK_RED));
                ui.add_space(8.0);
            }

            ui.label(
                RichText::new("Assigned Assessments")
                    .size(16.0)
                    .strong()
                    .color(Color32::from_rgb(96, 94, 92)),
            );
            ui.add_space(12.0);

            if cards.is_empty() {
                ui.label("No assessments match your search.");
                return;
            }

            ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(24.0, 24.0);
                    for card in &cards {
                        if exam_card(ui, card) {
                            picked = Some(card.id.clone());
                        }
                    }
                });
            });
        });

    if let Some(id) = picked {
        if let Err(err) = app.select_exam(&id) {
            app.report(err);
        }
    }
}

/// Draws one catalog card. Returns `true` when "Start Assessment" is clicked.
fn exam_card(ui: &mut Ui, card: &ExamCard) -> bool {
    let mut start = false;
    Frame::default()
        .fill(Color32::WHITE)
        .stroke(Stroke::new(1.0, Color32::LIGHT_GRAY))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                Frame::default()
                    .fill(accent(card.color))
                    .inner_margin(Margin::same(12))
                    .show(ui, |ui| {
                        ui.set_width(CARD_WIDTH - 24.0);
                        ui.set_min_height(80.0);
                        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                            badge(ui, &card.difficulty.to_string(), Color32::WHITE, TEXT_DARK);
                        });
                    });

                Frame::default().inner_margin(Margin::same(16)).show(ui, |ui| {
                    ui.set_width(CARD_WIDTH - 32.0);
                    badge(
                        ui,
                        &card.category.to_uppercase(),
                        Color32::from_gray(240),
                        Color32::GRAY,
                    );
                    ui.add_space(6.0);
                    ui.label(RichText::new(&card.title).size(17.0).strong().color(TEXT_DARK));
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(card.duration_label()).color(Color32::GRAY));
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(RichText::new(card.questions_label()).color(Color32::GRAY));
                        });
                    });
                });

                let start_btn = Button::new(RichText::new("Start Assessment ›").strong().color(PRIMARY))
                    .fill(Color32::from_gray(249))
                    .min_size(egui::vec2(CARD_WIDTH, 36.0));
                start = ui.add(start_btn).clicked();
            });
        });
    start
}
