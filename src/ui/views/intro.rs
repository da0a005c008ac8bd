use crate::PortalApp;
use crate::ui::helpers::{outline_button, primary_button};
use crate::ui::layout::{TEXT_DARK, accent, centered_panel};
use egui::{Align, Button, Color32, Context, Frame, Layout, Margin, RichText, Stroke, vec2};

const INSTRUCTIONS: [&str; 4] = [
    "1. This assessment is designed to test your knowledge on the subject matter. Please ensure you have a stable internet connection.",
    "2. Once you start, the timer will begin. You cannot pause the timer.",
    "3. You can flag questions for review and return to them before submitting.",
    "4. Do not refresh or close the window, as your progress may be lost.",
];

pub fn ui_intro(app: &mut PortalApp, ctx: &Context) {
    let Some(exam) = app.active_exam().cloned() else {
        app.go_home();
        return;
    };
    let code = app.config.exam_code(&exam.id);
    let passing = app.config.passing_score_percent;
    let mut back = false;
    let mut start = false;

    centered_panel(ctx, 480.0, 780.0, |ui| {
        ui.horizontal_top(|ui| {
            Frame::default()
                .fill(accent(exam.color))
                .inner_margin(Margin::same(20))
                .show(ui, |ui| {
                    ui.set_width(220.0);
                    ui.set_min_height(420.0);
                    ui.vertical(|ui| {
                        let back_btn = Button::new(RichText::new("‹ Back").color(Color32::WHITE)).frame(false);
                        back |= ui.add(back_btn).clicked();
                        ui.add_space(40.0);
                        ui.label(RichText::new(&exam.title).size(26.0).strong().color(Color32::WHITE));
                        ui.add_space(16.0);
                        for line in [
                            format!("🕑 {} Minutes", exam.duration_minutes),
                            format!("▦ {} Questions", exam.question_count),
                            format!("🏅 Passing Score: {passing}%"),
                        ] {
                            ui.label(RichText::new(line).size(16.0).color(Color32::WHITE));
                            ui.add_space(6.0);
                        }
                        ui.add_space(40.0);
                        ui.label(RichText::new(format!("ID: {code}")).small().color(Color32::WHITE));
                    });
                });

            ui.add_space(20.0);
            ui.vertical(|ui| {
                ui.label(RichText::new("Instructions").size(20.0).strong().color(TEXT_DARK));
                ui.separator();
                for line in INSTRUCTIONS {
                    ui.label(line);
                    ui.add_space(6.0);
                }
                Frame::default()
                    .fill(Color32::from_rgb(254, 252, 232))
                    .stroke(Stroke::new(1.0, Color32::from_rgb(254, 240, 138)))
                    .inner_margin(Margin::same(8))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new("Note: This session is being recorded for proctoring purposes.")
                                .small()
                                .color(Color32::from_rgb(133, 77, 14)),
                        );
                    });

                if !app.message.is_empty() {
                    ui.add_space(8.0);
                    ui.label(RichText::new(&app.message).color(Color32::DARK_RED));
                }

                ui.add_space(24.0);
                ui.separator();
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    start |= primary_button(ui, "Start Now ▶", vec2(130.0, 34.0));
                    back |= outline_button(ui, "Cancel", vec2(100.0, 34.0), true);
                });
            });
        });
    });

    if back {
        if let Err(err) = app.back() {
            app.report(err);
        }
    } else if start {
        if let Err(err) = app.proceed() {
            app.report(err);
        }
    }
}
