use crate::PortalApp;
use crate::app::{QuestionCell, QuestionStatus};
use crate::ui::helpers::{outline_button, primary_button};
use crate::ui::layout::{CANVAS, PRIMARY, SUCCESS, TEXT_DARK};
use crate::view_models::option_letter;
use egui::{
    Align, Button, CentralPanel, Color32, Context, Frame, Layout, Margin, RichText, ScrollArea,
    Sense, Stroke, Ui, vec2,
};

const ANSWERED_FILL: Color32 = Color32::from_rgb(219, 234, 254);
const ANSWERED_TEXT: Color32 = Color32::from_rgb(29, 78, 216);
const FLAG: Color32 = Color32::from_rgb(249, 115, 22);

#[derive(Clone, Copy, Debug)]
enum PlayerAction {
    Select(usize),
    GoTo(usize),
    Previous,
    Next,
    Submit,
}

pub fn ui_player(app: &mut PortalApp, ctx: &Context) {
    let (Some(exam), Some(question)) = (app.active_exam().cloned(), app.current_question().cloned())
    else {
        app.go_home();
        return;
    };
    let pointer = app.pointer().unwrap_or(0);
    let total = app.question_count();
    let selected = app.player().and_then(|p| p.answer_for(pointer));
    let cells = app.question_cells();
    let is_last = app.on_last_question();
    let timer = app.config.timer_label.clone();
    let mut action: Option<PlayerAction> = None;

    egui::TopBottomPanel::top("player_header")
        .frame(Frame::default().fill(Color32::WHITE).inner_margin(Margin::symmetric(24, 8)))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(exam.title.to_uppercase()).small().strong().color(Color32::GRAY));
                    ui.label(
                        RichText::new(format!("Question {} of {}", pointer + 1, total))
                            .strong()
                            .color(TEXT_DARK),
                    );
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(format!("🕑 {timer}")).monospace().strong().color(PRIMARY));
                });
            });
        });

    egui::TopBottomPanel::bottom("player_footer")
        .frame(Frame::default().fill(Color32::WHITE).inner_margin(Margin::symmetric(32, 12)))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if outline_button(ui, "Previous", vec2(128.0, 34.0), pointer > 0) {
                    action = Some(PlayerAction::Previous);
                }
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if is_last {
                        let submit = Button::new(RichText::new("Submit").strong().color(Color32::WHITE))
                            .fill(SUCCESS)
                            .min_size(vec2(128.0, 34.0));
                        if ui.add(submit).clicked() {
                            action = Some(PlayerAction::Submit);
                        }
                    } else if primary_button(ui, "Next ›", vec2(128.0, 34.0)) {
                        action = Some(PlayerAction::Next);
                    }
                });
            });
        });

    egui::SidePanel::left("question_grid")
        .resizable(false)
        .exact_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Overview").small().strong());
            ui.separator();
            egui::Grid::new("question_grid_cells")
                .spacing([6.0, 6.0])
                .show(ui, |ui| {
                    for (i, cell) in cells.iter().enumerate() {
                        if grid_cell(ui, cell) {
                            action = Some(PlayerAction::GoTo(cell.index));
                        }
                        if i % 4 == 3 {
                            ui.end_row();
                        }
                    }
                });

            ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
                ui.add_space(8.0);
                legend_row(ui, PRIMARY, "Current");
                legend_row(ui, ANSWERED_FILL, "Answered");
                legend_row(ui, Color32::WHITE, "Not Visited");
                ui.separator();
            });
        });

    CentralPanel::default()
        .frame(Frame::default().fill(CANVAS).inner_margin(Margin::same(40)))
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                let width = ui.available_width().min(720.0);
                ui.set_width(width);
                ui.label(RichText::new(&question.text).size(22.0).strong().color(TEXT_DARK));
                ui.add_space(24.0);

                for (idx, opt) in question.options.iter().enumerate() {
                    let is_selected = selected == Some(idx);
                    let text = RichText::new(format!("{}. {}", option_letter(idx), opt));
                    let text = if is_selected { text.strong().color(TEXT_DARK) } else { text };
                    let (fill, stroke) = if is_selected {
                        (Color32::from_rgb(239, 246, 255), Stroke::new(2.0, PRIMARY))
                    } else {
                        (Color32::WHITE, Stroke::new(2.0, Color32::from_gray(229)))
                    };
                    let btn = Button::new(text)
                        .selected(is_selected)
                        .fill(fill)
                        .stroke(stroke)
                        .min_size(vec2(width, 48.0));
                    if ui.add(btn).clicked() {
                        action = Some(PlayerAction::Select(idx));
                    }
                    ui.add_space(8.0);
                }

                if !app.message.is_empty() {
                    ui.add_space(8.0);
                    ui.label(RichText::new(&app.message).color(Color32::DARK_RED));
                }
            });
        });

    let Some(action) = action else { return };
    log::debug!("player action {action:?}");
    let outcome = match action {
        PlayerAction::Select(option) => app.answer_current(option),
        PlayerAction::GoTo(index) => app.go_to_question(index as isize).map(|_| ()),
        PlayerAction::Previous => app.previous_question().map(|_| ()),
        PlayerAction::Next => app.next_question().map(|_| ()),
        PlayerAction::Submit => app.submit(),
    };
    if let Err(err) = outcome {
        app.report(err);
    }
}

/// One numbered square of the overview grid. Returns `true` when clicked.
fn grid_cell(ui: &mut Ui, cell: &QuestionCell) -> bool {
    let (fill, text_color) = match cell.status {
        QuestionStatus::Current => (PRIMARY, Color32::WHITE),
        QuestionStatus::Answered => (ANSWERED_FILL, ANSWERED_TEXT),
        QuestionStatus::NotVisited => (Color32::WHITE, Color32::DARK_GRAY),
    };
    let label = RichText::new(cell.label()).color(text_color);
    let label = if cell.status == QuestionStatus::Current { label.strong() } else { label };
    let response = ui.add(
        Button::new(label)
            .fill(fill)
            .stroke(Stroke::new(1.0, Color32::LIGHT_GRAY))
            .min_size(vec2(44.0, 40.0)),
    );
    if cell.flagged {
        let dot = response.rect.right_top() + vec2(-5.0, 5.0);
        ui.painter().circle_filled(dot, 3.0, FLAG);
    }
    response.clicked()
}

fn legend_row(ui: &mut Ui, fill: Color32, label: &str) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
        ui.painter().rect_filled(rect, 0u8, fill);
        ui.painter().rect_stroke(rect, 0u8, Stroke::new(1.0, Color32::GRAY), egui::StrokeKind::Inside);
        ui.label(RichText::new(label).small().color(Color32::GRAY));
    });
}
