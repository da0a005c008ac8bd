mod helpers;
pub mod layout;
pub mod views;

use crate::app::PortalApp;
use crate::model::View;
use eframe::{App, Frame};
use egui::Context;
use layout::{side_panel, top_panel};

impl App for PortalApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.show(ctx);
    }
}

impl PortalApp {
    /// Draws one frame of the current view.
    pub fn show(&mut self, ctx: &Context) {
        top_panel(self, ctx);

        // The sidebar is hidden during an attempt to keep the focus on the questions
        if self.view() != View::Exam {
            side_panel(self, ctx);
        }

        match self.view() {
            View::Dashboard => views::dashboard::ui_dashboard(self, ctx),
            View::Intro => views::intro::ui_intro(self, ctx),
            View::Exam => views::player::ui_player(self, ctx),
            View::Result => views::result::ui_result(self, ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Pos2, RawInput, Rect, vec2};

    fn frame(app: &mut PortalApp, ctx: &Context) {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(1280.0, 800.0))),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.show(ctx));
    }

    #[test]
    fn every_view_renders_headless() {
        let ctx = Context::default();
        let mut app = PortalApp::embedded().unwrap();
        frame(&mut app, &ctx);
        assert_eq!(app.view(), View::Dashboard);

        app.select_exam("1").unwrap();
        frame(&mut app, &ctx);
        assert_eq!(app.view(), View::Intro);

        app.proceed().unwrap();
        app.select_option(0, 2).unwrap();
        app.go_to_question(2).unwrap();
        frame(&mut app, &ctx);
        assert_eq!(app.view(), View::Exam);

        app.finish().unwrap();
        frame(&mut app, &ctx);
        assert_eq!(app.view(), View::Result);
    }

    #[test]
    fn empty_search_result_renders() {
        let ctx = Context::default();
        let mut app = PortalApp::embedded().unwrap();
        app.search = "nothing matches this".into();
        frame(&mut app, &ctx);
        assert_eq!(app.view(), View::Dashboard);
        assert!(app.exam_cards().is_empty());
    }
}
