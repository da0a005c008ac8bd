use crate::PortalApp;
use crate::ui::helpers::{outline_button, primary_button, stat_tile};
use crate::ui::layout::{PRIMARY, SUCCESS, TEXT_DARK, centered_panel};
use egui::{Align, Color32, Context, Layout, RichText, vec2};

pub fn ui_result(app: &mut PortalApp, ctx: &Context) {
    let tiles = app.result_tiles();
    let mut home = false;

    centered_panel(ctx, 420.0, 620.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("✔").size(48.0).color(SUCCESS));
            ui.add_space(12.0);
            ui.label(RichText::new("Congratulations!").size(28.0).strong().color(TEXT_DARK));
            ui.label(RichText::new("You have successfully completed the assessment.").color(Color32::GRAY));
            ui.add_space(24.0);
        });

        let colors = [PRIMARY, SUCCESS, Color32::DARK_GRAY];
        let tile_w = (ui.available_width() - 72.0) / 3.0;
        ui.horizontal(|ui| {
            for (tile, color) in tiles.iter().zip(colors) {
                stat_tile(ui, tile.caption, &tile.value, color, tile_w);
            }
        });
        ui.add_space(24.0);

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            home |= primary_button(ui, "Back to Dashboard", vec2(170.0, 34.0));
            if outline_button(ui, "Download Certificate", vec2(170.0, 34.0), true) {
                log::info!("certificate download is not available in this build");
            }
        });
    });

    if home {
        app.go_home();
    }
}
