use crate::model::{ColorTag, View};
use crate::PortalApp;
use egui::{Align, CentralPanel, Color32, Context, Frame, Layout, RichText, Ui};

pub const PRIMARY: Color32 = Color32::from_rgb(0, 120, 212);
pub const TEXT_DARK: Color32 = Color32::from_rgb(50, 49, 48);
pub const CANVAS: Color32 = Color32::from_rgb(243, 242, 241);
pub const SUCCESS: Color32 = Color32::from_rgb(21, 128, 61);

pub fn accent(color: ColorTag) -> Color32 {
    match color {
        ColorTag::Blue => Color32::from_rgb(37, 99, 235),
        ColorTag::Emerald => Color32::from_rgb(5, 150, 105),
        ColorTag::Purple => Color32::from_rgb(147, 51, 234),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarItem {
    Dashboard,
    Courses,
    History,
    Certificates,
}

impl SidebarItem {
    pub const ALL: [SidebarItem; 4] = [
        SidebarItem::Dashboard,
        SidebarItem::Courses,
        SidebarItem::History,
        SidebarItem::Certificates,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SidebarItem::Dashboard => "▦  Dashboard",
            SidebarItem::Courses => "☰  My Courses",
            SidebarItem::History => "🕑  History",
            SidebarItem::Certificates => "🏅  Certificates",
        }
    }

    /// Only the dashboard entry is ever highlighted, and only on the dashboard.
    pub fn is_active(self, view: View) -> bool {
        self == SidebarItem::Dashboard && view == View::Dashboard
    }
}

pub fn top_panel(app: &PortalApp, ctx: &Context) {
    egui::TopBottomPanel::top("header_panel")
        .frame(Frame::default().fill(PRIMARY).inner_margin(egui::Margin::symmetric(24, 12)))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("▦").size(22.0).color(Color32::WHITE));
                ui.add_space(8.0);
                ui.label(
                    RichText::new(&app.config.window_title)
                        .size(18.0)
                        .strong()
                        .color(Color32::WHITE),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("👤 {}", app.config.user_initials))
                            .strong()
                            .color(Color32::WHITE),
                    );
                    ui.add_space(12.0);
                    ui.label(RichText::new(&app.config.user_role).small().color(Color32::WHITE));
                });
            });
        });
}

pub fn side_panel(app: &PortalApp, ctx: &Context) {
    let view = app.view();
    egui::SidePanel::left("sidebar_panel")
        .resizable(false)
        .exact_width(220.0)
        .show(ctx, |ui| {
            ui.add_space(12.0);
            for item in SidebarItem::ALL {
                let active = item.is_active(view);
                let text = if active {
                    RichText::new(item.label()).strong().color(PRIMARY)
                } else {
                    RichText::new(item.label())
                };
                // Entries other than the dashboard have no screen behind them.
                let _ = ui.selectable_label(active, text);
                ui.add_space(4.0);
            }
            ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("⎋  Sign Out").color(Color32::GRAY));
                ui.separator();
            });
        });
}

/// White card centred in the canvas, at most `max_width` wide.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default()
        .frame(Frame::default().fill(CANVAS))
        .show(ctx, |ui| {
            let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
            ui.add_space(extra);
            ui.vertical_centered(|ui| {
                Frame::default()
                    .fill(Color32::WHITE)
                    .stroke(egui::Stroke::new(1.0, Color32::LIGHT_GRAY))
                    .inner_margin(egui::Margin::symmetric(24, 24))
                    .show(ui, |ui| {
                        let w = ui.available_width().min(max_width);
                        ui.set_width(w);
                        inner(ui);
                    });
            });
        });
}
