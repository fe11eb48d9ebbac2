use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::paper()
    }
}

impl Theme {
    pub fn paper() -> Self {
        Theme { dark: ThemeDetails::dracula(), light: ThemeDetails::paper() }
    }

    pub fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).heading().color(self.details(ctx).foreground)
    }

    pub fn primary(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).primary
    }

    pub fn on_primary(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).on_primary
    }

    pub fn surface(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).surface
    }

    pub fn foreground(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).foreground
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).muted
    }

    pub fn divider(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).divider
    }
}

#[derive(Clone)]
pub struct ThemeDetails {
    background: Color32,
    surface: Color32,
    foreground: Color32,
    muted: Color32,
    divider: Color32,
    selection: Color32,
    primary: Color32,
    on_primary: Color32,
    red: Color32,
    orange: Color32,
}

impl ThemeDetails {
    fn paper() -> Self {
        Self {
            background: Color32::from_rgb(0xf5, 0xf5, 0xf5),
            surface: Color32::WHITE,
            foreground: Color32::from_rgb(0x21, 0x21, 0x21),
            muted: Color32::from_rgb(0x75, 0x75, 0x75),
            divider: Color32::from_rgb(0xdd, 0xdd, 0xdd),
            selection: Color32::from_rgb(0xbb, 0xde, 0xfb),
            primary: Color32::from_rgb(0x19, 0x76, 0xd2),
            on_primary: Color32::WHITE,
            red: Color32::from_rgb(0xd3, 0x2f, 0x2f),
            orange: Color32::from_rgb(0xed, 0x6c, 0x02),
        }
    }

    //Colors from:
    //https://github.com/ShabbirHasan1/egui_dracula/blob/master/src/lib.rs
    fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            surface: Color32::from_rgb(52, 54, 66),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            muted: Color32::from_rgb(0x62, 0x72, 0xa4),
            divider: Color32::from_rgb(66, 69, 80),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            primary: Color32::from_rgb(189, 147, 249),
            on_primary: Color32::from_rgb(25, 26, 33),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: theme.surface,
                    weak_bg_fill: theme.surface,
                    bg_stroke: Stroke { color: theme.divider, ..default.widgets.noninteractive.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: theme.primary,
                    weak_bg_fill: theme.primary,
                    fg_stroke: Stroke { color: theme.on_primary, ..default.widgets.inactive.fg_stroke },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: theme.primary.gamma_multiply(0.85),
                    weak_bg_fill: theme.primary.gamma_multiply(0.85),
                    bg_stroke: Stroke { color: theme.primary, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke { color: theme.on_primary, ..default.widgets.hovered.fg_stroke },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: theme.primary.gamma_multiply(0.7),
                    weak_bg_fill: theme.primary.gamma_multiply(0.7),
                    bg_stroke: Stroke { color: theme.primary, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke { color: theme.on_primary, ..default.widgets.active.fg_stroke },
                    ..default.widgets.active
                },
                ..default.widgets
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            error_fg_color: theme.red,
            warn_fg_color: theme.orange,
            window_fill: theme.surface,
            panel_fill: theme.background,
            popup_shadow: Shadow { color: Color32::from_black_alpha(40), ..default.popup_shadow },
            ..default
        },
    );
}
