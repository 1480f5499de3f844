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

use crate::core::ColorTag;

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::twilight()
    }
}

impl Theme {
    pub fn twilight() -> Self {
        Theme { dark: ThemeDetails::slate_night(), light: ThemeDetails::twilight_light() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).purple).strong()
    }

    pub fn title(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).foreground).strong()
    }

    pub fn comment(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).comment
    }

    pub fn orange(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).orange
    }

    pub fn yellow(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).yellow
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn blue(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).blue
    }

    pub fn purple(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).purple
    }

    pub fn pink(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).pink
    }

    pub fn card_fill(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).background_light
    }

    pub fn particle(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).blue.gamma_multiply(0.2)
    }

    /// Card accent for a subject's color tag.
    pub fn tag_color(&self, ctx: &egui::Context, tag: ColorTag) -> Color32 {
        let details = self.details(ctx);
        match tag {
            ColorTag::Blue => details.blue,
            ColorTag::Purple => details.purple,
            ColorTag::Pink => details.pink,
            ColorTag::Indigo => details.indigo,
            ColorTag::Green => details.green,
        }
    }
}

#[derive(Clone)]
pub struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    yellow: Color32,
    green: Color32,
    blue: Color32,
    purple: Color32,
    indigo: Color32,
    pink: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl ThemeDetails {
    fn slate_night() -> Self {
        Self {
            background: Color32::from_rgb(17, 24, 39),
            foreground: Color32::from_rgb(243, 244, 246),
            selection: Color32::from_rgb(55, 65, 81),
            comment: Color32::from_rgb(156, 163, 175),
            red: Color32::from_rgb(248, 113, 113),
            orange: Color32::from_rgb(251, 146, 60),
            yellow: Color32::from_rgb(250, 204, 21),
            green: Color32::from_rgb(74, 222, 128),
            blue: Color32::from_rgb(96, 165, 250),
            purple: Color32::from_rgb(192, 132, 252),
            indigo: Color32::from_rgb(129, 140, 248),
            pink: Color32::from_rgb(244, 114, 182),
            background_darker: Color32::from_rgb(10, 14, 24),
            background_dark: Color32::from_rgb(17, 24, 39),
            background_light: Color32::from_rgb(31, 41, 55),
            background_lighter: Color32::from_rgb(55, 65, 81),
        }
    }

    fn twilight_light() -> Self {
        Self {
            background: Color32::from_rgb(237, 233, 254),
            foreground: Color32::from_rgb(30, 27, 75),
            selection: Color32::from_rgb(221, 214, 254),
            comment: Color32::from_rgb(107, 114, 128),
            red: Color32::from_rgb(220, 38, 38),
            orange: Color32::from_rgb(234, 88, 12),
            yellow: Color32::from_rgb(202, 138, 4),
            green: Color32::from_rgb(22, 163, 74),
            blue: Color32::from_rgb(59, 130, 246),
            purple: Color32::from_rgb(147, 51, 234),
            indigo: Color32::from_rgb(99, 102, 241),
            pink: Color32::from_rgb(236, 72, 153),
            background_darker: Color32::from_rgb(221, 214, 254),
            background_dark: Color32::from_rgb(233, 228, 255),
            background_light: Color32::from_rgb(245, 243, 255),
            background_lighter: Color32::from_rgb(255, 255, 255),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

pub fn apply_dark_mode(ctx: &egui::Context, dark_mode: bool) {
    let (theme, preference) = if dark_mode {
        (egui::Theme::Dark, egui::ThemePreference::Dark)
    } else {
        (egui::Theme::Light, egui::ThemePreference::Light)
    };
    if ctx.theme() != theme {
        ctx.set_theme(preference);
    }
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
                    bg_fill: theme.background,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke {
                        color: theme.background_lighter,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: theme.background_light,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke {
                        color: theme.background_dark,
                        ..default.widgets.inactive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.selection,
                    bg_stroke: Stroke { color: theme.purple, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.hovered.fg_stroke
                    },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.background_light,
                    bg_stroke: Stroke { color: theme.pink, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.active.fg_stroke
                    },
                    ..default.widgets.active
                },
                ..default.widgets
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.blue,
            faint_bg_color: theme.background_dark,
            extreme_bg_color: theme.background_darker,
            error_fg_color: theme.red,
            warn_fg_color: theme.orange,
            window_shadow: Shadow { color: theme.background_darker, ..default.window_shadow },
            window_fill: theme.background_light,
            window_stroke: Stroke { color: theme.selection, ..default.window_stroke },
            panel_fill: theme.background,
            ..default
        },
    );

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
    });
}
