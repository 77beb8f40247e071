use iced::widget::container::Style;
use iced::widget::{container, text};
use iced::{Border, Color, Theme};

pub fn title_text(theme: &Theme) -> text::Style {
    let palette = theme.extended_palette();

    text::Style {
        color: Some(palette.background.base.text),
    }
}

pub fn dimmed_text(theme: &Theme) -> text::Style {
    let palette = theme.extended_palette();

    text::Style {
        color: Some(palette.background.strong.color),
    }
}

/// Day-change text, colored by direction.
pub fn change_text(theme: &Theme, change_pct: f32) -> text::Style {
    let palette = theme.extended_palette();

    let color = if change_pct > 0.0 {
        palette.success.base.color
    } else if change_pct < 0.0 {
        palette.danger.base.color
    } else {
        palette.background.base.text
    };

    text::Style { color: Some(color) }
}

pub fn tooltip(theme: &Theme) -> Style {
    let palette = theme.extended_palette();

    Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            width: 1.0,
            color: palette.background.strong.color,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

pub fn card_container(theme: &Theme, is_hovered: bool) -> Style {
    let palette = theme.extended_palette();

    Style {
        background: Some(palette.background.weakest.color.into()),
        border: Border {
            width: 1.0,
            color: if is_hovered {
                palette.primary.weak.color
            } else {
                palette.background.weak.color
            },
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

pub fn chart_pane(theme: &Theme) -> Style {
    let palette = theme.extended_palette();

    Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            width: 1.0,
            color: palette.background.strong.color,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

pub fn dashboard_modal(theme: &Theme) -> Style {
    let palette = theme.extended_palette();

    Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            width: 1.0,
            color: palette.primary.weak.color,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

/// Tag-like chip for the hot concept inside the detail panel.
pub fn concept_chip(theme: &Theme) -> Style {
    let palette = theme.extended_palette();

    Style {
        background: Some(palette.primary.weak.color.into()),
        text_color: Some(palette.primary.weak.text),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub mod button {
    use iced::widget::button::{Status, Style};
    use iced::{Border, Color, Theme};

    fn base() -> Style {
        Style {
            background: None,
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn transparent(theme: &Theme, status: Status) -> Style {
        let palette = theme.extended_palette();

        match status {
            Status::Hovered | Status::Pressed => Style {
                background: Some(palette.background.weak.color.into()),
                text_color: palette.background.base.text,
                ..base()
            },
            _ => Style {
                text_color: palette.background.base.text,
                ..base()
            },
        }
    }

    /// The flame affordance. Disabled (gate closed) renders in a muted color
    /// and never gets a press handler.
    pub fn flame(theme: &Theme, status: Status, can_open: bool) -> Style {
        let palette = theme.extended_palette();

        if !can_open {
            return Style {
                text_color: palette.background.strong.color,
                ..base()
            };
        }

        match status {
            Status::Hovered | Status::Pressed => Style {
                background: Some(palette.danger.weak.color.into()),
                text_color: palette.danger.base.color,
                ..base()
            },
            _ => Style {
                text_color: palette.danger.base.color,
                ..base()
            },
        }
    }

    /// The favorites star. With `paint` off the control still occupies its
    /// slot but draws nothing.
    pub fn star(theme: &Theme, status: Status, is_favorited: bool, paint: bool) -> Style {
        let palette = theme.extended_palette();

        if !paint {
            return Style {
                text_color: Color::TRANSPARENT,
                ..base()
            };
        }

        let color = if is_favorited {
            palette.warning.base.color
        } else {
            palette.background.strong.color
        };

        match status {
            Status::Hovered | Status::Pressed => Style {
                background: Some(palette.background.weak.color.into()),
                text_color: palette.warning.base.color,
                ..base()
            },
            _ => Style {
                text_color: color,
                ..base()
            },
        }
    }

    pub fn bordered_toggle(theme: &Theme, status: Status, is_active: bool) -> Style {
        let palette = theme.extended_palette();

        let background = if is_active {
            Some(palette.primary.weak.color.into())
        } else {
            None
        };

        match status {
            Status::Hovered | Status::Pressed => Style {
                background: Some(palette.background.strong.color.into()),
                text_color: palette.background.base.text,
                border: Border {
                    width: 1.0,
                    color: palette.primary.weak.color,
                    radius: 4.0.into(),
                },
                ..Default::default()
            },
            _ => Style {
                background,
                text_color: if is_active {
                    palette.primary.weak.text
                } else {
                    palette.background.base.text
                },
                border: Border {
                    width: 1.0,
                    color: palette.background.strong.color,
                    radius: 4.0.into(),
                },
                ..Default::default()
            },
        }
    }
}

pub fn ruler(theme: &Theme) -> iced::widget::rule::Style {
    let palette = theme.extended_palette();

    iced::widget::rule::Style {
        color: palette.background.strong.color.scale_alpha(0.25),
        radius: iced::border::Radius::default(),
        fill_mode: iced::widget::rule::FillMode::Full,
        snap: true,
    }
}

pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    Style {
        background: Some(
            Color {
                a: 0.8,
                ..Color::BLACK
            }
            .into(),
        ),
        ..Default::default()
    }
}
