//! Absolute-positioned UI text in playfield pixels (top-left origin, like UI space).

use bevy::prelude::*;

pub const FONT_TITLE: f32 = 52.0;
pub const FONT_LARGE: f32 = 36.0;
pub const FONT_BODY: f32 = 26.0;

/// Text whose top-left corner sits at `top_left`.
pub fn text_at(text: impl Into<String>, size: f32, color: Color, top_left: Vec2) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(top_left.x),
            top: Val::Px(top_left.y),
            ..default()
        },
    )
}

/// Text horizontally centred on the window with its line centred on `center_y`.
pub fn centered_text(text: impl Into<String>, size: f32, color: Color, center_y: f32) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
        TextLayout::new_with_justify(JustifyText::Center),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            width: Val::Percent(100.0),
            top: Val::Px(center_y - size * 0.6),
            ..default()
        },
    )
}

/// Full-window node used as the parent of an overlay's widgets.
pub fn overlay_root(background: Color) -> impl Bundle {
    (
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        },
        BackgroundColor(background),
    )
}

/// Absolute rectangle in UI pixels.
pub fn rect_node(x: f32, y: f32, w: f32, h: f32) -> Node {
    Node {
        position_type: PositionType::Absolute,
        left: Val::Px(x),
        top: Val::Px(y),
        width: Val::Px(w),
        height: Val::Px(h),
        ..default()
    }
}
