//! UI domain: dialogue box with typewriter text.

use bevy::prelude::*;

use crate::dialogue::DialogueState;
use crate::sequencer::{Timeline, TimelineStatus};

const BOX_HIDDEN_OFFSET: f32 = -140.0;
const BOX_SHOWN_OFFSET: f32 = 24.0;

/// Marker for the dialogue box root
#[derive(Component)]
pub struct DialogueBoxUI;

/// Marker for the revealed text
#[derive(Component)]
pub struct DialogueText;

/// Slide channel for the panel's bottom offset.
#[derive(Resource, Debug, Default)]
pub struct DialogueSlide {
    pub timeline: Option<Timeline>,
    pub was_active: bool,
}

pub(crate) fn spawn_dialogue_box(mut commands: Commands) {
    commands
        .spawn((
            DialogueBoxUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(12.0),
                right: Val::Percent(12.0),
                bottom: Val::Px(BOX_HIDDEN_OFFSET),
                min_height: Val::Px(96.0),
                padding: UiRect::all(Val::Px(16.0)),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.06, 0.06, 0.1, 0.94)),
            BorderColor::all(Color::srgb(0.45, 0.42, 0.3)),
            Visibility::Hidden,
            ZIndex(700),
        ))
        .with_child((
            DialogueText,
            Text::new(""),
            TextFont {
                font_size: 18.0,
                ..default()
            },
            TextColor(Color::srgb(0.92, 0.9, 0.85)),
        ));
}

/// Slide the panel in when a conversation opens and drop it out when the
/// conversation closes. Runs on the real clock; dialogue freezes game
/// time.
pub(crate) fn animate_dialogue_box(
    real_time: Res<Time<Real>>,
    dialogue: Res<DialogueState>,
    mut slide: ResMut<DialogueSlide>,
    mut query: Query<(&mut Node, &mut Visibility), With<DialogueBoxUI>>,
) {
    let active = dialogue.has_active_dialogue();

    if active && !slide.was_active {
        slide.timeline =
            Some(Timeline::tween(BOX_HIDDEN_OFFSET, BOX_SHOWN_OFFSET, 0.25).unscaled());
    }
    slide.was_active = active;

    let mut offset = if active {
        BOX_SHOWN_OFFSET
    } else {
        BOX_HIDDEN_OFFSET
    };
    if let Some(timeline) = slide.timeline.as_mut() {
        let status = timeline.advance(real_time.delta_secs());
        offset = timeline.value();
        if status == TimelineStatus::Finished {
            slide.timeline = None;
        }
    }

    for (mut node, mut visibility) in &mut query {
        node.bottom = Val::Px(offset);
        *visibility = if active {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

pub(crate) fn update_dialogue_text(
    dialogue: Res<DialogueState>,
    mut query: Query<&mut Text, With<DialogueText>>,
) {
    let Some(active) = dialogue.active.as_ref() else {
        return;
    };
    for mut text in &mut query {
        **text = active.typewriter.visible_text();
    }
}
