//! UI domain: full-screen fade overlay.

use bevy::prelude::*;

use crate::sequencer::{Timeline, TimelineStatus};

/// Marker for the fade overlay node
#[derive(Component)]
pub struct ScreenFadeOverlay;

/// Fade channel. Death choreography and scene transitions drive `alpha`
/// through timelines on the real clock.
#[derive(Resource, Debug, Default)]
pub struct ScreenFade {
    pub alpha: f32,
    pub timeline: Option<Timeline>,
}

impl ScreenFade {
    /// Fade from the current alpha to `target`. Replaces any fade already
    /// in flight.
    pub fn start(&mut self, target: f32, duration: f32) {
        if let Some(timeline) = self.timeline.as_mut() {
            timeline.cancel();
        }
        self.timeline = Some(Timeline::tween(self.alpha, target, duration).unscaled());
    }
}

pub(crate) fn spawn_fade_overlay(mut commands: Commands) {
    commands.spawn((
        ScreenFadeOverlay,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            top: Val::Px(0.0),
            bottom: Val::Px(0.0),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.0)),
        ZIndex(900),
    ));
}

pub(crate) fn tick_screen_fade(
    real_time: Res<Time<Real>>,
    mut fade: ResMut<ScreenFade>,
    mut query: Query<&mut BackgroundColor, With<ScreenFadeOverlay>>,
) {
    if let Some(timeline) = fade.timeline.as_mut() {
        let status = timeline.advance(real_time.delta_secs());
        fade.alpha = timeline.value();
        if status == TimelineStatus::Finished {
            fade.timeline = None;
        }
    }

    for mut background in &mut query {
        background.0 = Color::srgba(0.0, 0.0, 0.0, fade.alpha);
    }
}
