//! UI domain: coin display HUD element.

use bevy::prelude::*;

use crate::currency::{CoinHudBounce, Wallet};

const HUD_PADDING: f32 = 16.0;

/// Marker for the coin display UI container
#[derive(Component)]
pub struct CoinDisplayUI;

/// Marker for the coin icon, which bounces on pickups and penalties
#[derive(Component)]
pub struct CoinIcon;

/// Marker for the coin amount text
#[derive(Component)]
pub struct CoinAmountText;

/// Whether the normal coin HUD is on screen. The death flow swaps it out
/// for its own counter and restores it afterwards.
#[derive(Resource, Debug)]
pub struct CoinHudState {
    pub visible: bool,
}

impl Default for CoinHudState {
    fn default() -> Self {
        Self { visible: true }
    }
}

pub(crate) fn spawn_coin_display_ui(mut commands: Commands) {
    commands
        .spawn((
            CoinDisplayUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            // Coin icon (gold square)
            parent.spawn((
                CoinIcon,
                Node {
                    width: Val::Px(16.0),
                    height: Val::Px(16.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.9, 0.75, 0.2)),
            ));

            // Coin amount text
            parent.spawn((
                CoinAmountText,
                Text::new("0"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.85, 0.5)),
            ));
        });
}

/// Mirror the animated display value, not the authoritative total; the
/// counter tween owns convergence between the two.
pub(crate) fn update_coin_display(
    wallet: Res<Wallet>,
    mut query: Query<&mut Text, With<CoinAmountText>>,
) {
    if wallet.is_changed() {
        for mut text in &mut query {
            **text = format!("{}", wallet.displayed);
        }
    }
}

pub(crate) fn apply_coin_hud_state(
    state: Res<CoinHudState>,
    mut query: Query<&mut Visibility, With<CoinDisplayUI>>,
) {
    for mut visibility in &mut query {
        *visibility = if state.visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

/// Nudge the icon with the bounce channel's current offset.
pub(crate) fn apply_coin_icon_bounce(
    bounce: Res<CoinHudBounce>,
    mut query: Query<&mut Node, With<CoinIcon>>,
) {
    for mut node in &mut query {
        node.top = Val::Px(bounce.offset());
    }
}
