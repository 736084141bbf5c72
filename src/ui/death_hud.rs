//! UI domain: death overlay and terminal game-over screen.

use bevy::prelude::*;
use rand::Rng;

use crate::currency::Wallet;

const EPITAPHS: [&str; 4] = [
    "The ground remembers you.",
    "Gravity always collects.",
    "Pull yourself together.",
    "Another checkpoint awaits.",
];

/// Marker for the death overlay root
#[derive(Component)]
pub struct DeathHudUI;

/// Marker for the coin counter on the death overlay
#[derive(Component)]
pub struct DeathHudCoinText;

/// Marker for the epitaph line
#[derive(Component)]
pub struct DeathHudEpitaph;

/// Death overlay state, flipped by the respawn coordinator.
#[derive(Resource, Debug)]
pub struct DeathHud {
    pub visible: bool,
    pub epitaph: &'static str,
}

impl Default for DeathHud {
    fn default() -> Self {
        Self {
            visible: false,
            epitaph: EPITAPHS[0],
        }
    }
}

impl DeathHud {
    pub fn show_random(&mut self) {
        self.epitaph = EPITAPHS[rand::rng().random_range(0..EPITAPHS.len())];
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

pub(crate) fn spawn_death_hud(mut commands: Commands) {
    commands
        .spawn((
            DeathHudUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(24.0),
                ..default()
            },
            Visibility::Hidden,
            // Above the fade overlay so the counter reads through the black
            ZIndex(950),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("YOU FELL APART"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.15, 0.15)),
            ));

            parent.spawn((
                DeathHudEpitaph,
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ));

            // Coin row
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(10.0),
                    margin: UiRect::top(Val::Px(20.0)),
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((
                        Node {
                            width: Val::Px(20.0),
                            height: Val::Px(20.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.9, 0.75, 0.2)),
                    ));
                    row.spawn((
                        DeathHudCoinText,
                        Text::new("0"),
                        TextFont {
                            font_size: 28.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.9, 0.85, 0.5)),
                    ));
                });
        });
}

pub(crate) fn apply_death_hud_state(
    hud: Res<DeathHud>,
    mut root_query: Query<&mut Visibility, With<DeathHudUI>>,
    mut epitaph_query: Query<&mut Text, With<DeathHudEpitaph>>,
) {
    if !hud.is_changed() {
        return;
    }
    for mut visibility in &mut root_query {
        *visibility = if hud.visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
    for mut text in &mut epitaph_query {
        **text = hud.epitaph.to_string();
    }
}

/// The death counter reads the same animated display value as the normal
/// HUD, so the count-down plays out on screen.
pub(crate) fn update_death_hud_coins(
    wallet: Res<Wallet>,
    mut query: Query<&mut Text, With<DeathHudCoinText>>,
) {
    if wallet.is_changed() {
        for mut text in &mut query {
            **text = format!("{}", wallet.displayed);
        }
    }
}

/// Terminal screen. Spawned once on entering game over; nothing restores
/// after this.
pub(crate) fn spawn_game_over_screen(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(16.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 1.0)),
            ZIndex(1000),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("GAME OVER"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.2, 0.2)),
            ));
            parent.spawn((
                Text::new("Nothing left to lose."),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.5, 0.5, 0.5)),
            ));
        });
}
