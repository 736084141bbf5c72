//! UI domain: ability-select overlay.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::abilities::{AbilityKind, AbilityMenu, AbilityState, AbilityUnlockedEvent};

/// Marker for the ability menu root
#[derive(Component)]
pub struct AbilityMenuUI;

/// Rebuild the overlay whenever the menu state or unlock set changes.
/// Despawn-and-respawn keeps the slot styling trivially in sync.
pub(crate) fn sync_ability_menu(
    mut commands: Commands,
    menu: Res<AbilityMenu>,
    state: Res<AbilityState>,
    mut unlocked_events: MessageReader<AbilityUnlockedEvent>,
    existing: Query<Entity, With<AbilityMenuUI>>,
) {
    let unlocks_changed = unlocked_events.read().count() > 0;
    if !menu.is_changed() && !unlocks_changed {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }
    if menu.open {
        spawn_ability_menu(&mut commands, &menu, &state);
    }
}

fn spawn_ability_menu(commands: &mut Commands, menu: &AbilityMenu, state: &AbilityState) {
    let panel_color = Color::srgba(0.08, 0.08, 0.14, 0.92);
    let locked_color = Color::srgb(0.18, 0.18, 0.22);
    let unlocked_color = Color::srgb(0.3, 0.32, 0.45);
    let cursor_color = Color::srgb(0.75, 0.65, 0.25);

    let hovered = state.unlocked().get(menu.cursor).copied();

    commands
        .spawn((
            AbilityMenuUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            ZIndex(800),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Row,
                        column_gap: Val::Px(14.0),
                        padding: UiRect::all(Val::Px(18.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(panel_color),
                    BorderColor::all(Color::srgb(0.4, 0.35, 0.2)),
                ))
                .with_children(|row| {
                    for kind in AbilityKind::ALL {
                        let unlocked = state.is_unlocked(kind);
                        let is_cursor = hovered == Some(kind);

                        let slot_color = if is_cursor {
                            cursor_color
                        } else if unlocked {
                            unlocked_color
                        } else {
                            locked_color
                        };
                        let text_color = if unlocked {
                            Color::srgb(0.95, 0.95, 0.95)
                        } else {
                            Color::srgb(0.45, 0.45, 0.5)
                        };
                        let label = if unlocked { kind.label() } else { "???" };

                        row.spawn((
                            Node {
                                padding: UiRect::axes(Val::Px(16.0), Val::Px(10.0)),
                                border: UiRect::all(Val::Px(1.0)),
                                ..default()
                            },
                            BackgroundColor(slot_color),
                            BorderColor::all(Color::srgb(0.35, 0.35, 0.45)),
                        ))
                        .with_child((
                            Text::new(label),
                            TextFont {
                                font_size: 16.0,
                                ..default()
                            },
                            TextColor(text_color),
                        ));
                    }
                });
        });
}
