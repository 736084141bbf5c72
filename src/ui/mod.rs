//! UI domain: HUD elements, overlays, and death presentation.

mod ability_menu;
mod death_hud;
mod dialogue_box;
mod fade;
mod hud_wallet;

pub use death_hud::DeathHud;
pub use fade::ScreenFade;
pub use hud_wallet::CoinHudState;

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::ability_menu::sync_ability_menu;
use crate::ui::death_hud::{
    apply_death_hud_state, spawn_death_hud, spawn_game_over_screen, update_death_hud_coins,
};
use crate::ui::dialogue_box::{
    DialogueSlide, animate_dialogue_box, spawn_dialogue_box, update_dialogue_text,
};
use crate::ui::fade::{spawn_fade_overlay, tick_screen_fade};
use crate::ui::hud_wallet::{
    apply_coin_hud_state, apply_coin_icon_bounce, spawn_coin_display_ui, update_coin_display,
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenFade>()
            .init_resource::<DeathHud>()
            .init_resource::<CoinHudState>()
            .init_resource::<DialogueSlide>()
            .add_systems(
                Startup,
                (
                    spawn_coin_display_ui,
                    spawn_death_hud,
                    spawn_dialogue_box,
                    spawn_fade_overlay,
                ),
            )
            .add_systems(
                Update,
                (
                    update_coin_display,
                    apply_coin_hud_state,
                    apply_coin_icon_bounce,
                    apply_death_hud_state,
                    update_death_hud_coins,
                    sync_ability_menu,
                    animate_dialogue_box,
                    update_dialogue_text,
                    tick_screen_fade,
                ),
            )
            .add_systems(OnEnter(GameState::GameOver), spawn_game_over_screen);
    }
}
