//=========================================================================
// Settings Scene
//=========================================================================
//
// Editor over the live settings document.
//
// Input:
//   ArrowUp / ArrowDown    → move cursor between settings (clamped)
//   ArrowLeft / ArrowRight → cycle the cursor setting's choice (wraps)
//   Enter                  → save, recreate display, back to Menu
//   Escape                 → back to Menu without saving
//
// Edits go straight into the Player's `ConfigStore`; there is no copy
// to commit or discard.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use super::{Scene, SceneContext, SceneKind};
use crate::core::config::ConfigStore;
use crate::core::error::GameError;
use crate::core::input::KeyCode;
use crate::core::surface::{Color, Surface};

/// Static hint rendered under the settings list.
pub const SAVE_HINT: &str = "To save settings press Enter";

const TEXT_SIZE: u32 = 34;
const ROW_HEIGHT: i32 = 25;
const LEFT_MARGIN: i32 = 10;
const HINT_Y: i32 = 300;

//=== SettingsScene =======================================================

#[derive(Debug, Default)]
pub struct SettingsScene {
    cursor: usize,
}

impl SettingsScene {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Index of the highlighted setting.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Row text for one setting.
    pub fn row_text(name: &str, choice: &str) -> String {
        format!("{name}: << {choice} >>")
    }
}

impl Scene for SettingsScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Settings
    }

    fn on_key_down(&mut self, key: KeyCode, ctx: &mut SceneContext<'_>) -> Result<(), GameError> {
        let len = ctx.config().len();

        match key {
            KeyCode::Escape => ctx.switch_to(SceneKind::Menu),
            KeyCode::ArrowUp => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::ArrowDown if len > 0 => self.cursor = (self.cursor + 1).min(len - 1),
            KeyCode::ArrowLeft => {
                if let Some(setting) = ctx.config_mut().settings_mut().get_mut(self.cursor) {
                    setting.select_previous();
                }
            }
            KeyCode::ArrowRight => {
                if let Some(setting) = ctx.config_mut().settings_mut().get_mut(self.cursor) {
                    setting.select_next();
                }
            }
            KeyCode::Enter => {
                // The display is re-created from this choice right after saving.
                ctx.config().resolution()?;
                ctx.config().save()?;
                info!("Settings saved to {}", ctx.config().path().display());
                ctx.recreate_display();
                ctx.switch_to(SceneKind::Menu);
            }
            _ => {}
        }
        Ok(())
    }

    fn draw(&mut self, surface: &mut Surface, config: &ConfigStore) -> Result<(), GameError> {
        surface.fill(Color::BLACK);

        for (i, setting) in config.settings().iter().enumerate() {
            let color = if i == self.cursor {
                Color::SILVER
            } else {
                Color::GRAY
            };
            let text = Self::row_text(setting.name(), setting.current());
            surface.draw_text(&text, LEFT_MARGIN, i as i32 * ROW_HEIGHT, TEXT_SIZE, color);
        }

        surface.draw_text(SAVE_HINT, LEFT_MARGIN, HINT_Y, TEXT_SIZE, Color::GRAY);
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{ConfigError, Setting, SCREEN_SIZE};
    use crate::core::scene::tests::{press, sample_config};
    use crate::core::scene::{SceneRequest, TransitionQueue};
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn choice_of(config: &ConfigStore, name: &str) -> usize {
        config.get(name).unwrap().current_choice()
    }

    //--- Cursor -----------------------------------------------------------

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut config = sample_config();
        let mut scene = SettingsScene::new();

        press(&mut scene, &mut config, KeyCode::ArrowUp);
        assert_eq!(scene.cursor(), 0);

        for _ in 0..5 {
            press(&mut scene, &mut config, KeyCode::ArrowDown);
        }
        assert_eq!(scene.cursor(), 1);
    }

    #[test]
    fn cursor_on_empty_document_stays_put() {
        let mut config = ConfigStore::default();
        let mut scene = SettingsScene::new();

        for key in [KeyCode::ArrowDown, KeyCode::ArrowLeft, KeyCode::ArrowRight, KeyCode::ArrowUp] {
            assert!(press(&mut scene, &mut config, key).is_empty());
        }
        assert_eq!(scene.cursor(), 0);
    }

    proptest! {
        #[test]
        fn cursor_stays_in_range(moves in prop::collection::vec(any::<bool>(), 0..64)) {
            let mut config = sample_config();
            let mut scene = SettingsScene::new();
            for down in moves {
                let key = if down { KeyCode::ArrowDown } else { KeyCode::ArrowUp };
                press(&mut scene, &mut config, key);
                prop_assert!(scene.cursor() < config.len());
            }
        }

        #[test]
        fn left_presses_wrap_cyclically(n in 0usize..40) {
            let mut config = sample_config();
            let mut scene = SettingsScene::new();
            press(&mut scene, &mut config, KeyCode::ArrowDown);

            for _ in 0..n {
                press(&mut scene, &mut config, KeyCode::ArrowLeft);
            }

            let expected = (1 - n as i64).rem_euclid(3) as usize;
            prop_assert_eq!(choice_of(&config, "difficulty"), expected);
        }
    }

    //--- Choice Cycling ---------------------------------------------------

    #[test]
    fn left_wraps_first_choice_to_last() {
        let mut config = sample_config();
        let mut scene = SettingsScene::new();

        press(&mut scene, &mut config, KeyCode::ArrowLeft);
        assert_eq!(choice_of(&config, SCREEN_SIZE), 1);
    }

    #[test]
    fn right_wraps_last_choice_to_first() {
        let mut config = sample_config();
        let mut scene = SettingsScene::new();

        press(&mut scene, &mut config, KeyCode::ArrowRight);
        assert_eq!(choice_of(&config, SCREEN_SIZE), 1);
        press(&mut scene, &mut config, KeyCode::ArrowRight);
        assert_eq!(choice_of(&config, SCREEN_SIZE), 0);
    }

    #[test]
    fn cycling_edits_only_the_cursor_setting() {
        let mut config = sample_config();
        let mut scene = SettingsScene::new();

        press(&mut scene, &mut config, KeyCode::ArrowDown);
        press(&mut scene, &mut config, KeyCode::ArrowRight);

        assert_eq!(choice_of(&config, "difficulty"), 2);
        assert_eq!(choice_of(&config, SCREEN_SIZE), 0);
    }

    //--- Transitions ------------------------------------------------------

    #[test]
    fn escape_returns_to_menu_without_saving() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cfg.json");
        let mut config = ConfigStore::with_settings(&path, sample_config().settings().to_vec());
        let mut scene = SettingsScene::new();

        let requests = press(&mut scene, &mut config, KeyCode::Escape);

        assert_eq!(requests, vec![SceneRequest::Switch(SceneKind::Menu)]);
        assert!(!path.exists(), "escape must not write the config");
    }

    #[test]
    fn enter_saves_then_recreates_display_then_returns_to_menu() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cfg.json");
        let mut config = ConfigStore::with_settings(&path, sample_config().settings().to_vec());
        let mut scene = SettingsScene::new();

        press(&mut scene, &mut config, KeyCode::ArrowRight);
        let requests = press(&mut scene, &mut config, KeyCode::Enter);

        assert_eq!(
            requests,
            vec![SceneRequest::RecreateDisplay, SceneRequest::Switch(SceneKind::Menu)]
        );
        let saved = ConfigStore::load(&path).unwrap();
        assert_eq!(saved.get(SCREEN_SIZE).unwrap().current(), "1280x720");
    }

    #[test]
    fn enter_propagates_save_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("cfg.json");
        let mut config = ConfigStore::with_settings(path, sample_config().settings().to_vec());
        let mut scene = SettingsScene::new();

        let mut queue = TransitionQueue::new();
        let mut ctx = SceneContext::new(&mut config, &mut queue);
        let err = scene.on_key_down(KeyCode::Enter, &mut ctx).unwrap_err();

        assert!(matches!(err, GameError::Config(ConfigError::Save { .. })));
        assert!(queue.is_empty(), "no transition after a failed save");
    }

    #[test]
    fn enter_rejects_oversized_resolution_without_saving() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cfg.json");
        let huge = Setting::new(SCREEN_SIZE, vec!["800x600".into(), "100000x100000".into()], 0).unwrap();
        let mut config = ConfigStore::with_settings(&path, vec![huge]);
        let mut scene = SettingsScene::new();
        press(&mut scene, &mut config, KeyCode::ArrowRight);

        let mut queue = TransitionQueue::new();
        let mut ctx = SceneContext::new(&mut config, &mut queue);
        let err = scene.on_key_down(KeyCode::Enter, &mut ctx).unwrap_err();

        assert!(matches!(err, GameError::Config(ConfigError::InvalidResolution(_))));
        assert!(queue.is_empty());
        assert!(!path.exists(), "an unusable resolution must not be persisted");
    }

    //--- Drawing ----------------------------------------------------------

    #[test]
    fn row_text_format() {
        assert_eq!(
            SettingsScene::row_text("screen_size", "800x600"),
            "screen_size: << 800x600 >>"
        );
    }

    #[test]
    fn draw_highlights_cursor_row() {
        let mut config = sample_config();
        let mut scene = SettingsScene::new();
        press(&mut scene, &mut config, KeyCode::ArrowDown);

        let mut surface = Surface::new(800, 600);
        scene.draw(&mut surface, &config).unwrap();

        // Rows are taller than their spacing; only test the band each row
        // has to itself.
        let band_has = |ys: std::ops::Range<u32>, color: Color| {
            ys.clone()
                .any(|y| (0..surface.width()).any(|x| surface.pixel(x, y) == Some(color)))
        };
        assert!(band_has(0..25, Color::GRAY) && !band_has(0..25, Color::SILVER));
        assert!(band_has(34..59, Color::SILVER) && !band_has(34..59, Color::GRAY));
    }
}
