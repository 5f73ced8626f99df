//! Game definition: reels, paytables and free game rules

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{SlotError, SlotResult};
use crate::free_game::{FreeGameConfig, FreeGameOutcome, FreeGameRun};
use crate::paytable::{LINE_COUNT, Paytable};
use crate::strips::{BASE_GAME_STRIPS, FREE_GAME_STRIPS};
use crate::symbols::ReelSet;
use crate::window::Window;

/// Immutable game data shared read-only by every worker
#[derive(Debug, Clone, PartialEq)]
pub struct SlotGame {
    pub base_reels: ReelSet,
    pub free_reels: ReelSet,
    pub base_paytable: Paytable,
    pub free_paytable: Paytable,
    pub free_game: FreeGameConfig,
}

impl SlotGame {
    /// The built-in game
    pub fn standard() -> SlotResult<Self> {
        GameDefinition::standard().build()
    }

    /// Paylines evaluated per spin
    pub fn line_count(&self) -> usize {
        LINE_COUNT
    }

    /// Total stake of one spin
    pub fn spin_bet(&self, bet_per_line: f64) -> f64 {
        LINE_COUNT as f64 * bet_per_line
    }

    /// Draw a base game window into `window` and return its staked line win
    #[inline]
    pub fn base_spin<R: Rng + ?Sized>(&self, rng: &mut R, window: &mut Window, bet_per_line: f64) -> f64 {
        self.base_reels.spin_into(rng, window);
        self.base_paytable.evaluate_lines(window) * bet_per_line
    }

    /// Play a full free game run; the result is not yet multiplied by the
    /// trigger tier
    #[inline]
    pub fn play_free_game<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        window: &mut Window,
        bet_per_line: f64,
    ) -> FreeGameOutcome {
        FreeGameRun::play(
            self.free_game,
            &self.free_reels,
            &self.free_paytable,
            bet_per_line,
            rng,
            window,
        )
    }
}

/// Serializable reel definition in token form
///
/// Paytables and paylines are fixed; only the strips and free game
/// parameters can be supplied externally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDefinition {
    /// Base game strips, one token list per reel
    pub base_reels: Vec<Vec<String>>,
    /// Free game strips, one token list per reel
    pub free_reels: Vec<Vec<String>>,
    #[serde(default)]
    pub free_game: FreeGameConfig,
}

impl GameDefinition {
    /// Built-in strips
    pub fn standard() -> Self {
        let to_owned = |strips: &[&[&str]]| -> Vec<Vec<String>> {
            strips
                .iter()
                .map(|col| col.iter().map(|t| t.to_string()).collect())
                .collect()
        };
        Self {
            base_reels: to_owned(&BASE_GAME_STRIPS),
            free_reels: to_owned(&FREE_GAME_STRIPS),
            free_game: FreeGameConfig::default(),
        }
    }

    /// Parse a JSON definition
    pub fn from_json(json: &str) -> SlotResult<Self> {
        serde_json::from_str(json).map_err(|e| SlotError::Parse(e.to_string()))
    }

    /// Parse a YAML definition
    pub fn from_yaml(yaml: &str) -> SlotResult<Self> {
        serde_yml::from_str(yaml).map_err(|e| SlotError::Parse(e.to_string()))
    }

    /// Load from a `.json`, `.yaml` or `.yml` file
    pub fn from_file(path: impl AsRef<Path>) -> SlotResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml(&text),
            _ => Self::from_json(&text),
        }
    }

    /// Decode tokens into a playable game. Unknown tokens are fatal.
    pub fn build(&self) -> SlotResult<SlotGame> {
        self.free_game.validate()?;
        let base_reels = ReelSet::from_tokens(&self.base_reels)?;
        let free_reels = ReelSet::from_tokens(&self.free_reels)?;
        log::debug!(
            "decoded reels: base lengths {:?}, free lengths {:?}",
            base_reels.strips().iter().map(|s| s.len()).collect::<Vec<_>>(),
            free_reels.strips().iter().map(|s| s.len()).collect::<Vec<_>>(),
        );

        Ok(SlotGame {
            base_reels,
            free_reels,
            base_paytable: Paytable::base_game(),
            free_paytable: Paytable::free_game(),
            free_game: self.free_game,
        })
    }
}

impl Default for GameDefinition {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::Symbol;
    use crate::window::REEL_COUNT;

    #[test]
    fn test_standard_game_decodes() {
        let game = SlotGame::standard().unwrap();
        let base: Vec<usize> = game.base_reels.strips().iter().map(|s| s.len()).collect();
        let free: Vec<usize> = game.free_reels.strips().iter().map(|s| s.len()).collect();
        assert_eq!(base, vec![49, 50, 51, 57, 52]);
        assert_eq!(free, vec![68, 68, 59, 61, 61]);
    }

    #[test]
    fn test_special_symbol_placement() {
        let game = SlotGame::standard().unwrap();
        for set in [&game.base_reels, &game.free_reels] {
            let first = set.strip(0).symbols();
            assert!(!first.contains(&Symbol::Wild));
            assert!(!first.contains(&Symbol::Scatter));
            assert!(!set.strip(1).symbols().contains(&Symbol::Scatter));
        }
    }

    #[test]
    fn test_unknown_token_is_fatal() {
        let mut def = GameDefinition::standard();
        def.free_reels[2][0] = "Z".into();
        assert!(matches!(def.build(), Err(SlotError::UnknownSymbol(t)) if t == "Z"));
    }

    #[test]
    fn test_json_definition() {
        let reel = r#"["9","W","S","K"]"#;
        let reels = vec![reel; REEL_COUNT].join(",");
        let json = format!(
            r#"{{"base_reels":[{reels}],"free_reels":[{reels}],"free_game":{{"initial_spins":8}}}}"#
        );
        let def = GameDefinition::from_json(&json).unwrap();
        assert_eq!(def.free_game.initial_spins, 8);
        assert_eq!(def.free_game.retrigger_spins, 5);
        let game = def.build().unwrap();
        assert_eq!(game.base_reels.strip(4).symbols()[1], Symbol::Wild);
    }

    #[test]
    fn test_yaml_definition_reel_count() {
        let yaml = "base_reels: [[\"9\"], [\"9\"]]\nfree_reels: [[\"9\"]]\n";
        let def = GameDefinition::from_yaml(yaml).unwrap();
        assert!(matches!(
            def.build(),
            Err(SlotError::ReelCount { expected: 5, found: 2 })
        ));
    }

    #[test]
    fn test_free_game_rules_validated() {
        let reel = r#"["9","W","S","K"]"#;
        let reels = vec![reel; REEL_COUNT].join(",");
        for rule in [
            r#""retrigger_scatter_count":0"#,
            r#""initial_spins":0"#,
            r#""batch_size":0"#,
        ] {
            let json = format!(
                r#"{{"base_reels":[{reels}],"free_reels":[{reels}],"free_game":{{{rule}}}}}"#
            );
            let def = GameDefinition::from_json(&json).unwrap();
            assert!(
                matches!(def.build(), Err(SlotError::InvalidFreeGame(_))),
                "{rule} accepted"
            );
        }

        let mut def = GameDefinition::standard();
        def.free_game.retrigger_scatter_count = 1;
        assert!(def.build().is_ok());
    }

    #[test]
    fn test_spin_bet() {
        let game = SlotGame::standard().unwrap();
        approx::assert_relative_eq!(game.spin_bet(0.04), 1.0);
    }
}
