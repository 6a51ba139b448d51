// game/catalog.rs

use bevy::prelude::*;
use serde::Deserialize;

const PUZZLES_JSON: &str = include_str!("../../assets/puzzles.json");

/// Resource holding the ordered puzzle definitions for the minigame screen.
///
/// Content (titles, prompts, piece identities, rewards) lives in the
/// embedded JSON; geometry stays with the spawning code, since it depends
/// on the live window layout.
#[derive(Resource, Debug, Clone)]
pub struct PuzzleCatalog {
    puzzles: Vec<PuzzleDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PuzzleDef {
    pub id: String,
    pub title: String,
    pub prompt: String,
    pub zone_label: String,
    pub reward: u32,
    pub pieces: Vec<PieceDef>,
}

/// One draggable piece: exactly one per puzzle is marked `correct`,
/// the rest are distractors.
#[derive(Debug, Clone, Deserialize)]
pub struct PieceDef {
    pub id: String,
    pub label: String,
    pub correct: bool,
}

#[derive(Debug, Deserialize)]
struct CatalogJson {
    puzzles: Vec<PuzzleDef>,
}

impl PuzzleCatalog {
    /// Load the catalog from the embedded JSON data.
    pub fn load() -> Result<Self, String> {
        Self::from_json(PUZZLES_JSON)
    }

    fn from_json(json: &str) -> Result<Self, String> {
        let data: CatalogJson =
            serde_json::from_str(json).map_err(|e| format!("puzzle catalog parse error: {e}"))?;

        if data.puzzles.is_empty() {
            return Err("puzzle catalog is empty".to_string());
        }

        for puzzle in &data.puzzles {
            let correct = puzzle.pieces.iter().filter(|p| p.correct).count();
            if correct != 1 {
                return Err(format!(
                    "puzzle '{}' has {} correct pieces, expected exactly 1",
                    puzzle.id, correct
                ));
            }
            if puzzle.reward == 0 {
                return Err(format!("puzzle '{}' has a zero reward", puzzle.id));
            }
        }

        Ok(PuzzleCatalog {
            puzzles: data.puzzles,
        })
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PuzzleDef> {
        self.puzzles.get(index)
    }

    pub fn puzzles(&self) -> &[PuzzleDef] {
        &self.puzzles
    }
}

impl PuzzleDef {
    /// The id of this puzzle's single correct piece.
    pub fn correct_piece(&self) -> &str {
        // Guaranteed by catalog validation.
        self.pieces
            .iter()
            .find(|p| p.correct)
            .map(|p| p.id.as_str())
            .unwrap_or_default()
    }

    pub fn accepts(&self, piece_id: &str) -> bool {
        self.correct_piece() == piece_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads_and_validates() {
        let catalog = PuzzleCatalog::load().expect("embedded catalog should parse");
        assert_eq!(catalog.len(), 5);

        for puzzle in catalog.puzzles() {
            assert!(!puzzle.title.is_empty());
            assert!(puzzle.reward > 0);
            assert!(puzzle.accepts(puzzle.correct_piece()));
        }
    }

    #[test]
    fn distractors_are_rejected_by_identity() {
        let catalog = PuzzleCatalog::load().unwrap();
        for puzzle in catalog.puzzles() {
            for piece in puzzle.pieces.iter().filter(|p| !p.correct) {
                assert!(!puzzle.accepts(&piece.id), "puzzle {}", puzzle.id);
            }
        }
    }

    #[test]
    fn rejects_puzzle_without_a_correct_piece() {
        let json = r#"{ "puzzles": [ {
            "id": "x", "title": "t", "prompt": "p", "zone_label": "z",
            "reward": 10,
            "pieces": [ { "id": "a", "label": "A", "correct": false } ]
        } ] }"#;
        let err = PuzzleCatalog::from_json(json).unwrap_err();
        assert!(err.contains("0 correct pieces"), "{err}");
    }

    #[test]
    fn rejects_puzzle_with_two_correct_pieces() {
        let json = r#"{ "puzzles": [ {
            "id": "x", "title": "t", "prompt": "p", "zone_label": "z",
            "reward": 10,
            "pieces": [
                { "id": "a", "label": "A", "correct": true },
                { "id": "b", "label": "B", "correct": true }
            ]
        } ] }"#;
        let err = PuzzleCatalog::from_json(json).unwrap_err();
        assert!(err.contains("2 correct pieces"), "{err}");
    }

    #[test]
    fn rejects_empty_catalog_and_bad_json() {
        assert!(PuzzleCatalog::from_json(r#"{ "puzzles": [] }"#).is_err());
        assert!(PuzzleCatalog::from_json("not json").is_err());
    }
}
