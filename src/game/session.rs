// game/session.rs

use crate::game::catalog::PuzzleCatalog;
use bevy::prelude::Resource;

/// A minigame session - runs the fixed puzzle sequence once.
///
/// A fresh session is inserted every time the minigame screen is entered,
/// which is what resets score and stars.
#[derive(Debug, Clone, Resource)]
pub struct GameSession {
    /// Per-puzzle win condition, in play order
    goals: Vec<PuzzleGoal>,
    /// Index of the active puzzle
    current: usize,
    /// Accumulated points, monotonically increasing until restart
    score: u32,
    /// One "star" per puzzle, lit when solved
    solved: Vec<bool>,
    /// Set once, after the last puzzle's advance
    finished: bool,
}

#[derive(Debug, Clone)]
struct PuzzleGoal {
    correct_piece: String,
    reward: u32,
}

/// What happened to a dropped piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Correct piece inside the zone: points awarded, star lit, puzzle locked
    Solved { reward: u32 },
    /// Wrong piece inside the zone: visually rejected, returns to start
    Rejected,
    /// Dropped outside the zone: returns to start, no feedback
    Missed,
    /// Puzzle already solved (or session finished): drop is ignored
    Inert,
}

/// Result of asking the session to move on after a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The next puzzle's index
    Next(usize),
    /// That was the last puzzle: celebration time. Returned exactly once.
    Finished,
    /// Current puzzle is unsolved, or the session already finished
    Blocked,
}

impl GameSession {
    pub fn new(catalog: &PuzzleCatalog) -> Self {
        let goals = catalog
            .puzzles()
            .iter()
            .map(|p| PuzzleGoal {
                correct_piece: p.correct_piece().to_string(),
                reward: p.reward,
            })
            .collect::<Vec<_>>();
        let count = goals.len();

        GameSession {
            goals,
            current: 0,
            score: 0,
            solved: vec![false; count],
            finished: false,
        }
    }

    // === Query methods (for systems to read state) ===

    pub fn current_puzzle(&self) -> usize {
        self.current
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn puzzle_count(&self) -> usize {
        self.goals.len()
    }

    /// Star states in puzzle order.
    pub fn stars(&self) -> &[bool] {
        &self.solved
    }

    pub fn stars_lit(&self) -> usize {
        self.solved.iter().filter(|s| **s).count()
    }

    pub fn current_solved(&self) -> bool {
        self.solved.get(self.current).copied().unwrap_or(false)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    // === Mutation methods (for handling user input) ===

    /// Apply the accept/reject policy to a drop of `piece_id`.
    ///
    /// `in_zone` is whether the release point landed inside the active
    /// puzzle's drop zone. Scoring is idempotent: once a puzzle is solved
    /// every further drop is `Inert`.
    pub fn try_drop(&mut self, piece_id: &str, in_zone: bool) -> DropOutcome {
        if self.finished || self.current_solved() {
            return DropOutcome::Inert;
        }
        if !in_zone {
            return DropOutcome::Missed;
        }

        let goal = &self.goals[self.current];
        if goal.correct_piece == piece_id {
            self.solved[self.current] = true;
            self.score += goal.reward;
            DropOutcome::Solved {
                reward: goal.reward,
            }
        } else {
            DropOutcome::Rejected
        }
    }

    /// Move to the next puzzle once the current one is solved.
    pub fn advance(&mut self) -> Advance {
        if self.finished || !self.current_solved() {
            return Advance::Blocked;
        }
        if self.current + 1 < self.goals.len() {
            self.current += 1;
            Advance::Next(self.current)
        } else {
            self.finished = true;
            Advance::Finished
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(&PuzzleCatalog::load().unwrap())
    }

    fn solve_current(s: &mut GameSession) -> u32 {
        let correct = s.goals[s.current].correct_piece.clone();
        match s.try_drop(&correct, true) {
            DropOutcome::Solved { reward } => reward,
            other => panic!("expected solve, got {other:?}"),
        }
    }

    #[test]
    fn fresh_session_is_zeroed() {
        let s = session();
        assert_eq!(s.current_puzzle(), 0);
        assert_eq!(s.score(), 0);
        assert_eq!(s.stars_lit(), 0);
        assert!(!s.is_finished());
    }

    #[test]
    fn correct_drop_scores_and_lights_star() {
        let mut s = session();
        let reward = solve_current(&mut s);

        assert_eq!(s.score(), reward);
        assert_eq!(s.stars_lit(), 1);
        assert!(s.stars()[0]);
        assert!(s.current_solved());
    }

    #[test]
    fn repeated_drops_after_solving_are_inert() {
        let mut s = session();
        let reward = solve_current(&mut s);
        let correct = s.goals[0].correct_piece.clone();

        assert_eq!(s.try_drop(&correct, true), DropOutcome::Inert);
        assert_eq!(s.try_drop("anything", true), DropOutcome::Inert);
        assert_eq!(s.score(), reward);
        assert_eq!(s.stars_lit(), 1);
    }

    #[test]
    fn wrong_piece_in_zone_is_rejected_without_scoring() {
        let mut s = session();
        assert_eq!(s.try_drop("not-a-real-piece", true), DropOutcome::Rejected);
        assert_eq!(s.score(), 0);
        assert_eq!(s.stars_lit(), 0);
        assert!(!s.current_solved());
    }

    #[test]
    fn drop_outside_zone_is_missed_even_for_correct_piece() {
        let mut s = session();
        let correct = s.goals[0].correct_piece.clone();
        assert_eq!(s.try_drop(&correct, false), DropOutcome::Missed);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn advance_is_blocked_until_solved() {
        let mut s = session();
        assert_eq!(s.advance(), Advance::Blocked);

        solve_current(&mut s);
        assert_eq!(s.advance(), Advance::Next(1));
        assert_eq!(s.current_puzzle(), 1);

        // New puzzle starts unsolved again.
        assert!(!s.current_solved());
        assert_eq!(s.advance(), Advance::Blocked);
    }

    #[test]
    fn finishes_exactly_once_after_the_last_puzzle() {
        let mut s = session();
        let count = s.puzzle_count();
        let mut total = 0;

        for i in 0..count {
            total += solve_current(&mut s);
            if i + 1 < count {
                assert_eq!(s.advance(), Advance::Next(i + 1));
            }
        }

        assert_eq!(s.advance(), Advance::Finished);
        assert!(s.is_finished());
        assert_eq!(s.score(), total);
        assert_eq!(s.stars_lit(), count);

        // Not re-enterable without a fresh session.
        assert_eq!(s.advance(), Advance::Blocked);
        assert_eq!(s.try_drop("plug", true), DropOutcome::Inert);
    }

    #[test]
    fn new_session_resets_progress() {
        let mut s = session();
        solve_current(&mut s);
        assert!(s.score() > 0);

        let fresh = session();
        assert_eq!(fresh.score(), 0);
        assert_eq!(fresh.stars_lit(), 0);
        assert_eq!(fresh.current_puzzle(), 0);
    }
}
