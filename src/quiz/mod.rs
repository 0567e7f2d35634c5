//! Quiz state machine: six scenes, the session cursor, and the timing ledger.
//!
//! Everything here is host-native (no browser APIs) so the whole state
//! machine runs under plain `cargo test`. [`dom`] is the only module that
//! talks to the page; it owns a single [`QuizApp`] and forwards button
//! clicks and the typed answer into the callbacks below.

pub mod dom;
mod ledger;
mod session;

pub use ledger::{ScoreLedger, format_seconds};
pub use session::{QuizSession, shuffle};

use rand::Rng;

// --- Scenes ------------------------------------------------------------------

/// The six mutually exclusive UI states. Exactly one is active at a time;
/// `Top` is the initial scene and every path cycles back to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scene {
    Top,
    Quiz,
    InputAnswer,
    Correct,
    Wrong,
    Score,
}

// --- Controller --------------------------------------------------------------

/// Owns the active scene, the sampled session, the timing ledger, and the
/// instant the current kana was first shown. One instance drives the whole
/// widget; the presentation layer reads its accessors and calls exactly one
/// callback per user action.
///
/// Time is injected: timing-sensitive callbacks take `now_ms` so tests can
/// drive a synthetic clock. All transitions are synchronous, so the stored
/// timestamp can never be raced.
#[derive(Debug, Clone)]
pub struct QuizApp {
    scene: Scene,
    session: QuizSession,
    ledger: ScoreLedger,
    started_at_ms: f64,
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizApp {
    pub fn new() -> Self {
        Self {
            scene: Scene::Top,
            session: QuizSession::new(),
            ledger: ScoreLedger::new(),
            started_at_ms: 0.0,
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// The kana currently being asked, `None` before the first start.
    pub fn current_item(&self) -> Option<char> {
        self.session.current()
    }

    /// Ledger values paired position-wise with the session's items, in
    /// question order, ready for the score list.
    pub fn score_entries(&self) -> Vec<(char, f64)> {
        self.session
            .items()
            .iter()
            .copied()
            .zip(self.ledger.entries().iter().copied())
            .collect()
    }

    // --- Callbacks (one per user action) -------------------------------------

    /// Top -> Quiz: sample a fresh one-item session from the full pool,
    /// clear the ledger, and stamp the question start time.
    pub fn on_start(&mut self, rng: &mut impl Rng, now_ms: f64) {
        self.on_start_with_pool(crate::HIRAGANA, 1, rng, now_ms);
    }

    /// `on_start` with an explicit pool and session length. The shipped UI
    /// asks one question per run; longer sessions walk the same machine.
    pub fn on_start_with_pool(
        &mut self,
        pool: &[char],
        count: usize,
        rng: &mut impl Rng,
        now_ms: f64,
    ) {
        if !self.expect_scene(Scene::Top) {
            return;
        }
        self.session.start(pool, count, rng);
        self.ledger.clear();
        self.started_at_ms = now_ms;
        self.scene = Scene::Quiz;
    }

    /// Quiz -> InputAnswer: the player signals they recognize the kana.
    /// Records the elapsed time before the answer is checked.
    pub fn on_ready(&mut self, now_ms: f64) {
        if !self.expect_scene(Scene::Quiz) {
            return;
        }
        self.ledger.append(now_ms - self.started_at_ms);
        self.scene = Scene::InputAnswer;
    }

    /// InputAnswer -> Correct | Wrong. The typed string must equal the
    /// target kana exactly: case-sensitive, untrimmed, no normalization.
    pub fn on_submit(&mut self, answer: &str) {
        if !self.expect_scene(Scene::InputAnswer) {
            return;
        }
        let Some(target) = self.session.current() else {
            debug_assert!(false, "submit with no active session");
            return;
        };
        let mut chars = answer.chars();
        let exact = chars.next() == Some(target) && chars.next().is_none();
        self.scene = if exact { Scene::Correct } else { Scene::Wrong };
    }

    /// Dismisses the feedback or score view. From Correct the session either
    /// advances to the next kana (restamping the start time) or, on the last
    /// item, moves to the score list; Wrong and Score return to Top.
    pub fn on_acknowledge(&mut self, now_ms: f64) {
        match self.scene {
            Scene::Correct => {
                if self.session.is_last() {
                    self.scene = Scene::Score;
                } else {
                    self.session.advance();
                    self.started_at_ms = now_ms;
                    self.scene = Scene::Quiz;
                }
            }
            Scene::Wrong | Scene::Score => self.scene = Scene::Top,
            other => {
                debug_assert!(false, "acknowledge in scene {other:?}");
            }
        }
    }

    // Transitions are strictly user-driven; a callback arriving in the wrong
    // scene is a wiring bug, not a recoverable state. No-op in release.
    fn expect_scene(&self, expected: Scene) -> bool {
        debug_assert!(
            self.scene == expected,
            "callback for {expected:?} fired in {:?}",
            self.scene
        );
        self.scene == expected
    }
}
