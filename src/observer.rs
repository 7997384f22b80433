//! Collaborator seam: read-only notifications to presentation and audio.
//!
//! The engine pushes affordance updates, named audio cues, and mutually
//! exclusive play-state signals through [`BaizeObserver`]. Everything is
//! fire-and-forget: the engine never waits on, or checks the result of, a
//! notification. Hosts implement only the methods they care about.

/// Named audio cue, triggered on specific transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    /// A fresh deal hit the baize.
    Fan,
    /// A tapped tail slid to its destination.
    Slide,
    /// A tapped pile dealt or recycled.
    Shove,
    /// A move was refused or an untouchable card was grabbed.
    Error,
}

/// Mutually exclusive play state, derived from board state after every move —
/// never stored as a persistent mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameSignal {
    /// Every pile satisfies its completion predicate: the game is won.
    Complete,
    /// Every pile is conformant; offer a "collect all" affordance.
    Collectable,
    /// No movable cards remain.
    Stuck,
    /// Normal play.
    Playing,
}

/// Toolbar affordances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToolbarState {
    pub undo_enabled: bool,
    pub collect_enabled: bool,
}

/// Statusbar contents. `stock`/`waste` are `None` when the variant hides or
/// lacks that pile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub stock: Option<usize>,
    pub waste: Option<usize>,
    pub moves: usize,
    pub percent: i32,
}

/// Receiver for engine notifications. All methods default to no-ops.
pub trait BaizeObserver {
    /// Informational message for the user.
    fn toast(&mut self, _msg: &str) {}

    /// A move was refused; `msg` is the human-readable reason.
    fn toast_error(&mut self, _msg: &str) {}

    /// Fire-and-forget audio trigger.
    fn cue(&mut self, _cue: Cue) {}

    fn toolbar(&mut self, _state: ToolbarState) {}

    fn statusbar(&mut self, _line: StatusLine) {}

    /// Exactly one signal is emitted after every committed move or restore.
    fn signal(&mut self, _signal: GameSignal) {}
}

/// Observer that ignores everything; the default for a headless board.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl BaizeObserver for NullObserver {}
