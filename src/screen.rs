/// The active screen. Exactly one at a time, owned by [`crate::game::Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Menu,
    Playing,
    Paused,
    ExitConfirm,
    Results,
}

/// Something that may move the game to another screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// "play" on the menu.
    Play,
    /// "exit" on the menu.
    Exit,
    /// "nevermind" on the exit prompt.
    CancelExit,
    PauseToggle,
    /// "retry" on the results screen.
    Retry,
    /// "menu" on the results screen.
    ToMenu,
    HealthDepleted,
    /// END reached with an empty board.
    ChartFinished,
    /// The run hit an unrecoverable schedule error.
    Fault,
}

impl Trigger {
    /// Triggers that come from a player input event, as opposed to the
    /// simulation. At most one of these applies per tick.
    pub fn is_input(self) -> bool {
        !matches!(self, Trigger::HealthDepleted | Trigger::ChartFinished | Trigger::Fault)
    }
}

impl Screen {
    /// The screen `trigger` leads to from `self`, or `None` when the pair
    /// is not a valid transition.
    pub fn next(self, trigger: Trigger) -> Option<Screen> {
        use Screen::*;
        use Trigger::*;

        match (self, trigger) {
            (Menu, Play) => Some(Playing),
            (Menu, Exit) => Some(ExitConfirm),
            (ExitConfirm, CancelExit) => Some(Menu),
            (Playing, PauseToggle) => Some(Paused),
            (Paused, PauseToggle) => Some(Playing),
            (Playing, HealthDepleted) | (Playing, ChartFinished) => Some(Results),
            (Playing, Fault) => Some(Menu),
            (Results, Retry) => Some(Playing),
            (Results, ToMenu) => Some(Menu),
            _ => None,
        }
    }

    /// Whether the scheduler, note physics and judgment run on this screen.
    pub fn simulates(self) -> bool {
        self == Screen::Playing
    }
}
