use eph::screen::*;

const SCREENS: [Screen; 5] = [Screen::Menu, Screen::Playing, Screen::Paused, Screen::ExitConfirm, Screen::Results];
const TRIGGERS: [Trigger; 9] = [
    Trigger::Play,
    Trigger::Exit,
    Trigger::CancelExit,
    Trigger::PauseToggle,
    Trigger::Retry,
    Trigger::ToMenu,
    Trigger::HealthDepleted,
    Trigger::ChartFinished,
    Trigger::Fault,
];

#[test]
fn starts_on_menu() {
    assert_eq!(Screen::default(), Screen::Menu);
}

#[test]
fn pause_toggles_between_playing_and_paused() {
    assert_eq!(Screen::Playing.next(Trigger::PauseToggle), Some(Screen::Paused));
    assert_eq!(Screen::Paused.next(Trigger::PauseToggle), Some(Screen::Playing));
    assert_eq!(Screen::Menu.next(Trigger::PauseToggle), None);
    assert_eq!(Screen::Results.next(Trigger::PauseToggle), None);
}

#[test]
fn only_playing_reaches_results() {
    for screen in SCREENS {
        for trigger in TRIGGERS {
            if screen.next(trigger) == Some(Screen::Results) {
                assert_eq!(screen, Screen::Playing, "{trigger:?}");
            }
        }
    }
}

#[test]
fn simulation_triggers_are_ignored_while_paused() {
    assert_eq!(Screen::Paused.next(Trigger::HealthDepleted), None);
    assert_eq!(Screen::Paused.next(Trigger::ChartFinished), None);
    assert_eq!(Screen::Paused.next(Trigger::Fault), None);
}

#[test]
fn run_starts_from_menu_or_results_only() {
    assert_eq!(Screen::Menu.next(Trigger::Play), Some(Screen::Playing));
    assert_eq!(Screen::Results.next(Trigger::Retry), Some(Screen::Playing));
    assert_eq!(Screen::Paused.next(Trigger::Play), None);
    assert_eq!(Screen::Menu.next(Trigger::Retry), None);
}

#[test]
fn exit_prompt_round_trip() {
    assert_eq!(Screen::Menu.next(Trigger::Exit), Some(Screen::ExitConfirm));
    assert_eq!(Screen::ExitConfirm.next(Trigger::CancelExit), Some(Screen::Menu));
}

#[test]
fn fault_returns_to_menu() {
    assert_eq!(Screen::Playing.next(Trigger::Fault), Some(Screen::Menu));
}

#[test]
fn only_playing_simulates() {
    let simulating: Vec<Screen> = SCREENS.into_iter().filter(|s| s.simulates()).collect();
    assert_eq!(simulating, vec![Screen::Playing]);
}

#[test]
fn simulation_triggers_are_not_input() {
    assert!(!Trigger::HealthDepleted.is_input());
    assert!(!Trigger::ChartFinished.is_input());
    assert!(!Trigger::Fault.is_input());
    assert!(Trigger::PauseToggle.is_input());
    assert!(Trigger::Play.is_input());
}
