//! Action dispatch tests

mod common;

use common::{FixedSystem, NoDelay, ScriptedPort};
use serial_menu::config::MenuConfig;
use serial_menu::demo::{self, MENU_ALPHA, MENU_BETA, MENU_MAIN};
use serial_menu::menu::{
    dispatch, ActionContext, ActionDescriptor, ActionId, Behavior, LevelId, MenuError, Session, SessionState,
    Setting, Status, Terminal,
};

/// Run `f` against a fresh demo session and a scripted terminal
fn with_session<R>(
    port: &mut ScriptedPort,
    f: impl FnOnce(&mut Session<'static>, &mut Terminal<'_>) -> R,
) -> (R, Session<'static>) {
    let mut delay = NoDelay;
    let mut terminal = Terminal::new(port, &mut delay, MenuConfig::default());
    let mut session = Session::new(demo::menu());
    let result = f(&mut session, &mut terminal);
    (result, session)
}

#[test]
fn test_command_registry_has_all_actions() {
    let expected = [
        demo::ACTION_EXIT,
        demo::ACTION_MEMORY_REPORT,
        demo::ACTION_SAMPLE_I,
        demo::ACTION_SUBMENU_ALPHA,
        demo::ACTION_SUBMENU_BETA,
        demo::ACTION_SAMPLE_II,
        demo::ACTION_CHG_SETTING,
        demo::ACTION_STRING_ENTRY,
        demo::ACTION_EXIT_ALPHA_MENU,
        demo::ACTION_EXIT_BETA_MENU,
    ];

    for id in expected {
        assert!(
            demo::ACTIONS.iter().any(|a| a.id == id),
            "Action {} should be in registry",
            id.0
        );
    }
}

#[test]
fn test_submenu_round_trip() {
    let mut port = ScriptedPort::new(&[]);
    let system = FixedSystem(0);

    let (levels, session) = with_session(&mut port, |s, t| {
        s.perform(demo::ACTION_SUBMENU_ALPHA, t, &system).unwrap();
        let inside = s.state().active_level();
        s.perform(demo::ACTION_EXIT_ALPHA_MENU, t, &system).unwrap();
        (inside, s.state().active_level())
    });

    assert_eq!(levels, (MENU_ALPHA, MENU_MAIN));
    assert!(session.state().is_running());
}

#[test]
fn test_beta_exit_returns_to_main() {
    let mut port = ScriptedPort::new(&[]);
    let system = FixedSystem(0);

    let (_, session) = with_session(&mut port, |s, t| {
        s.perform(demo::ACTION_SUBMENU_BETA, t, &system).unwrap();
        assert_eq!(s.state().active_level(), MENU_BETA);
        s.perform(demo::ACTION_EXIT_BETA_MENU, t, &system).unwrap();
    });

    assert_eq!(session.state().active_level(), MENU_MAIN);
}

#[test]
fn test_generic_exit_from_sub_menu_goes_to_main() {
    let mut state = SessionState::new();

    state.enter(MENU_BETA);
    state.exit();

    assert_eq!(state.active_level(), MENU_MAIN);
    assert_eq!(state.status(), Status::Running);
}

#[test]
fn test_generic_exit_from_main_terminates() {
    let mut port = ScriptedPort::new(&[]);
    let system = FixedSystem(0);

    let (result, session) = with_session(&mut port, |s, t| s.perform(ActionId::EXIT, t, &system));

    assert_eq!(result, Ok(()));
    assert_eq!(session.state().status(), Status::Terminated);
}

#[test]
fn test_none_is_a_no_op() {
    let mut port = ScriptedPort::new(&[]);
    let system = FixedSystem(0);

    let (result, session) = with_session(&mut port, |s, t| s.perform(ActionId::NONE, t, &system));

    assert_eq!(result, Ok(()));
    assert_eq!(session.state(), &SessionState::new());
    assert_eq!(port.output(), "");
}

#[test]
fn test_unknown_action_is_reported_not_fatal() {
    let mut port = ScriptedPort::new(&[]);
    let system = FixedSystem(0);

    let (result, session) = with_session(&mut port, |s, t| s.perform(demo::ACTION_INACTIVE, t, &system));

    assert_eq!(result, Err(MenuError::UnhandledAction(demo::ACTION_INACTIVE)));
    assert!(session.state().is_running());
    assert_eq!(port.output(), "???\r\n");
}

#[test]
fn test_memory_report() {
    let mut port = ScriptedPort::new(&[]);
    let system = FixedSystem(1234);

    with_session(&mut port, |s, t| s.perform(demo::ACTION_MEMORY_REPORT, t, &system).unwrap());

    assert_eq!(port.output(), "Memory Available: 1234\r\n");
}

#[test]
fn test_sample_actions() {
    let mut port = ScriptedPort::new(&[]);
    let system = FixedSystem(0);

    with_session(&mut port, |s, t| {
        s.perform(demo::ACTION_SAMPLE_I, t, &system).unwrap();
        s.perform(demo::ACTION_SAMPLE_II, t, &system).unwrap();
    });

    assert_eq!(
        port.output(),
        "Sample Menu Action I\r\nPresenting Sample Menu Action II\r\n"
    );
}

#[test]
fn test_change_setting() {
    let mut port = ScriptedPort::new(&["blue\r", "\r"]);
    let system = FixedSystem(0);

    let (_, session) = with_session(&mut port, |s, t| {
        s.perform(demo::ACTION_CHG_SETTING, t, &system).unwrap();
        // Empty answer keeps the value
        s.perform(demo::ACTION_CHG_SETTING, t, &system).unwrap();
    });

    assert_eq!(session.setting().as_str(), "blue");
    let output = port.output();
    assert!(output.contains("New Value []blue\r\n"));
    assert!(output.contains("New Value [blue]"));
}

#[test]
fn test_string_entry() {
    let mut port = ScriptedPort::new(&["abc\n"]);
    let system = FixedSystem(0);

    with_session(&mut port, |s, t| s.perform(demo::ACTION_STRING_ENTRY, t, &system).unwrap());

    assert_eq!(port.output(), "Enter a string:abc\r\nThanks for the string abc\r\n");
}

#[test]
fn test_dispatch_with_custom_registry() {
    fn bump(ctx: &mut ActionContext<'_, '_>) {
        ctx.setting.set("bumped");
    }

    static ACTIONS: &[ActionDescriptor] = &[
        ActionDescriptor::new(ActionId(21), "bump", Behavior::Invoke(bump)),
        ActionDescriptor::new(ActionId(22), "deep", Behavior::Enter(LevelId(8))),
    ];

    let mut port = ScriptedPort::new(&[]);
    let mut delay = NoDelay;
    let mut terminal = Terminal::new(&mut port, &mut delay, MenuConfig::default());
    let mut state = SessionState::new();
    let mut setting = Setting::new();
    let system = FixedSystem(0);
    let mut ctx = ActionContext {
        terminal: &mut terminal,
        setting: &mut setting,
        system: &system,
    };

    assert_eq!(dispatch(ACTIONS, ActionId(21), &mut state, &mut ctx), Ok(()));
    assert_eq!(dispatch(ACTIONS, ActionId(22), &mut state, &mut ctx), Ok(()));
    assert_eq!(
        dispatch(ACTIONS, ActionId(23), &mut state, &mut ctx),
        Err(MenuError::UnhandledAction(ActionId(23)))
    );

    assert_eq!(state.active_level(), LevelId(8));
    assert_eq!(setting.as_str(), "bumped");
}
