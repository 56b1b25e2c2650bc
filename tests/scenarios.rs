// SPDX-License-Identifier: MPL-2.0
//! End-to-end lifecycle scenarios driven through the public stack API.

use toast_stack::config::{Config, DurationSetting, EXIT_ANIMATION_MS};
use toast_stack::diagnostics::LifecycleEventKind;
use toast_stack::notifications::{
    FlashBatch, FlashMessage, Millis, TimerPort, ToastId, ToastInput, ToastStack, ToastState,
};

/// Frame tick plus initial settle delay.
const SHOWN_AT: Millis = 116;
const DISPLAY_MS: Millis = 4400;

fn stack_with(limit: usize, count: usize) -> (ToastStack, Vec<ToastId>) {
    let mut stack = ToastStack::new(Config {
        limit,
        ..Config::default()
    });
    let batch: FlashBatch = (0..count)
        .map(|i| FlashMessage::notice(format!("message {i}")))
        .collect();
    let ids = stack.attach(batch);
    (stack, ids)
}

/// Advances in small steps, checking the stack-wide invariants each time and
/// finishing exit animations after they played.
fn run_checked(stack: &mut ToastStack, until: Millis, limit: usize) {
    while stack.now() < until {
        stack.advance_by(10);

        assert!(stack.count(ToastState::Removing) <= 1);
        let members = stack.toasts().filter(|t| t.state().is_member()).count();
        let expected = if limit == 0 { members } else { members.min(limit) };
        assert_eq!(stack.visible_count(), expected);

        let now = stack.now();
        let finished: Vec<_> = stack
            .toasts()
            .filter(|t| {
                t.removing_since()
                    .is_some_and(|since| now - since >= EXIT_ANIMATION_MS)
            })
            .map(|t| t.id())
            .collect();
        for id in finished {
            stack.handle_input(id, ToastInput::ExitAnimationFinished);
        }
    }
}

#[test]
fn five_toasts_behind_a_window_of_three() {
    let (mut stack, ids) = stack_with(3, 5);
    stack.advance_to(SHOWN_AT);

    let states: Vec<_> = ids.iter().filter_map(|id| stack.state(*id)).collect();
    assert_eq!(
        states,
        vec![
            ToastState::Visible,
            ToastState::Visible,
            ToastState::Visible,
            ToastState::Hidden,
            ToastState::Hidden,
        ]
    );

    stack.advance_to(SHOWN_AT + DISPLAY_MS);
    stack.advance_by(EXIT_ANIMATION_MS);
    stack.handle_input(ids[0], ToastInput::ExitAnimationFinished);

    assert!(stack.get(ids[0]).is_none());
    assert_eq!(stack.state(ids[3]), Some(ToastState::Visible));
    assert_eq!(
        stack.journal().kinds_for(ids[3]),
        vec![
            LifecycleEventKind::Attached {
                state: ToastState::Hidden
            },
            LifecycleEventKind::Transition {
                from: ToastState::Hidden,
                to: ToastState::Pending
            },
            LifecycleEventKind::Transition {
                from: ToastState::Pending,
                to: ToastState::Visible
            },
        ]
    );
    // Toast 1 is now the oldest and removing; toast 2 leads the members.
    assert_eq!(stack.state(ids[1]), Some(ToastState::Removing));
    assert_eq!(stack.order_index(ids[2]), Some(0));
}

#[test]
fn sticky_toast_stays_while_its_sibling_leaves() {
    let mut table = std::collections::BTreeMap::new();
    table.insert("alert".to_string(), 0);
    let mut stack = ToastStack::new(Config {
        duration: DurationSetting::PerKind(table),
        ..Config::default()
    });
    let ids = stack.attach([FlashMessage::alert("sticky"), FlashMessage::notice("timed")]);
    stack.advance_to(SHOWN_AT);

    stack.handle_input(ids[0], ToastInput::PointerEnter);
    assert_eq!(stack.state(ids[0]), Some(ToastState::Visible));

    stack.advance_to(SHOWN_AT + DISPLAY_MS);
    assert_eq!(stack.state(ids[1]), Some(ToastState::Removing));
    assert_eq!(stack.state(ids[0]), Some(ToastState::Visible));

    stack.handle_input(ids[1], ToastInput::ExitAnimationFinished);
    stack.handle_input(ids[0], ToastInput::ControlActivated);
    assert_eq!(stack.state(ids[0]), Some(ToastState::Removing));
}

#[test]
fn sticky_dismissal_does_not_touch_sibling_timer() {
    let mut table = std::collections::BTreeMap::new();
    table.insert("alert".to_string(), 0);
    let mut stack = ToastStack::new(Config {
        duration: DurationSetting::PerKind(table),
        ..Config::default()
    });
    let ids = stack.attach([FlashMessage::alert("sticky"), FlashMessage::notice("timed")]);
    stack.advance_to(SHOWN_AT + 1000);

    stack.handle_input(ids[0], ToastInput::ControlActivated);
    assert_eq!(stack.state(ids[0]), Some(ToastState::Removing));
    stack.advance_by(EXIT_ANIMATION_MS);
    stack.handle_input(ids[0], ToastInput::ExitAnimationFinished);

    stack.advance_to(SHOWN_AT + DISPLAY_MS - 1);
    assert_eq!(stack.state(ids[1]), Some(ToastState::Visible));
    stack.advance_to(SHOWN_AT + DISPLAY_MS);
    assert_eq!(stack.state(ids[1]), Some(ToastState::Removing));
}

#[test]
fn hovering_first_toast_holds_back_the_second() {
    let (mut stack, ids) = stack_with(0, 2);
    stack.advance_to(SHOWN_AT + 500);
    stack.handle_input(ids[0], ToastInput::PointerEnter);

    stack.advance_to(SHOWN_AT + DISPLAY_MS + 2000);
    assert_eq!(stack.state(ids[1]), Some(ToastState::Visible));
    assert!(stack.coordinator().is_waiting(ids[1]));

    stack.handle_input(ids[0], ToastInput::PointerLeave);
    assert_eq!(stack.state(ids[1]), Some(ToastState::Removing));
}

#[test]
fn pause_resume_conserves_remaining_time() {
    let (mut stack, ids) = stack_with(0, 1);
    let id = ids[0];
    stack.advance_to(SHOWN_AT + 1234);

    stack.handle_input(id, ToastInput::PointerEnter);
    stack.handle_input(id, ToastInput::PointerLeave);

    let remaining = stack.get(id).map(|t| t.remaining()).unwrap_or_default();
    assert_eq!(remaining, DISPLAY_MS - 1234);
    assert!(remaining <= DISPLAY_MS);
}

#[test]
fn dismissal_is_terminal() {
    let (mut stack, ids) = stack_with(0, 2);
    stack.advance_to(SHOWN_AT);
    stack.handle_input(ids[0], ToastInput::ControlActivated);
    stack.handle_input(ids[1], ToastInput::ControlActivated);

    // Second toast waits behind the first; hover cannot pause it.
    stack.handle_input(ids[1], ToastInput::PointerEnter);
    stack.handle_input(ids[1], ToastInput::PointerLeave);
    assert_eq!(stack.state(ids[1]), Some(ToastState::Visible));
    assert!(stack.coordinator().is_waiting(ids[1]));

    run_checked(&mut stack, SHOWN_AT + 2000, 0);
    assert!(stack.is_empty());

    let removed = stack
        .journal()
        .iter()
        .filter(|e| e.entered(ToastState::Removed))
        .count();
    assert_eq!(removed, 2);
}

#[test]
fn busy_stack_keeps_invariants() {
    let (mut stack, ids) = stack_with(3, 8);
    run_checked(&mut stack, 3000, 3);

    stack.handle_input(ids[1], ToastInput::PointerEnter);
    stack.push(FlashMessage::alert("late"));
    run_checked(&mut stack, 12_000, 3);

    stack.handle_input(ids[1], ToastInput::PointerLeave);
    run_checked(&mut stack, 60_000, 3);
    assert!(stack.is_empty());
    assert_eq!(stack.timers().pending(), 0);
}
