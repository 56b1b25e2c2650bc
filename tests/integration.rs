// SPDX-License-Identifier: MPL-2.0
use std::fs;

use tempfile::tempdir;
use toast_stack::config::{self, Config, DurationSetting};
use toast_stack::domain::toast::DismissMode;
use toast_stack::error::Error;
use toast_stack::notifications::{FlashMessage, ToastStack, ToastState};

#[test]
fn config_file_drives_stack_behavior() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        "limit = 2\ndismiss = \"click\"\n\n[duration]\nnotice = 1\nalert = 0\n",
    )
    .expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded.limit, 2);
    assert_eq!(loaded.dismiss, DismissMode::Click);

    let mut stack = ToastStack::new(loaded);
    let ids = stack.attach([
        FlashMessage::notice("short"),
        FlashMessage::alert("sticky"),
        FlashMessage::notice("queued"),
    ]);

    assert_eq!(stack.state(ids[2]), Some(ToastState::Hidden));
    assert!(!stack.get(ids[0]).is_some_and(|t| t.has_close_control()));
    assert!(stack.get(ids[1]).is_some_and(|t| t.has_close_control()));

    // 16ms frame + 100ms settle + 1400ms display.
    stack.advance_to(116 + 1400);
    assert_eq!(stack.state(ids[0]), Some(ToastState::Removing));
    assert_eq!(stack.state(ids[2]), Some(ToastState::Pending));

    stack.advance_by(60_000);
    assert_eq!(stack.state(ids[1]), Some(ToastState::Visible));
}

#[test]
fn saved_config_loads_back_through_env_override() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::env::set_var("TOAST_STACK_CONFIG_DIR", dir.path());

    let config = Config {
        limit: 4,
        duration: DurationSetting::Uniform(9),
        ..Config::default()
    };
    config::save(&config).expect("Failed to save config");
    assert!(dir.path().join("settings.toml").exists());

    let loaded = config::load().expect("Failed to load config");
    assert_eq!(loaded, config);

    std::env::remove_var("TOAST_STACK_CONFIG_DIR");
}

#[test]
fn invalid_dismiss_mode_is_rejected_before_any_toast_exists() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "dismiss = \"hover\"\n").expect("Failed to write config file");

    let err = config::load_from_path(&path).expect_err("hover is not a dismiss mode");
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("button, click"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let result = config::load_from_path(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Io(_))));
}
