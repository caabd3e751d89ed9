// tests/legacy_fallback.rs

mod common;
use crate::common::{ProjectFixture, SettingsFileBuilder, TestResult, init_tracing};

use jshint_prefs::prefs::ProjectPreferences;
use jshint_prefs::store::Format;

#[test]
fn fallback_to_old_prefs() -> TestResult {
    init_tracing();
    let project = ProjectFixture::new()?.with_example_settings(Format::Legacy)?;
    let backing = project.backing();

    let prefs = ProjectPreferences::open(&backing, project.scope())?;

    assert!(prefs.get_enabled());
    assert!(prefs.get_excluded("js/test.js"));
    assert!(!prefs.get_excluded("js/foo.js"));
    assert_eq!(prefs.get_globals(), "org: true, com: false");
    assert_eq!(prefs.get_options(), "bitwise: true, curly: true, eqnull: true");
    assert_eq!(prefs.store().source(), Format::Legacy);
    assert!(!prefs.has_changed());
    Ok(())
}

#[test]
fn legacy_and_current_formats_resolve_identically() -> TestResult {
    let current = ProjectFixture::new()?.with_example_settings(Format::Current)?;
    let legacy = ProjectFixture::new()?.with_example_settings(Format::Legacy)?;
    let current_backing = current.backing();
    let legacy_backing = legacy.backing();

    let from_current = ProjectPreferences::open(&current_backing, current.scope())?.snapshot();
    let from_legacy = ProjectPreferences::open(&legacy_backing, legacy.scope())?.snapshot();

    assert_eq!(from_current.enabled, from_legacy.enabled);
    assert_eq!(from_current.excluded, from_legacy.excluded);
    assert_eq!(from_current.globals, from_legacy.globals);
    assert_eq!(from_current.options, from_legacy.options);
    Ok(())
}

#[test]
fn current_format_wins_when_both_exist() -> TestResult {
    let project = ProjectFixture::new()?.with_example_settings(Format::Legacy)?;
    project.write_settings(
        Format::Current,
        &SettingsFileBuilder::new().line("globals=window").build(),
    )?;
    let backing = project.backing();

    let prefs = ProjectPreferences::open(&backing, project.scope())?;

    assert_eq!(prefs.store().source(), Format::Current);
    assert_eq!(prefs.get_globals(), "window");
    assert!(!prefs.get_enabled());
    Ok(())
}

#[test]
fn current_file_without_recognized_keys_falls_back() -> TestResult {
    let project = ProjectFixture::new()?.with_example_settings(Format::Legacy)?;
    project.write_settings(Format::Current, &SettingsFileBuilder::new().build())?;
    let backing = project.backing();

    let prefs = ProjectPreferences::open(&backing, project.scope())?;

    assert_eq!(prefs.store().source(), Format::Legacy);
    assert!(prefs.get_enabled());
    Ok(())
}

#[test]
fn save_never_writes_the_legacy_file() -> TestResult {
    let project = ProjectFixture::new()?.with_example_settings(Format::Legacy)?;
    let legacy_before = project.read_settings(Format::Legacy);
    let backing = project.backing();
    let mut prefs = ProjectPreferences::open(&backing, project.scope())?;

    prefs.set_globals("foo");
    prefs.save()?;

    assert_eq!(project.read_settings(Format::Legacy), legacy_before);
    assert!(project.read_settings(Format::Current).is_some());
    assert_eq!(prefs.store().source(), Format::Current);

    let reopened = ProjectPreferences::open(&backing, project.scope())?;
    assert_eq!(reopened.store().source(), Format::Current);
    assert_eq!(reopened.get_globals(), "foo");
    assert!(reopened.get_enabled());
    assert!(reopened.get_excluded("js/test.js"));
    assert_eq!(reopened.get_options(), "bitwise: true, curly: true, eqnull: true");
    Ok(())
}
