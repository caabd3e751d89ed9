// tests/project_preferences.rs

mod common;
use crate::common::{ProjectFixture, TestResult, init_tracing};

use jshint_prefs::errors::PrefsError;
use jshint_prefs::prefs::{ProjectPreferences, resource_path};
use jshint_prefs::store::Format;

#[test]
fn default_prefs_for_empty_project() -> TestResult {
    init_tracing();
    let project = ProjectFixture::new()?;
    let backing = project.backing();

    let prefs = ProjectPreferences::open(&backing, project.scope())?;

    assert!(!prefs.get_enabled());
    assert!(!prefs.get_excluded("js/test.js"));
    assert!(!prefs.get_excluded(""));
    assert_eq!(prefs.get_globals(), "");
    assert_eq!(prefs.get_options(), "");
    assert!(prefs.excluded_paths().is_empty());
    assert!(!prefs.has_changed());
    Ok(())
}

#[test]
fn prefs_from_example_settings_file() -> TestResult {
    init_tracing();
    let project = ProjectFixture::new()?.with_example_settings(Format::Current)?;
    let backing = project.backing();

    let prefs = ProjectPreferences::open(&backing, project.scope())?;

    assert!(prefs.get_enabled());
    assert!(prefs.get_excluded("js/test.js"));
    assert!(!prefs.get_excluded("js/foo.js"));
    assert_eq!(prefs.get_globals(), "org: true, com: false");
    assert_eq!(prefs.get_options(), "bitwise: true, curly: true, eqnull: true");
    assert_eq!(prefs.store().source(), Format::Current);
    assert!(!prefs.has_changed());
    Ok(())
}

#[test]
fn excluded_resources_are_matched_after_normalization() -> TestResult {
    let project = ProjectFixture::new()?.with_example_settings(Format::Current)?;
    let backing = project.backing();
    let prefs = ProjectPreferences::open(&backing, project.scope())?;

    assert!(prefs.is_resource_excluded(&project.root().join("js/test.js")));
    assert!(prefs.is_resource_excluded(std::path::Path::new("./js/test.js")));
    assert!(!prefs.is_resource_excluded(&project.root().join("js/foo.js")));
    assert!(!prefs.is_resource_excluded(std::path::Path::new("/elsewhere/js/test.js")));
    Ok(())
}

#[test]
fn set_enabled() -> TestResult {
    let project = ProjectFixture::new()?.with_example_settings(Format::Current)?;
    let backing = project.backing();
    let mut prefs = ProjectPreferences::open(&backing, project.scope())?;

    prefs.set_enabled(false);

    assert!(!prefs.get_enabled());
    assert!(prefs.has_changed());

    prefs.save()?;
    let reopened = ProjectPreferences::open(&backing, project.scope())?;
    assert_eq!(prefs.get_enabled(), reopened.get_enabled());
    Ok(())
}

#[test]
fn set_enabled_unchanged() -> TestResult {
    let project = ProjectFixture::new()?.with_example_settings(Format::Current)?;
    let backing = project.backing();
    let mut prefs = ProjectPreferences::open(&backing, project.scope())?;

    let enabled = prefs.get_enabled();
    prefs.set_enabled(enabled);

    assert!(!prefs.has_changed());
    Ok(())
}

#[test]
fn set_enabled_false_on_empty_project_is_unchanged() -> TestResult {
    let project = ProjectFixture::new()?;
    let backing = project.backing();
    let mut prefs = ProjectPreferences::open(&backing, project.scope())?;

    prefs.set_enabled(false);

    assert!(!prefs.has_changed());
    Ok(())
}

#[test]
fn set_globals() -> TestResult {
    let project = ProjectFixture::new()?.with_example_settings(Format::Current)?;
    let backing = project.backing();
    let mut prefs = ProjectPreferences::open(&backing, project.scope())?;

    prefs.set_globals("foo");

    assert_eq!(prefs.get_globals(), "foo");
    assert!(prefs.has_changed());

    prefs.save()?;
    let reopened = ProjectPreferences::open(&backing, project.scope())?;
    assert_eq!(reopened.get_globals(), "foo");
    Ok(())
}

#[test]
fn set_globals_unchanged() -> TestResult {
    let project = ProjectFixture::new()?.with_example_settings(Format::Current)?;
    let backing = project.backing();
    let mut prefs = ProjectPreferences::open(&backing, project.scope())?;

    let globals = prefs.get_globals();
    prefs.set_globals(&globals);

    assert!(!prefs.has_changed());
    Ok(())
}

#[test]
fn set_options() -> TestResult {
    let project = ProjectFixture::new()?.with_example_settings(Format::Current)?;
    let backing = project.backing();
    let mut prefs = ProjectPreferences::open(&backing, project.scope())?;

    prefs.set_options("foo");

    assert_eq!(prefs.get_options(), "foo");
    assert!(prefs.has_changed());

    prefs.save()?;
    let reopened = ProjectPreferences::open(&backing, project.scope())?;
    assert_eq!(reopened.get_options(), "foo");
    Ok(())
}

#[test]
fn set_options_unchanged() -> TestResult {
    let project = ProjectFixture::new()?.with_example_settings(Format::Current)?;
    let backing = project.backing();
    let mut prefs = ProjectPreferences::open(&backing, project.scope())?;

    let options = prefs.get_options();
    prefs.set_options(&options);

    assert!(!prefs.has_changed());
    Ok(())
}

#[test]
fn changes_to_two_keys_stay_dirty_until_saved() -> TestResult {
    let project = ProjectFixture::new()?.with_example_settings(Format::Current)?;
    let backing = project.backing();
    let mut prefs = ProjectPreferences::open(&backing, project.scope())?;

    prefs.set_globals("window: true");
    prefs.set_options("strict: true");
    assert!(prefs.has_changed());

    prefs.save()?;
    assert!(!prefs.has_changed());

    let reopened = ProjectPreferences::open(&backing, project.scope())?;
    assert_eq!(reopened.get_globals(), "window: true");
    assert_eq!(reopened.get_options(), "strict: true");
    assert!(reopened.get_enabled());
    Ok(())
}

#[test]
fn unsaved_changes_are_not_visible_to_a_fresh_store() -> TestResult {
    let project = ProjectFixture::new()?.with_example_settings(Format::Current)?;
    let backing = project.backing();
    let mut prefs = ProjectPreferences::open(&backing, project.scope())?;

    prefs.set_globals("foo");

    let fresh = ProjectPreferences::open(&backing, project.scope())?;
    assert_eq!(fresh.get_globals(), "org: true, com: false");
    Ok(())
}

#[test]
fn set_excluded_adds_and_removes_paths() -> TestResult {
    let project = ProjectFixture::new()?.with_example_settings(Format::Current)?;
    let backing = project.backing();
    let mut prefs = ProjectPreferences::open(&backing, project.scope())?;

    prefs.set_excluded("js/test.js", true)?;
    assert!(!prefs.has_changed());

    prefs.set_excluded("lib/vendor.js", true)?;
    assert!(prefs.has_changed());
    assert!(prefs.get_excluded("lib/vendor.js"));
    assert!(prefs.get_excluded("js/test.js"));

    prefs.save()?;
    let mut reopened = ProjectPreferences::open(&backing, project.scope())?;
    assert!(reopened.get_excluded("lib/vendor.js"));

    reopened.set_excluded("js/test.js", false)?;
    reopened.set_excluded("lib/vendor.js", false)?;
    assert!(reopened.has_changed());
    assert!(reopened.excluded_paths().is_empty());
    reopened.save()?;

    let text = project.read_settings(Format::Current).unwrap_or_default();
    assert!(!text.contains("exclude="));
    Ok(())
}

#[test]
fn snapshot_reflects_effective_values() -> TestResult {
    let project = ProjectFixture::new()?.with_example_settings(Format::Current)?;
    let backing = project.backing();
    let prefs = ProjectPreferences::open(&backing, project.scope())?;

    let snapshot = prefs.snapshot();

    assert!(snapshot.enabled);
    assert_eq!(
        snapshot.excluded.iter().cloned().collect::<Vec<_>>(),
        vec!["js/test.js".to_string()]
    );
    assert_eq!(snapshot.globals, "org: true, com: false");
    assert_eq!(snapshot.source, Format::Current);
    Ok(())
}

#[test]
fn resource_paths() -> TestResult {
    let project = ProjectFixture::new()?;
    let root = project.root();

    assert_eq!(resource_path(root, root), Some(String::new()));
    assert_eq!(resource_path(root, &root.join("test.js")), Some("test.js".to_string()));
    assert_eq!(
        resource_path(root, &root.join("js").join("test.js")),
        Some("js/test.js".to_string())
    );
    Ok(())
}

#[test]
fn exclusion_paths_with_delimiters_or_padding_are_rejected() -> TestResult {
    let project = ProjectFixture::new()?.with_example_settings(Format::Current)?;
    let backing = project.backing();
    let mut prefs = ProjectPreferences::open(&backing, project.scope())?;

    for bad in ["a,b.js", "a;b.js", " js/x.js", "js/x.js "] {
        match prefs.set_excluded(bad, true) {
            Err(PrefsError::InvalidPath { path, .. }) => assert_eq!(path, bad),
            other => panic!("Expected InvalidPath for {bad:?}, got: {:?}", other),
        }
    }

    assert!(!prefs.has_changed());
    assert!(!prefs.get_excluded("a"));
    assert!(!prefs.get_excluded("b.js"));
    assert_eq!(
        prefs.excluded_paths().into_iter().collect::<Vec<_>>(),
        vec!["js/test.js".to_string()]
    );
    Ok(())
}

#[test]
fn project_root_cannot_be_excluded() -> TestResult {
    let project = ProjectFixture::new()?;
    let backing = project.backing();
    let mut prefs = ProjectPreferences::open(&backing, project.scope())?;

    let result = prefs.set_excluded("", true);

    assert!(matches!(result, Err(PrefsError::InvalidPath { .. })));
    assert!(!prefs.has_changed());
    assert!(!prefs.get_excluded(""));
    Ok(())
}

#[cfg(unix)]
#[test]
fn backslash_in_unix_file_name_is_not_a_separator() -> TestResult {
    let project = ProjectFixture::new()?;
    let root = project.root();

    assert_eq!(
        resource_path(root, &root.join("js").join("a\\b.js")),
        Some("js/a\\b.js".to_string())
    );
    Ok(())
}
