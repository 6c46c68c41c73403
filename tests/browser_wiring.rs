//! Browser wiring checks that run without a browser.
//!
//! The `hydrate` code is only type-checked when the feature is on, so these
//! tests keep the manifest and the DOM glue consistent from a plain native
//! `cargo test`. The full type-check of the browser build is the ignored
//! test at the bottom: `cargo test -- --ignored`.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::process::Command;

struct SourceFile {
    name: String,
    content: String,
}

fn manifest_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Production `.rs` files directly under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let Ok(entries) = fs::read_dir(manifest_dir().join("src")) else {
        return Vec::new();
    };
    entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|e| e == "rs"))
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().to_string();
            if name.ends_with("_test.rs") {
                return None;
            }
            let content = fs::read_to_string(&path).ok()?;
            Some(SourceFile { name, content })
        })
        .collect()
}

/// Entries of the `web-sys` feature list in `Cargo.toml`.
fn enabled_web_sys_features() -> BTreeSet<String> {
    let manifest = fs::read_to_string(manifest_dir().join("Cargo.toml")).unwrap();
    let start = manifest.find("web-sys = {").expect("web-sys dependency");
    let list = &manifest[start..];
    let list = &list[list.find('[').unwrap() + 1..list.find(']').unwrap()];
    list.split(',')
        .map(|item| item.trim().trim_matches('"').to_owned())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Feature-gated `web_sys` items named in the sources: types plus the
/// `console` module. Free functions like `web_sys::window` are skipped.
fn used_web_sys_items() -> BTreeSet<String> {
    let mut used = BTreeSet::new();
    for file in source_files() {
        for (idx, _) in file.content.match_indices("web_sys::") {
            let rest = &file.content[idx + "web_sys::".len()..];
            let names: Vec<&str> = if let Some(group) = rest.strip_prefix('{') {
                group[..group.find('}').unwrap_or(group.len())].split(',').collect()
            } else {
                let end = rest.find(|c: char| !(c.is_alphanumeric() || c == '_')).unwrap_or(rest.len());
                vec![&rest[..end]]
            };
            for name in names.into_iter().map(str::trim) {
                if name == "console" || name.starts_with(|c: char| c.is_ascii_uppercase()) {
                    used.insert(name.to_owned());
                }
            }
        }
    }
    used
}

// =============================================================
// Manifest
// =============================================================

#[test]
fn every_web_sys_item_is_an_enabled_feature() {
    let enabled = enabled_web_sys_features();
    let missing: Vec<_> = used_web_sys_items().into_iter().filter(|item| !enabled.contains(item)).collect();
    assert!(missing.is_empty(), "web-sys features missing from Cargo.toml: {missing:?}");
}

#[test]
fn ready_state_is_read_as_a_string() {
    assert!(!enabled_web_sys_features().contains("DocumentReadyState"));
    assert!(!used_web_sys_items().contains("DocumentReadyState"));
}

#[test]
fn feature_scan_sees_the_dom_glue() {
    let used = used_web_sys_items();
    assert!(used.contains("EventTarget"));
    assert!(used.contains("MediaQueryListEvent"));
    assert!(used.contains("console"));
}

// =============================================================
// Listeners
// =============================================================

#[test]
fn one_shot_listeners_only_wait_for_window_load() {
    for file in source_files() {
        if file.name == "dom.rs" {
            continue;
        }
        for line in file.content.lines().filter(|line| line.contains("listen_once(")) {
            assert_eq!(file.name, "preloader.rs", "unexpected one-shot listener: {line}");
            assert!(line.contains("\"load\""), "one-shot listener for a repeatable event: {line}");
        }
    }
}

#[test]
fn image_errors_are_handled_on_every_attempt() {
    let fallback = source_files().into_iter().find(|file| file.name == "fallback.rs").unwrap();
    let error_listeners = fallback.content.lines().filter(|line| line.contains("\"error\"")).collect::<Vec<_>>();
    assert_eq!(error_listeners.len(), 2);
    assert!(error_listeners.iter().all(|line| line.contains("crate::dom::listen(")));
}

// =============================================================
// Test doubles
// =============================================================

/// Attribute lines directly above `item`, nearest first, skipping docs.
fn attributes_above(file: &SourceFile, item: &str) -> Vec<String> {
    let lines = file.content.lines().collect::<Vec<_>>();
    let idx = lines.iter().position(|line| line.starts_with(item)).unwrap();
    lines[..idx]
        .iter()
        .rev()
        .map(|line| line.trim())
        .filter(|line| !line.starts_with("///"))
        .take_while(|line| line.starts_with("#["))
        .map(str::to_owned)
        .collect()
}

#[test]
fn test_doubles_stay_out_of_the_cdylib() {
    let doubles = [
        ("scheduler.rs", "pub struct ManualScheduler"),
        ("scheduler.rs", "impl ManualScheduler"),
        ("scheduler.rs", "impl Scheduler for ManualScheduler"),
        ("theme.rs", "pub struct MemoryStore"),
        ("theme.rs", "impl MemoryStore"),
        ("theme.rs", "impl PreferenceStore for MemoryStore"),
    ];
    let files = source_files();
    for (name, item) in doubles {
        let file = files.iter().find(|file| file.name == name).unwrap();
        let attributes = attributes_above(file, item);
        assert!(attributes.iter().any(|attr| attr == "#[cfg(test)]"), "{name}: {item} is compiled outside tests");
    }
}

// =============================================================
// Browser build
// =============================================================

#[test]
#[ignore = "spawns a nested cargo check of the hydrate feature"]
fn hydrate_build_type_checks() {
    let target_dir = manifest_dir().join("target").join("hydrate-check");
    let output = Command::new(env!("CARGO"))
        .args(["check", "--lib", "--features", "hydrate", "--target-dir"])
        .arg(&target_dir)
        .current_dir(manifest_dir())
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
}
