//! Every `t!("…")` key used in the crate sources must exist in every locale.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "pruftnet-ui.ftl";

fn message_ids(ftl: &str) -> BTreeSet<String> {
    ftl.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(is_id_char))
        .map(str::to_string)
        .collect()
}

fn is_id_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of `t!(` calls in `.rs` files under `dir`.
fn referenced_keys(dir: &Path, found: &mut BTreeSet<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            referenced_keys(&path, found);
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for chunk in content.split("t!(\"").skip(1) {
            if let Some((key, _)) = chunk.split_once('"') {
                if !key.is_empty() && key.chars().all(is_id_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }
}

#[test]
fn referenced_keys_exist_in_every_locale() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    let mut used = BTreeSet::new();
    referenced_keys(&crate_root.join("src"), &mut used);
    assert!(used.contains("waitlist-title"), "source scan found no keys");

    let mut report = Vec::new();
    for locale in crate::i18n::available_languages() {
        let path = crate_root.join("i18n").join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("cannot read {}: {err}", path.display()));
        let ids = message_ids(&content);

        let missing: Vec<_> = used.iter().filter(|k| !ids.contains(*k)).cloned().collect();
        if !missing.is_empty() {
            report.push(format!("{locale}: {}", missing.join(", ")));
        }
    }

    assert!(
        report.is_empty(),
        "Translation keys used in source but missing:\n  {}",
        report.join("\n  ")
    );
}
