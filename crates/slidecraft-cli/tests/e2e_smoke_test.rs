use std::{fs, path::PathBuf};

use tempfile::tempdir;

use slidecraft_cli::{Args, run};

/// Collects all .toml deck files from a directory
fn collect_deck_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demo decks live at the workspace root, not in the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args_for(input: &PathBuf, output: PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_decks() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let decks = collect_deck_files(demos_path());

    assert!(!decks.is_empty(), "No demo decks found in demos/");

    let mut failed = Vec::new();

    for deck_path in &decks {
        let output_path = temp_dir.path().join(format!(
            "{}.svg",
            deck_path.file_stem().unwrap().to_string_lossy()
        ));

        match run(&args_for(deck_path, output_path.clone())) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("SVG should be written");
                assert!(svg.contains("</svg>"), "{} is incomplete", output_path.display());
            }
            Err(e) => failed.push((deck_path.clone(), e)),
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemo decks that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo deck(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_smoke_test_error_decks() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let decks = collect_deck_files(demos_path().join("errors"));

    assert!(!decks.is_empty(), "No error decks found in demos/errors/");

    let mut unexpectedly_succeeded = Vec::new();

    for deck_path in &decks {
        let output_path = temp_dir.path().join(format!(
            "error_{}.svg",
            deck_path.file_stem().unwrap().to_string_lossy()
        ));

        if run(&args_for(deck_path, output_path.clone())).is_ok() {
            unexpectedly_succeeded.push(deck_path.clone());
        } else {
            assert!(!output_path.exists(), "failed run left {}", output_path.display());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError decks that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error deck(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}
