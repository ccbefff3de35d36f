// End-to-end tests for the indexing pipeline over a real directory
// tree: eligibility, heading shortcuts, shortcut file format and the
// prune phase.

mod common;

use std::fs;

use tempfile::TempDir;

use common::fixtures::{test_config, TestVault};
use mdlaunch::core::config::NamingConfig;
use mdlaunch::IndexingPipeline;

#[test]
fn indexes_curated_documents_only() {
    let vault = TestVault::small();
    let output = TempDir::new().unwrap();

    let pipeline = IndexingPipeline::new(&test_config(vault.path(), output.path())).unwrap();
    let stats = pipeline.run(true).unwrap();

    assert_eq!(stats.documents_indexed, 2);
    assert_eq!(stats.failures(), 0);

    assert!(output.path().join("Hugo - vim - cheat_vim.url").exists());
    assert!(output
        .path()
        .join("Hugo - project-tech-tips - docker - volumes.url")
        .exists());

    // Nothing from the excluded files.
    let names: Vec<String> = fs::read_dir(output.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert!(!names.iter().any(|n| n.contains("journal")));
    assert!(!names.iter().any(|n| n.contains("_index")));
    assert!(!names.iter().any(|n| n.contains("yml")));
    assert!(!names.iter().any(|n| n.contains("old")));
    assert!(!names.iter().any(|n| n.contains("notes")));
}

#[test]
fn writes_one_shortcut_per_heading_in_document_order() {
    let vault = TestVault::small();
    let output = TempDir::new().unwrap();

    let pipeline = IndexingPipeline::new(&test_config(vault.path(), output.path())).unwrap();
    let stats = pipeline.run(true).unwrap();

    assert_eq!(stats.headings_indexed, 4);
    assert_eq!(stats.shortcuts_written, 6); // 2 documents + 4 headings

    for heading in ["Vim", "Modes", "Registers"] {
        assert!(
            output
                .path()
                .join(format!("Hugo - vim - cheat_vim - {heading}.url"))
                .exists(),
            "missing heading shortcut for {heading}"
        );
    }
}

#[test]
fn shortcut_files_use_internet_shortcut_format() {
    let vault = TestVault::small();
    let output = TempDir::new().unwrap();

    let pipeline = IndexingPipeline::new(&test_config(vault.path(), output.path())).unwrap();
    pipeline.run(true).unwrap();

    let document = fs::read_to_string(output.path().join("Hugo - vim - cheat_vim.url")).unwrap();
    assert_eq!(
        document,
        "[InternetShortcut]\nURL=https://notes.example.org/vim/cheat_vim.html"
    );

    let heading =
        fs::read_to_string(output.path().join("Hugo - vim - cheat_vim - Modes.url")).unwrap();
    assert_eq!(
        heading,
        "[InternetShortcut]\nURL=https://notes.example.org/vim/cheat_vim.html#modes"
    );
}

#[test]
fn rerun_prunes_shortcuts_for_removed_documents() {
    let vault = TestVault::small();
    let output = TempDir::new().unwrap();
    let config = test_config(vault.path(), output.path());

    let pipeline = IndexingPipeline::new(&config).unwrap();
    pipeline.run(true).unwrap();
    assert!(output
        .path()
        .join("Hugo - project-tech-tips - docker - volumes.url")
        .exists());

    // Remove a source document and run again: its shortcut must go.
    fs::remove_file(vault.path().join("project-tech-tips/docker/volumes.md")).unwrap();
    let stats = IndexingPipeline::new(&config).unwrap().run(true).unwrap();

    assert!(stats.shortcuts_pruned >= 1);
    assert!(!output
        .path()
        .join("Hugo - project-tech-tips - docker - volumes.url")
        .exists());
    assert!(output.path().join("Hugo - vim - cheat_vim.url").exists());
}

#[test]
fn prune_leaves_foreign_files_alone() {
    let vault = TestVault::with_files(&[("cheat_a.md", "body\n")]);
    let output = TempDir::new().unwrap();
    fs::write(output.path().join("hand-made.url"), "mine").unwrap();
    fs::write(output.path().join("README.txt"), "mine too").unwrap();

    let pipeline = IndexingPipeline::new(&test_config(vault.path(), output.path())).unwrap();
    pipeline.run(true).unwrap();

    assert_eq!(
        fs::read_to_string(output.path().join("hand-made.url")).unwrap(),
        "mine"
    );
    assert_eq!(
        fs::read_to_string(output.path().join("README.txt")).unwrap(),
        "mine too"
    );
}

#[test]
fn custom_naming_flows_through_prune_and_write() {
    let vault = TestVault::with_files(&[("cheat_a.md", "# Top\n")]);
    let output = TempDir::new().unwrap();

    let mut config = test_config(vault.path(), output.path());
    config.naming = NamingConfig {
        file_prefix: "Site - ".to_string(),
        ..Default::default()
    };

    // A shortcut from an earlier run with the same prefix gets pruned.
    fs::write(output.path().join("Site - gone.url"), "stale").unwrap();

    let pipeline = IndexingPipeline::new(&config).unwrap();
    let stats = pipeline.run(true).unwrap();

    assert_eq!(stats.shortcuts_pruned, 1);
    assert!(!output.path().join("Site - gone.url").exists());
    assert!(output.path().join("Site - cheat_a.url").exists());
    assert!(output.path().join("Site - cheat_a - Top.url").exists());
}

#[test]
fn unreadable_document_skips_headings_but_keeps_document_shortcut() {
    let vault = TestVault::with_files(&[("cheat_good.md", "# Fine\n")]);
    // Invalid UTF-8 makes read_to_string fail for any user.
    fs::write(vault.path().join("cheat_bad.md"), [0xff, 0xfe, b'#', b' ']).unwrap();
    let output = TempDir::new().unwrap();

    let pipeline = IndexingPipeline::new(&test_config(vault.path(), output.path())).unwrap();
    let stats = pipeline.run(true).unwrap();

    assert_eq!(stats.documents_indexed, 2);
    assert_eq!(stats.read_errors, 1);
    // Only the readable document contributes headings.
    assert_eq!(stats.headings_indexed, 1);
    // The path-derived document shortcut is written regardless.
    assert!(output.path().join("Hugo - cheat_bad.url").exists());
    assert!(output.path().join("Hugo - cheat_good.url").exists());
}

#[test]
fn anchor_separator_variant_produces_pretty_urls() {
    let vault = TestVault::with_files(&[("cheat_a.md", "# Top Heading\n")]);
    let output = TempDir::new().unwrap();

    let mut config = test_config(vault.path(), output.path());
    config.naming.document_suffix = "/".to_string();
    config.naming.anchor_separator = "/#".to_string();

    let pipeline = IndexingPipeline::new(&config).unwrap();
    pipeline.run(true).unwrap();

    let heading =
        fs::read_to_string(output.path().join("Hugo - cheat_a - Top Heading.url")).unwrap();
    assert_eq!(
        heading,
        "[InternetShortcut]\nURL=https://notes.example.org/cheat_a/#top-heading"
    );
}
