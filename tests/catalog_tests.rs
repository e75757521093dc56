// Host-side tests for the built-in project catalog.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod catalog {
    include!("../src/core/catalog.rs");
}

use catalog::PROJECTS;
use std::collections::HashSet;

#[test]
fn catalog_has_the_expected_entries() {
    assert_eq!(PROJECTS.len(), 6);
}

#[test]
fn ids_are_unique_and_non_empty() {
    let mut seen = HashSet::new();
    for project in PROJECTS {
        assert!(!project.id.is_empty());
        assert!(seen.insert(project.id), "duplicate id {}", project.id);
    }
}

#[test]
fn every_entry_is_fully_populated() {
    for project in PROJECTS {
        assert!(!project.title.is_empty(), "{}", project.id);
        assert!(!project.description.is_empty(), "{}", project.id);
        assert!(!project.tech.is_empty(), "{}", project.id);
        assert!(project.screenshot.starts_with("/projects/"), "{}", project.id);
        assert!(project.repo_url.starts_with("https://"), "{}", project.id);
    }
}
