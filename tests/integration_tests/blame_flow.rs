//! The blame flow end to end against a scratch repository, with the picker
//! replaced by a scripted choice.

use std::cell::RefCell;
use std::path::Path;

use getpr::Error;
use getpr::git::{AttributionRecord, Repository};
use getpr::github::PrMatchers;
use getpr::picker::Selector;
use getpr::resolve::pull_request_url_for_line;

use crate::common::TestRepo;

/// Picks the first record whose text contains `needle`, remembering what it
/// was shown.
struct ScriptedSelector {
    needle: &'static str,
    shown: RefCell<Vec<String>>,
}

impl ScriptedSelector {
    fn new(needle: &'static str) -> Self {
        Self {
            needle,
            shown: RefCell::new(Vec::new()),
        }
    }
}

impl Selector for ScriptedSelector {
    fn select(&self, records: &[AttributionRecord]) -> anyhow::Result<usize> {
        *self.shown.borrow_mut() = records.iter().map(AttributionRecord::display).collect();
        records
            .iter()
            .position(|record| record.text.contains(self.needle))
            .ok_or_else(|| Error::SelectionAborted.into())
    }
}

fn history() -> TestRepo {
    let repo = TestRepo::with_origin();
    repo.commit_file("lib.rs", "fn one() {}\n", "Merge pull request #42 from x/one");
    repo.commit_file(
        "lib.rs",
        "fn one() {}\nfn two() {}\n",
        "Add two (#99)",
    );
    repo.commit_file(
        "lib.rs",
        "fn one() {}\nfn two() {}\nfn three() {}\n",
        "Add three without a pull request",
    );
    repo
}

fn resolve(repo: &TestRepo, selector: &ScriptedSelector) -> anyhow::Result<String> {
    pull_request_url_for_line(
        &Repository::at(repo.path()),
        Path::new("lib.rs"),
        selector,
        &PrMatchers::default(),
        "origin",
    )
}

#[test]
fn test_squash_commit_line() {
    let repo = history();
    let selector = ScriptedSelector::new("fn two");

    let url = resolve(&repo, &selector).unwrap();
    assert_eq!(url, "https://github.com/skanehira/github-blame/pull/99");

    // Last line first, each shown as "<id> <text>"
    let shown = selector.shown.borrow();
    assert_eq!(shown.len(), 3);
    assert!(shown[0].ends_with("fn three() {}"), "{shown:?}");
    assert!(shown[2].ends_with("fn one() {}"), "{shown:?}");
}

#[test]
fn test_merge_commit_line() {
    let repo = history();
    let url = resolve(&repo, &ScriptedSelector::new("fn one")).unwrap();
    assert_eq!(url, "https://github.com/skanehira/github-blame/pull/42");
}

#[test]
fn test_line_without_pull_request_names_commit_message() {
    let repo = history();
    let err = resolve(&repo, &ScriptedSelector::new("fn three")).unwrap_err();
    let Some(Error::NoPullRequestNumber { message }) = err.downcast_ref::<Error>() else {
        panic!("expected NoPullRequestNumber, got {err:?}");
    };
    assert!(
        message.ends_with("Add three without a pull request"),
        "{message}"
    );
}

#[test]
fn test_cancelled_selection() {
    let repo = history();
    let err = resolve(&repo, &ScriptedSelector::new("not in the file")).unwrap_err();
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::SelectionAborted)
    );
}

#[test]
fn test_custom_pattern() {
    let repo = TestRepo::with_origin();
    repo.commit_file("notes.txt", "hello\n", "Land [PR 5]");

    let matchers = PrMatchers::with_patterns(&[r"\[PR (\d+)\]".to_string()]).unwrap();
    let url = pull_request_url_for_line(
        &Repository::at(repo.path()),
        Path::new("notes.txt"),
        &ScriptedSelector::new("hello"),
        &matchers,
        "origin",
    )
    .unwrap();
    assert_eq!(url, "https://github.com/skanehira/github-blame/pull/5");
}
