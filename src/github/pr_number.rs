//! Pull request numbers from commit messages.
//!
//! GitHub leaves the pull request number in the subject of the commit it
//! creates when merging: `Merge pull request #42 from owner/branch` for merge
//! commits, `Subject (#42)` for squash merges. Matchers are tried in order and
//! the first hit wins, so conventions can be added without touching callers.

use anyhow::Context;
use regex::Regex;

use crate::Error;

/// Pattern for merge commits created by the "Create a merge commit" button.
pub const MERGE_PATTERN: &str = r"Merge pull request #(\d+)";

/// Pattern for the annotation GitHub appends to squash-merged commits.
pub const SQUASH_PATTERN: &str = r"\(#(\d+)\)";

/// Extracts a pull request number from a one-line commit message.
pub trait PrNumberMatcher {
    /// Short name, used in logs.
    fn name(&self) -> &str;

    /// The pull request number as text, if the message follows this convention.
    fn find(&self, message: &str) -> Option<String>;
}

/// A matcher whose first capture group is the pull request number.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    name: String,
    pattern: Regex,
}

impl RegexMatcher {
    /// Compile `pattern`, which must contain at least one capture group.
    pub fn new(name: impl Into<String>, pattern: &str) -> anyhow::Result<Self> {
        let regex = Regex::new(pattern).with_context(|| format!("Invalid pattern: {pattern}"))?;
        if regex.captures_len() < 2 {
            anyhow::bail!("Pattern has no capture group for the pull request number: {pattern}");
        }
        Ok(Self {
            name: name.into(),
            pattern: regex,
        })
    }
}

impl PrNumberMatcher for RegexMatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn find(&self, message: &str) -> Option<String> {
        self.pattern
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

/// Ordered list of fallback matchers.
pub struct PrMatchers {
    matchers: Vec<Box<dyn PrNumberMatcher>>,
}

impl Default for PrMatchers {
    /// The GitHub conventions: merge commit first, then squash annotation.
    fn default() -> Self {
        let builtin = |name: &str, pattern: &str| -> Box<dyn PrNumberMatcher> {
            Box::new(RegexMatcher::new(name, pattern).unwrap())
        };
        Self {
            matchers: vec![
                builtin("merge", MERGE_PATTERN),
                builtin("squash", SQUASH_PATTERN),
            ],
        }
    }
}

impl PrMatchers {
    /// The built-in matchers followed by user-supplied patterns.
    pub fn with_patterns(patterns: &[String]) -> anyhow::Result<Self> {
        let mut matchers = Self::default();
        for (i, pattern) in patterns.iter().enumerate() {
            matchers.push(Box::new(RegexMatcher::new(format!("custom-{}", i + 1), pattern)?));
        }
        Ok(matchers)
    }

    /// Append a matcher; it is tried after all existing ones.
    pub fn push(&mut self, matcher: Box<dyn PrNumberMatcher>) {
        self.matchers.push(matcher);
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// The pull request number named in `message`.
    ///
    /// ```
    /// use getpr::github::PrMatchers;
    ///
    /// let matchers = PrMatchers::default();
    /// assert_eq!(matchers.pr_number("abcd123 Fix bug (#99)").unwrap(), "99");
    /// ```
    pub fn pr_number(&self, message: &str) -> Result<String, Error> {
        self.matchers
            .iter()
            .find_map(|matcher| {
                let number = matcher.find(message)?;
                log::debug!("Matched PR #{number} with {} pattern", matcher.name());
                Some(number)
            })
            .ok_or_else(|| Error::NoPullRequestNumber {
                message: message.to_string(),
            })
    }
}
