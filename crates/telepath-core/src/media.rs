//! Media - client-side resource dependencies
//!
//! Adapters declare the scripts and stylesheets the client needs before it
//! can reconstruct their objects. A packing context merges the media of
//! every adapter it applies; entries are kept in first-seen order and never
//! recorded twice.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Default stylesheet medium
pub const MEDIUM_ALL: &str = "all";

/// Script and stylesheet dependencies
#[derive(Clone, Debug, Default)]
pub struct Media {
    js: Vec<String>,
    css: BTreeMap<String, Vec<String>>,
}

impl Media {
    pub fn new() -> Self {
        Media::default()
    }

    /// Media declaring the given scripts
    pub fn with_js<I, S>(js: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut media = Media::new();
        for path in js {
            media.add_js(path);
        }
        media
    }

    /// Add stylesheets for a medium (builder form)
    pub fn css<I, S>(mut self, medium: &str, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for path in paths {
            self.add_css(medium, path);
        }
        self
    }

    /// Add a script unless already present
    pub fn add_js(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !self.js.contains(&path) {
            self.js.push(path);
        }
    }

    /// Add a stylesheet for a medium unless already present
    pub fn add_css(&mut self, medium: &str, path: impl Into<String>) {
        let path = path.into();
        let entries = self.css.entry(medium.to_string()).or_default();
        if !entries.contains(&path) {
            entries.push(path);
        }
    }

    /// Merge another media declaration into this one
    pub fn merge(&mut self, other: &Media) {
        for path in &other.js {
            self.add_js(path.clone());
        }
        for (medium, paths) in &other.css {
            for path in paths {
                self.add_css(medium, path.clone());
            }
        }
    }

    /// Scripts in first-seen order
    pub fn js(&self) -> &[String] {
        &self.js
    }

    /// Stylesheets per medium, each in first-seen order
    pub fn css_by_medium(&self) -> &BTreeMap<String, Vec<String>> {
        &self.css
    }

    /// Check whether a script or stylesheet is declared
    pub fn contains(&self, path: &str) -> bool {
        self.js.iter().any(|p| p == path) || self.css.values().flatten().any(|p| p == path)
    }

    /// Every declared asset, independent of merge order
    pub fn assets(&self) -> BTreeSet<&str> {
        self.js
            .iter()
            .chain(self.css.values().flatten())
            .map(String::as_str)
            .collect()
    }

    /// Total number of declared assets
    pub fn len(&self) -> usize {
        self.js.len() + self.css.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (medium, paths) in &self.css {
            for path in paths {
                if !first {
                    writeln!(f)?;
                }
                first = false;
                write!(
                    f,
                    "<link href=\"{}\" media=\"{}\" rel=\"stylesheet\">",
                    path, medium
                )?;
            }
        }
        for path in &self.js {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "<script src=\"{}\"></script>", path)?;
        }
        Ok(())
    }
}
