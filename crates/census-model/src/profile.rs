//! The profile tree: sections of named indicators, distributions and nested
//! groups, plus the comparative merge.

use indexmap::IndexMap;
use serde::Serialize;

use crate::distribution::Distribution;
use crate::error::{ModelError, Result};
use crate::indicator::Indicator;

/// A node of a profile section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProfileNode {
    Indicator(Indicator),
    Distribution(Distribution),
    Group(Section),
    Text(String),
}

impl ProfileNode {
    pub fn kind(&self) -> &'static str {
        match self {
            ProfileNode::Indicator(_) => "indicator",
            ProfileNode::Distribution(_) => "distribution",
            ProfileNode::Group(_) => "group",
            ProfileNode::Text(_) => "text",
        }
    }
}

impl From<Indicator> for ProfileNode {
    fn from(value: Indicator) -> Self {
        ProfileNode::Indicator(value)
    }
}

impl From<Distribution> for ProfileNode {
    fn from(value: Distribution) -> Self {
        ProfileNode::Distribution(value)
    }
}

impl From<Section> for ProfileNode {
    fn from(value: Section) -> Self {
        ProfileNode::Group(value)
    }
}

impl From<String> for ProfileNode {
    fn from(value: String) -> Self {
        ProfileNode::Text(value)
    }
}

/// Ordered mapping of indicator name to [`ProfileNode`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Section {
    nodes: IndexMap<String, ProfileNode>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<ProfileNode>) {
        self.nodes.insert(key.into(), node.into());
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, node: impl Into<ProfileNode>) -> Self {
        self.insert(key, node);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ProfileNode> {
        self.nodes.get(key)
    }

    pub fn indicator(&self, key: &str) -> Option<&Indicator> {
        match self.nodes.get(key) {
            Some(ProfileNode::Indicator(indicator)) => Some(indicator),
            _ => None,
        }
    }

    pub fn distribution(&self, key: &str) -> Option<&Distribution> {
        match self.nodes.get(key) {
            Some(ProfileNode::Distribution(distribution)) => Some(distribution),
            _ => None,
        }
    }

    pub fn distribution_mut(&mut self, key: &str) -> Option<&mut Distribution> {
        match self.nodes.get_mut(key) {
            Some(ProfileNode::Distribution(distribution)) => Some(distribution),
            _ => None,
        }
    }

    pub fn group(&self, key: &str) -> Option<&Section> {
        match self.nodes.get(key) {
            Some(ProfileNode::Group(group)) => Some(group),
            _ => None,
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.nodes.get(key) {
            Some(ProfileNode::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProfileNode)> + '_ {
        self.nodes.iter().map(|(key, node)| (key.as_str(), node))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Copies the `this` figures of `other` into every indicator and category
    /// of this section under `level`.
    ///
    /// Walks the keys of `self`; every key must exist in `other` with the same
    /// node kind. Metadata and text nodes are left untouched.
    ///
    /// # Errors
    ///
    /// [`ModelError::MissingKey`] or [`ModelError::ShapeMismatch`] naming the
    /// dotted path of the first key that does not line up.
    pub fn merge_comparative(&mut self, other: &Section, level: &str) -> Result<()> {
        merge_section(self, other, level, "")
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn merge_section(this: &mut Section, other: &Section, level: &str, prefix: &str) -> Result<()> {
    for (key, node) in &mut this.nodes {
        let path = join_path(prefix, key);
        let Some(other_node) = other.nodes.get(key) else {
            return Err(ModelError::MissingKey { path });
        };
        match (node, other_node) {
            (ProfileNode::Indicator(ours), ProfileNode::Indicator(theirs)) => {
                merge_indicator(ours, theirs, level, &path)?;
            }
            (ProfileNode::Distribution(ours), ProfileNode::Distribution(theirs)) => {
                merge_distribution(ours, theirs, level, &path)?;
            }
            (ProfileNode::Group(ours), ProfileNode::Group(theirs)) => {
                merge_section(ours, theirs, level, &path)?;
            }
            (ProfileNode::Text(_), ProfileNode::Text(_)) => {}
            (ours, theirs) => {
                return Err(ModelError::ShapeMismatch {
                    path,
                    expected: ours.kind(),
                    found: theirs.kind(),
                });
            }
        }
    }
    Ok(())
}

fn merge_indicator(ours: &mut Indicator, theirs: &Indicator, level: &str, path: &str) -> Result<()> {
    ours.values.set(level, theirs.this());
    if let Some(numerators) = ours.numerators.as_mut() {
        let Some(other) = theirs.numerators.as_ref() else {
            return Err(ModelError::MissingKey {
                path: join_path(path, "numerators"),
            });
        };
        numerators.set(level, other.this());
    }
    Ok(())
}

fn merge_distribution(
    ours: &mut Distribution,
    theirs: &Distribution,
    level: &str,
    path: &str,
) -> Result<()> {
    for (category, entry) in ours.iter_mut() {
        let Some(other) = theirs.get(category) else {
            return Err(ModelError::MissingKey {
                path: join_path(path, category),
            });
        };
        entry.values.set(level, other.values.this());
        entry.numerators.set(level, other.numerators.this());
    }
    Ok(())
}

/// A complete profile: section name → [`Section`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Profile {
    sections: IndexMap<String, Section>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_section(&mut self, name: impl Into<String>, section: Section) {
        self.sections.insert(name.into(), section);
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> + '_ {
        self.sections
            .iter()
            .map(|(name, section)| (name.as_str(), section))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
