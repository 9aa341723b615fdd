//! Tree rendering
//!
//! Sources and destinations are each folded into a prefix tree of path
//! components and drawn side by side.

use std::path::{Component, Path};

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::utils::common_root;
use crate::workflow::Mapping;

use super::common::shorten_label;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// A node of an in-memory path tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathNode {
    label: String,
    children: Vec<PathNode>,
}

impl PathNode {
    fn new(label: impl Into<String>) -> Self {
        PathNode {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Builds a tree rooted at the directory shared by all `paths`
    ///
    /// Children keep the order in which they were first seen.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Self {
        let root = common_root(paths);
        let label = if root.as_os_str().is_empty() {
            ".".to_string()
        } else {
            root.display().to_string()
        };

        let mut node = PathNode::new(label);
        for path in paths {
            let path = path.as_ref();
            let relative = path.strip_prefix(&root).unwrap_or(path);
            let parts: Vec<String> = relative
                .components()
                .filter(|c| !matches!(c, Component::CurDir))
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            node.add(&parts);
        }
        node
    }

    fn add(&mut self, parts: &[String]) {
        let Some((first, rest)) = parts.split_first() else {
            return;
        };

        let index = match self.children.iter().position(|c| &c.label == first) {
            Some(index) => index,
            None => {
                self.children.push(PathNode::new(first.clone()));
                self.children.len() - 1
            }
        };

        self.children[index].add(rest);
    }

    /// Draws the tree with box-drawing characters
    pub fn render(&self) -> String {
        let mut out = shorten_label(&self.label);
        render_children(&self.children, "", &mut out);
        out
    }
}

fn render_children(children: &[PathNode], prefix: &str, out: &mut String) {
    for (index, child) in children.iter().enumerate() {
        let last = index + 1 == children.len();
        out.push('\n');
        out.push_str(prefix);
        out.push_str(if last { LAST_BRANCH } else { BRANCH });
        out.push_str(&shorten_label(&child.label));

        let child_prefix = format!("{prefix}{}", if last { SPACE } else { PIPE });
        render_children(&child.children, &child_prefix, out);
    }
}

/// Renders the mapping as a source tree next to a destination tree
pub fn render_tree(mapping: &Mapping) -> String {
    let sources = PathNode::from_paths(&mapping.sources()).render();
    let destinations = PathNode::from_paths(&mapping.destinations()).render();

    let mut builder = Builder::default();
    builder.push_record(["Source", "Destination"]);
    builder.push_record([sources, destinations]);

    builder.build().with(Style::rounded()).to_string()
}
