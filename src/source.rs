use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};

use crate::node::Node;
use crate::parent::SyntaxTree;

/// A syntax tree loaded from a parser's JSON dump.
#[derive(Debug)]
pub struct SourceTree {
    /// Path of the JSON file the tree was read from.
    pub path: PathBuf,

    pub tree: SyntaxTree,
}

impl SourceTree {
    /// Read and parse a JSON syntax tree from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read syntax tree {:?}", path))?;
        Self::from_json(path, &contents)
    }

    pub fn from_json(path: &Path, json: &str) -> Result<Self> {
        let root: Node = serde_json::from_str(json)
            .with_context(|| format!("failed to parse syntax tree {:?}", path))?;

        Ok(Self {
            path: path.to_path_buf(),
            tree: SyntaxTree::new(Rc::new(root)),
        })
    }
}
