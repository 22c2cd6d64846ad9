//! Hands routing trees to Graphviz.

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use clap::ValueEnum;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    tree::RoutingTree,
};

/// Graph description of `tree` in the dot language.
pub fn to_dot(tree: &RoutingTree) -> String {
    let edges = tree
        .edges
        .iter()
        .map(|labeled| format!("{}[label=\" {}\"]; ", labeled.edge, labeled.weight))
        .join("");
    format!("graph routing {{{}label=\"{}\";  }}", edges, tree.title())
}

pub trait TreeRenderer {
    fn render(&mut self, tree: &RoutingTree) -> Result<()>;
}

/// Keeps every tree in memory.
impl TreeRenderer for Vec<RoutingTree> {
    fn render(&mut self, tree: &RoutingTree) -> Result<()> {
        self.push(tree.clone());
        Ok(())
    }
}

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RendererKind {
    /// Write the description and rasterize it with `dot -Tpng`.
    Graphviz,
    /// Only write one description file per tree.
    DotOnly,
}

/// Writes the description of each tree to one shared file and runs
/// `dot -Tpng` on it, producing `<image_dir>/<file stem>.png`.
pub struct GraphvizRenderer {
    description_path: PathBuf,
    image_dir: PathBuf,
    program: String,
}

impl GraphvizRenderer {
    pub fn new(description_path: &Path, image_dir: &Path) -> GraphvizRenderer {
        GraphvizRenderer {
            description_path: description_path.to_path_buf(),
            image_dir: image_dir.to_path_buf(),
            program: "dot".to_string(),
        }
    }

    /// Uses `program` instead of `dot`; it is called with the same arguments.
    pub fn with_program(mut self, program: &str) -> GraphvizRenderer {
        self.program = program.to_string();
        self
    }

    pub fn image_path(&self, tree: &RoutingTree) -> PathBuf {
        self.image_dir.join(format!("{}.png", tree.file_stem()))
    }
}

impl TreeRenderer for GraphvizRenderer {
    fn render(&mut self, tree: &RoutingTree) -> Result<()> {
        fs::write(&self.description_path, to_dot(tree))
            .map_err(|source| Error::io(&self.description_path, source))?;

        let image_path = self.image_path(tree);
        debug!("rendering {}", image_path.display());
        let status = Command::new(&self.program)
            .arg("-Tpng")
            .arg(&self.description_path)
            .arg("-o")
            .arg(&image_path)
            .status()
            .map_err(|error| Error::Render {
                program: self.program.clone(),
                message: error.to_string(),
            })?;

        if !status.success() {
            return Err(Error::Render {
                program: self.program.clone(),
                message: format!("{} while writing {}", status, image_path.display()),
            });
        }

        Ok(())
    }
}

/// Writes `<output_dir>/<file stem>.dot` for each tree and renders nothing.
pub struct DotFileRenderer {
    output_dir: PathBuf,
}

impl DotFileRenderer {
    pub fn new(output_dir: &Path) -> DotFileRenderer {
        DotFileRenderer {
            output_dir: output_dir.to_path_buf(),
        }
    }

    pub fn description_path(&self, tree: &RoutingTree) -> PathBuf {
        self.output_dir.join(format!("{}.dot", tree.file_stem()))
    }
}

impl TreeRenderer for DotFileRenderer {
    fn render(&mut self, tree: &RoutingTree) -> Result<()> {
        let path = self.description_path(tree);
        debug!("writing {}", path.display());
        fs::write(&path, to_dot(tree)).map_err(|source| Error::io(&path, source))
    }
}
