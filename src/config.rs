//! Parameters of one simulation run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    history::HistoryFormat,
    render::RendererKind,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Adjacency matrix description the graph is loaded from.
    pub input_matrix: PathBuf,
    /// Graph description handed to the renderer. Unused by
    /// [`RendererKind::DotOnly`], which writes one file per tree instead.
    pub output_file: PathBuf,
    /// Seconds to wait between two iterations.
    pub time_interval: u64,
    pub iterations: u32,
    /// Seed of the weight dynamics, fresh entropy if `None`.
    pub seed: Option<u64>,
    pub history: PathBuf,
    pub history_format: HistoryFormat,
    pub renderer: RendererKind,
    /// Directory images (or per tree descriptions) are written to.
    pub image_dir: PathBuf,
}

impl RunConfig {
    /// Config with the four required parameters and defaults for the rest.
    pub fn new(
        input_matrix: PathBuf,
        output_file: PathBuf,
        time_interval: u64,
        iterations: u32,
    ) -> RunConfig {
        RunConfig {
            input_matrix,
            output_file,
            time_interval,
            iterations,
            seed: None,
            history: PathBuf::from("history.txt"),
            history_format: HistoryFormat::Text,
            renderer: RendererKind::Graphviz,
            image_dir: PathBuf::from("."),
        }
    }

    /// Checks what can be checked before any work starts.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::config("number of iterations must be at least 1"));
        }
        if !self.input_matrix.is_file() {
            return Err(Error::config(format!(
                "input matrix {} is not a file",
                self.input_matrix.display()
            )));
        }
        if !self.image_dir.is_dir() {
            return Err(Error::config(format!(
                "image directory {} is not a directory",
                self.image_dir.display()
            )));
        }
        if self.output_file.as_os_str().is_empty() {
            return Err(Error::config("output file must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing_input() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml")
    }

    #[test]
    fn defaults() {
        let config = RunConfig::new(existing_input(), PathBuf::from("routing.dot"), 1, 2);

        assert_eq!(config.history, PathBuf::from("history.txt"));
        assert_eq!(config.history_format, HistoryFormat::Text);
        assert_eq!(config.renderer, RendererKind::Graphviz);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_iterations() {
        let config = RunConfig::new(existing_input(), PathBuf::from("routing.dot"), 1, 0);
        assert!(matches!(config.validate(), Err(Error::Config { .. })));
    }

    #[test]
    fn rejects_missing_input() {
        let config = RunConfig::new(
            PathBuf::from("/nonexistent/matrix.txt"),
            PathBuf::from("routing.dot"),
            1,
            1,
        );
        assert!(matches!(config.validate(), Err(Error::Config { .. })));
    }

    #[test]
    fn rejects_missing_image_dir() {
        let mut config = RunConfig::new(existing_input(), PathBuf::from("routing.dot"), 1, 1);
        config.image_dir = PathBuf::from("/nonexistent/images");
        assert!(matches!(config.validate(), Err(Error::Config { .. })));
    }

    #[test]
    fn serializes_to_json() {
        let config = RunConfig::new(existing_input(), PathBuf::from("routing.dot"), 3, 4);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: RunConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
    }
}
