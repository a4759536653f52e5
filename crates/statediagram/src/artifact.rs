//! Discovery of the files the model compiler leaves next to its input.

use std::path::{Path, PathBuf};

use log::debug;

use crate::fs::Filesystem;

/// Extension of the graph-description artifact.
pub const GRAPH_EXTENSION: &str = "gv";

/// Extension of the image artifact.
pub const IMAGE_EXTENSION: &str = "svg";

/// Where the artifacts for an input are expected to appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub graph_description: PathBuf,
    pub image: PathBuf,
}

impl ArtifactPaths {
    /// Derives both candidates from `input`: same directory, same file
    /// stem, artifact extension in place of the input's extension.
    pub fn for_input(input: &Path) -> Self {
        Self {
            graph_description: input.with_extension(GRAPH_EXTENSION),
            image: input.with_extension(IMAGE_EXTENSION),
        }
    }
}

/// Artifacts found on disk, each present only if the file existed when
/// checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactSet {
    pub graph_description: Option<PathBuf>,
    pub image: Option<PathBuf>,
}

impl ArtifactSet {
    /// Whether the fallback converter should run: an image is missing but a
    /// graph description is there to convert.
    pub fn needs_conversion(&self) -> bool {
        self.image.is_none() && self.graph_description.is_some()
    }
}

/// Checks which artifacts exist for `input`.
///
/// Missing artifacts are not an error here; later stages decide.
pub fn locate_artifacts(fs: &impl Filesystem, input: &Path) -> ArtifactSet {
    let ArtifactPaths {
        graph_description,
        image,
    } = ArtifactPaths::for_input(input);

    let set = ArtifactSet {
        graph_description: fs.exists(&graph_description).then_some(graph_description),
        image: fs.exists(&image).then_some(image),
    };
    debug!(
        graph_description:? = set.graph_description,
        image:? = set.image;
        "Located artifacts"
    );
    set
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::fs::LocalFilesystem;

    #[test]
    fn test_paths_share_stem_and_directory() {
        let paths = ArtifactPaths::for_input(Path::new("/models/traffic.light.ump"));
        assert_eq!(
            paths.graph_description,
            PathBuf::from("/models/traffic.light.gv")
        );
        assert_eq!(paths.image, PathBuf::from("/models/traffic.light.svg"));
    }

    #[test]
    fn test_nothing_generated() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("model.ump");
        fs::write(&input, "class A {}").unwrap();

        let set = locate_artifacts(&LocalFilesystem, &input);
        assert_eq!(set, ArtifactSet::default());
        assert!(!set.needs_conversion());
    }

    #[test]
    fn test_only_graph_description() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("model.ump");
        fs::write(dir.path().join("model.gv"), "digraph {}").unwrap();

        let set = locate_artifacts(&LocalFilesystem, &input);
        assert_eq!(set.graph_description, Some(dir.path().join("model.gv")));
        assert_eq!(set.image, None);
        assert!(set.needs_conversion());
    }

    #[test]
    fn test_both_present() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("model.ump");
        fs::write(dir.path().join("model.gv"), "digraph {}").unwrap();
        fs::write(dir.path().join("model.svg"), "<svg/>").unwrap();

        let set = locate_artifacts(&LocalFilesystem, &input);
        assert!(set.graph_description.is_some());
        assert_eq!(set.image, Some(dir.path().join("model.svg")));
        assert!(!set.needs_conversion());
    }
}
