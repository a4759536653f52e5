//! Fallback conversion of a graph description into an image.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use log::{debug, warn};

use crate::{artifact::IMAGE_EXTENSION, fs::Filesystem, process::ProcessRunner};

/// Image path produced for `graph_description`: its extension swapped for
/// the image extension.
pub fn converted_image_path(graph_description: &Path) -> PathBuf {
    graph_description.with_extension(IMAGE_EXTENSION)
}

/// Builds the renderer argument list: `-Tsvg <input> -o <output>`.
pub fn renderer_args(graph_description: &Path, image: &Path) -> Vec<OsString> {
    vec![
        format!("-T{IMAGE_EXTENSION}").into(),
        graph_description.as_os_str().to_os_string(),
        "-o".into(),
        image.as_os_str().to_os_string(),
    ]
}

/// Asks the graph renderer to turn `graph_description` into an image.
///
/// Returns the image path only if the renderer exits successfully and the
/// file exists afterwards. Launch failures are swallowed and reported as
/// `None`.
pub fn convert(
    runner: &impl ProcessRunner,
    fs: &impl Filesystem,
    renderer: &str,
    graph_description: &Path,
) -> Option<PathBuf> {
    let image = converted_image_path(graph_description);
    let args = renderer_args(graph_description, &image);
    debug!(renderer, image:? = image; "Converting graph description");

    match runner.run(renderer, &args) {
        Ok(output) if output.success => fs.exists(&image).then_some(image),
        Ok(output) => {
            warn!(renderer, output = output.combined(); "Graph renderer reported failure");
            None
        }
        Err(err) => {
            warn!(renderer, err:err; "Failed to launch graph renderer");
            None
        }
    }
}
