//! Destination resolution and placement of the rendered image.

use std::path::{self, Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::{artifact::IMAGE_EXTENSION, error::PipelineError, fs::Filesystem};

/// Directory under the home directory used when no output path is given.
pub const DEFAULT_OUTPUT_SUBDIR: &str = "downloads";

const FILE_PREFIX: &str = "state_machine_";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Source of wall-clock time for default file names.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// [`Clock`] reading the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// File name for an output created at `now`, e.g.
/// `state_machine_20240305_070809.svg`.
///
/// Two runs within the same second produce the same name.
pub fn timestamped_file_name(now: DateTime<Utc>) -> String {
    format!(
        "{FILE_PREFIX}{}.{IMAGE_EXTENSION}",
        now.format(TIMESTAMP_FORMAT)
    )
}

/// Computes the final destination.
///
/// An explicit path is made absolute against the working directory;
/// otherwise a timestamped name inside `default_dir` is used.
///
/// # Errors
///
/// Returns [`PipelineError::Output`] if the explicit path cannot be made
/// absolute, or [`PipelineError::NoOutputDirectory`] if neither an explicit
/// path nor a default directory is available.
pub fn resolve_destination(
    explicit: Option<&Path>,
    default_dir: Option<&Path>,
    clock: &impl Clock,
) -> Result<PathBuf, PipelineError> {
    match (explicit, default_dir) {
        (Some(path), _) => path::absolute(path).map_err(|err| PipelineError::output(path, err)),
        (None, Some(dir)) => Ok(dir.join(timestamped_file_name(clock.now()))),
        (None, None) => Err(PipelineError::NoOutputDirectory),
    }
}

/// Copies `image` byte-for-byte to `destination`, creating missing parent
/// directories first.
///
/// Nothing is copied when `destination` already is `image`.
///
/// # Errors
///
/// Returns [`PipelineError::Output`] if a directory cannot be created or the
/// copy fails.
pub fn place(fs: &impl Filesystem, image: &Path, destination: &Path) -> Result<(), PipelineError> {
    if let Some(parent) = destination.parent() {
        debug!(directory:? = parent; "Ensuring output directory");
        fs.create_dir_all(parent)
            .map_err(|err| PipelineError::output(parent, err))?;
    }

    if fs.same_file(image, destination) {
        info!(destination:? = destination; "Image already at destination");
        return Ok(());
    }

    fs.copy(image, destination)
        .map_err(|err| PipelineError::output(destination, err))?;
    info!(source:? = image, destination:? = destination; "Image placed");

    Ok(())
}
