//! The success report emitted at the end of a run.

use std::path::PathBuf;

use serde::Serialize;

/// Record of a successful run, emitted exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    success: bool,
    input_path: PathBuf,
    output_path: PathBuf,
    #[serde(rename = "gvPath")]
    graph_description_path: Option<PathBuf>,
    #[serde(rename = "svgPath")]
    image_path: PathBuf,
}

impl Report {
    pub(crate) fn new(
        input_path: PathBuf,
        output_path: PathBuf,
        graph_description_path: Option<PathBuf>,
        image_path: PathBuf,
    ) -> Self {
        Self {
            success: true,
            input_path,
            output_path,
            graph_description_path,
            image_path,
        }
    }

    pub fn input_path(&self) -> &PathBuf {
        &self.input_path
    }

    /// Final location of the rendered diagram.
    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }

    pub fn graph_description_path(&self) -> Option<&PathBuf> {
        self.graph_description_path.as_ref()
    }

    /// The image artifact that was copied to [`Self::output_path`].
    pub fn image_path(&self) -> &PathBuf {
        &self.image_path
    }

    /// Renders the report for standard output.
    ///
    /// Plain mode is just the output path; JSON mode is the full record,
    /// pretty-printed.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails, which only happens for
    /// paths that are not valid UTF-8.
    pub fn render(&self, json: bool) -> Result<String, serde_json::Error> {
        if json {
            serde_json::to_string_pretty(self)
        } else {
            Ok(self.output_path.display().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(gv: Option<&str>) -> Report {
        Report::new(
            PathBuf::from("/d/model.ump"),
            PathBuf::from("/out/diagram.svg"),
            gv.map(PathBuf::from),
            PathBuf::from("/d/model.svg"),
        )
    }

    #[test]
    fn test_plain_is_output_path_only() {
        assert_eq!(report(None).render(false).unwrap(), "/out/diagram.svg");
    }

    #[test]
    fn test_json_field_names() {
        let rendered = report(Some("/d/model.gv")).render(true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["inputPath"], "/d/model.ump");
        assert_eq!(value["outputPath"], "/out/diagram.svg");
        assert_eq!(value["gvPath"], "/d/model.gv");
        assert_eq!(value["svgPath"], "/d/model.svg");
        assert_eq!(value.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_json_missing_graph_description_is_null() {
        let rendered = report(None).render(true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert!(value["gvPath"].is_null());
        assert!(rendered.contains("\n  \"inputPath\""));
    }
}
