//! Output planning: where each sentence's image lands
//!
//! An output spec is either a bare directory (`./output`) or a directory
//! followed by a file name template (`./output/line_{}.svg`). Every `{}`
//! in the template is replaced by the sentence's ordinal.

use std::fs;
use std::path::{Path, PathBuf};

use linesvg_core::error::{LinesvgError, Result};

/// Placeholder replaced by the zero-based ordinal
pub const INDEX_TOKEN: &str = "{}";

/// Template used when the output spec names only a directory
pub const DEFAULT_TEMPLATE: &str = "{}.svg";

const SVG_EXTENSION: &str = "svg";

/// Resolved output directory plus file name template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    directory: PathBuf,
    template: String,
}

impl OutputPlan {
    /// Split an output spec into directory and template
    ///
    /// Pure: nothing touches the filesystem until [`OutputPlan::prepare`].
    pub fn parse(spec: &str) -> Result<Self> {
        if spec.is_empty() {
            return Err(LinesvgError::Config("output path is empty".into()));
        }

        let path = Path::new(spec);
        let file_name = match path.file_name() {
            Some(name) => name
                .to_str()
                .ok_or_else(|| LinesvgError::Config("output file name is not UTF-8".into()))?,
            None => return Ok(Self::directory_only(path)),
        };

        let extension = path.extension().map(|ext| {
            ext.to_str()
                .ok_or_else(|| LinesvgError::Config("output extension is not UTF-8".into()))
        });

        let template = match extension {
            Some(ext) => {
                let ext = ext?;
                if !ext.eq_ignore_ascii_case(SVG_EXTENSION) {
                    return Err(LinesvgError::Config(format!(
                        "{} is not a valid output type, expected .svg",
                        ext
                    )));
                }
                file_name.to_string()
            }
            None if file_name.contains(INDEX_TOKEN) => {
                format!("{}.{}", file_name, SVG_EXTENSION)
            }
            None => return Ok(Self::directory_only(path)),
        };

        if !template.contains(INDEX_TOKEN) {
            log::warn!(
                "Output template '{}' has no {} placeholder; every sentence will overwrite the same file",
                template,
                INDEX_TOKEN
            );
        }

        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(Self {
            directory,
            template,
        })
    }

    fn directory_only(path: &Path) -> Self {
        Self {
            directory: path.to_path_buf(),
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Create the output directory and any missing ancestors
    pub fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.directory).map_err(|source| LinesvgError::OutputPath {
            path: self.directory.clone(),
            source,
        })?;
        log::debug!("Output directory ready: {}", self.directory.display());
        Ok(())
    }

    /// File name for an ordinal, with every placeholder substituted
    pub fn file_name(&self, ordinal: usize) -> String {
        self.template.replace(INDEX_TOKEN, &ordinal.to_string())
    }

    /// Full target path for an ordinal
    pub fn path_for(&self, ordinal: usize) -> PathBuf {
        self.directory.join(self.file_name(ordinal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_directory_uses_default_template() {
        let plan = OutputPlan::parse("./output").unwrap();
        assert_eq!(plan.directory(), Path::new("./output"));
        assert_eq!(plan.template(), DEFAULT_TEMPLATE);
        assert_eq!(plan.path_for(0), PathBuf::from("./output/0.svg"));
    }

    #[test]
    fn test_template_substitution() {
        let plan = OutputPlan::parse("out/put_any_{}_text_here.svg").unwrap();
        assert_eq!(plan.directory(), Path::new("out"));
        assert_eq!(plan.file_name(3), "put_any_3_text_here.svg");
    }

    #[test]
    fn test_every_placeholder_gets_the_ordinal() {
        let plan = OutputPlan::parse("out/{}_of_{}.svg").unwrap();
        assert_eq!(plan.file_name(7), "7_of_7.svg");
    }

    #[test]
    fn test_template_without_directory() {
        let plan = OutputPlan::parse("line_{}.svg").unwrap();
        assert_eq!(plan.directory(), Path::new("."));
        assert_eq!(plan.path_for(12), PathBuf::from("./line_12.svg"));
    }

    #[test]
    fn test_template_without_extension_gets_svg() {
        let plan = OutputPlan::parse("out/line_{}").unwrap();
        assert_eq!(plan.template(), "line_{}.svg");
    }

    #[test]
    fn test_template_without_placeholder_is_allowed() {
        let plan = OutputPlan::parse("out/same.svg").unwrap();
        assert_eq!(plan.path_for(0), plan.path_for(1));
    }

    #[test]
    fn test_distinct_ordinals_give_distinct_paths() {
        let plan = OutputPlan::parse("out").unwrap();
        let paths: std::collections::HashSet<_> = (0..100).map(|i| plan.path_for(i)).collect();
        assert_eq!(paths.len(), 100);
    }

    #[test]
    fn test_other_extensions_are_config_errors() {
        let err = OutputPlan::parse("out/line_{}.png").unwrap_err();
        assert!(matches!(err, LinesvgError::Config(_)));
        assert!(err.to_string().contains("png is not a valid output type"));
        assert!(matches!(OutputPlan::parse(""), Err(LinesvgError::Config(_))));
    }

    #[test]
    fn test_parse_does_not_touch_the_filesystem() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a/b/c");
        OutputPlan::parse(target.to_str().unwrap()).unwrap();
        assert!(!target.exists());
    }

    #[test]
    fn test_prepare_creates_ancestors_and_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a/b/c");
        let plan = OutputPlan::parse(target.to_str().unwrap()).unwrap();

        plan.prepare().unwrap();
        assert!(target.is_dir());
        plan.prepare().unwrap();
    }

    #[test]
    fn test_prepare_fails_when_a_component_is_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let plan = OutputPlan::parse(blocker.join("out").to_str().unwrap()).unwrap();
        assert!(matches!(plan.prepare(), Err(LinesvgError::OutputPath { .. })));
    }
}
