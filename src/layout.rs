use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

const TEMPLATE_DIR: &str = "template/component-starter";
const COMPONENTS_DIR: &str = "components";

#[derive(Error, Debug, Diagnostic)]
pub enum LayoutError {
    #[error("unable to resolve the path of the running executable")]
    #[diagnostic(
        code(atelye::layout::executable_path),
        help("The collection root is derived from the binary's location")
    )]
    ExecutablePath {
        #[source]
        source: std::io::Error,
    },

    #[error("executable at '{path}' has no parent directory to anchor the collection")]
    #[diagnostic(
        code(atelye::layout::no_collection_root),
        help("Install the binary one level below the collection root, e.g. <root>/bin/")
    )]
    NoCollectionRoot { path: PathBuf },
}

/// Fixed directory layout of a component collection.
///
/// The template root and the components root are not configurable; both hang
/// off a single collection root that is resolved once and passed explicitly
/// through every subsequent call.
#[derive(Debug, Clone)]
pub struct Layout {
    pub root: PathBuf,
    pub template_dir: PathBuf,
    pub components_dir: PathBuf,
}
impl Layout {
    /// Anchors the layout at an explicit collection root.
    pub fn rooted_at<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();

        Layout {
            template_dir: root.join(TEMPLATE_DIR),
            components_dir: root.join(COMPONENTS_DIR),
            root,
        }
    }

    /// Resolves the collection root from the location of the running binary,
    /// so invocations behave the same from any working directory. The binary
    /// lives one level below the collection root.
    pub fn from_executable() -> Result<Self, LayoutError> {
        let exe = std::env::current_exe()
            .map_err(|error| LayoutError::ExecutablePath { source: error })?;

        let root = exe
            .parent()
            .and_then(Path::parent)
            .ok_or_else(|| LayoutError::NoCollectionRoot { path: exe.clone() })?;

        Ok(Layout::rooted_at(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_hangs_template_and_components_off_the_root() {
        let layout = Layout::rooted_at("/srv/practice");

        assert_eq!(layout.root, PathBuf::from("/srv/practice"));
        assert_eq!(
            layout.template_dir,
            PathBuf::from("/srv/practice/template/component-starter")
        );
        assert_eq!(
            layout.components_dir,
            PathBuf::from("/srv/practice/components")
        );
    }
}
