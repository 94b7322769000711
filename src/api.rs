use crate::{
    errors::{FileOperation, IoError},
    layout::{self, Layout},
    report, scaffold,
};
use std::fs;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum AtelyeError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Layout(#[from] layout::LayoutError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scaffold(#[from] scaffold::ScaffoldError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),
}

/// Scaffolds a new practice component named `name` from the collection's
/// starter template, then prints a tree of what was created along with
/// next-step hints.
///
/// # Errors
///
/// Returns an [`AtelyeError`] if:
///
/// - The component name is empty.
/// - The starter template directory does not exist.
/// - A component with the same name already exists.
/// - A directory or file cannot be read, created, or written to.
pub fn create_component(layout: &Layout, name: &str) -> Result<(), AtelyeError> {
    let outcome = scaffold::try_scaffold(layout, name)?;

    report::print_created_tree(&outcome.vfs, &outcome.component_dir);

    report::print_next_steps(name, &outcome.component_dir);

    Ok(())
}

/// Lists the components already present in the collection, sorted by name.
///
/// A collection without a components directory simply has no components yet,
/// so this returns an empty list rather than an error.
///
/// # Errors
///
/// Returns an [`AtelyeError`] if the components directory cannot be read.
pub fn list_components(layout: &Layout) -> Result<Vec<String>, AtelyeError> {
    let mut names = Vec::new();

    if !layout.components_dir.is_dir() {
        return Ok(names);
    }

    let entries = fs::read_dir(&layout.components_dir).map_err(|error| {
        IoError::new(FileOperation::Read, layout.components_dir.clone(), error)
    })?;

    for entry in entries {
        let entry = entry.map_err(|error| {
            IoError::new(FileOperation::Read, layout.components_dir.clone(), error)
        })?;

        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

        if is_dir {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    names.sort();

    Ok(names)
}
