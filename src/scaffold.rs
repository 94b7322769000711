use crate::{
    errors::{FileOperation, IoError},
    layout::Layout,
    transactions::{Active, RollbackOperation, Transaction},
    vfs::VirtualFS,
};
use colored::Colorize;
use lazy_static::lazy_static;
use miette::Diagnostic;
use regex::{NoExpand, Regex};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error("I/O error while scaffolding")]
    #[diagnostic(code(atelye::scaffold::io))]
    Io(#[from] IoError),

    #[error("component name must not be empty")]
    #[diagnostic(
        code(atelye::scaffold::empty_name),
        help("Pass a component name, e.g. `atelye new 04-modal-dialog`")
    )]
    EmptyName,

    #[error("starter template not found at '{path}'")]
    #[diagnostic(
        code(atelye::scaffold::template_not_found),
        help("Make sure template/component-starter/ exists at the collection root")
    )]
    TemplateNotFound { path: PathBuf },

    #[error("component already exists: {name}")]
    #[diagnostic(
        code(atelye::scaffold::component_exists),
        help("Pick a different name or remove the existing component first")
    )]
    ComponentExists { name: String, path: PathBuf },

    #[error("unable to strip prefix from directory")]
    #[diagnostic(code(atelye::scaffold::strip_prefix))]
    StripPrefix {
        path: PathBuf,
        dir: PathBuf,
        source: std::path::StripPrefixError,
    },
}

/// File names eligible for substitution, matched exactly at any depth.
const PAGE_FILE_NAME: &str = "index.html";
const SCRIPT_FILE_NAME: &str = "script.ts";

lazy_static! {
    static ref TITLE_PLACEHOLDER: Regex =
        Regex::new(r"Component Practice").expect("a valid regex pattern");
    static ref SLOT_PLACEHOLDER: Regex =
        Regex::new(r"<!-- Your component goes here -->").expect("a valid regex pattern");
    static ref LOADED_PLACEHOLDER: Regex =
        Regex::new(r"Component loaded successfully!").expect("a valid regex pattern");
}

/// What a successful scaffold run produced: where the component landed and
/// every entry that was written.
#[derive(Debug)]
pub struct ScaffoldOutcome {
    pub component_dir: PathBuf,
    pub vfs: VirtualFS,
}

/// Replaces the page placeholders with the component name. The name is
/// inserted literally ([`NoExpand`]), so `$` carries no capture-group meaning.
fn render_page(contents: &str, name: &str) -> String {
    let titled = TITLE_PLACEHOLDER.replace_all(contents, NoExpand(name));

    let slot_comment = format!("<!-- {} component -->", name);

    SLOT_PLACEHOLDER
        .replace_all(&titled, NoExpand(slot_comment.as_str()))
        .into_owned()
}
/// Replaces the script placeholder sentence with one that embeds the
/// component name.
fn render_script(contents: &str, name: &str) -> String {
    let loaded = format!("{} loaded successfully!", name);

    LOADED_PLACEHOLDER
        .replace_all(contents, NoExpand(loaded.as_str()))
        .into_owned()
}
/// Dispatches on the exact file name; anything unrecognized passes through
/// untouched.
fn render_entry(file_name: &str, contents: String, name: &str) -> String {
    match file_name {
        PAGE_FILE_NAME => render_page(&contents, name),
        SCRIPT_FILE_NAME => render_script(&contents, name),
        _ => contents,
    }
}
/// Recursively walks the starter template and stages every directory and file
/// into a [`VirtualFS`], applying the substitution rules per file. Nothing is
/// written to disk here; a read failure aborts before the write phase starts.
fn build_vfs(template_dir: &Path, name: &str) -> Result<VirtualFS, ScaffoldError> {
    let mut vfs = VirtualFS::new();

    for entry in WalkDir::new(template_dir) {
        let entry = match entry {
            Ok(e) => e,
            Err(error) => {
                let path = error.path().unwrap_or_else(|| Path::new(""));

                Err(IoError::new(
                    FileOperation::Read,
                    path.to_path_buf(),
                    error.into(),
                ))?
            }
        };

        let full_path = entry.path();
        let relative = match full_path.strip_prefix(template_dir) {
            Ok(r) => r,
            Err(error) => Err(ScaffoldError::StripPrefix {
                path: full_path.to_path_buf(),
                dir: template_dir.to_path_buf(),
                source: error,
            })?,
        };

        // the template root itself maps onto the component root
        if relative.as_os_str().is_empty() {
            continue;
        }

        if entry.file_type().is_dir() {
            vfs.push_dir(relative.to_path_buf());
        } else {
            let contents = fs::read_to_string(full_path).map_err(|error| {
                IoError::new(FileOperation::Read, full_path.to_path_buf(), error)
            })?;

            let file_name = entry.file_name().to_string_lossy();

            let rendered = render_entry(&file_name, contents, name);

            vfs.push_file(relative.to_path_buf(), rendered);
        }
    }

    Ok(vfs)
}
/// Applies directory and file creation operations from a [`VirtualFS`].
fn apply_vfs(
    vfs: &VirtualFS,
    component_dir: &Path,
    trx: &mut Transaction<Active>,
) -> Result<(), ScaffoldError> {
    // First create all directories
    for destination in vfs.directories() {
        create_directory(trx, &component_dir.join(destination))?;
    }

    // Then create all files
    for (destination, contents) in vfs.files() {
        let final_path = component_dir.join(destination);

        // create parent if necessary
        if let Some(parent) = final_path.parent() {
            create_directory(trx, parent)?;
        }

        write_file(trx, &final_path, contents)?;
    }

    Ok(())
}
/// Scaffolds a new component named `name` from the collection's starter
/// template.
///
/// Preconditions run in full before any write: the name must be non-empty,
/// the template root must exist, and no component of the same name may exist.
/// The template is then read and rendered entirely in memory, the component
/// directory is claimed with an exclusive create (a concurrent invocation
/// racing on the same name loses here), and the staged entries are written
/// under a rollback transaction. A failure during the write phase removes
/// everything the run created.
pub fn try_scaffold(layout: &Layout, name: &str) -> Result<ScaffoldOutcome, ScaffoldError> {
    if name.trim().is_empty() {
        return Err(ScaffoldError::EmptyName);
    }

    if !layout.template_dir.is_dir() {
        return Err(ScaffoldError::TemplateNotFound {
            path: layout.template_dir.clone(),
        });
    }

    let component_dir = layout.components_dir.join(name);

    if component_dir.exists() {
        return Err(ScaffoldError::ComponentExists {
            name: name.to_string(),
            path: component_dir,
        });
    }

    log::debug!(
        "scaffolding '{}' from {}",
        name,
        layout.template_dir.display()
    );

    let vfs = build_vfs(&layout.template_dir, name)?;

    fs::create_dir_all(&layout.components_dir).map_err(|error| {
        IoError::new(FileOperation::Mkdir, layout.components_dir.clone(), error)
    })?;

    let mut trx = Transaction::<Active>::new();

    match fs::create_dir(&component_dir) {
        Ok(()) => trx.add_operation(RollbackOperation::RemoveDir(component_dir.clone())),
        Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {
            return Err(ScaffoldError::ComponentExists {
                name: name.to_string(),
                path: component_dir,
            });
        }
        Err(error) => {
            return Err(IoError::new(FileOperation::Mkdir, component_dir, error).into());
        }
    }

    apply_vfs(&vfs, &component_dir, &mut trx)?;

    trx.commit();

    Ok(ScaffoldOutcome { component_dir, vfs })
}
/// Creates all directories in the specified path if they do not exist.
///
/// This function uses [`std::fs::create_dir_all`] so it is idempotent across
/// the root call and recursive levels. It then registers a
/// [`RollbackOperation::RemoveDir`] on the provided [`Transaction`] to support
/// undoing the creation if needed.
fn create_directory(
    trx: &mut Transaction<Active>,
    path: &Path,
) -> Result<(), ScaffoldError> {
    fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    trx.add_operation(RollbackOperation::RemoveDir(path.to_path_buf()));

    Ok(())
}
/// Writes a file with the provided contents to the specified path.
///
/// After the file is created, a [`RollbackOperation::RemoveFile`] operation is
/// registered in the [`Transaction`] for potential cleanup. Additionally, this
/// function prints a message to the console indicating that the file has been
/// created.
fn write_file(
    trx: &mut Transaction<Active>,
    path: &Path,
    contents: &str,
) -> Result<(), ScaffoldError> {
    fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    let msg = format!("{} {}", "create".green(), path.display());

    println!("{}", &msg);

    trx.add_operation(RollbackOperation::RemoveFile(path.to_path_buf()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_placeholders_are_replaced_globally() {
        let template = "<title>Component Practice</title>\n\
                        <h1>Component Practice</h1>\n\
                        <main>\n  <!-- Your component goes here -->\n</main>\n";

        let rendered = render_page(template, "01-cta-button");

        assert!(!rendered.contains("Component Practice"));
        assert!(rendered.contains("<title>01-cta-button</title>"));
        assert!(rendered.contains("<h1>01-cta-button</h1>"));
        assert!(rendered.contains("<!-- 01-cta-button component -->"));
    }

    #[test]
    fn script_sentence_embeds_the_component_name() {
        let template = "console.log('Component loaded successfully!');\n";

        let rendered = render_script(template, "01-cta-button");

        assert_eq!(
            rendered,
            "console.log('01-cta-button loaded successfully!');\n"
        );
    }

    #[test]
    fn unrecognized_files_pass_through_untouched() {
        let contents = "main {\n  content: 'Component Practice';\n}\n";

        let rendered = render_entry("style.css", contents.to_string(), "01-cta-button");

        assert_eq!(rendered, contents);
    }

    #[test]
    fn names_with_dollar_signs_are_inserted_literally() {
        let rendered = render_page("<h1>Component Practice</h1>", "$pecial");

        assert_eq!(rendered, "<h1>$pecial</h1>");
    }

    #[test]
    fn templates_without_placeholders_copy_unmodified() {
        let template = "<h1>A page with its own title</h1>";

        let rendered = render_page(template, "01-cta-button");

        assert_eq!(rendered, template);
    }
}
