use crate::vfs::{VirtualEntry, VirtualFS};
use colored::Colorize;
use std::path::Path;

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<TreeNode>,
    is_file: bool,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
        }
    }
}

fn insert(node: &mut TreeNode, components: &[String], is_file: bool) {
    let Some((head, rest)) = components.split_first() else {
        return;
    };

    let index = match node.children.iter().position(|child| child.name == *head) {
        Some(existing) => existing,
        None => {
            node.children
                .push(TreeNode::new(head.clone(), rest.is_empty() && is_file));

            node.children.len() - 1
        }
    };

    insert(&mut node.children[index], rest, is_file);
}

/// Build the directory tree from the VFS entries, returning the root node.
fn build_tree(vfs: &VirtualFS, component_dir: &Path) -> TreeNode {
    let root_name = component_dir
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| component_dir.display().to_string());

    let mut root = TreeNode::new(root_name, false);

    for entry in &vfs.entries {
        let (destination, is_file) = match entry {
            VirtualEntry::Dir { destination } => (destination, false),
            VirtualEntry::File { destination, .. } => (destination, true),
        };

        let components: Vec<String> = destination
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect();

        insert(&mut root, &components, is_file);
    }

    root
}

/// Print the tree with a nice ASCII style.
fn print_tree(node: &TreeNode, prefix: &str, is_last: bool) {
    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let name = if node.is_file {
        node.name.green()
    } else {
        node.name.blue()
    };
    println!("{}{}{}", prefix.yellow(), connector, name);

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        let last = i == len - 1;
        print_tree(child, &child_prefix, last);
    }
}

/// Prints the created component as a tree rooted at the component directory.
pub fn print_created_tree(vfs: &VirtualFS, component_dir: &Path) {
    let tree_root = build_tree(vfs, component_dir);

    println!();

    print_tree(&tree_root, "", true);
}

pub fn print_next_steps(name: &str, component_dir: &Path) {
    println!();
    println!(
        "{} {}",
        "created".green().bold(),
        component_dir.display()
    );
    println!("To start practicing:");
    println!("  1. cd components/{}", name);
    println!("  2. open index.html in your browser");
    println!("  3. start coding");
}
