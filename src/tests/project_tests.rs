//! Directory loading: discovery, filtering, cross-file resolution and
//! cancellation.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::config::FactsConfig;
use crate::extractor::FactExtractor;
use crate::models::{ClassType, ProjectModel};
use crate::project::{CancellationToken, ProjectLoader, extract_file};

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A small shop project: two namespaces, a base class in another file, a
/// build output directory, an empty file and a broken file.
fn shop() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(
        root,
        "Core/Entity.cs",
        "namespace Shop.Core { public abstract class Entity { protected int id; } }",
    );
    write(
        root,
        "Orders/Order.cs",
        r#"
using Shop.Core;

namespace Shop.Orders
{
    public class Order : Entity
    {
        public int Key() { return id; }
    }

    public enum Status { New, Paid }
}
"#,
    );
    write(root, "Orders/Empty.cs", "   \n");
    write(root, "Orders/Broken.cs", "class {");
    write(root, "bin/Debug/Generated.cs", "class Generated { }");
    write(root, "notes.txt", "class NotCode { }");
    dir
}

fn load(root: &Path, config: FactsConfig) -> ProjectModel {
    ProjectLoader::new(config)
        .load(root, &CancellationToken::new())
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_extracts_each_source_file() {
        let dir = shop();
        let project = load(dir.path(), FactsConfig::default());

        let paths: Vec<&str> = project
            .compilation_units
            .iter()
            .map(|u| u.file_path.as_str())
            .collect();
        assert_eq!(paths, vec!["Core/Entity.cs", "Orders/Order.cs"]);

        let namespaces: Vec<(&str, Vec<&str>)> = project
            .namespaces
            .iter()
            .map(|ns| (ns.name.as_str(), ns.class_names.iter().map(String::as_str).collect()))
            .collect();
        assert_eq!(
            namespaces,
            vec![
                ("Shop.Core", vec!["Shop.Core.Entity"]),
                ("Shop.Orders", vec!["Shop.Orders.Order", "Shop.Orders.Status"]),
            ]
        );

        let order = &project.compilation_units[1].class_types[0];
        assert_eq!(order.file_path(), "Orders/Order.cs");
    }

    #[test]
    fn test_types_resolve_across_files() {
        let dir = shop();
        let project = load(dir.path(), FactsConfig::default());

        let Some(ClassType::Class(order)) = project.compilation_units[1].find_class("Shop.Orders.Order")
        else {
            panic!("Order not extracted");
        };
        assert_eq!(order.base_types[0].entity_type.name, "Shop.Core.Entity");
        assert_eq!(order.base_types[0].kind, "class");

        let access = &order.methods[0].accessed_fields[0];
        assert_eq!(access.name, "id");
        assert_eq!(access.definition_class_name, "Shop.Core.Entity");
        assert_eq!(access.location_class_name, "Shop.Orders.Order");
    }

    #[test]
    fn test_file_size_limit() {
        let dir = shop();
        let config = FactsConfig {
            max_file_size: 80,
            ..FactsConfig::default()
        };
        let files = ProjectLoader::new(config).discover_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["Entity.cs", "Broken.cs", "Empty.cs"]);
    }

    #[test]
    fn test_custom_globs() {
        let dir = shop();
        let config = FactsConfig {
            include: vec!["Core/**/*.cs".to_string()],
            exclude: Vec::new(),
            ..FactsConfig::default()
        };
        let project = load(dir.path(), config);
        assert_eq!(project.compilation_units.len(), 1);
        assert_eq!(project.compilation_units[0].file_path, "Core/Entity.cs");
    }

    #[test]
    fn test_cancelled_before_extraction() {
        let dir = shop();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let project = ProjectLoader::new(FactsConfig::default())
            .load(dir.path(), &cancel)
            .unwrap();

        assert!(project.compilation_units.is_empty());
        assert!(project.namespaces.is_empty());
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = ProjectLoader::new(FactsConfig::default())
            .load(&dir.path().join("absent"), &CancellationToken::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_single_file() {
        let dir = shop();
        let path = dir.path().join("Orders/Order.cs");

        let unit = extract_file(&path, &FactExtractor::new()).unwrap();

        assert!(unit.file_path.ends_with("Order.cs"));
        let Some(ClassType::Class(order)) = unit.find_class("Shop.Orders.Order") else {
            panic!("Order not extracted");
        };
        // Compiled alone, the base class is unknown and keeps its source text.
        assert_eq!(order.base_types[0].entity_type.name, "Entity");
        assert!(extract_file(&dir.path().join("Orders/Broken.cs"), &FactExtractor::new()).is_err());
    }
}
