//! Aggregates above the compilation unit.

use super::unit::CompilationUnitType;
use crate::language::Language;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NamespaceModel {
    pub name: String,
    pub class_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProjectModel {
    pub name: String,
    pub file_path: String,
    pub language: Language,
    pub compilation_units: Vec<CompilationUnitType>,
    pub namespaces: Vec<NamespaceModel>,
}

impl ProjectModel {
    pub fn new(name: impl Into<String>, file_path: impl Into<String>, language: Language) -> Self {
        Self {
            name: name.into(),
            file_path: file_path.into(),
            language,
            ..Default::default()
        }
    }

    /// Append a unit and register its classes under their namespaces.
    pub fn add_compilation_unit(&mut self, unit: CompilationUnitType) {
        for class_type in &unit.class_types {
            let namespace = class_type.containing_namespace_name();
            let position = self.namespaces.iter().position(|ns| ns.name == namespace);
            let entry = match position {
                Some(index) => &mut self.namespaces[index],
                None => {
                    self.namespaces.push(NamespaceModel {
                        name: namespace.to_string(),
                        class_names: Vec::new(),
                    });
                    let last = self.namespaces.len() - 1;
                    &mut self.namespaces[last]
                }
            };
            if !entry.class_names.iter().any(|name| name == class_type.name()) {
                entry.class_names.push(class_type.name().to_string());
            }
        }
        self.compilation_units.push(unit);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SolutionModel {
    pub file_path: String,
    pub projects_paths: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RepositoryModel {
    pub version: String,
    pub solutions: Vec<SolutionModel>,
    pub projects: Vec<ProjectModel>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::class_types::{ClassModel, ClassType};

    fn class_in(namespace: &str, name: &str) -> ClassType {
        let mut model = ClassModel::new("class", Language::CSharp);
        model.name = name.to_string();
        model.containing_namespace_name = namespace.to_string();
        ClassType::Class(model)
    }

    #[test]
    fn test_namespaces_group_class_names() {
        let mut project = ProjectModel::new("App", "/src/app", Language::CSharp);
        let mut first = CompilationUnitType::default();
        first.class_types.push(class_in("App.Models", "App.Models.User"));
        first.class_types.push(class_in("App", "App.Program"));
        let mut second = CompilationUnitType::default();
        second.class_types.push(class_in("App.Models", "App.Models.Order"));
        second.class_types.push(class_in("App.Models", "App.Models.User"));

        project.add_compilation_unit(first);
        project.add_compilation_unit(second);

        assert_eq!(project.compilation_units.len(), 2);
        assert_eq!(project.namespaces.len(), 2);
        assert_eq!(project.namespaces[0].name, "App.Models");
        assert_eq!(
            project.namespaces[0].class_names,
            vec!["App.Models.User".to_string(), "App.Models.Order".to_string()]
        );
    }
}
