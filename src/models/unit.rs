use super::class_types::{ClassType, Metrics};
use super::types::{ImportModel, LinesOfCode};
use serde::{Deserialize, Serialize};

/// Facts of one source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CompilationUnitType {
    pub file_path: String,
    pub imports: Vec<ImportModel>,
    pub class_types: Vec<ClassType>,
    pub loc: LinesOfCode,
    pub metrics: Metrics,
}

impl CompilationUnitType {
    /// Set the unit's path and propagate it onto every contained class.
    pub fn set_file_path(&mut self, path: &str) {
        self.file_path = path.to_string();
        for class_type in &mut self.class_types {
            class_type.set_file_path(path);
        }
    }

    pub fn find_class(&self, name: &str) -> Option<&ClassType> {
        self.class_types.iter().find(|class_type| class_type.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::models::class_types::{ClassModel, EnumModel};

    #[test]
    fn test_set_file_path_propagates_to_classes() {
        let mut unit = CompilationUnitType::default();
        unit.class_types.push(ClassType::Class(ClassModel::new("class", Language::CSharp)));
        unit.class_types.push(ClassType::Enum(EnumModel::new(Language::CSharp)));

        unit.set_file_path("src/Models/User.cs");

        assert_eq!(unit.file_path, "src/Models/User.cs");
        assert!(unit
            .class_types
            .iter()
            .all(|class_type| class_type.file_path() == "src/Models/User.cs"));
    }

    #[test]
    fn test_empty_unit_serializes_without_nulls() {
        let json = serde_json::to_string(&CompilationUnitType::default()).unwrap();
        assert!(!json.contains("null"));
        assert!(json.contains("\"ClassTypes\":[]"));
    }
}
