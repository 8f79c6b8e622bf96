//! Persisted fact models read back through the converter lists.

use serde_json::json;

use crate::language::Language;
use crate::models::converter::read_class_type;
use crate::models::{ClassType, CompilationUnitType};
use crate::tests::test_utils::extract;

const SOURCE: &str = r#"
using System;
using System.Collections.Generic;

namespace Inventory
{
    public interface IStock { int Count { get; } }

    [Serializable]
    public class Warehouse : IStock
    {
        private readonly List<string> items = new List<string>();
        public int Count => items.Count;

        public void Store(string item)
        {
            if (item != null) { items.Add(item); }
        }

        ~Warehouse() { }
    }

    public enum Zone : short { Cold, Dry }

    public delegate bool Filter<T>(T item);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracted_unit_survives_json() {
        let mut unit = extract(SOURCE);
        unit.set_file_path("Inventory/Warehouse.cs");

        let json = serde_json::to_string_pretty(&unit).unwrap();
        let restored: CompilationUnitType = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, unit);
        let kinds: Vec<&str> = restored.class_types.iter().map(ClassType::class_type).collect();
        assert_eq!(kinds, vec!["interface", "class", "delegate", "enum"]);
        assert!(matches!(restored.class_types[2], ClassType::Delegate(_)));
        assert!(matches!(restored.class_types[3], ClassType::Enum(_)));
    }

    #[test]
    fn test_persisted_field_names() {
        let unit = extract(SOURCE);
        let value = serde_json::to_value(&unit).unwrap();

        let warehouse = &value["ClassTypes"][1];
        assert_eq!(warehouse["Name"], "Inventory.Warehouse");
        assert_eq!(warehouse["ClassType"], "class");
        assert_eq!(warehouse["Language"], "C#");
        assert_eq!(warehouse["Methods"][0]["CyclomaticComplexity"], 2);
        assert_eq!(value["ClassTypes"][3]["Type"], "short");
    }

    #[test]
    fn test_visual_basic_module_reads_as_class() {
        let value = json!({
            "ClassType": "module",
            "Name": "Tools.Helpers",
            "Language": "Visual Basic",
            "Methods": [{ "Name": "Trim" }]
        });

        let class_type = read_class_type(value).unwrap();

        assert_eq!(class_type.class_type(), "module");
        assert_eq!(class_type.language(), Language::VisualBasic);
        let model = class_type.as_class().unwrap();
        assert_eq!(model.name, "Tools.Helpers");
        assert_eq!(model.methods[0].name, "Trim");
    }

    #[test]
    fn test_missing_discriminator_defaults_to_class() {
        let class_type = read_class_type(json!({ "Name": "Loose" })).unwrap();
        assert_eq!(class_type.class_type(), "class");
        assert_eq!(class_type.language(), Language::CSharp);
    }
}
