use crate::tests::test_utils::{delegate, enumeration, extract, names};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_enum() {
        let unit = extract("enum Colors { Red, Green, Blue }");
        let colors = enumeration(&unit, "Colors");

        assert_eq!(colors.class_type, "enum");
        assert_eq!(colors.underlying_type, "int");
        assert_eq!(colors.access_modifier, "internal");
        assert_eq!(colors.base_types.len(), 1);
        assert_eq!(colors.base_types[0].entity_type.name, "System.Enum");
        assert_eq!(colors.base_types[0].kind, "class");

        let labels: Vec<&str> = colors.labels.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(labels, vec!["Red", "Green", "Blue"]);
    }

    #[test]
    fn test_flags_enum_with_underlying_type_and_label_attributes() {
        let code = r#"
using System;

namespace Security
{
    [Flags]
    public enum Perm : byte
    {
        None = 0,
        [Obsolete] Read = 1,
        Write = 2,
    }
}
"#;
        let unit = extract(code);
        let perm = enumeration(&unit, "Security.Perm");

        assert_eq!(perm.underlying_type, "byte");
        assert_eq!(perm.access_modifier, "public");
        assert_eq!(perm.containing_namespace_name, "Security");
        assert_eq!(perm.attributes[0].name, "System.FlagsAttribute");
        assert_eq!(perm.imports[0].name, "System");

        assert_eq!(perm.labels.len(), 3);
        assert!(perm.labels[0].attributes.is_empty());
        assert_eq!(perm.labels[1].name, "Read");
        assert_eq!(perm.labels[1].attributes[0].name, "System.ObsoleteAttribute");
    }

    #[test]
    fn test_nested_enum_name() {
        let unit = extract("class Shape { public enum Kind { Circle } }");
        let kind = enumeration(&unit, "Shape.Kind");
        assert_eq!(kind.containing_class_name, "Shape");
        assert_eq!(kind.access_modifier, "public");
    }

    #[test]
    fn test_generic_delegate() {
        let code = r#"
namespace Pipes
{
    public delegate TResult Mapper<in T, out TResult>(T input, int index);
}
"#;
        let unit = extract(code);
        let mapper = delegate(&unit, "Pipes.Mapper<T, TResult>");

        assert_eq!(mapper.class_type, "delegate");
        assert_eq!(mapper.access_modifier, "public");
        assert_eq!(mapper.return_value.entity_type.name, "TResult");
        assert_eq!(mapper.base_types[0].entity_type.name, "System.Delegate");

        let generics: Vec<(&str, &str)> = mapper
            .generic_parameters
            .iter()
            .map(|g| (g.name.as_str(), g.modifier.as_str()))
            .collect();
        assert_eq!(generics, vec![("T", "in"), ("TResult", "out")]);

        let parameters: Vec<&str> = mapper
            .parameters
            .iter()
            .map(|p| p.entity_type.name.as_str())
            .collect();
        assert_eq!(parameters, vec!["T", "int"]);
    }

    #[test]
    fn test_void_delegate_inside_class() {
        let unit = extract("class Bus { public delegate void Handler(string topic); }");
        let handler = delegate(&unit, "Bus.Handler");
        assert_eq!(handler.return_value.entity_type.name, "void");
        assert_eq!(handler.containing_class_name, "Bus");
    }

    #[test]
    fn test_classes_then_delegates_then_enums() {
        let unit = extract("enum E { A } class C { } delegate void D();");
        assert_eq!(names(&unit), vec!["C", "D", "E"]);
    }
}
