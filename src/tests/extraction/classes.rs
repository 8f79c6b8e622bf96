use crate::tests::test_utils::{class, extract, names};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_types_are_flattened_with_qualified_names() {
        let code = r#"
namespace A.B
{
    class C
    {
        class T { }
    }

    class D { }
}
"#;
        let unit = extract(code);

        assert_eq!(names(&unit), vec!["A.B.C", "A.B.C.T", "A.B.D"]);

        let nested = class(&unit, "A.B.C.T");
        assert_eq!(nested.containing_namespace_name, "A.B");
        assert_eq!(nested.containing_class_name, "A.B.C");
        assert_eq!(nested.access_modifier, "private");

        let outer = class(&unit, "A.B.C");
        assert_eq!(outer.containing_namespace_name, "A.B");
        assert_eq!(outer.containing_class_name, "");
        assert_eq!(outer.access_modifier, "internal");
    }

    #[test]
    fn test_file_scoped_namespace() {
        let code = r#"
namespace Shop.Orders;

public sealed class Order { }
"#;
        let unit = extract(code);
        let order = class(&unit, "Shop.Orders.Order");
        assert_eq!(order.containing_namespace_name, "Shop.Orders");
        assert_eq!(order.access_modifier, "public");
        assert_eq!(order.modifier, "sealed");
    }

    #[test]
    fn test_class_kinds_and_modifiers() {
        let code = r#"
namespace Geometry
{
    public abstract partial class Shape { }
    internal interface IShape { }
    public readonly struct Point { }
    public record Size(int Width, int Height);
}
"#;
        let unit = extract(code);
        let kinds: Vec<&str> = unit.class_types.iter().map(|c| c.class_type()).collect();
        assert_eq!(kinds, vec!["class", "interface", "struct", "record"]);

        let shape = class(&unit, "Geometry.Shape");
        assert_eq!(shape.access_modifier, "public");
        assert_eq!(shape.modifier, "abstract partial");
        assert_eq!(class(&unit, "Geometry.Point").modifier, "readonly");
    }

    #[test]
    fn test_generic_class_name_and_parameters() {
        let code = r#"
namespace Ns
{
    public class Box<T> where T : struct
    {
        public T Value;
    }
}
"#;
        let unit = extract(code);
        let boxed = class(&unit, "Ns.Box<T>");

        assert_eq!(boxed.generic_parameters.len(), 1);
        assert_eq!(boxed.generic_parameters[0].name, "T");
        assert_eq!(boxed.generic_parameters[0].constraints[0].name, "struct");
        assert_eq!(boxed.fields[0].entity_type.name, "T");
        assert_eq!(boxed.fields[0].containing_type_name, "Ns.Box<T>");
    }

    #[test]
    fn test_unit_and_class_imports() {
        let code = r#"
using System;
using static System.Math;
using Text = System.Text;

namespace App
{
    using System.Collections.Generic;

    class Program { }
}
"#;
        let unit = extract(code);

        let unit_imports: Vec<&str> = unit.imports.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            unit_imports,
            vec!["System", "System.Math", "System.Text", "System.Collections.Generic"]
        );
        assert!(unit.imports[1].is_static);
        assert_eq!(unit.imports[2].alias, "Text");

        let program = class(&unit, "App.Program");
        assert_eq!(program.imports.len(), 4);
    }

    #[test]
    fn test_attributes_resolve_with_suffix() {
        let code = r#"
using System;

[Serializable]
[Obsolete("use Order2")]
public class Order { }
"#;
        let unit = extract(code);
        let order = class(&unit, "Order");

        assert_eq!(order.attributes.len(), 2);
        assert_eq!(order.attributes[0].name, "System.SerializableAttribute");
        assert_eq!(order.attributes[0].target, "type");
        assert_eq!(order.attributes[1].name, "System.ObsoleteAttribute");
        assert_eq!(order.attributes[1].arguments[0].value, "\"use Order2\"");
        assert_eq!(order.attributes[1].arguments[0].entity_type.name, "string");
    }

    #[test]
    fn test_unknown_attribute_keeps_its_spelling() {
        let unit = extract("[Vendor.Tracked] class Order { }");
        assert_eq!(class(&unit, "Order").attributes[0].name, "Vendor.Tracked");
    }

    #[test]
    fn test_base_types() {
        let code = r#"
using System;

namespace Zoo
{
    public interface IFeed { }
    public class Animal { }
    public class Lion : Animal, IFeed, IDisposable { }
    public class Rock { }
}
"#;
        let unit = extract(code);

        let lion = class(&unit, "Zoo.Lion");
        let bases: Vec<(&str, &str)> = lion
            .base_types
            .iter()
            .map(|b| (b.entity_type.name.as_str(), b.kind.as_str()))
            .collect();
        assert_eq!(
            bases,
            vec![
                ("Zoo.Animal", "class"),
                ("Zoo.IFeed", "interface"),
                ("System.IDisposable", "interface"),
            ]
        );

        let rock = class(&unit, "Zoo.Rock");
        assert_eq!(rock.base_types.len(), 1);
        assert_eq!(rock.base_types[0].entity_type.name, "object");
        assert!(class(&unit, "Zoo.IFeed").base_types.is_empty());
    }

    #[test]
    fn test_loc_counts_lines() {
        let code = "class A\n{\n    // note\n\n    int x;\n}\n";
        let unit = extract(code);
        let a = class(&unit, "A");
        assert_eq!(a.loc.source_lines, 4);
        assert_eq!(a.loc.commented_lines, 1);
        assert_eq!(a.loc.empty_lines, 1);
    }
}
