use crate::models::AccessKind;
use crate::tests::test_utils::{class, extract};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_else_if_complexity() {
        let code = r#"
class Gate
{
    void Check(bool a, bool b)
    {
        if (a) { } else if (b) { }
    }

    void Empty() { }
}
"#;
        let unit = extract(code);
        let gate = class(&unit, "Gate");
        assert_eq!(gate.methods[0].cyclomatic_complexity, 3);
        assert_eq!(gate.methods[1].cyclomatic_complexity, 1);
    }

    #[test]
    fn test_complexity_counts_each_decision_point() {
        let code = r#"
class Router
{
    int Route(int code, string path)
    {
        for (int i = 0; i < code; i++) { }
        while (code > 10 && path != null) { code--; }
        try { code = int.Parse(path ?? "0"); } catch (System.Exception) { }
        switch (code)
        {
            case 1:
            case 2:
                return 1;
            default:
                return code > 0 ? 2 : 3;
        }
    }
}
"#;
        let unit = extract(code);
        // for, while, &&, ??, catch, two case labels, ternary
        assert_eq!(class(&unit, "Router").methods[0].cyclomatic_complexity, 9);
    }

    #[test]
    fn test_accessed_fields_within_declaring_class() {
        let code = r#"
namespace N
{
    class Counter
    {
        int count;

        void Increment()
        {
            count++;
            this.count = count + 1;
        }
    }
}
"#;
        let unit = extract(code);
        let accesses = &class(&unit, "N.Counter").methods[0].accessed_fields;

        let kinds: Vec<AccessKind> = accesses.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![AccessKind::Setter, AccessKind::Setter, AccessKind::Getter]
        );
        for access in accesses {
            assert_eq!(access.name, "count");
            assert_eq!(access.definition_class_name, "N.Counter");
            assert_eq!(access.location_class_name, "N.Counter");
        }
    }

    #[test]
    fn test_accessed_fields_of_other_types() {
        let code = r#"
namespace N
{
    class Settings { public int Retries; }

    class Client
    {
        Settings settings = new Settings();

        void Configure(Settings other)
        {
            settings.Retries = other.Retries;
        }
    }
}
"#;
        let unit = extract(code);
        let accesses = &class(&unit, "N.Client").methods[0].accessed_fields;
        let summary: Vec<(&str, AccessKind, &str)> = accesses
            .iter()
            .map(|a| (a.name.as_str(), a.kind, a.definition_class_name.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Retries", AccessKind::Setter, "N.Settings"),
                ("settings", AccessKind::Getter, "N.Client"),
                ("Retries", AccessKind::Getter, "N.Settings"),
            ]
        );
    }

    #[test]
    fn test_called_methods_resolve_through_references() {
        let code = r#"
using System;
using System.Collections.Generic;

namespace N
{
    class Report
    {
        List<string> lines = new List<string>();

        void Print(string title)
        {
            Console.WriteLine(title);
            lines.Add(title.ToUpper());
            Flush();
        }

        void Flush() { }
    }
}
"#;
        let unit = extract(code);
        let calls = &class(&unit, "N.Report").methods[0].called_methods;
        let summary: Vec<(&str, &str)> = calls
            .iter()
            .map(|c| (c.name.as_str(), c.definition_class_name.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("WriteLine", "System.Console"),
                ("Add", "System.Collections.Generic.List<T>"),
                ("ToUpper", "System.String"),
                ("Flush", "N.Report"),
            ]
        );
        assert_eq!(calls[0].parameter_types[0].entity_type.name, "string");
        assert!(calls.iter().all(|c| c.location_class_name == "N.Report"));
    }

    #[test]
    fn test_local_variables() {
        let code = r#"
using System.Collections.Generic;

class Parser
{
    void Run(string[] args)
    {
        var seen = new HashSet<string>();
        const int Limit = 10;
        foreach (var arg in args) { int length = arg.Length; }
    }
}
"#;
        let unit = extract(code);
        let locals: Vec<(&str, &str)> = class(&unit, "Parser").methods[0]
            .local_variables
            .iter()
            .map(|l| (l.name.as_str(), l.entity_type.name.as_str()))
            .collect();
        assert_eq!(
            locals,
            vec![
                ("seen", "System.Collections.Generic.HashSet<string>"),
                ("Limit", "int"),
                ("arg", "string"),
                ("length", "int"),
            ]
        );
    }

    #[test]
    fn test_local_functions_nest_and_stay_separate() {
        let code = r#"
namespace N
{
    class Geometry
    {
        int total;

        int Volume(int n)
        {
            int Square(int x)
            {
                int Cube(int y)
                {
                    if (y > 0) { return y * y * y; }
                    return 0;
                }
                total++;
                return x * x;
            }
            return Square(n);
        }
    }
}
"#;
        let unit = extract(code);
        let volume = &class(&unit, "N.Geometry").methods[0];

        assert_eq!(volume.cyclomatic_complexity, 1);
        assert!(volume.accessed_fields.is_empty());
        assert_eq!(volume.called_methods.len(), 1);
        assert_eq!(volume.called_methods[0].name, "Square");

        assert_eq!(volume.local_functions.len(), 1);
        let square = &volume.local_functions[0];
        assert_eq!(square.name, "Square");
        assert_eq!(square.containing_type_name, "N.Geometry");
        assert_eq!(square.return_value.entity_type.name, "int");
        assert_eq!(square.parameters[0].entity_type.name, "int");
        assert_eq!(square.accessed_fields.len(), 1);
        assert_eq!(square.accessed_fields[0].kind, AccessKind::Setter);

        assert_eq!(square.local_functions.len(), 1);
        let cube = &square.local_functions[0];
        assert_eq!(cube.name, "Cube");
        assert_eq!(cube.cyclomatic_complexity, 2);
        assert!(cube.local_functions.is_empty());
    }

    #[test]
    fn test_lambda_bodies_belong_to_the_method() {
        let code = r#"
using System;

class Events
{
    int fired;

    void Wire()
    {
        Action handler = () => { if (fired > 0) { fired = 0; } };
    }
}
"#;
        let unit = extract(code);
        let wire = &class(&unit, "Events").methods[0];
        assert_eq!(wire.cyclomatic_complexity, 2);
        assert_eq!(wire.accessed_fields.len(), 2);
        assert_eq!(wire.local_variables[0].name, "handler");
        assert_eq!(wire.local_variables[0].entity_type.name, "System.Action");
    }
}
