use crate::tests::test_utils::{class, extract};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_one_per_declarator() {
        let code = r#"
using System;

namespace N
{
    public class Shop
    {
        private int count, total;
        public static readonly string Name = "shop";
        public event EventHandler Changed;
        int implicitlyPrivate;
    }
}
"#;
        let unit = extract(code);
        let shop = class(&unit, "N.Shop");

        let fields: Vec<&str> = shop.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(fields, vec!["count", "total", "Name", "Changed", "implicitlyPrivate"]);

        assert_eq!(shop.fields[1].entity_type.name, "int");
        assert_eq!(shop.fields[2].entity_type.name, "string");
        assert_eq!(shop.fields[2].access_modifier, "public");
        assert_eq!(shop.fields[2].modifier, "static readonly");
        assert!(shop.fields[3].is_event);
        assert_eq!(shop.fields[3].entity_type.name, "System.EventHandler");
        assert_eq!(shop.fields[4].access_modifier, "private");
        assert!(shop.fields.iter().all(|f| f.containing_type_name == "N.Shop"));
    }

    #[test]
    fn test_properties_and_accessors() {
        let code = r#"
namespace N
{
    public class Account
    {
        private int balance;
        public int Balance { get; private set; }
        public string Label => "account";
        public int this[int index] => index;
        public int Clamped
        {
            get { if (balance < 0) return 0; return balance; }
            set { balance = value; }
        }
    }
}
"#;
        let unit = extract(code);
        let account = class(&unit, "N.Account");

        let names: Vec<&str> = account.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Balance", "Label", "this[]", "Clamped"]);

        let balance = &account.properties[0];
        assert_eq!(balance.entity_type.name, "int");
        assert_eq!(balance.accessors.len(), 2);
        assert_eq!(balance.accessors[0].name, "get");
        assert_eq!(balance.accessors[0].access_modifier, "public");
        assert_eq!(balance.accessors[0].return_value.entity_type.name, "int");
        assert_eq!(balance.accessors[1].name, "set");
        assert_eq!(balance.accessors[1].access_modifier, "private");
        assert_eq!(balance.accessors[1].return_value.entity_type.name, "void");

        let label = &account.properties[1];
        assert_eq!(label.accessors.len(), 1);
        assert_eq!(label.accessors[0].name, "get");

        let clamped = &account.properties[3];
        assert_eq!(clamped.accessors[0].cyclomatic_complexity, 2);
        assert_eq!(clamped.accessors[1].cyclomatic_complexity, 1);
        assert_eq!(clamped.cyclomatic_complexity, 3);

        let setter = &clamped.accessors[1];
        assert_eq!(setter.accessed_fields.len(), 1);
        assert_eq!(setter.accessed_fields[0].name, "balance");
        assert_eq!(setter.accessed_fields[0].definition_class_name, "N.Account");
    }

    #[test]
    fn test_record_positional_parameters_become_properties() {
        let unit = extract("namespace N { public record Person(string Name, int Age); }");
        let person = class(&unit, "N.Person");
        let properties: Vec<(&str, &str, &str)> = person
            .properties
            .iter()
            .map(|p| {
                (
                    p.name.as_str(),
                    p.entity_type.name.as_str(),
                    p.access_modifier.as_str(),
                )
            })
            .collect();
        assert_eq!(
            properties,
            vec![("Name", "string", "public"), ("Age", "int", "public")]
        );
    }

    #[test]
    fn test_method_signature() {
        let code = r#"
using System.Collections.Generic;

namespace N
{
    public class Repository
    {
        public static T First<T>(List<T> items, int skip = 0) where T : class
        {
            return items[skip];
        }

        protected virtual void Save(ref int version, params string[] tags) { }

        public abstract void Flush();
    }
}
"#;
        let unit = extract(code);
        let repository = class(&unit, "N.Repository");
        assert_eq!(repository.methods.len(), 3);

        let first = &repository.methods[0];
        assert_eq!(first.name, "First");
        assert_eq!(first.access_modifier, "public");
        assert_eq!(first.modifier, "static");
        assert_eq!(first.containing_type_name, "N.Repository");
        assert_eq!(first.return_value.entity_type.name, "T");
        assert_eq!(first.generic_parameters[0].name, "T");
        assert_eq!(first.parameters.len(), 2);
        assert_eq!(
            first.parameters[0].entity_type.name,
            "System.Collections.Generic.List<T>"
        );
        assert_eq!(first.parameters[1].default_value, "0");

        let save = &repository.methods[1];
        assert_eq!(save.access_modifier, "protected");
        assert_eq!(save.modifier, "virtual");
        assert_eq!(save.return_value.entity_type.name, "void");
        assert_eq!(save.parameters[0].modifier, "ref");
        assert_eq!(save.parameters[1].modifier, "params");
        assert_eq!(save.parameters[1].entity_type.name, "string[]");

        assert_eq!(repository.methods[2].cyclomatic_complexity, 0);
    }

    #[test]
    fn test_constructors_and_destructor() {
        let code = r#"
namespace N
{
    public class Base
    {
        public Base(int seed) { }
    }

    public class Worker : Base
    {
        static Worker() { }
        public Worker() : base(42) { }
        ~Worker() { }
    }
}
"#;
        let unit = extract(code);
        let worker = class(&unit, "N.Worker");

        assert_eq!(worker.constructors.len(), 2);
        assert_eq!(worker.constructors[0].modifier, "static");
        assert_eq!(worker.constructors[0].access_modifier, "private");
        assert_eq!(worker.constructors[1].name, "Worker");

        let calls = &worker.constructors[1].called_methods;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name, "Base");
        assert_eq!(calls[0].definition_class_name, "N.Base");
        assert_eq!(calls[0].parameter_types[0].entity_type.name, "int");

        let destructor = worker.destructor.as_ref().expect("destructor");
        assert_eq!(destructor.name, "Worker");
        assert_eq!(destructor.cyclomatic_complexity, 1);

        assert!(class(&unit, "N.Base").destructor.is_none());
    }

    #[test]
    fn test_interface_members_are_public() {
        let code = "interface IStore { void Put(string key); string Name { get; } }";
        let unit = extract(code);
        let store = class(&unit, "IStore");
        assert_eq!(store.methods[0].access_modifier, "public");
        assert_eq!(store.methods[0].cyclomatic_complexity, 0);
        assert_eq!(store.properties[0].access_modifier, "public");
    }
}
