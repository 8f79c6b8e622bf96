//! The process-wide reference set: well-known platform types every
//! compilation can resolve against.
//!
//! The platform surface is declared as C# stubs and run through the same
//! symbol builder as user code.

use std::sync::{Arc, OnceLock};

use tracing::{debug, warn};

use super::symbols::SymbolTable;
use super::syntax_tree::create_syntactic_model;
use crate::language::Language;

const PLATFORM_STUBS: &str = r#"
namespace System
{
    public class Object
    {
        public Object();
        public virtual bool Equals(object obj);
        public virtual int GetHashCode();
        public Type GetType();
        public virtual string ToString();
    }
    public abstract class ValueType { }
    public abstract class Enum : ValueType { public bool HasFlag(Enum flag); }
    public abstract class Delegate { public object DynamicInvoke(params object[] args); }
    public abstract class MulticastDelegate : Delegate { }
    public abstract class Array { public int Length { get; } }
    public abstract class Type { public string Name { get; } public string FullName { get; } }
    public struct Void { }
    public struct Boolean { }
    public struct Byte { }
    public struct SByte { }
    public struct Char { public static bool IsDigit(char c); public static bool IsLetter(char c); }
    public struct Int16 { }
    public struct UInt16 { }
    public struct Int32 { public const int MaxValue = 2147483647; public const int MinValue = -2147483648; public static int Parse(string s); }
    public struct UInt32 { }
    public struct Int64 { public static long Parse(string s); }
    public struct UInt64 { }
    public struct IntPtr { }
    public struct UIntPtr { }
    public struct Single { }
    public struct Double { public static double Parse(string s); }
    public struct Decimal { }
    public struct DateTime { public static DateTime Now { get; } public int Year { get; } }
    public struct TimeSpan { }
    public struct Guid { public static Guid NewGuid(); }
    public struct Nullable<T> { public bool HasValue { get; } public T Value { get; } }
    public sealed class String
    {
        public static readonly string Empty;
        public int Length { get; }
        public char this[int index] { get; }
        public bool Contains(string value);
        public bool StartsWith(string value);
        public bool EndsWith(string value);
        public string Substring(int startIndex);
        public string Substring(int startIndex, int length);
        public string ToUpper();
        public string ToLower();
        public string Trim();
        public string Replace(string oldValue, string newValue);
        public string[] Split(params char[] separator);
        public int IndexOf(string value);
        public static bool IsNullOrEmpty(string value);
        public static string Format(string format, params object[] args);
        public static string Join(string separator, params string[] values);
        public static string Concat(params string[] values);
    }
    public static class Console
    {
        public static void Write(string value);
        public static void WriteLine();
        public static void WriteLine(string value);
        public static void WriteLine(string format, params object[] args);
        public static string ReadLine();
    }
    public static class Math
    {
        public const double PI = 3.14159265358979;
        public static int Abs(int value);
        public static int Max(int val1, int val2);
        public static int Min(int val1, int val2);
        public static double Sqrt(double d);
        public static double Pow(double x, double y);
    }
    public class Exception
    {
        public Exception();
        public Exception(string message);
        public virtual string Message { get; }
        public Exception InnerException { get; }
    }
    public class SystemException : Exception { public SystemException(); public SystemException(string message); }
    public class ArgumentException : SystemException { public ArgumentException(); public ArgumentException(string message); }
    public class ArgumentNullException : ArgumentException { public ArgumentNullException(); public ArgumentNullException(string paramName); }
    public class InvalidOperationException : SystemException { public InvalidOperationException(); public InvalidOperationException(string message); }
    public class NotImplementedException : SystemException { public NotImplementedException(); }
    public class NotSupportedException : SystemException { public NotSupportedException(); }
    public abstract class Attribute { }
    public sealed class SerializableAttribute : Attribute { public SerializableAttribute(); }
    public sealed class ObsoleteAttribute : Attribute { public ObsoleteAttribute(); public ObsoleteAttribute(string message); }
    public sealed class FlagsAttribute : Attribute { public FlagsAttribute(); }
    public sealed class AttributeUsageAttribute : Attribute { public AttributeUsageAttribute(AttributeTargets validOn); }
    public enum AttributeTargets { Assembly, Module, Class, Struct, Enum, Constructor, Method, Property, Field, Event, Interface, Parameter, Delegate, ReturnValue, GenericParameter, All }
    public interface IDisposable { void Dispose(); }
    public interface IComparable<T> { int CompareTo(T other); }
    public interface IEquatable<T> { bool Equals(T other); }
    public delegate void Action();
    public delegate void Action<T>(T obj);
    public delegate TResult Func<TResult>();
    public delegate TResult Func<T, TResult>(T arg);
    public delegate void EventHandler(object sender, EventArgs e);
    public class EventArgs { public static readonly EventArgs Empty; }
}

namespace System.Collections
{
    public interface IEnumerable { }
}

namespace System.Collections.Generic
{
    public interface IEnumerable<T> : System.Collections.IEnumerable { IEnumerator<T> GetEnumerator(); }
    public interface IEnumerator<T> : System.IDisposable { T Current { get; } bool MoveNext(); }
    public interface ICollection<T> : IEnumerable<T> { int Count { get; } void Add(T item); void Clear(); bool Contains(T item); bool Remove(T item); }
    public interface IList<T> : ICollection<T> { T this[int index] { get; set; } int IndexOf(T item); }
    public interface IReadOnlyList<T> : IEnumerable<T> { int Count { get; } }
    public interface IDictionary<TKey, TValue> : ICollection<KeyValuePair<TKey, TValue>> { bool ContainsKey(TKey key); bool TryGetValue(TKey key, out TValue value); }
    public struct KeyValuePair<TKey, TValue> { public TKey Key { get; } public TValue Value { get; } }
    public class List<T> : IList<T>, IReadOnlyList<T>
    {
        public List();
        public List(int capacity);
        public List(IEnumerable<T> collection);
        public int Count { get; }
        public T this[int index] { get; set; }
        public void Add(T item);
        public void AddRange(IEnumerable<T> collection);
        public void Clear();
        public bool Contains(T item);
        public bool Remove(T item);
        public int IndexOf(T item);
        public void Sort();
        public T[] ToArray();
    }
    public class Dictionary<TKey, TValue> : IDictionary<TKey, TValue>
    {
        public Dictionary();
        public int Count { get; }
        public TValue this[TKey key] { get; set; }
        public ICollection<TKey> Keys { get; }
        public ICollection<TValue> Values { get; }
        public void Add(TKey key, TValue value);
        public bool ContainsKey(TKey key);
        public bool Remove(TKey key);
        public bool TryGetValue(TKey key, out TValue value);
    }
    public class HashSet<T> : ICollection<T>
    {
        public HashSet();
        public int Count { get; }
        public bool Add(T item);
        public bool Contains(T item);
        public bool Remove(T item);
    }
    public class Queue<T> : IEnumerable<T> { public Queue(); public int Count { get; } public void Enqueue(T item); public T Dequeue(); }
    public class Stack<T> : IEnumerable<T> { public Stack(); public int Count { get; } public void Push(T item); public T Pop(); public T Peek(); }
}

namespace System.Text
{
    public sealed class StringBuilder
    {
        public StringBuilder();
        public StringBuilder(string value);
        public int Length { get; }
        public StringBuilder Append(string value);
        public StringBuilder AppendLine(string value);
        public override string ToString();
    }
}

namespace System.Threading.Tasks
{
    public class Task
    {
        public static Task CompletedTask { get; }
        public static Task Delay(int millisecondsDelay);
        public void Wait();
    }
    public class Task<TResult> : Task { public TResult Result { get; } }
}

namespace System.IO
{
    public static class File
    {
        public static bool Exists(string path);
        public static string ReadAllText(string path);
        public static void WriteAllText(string path, string contents);
    }
    public static class Path
    {
        public static string Combine(string path1, string path2);
        public static string GetFileName(string path);
        public static string GetExtension(string path);
    }
}
"#;

/// Read-only set of platform type symbols shared by every compilation.
#[derive(Debug, Clone)]
pub struct ReferenceSet {
    table: Arc<SymbolTable>,
}

impl ReferenceSet {
    /// The trusted platform references, built on first use.
    pub fn trusted() -> Arc<ReferenceSet> {
        static TRUSTED: OnceLock<Arc<ReferenceSet>> = OnceLock::new();
        TRUSTED
            .get_or_init(|| {
                let references = ReferenceSet::from_sources(&[PLATFORM_STUBS]);
                debug!(
                    "Built trusted reference set with {} types",
                    references.table.types().count()
                );
                Arc::new(references)
            })
            .clone()
    }

    pub fn empty() -> Self {
        Self {
            table: Arc::new(SymbolTable::default()),
        }
    }

    /// Reference set declared by C# stub sources. Unparseable sources are
    /// skipped with a warning.
    pub fn from_sources(sources: &[&str]) -> Self {
        let trees: Vec<_> = sources
            .iter()
            .filter_map(|source| match create_syntactic_model(source, Language::CSharp) {
                Ok(tree) => Some(tree),
                Err(e) => {
                    warn!("Skipping reference source: {}", e);
                    None
                }
            })
            .collect();
        Self {
            table: Arc::new(SymbolTable::build(None, trees.iter())),
        }
    }

    pub fn table(&self) -> Arc<SymbolTable> {
        Arc::clone(&self.table)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains(name)
    }
}

impl Default for ReferenceSet {
    fn default() -> Self {
        Self::empty()
    }
}
