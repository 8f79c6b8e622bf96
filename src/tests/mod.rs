// netfacts test infrastructure
//
// End-to-end extraction tests over real C# snippets. Module-level unit tests
// live next to the code they cover.

pub mod test_utils; // Parse + compile + extract helpers shared by every suite

// ============================================================================
// EXTRACTION TESTS - C# source in, fact model out
// ============================================================================
pub mod extraction {
    pub mod behavior; // Complexity, calls, field accesses, locals, local functions
    pub mod classes; // Class headers, naming, imports, attributes, base types
    pub mod enums_delegates; // Enum and delegate models, class type ordering
    pub mod members; // Fields, properties, accessors, methods, constructors
}


// ============================================================================
// PERSISTENCE TESTS - JSON round-trip through the converter lists
// ============================================================================
pub mod converter_tests;

// ============================================================================
// PROJECT TESTS - Directory loading, config, cancellation
// ============================================================================
pub mod project_tests;
