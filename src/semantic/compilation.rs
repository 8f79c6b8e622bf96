//! Compilations: a set of syntax trees resolved together against a shared
//! reference set.

use std::sync::Arc;

use tracing::debug;

use super::model::SemanticModel;
use super::references::ReferenceSet;
use super::symbols::SymbolTable;
use super::syntax_tree::SyntaxTree;

/// A frozen snapshot of trees plus their symbol table.
#[derive(Debug, Clone)]
pub struct Compilation {
    trees: Vec<Arc<SyntaxTree>>,
    symbols: Arc<SymbolTable>,
}

impl Compilation {
    pub fn trees(&self) -> &[Arc<SyntaxTree>] {
        &self.trees
    }

    pub fn symbols(&self) -> Arc<SymbolTable> {
        Arc::clone(&self.symbols)
    }

    pub fn semantic_model(&self, tree: &Arc<SyntaxTree>) -> SemanticModel {
        SemanticModel::new(Arc::clone(tree), self.symbols())
    }
}

/// Accumulates syntax trees and hands out semantic models.
///
/// Not meant to be shared across threads; `create_semantic_model` mutates
/// the accumulated tree list.
#[derive(Debug)]
pub struct CompilationMaker {
    references: Arc<ReferenceSet>,
    trees: Vec<Arc<SyntaxTree>>,
}

impl Default for CompilationMaker {
    fn default() -> Self {
        Self::new(ReferenceSet::trusted())
    }
}

impl CompilationMaker {
    pub fn new(references: Arc<ReferenceSet>) -> Self {
        Self {
            references,
            trees: Vec::new(),
        }
    }

    pub fn add_tree(&mut self, tree: &Arc<SyntaxTree>) {
        if !self.trees.iter().any(|t| Arc::ptr_eq(t, tree)) {
            self.trees.push(Arc::clone(tree));
        }
    }

    /// Add `tree` and return its semantic model over every tree added so far.
    pub fn create_semantic_model(&mut self, tree: &Arc<SyntaxTree>) -> SemanticModel {
        self.add_tree(tree);
        self.compilation().semantic_model(tree)
    }

    /// Snapshot of everything added so far.
    pub fn compilation(&self) -> Compilation {
        let symbols = SymbolTable::build(
            Some(self.references.table()),
            self.trees.iter().map(|t| t.as_ref()),
        );
        debug!(
            "Built compilation over {} trees with {} declared types",
            self.trees.len(),
            symbols.types().count()
        );
        Compilation {
            trees: self.trees.clone(),
            symbols: Arc::new(symbols),
        }
    }
}
