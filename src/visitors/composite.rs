use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use tree_sitter::Node;

use super::{VisitContext, Visitor};
use crate::error::VisitResult;

/// Ordered visitors folded over one exclusively owned model.
pub struct CompositeVisitor<M> {
    name: &'static str,
    visitors: Vec<Box<dyn Visitor<M>>>,
}

impl<M> CompositeVisitor<M> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            visitors: Vec::new(),
        }
    }

    pub fn with<V>(mut self, visitor: V) -> Self
    where
        V: Visitor<M> + 'static,
    {
        self.visitors.push(Box::new(visitor));
        self
    }

    pub fn push(&mut self, visitor: Box<dyn Visitor<M>>) {
        self.visitors.push(visitor);
    }

    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }

    pub fn visitor_names(&self) -> Vec<&'static str> {
        self.visitors.iter().map(|v| v.name()).collect()
    }

    /// Run every visitor in order. A visitor that errors or panics is logged
    /// and skipped; the ones after it still run.
    pub fn apply(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut M) {
        for visitor in &self.visitors {
            let outcome = catch_unwind(AssertUnwindSafe(|| visitor.visit(node, cx, model)));
            let failure = match outcome {
                Ok(Ok(())) => continue,
                Ok(Err(error)) => error.to_string(),
                Err(payload) => panic_message(payload.as_ref()),
            };
            cx.logger.warn(&format!(
                "could not extract from {} because {}",
                visitor.name(),
                failure
            ));
        }
    }

    /// Owned variant of [`apply`](Self::apply).
    pub fn fold(&self, node: Node<'_>, cx: &VisitContext<'_>, mut model: M) -> M {
        self.apply(node, cx, &mut model);
        model
    }
}

impl<M> Visitor<M> for CompositeVisitor<M> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut M) -> VisitResult {
        self.apply(node, cx, model);
        Ok(())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "a panic with no message".to_string()
    }
}
