use tree_sitter::Node;

use super::{CompositeVisitor, VisitContext, Visitor};
use crate::error::VisitResult;

/// Picks the child nodes a setter builds models for, in source order.
pub type Selector = for<'t> fn(Node<'t>) -> Vec<Node<'t>>;

/// Builds one child model per selected node and attaches it to the parent.
///
/// `create` makes the empty child (it may read the parent, e.g. for the
/// containing type name); the child composite populates it; `attach` moves it
/// into the parent.
pub struct SetterVisitor<P, C> {
    name: &'static str,
    select: Selector,
    create: fn(Node<'_>, &VisitContext<'_>, &P) -> C,
    attach: fn(&mut P, C),
    children: CompositeVisitor<C>,
}

impl<P, C> SetterVisitor<P, C> {
    pub fn new(
        name: &'static str,
        select: Selector,
        create: fn(Node<'_>, &VisitContext<'_>, &P) -> C,
        attach: fn(&mut P, C),
        children: CompositeVisitor<C>,
    ) -> Self {
        Self {
            name,
            select,
            create,
            attach,
            children,
        }
    }

    pub fn children(&self) -> &CompositeVisitor<C> {
        &self.children
    }
}

impl<P, C> Visitor<P> for SetterVisitor<P, C> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, parent: &mut P) -> VisitResult {
        for child in (self.select)(node) {
            let model = (self.create)(child, cx, parent);
            let model = self.children.fold(child, cx, model);
            (self.attach)(parent, model);
        }
        Ok(())
    }
}
