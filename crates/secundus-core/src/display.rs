//! Textual rendering of expression trees.
//!
//! Rendering is one-directional: trees print in a prefix form
//! `(op, child, child, ...)` meant for inspection, and nothing here
//! parses that form back.

use std::fmt;

use crate::expr::{Expr, ExprNode};

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            ExprNode::Var(name) => write!(f, "{name}"),
            // A named constant always prints its name, even when it also
            // carries a value.
            ExprNode::Const {
                name: Some(name), ..
            } => write!(f, "{name}"),
            ExprNode::Const {
                value: Some(value), ..
            } => write!(f, "{value}"),
            ExprNode::Const { .. } => unreachable!("constant carries a name or a value"),
            node => {
                write!(f, "({}, ", node.op())?;
                let children = node.children();
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.node(), f)
    }
}
