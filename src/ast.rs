// std imports
use std::{fmt, mem};

// third-party imports
use serde::Serialize;

// ---

/// Node is a syntax tree node produced by grammar reductions.
///
/// Dropping and [`Display`](fmt::Display) formatting walk the tree with an explicit
/// stack, so they work for trees of any depth. Derived `Debug`, `PartialEq` and
/// `Serialize` recurse and are meant for trees of moderate depth.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Node {
    Number { value: u64 },
    Identifier { value: String },
    ProcedureCall { operator: Box<Node>, operands: Vec<Node> },
}

impl Node {
    #[inline]
    pub fn number(value: u64) -> Self {
        Self::Number { value }
    }

    #[inline]
    pub fn identifier(value: impl Into<String>) -> Self {
        Self::Identifier { value: value.into() }
    }

    #[inline]
    pub fn call(operator: Node, operands: impl IntoIterator<Item = Node>) -> Self {
        Self::ProcedureCall {
            operator: Box::new(operator),
            operands: operands.into_iter().collect(),
        }
    }

    /// Returns nesting depth of the node, leaf nodes have depth 1.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            if let Self::ProcedureCall { operator, operands } = node {
                stack.push((operator, depth + 1));
                stack.extend(operands.iter().map(|operand| (operand, depth + 1)));
            }
        }
        max
    }

    #[inline]
    fn is_leaf(&self) -> bool {
        !matches!(self, Self::ProcedureCall { .. })
    }

    // Moves children out, leaving the node with a leaf operator and no operands.
    fn detach_children(&mut self, stack: &mut Vec<Node>) {
        if let Self::ProcedureCall { operator, operands } = self {
            stack.push(mem::replace(&mut **operator, Node::number(0)));
            stack.append(operands);
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let nested = match self {
            Self::ProcedureCall { operator, operands } => !operator.is_leaf() || !operands.iter().all(Node::is_leaf),
            _ => false,
        };
        if !nested {
            return;
        }

        let mut stack = Vec::new();
        self.detach_children(&mut stack);
        while let Some(mut node) = stack.pop() {
            node.detach_children(&mut stack);
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut stack = vec![Piece::Node(self)];
        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Node(Self::Number { value }) => write!(f, "{}", value)?,
                Piece::Node(Self::Identifier { value }) => f.write_str(value)?,
                Piece::Node(Self::ProcedureCall { operator, operands }) => {
                    f.write_str("(")?;
                    stack.push(Piece::Close);
                    for operand in operands.iter().rev() {
                        stack.push(Piece::Node(operand));
                        stack.push(Piece::Space);
                    }
                    stack.push(Piece::Node(operator));
                }
                Piece::Space => f.write_str(" ")?,
                Piece::Close => f.write_str(")")?,
            }
        }
        Ok(())
    }
}

enum Piece<'a> {
    Node(&'a Node),
    Space,
    Close,
}
