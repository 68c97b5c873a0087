use std::fmt;

use crate::ast::Node;

/// Renders a tree as an undirected Graphviz graph.
///
/// Nodes are numbered in pre-order starting at `node0`; every node gets a
/// `label` attribute and one edge to its parent. Operator nodes are drawn as
/// ellipses, operands as boxes.
///
/// # Example
/// ```
/// use calcite::{ast::{BinaryOperator, Node}, graph::to_dot};
///
/// let tree = Node::binary(BinaryOperator::Add, Node::Int(1), Node::Int(2));
/// assert_eq!(to_dot(&tree),
///            "graph {\n\
///             \tnode0 [label=\"Binary(+)\", shape=ellipse]\n\
///             \tnode1 [label=\"Int(1)\", shape=box]\n\
///             \tnode0 -- node1\n\
///             \tnode2 [label=\"Int(2)\", shape=box]\n\
///             \tnode0 -- node2\n\
///             }\n");
/// ```
#[must_use]
pub fn to_dot(root: &Node) -> String {
    Dot(root).to_string()
}

struct Dot<'a>(&'a Node);

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "graph {{")?;
        write_node(f, self.0, None, &mut 0)?;
        writeln!(f, "}}")
    }
}

fn write_node(f: &mut fmt::Formatter<'_>,
              node: &Node,
              parent: Option<usize>,
              next_id: &mut usize)
              -> fmt::Result {
    let id = *next_id;
    *next_id += 1;

    let shape = if node.is_operator() { "ellipse" } else { "box" };
    writeln!(f, "\tnode{id} [label=\"{}\", shape={shape}]", node.label())?;
    if let Some(parent) = parent {
        writeln!(f, "\tnode{parent} -- node{id}")?;
    }

    for child in node.children() {
        write_node(f, child, Some(id), next_id)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{FunctionDef, UnaryOperator};

    #[test]
    fn numbering_is_pre_order() {
        let tree = Node::Program { statements: vec![Node::FunctionDef(FunctionDef { name:   "f".to_string(),
                                                                                 params: vec!["x".to_string()],
                                                                                 body:   Box::new(Node::Symbol("x".to_string())), }),
                                                    Node::Int(3)], };
        let dot = to_dot(&tree);
        let lines: Vec<&str> = dot.lines().collect();

        assert_eq!(lines,
                   vec!["graph {",
                        "\tnode0 [label=\"Program\", shape=box]",
                        "\tnode1 [label=\"Def(f(x))\", shape=box]",
                        "\tnode0 -- node1",
                        "\tnode2 [label=\"Symbol(x)\", shape=box]",
                        "\tnode1 -- node2",
                        "\tnode3 [label=\"Int(3)\", shape=box]",
                        "\tnode0 -- node3",
                        "}"]);
    }

    #[test]
    fn operators_are_drawn_as_ellipses() {
        let tree = Node::Assignment { target: "x".to_string(),
                                      value:  Box::new(Node::unary(UnaryOperator::Minus, Node::Int(1))), };
        let dot = to_dot(&tree);

        assert!(dot.contains("node0 [label=\"Assign(x)\", shape=ellipse]"));
        assert!(dot.contains("node1 [label=\"Unary(-)\", shape=ellipse]"));
        assert!(dot.contains("node2 [label=\"Int(1)\", shape=box]"));
    }
}
