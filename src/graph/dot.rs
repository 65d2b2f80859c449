//! GraphViz export for debugging and visualization.
//!
//! The output is a presentation aid consumed by external tooling and is
//! never read back; it is structurally faithful (every node present, every
//! edge exactly once) but not promised byte-stable across versions.

use std::io::{self, Write};

use super::BipartiteGraph;

impl BipartiteGraph {
    /// Writes the graph in GraphViz `dot` syntax.
    ///
    /// Type-1 nodes render as circles named `x<id>`, type-2 nodes as boxes
    /// named `y<id>`. Each structural edge appears once, emitted from the
    /// type-1 side of its reciprocal record pair.
    pub fn write_dot<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "graph G {{")?;
        writeln!(w, "node[shape=circle,width=0.4,fixedsize=true];")?;
        for n1 in 0..self.nr1() {
            writeln!(w, "\tx{n1};")?;
        }
        writeln!(w, "node[shape=box,width=0.3,height=0.3,fixedsize=true];")?;
        for n2 in 0..self.nr2() {
            writeln!(w, "\ty{n2};")?;
        }
        for n1 in 0..self.nr1() {
            for nb in self.nb1(n1) {
                writeln!(w, "\tx{n1} -- y{};", nb.node)?;
            }
        }
        writeln!(w, "}}")
    }

    /// Renders [`write_dot`](Self::write_dot) output into a `String`.
    pub fn dot_string(&self) -> String {
        let mut buf = Vec::new();
        self.write_dot(&mut buf).expect("write to Vec<u8> cannot fail");
        String::from_utf8(buf).expect("dot output is ASCII")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_node_and_edge_appears_once() {
        let g = BipartiteGraph::from_edges(3, 2, [(0, 0), (1, 0), (2, 0), (1, 1), (2, 1)], false)
            .unwrap();
        let dot = g.dot_string();
        for n1 in 0..3 {
            assert!(dot.contains(&format!("x{n1};")));
        }
        for n2 in 0..2 {
            assert!(dot.contains(&format!("y{n2};")));
        }
        assert_eq!(dot.matches(" -- ").count(), g.nr_edges());
        assert_eq!(dot.matches("x1 -- y0;").count(), 1);
    }

    #[test]
    fn empty_graph_renders_a_bare_skeleton() {
        let g = BipartiteGraph::new();
        let dot = g.dot_string();
        assert!(dot.starts_with("graph G {"));
        assert!(dot.trim_end().ends_with('}'));
        assert_eq!(dot.matches(" -- ").count(), 0);
    }

    #[test]
    fn parallel_edges_each_get_a_line() {
        let g = BipartiteGraph::from_edges(1, 1, [(0, 0), (0, 0)], false).unwrap();
        assert_eq!(g.dot_string().matches("x0 -- y0;").count(), 2);
    }
}
