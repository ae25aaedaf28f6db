use crate::graph::{Attributes, Graph};

/// Perfect `r`-ary tree of height `h`. Node `i` has children
/// `r*i + 1 ..= r*i + r`; node `0` is the root.
pub fn balanced_tree(r: usize, h: u32) -> Graph {
    let mut graph = Graph::new("balanced_tree");
    graph.add_node("0", Attributes::new());
    if r == 0 {
        return graph;
    }

    let total = if r == 1 {
        h as usize + 1
    } else {
        (r.pow(h + 1) - 1) / (r - 1)
    };

    for child in 1..total {
        let parent = (child - 1) / r;
        graph.add_edge(parent.to_string(), child.to_string(), Attributes::new());
    }
    graph
}
