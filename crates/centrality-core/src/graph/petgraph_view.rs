use petgraph::{
    EdgeType,
    graph::{Graph, IndexType, NodeIndex},
    visit::EdgeRef as _,
};

use super::{EdgeId, EdgeRef, GraphView};

impl<N, E, Ty, Ix> GraphView for Graph<N, E, Ty, Ix>
where
    N: Sync,
    E: Sync,
    Ty: EdgeType + Sync,
    Ix: IndexType + Sync,
{
    fn vertex_count(&self) -> usize {
        self.node_count()
    }

    fn edge_count(&self) -> usize {
        Self::edge_count(self)
    }

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    fn out_edges(&self, v: usize) -> impl Iterator<Item = (EdgeId, usize)> + '_ {
        let node = NodeIndex::<Ix>::new(v);
        // Undirected iteration may report an incident edge with either
        // orientation, so resolve the far endpoint explicitly.
        self.edges(node).map(move |e| {
            let other = if e.source() == node {
                e.target()
            } else {
                e.source()
            };
            (e.id().index(), other.index())
        })
    }

    fn edges(&self) -> impl Iterator<Item = EdgeRef> + '_ {
        self.edge_references().map(|e| EdgeRef {
            id: e.id().index(),
            source: e.source().index(),
            target: e.target().index(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::GraphView;
    use petgraph::graph::{DiGraph, UnGraph};

    #[test]
    fn directed_out_edges_follow_orientation() {
        let g = DiGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 0)]);
        let out: Vec<_> = g.out_edges(1).collect();
        assert_eq!(out, vec![(1, 2)]);
        assert!(GraphView::is_directed(&g));
    }

    #[test]
    fn undirected_out_edges_are_symmetric() {
        let g = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2)]);
        let mut out: Vec<_> = g.out_edges(1).collect();
        out.sort_unstable();
        assert_eq!(out, vec![(0, 0), (1, 2)]);

        let from_leaf: Vec<_> = g.out_edges(2).collect();
        assert_eq!(from_leaf, vec![(1, 1)]);
        assert!(!GraphView::is_directed(&g));
    }

    #[test]
    fn edges_report_dense_ids_and_stored_endpoints() {
        let g = DiGraph::<(), ()>::from_edges([(3, 1), (1, 2)]);
        let edges: Vec<_> = GraphView::edges(&g).map(|e| (e.id, e.source, e.target)).collect();
        assert_eq!(edges, vec![(0, 3, 1), (1, 1, 2)]);
        assert_eq!(GraphView::vertex_count(&g), 4);
        assert_eq!(GraphView::edge_count(&g), 2);
    }
}
