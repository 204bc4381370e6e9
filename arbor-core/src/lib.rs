//! Arbor core library.
//!
//! Computes minimum spanning trees with two independent engines, Kruskal's
//! and Prim's, so their outputs and cost profiles can be cross-checked. Each
//! run reports the tree, its total weight, a deterministic synthetic
//! operation count, and the wall-clock time spent in the algorithm body.
//!
//! ```
//! use arbor_core::{Graph, KruskalEngine, PrimEngine};
//!
//! let graph = Graph::from_edges(3, [(0, 1, 4), (1, 2, 1), (0, 2, 2)])?;
//! let kruskal = KruskalEngine::new().calculate(&graph)?;
//! let prim = PrimEngine::new().calculate(&graph)?;
//! assert_eq!(kruskal.total_weight(), 3);
//! assert_eq!(prim.total_weight(), kruskal.total_weight());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod graph;
mod mst;

pub use crate::{
    error::{GraphError, GraphErrorCode, MstError, MstErrorCode},
    graph::{Edge, Graph, GraphBuilder, VertexId},
    mst::{
        Algorithm, DisconnectedPolicy, KruskalEngine, MstAlgorithm, MstResult, PrimEngine,
        kruskal_sort_charge,
    },
};
