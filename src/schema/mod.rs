pub mod compliance;
pub mod graph;
pub mod policy;
pub mod visitor;

pub use compliance::{CleanOutcome, Finding, RemovedNode, SchemaComplianceEngine, Severity};
pub use graph::{effective_type, graph_from_document, to_document, SchemaGraph, SchemaNode};
pub use policy::SchemaPolicy;
pub use visitor::{PruneStats, TreePruner};
