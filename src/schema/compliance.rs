use serde::Serialize;
use serde_json::Value;

use crate::roles::SchemaRole;
use crate::types::content_bundle::ValidationReport;

use super::graph::{effective_type, SchemaGraph};
use super::policy::SchemaPolicy;
use super::visitor::{qualified, TreePruner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

/// A top-level node dropped by `clean`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedNode {
    pub index: usize,
    pub type_name: String,
    pub reasons: Vec<String>,
}

/// `clean` output plus an account of what was lost.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanOutcome {
    pub graph: SchemaGraph,
    pub removed_nodes: Vec<RemovedNode>,
    /// Dotted paths (prefixed with the owning node's type) of stripped
    /// properties and nested objects.
    pub stripped: Vec<String>,
}

impl CleanOutcome {
    pub fn is_lossless(&self) -> bool {
        self.removed_nodes.is_empty() && self.stripped.is_empty()
    }
}

/// Validates and cleans JSON-LD graphs against a [`SchemaPolicy`].
///
/// `validate` is advisory. `clean` is stricter: any top-level node whose own
/// type draws an error or a warning is removed, then commercial keys and
/// banned nested objects are pruned from everything that remains, including
/// elements that are not objects at all. Nodes without a resolvable `@type`
/// are never removed or retyped.
#[derive(Debug, Clone, Default)]
pub struct SchemaComplianceEngine {
    policy: SchemaPolicy,
}

impl SchemaComplianceEngine {
    pub fn new(policy: SchemaPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SchemaPolicy {
        &self.policy
    }

    /// Findings for a node of type `type_name` at the top of a `role` graph.
    pub fn type_findings(&self, type_name: &str, role: SchemaRole) -> Vec<Finding> {
        let policy = &self.policy;
        let mut findings = Vec::new();

        if policy.is_prohibited(type_name) {
            findings.push(Finding {
                severity: Severity::Error,
                message: format!("Prohibited schema type found: {type_name}"),
            });
        } else if policy.is_forbidden(role, type_name) {
            findings.push(Finding {
                severity: Severity::Error,
                message: format!("{} page must not include {type_name} schema", role.label()),
            });
        } else if !policy.is_allowed(role, type_name) {
            findings.push(Finding {
                severity: Severity::Warning,
                message: format!("Schema type {type_name} is not allowed for {role} pages"),
            });
        } else if policy.is_discouraged(role, type_name) {
            findings.push(Finding {
                severity: Severity::Warning,
                message: format!("{} page should not include {type_name} schema", role.label()),
            });
        }

        findings
    }

    pub fn validate(&self, graph: &[Value], role: SchemaRole) -> ValidationReport {
        let mut report = ValidationReport::new();
        let nested = self.nested_pruner(role);

        for node in graph {
            if let Some(type_name) = effective_type(node) {
                for finding in self.type_findings(type_name, role) {
                    match finding.severity {
                        Severity::Error => report.error(finding.message),
                        Severity::Warning => report.warn(finding.message),
                    }
                }
            }

            let parent = effective_type(node).unwrap_or("untyped node");
            for (_, banned) in nested.find_banned_value(node) {
                if self.policy.is_prohibited(&banned) {
                    report.warn(format!(
                        "Nested prohibited schema type found: {banned} inside {parent}"
                    ));
                } else {
                    report.warn(format!(
                        "Nested {banned} schema inside {parent} is not permitted on {} pages",
                        role.label()
                    ));
                }
            }
        }

        report
    }

    pub fn clean(&self, graph: &[Value], role: SchemaRole) -> SchemaGraph {
        self.clean_with_report(graph, role).graph
    }

    pub fn clean_with_report(&self, graph: &[Value], role: SchemaRole) -> CleanOutcome {
        let pruner = self.nested_pruner(role);
        let mut kept = Vec::with_capacity(graph.len());
        let mut removed_nodes = Vec::new();
        let mut stripped = Vec::new();

        for (index, node) in graph.iter().enumerate() {
            if let Some(type_name) = effective_type(node) {
                let findings = self.type_findings(type_name, role);
                if !findings.is_empty() {
                    tracing::debug!(
                        index = index,
                        schema_type = type_name,
                        role = role.as_str(),
                        "Removing schema node"
                    );
                    removed_nodes.push(RemovedNode {
                        index,
                        type_name: type_name.to_string(),
                        reasons: findings.into_iter().map(|f| f.message).collect(),
                    });
                    continue;
                }
            }

            let mut node = node.clone();
            let owner = effective_type(&node).unwrap_or("untyped node").to_string();
            let stats = pruner.prune_value(&mut node);
            for key in stats.stripped_keys {
                tracing::debug!(schema_type = %owner, key = %key, "Stripped commercial key");
                stripped.push(qualified(&owner, &key));
            }
            for (path, type_name) in stats.removed_objects {
                tracing::debug!(
                    schema_type = %owner,
                    path = %path,
                    nested_type = %type_name,
                    "Removed nested schema object"
                );
                stripped.push(format!("{} ({type_name})", qualified(&owner, &path)));
            }
            kept.push(node);
        }

        if !removed_nodes.is_empty() || !stripped.is_empty() {
            tracing::info!(
                role = role.as_str(),
                removed = removed_nodes.len(),
                stripped = stripped.len(),
                kept = kept.len(),
                "Schema graph cleaned"
            );
        }

        CleanOutcome {
            graph: kept,
            removed_nodes,
            stripped,
        }
    }

    fn nested_pruner(&self, role: SchemaRole) -> TreePruner {
        TreePruner::new(
            self.policy.commercial_keys.clone(),
            self.policy.banned_nested_types(role),
        )
    }
}
