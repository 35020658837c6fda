//! Validated, loaded-once knowledge base.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::domain::foundation::{ConditionKey, NodeKey, ValidationError};
use super::catalog;
use super::condition::Condition;
use super::node::QuestionNode;

/// Fatal load-time errors. Evaluation never sees a malformed base.
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("Start node '{0}' is not defined")]
    MissingStartNode(String),

    #[error("Start node '{0}' must be a branch node")]
    StartNotBranch(String),

    #[error("Node '{node}' choice '{choice}' references undefined node '{target}'")]
    DanglingReference {
        node: String,
        choice: String,
        target: String,
    },

    #[error("Duplicate node key '{0}'")]
    DuplicateNodeKey(String),

    #[error("Duplicate condition key '{0}'")]
    DuplicateConditionKey(String),

    #[error("Cycle detected through node '{0}'")]
    CycleDetected(String),

    #[error("Node '{0}' is not reachable from the start node")]
    UnreachableNode(String),

    #[error("Symptom '{symptom}' maps to undefined condition '{condition}'")]
    UnknownSymptomCondition { symptom: String, condition: String },

    #[error("Duplicate symptom label '{0}'")]
    DuplicateSymptomLabel(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Static catalog of conditions and the branching question graph.
///
/// Immutable after load. Declaration order of conditions is preserved:
/// it is the stable tie-break for equal likelihoods in ranking mode.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    conditions: Vec<Condition>,
    condition_index: HashMap<ConditionKey, usize>,
    nodes: HashMap<NodeKey, QuestionNode>,
    start: NodeKey,
    symptom_map: Vec<(String, ConditionKey)>,
}

impl KnowledgeBase {
    /// Loads and validates the builtin cattle catalog.
    ///
    /// Idempotent and side-effect-free: each call returns a fresh
    /// structure built from the same embedded data.
    ///
    /// # Errors
    ///
    /// `KnowledgeBaseError` if any structural invariant is violated.
    pub fn load() -> Result<Self, KnowledgeBaseError> {
        let (conditions, nodes, start, symptom_map) = catalog::builtin()?;
        Self::from_parts(conditions, nodes, start, symptom_map)
    }

    /// Builds a knowledge base from raw parts, validating:
    ///
    /// - condition and node keys are unique;
    /// - every branch edge and symptom-map target resolves;
    /// - the start node exists and is a branch node;
    /// - the node graph is acyclic and fully reachable from start.
    pub fn from_parts(
        conditions: Vec<Condition>,
        nodes: Vec<(NodeKey, QuestionNode)>,
        start: NodeKey,
        symptom_map: Vec<(String, ConditionKey)>,
    ) -> Result<Self, KnowledgeBaseError> {
        let mut condition_index = HashMap::new();
        for (idx, condition) in conditions.iter().enumerate() {
            if condition_index
                .insert(condition.key().clone(), idx)
                .is_some()
            {
                return Err(KnowledgeBaseError::DuplicateConditionKey(
                    condition.key().to_string(),
                ));
            }
        }

        let mut node_map = HashMap::new();
        for (key, node) in nodes {
            if node_map.insert(key.clone(), node).is_some() {
                return Err(KnowledgeBaseError::DuplicateNodeKey(key.to_string()));
            }
        }

        match node_map.get(&start) {
            None => return Err(KnowledgeBaseError::MissingStartNode(start.to_string())),
            Some(node) if node.is_terminal() => {
                return Err(KnowledgeBaseError::StartNotBranch(start.to_string()))
            }
            Some(_) => {}
        }

        for (key, node) in &node_map {
            for (choice, target) in node.choices().iter().zip(node.edges()) {
                if !node_map.contains_key(target) {
                    return Err(KnowledgeBaseError::DanglingReference {
                        node: key.to_string(),
                        choice: choice.clone(),
                        target: target.to_string(),
                    });
                }
            }
        }

        Self::check_acyclic_and_reachable(&node_map, &start)?;

        let mut seen_labels = HashSet::new();
        for (label, condition) in &symptom_map {
            if !seen_labels.insert(label.clone()) {
                return Err(KnowledgeBaseError::DuplicateSymptomLabel(label.clone()));
            }
            if !condition_index.contains_key(condition) {
                return Err(KnowledgeBaseError::UnknownSymptomCondition {
                    symptom: label.clone(),
                    condition: condition.to_string(),
                });
            }
        }

        Ok(Self {
            conditions,
            condition_index,
            nodes: node_map,
            start,
            symptom_map,
        })
    }

    /// Depth-first walk from start: rejects cycles and unreachable nodes.
    ///
    /// A shared catch-all terminal (many edges into one "unclear" node)
    /// passes; only nodes no path reaches at all are rejected.
    fn check_acyclic_and_reachable(
        nodes: &HashMap<NodeKey, QuestionNode>,
        start: &NodeKey,
    ) -> Result<(), KnowledgeBaseError> {
        let mut in_path = HashSet::new();
        let mut done = HashSet::new();
        Self::visit(nodes, start, &mut in_path, &mut done)?;

        for key in nodes.keys() {
            if !done.contains(key) {
                return Err(KnowledgeBaseError::UnreachableNode(key.to_string()));
            }
        }
        Ok(())
    }

    fn visit(
        nodes: &HashMap<NodeKey, QuestionNode>,
        key: &NodeKey,
        in_path: &mut HashSet<NodeKey>,
        done: &mut HashSet<NodeKey>,
    ) -> Result<(), KnowledgeBaseError> {
        if done.contains(key) {
            return Ok(());
        }
        if !in_path.insert(key.clone()) {
            return Err(KnowledgeBaseError::CycleDetected(key.to_string()));
        }
        // Edges were already checked to resolve before the walk.
        if let Some(node) = nodes.get(key) {
            for target in node.edges() {
                Self::visit(nodes, target, in_path, done)?;
            }
        }
        in_path.remove(key);
        done.insert(key.clone());
        Ok(())
    }

    /// All conditions in declaration order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Looks up a condition by key.
    pub fn condition(&self, key: &ConditionKey) -> Option<&Condition> {
        self.condition_index
            .get(key)
            .map(|&idx| &self.conditions[idx])
    }

    /// Looks up a question node by key.
    pub fn node(&self, key: &NodeKey) -> Option<&QuestionNode> {
        self.nodes.get(key)
    }

    /// The configured entry node of the decision tree.
    pub fn start(&self) -> &NodeKey {
        &self.start
    }

    /// Primary-symptom labels in declaration order.
    pub fn symptom_labels(&self) -> Vec<&str> {
        self.symptom_map
            .iter()
            .map(|(label, _)| label.as_str())
            .collect()
    }

    /// Resolves a primary-symptom label to its condition.
    pub fn condition_for_symptom(&self, label: &str) -> Option<&Condition> {
        self.symptom_map
            .iter()
            .find(|(l, _)| l == label)
            .and_then(|(_, key)| self.condition(key))
    }
}
