use std::collections::HashSet;

use crate::log_degraded;
use crate::model::FailureNode;

/// How a chain entry relates to the entry before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// The node the report started from
    Base,
    /// Explicitly chained (`raise ... from ...`)
    Cause,
    /// Implicitly chained (raised while handling another failure)
    Context,
}

impl Relation {
    /// Label emitted before a chained node's report
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Relation::Base => None,
            Relation::Cause => Some("[Caused by]"),
            Relation::Context => Some("[Raised while handling]"),
        }
    }
}

/// One entry of a linearized failure chain
#[derive(Debug, Clone, Copy)]
pub struct ChainLink<'a> {
    pub node: &'a FailureNode,
    pub relation: Relation,
}

/// The next node in the chain: `cause` takes precedence over `context`
pub fn next_link(node: &FailureNode) -> Option<(&FailureNode, Relation)> {
    if let Some(cause) = node.cause.as_deref() {
        Some((cause, Relation::Cause))
    } else {
        node.context
            .as_deref()
            .map(|context| (context, Relation::Context))
    }
}

/// Linearize a failure's cause/context back-pointers
///
/// Starts with `(root, Base)` and repeatedly follows `cause`, else
/// `context`, until neither is present.
///
/// # Arguments
/// * `root` - Failure the report starts from
/// * `max_depth` - Optional cap on the number of entries returned
///
/// # Returns
/// Chain entries in walk order. A node reached twice ends the walk, as does
/// reaching `max_depth`; both are logged and never reported as errors.
pub fn linearize(root: &FailureNode, max_depth: Option<usize>) -> Vec<ChainLink<'_>> {
    let mut chain = vec![ChainLink {
        node: root,
        relation: Relation::Base,
    }];
    let mut visited: HashSet<*const FailureNode> = HashSet::new();
    visited.insert(root as *const FailureNode);

    let mut current = root;
    while let Some((next, relation)) = next_link(current) {
        if max_depth.is_some_and(|max| chain.len() >= max) {
            log_degraded!("linearize", "chain depth limit reached", chain_len = chain.len());
            break;
        }

        if !visited.insert(next as *const FailureNode) {
            tracing::warn!(
                component = module_path!(),
                op = "linearize",
                chain_len = chain.len(),
                "failure chain revisits a node; stopping"
            );
            break;
        }

        chain.push(ChainLink {
            node: next,
            relation,
        });
        current = next;
    }

    chain
}
