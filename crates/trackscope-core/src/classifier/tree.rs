//! Gradient-boosted tree ensemble inference

use super::artifact::{TreeEnsembleData, TreeNodeData};
use super::GENRE_COUNT;
use crate::features::FeatureColumn;

#[derive(Debug, Clone)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        yes: usize,
        no: usize,
        missing: usize,
    },
    Leaf(f64),
}

#[derive(Debug, Clone)]
struct Tree {
    class: usize,
    nodes: Vec<Node>,
}

impl Tree {
    fn leaf_value(&self, input: &[f64]) -> f64 {
        let mut at = 0;
        loop {
            match &self.nodes[at] {
                Node::Leaf(value) => return *value,
                Node::Split {
                    feature,
                    threshold,
                    yes,
                    no,
                    missing,
                } => {
                    let value = input[*feature];
                    at = if value.is_nan() {
                        *missing
                    } else if value < *threshold {
                        *yes
                    } else {
                        *no
                    };
                }
            }
        }
    }
}

/// Compiled ensemble; every class margin starts at `base_score`
#[derive(Debug, Clone)]
pub(super) struct TreeEnsemble {
    base_score: f64,
    trees: Vec<Tree>,
}

impl TreeEnsemble {
    /// Resolve split features by name and check the node graph.
    ///
    /// Children must point forward in the node list, so every walk ends at a
    /// leaf.
    pub(super) fn compile(
        data: &TreeEnsembleData,
        inputs: &[FeatureColumn],
    ) -> std::result::Result<Self, String> {
        if data.trees.is_empty() {
            return Err("ensemble has no trees".to_string());
        }
        if !data.base_score.is_finite() {
            return Err(format!("non-finite base_score {}", data.base_score));
        }

        let mut trees = Vec::with_capacity(data.trees.len());
        for (t, tree) in data.trees.iter().enumerate() {
            if tree.class >= GENRE_COUNT {
                return Err(format!("tree {} targets unknown class {}", t, tree.class));
            }
            if tree.nodes.is_empty() {
                return Err(format!("tree {} has no nodes", t));
            }

            let mut nodes = Vec::with_capacity(tree.nodes.len());
            for (n, node) in tree.nodes.iter().enumerate() {
                nodes.push(match node {
                    TreeNodeData::Leaf { leaf } => {
                        if !leaf.is_finite() {
                            return Err(format!("tree {} node {} has non-finite leaf", t, n));
                        }
                        Node::Leaf(*leaf)
                    }
                    TreeNodeData::Split {
                        feature,
                        threshold,
                        yes,
                        no,
                        missing,
                    } => {
                        let position = inputs
                            .iter()
                            .position(|c| c.name() == feature.as_str())
                            .ok_or_else(|| {
                                format!("tree {} splits on undeclared feature {}", t, feature)
                            })?;
                        let missing = missing.unwrap_or(*yes);
                        for child in [*yes, *no, missing] {
                            if child <= n || child >= tree.nodes.len() {
                                return Err(format!(
                                    "tree {} node {} has invalid child {}",
                                    t, n, child
                                ));
                            }
                        }
                        Node::Split {
                            feature: position,
                            threshold: *threshold,
                            yes: *yes,
                            no: *no,
                            missing,
                        }
                    }
                });
            }
            trees.push(Tree {
                class: tree.class,
                nodes,
            });
        }

        Ok(TreeEnsemble {
            base_score: data.base_score,
            trees,
        })
    }

    pub(super) fn scores(&self, input: &[f64]) -> [f64; GENRE_COUNT] {
        let mut scores = [self.base_score; GENRE_COUNT];
        for tree in &self.trees {
            scores[tree.class] += tree.leaf_value(input);
        }
        scores
    }
}
