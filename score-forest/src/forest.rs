use core::fmt;

pub mod deserialize;

pub trait Predict {
    /// Make a prediction based on input values (features).
    ///
    /// Returns `None` when there is nothing to predict with.
    fn predict(&self, features: &[f64]) -> Option<f64>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub(crate) value: f64,
}

impl Leaf {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    /// `None` when the artifact carries no usable index. Such a split always
    /// routes right.
    pub(crate) feature_index: Option<usize>,
    pub(crate) threshold: f64,
    pub(crate) left: Option<Box<TreeNode>>,
    pub(crate) right: Option<Box<TreeNode>>,
}

impl Split {
    pub fn new(
        feature_index: usize,
        threshold: f64,
        left: Option<TreeNode>,
        right: Option<TreeNode>,
    ) -> Self {
        Self {
            feature_index: Some(feature_index),
            threshold,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn feature_index(&self) -> Option<usize> {
        self.feature_index
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }

    /// Values equal to the threshold go left. A feature that is out of range
    /// or not comparable (NaN) goes right.
    #[inline]
    pub fn goes_left(&self, features: &[f64]) -> bool {
        self.feature_index
            .and_then(|idx| features.get(idx))
            .is_some_and(|&value| value <= self.threshold)
    }

    #[inline]
    fn next(&self, features: &[f64]) -> Option<&TreeNode> {
        if self.goes_left(features) {
            self.left()
        } else {
            self.right()
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.feature_index() {
            Some(idx) => write!(f, "Split | feature: {idx}, threshold: {}", self.threshold()),
            None => write!(f, "Split | feature: none, threshold: {}", self.threshold()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    Leaf(Leaf),
    Split(Split),
}

impl TreeNode {
    pub fn leaf(value: f64) -> Self {
        Self::Leaf(Leaf::new(value))
    }

    pub fn split(
        feature_index: usize,
        threshold: f64,
        left: Option<TreeNode>,
        right: Option<TreeNode>,
    ) -> Self {
        Self::Split(Split::new(feature_index, threshold, left, right))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    pub fn is_split(&self) -> bool {
        matches!(self, Self::Split(_))
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Split(_) => None,
        }
    }

    pub fn as_split(&self) -> Option<&Split> {
        match self {
            Self::Split(split) => Some(split),
            Self::Leaf(_) => None,
        }
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeNode::Leaf(leaf) => write!(f, "Leaf  | value: {}", leaf.value()),
            TreeNode::Split(split) => write!(f, "{split}"),
        }
    }
}

/// Descend from `node` to a leaf and return its value.
///
/// A missing node reached before any leaf makes the whole descent evaluate
/// to `0.0`.
pub fn evaluate(node: Option<&TreeNode>, features: &[f64]) -> f64 {
    let mut node = node;

    while let Some(current) = node {
        match current {
            TreeNode::Leaf(leaf) => return leaf.value,
            TreeNode::Split(split) => node = split.next(features),
        }
    }

    0.0
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tree {
    root: Option<TreeNode>,
}

impl Tree {
    pub fn new(root: Option<TreeNode>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_ref()
    }

    pub fn evaluate(&self, features: &[f64]) -> f64 {
        evaluate(self.root(), features)
    }
}

/// An ensemble of regression trees whose predictions are averaged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forest {
    trees: Vec<Tree>,
}

impl Forest {
    pub fn new(trees: Vec<Tree>) -> Self {
        Self { trees }
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    pub fn stats(&self) -> ForestStats {
        let mut stats = ForestStats {
            trees: self.trees.len(),
            ..ForestStats::default()
        };

        for tree in &self.trees {
            let mut stack = vec![(tree.root(), 1usize)];

            while let Some((node, depth)) = stack.pop() {
                match node {
                    None => stats.missing += 1,
                    Some(TreeNode::Leaf(_)) => {
                        stats.leaves += 1;
                        stats.max_depth = stats.max_depth.max(depth);
                    }
                    Some(TreeNode::Split(split)) => {
                        stats.branches += 1;
                        stats.max_depth = stats.max_depth.max(depth);
                        stack.push((split.left(), depth + 1));
                        stack.push((split.right(), depth + 1));
                    }
                }
            }
        }

        stats
    }
}

impl Predict for Forest {
    fn predict(&self, features: &[f64]) -> Option<f64> {
        if self.trees.is_empty() {
            return None;
        }

        let total: f64 = self.trees.iter().map(|t| t.evaluate(features)).sum();
        Some(total / self.trees.len() as f64)
    }
}

impl fmt::Display for Forest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats();
        writeln!(
            f,
            "Forest: {} trees, {} branches, {} leaves, {} missing nodes, max depth {}\n------------",
            stats.trees, stats.branches, stats.leaves, stats.missing, stats.max_depth
        )?;
        for (i, tree) in self.trees.iter().enumerate() {
            match tree.root() {
                Some(root) => writeln!(f, "\t{i}: {root}")?,
                None => writeln!(f, "\t{i}: <missing root>")?,
            }
        }
        writeln!(f, "------------")?;
        Ok(())
    }
}

/// Node counts over a whole [`Forest`].
///
/// `missing` counts child slots (and roots) that hold no node; each of them
/// evaluates to `0.0` when reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ForestStats {
    pub trees: usize,
    pub branches: usize,
    pub leaves: usize,
    pub missing: usize,
    pub max_depth: usize,
}
