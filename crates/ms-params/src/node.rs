//! Search-space description trees.

use tracing::debug;

use crate::component::Component;
use crate::config::SearchConfig;
use crate::errors::ParamResult;
use crate::{config_error, invalid_tree};
use crate::range::{RangeScale, ValueRange};

/// One node of a search-space description.
///
/// Siblings sharing a name are alternatives for the same slot; siblings with
/// different names are independent axes that get combined.
#[derive(Debug)]
pub enum ParameterNode<'c> {
    /// Unnamed top of a tree.
    Root { children: Vec<ParameterNode<'c>> },
    /// Numeric leaf. Empty `samples` means "leave as configured".
    Value {
        name: String,
        range: Option<ValueRange>,
        samples: Vec<f64>,
    },
    /// A borrowed component template plus the tree of its own parameters.
    ComponentRef {
        name: String,
        component: &'c dyn Component,
        children: Vec<ParameterNode<'c>>,
    },
}

impl<'c> ParameterNode<'c> {
    pub fn root() -> Self {
        Self::Root {
            children: Vec::new(),
        }
    }

    pub fn value(name: impl Into<String>) -> Self {
        Self::Value {
            name: name.into(),
            range: None,
            samples: Vec::new(),
        }
    }

    pub fn component(name: impl Into<String>, component: &'c dyn Component) -> Self {
        Self::ComponentRef {
            name: name.into(),
            component,
            children: Vec::new(),
        }
    }

    /// Node name; `None` for the root.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Root { .. } => None,
            Self::Value { name, .. } | Self::ComponentRef { name, .. } => Some(name),
        }
    }

    pub fn children(&self) -> &[ParameterNode<'c>] {
        match self {
            Self::Root { children } | Self::ComponentRef { children, .. } => children,
            Self::Value { .. } => &[],
        }
    }

    /// Samples of a `Value` leaf (empty for other nodes and unranged leaves).
    pub fn samples(&self) -> &[f64] {
        match self {
            Self::Value { samples, .. } => samples,
            _ => &[],
        }
    }

    /// Attach `node` as the last child.
    pub fn append_child(&mut self, node: ParameterNode<'c>) -> ParamResult<()> {
        let child_name = match &node {
            Self::Root { .. } => return Err(invalid_tree!("a root node cannot be a child")),
            Self::Value { name, .. } | Self::ComponentRef { name, .. } => name,
        };
        if child_name.is_empty() {
            return Err(invalid_tree!("child nodes need a non-empty name"));
        }

        match self {
            Self::Root { children } | Self::ComponentRef { children, .. } => {
                children.push(node);
                Ok(())
            }
            Self::Value { name, .. } => Err(invalid_tree!(
                "value leaf '{}' cannot have children",
                name
            )),
        }
    }

    /// Builder-style `append_child`.
    pub fn with_child(mut self, node: ParameterNode<'c>) -> ParamResult<Self> {
        self.append_child(node)?;
        Ok(self)
    }

    /// Compute and store the samples of a `Value` leaf.
    pub fn declare_range(
        &mut self,
        min: f64,
        max: f64,
        scale: RangeScale,
        config: &SearchConfig,
    ) -> ParamResult<()> {
        match self {
            Self::Value {
                name,
                range,
                samples,
            } => {
                if range.is_some() {
                    return Err(invalid_tree!("value '{}' already has a range", name));
                }
                if config.sample_count == 0 {
                    return Err(config_error!("sample_count must be at least 1"));
                }
                let declared = ValueRange::new(min, max, scale)?;
                *samples = declared.samples(config.sample_count);
                *range = Some(declared);
                debug!("Declared {} for '{}': {} samples", declared, name, samples.len());
                Ok(())
            }
            Self::Root { .. } => Err(invalid_tree!("cannot declare a range on the root")),
            Self::ComponentRef { name, .. } => Err(invalid_tree!(
                "cannot declare a range on component '{}'",
                name
            )),
        }
    }

    /// Builder-style `declare_range`.
    pub fn with_range(
        mut self,
        min: f64,
        max: f64,
        scale: RangeScale,
        config: &SearchConfig,
    ) -> ParamResult<Self> {
        self.declare_range(min, max, scale, config)?;
        Ok(self)
    }

    /// Number of combinations `enumerate` would produce, without building them.
    /// Returns `None` on overflow.
    pub fn combination_count(&self) -> Option<usize> {
        match self {
            Self::Root { children } | Self::ComponentRef { children, .. } => {
                let mut total: usize = 1;
                for (_, members) in group_by_name(children) {
                    let mut group_size: usize = 0;
                    for member in members {
                        group_size = group_size.checked_add(member.combination_count()?)?;
                    }
                    total = total.checked_mul(group_size)?;
                }
                Some(total)
            }
            Self::Value { samples, .. } => Some(samples.len().max(1)),
        }
    }
}

/// Group children by name, keeping groups in order of first appearance and
/// members in append order.
pub(crate) fn group_by_name<'a, 'c>(
    children: &'a [ParameterNode<'c>],
) -> Vec<(&'a str, Vec<&'a ParameterNode<'c>>)> {
    let mut groups: Vec<(&'a str, Vec<&'a ParameterNode<'c>>)> = Vec::new();
    for child in children {
        let name = child.name().unwrap_or_default();
        match groups.iter_mut().find(|(group, _)| *group == name) {
            Some((_, members)) => members.push(child),
            None => groups.push((name, vec![child])),
        }
    }
    groups
}
