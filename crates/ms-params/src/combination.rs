//! Fully resolved parameter assignments produced by enumeration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::component::{ensure_bound, Component, ParameterKind};
use crate::errors::ParamResult;

/// One concrete assignment, mirroring the shape of the tree it came from.
#[derive(Debug, Clone)]
pub enum Combination {
    Root {
        children: Vec<Combination>,
    },
    /// `value` is `None` when the leaf had no declared range.
    Value {
        name: String,
        value: Option<f64>,
    },
    /// `instance` is a configured clone owned by this combination alone.
    Component {
        name: String,
        instance: Box<dyn Component>,
        children: Vec<Combination>,
    },
}

/// A flattened assignment value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Float(f64),
    /// Type name of the chosen component.
    Component(String),
    Unset,
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{v}"),
            Self::Component(v) => write!(f, "{v}"),
            Self::Unset => write!(f, "unset"),
        }
    }
}

impl Combination {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Root { .. } => None,
            Self::Value { name, .. } | Self::Component { name, .. } => Some(name),
        }
    }

    pub fn children(&self) -> &[Combination] {
        match self {
            Self::Root { children } | Self::Component { children, .. } => children,
            Self::Value { .. } => &[],
        }
    }

    /// The configured component of a `Component` combination.
    pub fn component(&self) -> Option<&dyn Component> {
        match self {
            Self::Component { instance, .. } => Some(instance.as_ref()),
            _ => None,
        }
    }

    pub fn component_mut(&mut self) -> Option<&mut (dyn Component + 'static)> {
        match self {
            Self::Component { instance, .. } => Some(instance.as_mut()),
            _ => None,
        }
    }

    /// Find a direct child by name.
    pub fn child(&self, name: &str) -> Option<&Combination> {
        self.children().iter().find(|c| c.name() == Some(name))
    }

    /// Flatten into dotted paths, e.g. `kernel.distance.k`.
    pub fn to_assignments(&self) -> BTreeMap<String, ParameterValue> {
        let mut out = BTreeMap::new();
        self.collect_assignments(None, &mut out);
        out
    }

    fn collect_assignments(&self, prefix: Option<&str>, out: &mut BTreeMap<String, ParameterValue>) {
        let path = |name: &str| match prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name.to_string(),
        };

        match self {
            Self::Root { children } => {
                for child in children {
                    child.collect_assignments(prefix, out);
                }
            }
            Self::Value { name, value } => {
                let value = value.map_or(ParameterValue::Unset, ParameterValue::Float);
                out.insert(path(name), value);
            }
            Self::Component {
                name,
                instance,
                children,
            } => {
                let here = path(name);
                out.insert(
                    here.clone(),
                    ParameterValue::Component(instance.type_name().to_string()),
                );
                for child in children {
                    child.collect_assignments(Some(&here), out);
                }
            }
        }
    }

    /// Bind this combination's top-level assignments onto `target`, e.g. a
    /// model whose `C` and `kernel` are being selected.
    pub fn apply_to(&self, target: &mut dyn Component) -> ParamResult<()> {
        self.assign_onto(target)
    }

    /// Apply this assignment as a named parameter of `target`; a root applies
    /// each of its children. Unset values leave the target's current setting
    /// in place.
    pub(crate) fn assign_onto(&self, target: &mut dyn Component) -> ParamResult<()> {
        match self {
            Self::Root { children } => {
                for child in children {
                    child.assign_onto(target)?;
                }
                Ok(())
            }
            Self::Value { name, value } => {
                ensure_bound(&*target, name, ParameterKind::Scalar)?;
                match value {
                    Some(v) => target.set_scalar(name, *v),
                    None => Ok(()),
                }
            }
            Self::Component { name, instance, .. } => {
                ensure_bound(&*target, name, ParameterKind::Component)?;
                target.set_component(name, instance.clone_box())
            }
        }
    }
}
