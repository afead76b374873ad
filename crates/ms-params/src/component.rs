//! The contract a tunable component (kernel, metric, model) offers to the search.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{ParamError, ParamResult};

/// Whether a named parameter takes a number or another component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Scalar,
    Component,
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Component => write!(f, "component"),
        }
    }
}

/// One settable parameter of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub kind: ParameterKind,
}

impl ParameterSpec {
    pub const fn scalar(name: &'static str) -> Self {
        Self {
            name,
            kind: ParameterKind::Scalar,
        }
    }

    pub const fn component(name: &'static str) -> Self {
        Self {
            name,
            kind: ParameterKind::Component,
        }
    }
}

/// A configurable object whose parameters are tuned by the search.
///
/// Implementors expose a static list of parameters; the enumerator validates
/// every assignment against that list before calling the setters, so setters
/// only ever see names they declared.
pub trait Component: fmt::Debug + Send + Sync {
    /// Short type name used in diagnostics (e.g. "GaussianKernel").
    fn type_name(&self) -> &str;

    /// Every parameter this component accepts.
    fn parameters(&self) -> &'static [ParameterSpec];

    /// Set a numeric parameter.
    fn set_scalar(&mut self, name: &str, value: f64) -> ParamResult<()>;

    /// Current value of a numeric parameter, if it exists.
    fn scalar(&self, name: &str) -> Option<f64>;

    /// Replace a sub-component parameter. Components without sub-components
    /// can rely on the default, which rejects every name.
    fn set_component(&mut self, name: &str, _value: Box<dyn Component>) -> ParamResult<()> {
        Err(unbound(&*self, name, ParameterKind::Component))
    }

    /// Deep copy, independent of `self`.
    fn clone_box(&self) -> Box<dyn Component>;
}

impl Clone for Box<dyn Component> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Look up `name` in the component's declared parameters.
pub fn find_parameter<C: Component + ?Sized>(component: &C, name: &str) -> Option<ParameterSpec> {
    component
        .parameters()
        .iter()
        .copied()
        .find(|spec| spec.name == name)
}

/// Ensure `name` is declared with the given kind.
pub fn ensure_bound<C: Component + ?Sized>(
    component: &C,
    name: &str,
    kind: ParameterKind,
) -> ParamResult<()> {
    match find_parameter(component, name) {
        Some(spec) if spec.kind == kind => Ok(()),
        _ => Err(unbound(component, name, kind)),
    }
}

/// Build the `UnboundName` error for `name` on `component`.
pub fn unbound<C: Component + ?Sized>(component: &C, name: &str, kind: ParameterKind) -> ParamError {
    ParamError::UnboundName {
        component: component.type_name().to_string(),
        parameter: name.to_string(),
        kind: kind.to_string(),
    }
}
