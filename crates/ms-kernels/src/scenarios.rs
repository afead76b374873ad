//! Reference search-space trees, from a bare root up to a tree with three
//! alternative kernels and a nested distance metric.

use ms_params::{ParamResult, ParameterNode, RangeScale, SearchConfig};

use crate::kernels::{DistantSegmentsKernel, GaussianKernel, MinkowskiMetric, PowerKernel};

/// Component templates the trees borrow from.
#[derive(Debug)]
pub struct Templates {
    pub power: PowerKernel,
    pub gaussian: GaussianKernel,
    pub distant_segments: DistantSegmentsKernel,
    pub minkowski: MinkowskiMetric,
}

impl Templates {
    pub fn new() -> Self {
        Self {
            power: PowerKernel::new(),
            gaussian: GaussianKernel::new(),
            distant_segments: DistantSegmentsKernel::new(),
            minkowski: MinkowskiMetric::new(10.0),
        }
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::new()
    }
}

fn ranged(
    name: &str,
    min: f64,
    max: f64,
    scale: RangeScale,
    config: &SearchConfig,
) -> ParamResult<ParameterNode<'static>> {
    ParameterNode::value(name).with_range(min, max, scale, config)
}

pub fn root_without_children() -> ParameterNode<'static> {
    ParameterNode::root()
}

pub fn single_leaf(config: &SearchConfig) -> ParamResult<ParameterNode<'static>> {
    ranged("C1", 1.0, 1.0, RangeScale::Exponential, config)
}

pub fn component_without_children(templates: &Templates) -> ParameterNode<'_> {
    ParameterNode::component("kernel", &templates.power)
}

pub fn root_with_value_children(config: &SearchConfig) -> ParamResult<ParameterNode<'static>> {
    ParameterNode::root()
        .with_child(ranged("C1", 1.0, 1.0, RangeScale::Exponential, config)?)?
        .with_child(ranged("C2", 1.0, 1.0, RangeScale::Exponential, config)?)
}

pub fn root_with_component_child(templates: &Templates) -> ParamResult<ParameterNode<'_>> {
    ParameterNode::root().with_child(ParameterNode::component("kernel", &templates.power))
}

pub fn root_with_value_and_component<'c>(
    templates: &'c Templates,
    config: &SearchConfig,
) -> ParamResult<ParameterNode<'c>> {
    ParameterNode::root()
        .with_child(ranged("C", 1.0, 1.0, RangeScale::Exponential, config)?)?
        .with_child(ParameterNode::component("kernel", &templates.power))
}

/// `C` plus three alternative kernels, one of them with a nested metric.
pub fn complex_tree<'c>(
    templates: &'c Templates,
    config: &SearchConfig,
) -> ParamResult<ParameterNode<'c>> {
    let mut root = ParameterNode::root();
    root.append_child(ranged("C", 1.0, 1.0, RangeScale::Exponential, config)?)?;

    let mut power = ParameterNode::component("kernel", &templates.power);
    power.append_child(ranged("degree", 1.0, 1.0, RangeScale::Exponential, config)?)?;
    let mut distance = ParameterNode::component("distance", &templates.minkowski);
    distance.append_child(ranged("k", 1.0, 12.0, RangeScale::Linear, config)?)?;
    power.append_child(distance)?;
    root.append_child(power)?;

    let mut gaussian = ParameterNode::component("kernel", &templates.gaussian);
    gaussian.append_child(ranged(
        "log_width",
        0.0,
        0.5 * 2f64.ln(),
        RangeScale::Linear,
        config,
    )?)?;
    root.append_child(gaussian)?;

    let mut segments = ParameterNode::component("kernel", &templates.distant_segments);
    segments.append_child(ranged("delta", 1.0, 2.0, RangeScale::Exponential, config)?)?;
    segments.append_child(ranged("theta", 1.0, 2.0, RangeScale::Exponential, config)?)?;
    root.append_child(segments)?;

    Ok(root)
}

/// Every reference tree with a short label, simplest first.
pub fn all<'c>(
    templates: &'c Templates,
    config: &SearchConfig,
) -> ParamResult<Vec<(&'static str, ParameterNode<'c>)>> {
    Ok(vec![
        ("root without children", root_without_children()),
        ("single leaf", single_leaf(config)?),
        ("component without children", component_without_children(templates)),
        ("root with value children", root_with_value_children(config)?),
        ("root with component child", root_with_component_child(templates)?),
        (
            "root with value and component",
            root_with_value_and_component(templates, config)?,
        ),
        ("complex tree", complex_tree(templates, config)?),
    ])
}
