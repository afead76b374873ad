//! Kernels and distance metrics exposing their tunable parameters.

use ms_params::{unbound, Component, ParamResult, ParameterKind, ParameterSpec};

static GAUSSIAN_PARAMS: [ParameterSpec; 1] = [ParameterSpec::scalar("log_width")];

/// Gaussian (RBF) kernel, tuned through the log of its width.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel {
    pub log_width: f64,
}

impl GaussianKernel {
    pub fn new() -> Self {
        Self { log_width: 0.0 }
    }

    pub fn width(&self) -> f64 {
        self.log_width.exp()
    }
}

impl Default for GaussianKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for GaussianKernel {
    fn type_name(&self) -> &str {
        "GaussianKernel"
    }

    fn parameters(&self) -> &'static [ParameterSpec] {
        &GAUSSIAN_PARAMS
    }

    fn set_scalar(&mut self, name: &str, value: f64) -> ParamResult<()> {
        match name {
            "log_width" => {
                self.log_width = value;
                Ok(())
            }
            _ => Err(unbound(&*self, name, ParameterKind::Scalar)),
        }
    }

    fn scalar(&self, name: &str) -> Option<f64> {
        match name {
            "log_width" => Some(self.log_width),
            _ => None,
        }
    }

    fn clone_box(&self) -> Box<dyn Component> {
        Box::new(self.clone())
    }
}

static MINKOWSKI_PARAMS: [ParameterSpec; 1] = [ParameterSpec::scalar("k")];

/// Minkowski distance of order `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct MinkowskiMetric {
    pub k: f64,
}

impl MinkowskiMetric {
    pub fn new(k: f64) -> Self {
        Self { k }
    }
}

impl Default for MinkowskiMetric {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl Component for MinkowskiMetric {
    fn type_name(&self) -> &str {
        "MinkowskiMetric"
    }

    fn parameters(&self) -> &'static [ParameterSpec] {
        &MINKOWSKI_PARAMS
    }

    fn set_scalar(&mut self, name: &str, value: f64) -> ParamResult<()> {
        match name {
            "k" => {
                self.k = value;
                Ok(())
            }
            _ => Err(unbound(&*self, name, ParameterKind::Scalar)),
        }
    }

    fn scalar(&self, name: &str) -> Option<f64> {
        match name {
            "k" => Some(self.k),
            _ => None,
        }
    }

    fn clone_box(&self) -> Box<dyn Component> {
        Box::new(self.clone())
    }
}

static POWER_PARAMS: [ParameterSpec; 2] = [
    ParameterSpec::scalar("degree"),
    ParameterSpec::component("distance"),
];

/// Power kernel `-d(x, y)^degree` over a pluggable distance.
#[derive(Debug, Clone)]
pub struct PowerKernel {
    pub degree: f64,
    pub distance: Option<Box<dyn Component>>,
}

impl PowerKernel {
    pub fn new() -> Self {
        Self {
            degree: 1.8,
            distance: None,
        }
    }
}

impl Default for PowerKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for PowerKernel {
    fn type_name(&self) -> &str {
        "PowerKernel"
    }

    fn parameters(&self) -> &'static [ParameterSpec] {
        &POWER_PARAMS
    }

    fn set_scalar(&mut self, name: &str, value: f64) -> ParamResult<()> {
        match name {
            "degree" => {
                self.degree = value;
                Ok(())
            }
            _ => Err(unbound(&*self, name, ParameterKind::Scalar)),
        }
    }

    fn scalar(&self, name: &str) -> Option<f64> {
        match name {
            "degree" => Some(self.degree),
            _ => None,
        }
    }

    fn set_component(&mut self, name: &str, value: Box<dyn Component>) -> ParamResult<()> {
        match name {
            "distance" => {
                self.distance = Some(value);
                Ok(())
            }
            _ => Err(unbound(&*self, name, ParameterKind::Component)),
        }
    }

    fn clone_box(&self) -> Box<dyn Component> {
        Box::new(self.clone())
    }
}

static DISTANT_SEGMENTS_PARAMS: [ParameterSpec; 2] = [
    ParameterSpec::scalar("delta"),
    ParameterSpec::scalar("theta"),
];

/// String kernel over distant segments. Both parameters are integral, so
/// assigned values are rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct DistantSegmentsKernel {
    pub delta: i32,
    pub theta: i32,
}

impl DistantSegmentsKernel {
    pub fn new() -> Self {
        Self { delta: 1, theta: 1 }
    }
}

impl Default for DistantSegmentsKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DistantSegmentsKernel {
    fn type_name(&self) -> &str {
        "DistantSegmentsKernel"
    }

    fn parameters(&self) -> &'static [ParameterSpec] {
        &DISTANT_SEGMENTS_PARAMS
    }

    fn set_scalar(&mut self, name: &str, value: f64) -> ParamResult<()> {
        let rounded = value.round() as i32;
        match name {
            "delta" => self.delta = rounded,
            "theta" => self.theta = rounded,
            _ => return Err(unbound(&*self, name, ParameterKind::Scalar)),
        }
        Ok(())
    }

    fn scalar(&self, name: &str) -> Option<f64> {
        match name {
            "delta" => Some(f64::from(self.delta)),
            "theta" => Some(f64::from(self.theta)),
            _ => None,
        }
    }

    fn clone_box(&self) -> Box<dyn Component> {
        Box::new(self.clone())
    }
}
