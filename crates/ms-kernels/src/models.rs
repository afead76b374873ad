//! Models that receive a selected combination.

use ms_params::{unbound, Component, ParamResult, ParameterKind, ParameterSpec};

static SVM_PARAMS: [ParameterSpec; 2] = [
    ParameterSpec::scalar("C"),
    ParameterSpec::component("kernel"),
];

/// Support vector machine settings: regularisation constant and kernel.
#[derive(Debug, Clone)]
pub struct SvmModel {
    pub c: f64,
    pub kernel: Option<Box<dyn Component>>,
}

impl SvmModel {
    pub fn new() -> Self {
        Self { c: 1.0, kernel: None }
    }
}

impl Default for SvmModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SvmModel {
    fn type_name(&self) -> &str {
        "SVM"
    }

    fn parameters(&self) -> &'static [ParameterSpec] {
        &SVM_PARAMS
    }

    fn set_scalar(&mut self, name: &str, value: f64) -> ParamResult<()> {
        match name {
            "C" => {
                self.c = value;
                Ok(())
            }
            _ => Err(unbound(&*self, name, ParameterKind::Scalar)),
        }
    }

    fn scalar(&self, name: &str) -> Option<f64> {
        match name {
            "C" => Some(self.c),
            _ => None,
        }
    }

    fn set_component(&mut self, name: &str, value: Box<dyn Component>) -> ParamResult<()> {
        match name {
            "kernel" => {
                self.kernel = Some(value);
                Ok(())
            }
            _ => Err(unbound(&*self, name, ParameterKind::Component)),
        }
    }

    fn clone_box(&self) -> Box<dyn Component> {
        Box::new(self.clone())
    }
}
