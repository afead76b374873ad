//! Expansion of a search-space tree into every combination it denotes.

use tracing::{debug, info};

use crate::combination::Combination;
use crate::component::{ensure_bound, Component, ParameterKind};
use crate::errors::ParamResult;
use crate::invalid_tree;
use crate::node::{group_by_name, ParameterNode};

/// Enumerate all combinations of `node`, in deterministic order.
///
/// Same-named siblings are concatenated as alternatives, distinct names are
/// combined as a cartesian product with the first group varying slowest.
/// The result is never empty.
pub fn enumerate(node: &ParameterNode<'_>) -> ParamResult<Vec<Combination>> {
    let combinations = expand(node)?;
    info!("Enumerated {} parameter combinations", combinations.len());
    Ok(combinations)
}

impl ParameterNode<'_> {
    /// Shorthand for [`enumerate`].
    pub fn combinations(&self) -> ParamResult<Vec<Combination>> {
        enumerate(self)
    }
}

fn expand(node: &ParameterNode<'_>) -> ParamResult<Vec<Combination>> {
    match node {
        ParameterNode::Root { children } => Ok(product(children)?
            .into_iter()
            .map(|children| Combination::Root { children })
            .collect()),
        ParameterNode::Value { name, samples, .. } => {
            if name.is_empty() {
                return Err(invalid_tree!("value nodes need a non-empty name"));
            }
            if samples.is_empty() {
                return Ok(vec![Combination::Value {
                    name: name.clone(),
                    value: None,
                }]);
            }
            Ok(samples
                .iter()
                .map(|&v| Combination::Value {
                    name: name.clone(),
                    value: Some(v),
                })
                .collect())
        }
        ParameterNode::ComponentRef {
            name,
            component,
            children,
        } => {
            if name.is_empty() {
                return Err(invalid_tree!("component nodes need a non-empty name"));
            }
            check_bindings(*component, children)?;

            let tuples = product(children)?;
            debug!(
                "Expanding '{}' ({}) into {} configurations",
                name,
                component.type_name(),
                tuples.len()
            );

            tuples
                .into_iter()
                .map(|children| {
                    let mut instance = component.clone_box();
                    for child in &children {
                        child.assign_onto(instance.as_mut())?;
                    }
                    Ok(Combination::Component {
                        name: name.clone(),
                        instance,
                        children,
                    })
                })
                .collect()
        }
    }
}

/// Every child must name a parameter of the matching kind on `component`.
fn check_bindings(component: &dyn Component, children: &[ParameterNode<'_>]) -> ParamResult<()> {
    for child in children {
        match child {
            ParameterNode::Value { name, .. } => {
                ensure_bound(component, name, ParameterKind::Scalar)?
            }
            ParameterNode::ComponentRef { name, .. } => {
                ensure_bound(component, name, ParameterKind::Component)?
            }
            ParameterNode::Root { .. } => {
                return Err(invalid_tree!("a root node cannot be a child"))
            }
        }
    }
    Ok(())
}

/// Cartesian product across name groups; each tuple holds one combination
/// per group, in group order. Every option is cloned once per output tuple.
fn product(children: &[ParameterNode<'_>]) -> ParamResult<Vec<Vec<Combination>>> {
    let mut axes: Vec<Vec<Combination>> = Vec::new();
    for (_, members) in group_by_name(children) {
        let mut options = Vec::new();
        for member in members {
            options.extend(expand(member)?);
        }
        axes.push(options);
    }

    let total: usize = axes.iter().map(Vec::len).product();
    let mut tuples: Vec<Vec<Combination>> = Vec::with_capacity(total);
    let mut indices = vec![0usize; axes.len()];

    for _ in 0..total {
        tuples.push(
            indices
                .iter()
                .zip(&axes)
                .map(|(&i, options)| options[i].clone())
                .collect(),
        );

        // last group varies fastest
        for (index, options) in indices.iter_mut().zip(&axes).rev() {
            *index += 1;
            if *index < options.len() {
                break;
            }
            *index = 0;
        }
    }

    Ok(tuples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combination::ParameterValue;
    use crate::component::testing::MockComponent;
    use crate::config::SearchConfig;
    use crate::errors::ParamError;
    use crate::component::{unbound, ParameterSpec};
    use crate::range::RangeScale;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn config(count: usize) -> SearchConfig {
        SearchConfig::default().with_sample_count(count)
    }

    fn ranged(name: &str, min: f64, max: f64, count: usize) -> ParameterNode<'static> {
        ParameterNode::value(name)
            .with_range(min, max, RangeScale::Linear, &config(count))
            .unwrap()
    }

    fn values(combos: &[Combination], path: &str) -> Vec<ParameterValue> {
        combos
            .iter()
            .map(|c| c.to_assignments().remove(path).unwrap())
            .collect()
    }

    #[test]
    fn leaf_yields_one_combination_per_sample() {
        let leaf = ranged("k", 1.0, 12.0, 6);
        let combos = enumerate(&leaf).unwrap();
        assert_eq!(combos.len(), 6);

        let numbers: Vec<f64> = combos
            .iter()
            .map(|c| match c {
                Combination::Value { value: Some(v), .. } => *v,
                other => panic!("unexpected combination: {other:?}"),
            })
            .collect();
        assert!(numbers.iter().all(|v| (1.0..=12.0).contains(v)));
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn unset_leaf_yields_single_combination() {
        let combos = enumerate(&ParameterNode::value("C")).unwrap();
        assert_eq!(combos.len(), 1);
        assert!(matches!(&combos[0], Combination::Value { value: None, .. }));
    }

    #[test]
    fn bare_root_yields_one_empty_combination() {
        let combos = enumerate(&ParameterNode::root()).unwrap();
        assert_eq!(combos.len(), 1);
        assert!(matches!(&combos[0], Combination::Root { children } if children.is_empty()));
    }

    #[test]
    fn bare_component_yields_unmodified_clone() {
        let template = MockComponent::new("Power");
        let node = ParameterNode::component("kernel", &template);

        let combos = enumerate(&node).unwrap();
        assert_eq!(combos.len(), 1);
        let instance = combos[0].component().unwrap();
        assert_eq!(instance.type_name(), "Power");
        assert_eq!(instance.scalar("width"), Some(1.0));
        assert_eq!(instance.scalar("degree"), Some(2.0));
        assert!(combos[0].children().is_empty());
    }

    #[test]
    fn same_names_are_alternatives() {
        let a = MockComponent::new("A");
        let b = MockComponent::new("B");
        let c = MockComponent::new("C");
        let root = ParameterNode::root()
            .with_child(ParameterNode::component("kernel", &a))
            .unwrap()
            .with_child(ParameterNode::component("kernel", &b))
            .unwrap()
            .with_child(ParameterNode::component("kernel", &c))
            .unwrap();

        let combos = enumerate(&root).unwrap();
        assert_eq!(combos.len(), 3);
        let kinds: Vec<_> = combos
            .iter()
            .map(|combo| {
                assert_eq!(combo.children().len(), 1);
                combo.children()[0].component().unwrap().type_name().to_string()
            })
            .collect();
        assert_eq!(kinds, vec!["A", "B", "C"]);
    }

    #[test]
    fn distinct_names_are_combined() {
        let root = ParameterNode::root()
            .with_child(ranged("a", 0.0, 1.0, 3))
            .unwrap()
            .with_child(ranged("b", 10.0, 20.0, 4))
            .unwrap();

        let combos = enumerate(&root).unwrap();
        assert_eq!(combos.len(), 12);

        let mut pairs: Vec<(String, String)> = combos
            .iter()
            .map(|c| {
                let flat = c.to_assignments();
                (flat["a"].to_string(), flat["b"].to_string())
            })
            .collect();
        pairs.sort();
        pairs.dedup();
        assert_eq!(pairs.len(), 12);
    }

    #[test]
    fn first_group_varies_slowest() {
        let root = ParameterNode::root()
            .with_child(ranged("a", 0.0, 1.0, 2))
            .unwrap()
            .with_child(ranged("b", 0.0, 2.0, 3))
            .unwrap();

        let combos = enumerate(&root).unwrap();
        let a = values(&combos, "a");
        let b = values(&combos, "b");
        use ParameterValue::Float;
        assert_eq!(a, vec![Float(0.0), Float(0.0), Float(0.0), Float(1.0), Float(1.0), Float(1.0)]);
        assert_eq!(b, vec![Float(0.0), Float(1.0), Float(2.0), Float(0.0), Float(1.0), Float(2.0)]);
    }

    #[test]
    fn alternatives_keep_their_own_subtrees() {
        let a = MockComponent::new("A");
        let b = MockComponent::new("B");
        let root = ParameterNode::root()
            .with_child(ranged("C", 1.0, 2.0, 2))
            .unwrap()
            .with_child(
                ParameterNode::component("kernel", &a)
                    .with_child(ranged("width", 0.0, 1.0, 3))
                    .unwrap(),
            )
            .unwrap()
            .with_child(ParameterNode::component("kernel", &b))
            .unwrap();

        let combos = enumerate(&root).unwrap();
        assert_eq!(combos.len(), 8);
        assert_eq!(Some(combos.len()), root.combination_count());

        let widths: Vec<f64> = combos
            .iter()
            .filter_map(|c| c.child("kernel"))
            .filter_map(|k| k.component())
            .filter(|k| k.type_name() == "A")
            .filter_map(|k| k.scalar("width"))
            .collect();
        assert_eq!(widths, vec![0.0, 0.5, 1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn nested_components_are_bound_into_parent_clone() {
        let outer = MockComponent::new("Outer");
        let inner = MockComponent::new("Inner");
        let node = ParameterNode::component("kernel", &outer)
            .with_child(
                ParameterNode::component("inner", &inner)
                    .with_child(ranged("degree", 1.0, 3.0, 3))
                    .unwrap(),
            )
            .unwrap();

        let combos = enumerate(&node).unwrap();
        assert_eq!(combos.len(), 3);
        for combo in &combos {
            let nested = combo.child("inner").unwrap().component().unwrap();
            assert_eq!(nested.type_name(), "Inner");
            assert!(nested.scalar("degree").is_some());
        }
        // outer template untouched
        assert_eq!(outer.inner, None);
    }

    #[test]
    fn unset_child_keeps_component_default() {
        let template = MockComponent::new("Mock");
        let node = ParameterNode::component("kernel", &template)
            .with_child(ParameterNode::value("width"))
            .unwrap();

        let combos = enumerate(&node).unwrap();
        assert_eq!(combos.len(), 1);
        assert_eq!(combos[0].component().unwrap().scalar("width"), Some(1.0));
    }

    #[test]
    fn unknown_parameter_is_unbound() {
        let template = MockComponent::new("Mock");
        let node = ParameterNode::component("kernel", &template)
            .with_child(ranged("gamma", 0.0, 1.0, 2))
            .unwrap();

        let err = enumerate(&node).unwrap_err();
        match err {
            ParamError::UnboundName {
                component,
                parameter,
                ..
            } => {
                assert_eq!(component, "Mock");
                assert_eq!(parameter, "gamma");
            }
            other => panic!("expected UnboundName, got {other:?}"),
        }
    }

    #[test]
    fn wrong_parameter_kind_is_unbound() {
        let template = MockComponent::new("Mock");
        let other = MockComponent::new("Other");
        let node = ParameterNode::component("kernel", &template)
            .with_child(ParameterNode::component("width", &other))
            .unwrap();

        assert!(matches!(
            enumerate(&node),
            Err(ParamError::UnboundName { .. })
        ));
    }

    #[test]
    fn unbound_name_deep_in_tree_fails_whole_enumeration() {
        let good = MockComponent::new("Good");
        let root = ParameterNode::root()
            .with_child(ranged("C", 1.0, 2.0, 2))
            .unwrap()
            .with_child(
                ParameterNode::component("kernel", &good)
                    .with_child(ParameterNode::value("bogus"))
                    .unwrap(),
            )
            .unwrap();

        assert!(root.combinations().is_err());
    }

    #[test]
    fn enumeration_is_repeatable() {
        let template = MockComponent::new("Mock");
        let root = ParameterNode::root()
            .with_child(ranged("C", 1.0, 4.0, 3))
            .unwrap()
            .with_child(
                ParameterNode::component("kernel", &template)
                    .with_child(ranged("width", 0.1, 0.9, 4))
                    .unwrap(),
            )
            .unwrap();

        let first: Vec<_> = enumerate(&root)
            .unwrap()
            .iter()
            .map(Combination::to_assignments)
            .collect();
        let second: Vec<_> = enumerate(&root)
            .unwrap()
            .iter()
            .map(Combination::to_assignments)
            .collect();
        assert_eq!(first.len(), 12);
        assert_eq!(first, second);
    }

    #[derive(Debug, Clone)]
    struct CountingComponent {
        clones: Arc<AtomicUsize>,
    }

    impl Component for CountingComponent {
        fn type_name(&self) -> &str {
            "Counting"
        }

        fn parameters(&self) -> &'static [ParameterSpec] {
            &[]
        }

        fn set_scalar(&mut self, name: &str, _value: f64) -> ParamResult<()> {
            Err(unbound(&*self, name, ParameterKind::Scalar))
        }

        fn scalar(&self, _name: &str) -> Option<f64> {
            None
        }

        fn clone_box(&self) -> Box<dyn Component> {
            self.clones.fetch_add(1, Ordering::SeqCst);
            Box::new(self.clone())
        }
    }

    #[test]
    fn each_output_tuple_clones_a_component_once() {
        let clones = Arc::new(AtomicUsize::new(0));
        let template = CountingComponent {
            clones: Arc::clone(&clones),
        };
        let root = ParameterNode::root()
            .with_child(ParameterNode::component("kernel", &template))
            .unwrap()
            .with_child(ranged("a", 0.0, 1.0, 2))
            .unwrap()
            .with_child(ranged("b", 0.0, 1.0, 2))
            .unwrap()
            .with_child(ranged("c", 0.0, 1.0, 2))
            .unwrap();

        let combos = enumerate(&root).unwrap();
        assert_eq!(combos.len(), 8);
        // one clone while expanding the component, one per output tuple
        assert_eq!(clones.load(Ordering::SeqCst), 1 + 8);
    }

    #[test]
    fn clones_are_isolated() {
        let template = MockComponent::new("Mock");
        let node = ParameterNode::component("kernel", &template)
            .with_child(ranged("width", 2.0, 4.0, 2))
            .unwrap();

        let mut combos = enumerate(&node).unwrap();
        combos[0]
            .component_mut()
            .unwrap()
            .set_scalar("width", 99.0)
            .unwrap();

        assert_eq!(template.width, 1.0);
        assert_eq!(combos[0].component().unwrap().scalar("width"), Some(99.0));
        assert_eq!(combos[1].component().unwrap().scalar("width"), Some(4.0));
    }
}
