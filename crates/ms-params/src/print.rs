//! Indented text rendering of trees and combinations.

use std::io::{self, Write};
use tracing::info;

use crate::combination::Combination;
use crate::component::Component;
use crate::node::ParameterNode;

const INDENT: &str = "  ";
const SEPARATOR: &str = "----------------------------------";

/// Line-oriented output channel for diagnostics.
pub trait DiagnosticSink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Writes each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")
    }
}

/// Emits each line as an `info` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        info!(target: "modsel", "{line}");
        Ok(())
    }
}

impl DiagnosticSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// List the parameters a component accepts, one `name: kind` line each,
/// below its type name.
pub fn print_parameters(component: &dyn Component, sink: &mut dyn DiagnosticSink) -> io::Result<()> {
    sink.write_line(component.type_name())?;
    for spec in component.parameters() {
        sink.write_line(&format!("{INDENT}{}: {}", spec.name, spec.kind))?;
    }
    Ok(())
}

pub fn print_tree(node: &ParameterNode<'_>, sink: &mut dyn DiagnosticSink) -> io::Result<()> {
    write_node(node, 0, sink)
}

fn write_node(node: &ParameterNode<'_>, depth: usize, sink: &mut dyn DiagnosticSink) -> io::Result<()> {
    let pad = INDENT.repeat(depth);
    let line = match node {
        ParameterNode::Root { .. } => format!("{pad}root"),
        ParameterNode::Value {
            name,
            range: Some(range),
            samples,
        } => format!("{pad}{name}: {range}, {} samples", samples.len()),
        ParameterNode::Value { name, range: None, .. } => format!("{pad}{name}: unset"),
        ParameterNode::ComponentRef { name, component, .. } => {
            format!("{pad}{name}: {}", component.type_name())
        }
    };
    sink.write_line(&line)?;

    for child in node.children() {
        write_node(child, depth + 1, sink)?;
    }
    Ok(())
}

pub fn print_combination(combination: &Combination, sink: &mut dyn DiagnosticSink) -> io::Result<()> {
    write_combination(combination, 0, sink)
}

/// Print every combination, each preceded by a separator line.
pub fn print_combinations(
    combinations: &[Combination],
    sink: &mut dyn DiagnosticSink,
) -> io::Result<()> {
    for combination in combinations {
        sink.write_line(SEPARATOR)?;
        print_combination(combination, sink)?;
    }
    Ok(())
}

fn write_combination(
    combination: &Combination,
    depth: usize,
    sink: &mut dyn DiagnosticSink,
) -> io::Result<()> {
    let pad = INDENT.repeat(depth);
    let line = match combination {
        Combination::Root { .. } => format!("{pad}root"),
        Combination::Value {
            name,
            value: Some(v),
        } => format!("{pad}{name} = {v}"),
        Combination::Value { name, value: None } => format!("{pad}{name} = unset"),
        Combination::Component { name, instance, .. } => {
            format!("{pad}{name} = {}", instance.type_name())
        }
    };
    sink.write_line(&line)?;

    for child in combination.children() {
        write_combination(child, depth + 1, sink)?;
    }
    Ok(())
}

/// Render a tree into a single string, one line per node.
pub fn render_tree(node: &ParameterNode<'_>) -> io::Result<String> {
    let mut lines: Vec<String> = Vec::new();
    print_tree(node, &mut lines)?;
    Ok(lines.join("\n"))
}

/// Render one combination into a single string.
pub fn render_combination(combination: &Combination) -> io::Result<String> {
    let mut lines: Vec<String> = Vec::new();
    print_combination(combination, &mut lines)?;
    Ok(lines.join("\n"))
}
