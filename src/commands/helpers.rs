//! Helper functions shared across commands

use std::io::{self, Write};
use std::path::Path;

use graphlib_core::config::Backend;
use graphlib_core::error::Result;
use graphlib_core::graph::Graph;
use graphlib_core::jsondef::GraphDefinition;
use serde::Serialize;

use crate::commands::dispatch::{trace_command, CommandContext};

/// Load a JSON graph definition into the selected backend
pub fn load_graph(ctx: &CommandContext, file: &Path) -> Result<Box<dyn Graph>> {
    let definition = GraphDefinition::read(file)?;
    let graph: Box<dyn Graph> = match ctx.backend() {
        Backend::AdjacencySet => Box::new(definition.to_adjacency_set_graph()?),
        Backend::AdjacencyMatrix => Box::new(
            definition.to_adjacency_matrix_graph(ctx.config.graph.matrix_capacity)?,
        ),
    };

    trace_command!(ctx.cli, ctx.start, "load_graph");
    tracing::debug!(
        backend = %ctx.backend(),
        vertices = graph.vertex_count(),
        weighted = graph.is_weighted(),
        "graph ready"
    );
    Ok(graph)
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Run a dump function against a locked stdout
pub fn print_human(dump: impl FnOnce(&mut dyn Write) -> Result<()>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    dump(&mut out)?;
    out.flush()?;
    Ok(())
}
