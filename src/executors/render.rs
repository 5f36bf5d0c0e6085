//! Render command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::GraphFormat;
use crate::config::RenderOptions;
use crate::executors::CommandExecutor;
use crate::graph::GraphRenderer;
use crate::loader::{LoadedGraph, load_graph};

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Rendering {} graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let loaded = load_graph(&config.file)
            .wrap_err_with(|| format!("Failed to load graph '{}'", config.file.display()))?;

        // Determine output destination
        let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref() {
            Box::new(BufWriter::new(
                File::create(output_path)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to create output file '{}'", output_path.display())
                    })?,
            ))
        } else {
            Box::new(io::stdout())
        };

        Self::render(&config, &loaded, output_writer.as_mut())?;
        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to flush rendered graph")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}

impl RenderExecutor {
    pub fn render(config: &RenderOptions, loaded: &LoadedGraph, output: &mut dyn Write) -> Result<()> {
        // Only search for a cycle when it will be drawn
        let cycle = if config.highlight_cycles {
            loaded.graph.find_cycle()
        } else {
            None
        };

        let renderer = GraphRenderer::new(config.highlight_cycles);

        match config.format {
            GraphFormat::Ascii => renderer
                .render_ascii(&loaded.graph, cycle.as_deref(), output)
                .wrap_err("Failed to render ASCII graph"),
            GraphFormat::Mermaid => renderer
                .render_mermaid(&loaded.graph, cycle.as_deref(), output)
                .wrap_err("Failed to render Mermaid graph"),
            GraphFormat::Dot => renderer
                .render_dot(&loaded.graph, cycle.as_deref(), output)
                .wrap_err("Failed to render DOT graph"),
        }
    }
}
