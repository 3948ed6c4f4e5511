use graphlib_core::config::Backend;
use graphlib_core::format::OutputFormat;
use graphlib_core::graph::MinimumSpanningTreeAlgorithm;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse storage backend from string
pub fn parse_backend(s: &str) -> std::result::Result<Backend, String> {
    s.parse::<Backend>().map_err(|e| e.to_string())
}

/// Parse minimum spanning tree algorithm from string
pub fn parse_mst_algorithm(s: &str) -> std::result::Result<MinimumSpanningTreeAlgorithm, String> {
    s.parse::<MinimumSpanningTreeAlgorithm>()
        .map_err(|e| e.to_string())
}
