use std::fmt::Write;

use crate::{
    error::{GraphError, LoadFailure},
    search::{BitsetGraph, MAX_VERTICES},
};

/// Parses the whitespace-separated text format.
///
/// ```text
/// # three vertices, 0 -> 1 -> 2 -> 0
/// 3
/// 0b010
/// 0b100
/// 0x1
/// ```
///
/// The first token is the vertex count, followed by exactly that many edge masks. Numbers
/// are decimal, `0x` hex or `0b` binary; `#` comments run to the end of the line.
pub fn parse_text(input: &str) -> Result<BitsetGraph, LoadFailure> {
    let mut tokens = input.lines().enumerate().flat_map(|(index, line)| {
        let content = line.split_once('#').map_or(line, |(head, _)| head);
        content
            .split_whitespace()
            .map(move |token| (index + 1, token))
    });

    let (line, token) = tokens.next().ok_or(LoadFailure::MissingCount)?;
    let n_vertices = parse_number(line, token)? as usize;
    if n_vertices == 0 || n_vertices > MAX_VERTICES {
        return Err(GraphError::InvalidSize { n_vertices }.into());
    }

    let mut masks = Vec::with_capacity(n_vertices);
    for (line, token) in tokens.by_ref().take(n_vertices) {
        masks.push(parse_number(line, token)?);
    }
    if masks.len() < n_vertices {
        return Err(LoadFailure::Truncated {
            expected: n_vertices,
            found: masks.len(),
        });
    }
    if let Some((line, token)) = tokens.next() {
        return Err(LoadFailure::Trailing {
            line,
            token: token.to_string(),
        });
    }

    Ok(BitsetGraph::new(n_vertices, &masks)?)
}

/// Renders `graph` in the format [`parse_text`] reads, masks in binary.
pub fn render_text(graph: &BitsetGraph) -> String {
    let width = graph.len();
    let mut out = String::new();
    let _ = writeln!(out, "{width}");
    for vertex in graph.vertices() {
        let _ = writeln!(out, "0b{:0width$b}", graph.edges(vertex));
    }
    out
}

fn parse_number(line: usize, token: &str) -> Result<u32, LoadFailure> {
    let parsed = if let Some(hex) = strip_prefix_ignore_case(token, "0x") {
        u32::from_str_radix(&hex.replace('_', ""), 16)
    } else if let Some(binary) = strip_prefix_ignore_case(token, "0b") {
        u32::from_str_radix(&binary.replace('_', ""), 2)
    } else {
        token.parse::<u32>()
    };
    parsed.map_err(|_| LoadFailure::Syntax {
        line,
        token: token.to_string(),
    })
}

fn strip_prefix_ignore_case<'a>(token: &'a str, prefix: &str) -> Option<&'a str> {
    let head = token.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&token[prefix.len()..])
    } else {
        None
    }
}
