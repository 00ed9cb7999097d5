use textwrap::{Options, WrapAlgorithm};

/// Extra indent given to wrapped continuation lines
pub const CONTINUATION_INDENT: usize = 4;

/// Wrap `text` so no line, indent included, exceeds `width` columns.
///
/// The first line is indented by `indent`, the rest by `indent + 4`. Lines
/// break at the last space that fits; a word longer than the line is cut.
pub fn wrap_indented(text: &str, indent: usize, width: usize) -> Vec<String> {
    let text = text.trim();
    let first_indent = " ".repeat(indent);
    let rest_indent = " ".repeat(indent + CONTINUATION_INDENT);

    // textwrap cuts long words to the continuation width, so the first
    // line is wrapped on its own
    let Some(first) = wrap_uniform(text, &first_indent, width).into_iter().next() else {
        return Vec::new();
    };
    let head = first.get(first_indent.len()..).unwrap_or_default();
    let Some(rest) = text.strip_prefix(head) else {
        return wrap_uniform(text, &first_indent, width);
    };

    let rest = rest.trim_start();
    let mut lines = vec![first];
    if !rest.is_empty() {
        lines.extend(wrap_uniform(rest, &rest_indent, width));
    }
    lines
}

fn wrap_uniform(text: &str, indent: &str, width: usize) -> Vec<String> {
    let options = Options::new(width.max(indent.len() + 1))
        .initial_indent(indent)
        .subsequent_indent(indent)
        .wrap_algorithm(WrapAlgorithm::FirstFit);

    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}
