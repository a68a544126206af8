use std::fmt::Write;

use crate::ast::SyntaxNode;

/// Appends a box-drawing rendering of `node` and its descendants to `out`.
///
/// Each element takes one line: its kind, followed by the value for number
/// tokens. Children are indented under their parent with `├──` markers, the
/// last child with `└──`.
///
/// # Parameters
/// - `out`: Buffer the rendering is appended to.
/// - `node`: The element to print.
/// - `indent`: Guide prefix inherited from the parent.
/// - `is_last`: Whether `node` is its parent's last child.
///
/// # Example
/// ```
/// use minicalc::ast::SyntaxTree;
///
/// let tree = SyntaxTree::parse("1 + 2");
/// let expected = "\
/// └──BinaryExpression
///     ├──LiteralExpression
///     │   └──NumberToken 1
///     ├──PlusToken
///     └──LiteralExpression
///         └──NumberToken 2
/// ";
/// assert_eq!(tree.pretty(), expected);
/// ```
pub fn pretty_print(out: &mut String, node: SyntaxNode<'_>, indent: &str, is_last: bool) {
    let marker = if is_last { "└──" } else { "├──" };

    // Writing into a `String` cannot fail.
    let _ = write!(out, "{indent}{marker}{}", node.kind());
    if let Some(value) = node.as_token().and_then(|token| token.value) {
        let _ = write!(out, " {value}");
    }
    out.push('\n');

    let indent = format!("{indent}{}", if is_last { "    " } else { "│   " });
    let children = node.children();
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        pretty_print(out, child, &indent, i + 1 == count);
    }
}
