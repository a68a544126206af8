/// The evaluator module reduces syntax trees to integers.
///
/// The evaluator walks the tree recursively, combining operand values with
/// checked integer arithmetic. It is the last stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates literal, parenthesized and binary expressions.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (scanner) reads the raw source text and produces tokens, each
/// corresponding to a number, an operator, a parenthesis, a run of
/// whitespace, or unrecognised input. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, position,
///   text and value.
/// - Reports lexical errors for invalid characters and oversized literals.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a tree that represents the syntactic structure of the expression, honouring
/// operator precedence and left associativity.
///
/// # Responsibilities
/// - Converts tokens into expression nodes.
/// - Reports unexpected or missing tokens as diagnostics and repairs the tree
///   so parsing always completes.
pub mod parser;
/// Renders syntax trees for display.
pub mod printer;
