//! Property tests for compile
//!
//! Sources are generated as trees so each property can compute the expected
//! output independently of the compiler.

use proptest::prelude::*;
use supertiny::compile;

/// Generated source expression
#[derive(Debug, Clone)]
enum Node {
    Number(String),
    Str(String),
    Call(String, Vec<Node>),
}

impl Node {
    fn source(&self, sep: &str) -> String {
        match self {
            Node::Number(text) => text.clone(),
            Node::Str(text) => format!("\"{}\"", text),
            Node::Call(name, args) => {
                let mut parts = vec![name.clone()];
                parts.extend(args.iter().map(|a| a.source(sep)));
                format!("({})", parts.join(sep))
            }
        }
    }

    fn expected(&self) -> String {
        match self {
            Node::Number(text) => text.clone(),
            Node::Str(text) => format!("\"{}\"", text),
            Node::Call(name, args) => {
                let args: Vec<String> = args.iter().map(Node::expected).collect();
                format!("{}({})", name, args.join(", "))
            }
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Call(_, args) => 1 + args.iter().map(Node::depth).max().unwrap_or(0),
            _ => 0,
        }
    }
}

fn node_strategy() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        "[0-9]{1,6}".prop_map(Node::Number),
        "[a-zA-Z0-9 ,()#]{0,8}".prop_map(Node::Str),
    ];

    leaf.prop_recursive(5, 48, 4, |inner| {
        ("[a-zA-Z]{1,8}", prop::collection::vec(inner, 0..4))
            .prop_map(|(name, args)| Node::Call(name, args))
    })
}

fn separator_strategy() -> impl Strategy<Value = String> {
    "[ \t\n\r]{1,4}"
}

/// Deepest run of unclosed parens outside string literals
fn paren_depth(text: &str) -> usize {
    let (mut depth, mut max, mut in_string) = (0usize, 0usize, false);
    for c in text.chars() {
        match c {
            '"' => in_string = !in_string,
            '(' if !in_string => {
                depth += 1;
                max = max.max(depth);
            }
            ')' if !in_string => depth -= 1,
            _ => {}
        }
    }
    max
}

proptest! {
    #[test]
    fn prop_output_matches_tree(nodes in prop::collection::vec(node_strategy(), 0..4)) {
        let source: Vec<String> = nodes.iter().map(|n| n.source(" ")).collect();
        let expected: Vec<String> = nodes.iter().map(Node::expected).collect();
        prop_assert_eq!(compile(&source.join("\n")).unwrap(), expected.join("\n"));
    }

    #[test]
    fn prop_whitespace_is_irrelevant(node in node_strategy(), sep in separator_strategy()) {
        let tight = compile(&node.source(" ")).unwrap();
        let loose = compile(&format!("{sep}{}{sep}", node.source(&sep))).unwrap();
        prop_assert_eq!(tight, loose);
    }

    #[test]
    fn prop_nesting_depth_is_preserved(node in node_strategy()) {
        let output = compile(&node.source(" ")).unwrap();
        prop_assert_eq!(paren_depth(&output), node.depth());
    }

    #[test]
    fn prop_literals_pass_through(text in "[0-9]{1,12}", s in "[^\"]{0,16}") {
        prop_assert_eq!(compile(&text).unwrap(), text.clone());
        prop_assert_eq!(compile(&format!("\"{}\"", s)).unwrap(), format!("\"{}\"", s));
    }

    #[test]
    fn prop_compile_never_panics(source in "[ a-z0-9()\"#]{0,24}") {
        let _ = compile(&source);
    }
}
