//! End-to-end compilation tests
//!
//! Table of source -> output pairs run through every transform strategy.

use supertiny::{compile, CompileConfig, Compiler, TransformStrategy};

const CASES: &[(&str, &str)] = &[
    ("(add 2 (subtract 4 2))", "add(2, subtract(4, 2))"),
    ("2", "2"),
    ("\"hello\"", "\"hello\""),
    ("(foo)", "foo()"),
    ("", ""),
    ("(print \"hello world\")", "print(\"hello world\")"),
    ("(concat \"\" \"x\")", "concat(\"\", \"x\")"),
    ("(a (b (c (d 1))))", "a(b(c(d(1))))"),
    ("(f 1 2 3 4 5)", "f(1, 2, 3, 4, 5)"),
    ("(a) (b 1)\n(c \"s\")", "a()\nb(1)\nc(\"s\")"),
    ("1 \"two\" (three)", "1\n\"two\"\nthree()"),
    ("(max 007 10)", "max(007, 10)"),
    ("(größe 1)", "größe(1)"),
];

#[test]
fn test_compile_table() {
    for (source, expected) in CASES {
        assert_eq!(
            compile(source).as_deref(),
            Ok(*expected),
            "source: {:?}",
            source
        );
    }
}

#[test]
fn test_compile_table_with_each_strategy() {
    for strategy in [TransformStrategy::Visitor, TransformStrategy::Recursive] {
        let compiler = Compiler::with_config(CompileConfig::new().with_transform(strategy));
        for (source, expected) in CASES {
            assert_eq!(
                compiler.compile(source).as_deref(),
                Ok(*expected),
                "strategy: {}, source: {:?}",
                strategy,
                source
            );
        }
    }
}

#[test]
fn test_whitespace_does_not_change_output() {
    let variants = [
        "(add 2 (subtract 4 2))",
        "  (add   2   (subtract 4 2))  ",
        "(add\n\t2\n\t(subtract\r\n4 2)\n)",
        "(add 2(subtract 4 2))",
    ];
    for source in variants {
        assert_eq!(compile(source).unwrap(), "add(2, subtract(4, 2))");
    }
}

#[test]
fn test_string_contents_pass_through() {
    assert_eq!(
        compile("(log \"  (not a call) 42 \")").unwrap(),
        "log(\"  (not a call) 42 \")"
    );
}

#[test]
fn test_concurrent_compiles_are_independent() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("(f {} (g \"{}\"))", i, "x".repeat(i));
                (i, compile(&source).unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (i, output) = handle.join().unwrap();
        assert_eq!(output, format!("f({}, g(\"{}\"))", i, "x".repeat(i)));
    }
}
