use algolab::grammar::{build, precheck, validate, PrecheckError};
use algolab::tree_array::{TreeArray, TreeArrayError};

#[test]
fn precheck_and_validate_agree_on_good_input() {
    for input in ["(a)", "(a(b))", "(a(bc))", "(a (b (d e) c))", "( a ( b c ) )"] {
        assert!(precheck(input).is_ok(), "precheck rejected {input}");
        assert!(validate(input), "validator rejected {input}");
    }
}

#[test]
fn precheck_failures_are_distinct_from_grammar_failures() {
    // rejected before the parser ever runs
    assert!(matches!(precheck(""), Err(PrecheckError::Empty)));
    assert!(matches!(precheck("a(b)"), Err(PrecheckError::NotParenthesized)));
    assert!(matches!(precheck("(a))"), Err(PrecheckError::UnbalancedParens)));
    assert!(matches!(precheck("(a,b)"), Err(PrecheckError::IllegalCharacter(','))));

    // well-formed characters, bad structure: the grammar says no
    for input in ["()", "(a())", "(a(b c d))", "(a)(b)"] {
        assert!(precheck(input).is_ok(), "precheck should pass {input}");
        assert!(!validate(input), "validator should reject {input}");
    }
}

#[test]
fn built_tree_matches_the_validated_shape() {
    let tree = build("(a (b (d e) c))").expect("valid input must build");
    assert_eq!(tree.label, "a");
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.node_count(), 5);
    assert_eq!(tree.leaf_count(), 3);

    let left = tree.left.as_deref().expect("b child");
    assert_eq!(left.label, "b");
    assert_eq!(left.node_count(), 3);
}

#[test]
fn single_node_tree_has_height_zero() {
    let tree = build("(x)").expect("leaf builds");
    assert!(tree.is_leaf());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.leaf_count(), 1);
}

#[test]
fn array_tree_agrees_with_the_owned_tree() {
    let input = "(a(b(d e)c))";
    let owned = build(input).expect("builds");
    let packed = TreeArray::parse(input).expect("parses");

    assert_eq!(packed.rows().len(), owned.node_count());
    assert_eq!(packed.preorder(), vec!['a', 'b', 'd', 'e', 'c']);
    assert_eq!(packed.inorder(), vec!['d', 'b', 'e', 'a', 'c']);
    assert_eq!(packed.postorder(), vec!['d', 'e', 'b', 'c', 'a']);
}

#[test]
fn array_tree_rejects_deep_right_chains() {
    // each level doubles the slot index; eight levels pass 128
    let input = "(a(b(c(d(e(f(g(h))))))))";
    let err = TreeArray::parse(input).expect_err("index space overflows");
    assert!(matches!(err, TreeArrayError::Overflow(_)));
}
