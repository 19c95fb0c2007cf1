use super::*;

#[test]
fn readme_example() {
    let root = parse("[%title v:'Hi'%] [Hello world]").unwrap();
    assert_eq!(root.node_type, NodeType::Panel);
    assert_eq!(root.text, "");
    assert_eq!(root.children.len(), 2);

    let title = &root.children[0];
    assert_eq!(title.node_type, NodeType::Title);
    assert_eq!(title.param("v"), Some("Hi"));
    assert!(title.text.is_empty());

    let text = &root.children[1];
    assert_eq!(text.node_type, NodeType::Text);
    assert_eq!(text.text, "Hello world");
}

#[test]
fn newlines_are_removed_and_spaces_collapsed() {
    let root = parse("[Hello\n   wide \r\n  world  ]").unwrap();
    assert_eq!(root.children[0].text, "Hello wide world");
}

#[test]
fn nested_blocks_yield_one_node_each() {
    let root = parse("[a [b [c] ] ]").unwrap();
    assert_eq!(root.children.len(), 1);
    let a = &root.children[0];
    assert_eq!(a.text, "a");
    assert_eq!(a.children.len(), 1);
    assert_eq!(a.children[0].text, "b");
    assert_eq!(a.children[0].children[0].text, "c");
}

#[test]
fn styles_with_and_without_values() {
    let root = parse("[!m=2 !s=0.5 !border !color='#ff0000' Body text]").unwrap();
    let node = &root.children[0];
    assert_eq!(node.style_number("m"), 2.0);
    assert_eq!(node.style_number("s"), 0.5);
    assert_eq!(node.style_str("border"), Some(""));
    assert_eq!(node.style_str("color"), Some("#ff0000"));
    assert_eq!(node.text, "Body text");
    assert_eq!(node.node_type, NodeType::Text);
}

#[test]
fn style_at_end_of_input() {
    let root = parse("hi !ln=2").unwrap();
    assert_eq!(root.text, "hi");
    assert_eq!(root.style_number("ln"), 2.0);
}

#[test]
fn directive_params_and_units() {
    let root = parse("%card-video src:'clip one.mp4' w:12 h:'50%' loop%").unwrap();
    assert_eq!(root.node_type, NodeType::CardVideo);
    assert_eq!(root.param("src"), Some("clip one.mp4"));
    assert_eq!(root.param("w"), Some("12rem"));
    assert_eq!(root.param("h"), Some("50%"));
    assert_eq!(root.param("loop"), Some(""));
}

#[test]
fn unknown_directive_type_is_panel() {
    let root = parse("%banner%").unwrap();
    assert_eq!(root.node_type, NodeType::Panel);
    assert!(root.params.is_empty());

    let root = parse("%banner% words").unwrap();
    assert_eq!(root.node_type, NodeType::Text);
}

#[test]
fn quoted_literals_are_not_structural() {
    let root = parse("['[not a child] 100%' done]").unwrap();
    let node = &root.children[0];
    assert!(node.children.is_empty());
    assert_eq!(node.text, "'[not a child] 100%' done");
}

#[test]
fn apostrophes_in_words_are_plain_text() {
    let root = parse("[Don't panic] [it's [fine] ]").unwrap();
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.children[0].text, "Don't panic");
    let second = &root.children[1];
    assert_eq!(second.text, "it's");
    assert_eq!(second.children[0].text, "fine");

    let root = parse("['tis open]").unwrap();
    assert_eq!(root.children[0].text, "'tis open");
}

#[test]
fn doubled_brackets_are_literal() {
    let root = parse("[x [[y]] z]").unwrap();
    let node = &root.children[0];
    assert!(node.children.is_empty());
    assert_eq!(node.text, "x [y] z");
}

#[test]
fn structural_errors() {
    assert!(matches!(parse("[open"), Err(DinkyError::Parse { offset: 0, .. })));
    assert!(matches!(parse("a ] b"), Err(DinkyError::Parse { offset: 2, .. })));
    assert!(matches!(parse("x %title"), Err(DinkyError::Parse { offset: 2, .. })));
    assert!(matches!(
        parse("[ok] [bad"),
        Err(DinkyError::Parse { offset: 5, .. })
    ));
}

#[test]
fn nested_error_offsets_are_absolute() {
    match parse("[ab [cd ]]") {
        Err(DinkyError::Parse { .. }) => {}
        other => panic!("expected parse error, got {other:?}"),
    }
    match parse("[a %x]") {
        Err(DinkyError::Parse { offset, .. }) => assert_eq!(offset, 3),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn blank_input_has_no_root() {
    assert!(parse("").is_err());
    assert!(parse(" \n ").is_err());
}

#[test]
fn parsing_is_deterministic() {
    let src = "[%subtitle v:'S'%] [!m=1 one two] [%text%]";
    assert_eq!(parse(src).unwrap(), parse(src).unwrap());
}
