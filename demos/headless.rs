//! The engine without a renderer.
//!
//! Runs a scripted interaction against `TreeState` alone and prints the
//! visible-row flattening after each step — the same sequence a rendering
//! layer would iterate to draw the tree.
//!
//! Run with: `cargo run --example headless`

use trellis::{Node, TreeState};

fn sample_tree() -> Vec<Node> {
    vec![
        Node::branch(
            "docs",
            "Documents",
            vec![
                Node::branch("work", "Work", vec![Node::leaf("report", "report.pdf")]),
                Node::leaf("notes", "notes.txt"),
            ],
        ),
        Node::leaf("readme", "README.md"),
    ]
}

fn print_rows(step: &str, tree: &TreeState) {
    println!("{step}:");
    for row in tree.visible_rows() {
        println!("  {}{}", "  ".repeat(row.depth), row.node.label());
    }
    println!();
}

fn main() {
    let mut tree = TreeState::new(sample_tree())
        .with_on_click(|node| println!("  (click hook) opened {}", node.label()))
        .with_on_action(|node| println!("  (action hook) menu for {}", node.label()));

    print_rows("initial (all collapsed)", &tree);

    for id in ["docs", "work", "report", "docs", "docs"] {
        println!("activate {id}");
        tree.activate(id);
        print_rows("rows", &tree);
    }

    println!("action on work");
    tree.action("work");
    println!();

    tree.collapse_all();
    print_rows("after collapse_all", &tree);
}
