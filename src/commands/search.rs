//! sgal search コマンド
//!
//! 検索テキストで絞り込んだカテゴリツリーを表示する。

use crate::catalog::{SearchableTree, TreeItem};
use clap::Parser;
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Search text (matches name, description and tags)
    pub text: String,

    /// Output the filtered tree in JSON format
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    let catalog = super::load_catalog();

    let Some(tree) = catalog.search(&args.text) else {
        if args.json {
            println!("null");
        } else {
            println!("No samples matched '{}'", args.text.trim());
        }
        return Ok(());
    };

    if args.json {
        serde_json::to_string_pretty(&tree)
            .map(|json| println!("{json}"))
            .map_err(|e| format!("Failed to serialize tree: {}", e))?;
    } else {
        for line in render_tree(&tree) {
            println!("{line}");
        }
        println!("{} sample(s) matched", tree.sample_count());
    }

    Ok(())
}

/// ツリーをインデント付きの行に変換
fn render_tree(tree: &SearchableTree) -> Vec<String> {
    let mut lines = vec![tree.name().bold().to_string()];
    render_items(tree, 1, &mut lines);
    lines
}

fn render_items(tree: &SearchableTree, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    for item in tree.items() {
        match item {
            TreeItem::Node(node) => {
                lines.push(format!(
                    "{}{} ({})",
                    indent,
                    node.name().cyan(),
                    node.sample_count()
                ));
                render_items(node, depth + 1, lines);
            }
            TreeItem::Sample(sample) => {
                lines.push(format!("{}{}", indent, sample.name()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::descriptor;

    #[test]
    fn test_render_tree_indents_by_depth() {
        let tree = SearchableTree::new(
            "All Samples",
            vec![SearchableTree::new(
                "Layers",
                vec![descriptor("Layers", "WMTS Layer")],
            )],
        );

        let lines = render_tree(&tree);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("All Samples"));
        assert!(lines[1].starts_with("  ") && lines[1].contains("Layers") && lines[1].ends_with("(1)"));
        assert_eq!(lines[2], "    WMTS Layer");
    }
}
