//! Block splitting and classification.

use once_cell::sync::Lazy;
use regex::Regex;

/// A newline, any whitespace (which must include another newline), a newline.
static BLOCK_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("Invalid block separator regex"));

/// Whole-block heading: one to six `#`, one whitespace char, single-line content.
static HEADING_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A#{1,6}\s.+\z").expect("Invalid heading regex"));

static ORDERED_ITEM_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s").expect("Invalid ordered list regex"));

/// Structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Split a document into trimmed, non-empty blocks separated by blank lines.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    BLOCK_SEPARATOR
        .split(markdown)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classify a block. Rules are tried in order and the first match wins;
/// anything unmatched is a paragraph.
pub fn block_to_block_type(block: &str) -> BlockType {
    let lines: Vec<&str> = block.trim().split('\n').collect();

    if is_code_fence(&lines) {
        return BlockType::Code;
    }
    if HEADING_BLOCK.is_match(block) {
        return BlockType::Heading;
    }
    if block.starts_with('>') {
        return BlockType::Quote;
    }

    let mut chars = block.chars();
    if matches!(chars.next(), Some('-' | '*' | '+')) && chars.next() == Some(' ') {
        return BlockType::UnorderedList;
    }

    if lines
        .first()
        .is_some_and(|first| ORDERED_ITEM_START.is_match(first))
    {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

fn is_code_fence(lines: &[&str]) -> bool {
    match lines {
        [first, .., last] => first.trim() == "```" && last.trim() == "```",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    // =========================================================================
    // Splitting
    // =========================================================================

    #[test]
    fn test_blocks_heading_and_paragraph() {
        assert_eq!(markdown_to_blocks("# H\n\nP text"), vec!["# H", "P text"]);
    }

    #[test]
    fn test_blocks_keep_single_newlines() {
        let md = "# This is a heading\n\nThis is a paragraph of text. It has some **bold** and *italic* words inside of it.\n\n* This is the first list item in a list block\n* This is a list item\n* This is another list item";
        assert_eq!(
            markdown_to_blocks(md),
            vec![
                "# This is a heading",
                "This is a paragraph of text. It has some **bold** and *italic* words inside of it.",
                "* This is the first list item in a list block\n* This is a list item\n* This is another list item",
            ]
        );
    }

    #[test]
    fn test_blocks_whitespace_only_separator() {
        assert_eq!(
            markdown_to_blocks("one\n   \t\n\n\ntwo"),
            vec!["one", "two"]
        );
    }

    #[test]
    fn test_blocks_empty_document() {
        assert!(markdown_to_blocks("").is_empty());
        assert!(markdown_to_blocks("\n\n   \n\n").is_empty());
    }

    #[test]
    fn test_blocks_trimmed() {
        assert_eq!(
            markdown_to_blocks("\n    indented\n    lines\n\n"),
            vec!["indented\n    lines"]
        );
    }

    #[test]
    fn test_blocks_resplit_is_stable() {
        let md = "a\nb\n\n\n> q\n\n```\nx\n```\n\n1. one\n2. two";
        for block in markdown_to_blocks(md) {
            assert_eq!(markdown_to_blocks(&block), vec![block.clone()]);
        }
    }

    // =========================================================================
    // Classification
    // =========================================================================

    #[rstest]
    #[case("```\ncode\n```", BlockType::Code)]
    #[case("```\n```", BlockType::Code)]
    #[case("```\n  x\n  ```", BlockType::Code)]
    #[case("# Heading", BlockType::Heading)]
    #[case("###### Six", BlockType::Heading)]
    #[case("####### Seven", BlockType::Paragraph)]
    #[case("#NoSpace", BlockType::Paragraph)]
    #[case("# Two\nlines", BlockType::Paragraph)]
    #[case("> quoted", BlockType::Quote)]
    #[case(">tight\n> more", BlockType::Quote)]
    #[case("- item", BlockType::UnorderedList)]
    #[case("* item\n* item", BlockType::UnorderedList)]
    #[case("+ item", BlockType::UnorderedList)]
    #[case("**bold** start", BlockType::Paragraph)]
    #[case("-no space", BlockType::Paragraph)]
    #[case("1. one\n2. two", BlockType::OrderedList)]
    #[case("10. ten", BlockType::OrderedList)]
    #[case("1.no space", BlockType::Paragraph)]
    #[case("just text", BlockType::Paragraph)]
    #[case("```\nunclosed", BlockType::Paragraph)]
    fn test_block_type(#[case] block: &str, #[case] expected: BlockType) {
        assert_eq!(block_to_block_type(block), expected);
    }

    #[test]
    fn test_code_fence_beats_other_rules() {
        assert_eq!(block_to_block_type("```\n# not a heading\n```"), BlockType::Code);
    }
}
