//! Document assembly and title extraction.

use crate::blocks::{block_to_block_type, markdown_to_blocks};
use crate::builder::build_block;
use crate::BlockError;
use sitemark_html::Node;
use tracing::{debug, warn};

/// Convert a whole Markdown document into a single `<div>` root.
///
/// The root is returned even when the document has no blocks; rendering
/// such a root fails with [`sitemark_html::NodeError::EmptyChildren`].
pub fn markdown_to_html_node(markdown: &str) -> Result<Node, BlockError> {
    let blocks = markdown_to_blocks(markdown);
    debug!(blocks = blocks.len(), "split document");

    let mut children = Vec::with_capacity(blocks.len());
    for block in &blocks {
        let block_type = block_to_block_type(block);
        debug!(?block_type, block = %block, "classified block");
        children.push(build_block(block, block_type)?);
    }

    if children.is_empty() {
        warn!("document produced no blocks");
    }

    Ok(Node::parent("div", children))
}

/// Extract the page title from the first line, which must start with `# `.
///
/// Leading `#` and space characters and trailing whitespace are stripped.
pub fn extract_title(markdown: &str) -> Result<String, BlockError> {
    let first_line = markdown.split('\n').next().unwrap_or_default();
    if !first_line.starts_with("# ") {
        return Err(BlockError::MissingTitle);
    }

    let title = first_line
        .trim_start_matches(|c: char| c == '#' || c == ' ')
        .trim_end();
    Ok(title.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sitemark_html::NodeError;

    fn to_html(markdown: &str) -> String {
        markdown_to_html_node(markdown).unwrap().render().unwrap()
    }

    // =========================================================================
    // Assembly
    // =========================================================================

    #[test]
    fn test_paragraphs() {
        let md = "
        This is **bolded** paragraph
        text in a p
        tag here

        This is another paragraph with _italic_ text and `code` here

        ";
        assert_eq!(
            to_html(md),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn test_indented_codeblock() {
        let md = "
        ```
        This is text that _should_ remain
        the **same** even with inline stuff
        ```
        ";
        assert_eq!(
            to_html(md),
            "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn test_headings() {
        let md = "
            # Heading 1

            ## Heading 2 with **bold**

            ### Heading 3 with `code`
            ";
        assert_eq!(
            to_html(md),
            "<div><h1>Heading 1</h1><h2>Heading 2 with <b>bold</b></h2><h3>Heading 3 with <code>code</code></h3></div>"
        );
    }

    #[test]
    fn test_indented_list() {
        let md = "
        * Item 1
        * Item 2
        * Item 3 with *italic*
        ";
        assert_eq!(
            to_html(md),
            "<div><ul><li>Item 1</li><li>Item 2</li><li>Item 3 with <i>italic</i></li></ul></div>"
        );
    }

    #[test]
    fn test_mixed_document() {
        let md = "# Title\n\nIntro with a [link](https://example.com).\n\n> quoted\n\n1. one\n2. two";
        assert_eq!(
            to_html(md),
            "<div><h1>Title</h1><p>Intro with a <a href=\"https://example.com\">link</a>.</p><blockquote>quoted</blockquote><ol><li>one</li><li>two</li></ol></div>"
        );
    }

    #[test]
    fn test_empty_document_builds_but_fails_to_render() {
        let root = markdown_to_html_node("\n\n  \n").unwrap();
        assert_eq!(
            root.render().unwrap_err(),
            NodeError::EmptyChildren { tag: "div".into() }
        );
    }

    #[test]
    fn test_inline_error_aborts_document() {
        let err = markdown_to_html_node("fine\n\nbroken **bold").unwrap_err();
        assert!(matches!(err, BlockError::Inline(_)));
    }

    // =========================================================================
    // Title
    // =========================================================================

    #[test]
    fn test_extract_title() {
        assert_eq!(extract_title("# Title!\n## subtitle").unwrap(), "Title!");
    }

    #[test]
    fn test_extract_title_trailing_whitespace() {
        assert_eq!(extract_title("#   Spaced out  \t\nbody").unwrap(), "Spaced out");
    }

    #[test]
    fn test_extract_title_only_line() {
        assert_eq!(extract_title("# Solo").unwrap(), "Solo");
    }

    #[test]
    fn test_no_title() {
        assert_eq!(
            extract_title("There's no title here.\n# But there's an h1 here...").unwrap_err(),
            BlockError::MissingTitle
        );
    }

    #[test]
    fn test_h2_is_not_a_title() {
        assert_eq!(extract_title("## Sub\n").unwrap_err(), BlockError::MissingTitle);
    }

    #[test]
    fn test_leading_blank_line_is_not_a_title() {
        assert_eq!(extract_title("\n# Late").unwrap_err(), BlockError::MissingTitle);
    }
}
