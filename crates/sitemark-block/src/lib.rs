//! Sitemark block engine
//!
//! Splits a Markdown document into blank-line separated blocks, classifies
//! each block, and builds the HTML subtree for it. Inline content is handed
//! to `sitemark-inline`; the resulting spans become leaves via `sitemark-html`.
//!
//! ```text
//! markdown → markdown_to_blocks() → block_to_block_type() → build_block() → <div> root
//! ```
//!
//! # Example
//!
//! ```
//! let root = sitemark_block::markdown_to_html_node("a **b** c").unwrap();
//! assert_eq!(root.render().unwrap(), "<div><p>a <b>b</b> c</p></div>");
//! ```

pub mod blocks;
pub mod builder;
pub mod document;

pub use blocks::{block_to_block_type, markdown_to_blocks, BlockType};
pub use document::{extract_title, markdown_to_html_node};
pub use sitemark_html::{Node, NodeError};

/// Entry point used by page generation; same as [`markdown_to_html_node`].
pub use document::markdown_to_html_node as convert_markdown_to_html;

/// Document conversion error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BlockError {
    #[error(transparent)]
    Inline(#[from] sitemark_inline::InlineError),

    /// The first line of the document is not a `# ` heading.
    #[error("Document has no title: first line must start with '# '")]
    MissingTitle,
}
