//! Documentation pages and the grouped index

use std::fmt::Write;
use std::path::Path;

use fhevm_catalog::ExampleEntry;
use fhevm_scan::DocTags;

/// How many same-category entries a page links to
pub const RELATED_LIMIT: usize = 3;

/// Render the documentation page for one catalog entry.
///
/// `functions` are the exported function names; `related` should already be
/// capped (see [`RELATED_LIMIT`]).
pub fn example_page(
    entry: &ExampleEntry,
    tags: &DocTags,
    functions: &[String],
    related: &[&ExampleEntry],
) -> String {
    let mut page = String::new();

    let _ = writeln!(page, "# {}\n", entry.title);
    let _ = writeln!(page, "## Overview\n\n{}\n", entry.description);

    // The catalog description is the overview, so @title is not repeated
    if let Some(notice) = &tags.notice {
        let _ = writeln!(page, "## Description\n\n{}\n", notice);
    }
    if let Some(dev) = &tags.dev {
        let _ = writeln!(page, "## Technical Details\n\n{}\n", dev);
    }

    let _ = writeln!(page, "**Category**: {}  ", entry.category);
    let _ = writeln!(page, "**Difficulty**: {}\n", entry.difficulty);

    if !functions.is_empty() {
        page.push_str("## Key Functions\n\n");
        for name in functions {
            let _ = writeln!(page, "- `{}()`", name);
        }
        page.push('\n');
    }

    page.push_str("## Files\n\n");
    let _ = writeln!(
        page,
        "- **Contract**: [`{}`]({})",
        entry.source_file_name(),
        entry.source_path
    );
    let _ = writeln!(
        page,
        "- **Test**: [`{}`]({})\n",
        entry.test_file_name(),
        entry.test_path
    );

    page.push_str("## Quick Start\n\n```bash\n");
    page.push_str("# Compile contracts\nnpx hardhat compile\n\n");
    let _ = writeln!(page, "# Run tests\nnpx hardhat test {}\n", entry.test_path);
    let _ = writeln!(
        page,
        "# Generate standalone project\nfhevm-examples create {key} ./output/{key}",
        key = entry.key
    );
    page.push_str("```\n\n");

    if !related.is_empty() {
        page.push_str("## Related Examples\n\n");
        for other in related {
            let _ = writeln!(
                page,
                "- [{}](../{}/{}.md)",
                other.title,
                other.category_slug(),
                other.key
            );
        }
        page.push('\n');
    }

    page.push_str("## Resources\n\n");
    page.push_str("- [FHEVM Documentation](https://docs.zama.ai/fhevm)\n");
    page.push_str("- [Hardhat Documentation](https://hardhat.org/docs)\n");
    if entry.category == "OpenZeppelin" {
        page.push_str(
            "- [OpenZeppelin Confidential Contracts](https://github.com/OpenZeppelin/openzeppelin-confidential-contracts)\n",
        );
    }

    page
}

/// Render the navigation index.
///
/// Links are relative to `docs_dir`, the directory the index is written to.
pub fn summary_index(groups: &[(&str, Vec<&ExampleEntry>)], docs_dir: &Path) -> String {
    let mut summary = String::from("# Summary\n\n* [Introduction](README.md)\n\n");

    for (category, entries) in groups {
        let _ = writeln!(summary, "## {}\n", category);
        for entry in entries {
            let _ = writeln!(
                summary,
                "* [{}]({})",
                entry.title,
                relative_link(&entry.output_doc_path, docs_dir)
            );
        }
        summary.push('\n');
    }

    summary
}

fn relative_link(path: &str, base: &Path) -> String {
    let path = Path::new(path);
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhevm_catalog::Catalog;

    #[test]
    fn test_page_sections() {
        let catalog = Catalog::builtin();
        let entry = catalog.get("fhe-add").unwrap();
        let tags = DocTags {
            title: Some("Adder".into()),
            notice: Some("Adds two encrypted values".into()),
            dev: None,
        };
        let related = catalog.related("fhe-add", RELATED_LIMIT);
        let page = example_page(entry, &tags, &["add".to_string()], &related);

        assert!(page.starts_with("# FHE Add Operation\n\n## Overview\n\n"));
        assert!(page.contains("## Description\n\nAdds two encrypted values\n"));
        assert!(!page.contains("Technical Details"));
        assert!(!page.contains("Adder"));
        assert!(page.contains("**Category**: Basic - FHE Operations  \n**Difficulty**: Beginner\n"));
        assert!(page.contains("## Key Functions\n\n- `add()`\n"));
        assert!(page.contains("- **Contract**: [`FHEAdd.sol`](contracts/basic/fhe-operations/FHEAdd.sol)"));
        assert!(page.contains("fhevm-examples create fhe-add ./output/fhe-add"));
        assert!(page.contains("- [FHE Comparison](../basic---fhe-operations/fhe-comparison.md)"));
        assert!(page.contains("- [FHE If-Then-Else](../basic---fhe-operations/fhe-if-then-else.md)"));
        assert!(!page.contains("OpenZeppelin Confidential Contracts"));
    }

    #[test]
    fn test_page_without_optional_sections() {
        let catalog = Catalog::builtin();
        let entry = catalog.get("fhe-counter").unwrap();
        let page = example_page(entry, &DocTags::default(), &[], &[]);
        assert!(!page.contains("## Key Functions"));
        assert!(!page.contains("## Related Examples"));
        assert!(!page.contains("## Description"));
    }

    #[test]
    fn test_openzeppelin_resource_link() {
        let catalog = Catalog::builtin();
        let entry = catalog.get("confidential-governor").unwrap();
        let page = example_page(entry, &DocTags::default(), &[], &[]);
        assert!(page.contains("OpenZeppelin Confidential Contracts"));
    }

    #[test]
    fn test_summary_index_groups() {
        let catalog = Catalog::builtin();
        let summary = summary_index(&catalog.by_category(), Path::new("docs"));

        assert!(summary.starts_with("# Summary\n\n* [Introduction](README.md)\n\n## Basic\n\n"));
        assert!(summary.contains("* [FHE Counter](basic/fhe-counter.md)\n"));
        assert!(summary.contains("## OpenZeppelin\n\n* [Confidential ERC20 Token](openzeppelin/confidential-erc20.md)\n"));

        let basic = summary.find("## Basic\n").unwrap();
        let decryption = summary.find("## Decryption\n").unwrap();
        let advanced = summary.find("## Advanced\n").unwrap();
        assert!(basic < decryption && decryption < advanced);
    }

    #[test]
    fn test_relative_link_outside_docs() {
        assert_eq!(relative_link("guides/intro.md", Path::new("docs")), "guides/intro.md");
    }
}
