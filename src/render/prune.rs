//! DOM pruning executed in the rendered page's own context.
//!
//! Pruning is a remote mutation: the scripts built here are evaluated inside
//! the document before PDF capture, and have no return value. Which scripts
//! run is derived from the disabled configuration flags.

use serde_json::json;

use crate::config::RenderOptions;

/// A contiguous sibling range to delete: starts at the element containing
/// `start_selector`, ends at (and including) the first following sibling
/// carrying `end_class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PruneRule {
    pub start_selector: &'static str,
    pub end_class: &'static str,
}

/// Section rules for every disabled content flag. Order is stable.
pub fn section_rules(options: &RenderOptions) -> Vec<PruneRule> {
    let mut rules = Vec::new();
    if !options.related {
        rules.push(PruneRule {
            start_selector: "#See_also",
            end_class: "div-col",
        });
    }
    if !options.footnotes {
        rules.push(PruneRule {
            start_selector: "#Footnotes",
            end_class: "reflist",
        });
    }
    if !options.references {
        rules.push(PruneRule {
            start_selector: "#References",
            end_class: "div-col",
        });
    }
    rules
}

/// Removes every thumbnail container when images are disabled.
pub const STRIP_IMAGES_SCRIPT: &str = r"
    document.querySelectorAll('.thumbinner').forEach((element) => element.remove());
";

/// Removes the single table-of-contents element when contents are disabled.
pub const STRIP_TOC_SCRIPT: &str = r"
    document.querySelector('.toc')?.remove();
";

/// Build the sibling-range removal script with the rules inlined as JSON.
///
/// For each rule: find the start marker's parent, walk that parent's sibling
/// group in document order, enter removing mode at the sibling whose content
/// matches the marker, delete while removing, and exit after deleting a
/// sibling that carries the end class (the boundary is deleted, its successor
/// preserved). A missing start marker skips the rule. If the end class never
/// appears, the remainder of the sibling group is removed; this is the
/// documented, deterministic boundary behavior.
pub fn section_prune_script(rules: &[PruneRule]) -> String {
    let rules_json = json!(rules
        .iter()
        .map(|r| [r.start_selector, r.end_class])
        .collect::<Vec<_>>());

    format!(
        r"(() => {{
    const rules = {rules_json};
    for (const [startSelector, endClass] of rules) {{
        const marker = document.querySelector(startSelector)?.parentElement;
        if (!marker || !marker.parentElement) continue;

        let removing = false;
        for (const element of Array.from(marker.parentElement.children)) {{
            if (element.innerHTML === marker.innerHTML) removing = true;
            if (removing) element.remove();
            if (element.classList.contains(endClass)) removing = false;
        }}
    }}
}})()"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_disable_all_three_sections() {
        let rules = section_rules(&RenderOptions::default());
        assert_eq!(
            rules
                .iter()
                .map(|r| (r.start_selector, r.end_class))
                .collect::<Vec<_>>(),
            vec![
                ("#See_also", "div-col"),
                ("#Footnotes", "reflist"),
                ("#References", "div-col"),
            ]
        );
    }

    #[test]
    fn enabled_sections_produce_no_rules() {
        let options = RenderOptions {
            related: true,
            footnotes: true,
            references: true,
            ..RenderOptions::default()
        };
        assert!(section_rules(&options).is_empty());
    }

    #[test]
    fn rule_derivation_is_deterministic() {
        let options = RenderOptions::default();
        assert_eq!(section_rules(&options), section_rules(&options));
    }

    #[test]
    fn script_inlines_rules_as_json_pairs() {
        let rules = section_rules(&RenderOptions::default());
        let script = section_prune_script(&rules);
        assert!(script.contains(r##"["#See_also","div-col"]"##));
        assert!(script.contains(r##"["#Footnotes","reflist"]"##));
        assert!(script.contains(r##"["#References","div-col"]"##));
        assert!(script.contains("element.classList.contains(endClass)"));
    }
}
