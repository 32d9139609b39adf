//! Opt-in rendering of per-breakpoint style overrides.
//!
//! Each block carrying non-empty `responsive` overrides is given a class
//! `mb-r{n}`, numbered in document order, and one `@media` block per
//! breakpoint collects the rules.

use std::collections::HashMap;

use mailblock_document::{Block, Document, LeafBlock, Responsive, Styles};

use crate::styles::important_declarations;

const MOBILE_QUERY: &str = "(max-width:600px)";
const TABLET_QUERY: &str = "(min-width:601px) and (max-width:900px)";
const DESKTOP_QUERY: &str = "(min-width:901px)";

pub(crate) struct ResponsiveRules<'a> {
    /// (block id, class, overrides) in document order
    entries: Vec<(&'a str, String, &'a Responsive)>,
}

impl<'a> ResponsiveRules<'a> {
    pub(crate) fn collect(document: &'a Document) -> Self {
        let leaves = document.iter().flat_map(|block| -> Box<dyn Iterator<Item = &'a LeafBlock> + 'a> {
            match block {
                Block::Leaf(leaf) => Box::new(std::iter::once(leaf)),
                Block::Layout(layout) => Box::new(layout.leaves()),
            }
        });

        let entries = leaves
            .filter_map(|leaf| {
                leaf.responsive
                    .as_ref()
                    .filter(|responsive| !responsive.is_empty())
                    .map(|responsive| (leaf.id.as_str(), responsive))
            })
            .enumerate()
            .map(|(n, (id, responsive))| (id, format!("mb-r{}", n), responsive))
            .collect();

        Self { entries }
    }

    pub(crate) fn classes_by_id(&self) -> HashMap<&'a str, String> {
        self.entries
            .iter()
            .map(|(id, class, _)| (*id, class.clone()))
            .collect()
    }

    pub(crate) fn to_css(&self) -> String {
        let mut css = String::new();
        self.push_media(&mut css, MOBILE_QUERY, |r| r.mobile.as_ref());
        self.push_media(&mut css, TABLET_QUERY, |r| r.tablet.as_ref());
        self.push_media(&mut css, DESKTOP_QUERY, |r| r.desktop.as_ref());
        css
    }

    fn push_media(
        &self,
        css: &mut String,
        query: &str,
        pick: impl Fn(&Responsive) -> Option<&Styles>,
    ) {
        let rules: Vec<String> = self
            .entries
            .iter()
            .filter_map(|(_, class, responsive)| {
                pick(*responsive)
                    .filter(|styles| !styles.is_empty())
                    .map(|styles| format!(".{}{{{}}}", class, important_declarations(styles)))
            })
            .collect();

        if !rules.is_empty() {
            css.push_str(&format!("@media {}{{{}}}", query, rules.concat()));
        }
    }
}
