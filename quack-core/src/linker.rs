//! Hover highlighting of linked text blocks.
//!
//! Text-block overlays are chained into reading order through `next`/`prev`
//! links. Hovering one block tags every block of its chain so the whole
//! article lights up, and the status fields show the block id, its successor
//! and its OCR text.

use std::collections::HashSet;

use crate::classes::{has_class, with_class, without_one_class};
use crate::groups::OverlayGroups;

pub const GROUP_TAG: &str = "group";
pub const NEXT_TAG: &str = "next";
/// Class the page generator gives to text blocks that take part in a chain.
pub const HIGHLIGHT_CLASS: &str = "highlight";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusField {
    Id,
    NextId,
    Ocr,
}

/// The part of the document the linker touches.
pub trait Page {
    /// Class attribute of the element with `id`, `None` if there is no such element.
    fn class_name(&self, id: &str) -> Option<String>;
    fn set_class_name(&mut self, id: &str, class_name: &str);
    fn set_status(&mut self, field: StatusField, text: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

pub struct Linker {
    groups: OverlayGroups,
}

impl Linker {
    pub fn new(groups: OverlayGroups) -> Self {
        Linker { groups }
    }

    pub fn groups(&self) -> &OverlayGroups {
        &self.groups
    }

    pub fn mark_forward<P: Page>(&self, page: &mut P, id: &str, tag: &str) {
        self.walk(page, id, Direction::Forward, |page, el| add_tag(page, el, tag));
    }

    pub fn mark_backward<P: Page>(&self, page: &mut P, id: &str, tag: &str) {
        self.walk(page, id, Direction::Backward, |page, el| add_tag(page, el, tag));
    }

    pub fn unmark_forward<P: Page>(&self, page: &mut P, id: &str, tag: &str) {
        self.walk(page, id, Direction::Forward, |page, el| remove_tag(page, el, tag));
    }

    pub fn unmark_backward<P: Page>(&self, page: &mut P, id: &str, tag: &str) {
        self.walk(page, id, Direction::Backward, |page, el| remove_tag(page, el, tag));
    }

    pub fn hover_enter<P: Page>(&self, page: &mut P, id: &str) {
        let group = self.groups.get(id);
        page.set_status(StatusField::Id, &format!("ID: {}", id));
        page.set_status(
            StatusField::NextId,
            &format!("IDNEXT: {}", group.next.unwrap_or_default()),
        );
        page.set_status(StatusField::Ocr, group.ocr_text.unwrap_or_default());

        if page.class_name(id).is_none() {
            return;
        }
        // the backward walk starts one block back so the hovered block is tagged once
        self.mark_forward(page, id, GROUP_TAG);
        if let Some(prev) = group.prev {
            self.mark_backward(page, prev, GROUP_TAG);
        }
        if let Some(next) = group.next {
            add_tag(page, next, NEXT_TAG);
        }
    }

    /// Undo [`Linker::hover_enter`]: every tag it added is removed once, so
    /// tags the page already carried survive.
    pub fn hover_exit<P: Page>(&self, page: &mut P, id: &str) {
        page.set_status(StatusField::Ocr, "");
        page.set_status(StatusField::NextId, "IDNEXT: ");
        page.set_status(StatusField::Id, "ID: ");

        if page.class_name(id).is_none() {
            return;
        }
        let group = self.groups.get(id);
        self.unmark_forward(page, id, GROUP_TAG);
        if let Some(prev) = group.prev {
            self.unmark_backward(page, prev, GROUP_TAG);
        }
        if let Some(next) = group.next {
            remove_tag(page, next, NEXT_TAG);
        }
    }

    /// Tag each highlighted chain start with `g1`, `g2`, ... in overlay order.
    /// Returns the number of groups colored.
    pub fn color_groups<'a, P, I>(&self, page: &mut P, overlay_ids: I) -> usize
    where
        P: Page,
        I: IntoIterator<Item = &'a str>,
    {
        let mut count = 1;
        for id in overlay_ids {
            let Some(class_name) = page.class_name(id) else {
                log::warn!("Unable to get element with id {}", id);
                continue;
            };
            // already colored blocks carry a g<N> token and no longer match
            if class_name == HIGHLIGHT_CLASS && self.groups.next(id).is_some() {
                self.mark_forward(page, id, &format!("g{}", count));
                count += 1;
            }
        }
        log::debug!("colored {} overlay groups", count - 1);
        count - 1
    }

    fn link(&self, id: &str, dir: Direction) -> Option<&str> {
        match dir {
            Direction::Forward => self.groups.next(id),
            Direction::Backward => self.groups.prev(id),
        }
    }

    // Stops at the first id without an element, and at the first repeat.
    fn walk<P, F>(&self, page: &mut P, start: &str, dir: Direction, mut visit: F)
    where
        P: Page,
        F: FnMut(&mut P, &str),
    {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut current = Some(start);
        while let Some(id) = current {
            if !seen.insert(id) {
                log::warn!("overlay chain starting at {} loops back to {}", start, id);
                return;
            }
            if page.class_name(id).is_none() {
                return;
            }
            visit(page, id);
            current = self.link(id, dir);
        }
    }
}

fn add_tag<P: Page>(page: &mut P, id: &str, tag: &str) {
    if let Some(class_name) = page.class_name(id) {
        page.set_class_name(id, &with_class(&class_name, tag));
    }
}

fn remove_tag<P: Page>(page: &mut P, id: &str, tag: &str) {
    if let Some(class_name) = page.class_name(id)
        && has_class(&class_name, tag)
    {
        page.set_class_name(id, &without_one_class(&class_name, tag));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct MemPage {
        classes: HashMap<String, String>,
        status: HashMap<StatusField, String>,
    }

    impl MemPage {
        fn with(ids: &[(&str, &str)]) -> Self {
            MemPage {
                classes: ids
                    .iter()
                    .map(|(id, c)| (id.to_string(), c.to_string()))
                    .collect(),
                status: HashMap::new(),
            }
        }

        fn class(&self, id: &str) -> &str {
            self.classes.get(id).map(String::as_str).unwrap_or("<missing>")
        }
    }

    impl Page for MemPage {
        fn class_name(&self, id: &str) -> Option<String> {
            self.classes.get(id).cloned()
        }

        fn set_class_name(&mut self, id: &str, class_name: &str) {
            if let Some(c) = self.classes.get_mut(id) {
                *c = class_name.to_string();
            }
        }

        fn set_status(&mut self, field: StatusField, text: &str) {
            self.status.insert(field, text.to_string());
        }
    }

    fn abc() -> Linker {
        Linker::new(OverlayGroups::from_links([("A", "B"), ("B", "C")]).with_ocr("B", "middle"))
    }

    #[test]
    fn hover_marks_whole_chain_and_successor() {
        let linker = abc();
        let mut page = MemPage::with(&[("A", "highlight"), ("B", "highlight"), ("C", "highlight")]);
        linker.hover_enter(&mut page, "B");

        assert_eq!(page.class("A"), "highlight group");
        assert_eq!(page.class("B"), "highlight group");
        assert_eq!(page.class("C"), "highlight group next");
        assert_eq!(page.status[&StatusField::Id], "ID: B");
        assert_eq!(page.status[&StatusField::NextId], "IDNEXT: C");
        assert_eq!(page.status[&StatusField::Ocr], "middle");
    }

    #[test]
    fn hover_round_trip_restores_classes() {
        let linker = abc();
        let before = [("A", "highlight g1"), ("B", "highlight"), ("C", "")];
        let mut page = MemPage::with(&before);
        linker.hover_enter(&mut page, "A");
        linker.hover_exit(&mut page, "A");
        for (id, class) in before {
            assert_eq!(page.class(id), class, "class of {}", id);
        }
        assert_eq!(page.status[&StatusField::Id], "ID: ");
        assert_eq!(page.status[&StatusField::NextId], "IDNEXT: ");
        assert_eq!(page.status[&StatusField::Ocr], "");
    }

    #[test]
    fn status_defaults_for_chain_end() {
        let linker = abc();
        let mut page = MemPage::with(&[("C", "")]);
        linker.hover_enter(&mut page, "C");
        assert_eq!(page.status[&StatusField::NextId], "IDNEXT: ");
        assert_eq!(page.status[&StatusField::Ocr], "");
    }

    #[test]
    fn missing_elements_are_noops() {
        let linker = abc();
        let mut page = MemPage::default();
        linker.hover_enter(&mut page, "nope");
        linker.hover_exit(&mut page, "nope");
        linker.mark_forward(&mut page, "A", "x");
        linker.unmark_backward(&mut page, "C", "x");
        assert!(page.classes.is_empty());
    }

    #[test]
    fn missing_element_terminates_chain() {
        let linker = abc();
        let mut page = MemPage::with(&[("A", ""), ("C", "")]);
        linker.mark_forward(&mut page, "A", "group");
        assert_eq!(page.class("A"), "group");
        assert_eq!(page.class("C"), "");
    }

    #[test]
    fn round_trip_keeps_tags_the_page_already_had() {
        let linker = abc();
        let before = [("A", "highlight group"), ("B", "next highlight"), ("C", "highlight next")];
        let mut page = MemPage::with(&before);
        linker.hover_enter(&mut page, "B");
        assert!(has_class(page.class("C"), NEXT_TAG));
        linker.hover_exit(&mut page, "B");
        for (id, class) in before {
            assert_eq!(page.class(id), class, "class of {}", id);
        }
    }

    #[test]
    fn missing_hovered_element_leaves_successor_alone() {
        let linker = abc();
        let mut page = MemPage::with(&[("C", "highlight")]);
        linker.hover_enter(&mut page, "B");
        assert_eq!(page.class("C"), "highlight");
        assert_eq!(page.status[&StatusField::Id], "ID: B");
        linker.hover_exit(&mut page, "B");
        assert_eq!(page.class("C"), "highlight");
    }

    #[test]
    fn cyclic_chain_terminates() {
        let linker = Linker::new(OverlayGroups::from_links([("A", "B"), ("B", "A")]));
        let mut page = MemPage::with(&[("A", ""), ("B", "")]);
        linker.hover_enter(&mut page, "A");
        assert!(has_class(page.class("A"), GROUP_TAG));
        assert!(has_class(page.class("B"), GROUP_TAG));
        assert!(has_class(page.class("B"), NEXT_TAG));
        linker.hover_exit(&mut page, "A");
        assert_eq!(page.class("A"), "");
        assert_eq!(page.class("B"), "");
    }

    #[test]
    fn color_groups_numbers_highlighted_chains() {
        let linker = Linker::new(OverlayGroups::from_links([("A", "B"), ("X", "Y")]));
        let mut page = MemPage::with(&[
            ("A", "highlight"),
            ("B", "highlight"),
            ("X", "highlight"),
            ("Y", "highlight"),
            ("Z", "highlight"),
        ]);
        let colored = linker.color_groups(&mut page, ["A", "B", "gone", "X", "Y", "Z"]);
        assert_eq!(colored, 2);
        assert_eq!(page.class("A"), "highlight g1");
        assert_eq!(page.class("B"), "highlight g1");
        assert_eq!(page.class("X"), "highlight g2");
        assert_eq!(page.class("Y"), "highlight g2");
        assert_eq!(page.class("Z"), "highlight");
    }
}
