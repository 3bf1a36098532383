//! Folder page gallery: thumbnail mask overlays and table-ordered panels.

/// Move the first item whose link is `href` to the end of `items`.
/// Returns false if no item links to `href`.
pub fn move_to_end<T, F>(items: &mut Vec<T>, href: &str, link_of: F) -> bool
where
    F: Fn(&T) -> Option<&str>,
{
    match items.iter().position(|it| link_of(it) == Some(href)) {
        Some(pos) => {
            let item = items.remove(pos);
            items.push(item);
            true
        }
        None => false,
    }
}

/// Reorder `items` to follow `table_links`. Items no row links to stay at the
/// front in their previous relative order.
pub fn sort_by_table<T, F, S>(items: &mut Vec<T>, table_links: &[S], link_of: F)
where
    F: Fn(&T) -> Option<&str>,
    S: AsRef<str>,
{
    for href in table_links {
        move_to_end(items, href.as_ref(), &link_of);
    }
}

/// Base name of a thumbnail: `dir/page_001.thumb.png` -> `dir/page_001`.
pub fn thumb_base(src: &str) -> Option<&str> {
    let (rest, ext) = src.rsplit_once('.')?;
    let (base, kind) = rest.rsplit_once('.')?;
    // a dot in a directory name is not an extension
    if base.is_empty() || ext.contains('/') || kind.contains('/') {
        return None;
    }
    Some(base)
}

/// CSS `background` stacking the black and white blown masks of a thumbnail.
pub fn thumb_mask_background(src: &str) -> Option<String> {
    let base = thumb_base(src)?;
    Some(format!(
        "url({base}.black.thumb.png) 100% 100%, url({base}.white.thumb.png) 100% 100%"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_to_end_moves_first_match_only() {
        let mut items = vec!["a", "b", "c", "b"];
        assert!(move_to_end(&mut items, "b", |s: &&str| Some(*s)));
        assert_eq!(items, vec!["a", "c", "b", "b"]);
        assert!(!move_to_end(&mut items, "z", |s: &&str| Some(*s)));
        assert_eq!(items, vec!["a", "c", "b", "b"]);
    }

    #[test]
    fn panels_follow_table_order() {
        let mut thumbs = vec![
            ("http://x/1.html", "t1"),
            ("http://x/2.html", "t2"),
            ("http://x/3.html", "t3"),
        ];
        let mut hists = thumbs.clone();
        let table = ["http://x/3.html", "http://x/1.html", "http://x/2.html"];

        sort_by_table(&mut thumbs, &table, |t| Some(t.0));
        sort_by_table(&mut hists, &table, |t| Some(t.0));

        let order: Vec<_> = thumbs.iter().map(|t| t.0).collect();
        assert_eq!(order, table);
        assert_eq!(hists, thumbs);
    }

    #[test]
    fn unlinked_items_stay_in_front() {
        let mut items = vec![Some("a"), None, Some("b")];
        sort_by_table(&mut items, &["b", "a"], |i| *i);
        assert_eq!(items, vec![None, Some("b"), Some("a")]);
    }

    #[test]
    fn thumb_background_strips_two_extensions() {
        assert_eq!(thumb_base("img/page_001.thumb.png"), Some("img/page_001"));
        assert_eq!(
            thumb_mask_background("p1.thumb.png").as_deref(),
            Some("url(p1.black.thumb.png) 100% 100%, url(p1.white.thumb.png) 100% 100%")
        );
        assert_eq!(thumb_base("page.png"), None);
        assert_eq!(thumb_base("a.b/page.png"), None);
        assert_eq!(thumb_base("http://127.0.0.1/img/page"), None);
        assert_eq!(
            thumb_base("http://127.0.0.1:8000/img/p1.thumb.png"),
            Some("http://127.0.0.1:8000/img/p1")
        );
    }
}
