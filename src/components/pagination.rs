use yew::prelude::*;

/// Number of numbered links shown at once
const MAX_PAGE_LINKS: u32 = 5;

/// Page numbers to link, centred on `current` and clamped to `1..=pages`
pub fn page_window(current: u32, pages: u32, max_links: u32) -> Vec<u32> {
    if pages == 0 || max_links == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, pages);
    let span = max_links.min(pages);
    let start = current
        .saturating_sub(span / 2)
        .max(1)
        .min(pages - span + 1);
    (start..start + span).collect()
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page: u32,
    pub pages: u32,
    pub on_change: Callback<u32>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.pages <= 1 {
        return html! {};
    }

    let page = props.page;
    let go = |target: u32| {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(target))
    };

    html! {
        <nav class="pagination">
            <button class="btn-page" disabled={page <= 1} onclick={go(page.saturating_sub(1))}>
                {"‹ Prev"}
            </button>
            { for page_window(page, props.pages, MAX_PAGE_LINKS).into_iter().map(|n| html! {
                <button
                    key={n}
                    class={classes!("btn-page", (n == page).then_some("active"))}
                    onclick={go(n)}
                >
                    { n }
                </button>
            }) }
            <button class="btn-page" disabled={page >= props.pages} onclick={go(page + 1)}>
                {"Next ›"}
            </button>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_fits_all_pages() {
        assert_eq!(page_window(1, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(3, 3, 5), vec![1, 2, 3]);
    }

    #[test]
    fn test_window_centres_on_current() {
        assert_eq!(page_window(6, 20, 5), vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_window_clamps_at_edges() {
        assert_eq!(page_window(1, 20, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 20, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(20, 20, 5), vec![16, 17, 18, 19, 20]);
        assert_eq!(page_window(99, 20, 5), vec![16, 17, 18, 19, 20]);
        assert_eq!(page_window(0, 20, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_empty() {
        assert!(page_window(1, 0, 5).is_empty());
        assert!(page_window(1, 4, 0).is_empty());
    }
}
