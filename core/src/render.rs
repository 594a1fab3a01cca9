//! Fragment renderer.
//!
//! # Design
//! Pure functions from domain values to maud [`Markup`]: identical input
//! yields byte-identical output — no timestamps, no randomness, no map
//! iteration. Each rendered control carries its target endpoint and swap
//! target (`hx-*` attributes), which together are the hypermedia contract
//! with the client runtime; titles are HTML-escaped by maud.
//!
//! Fragment identity scheme: an item renders as `li#todo-{id}`, the list
//! container as `main#todo-list`, and the remaining count as
//! `span#todo-count`. Controls that change a single item swap
//! `#todo-{id}` with `outerHTML`; list-shaped responses swap `#todo-list`.

use maud::{html, Markup};

use crate::types::{ListView, TodoItem, ViewFilter};

/// One todo as a self-contained `li`, addressable as `#todo-{id}`.
pub fn render_item(item: &TodoItem) -> Markup {
    let target = format!("#todo-{}", item.id);
    html! {
        li .todo .completed[item.completed] #{"todo-" (item.id)} {
            div .view {
                input .toggle type="checkbox" checked[item.completed]
                    hx-patch={"/todos/" (item.id) "/toggle"}
                    hx-target=(target) hx-swap="outerHTML";
                label { (item.title) }
                button .destroy hx-delete={"/todos/" (item.id)}
                    hx-target=(target) hx-swap="outerHTML" { }
            }
            form .edit hx-patch={"/todos/" (item.id)}
                hx-target=(target) hx-swap="outerHTML" {
                input .edit name="title" value=(item.title);
            }
        }
    }
}

/// The list container `#todo-list`: the items selected by `filter`, then
/// the footer with the remaining count and the filter controls.
pub fn render_list(items: &[TodoItem], filter: ViewFilter, remaining: usize) -> Markup {
    let any_completed = items.iter().any(|item| item.completed);
    html! {
        main .main #todo-list {
            ul .todo-list {
                @for item in items.iter().filter(|item| filter.matches(item)) {
                    (render_item(item))
                }
            }
            (footer(filter, remaining, any_completed))
        }
    }
}

/// Convenience over [`render_list`] for a prepared [`ListView`].
pub fn render_list_view(view: &ListView) -> Markup {
    render_list(&view.items, view.filter, view.remaining)
}

/// The remaining-count span. With `oob` set it carries
/// `hx-swap-oob="true"` so it can ride along with an item fragment and
/// update the footer count out of band.
pub fn render_count(remaining: usize, oob: bool) -> Markup {
    html! {
        span .todo-count #todo-count hx-swap-oob=[oob.then_some("true")] {
            strong { (remaining) }
            " item" @if remaining != 1 { "s" } " left"
        }
    }
}

/// Minimal alert fragment for error responses.
pub fn render_error(message: &str) -> Markup {
    html! { div .error role="alert" { (message) } }
}

fn footer(filter: ViewFilter, remaining: usize, any_completed: bool) -> Markup {
    html! {
        footer .footer #todo-footer {
            (render_count(remaining, false))
            ul .filters {
                @for choice in ViewFilter::VARIANTS {
                    li {
                        a .selected[choice == filter]
                            href={"/todos?filter=" (choice.query_value())}
                            hx-get={"/todos?filter=" (choice.query_value())}
                            hx-target="#todo-list" hx-swap="outerHTML" { (choice.label()) }
                    }
                }
            }
            @if any_completed {
                button .clear-completed hx-delete="/todos/completed"
                    hx-target="#todo-list" hx-swap="outerHTML" { "Clear completed" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn item(title: &str, completed: bool) -> TodoItem {
        TodoItem {
            id: Uuid::nil(),
            title: title.to_string(),
            completed,
            created_at: 0,
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let items = vec![item("One", false), item("Two", true)];
        let first = render_list(&items, ViewFilter::All, 1).into_string();
        let second = render_list(&items, ViewFilter::All, 1).into_string();
        assert_eq!(first, second);
    }

    #[test]
    fn item_markup_is_addressable_by_id() {
        let html = render_item(&item("Walk dog", false)).into_string();
        assert!(html.contains(r#"id="todo-00000000-0000-0000-0000-000000000000""#));
        assert!(html.contains(r#"hx-patch="/todos/00000000-0000-0000-0000-000000000000/toggle""#));
        assert!(html.contains(r#"hx-delete="/todos/00000000-0000-0000-0000-000000000000""#));
    }

    #[test]
    fn checkbox_reflects_completion() {
        let active = render_item(&item("Walk dog", false)).into_string();
        assert!(!active.contains("checked"));
        let done = render_item(&item("Walk dog", true)).into_string();
        assert!(done.contains("checked"));
        assert!(done.contains(r#"class="todo completed""#));
    }

    #[test]
    fn titles_are_escaped() {
        let html = render_item(&item("<script>alert(1)</script>", false)).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn count_pluralizes() {
        assert!(render_count(1, false)
            .into_string()
            .contains("<strong>1</strong> item left"));
        assert!(render_count(0, false)
            .into_string()
            .contains("<strong>0</strong> items left"));
        assert!(render_count(2, false)
            .into_string()
            .contains("<strong>2</strong> items left"));
    }

    #[test]
    fn oob_count_carries_swap_attribute() {
        assert!(render_count(3, true)
            .into_string()
            .contains(r#"hx-swap-oob="true""#));
        assert!(!render_count(3, false).into_string().contains("hx-swap-oob"));
    }

    #[test]
    fn list_applies_filter_without_reordering() {
        let mut first = item("First", false);
        first.id = Uuid::from_u128(1);
        let mut second = item("Second", true);
        second.id = Uuid::from_u128(2);
        let items = vec![first, second];

        let active = render_list(&items, ViewFilter::Active, 1).into_string();
        assert!(active.contains("First"));
        assert!(!active.contains("Second"));

        let all = render_list(&items, ViewFilter::All, 1).into_string();
        let first_pos = all.find("First").unwrap();
        let second_pos = all.find("Second").unwrap();
        assert!(first_pos < second_pos);
    }

    #[test]
    fn footer_marks_current_filter_selected() {
        let items = vec![item("One", false)];
        let html = render_list(&items, ViewFilter::Active, 1).into_string();
        assert!(html.contains(r#"class="selected" href="/todos?filter=active""#));
        assert!(!html.contains(r#"class="selected" href="/todos?filter=completed""#));
    }

    #[test]
    fn clear_completed_button_needs_a_completed_item() {
        let none_done = render_list(&[item("One", false)], ViewFilter::All, 1).into_string();
        assert!(!none_done.contains("clear-completed"));
        let one_done = render_list(&[item("One", true)], ViewFilter::All, 0).into_string();
        assert!(one_done.contains("clear-completed"));
        assert!(one_done.contains(r#"hx-delete="/todos/completed""#));
    }

    #[test]
    fn error_fragment_carries_the_message() {
        let html = render_error("title must not be empty").into_string();
        assert!(html.contains("title must not be empty"));
        assert!(html.contains(r#"role="alert""#));
    }
}
