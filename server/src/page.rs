//! Full-document render for the index page.
//!
//! Everything after first load is fragment swaps; this page only has to
//! load the client runtime, embed the stylesheet, and render the initial
//! list plus the new-todo form.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use todo_core::{render, ListView};

const STYLESHEET: &str = include_str!("style.css");

/// The entry-point document served at `GET /`.
pub fn index(view: &ListView) -> Markup {
    html! { (DOCTYPE) html lang="en" {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";

            script src="https://unpkg.com/htmx.org@1.9.12" { }
            style { (PreEscaped(STYLESHEET)) }

            title { "todos" }
        }

        body {
            section .todoapp {
                header .header {
                    h1 { "todos" }
                    form hx-post="/todos" hx-target="#todo-list" hx-swap="outerHTML"
                        "hx-on::after-request"="if (event.detail.successful) this.reset()" {
                        input .new-todo name="title"
                            placeholder="What needs to be done?" autofocus;
                    }
                }

                (render::render_list_view(view))
            }

            footer .info {
                p { "Hover a todo to edit its title" }
                p { "Based on " a href="http://todomvc.com" { "TodoMVC" } }
            }
        }
    } }
}
