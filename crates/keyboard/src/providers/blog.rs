//! Shortcuts for the blog section.
//!
//! `j`/`k` and the arrow keys mean different things on the post list and on
//! a post page; the two meanings are split by guard, not by binding.

use crate::command::{Category, Command, Effect};
use crate::context::{Context, ExecutionContext, Section};
use crate::deps::ScrollRequest;
use crate::key::KeyBinding;

use super::not_typing;

/// True for `/blog/<slug>` with a non-empty slug.
pub fn is_post_page(path: &str) -> bool {
    path.strip_prefix("/blog/")
        .is_some_and(|slug| !slug.trim_matches('/').is_empty())
}

fn reading(ctx: &ExecutionContext<'_>) -> bool {
    not_typing(ctx) && is_post_page(ctx.current_path)
}

fn browsing(ctx: &ExecutionContext<'_>) -> bool {
    not_typing(ctx) && !is_post_page(ctx.current_path)
}

fn blog(id: &str, description: &str) -> Command {
    Command::new(id, description).with_context(Context::Blog)
}

fn down_keys() -> [KeyBinding; 2] {
    [KeyBinding::new("j").case_insensitive(), KeyBinding::new("ArrowDown")]
}

fn up_keys() -> [KeyBinding; 2] {
    [KeyBinding::new("k").case_insensitive(), KeyBinding::new("ArrowUp")]
}

fn scroll(id: &str, description: &str, request: ScrollRequest) -> Command {
    blog(id, description)
        .with_category(Category::View)
        .with_priority(10)
        .with_guard(reading)
        .with_action(move |ctx| {
            ctx.deps.scroll(request);
            Ok(Effect::Done)
        })
}

fn select(id: &str, description: &str, delta: i32) -> Command {
    blog(id, description)
        .with_category(Category::Navigation)
        .with_priority(0)
        .with_guard(browsing)
        .with_action(move |ctx| {
            ctx.deps.move_list_selection(delta);
            Ok(Effect::Done)
        })
}

pub fn blog_commands() -> Vec<Command> {
    vec![
        scroll("blog.scroll-down", "Scroll down", ScrollRequest::Down).with_bindings(down_keys()),
        scroll("blog.scroll-up", "Scroll up", ScrollRequest::Up).with_bindings(up_keys()),
        scroll("blog.scroll-top", "Scroll to top", ScrollRequest::Top)
            .with_binding(KeyBinding::new("g")),
        scroll("blog.scroll-bottom", "Scroll to bottom", ScrollRequest::Bottom)
            .with_binding(KeyBinding::new("G").with_shift()),
        select("blog.next-post", "Next post", 1).with_bindings(down_keys()),
        select("blog.previous-post", "Previous post", -1).with_bindings(up_keys()),
        blog("blog.back-to-list", "Back to post list")
            .with_binding(KeyBinding::new("Escape"))
            .with_category(Category::Navigation)
            .with_priority(10)
            .with_guard(reading)
            .with_action(|ctx| {
                ctx.deps.navigate("/blog");
                Ok(Effect::Done)
            }),
        blog("blog.exit", "Leave blog")
            .with_binding(KeyBinding::new("Escape"))
            .with_category(Category::Navigation)
            .with_priority(5)
            .with_guard(browsing)
            .with_action(|ctx| {
                ctx.deps.navigate("/");
                ctx.deps.set_active_section(Section::Tools);
                Ok(Effect::Done)
            }),
    ]
}
