//! Headless walkthrough of a reorderable todo list.
//!
//! This example shows how to:
//! - Mount a list and let its items fade in
//! - Reorder with a mouse drag and with a touch drag
//! - Remove an item and wait for its exit transition
//!
//! Run with: cargo run -p flipline --example todo_reorder

use flipline::prelude::*;
use flipline_test_utils::{FRAME_SECS, MockHost, run_frame, settle};

#[derive(Debug, Clone)]
struct Todo {
    title: &'static str,
    done: bool,
}

fn todo(id: i64, title: &'static str) -> OrderedItem<Todo> {
    OrderedItem::new(id, Todo { title, done: false })
}

fn print_list(label: &str, list: &ReorderableList<Todo>) {
    let titles: Vec<String> = list
        .items()
        .iter()
        .map(|item| {
            let todo = item.value();
            let mark = if todo.done { "x" } else { " " };
            let suffix = if item.removing { " (removing)" } else { "" };
            format!("[{}] {}{}", mark, todo.title, suffix)
        })
        .collect();
    tracing::info!("{label}: {}", titles.join(", "));
}

fn main() -> Result<(), ListError> {
    flipline::init(&Config::default().with_log_filter("info,flipline_ui=debug"));

    let mut host = MockHost::new();
    let mut list = ReorderableList::new(
        [
            todo(1, "Buy milk"),
            todo(2, "Write report"),
            todo(3, "Call plumber"),
            todo(4, "Water plants"),
        ],
        ListConfig::default(),
    )?;

    let report = list.mount(&mut host);
    tracing::info!(entering = report.entering.len(), "mounted");
    let frames = settle(&mut list, &mut host);
    tracing::info!(frames, "enter animations finished");
    print_list("initial", &list);

    // Mouse: drag "Water plants" to the top.
    list.dispatch(ListInput::DragStart { index: 3 }, &mut host);
    for index in (0..3).rev() {
        list.dispatch(ListInput::DragEnter { index }, &mut host);
    }
    let dropped = list.dispatch(ListInput::Drop, &mut host);
    tracing::info!(prevent_default = dropped.prevent_default, "dropped");
    settle(&mut list, &mut host);
    print_list("after mouse drag", &list);

    // Touch: drag the first item down over the third slot.
    let first = host.layout().slot(0);
    let target = host.layout().slot(2);
    list.dispatch(
        ListInput::TouchStart {
            index: 0,
            touch: first.center(),
        },
        &mut host,
    );
    let outcome = list.dispatch(ListInput::TouchMove { touch: target.center() }, &mut host);
    if let Some(ghost) = list.ghost() {
        tracing::info!(x = ghost.geometry.x, y = ghost.geometry.y, moved = ?outcome.moved, "ghost");
    }
    list.dispatch(ListInput::TouchEnd, &mut host);
    settle(&mut list, &mut host);
    print_list("after touch drag", &list);

    // Remove "Write report"; it stays rendered until the exit transition ends.
    let id = ItemId::from(2);
    list.remove(&id, &mut host)?;
    print_list("removing", &list);
    while list.items().contains(&id) {
        for (ended, outcome) in run_frame(&mut list, &mut host, FRAME_SECS) {
            tracing::debug!(%ended, ?outcome, "transition ended");
        }
    }
    settle(&mut list, &mut host);
    print_list("final", &list);

    Ok(())
}
