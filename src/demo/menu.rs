//! The TODO menu: a looping console application over the repository.
//!
//! Every action except exit re-enters [`menu_loop`]; an action outside the
//! menu aborts the run with
//! [`EffectError::InvalidState`](crate::program::EffectError).

use crate::dsl::console::{self, Console, parse_int};
use crate::dsl::todo::{self, Repository, TodoEntity, TodoStatus};
use crate::program::{EffectError, Program};

/// Prints the menu and reads the selected action.
pub fn print_menu<S>() -> Program<S, i32>
where
    S: Console + 'static,
{
    console::write_line("Menu")
        .then(console::write_line("1. Create"))
        .then(console::write_line("2. List"))
        .then(console::write_line("3. Find"))
        .then(console::write_line("4. Delete"))
        .then(console::write_line("5. Clear"))
        .then(console::write_line("6. Completed"))
        .then(console::write_line("7. Exit"))
        .then(console::read_line())
        .try_map(|line| parse_int(&line))
}

/// Maps one selected action to its flow.
///
/// # Errors
///
/// [`EffectError::InvalidState`] for an action outside the menu.
pub fn execute_action<S>(action: i32) -> Result<Program<S, ()>, EffectError>
where
    S: Console + Repository + 'static,
{
    match action {
        1 => Ok(create_todo()),
        2 => Ok(list_todos()),
        3 => Ok(find_todo()),
        4 => Ok(delete_todo()),
        5 => Ok(clear_todos()),
        6 => Ok(mark_completed()),
        7 => Ok(console::write_line("Bye!")),
        other => Err(EffectError::InvalidState {
            description: format!("unknown menu action {other}"),
        }),
    }
}

/// One menu round; every action except exit re-enters the loop.
pub fn menu_loop<S>() -> Program<S, ()>
where
    S: Console + Repository + 'static,
{
    print_menu().try_flat_map(execute_action)
}

/// The full session: greet by name, then loop on the menu.
pub fn session<S>() -> Program<S, ()>
where
    S: Console + Repository + 'static,
{
    console::prompt("What's your name?")
        .flat_map(console::say_hello)
        .then(menu_loop())
}

fn prompt_id<S>() -> Program<S, i32>
where
    S: Console + 'static,
{
    console::prompt("Enter id").try_map(|line| parse_int(&line))
}

fn prompt_title<S>() -> Program<S, String>
where
    S: Console + 'static,
{
    console::prompt("Enter title")
}

/// Asks for id and title, stores a fresh entry.
pub fn create_todo<S>() -> Program<S, ()>
where
    S: Console + Repository + 'static,
{
    prompt_id()
        .map2(prompt_title(), |id, title| {
            TodoEntity::new(id, title, TodoStatus::NotCompleted)
        })
        .flat_map(todo::create)
        .then(console::write_line("todo created"))
        .then(menu_loop())
}

/// Writes every stored entry, one per line.
pub fn list_todos<S>() -> Program<S, ()>
where
    S: Console + Repository + 'static,
{
    todo::find_all()
        .map(|todos| {
            todos
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .flat_map(|listing| console::write_line(listing))
        .then(menu_loop())
}

/// Asks for an id and writes the entry, or `not found`.
pub fn find_todo<S>() -> Program<S, ()>
where
    S: Console + Repository + 'static,
{
    prompt_id()
        .flat_map(todo::find_one)
        .map(|found| found.map_or_else(|| "not found".to_string(), |todo| todo.to_string()))
        .flat_map(|line| console::write_line(line))
        .then(menu_loop())
}

/// Asks for an id and removes the entry.
pub fn delete_todo<S>() -> Program<S, ()>
where
    S: Console + Repository + 'static,
{
    prompt_id()
        .flat_map(todo::delete_one)
        .then(console::write_line("todo removed"))
        .then(menu_loop())
}

/// Removes every entry.
pub fn clear_todos<S>() -> Program<S, ()>
where
    S: Console + Repository + 'static,
{
    todo::delete_all()
        .then(console::write_line("all todo removed"))
        .then(menu_loop())
}

/// Asks for an id and marks the entry completed.
pub fn mark_completed<S>() -> Program<S, ()>
where
    S: Console + Repository + 'static,
{
    prompt_id()
        .flat_map(|id| todo::update(id, |todo| todo.with_status(TodoStatus::Completed)))
        .then(console::write_line("todo completed"))
        .then(menu_loop())
}
