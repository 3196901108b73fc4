//! TODO repository effects: an in-memory store keyed by integer id.
//!
//! # Strictness
//!
//! [`update`] and [`delete_one`] on an absent id fail with
//! [`EffectError::NotFound`]; [`find_one`] on an absent id returns `None`;
//! [`create`] on an existing id replaces the stored entity. A silent no-op
//! for the mutating operations would turn a mistyped id into an invisible
//! lost update.

use std::any::Any;
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use crate::program::{Effect, EffectError, Program};

/// Completion state of one TODO entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoStatus {
    /// Not done yet.
    NotCompleted,
    /// Done.
    Completed,
}

impl Display for TodoStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotCompleted => formatter.write_str("not completed"),
            Self::Completed => formatter.write_str("completed"),
        }
    }
}

/// One TODO entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoEntity {
    /// Identifier, unique within one repository.
    pub id: i32,
    /// Human-readable title.
    pub title: String,
    /// Completion state.
    pub status: TodoStatus,
}

impl TodoEntity {
    /// Creates an entry.
    #[must_use]
    pub fn new(id: i32, title: impl Into<String>, status: TodoStatus) -> Self {
        Self {
            id,
            title: title.into(),
            status,
        }
    }

    /// The same entry with a different completion state.
    #[must_use]
    pub fn with_status(self, status: TodoStatus) -> Self {
        Self { status, ..self }
    }
}

impl Display for TodoEntity {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {} [{}]", self.id, self.title, self.status)
    }
}

/// Capability an environment must provide to interpret repository leaves.
pub trait Repository {
    /// Stores `todo`, replacing any entry with the same id.
    fn create(&mut self, todo: TodoEntity);

    /// Rewrites the entry with `id` through `update`.
    ///
    /// # Errors
    ///
    /// [`EffectError::NotFound`] if no entry has `id`.
    fn update(
        &mut self,
        id: i32,
        update: Box<dyn FnOnce(TodoEntity) -> TodoEntity>,
    ) -> Result<(), EffectError>;

    /// Returns the entry with `id`, if any.
    fn find(&self, id: i32) -> Option<TodoEntity>;

    /// Returns every stored entry; order is not significant.
    fn find_all(&self) -> Vec<TodoEntity>;

    /// Removes the entry with `id`.
    ///
    /// # Errors
    ///
    /// [`EffectError::NotFound`] if no entry has `id`.
    fn delete(&mut self, id: i32) -> Result<(), EffectError>;

    /// Removes every entry.
    fn delete_all(&mut self);
}

/// The repository leaves.
enum TodoEffect {
    Create {
        todo: TodoEntity,
    },
    Update {
        id: i32,
        update: Box<dyn FnOnce(TodoEntity) -> TodoEntity>,
    },
    FindOne {
        id: i32,
    },
    FindAll,
    DeleteOne {
        id: i32,
    },
    DeleteAll,
}

impl<S: Repository> Effect<S> for TodoEffect {
    fn describe(&self) -> &'static str {
        match self {
            Self::Create { .. } => "todo.create",
            Self::Update { .. } => "todo.update",
            Self::FindOne { .. } => "todo.find_one",
            Self::FindAll => "todo.find_all",
            Self::DeleteOne { .. } => "todo.delete_one",
            Self::DeleteAll => "todo.delete_all",
        }
    }

    fn handle(self: Box<Self>, environment: &mut S) -> Result<Box<dyn Any>, EffectError> {
        match *self {
            Self::Create { todo } => {
                environment.create(todo);
                Ok(Box::new(()))
            }
            Self::Update { id, update } => {
                environment.update(id, update)?;
                Ok(Box::new(()))
            }
            Self::FindOne { id } => Ok(Box::new(environment.find(id))),
            Self::FindAll => Ok(Box::new(environment.find_all())),
            Self::DeleteOne { id } => {
                environment.delete(id)?;
                Ok(Box::new(()))
            }
            Self::DeleteAll => {
                environment.delete_all();
                Ok(Box::new(()))
            }
        }
    }
}

/// A program that stores `todo`.
pub fn create<S>(todo: TodoEntity) -> Program<S, ()>
where
    S: Repository + 'static,
{
    Program::from_effect(TodoEffect::Create { todo })
}

/// A program that rewrites the entry with `id` through `update`.
pub fn update<S, F>(id: i32, update: F) -> Program<S, ()>
where
    S: Repository + 'static,
    F: FnOnce(TodoEntity) -> TodoEntity + 'static,
{
    Program::from_effect(TodoEffect::Update {
        id,
        update: Box::new(update),
    })
}

/// A program that looks up the entry with `id`.
pub fn find_one<S>(id: i32) -> Program<S, Option<TodoEntity>>
where
    S: Repository + 'static,
{
    Program::from_effect(TodoEffect::FindOne { id })
}

/// A program that returns every stored entry.
pub fn find_all<S>() -> Program<S, Vec<TodoEntity>>
where
    S: Repository + 'static,
{
    Program::from_effect(TodoEffect::FindAll)
}

/// A program that removes the entry with `id`.
pub fn delete_one<S>(id: i32) -> Program<S, ()>
where
    S: Repository + 'static,
{
    Program::from_effect(TodoEffect::DeleteOne { id })
}

/// A program that removes every entry.
pub fn delete_all<S>() -> Program<S, ()>
where
    S: Repository + 'static,
{
    Program::from_effect(TodoEffect::DeleteAll)
}

/// Map-backed repository; entries live as long as the value itself.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    entries: HashMap<i32, TodoEntity>,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository for InMemoryRepository {
    fn create(&mut self, todo: TodoEntity) {
        self.entries.insert(todo.id, todo);
    }

    fn update(
        &mut self,
        id: i32,
        update: Box<dyn FnOnce(TodoEntity) -> TodoEntity>,
    ) -> Result<(), EffectError> {
        match self.entries.remove(&id) {
            Some(todo) => {
                self.entries.insert(id, update(todo));
                Ok(())
            }
            None => Err(EffectError::NotFound { id }),
        }
    }

    fn find(&self, id: i32) -> Option<TodoEntity> {
        self.entries.get(&id).cloned()
    }

    fn find_all(&self) -> Vec<TodoEntity> {
        self.entries.values().cloned().collect()
    }

    fn delete(&mut self, id: i32) -> Result<(), EffectError> {
        self.entries
            .remove(&id)
            .map(|_| ())
            .ok_or(EffectError::NotFound { id })
    }

    fn delete_all(&mut self) {
        self.entries.clear();
    }
}
