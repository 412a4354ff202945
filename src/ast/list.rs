//! Non-empty, order-preserving lists.
//!
//! Every "one-or-more" grammar list (parameters, define parameters,
//! declarations, call arguments, global declarations) is a [`NonEmptyList`].
//! A list is started from exactly one element and grows by appending to its
//! tail, so an empty list cannot be constructed. The head is boxed: a list
//! of arguments sits inside the expressions it holds.

use std::{
    iter::{once, Chain, Once},
    slice, vec,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyList<T> {
    head: Box<T>,
    tail: Vec<T>,
}

#[allow(clippy::len_without_is_empty)]
impl<T> NonEmptyList<T> {
    /// Starts a list holding `element` as its sole element.
    pub fn singleton(element: T) -> Self {
        NonEmptyList {
            head: Box::new(element),
            tail: Vec::new(),
        }
    }

    /// Links `element` after the current tail and hands the same list back.
    pub fn append(mut self, element: T) -> Self {
        self.tail.push(element);
        self
    }

    pub fn head(&self) -> &T {
        &self.head
    }

    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(self.head.as_ref())
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        match index {
            0 => Some(self.head.as_ref()),
            _ => self.tail.get(index - 1),
        }
    }

    /// Always at least one.
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    pub fn iter(&self) -> Chain<Once<&T>, slice::Iter<'_, T>> {
        once(self.head.as_ref()).chain(self.tail.iter())
    }
}

impl<T> IntoIterator for NonEmptyList<T> {
    type Item = T;
    type IntoIter = Chain<Once<T>, vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        once(*self.head).chain(self.tail)
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyList<T> {
    type Item = &'a T;
    type IntoIter = Chain<Once<&'a T>, slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
