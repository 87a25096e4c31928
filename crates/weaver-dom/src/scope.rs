//! The scope stack: implicit parenting for scoped construction.
//!
//! A [`ScopeStack`] tracks the "currently open" elements of a builder.
//! Entering a scope pushes an element; nodes attached while the scope is
//! open become children of the topmost element; exiting pops it and, for
//! nested scopes, hands the finished element to the scope below. The pop is
//! guaranteed on every exit path — normal return or unwind — because exits
//! are driven by [`ScopeGuard`]'s `Drop`.
//!
//! The stack is deliberately *not* process-global: every value of
//! [`ScopeStack`] is independent, and the free functions ([`scope`],
//! [`nest`], [`attach`]) operate on a thread-local default instance, so
//! concurrent builders on different threads never share state.
//!
//! ```
//! use weaver_dom::{scope, nest, attach, Element, Render, Tag};
//!
//! let list = scope(Element::new(Tag::Ul), || {
//!     nest(Element::new(Tag::Li), || attach("one"));
//!     nest(Element::new(Tag::Li), || attach("two"));
//! });
//! assert_eq!("<ul><li>one</li><li>two</li></ul>", list.display(false));
//! ```

use std::cell::RefCell;

use crate::args::IntoArgs;
use crate::error::{Error, Result};
use crate::node::Element;

/// A stack of currently open elements for one logical thread of control.
///
/// Methods take `&self`; interior mutability keeps the borrow scoped to each
/// call so user code running between calls (closure bodies, guard drops)
/// never conflicts with it.
#[derive(Debug, Default)]
pub struct ScopeStack {
    frames: RefCell<Vec<Element>>,
    roots: RefCell<Vec<Element>>,
}

impl ScopeStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of currently open scopes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.borrow().len()
    }

    /// Opens a scope for `element`. The returned guard closes it again when
    /// dropped (attaching the element to the enclosing scope, if any) or
    /// when [`ScopeGuard::finish`] takes the element back.
    pub fn enter(&self, element: Element) -> ScopeGuard<'_> {
        self.frames.borrow_mut().push(element);
        ScopeGuard {
            stack: self,
            frames: 1,
            finished: false,
        }
    }

    /// Opens several scopes at once, pushed left to right; attached nodes go
    /// to whichever element is topmost. The single guard closes all of them
    /// right to left, nesting each element into the one before it.
    pub fn enter_many(&self, elements: impl IntoIterator<Item = Element>) -> ScopeGuard<'_> {
        let mut count = 0;
        let mut frames = self.frames.borrow_mut();
        for element in elements {
            frames.push(element);
            count += 1;
        }
        drop(frames);
        ScopeGuard {
            stack: self,
            frames: count,
            finished: false,
        }
    }

    /// Classifies `args` and attaches them to the topmost open element.
    ///
    /// # Errors
    ///
    /// [`Error::NoOpenScope`] when the stack is empty, or a composition
    /// error from the topmost element's `add`.
    pub fn attach(&self, args: impl IntoArgs) -> Result<()> {
        let mut frames = self.frames.borrow_mut();
        let top = frames.last_mut().ok_or(Error::NoOpenScope)?;
        let _ = top.add(args)?;
        Ok(())
    }

    /// Takes the elements whose outermost scope has closed without
    /// [`ScopeGuard::finish`] — including scopes unwound by a panic.
    pub fn take_roots(&self) -> Vec<Element> {
        self.roots.borrow_mut().drain(..).collect()
    }

    /// Closes the topmost scope: the popped element becomes a child of the
    /// scope below, or a detached root when none exists (or when the scope
    /// below is a void element, which cannot accept children).
    fn pop_frame(&self) {
        let mut frames = self.frames.borrow_mut();
        let Some(element) = frames.pop() else {
            return;
        };
        match frames.last_mut() {
            Some(parent) if !parent.tag().is_void() => {
                // Cannot fail: the parent accepts children.
                let _ = parent.add(element);
            }
            _ => {
                drop(frames);
                self.roots.borrow_mut().push(element);
            }
        }
    }

    /// Closes the topmost scope and hands its element back, detached.
    fn pop_detached(&self) -> Option<Element> {
        self.frames.borrow_mut().pop()
    }
}

/// Closes the scopes opened by one [`ScopeStack::enter`] or
/// [`ScopeStack::enter_many`] call, on drop or via [`ScopeGuard::finish`].
#[derive(Debug)]
pub struct ScopeGuard<'a> {
    stack: &'a ScopeStack,
    frames: usize,
    finished: bool,
}

impl ScopeGuard<'_> {
    /// Closes this guard's scopes and returns the outermost element,
    /// detached from any enclosing scope. Inner scopes of an
    /// [`ScopeStack::enter_many`] group still nest into the elements before
    /// them.
    ///
    /// # Panics
    ///
    /// Panics when the guard owns no frame (an empty `enter_many`) or when
    /// guards were dropped out of last-in-first-out order.
    #[must_use]
    pub fn finish(mut self) -> Element {
        self.finished = true;
        for _ in 1..self.frames {
            self.stack.pop_frame();
        }
        match self.stack.pop_detached() {
            Some(element) => element,
            None => panic!("scope stack closed out of order"),
        }
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            for _ in 0..self.frames {
                self.stack.pop_frame();
            }
        }
    }
}

thread_local! {
    static DEFAULT_STACK: ScopeStack = ScopeStack::new();
}

/// Builds `element` as the outermost scope on the thread-local default
/// stack: enters, runs `body`, exits, and returns the finished element.
///
/// Nodes attached inside `body` — directly via [`attach`] or through nested
/// [`nest`] calls — end up as the element's children. If `body` unwinds,
/// the scope still closes and the partially built element is recoverable
/// through [`take_roots`].
pub fn scope<F: FnOnce()>(element: Element, body: F) -> Element {
    DEFAULT_STACK.with(|stack| {
        let guard = stack.enter(element);
        body();
        guard.finish()
    })
}

/// Builds `element` as a nested scope on the thread-local default stack and
/// attaches the finished element to the enclosing scope.
///
/// # Panics
///
/// Panics when no enclosing scope is open; the outermost element belongs in
/// [`scope`].
pub fn nest<F: FnOnce()>(element: Element, body: F) {
    DEFAULT_STACK.with(|stack| {
        assert!(
            stack.depth() > 0,
            "nest requires an open scope; build the outermost element with scope()"
        );
        let guard = stack.enter(element);
        body();
        drop(guard);
    });
}

/// Attaches nodes and attributes to the innermost open scope on the
/// thread-local default stack.
///
/// # Panics
///
/// Panics when no scope is open, or when the attachment is an illegal
/// composition (a child on a void element).
pub fn attach(args: impl IntoArgs) {
    DEFAULT_STACK.with(|stack| match stack.attach(args) {
        Ok(()) => {}
        Err(error) => panic!("{error}"),
    });
}

/// The number of scopes open on the thread-local default stack.
#[must_use]
pub fn scope_depth() -> usize {
    DEFAULT_STACK.with(ScopeStack::depth)
}

/// Takes the detached roots recovered from the thread-local default stack,
/// e.g. after a panic unwound an open scope.
#[must_use]
pub fn take_roots() -> Vec<Element> {
    DEFAULT_STACK.with(ScopeStack::take_roots)
}
