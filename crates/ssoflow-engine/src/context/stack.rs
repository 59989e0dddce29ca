//! Per-thread ambient authentication stack.
//!
//! Nested evaluation code (access policies, attribute resolvers) may need to
//! see "the current authentication" without it being threaded through every
//! call. The stack lets a caller substitute the ambient value for a scope and
//! always get the previous one back:
//!
//! ```text
//! ambient: A        bind(B) -> guard      ambient: B   frames: [A]
//!                   drop(guard)           ambient: A   frames: []
//! ```
//!
//! `bind` hands back an [`AuthenticationBinding`] guard; its `Drop` performs
//! the restore, so early returns, `?` and panics all unwind the binding. The
//! guard is `!Send`: the stack lives in a `thread_local!`, and a binding must
//! never be carried to another worker thread across an `.await`.
//!
//! Dropping a guard while bindings opened after it are still alive unwinds
//! those inner bindings too; their guards become no-ops when they drop later.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::sync::Arc;

use ssoflow_core::error::{Result, SsoError};
use ssoflow_core::Authentication;

type Frame = Option<Arc<Authentication>>;

struct Ambient {
    current: Frame,
    // (binding id, value ambient before that binding)
    frames: Vec<(u64, Frame)>,
    next_id: u64,
}

impl Ambient {
    const fn new() -> Self {
        Self {
            current: None,
            frames: Vec::new(),
            next_id: 0,
        }
    }
}

thread_local! {
    static AMBIENT: RefCell<Ambient> = const { RefCell::new(Ambient::new()) };
}

/// Entry points for the ambient authentication of the calling thread.
pub struct AuthenticationContextStack;

impl AuthenticationContextStack {
    /// Bind `auth` as the ambient authentication until the returned guard drops.
    pub fn bind(auth: Option<Arc<Authentication>>) -> AuthenticationBinding {
        let (id, depth) = AMBIENT.with(|cell| {
            let mut a = cell.borrow_mut();
            let id = a.next_id;
            a.next_id = a.next_id.wrapping_add(1);
            let prev = std::mem::replace(&mut a.current, auth);
            a.frames.push((id, prev));
            (id, a.frames.len())
        });

        AuthenticationBinding {
            id,
            depth,
            _not_send: PhantomData,
        }
    }

    /// Bind, run `f`, restore. The restore runs even if `f` panics.
    pub fn with_bound<R>(auth: Option<Arc<Authentication>>, f: impl FnOnce() -> R) -> R {
        let _binding = Self::bind(auth);
        f()
    }

    /// Pop the most recent frame and make it ambient again.
    ///
    /// Low-level escape hatch; prefer letting an [`AuthenticationBinding`]
    /// drop. Returns the value that was ambient before the pop.
    /// An empty stack is a nesting bug and yields [`SsoError::StackUnderflow`].
    pub fn restore() -> Result<Option<Arc<Authentication>>> {
        AMBIENT.with(|cell| pop_frame(&mut cell.borrow_mut()))
    }

    /// Currently ambient authentication (never mutates the stack).
    pub fn current() -> Option<Arc<Authentication>> {
        AMBIENT.with(|cell| cell.borrow().current.clone())
    }

    /// Number of open bindings on this thread.
    pub fn depth() -> usize {
        AMBIENT.with(|cell| cell.borrow().frames.len())
    }
}

fn pop_frame(a: &mut Ambient) -> Result<Frame> {
    let Some((_, prev)) = a.frames.pop() else {
        tracing::error!("authentication context restore without matching bind");
        return Err(SsoError::StackUnderflow);
    };
    Ok(std::mem::replace(&mut a.current, prev))
}

/// Scoped binding; restores the previous ambient authentication on drop.
#[must_use = "dropping the binding immediately restores the previous authentication"]
pub struct AuthenticationBinding {
    id: u64,
    depth: usize,
    // thread-local state: keep the guard on the thread that created it
    _not_send: PhantomData<*const ()>,
}

impl AuthenticationBinding {
    /// Stack depth this binding opened (1 = outermost).
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Drop for AuthenticationBinding {
    fn drop(&mut self) {
        // try_with: the thread-local may already be gone during thread teardown.
        let _ = AMBIENT.try_with(|cell| {
            let mut a = cell.borrow_mut();
            let Some(pos) = a.frames.iter().rposition(|(id, _)| *id == self.id) else {
                tracing::error!(depth = self.depth, "authentication binding already unwound");
                return;
            };
            if pos + 1 != a.frames.len() {
                tracing::error!(
                    expected = self.depth,
                    actual = a.frames.len(),
                    "authentication bindings released out of order; unwinding inner bindings"
                );
            }
            a.frames.truncate(pos + 1);
            let _ = pop_frame(&mut a);
        });
    }
}
