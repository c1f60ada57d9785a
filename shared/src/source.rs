use std::cell::RefCell;
use std::rc::Rc;

use crate::event::{KeyRelease, PointerMove};
use crate::surface::DrawingSurface;
use crate::tracker::StrokeTracker;

pub type PointerHandler = Box<dyn FnMut(PointerMove)>;
pub type KeyHandler = Box<dyn FnMut(KeyRelease)>;

/// Delivers pointer movement over the drawing surface.
pub trait PointerEventSource {
    type Error;

    fn subscribe_pointer_move(&self, handler: PointerHandler) -> Result<(), Self::Error>;
}

/// Delivers key releases from the whole document.
pub trait KeyEventSource {
    type Error;

    fn subscribe_key_up(&self, handler: KeyHandler) -> Result<(), Self::Error>;
}

/// Routes pointer samples and key releases to a shared tracker.
///
/// Both handlers borrow the tracker mutably for the duration of one event,
/// so sources must deliver events one at a time on a single thread.
pub fn attach<S, P, K>(
    tracker: &Rc<RefCell<StrokeTracker<S>>>,
    pointer: &P,
    keys: &K,
) -> Result<(), P::Error>
where
    S: DrawingSurface + 'static,
    P: PointerEventSource,
    K: KeyEventSource,
    P::Error: From<K::Error>,
{
    let move_tracker = tracker.clone();
    pointer.subscribe_pointer_move(Box::new(move |event: PointerMove| {
        move_tracker.borrow_mut().on_pointer_move(&event);
    }))?;

    let key_tracker = tracker.clone();
    keys.subscribe_key_up(Box::new(move |event: KeyRelease| {
        key_tracker.borrow_mut().on_key_up(&event);
    }))?;

    Ok(())
}
