//! Drag-and-drop session
//!
//! Models a drag gesture as a pure state machine. The UI layer turns pointer
//! events into [`DragEvent`]s, feeds them through [`transition`] together
//! with the current display order, and renders the resulting [`DragState`].
//! Geometry never depends on how the events were bound.
//!
//! Both hover kinds share the half rule in [`Rect::slot`]: hovering a single
//! item is the container scan restricted to that item's rectangle.

use crate::core::models::{Rect, StreamId, slot_among};

/// A drag that is in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragProgress {
    /// Stream being dragged
    pub source: StreamId,
    /// Item currently hovered, if the last hover targeted an item
    pub hover: Option<StreamId>,
    /// Where the source would land if dropped now, in `[0, N]`
    pub insertion_index: Option<usize>,
    /// Frame of the most recent item-level hover
    pub item_frame: Option<u64>,
}

/// State of the single drag session
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A stream is being dragged
    Dragging(DragProgress),
}

/// Gesture events delivered by the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    /// Pointer picked up a stream
    Start {
        /// Stream being picked up
        source: StreamId,
    },
    /// Pointer moved over a specific item
    HoverItem {
        /// Hovered stream
        target: StreamId,
        /// Pointer position
        pointer_y: f64,
        /// Bounds of the hovered item
        rect: Rect,
        /// UI frame the event belongs to
        frame: u64,
    },
    /// Pointer moved over the list container (between or around items)
    HoverContainer {
        /// Pointer position
        pointer_y: f64,
        /// Bounds of every item, in display order
        item_rects: Vec<Rect>,
        /// UI frame the event belongs to
        frame: u64,
    },
    /// Pointer released
    End,
    /// Gesture aborted
    Cancel,
}

/// What a completed gesture asks to commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDrop {
    /// Stream that was dragged
    pub source: StreamId,
    /// Target insertion index in the order the gesture ran against
    pub insertion_index: usize,
}

impl DragState {
    /// Dragged stream, if any
    #[must_use]
    pub const fn dragged_id(&self) -> Option<StreamId> {
        match self {
            Self::Idle => None,
            Self::Dragging(progress) => Some(progress.source),
        }
    }

    /// Hovered stream, if any
    #[must_use]
    pub const fn hover_id(&self) -> Option<StreamId> {
        match self {
            Self::Idle => None,
            Self::Dragging(progress) => progress.hover,
        }
    }

    /// Current insertion index, if one has been computed
    #[must_use]
    pub const fn insertion_index(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Dragging(progress) => progress.insertion_index,
        }
    }

    /// Drop that releasing the pointer now would produce
    #[must_use]
    pub const fn pending_drop(&self) -> Option<PendingDrop> {
        match self {
            Self::Dragging(DragProgress {
                source,
                insertion_index: Some(index),
                ..
            }) => Some(PendingDrop {
                source: *source,
                insertion_index: *index,
            }),
            _ => None,
        }
    }
}

/// Apply one event to a drag state
///
/// `order` is the current display order. Events that are not valid in the
/// current state leave it unchanged.
#[must_use]
pub fn transition(state: DragState, event: &DragEvent, order: &[StreamId]) -> DragState {
    match (state, event) {
        (DragState::Idle, DragEvent::Start { source }) => {
            if order.contains(source) {
                DragState::Dragging(DragProgress {
                    source: *source,
                    hover: None,
                    insertion_index: None,
                    item_frame: None,
                })
            } else {
                log::debug!("Ignoring drag start for unknown stream {source}");
                state
            }
        },
        (DragState::Dragging(progress), DragEvent::Start { source }) => {
            log::debug!(
                "Ignoring drag start for {source}: stream {} is already being dragged",
                progress.source
            );
            state
        },
        (
            DragState::Dragging(progress),
            DragEvent::HoverItem {
                target,
                pointer_y,
                rect,
                frame,
            },
        ) => {
            if *target == progress.source {
                return state;
            }
            let Some(index) = order.iter().position(|id| id == target) else {
                return state;
            };
            DragState::Dragging(DragProgress {
                hover: Some(*target),
                insertion_index: Some(rect.slot(index, *pointer_y)),
                item_frame: Some(*frame),
                ..progress
            })
        },
        (
            DragState::Dragging(progress),
            DragEvent::HoverContainer {
                pointer_y,
                item_rects,
                frame,
            },
        ) => {
            // An item-level hover in the same frame is more specific
            if progress.item_frame == Some(*frame) {
                return state;
            }
            // Past every rendered item means after the last displayed stream
            let index = slot_among(*pointer_y, item_rects)
                .map_or(order.len(), |index| index.min(order.len()));
            DragState::Dragging(DragProgress {
                hover: None,
                insertion_index: Some(index),
                ..progress
            })
        },
        (_, DragEvent::End | DragEvent::Cancel) => DragState::Idle,
        (DragState::Idle, _) => state,
    }
}

/// Owner of the single active drag session
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    /// Create an idle session
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Whether a gesture is in progress
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Feed an event through the state machine
    ///
    /// Returns whether the state changed.
    pub fn dispatch(&mut self, event: &DragEvent, order: &[StreamId]) -> bool {
        let next = transition(self.state, event, order);
        let changed = next != self.state;
        self.state = next;
        changed
    }

    /// Begin dragging `source`; returns false if rejected
    pub fn start(&mut self, source: StreamId, order: &[StreamId]) -> bool {
        !self.is_active() && self.dispatch(&DragEvent::Start { source }, order)
    }

    /// Pointer over an item; returns the resulting insertion index
    pub fn hover_item(
        &mut self,
        target: StreamId,
        pointer_y: f64,
        rect: Rect,
        frame: u64,
        order: &[StreamId],
    ) -> Option<usize> {
        self.dispatch(
            &DragEvent::HoverItem {
                target,
                pointer_y,
                rect,
                frame,
            },
            order,
        );
        self.state.insertion_index()
    }

    /// Pointer over the container; returns the resulting insertion index
    pub fn hover_container(
        &mut self,
        pointer_y: f64,
        item_rects: Vec<Rect>,
        frame: u64,
        order: &[StreamId],
    ) -> Option<usize> {
        self.dispatch(
            &DragEvent::HoverContainer {
                pointer_y,
                item_rects,
                frame,
            },
            order,
        );
        self.state.insertion_index()
    }

    /// Release the pointer, returning the drop to commit (if any)
    pub fn end(&mut self) -> Option<PendingDrop> {
        let pending = self.state.pending_drop();
        self.state = transition(self.state, &DragEvent::End, &[]);
        pending
    }

    /// Abort the gesture
    pub fn cancel(&mut self) {
        self.state = transition(self.state, &DragEvent::Cancel, &[]);
    }
}
