//! One open board session: the store plus its drag controller.

use crate::board::Board;
use crate::drag::{DragController, DragEvent, DragItem, DragRef};

#[derive(Debug)]
pub struct KanbanEngine {
    board: Board,
    drag: DragController,
}

impl KanbanEngine {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            drag: DragController::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn resolve(&self, drag_ref: DragRef) -> Option<DragItem> {
        self.board.drag_item(drag_ref)
    }

    pub fn handle(&mut self, event: DragEvent) {
        self.drag.handle(&mut self.board, event);
    }

    /// Drop the current gesture, e.g. when the dragged entity was deleted
    pub fn cancel_drag(&mut self) {
        self.drag.reset();
    }
}
