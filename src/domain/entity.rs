use crate::error::{BoardkitError, Result};
use serde::{Deserialize, Serialize};

/// Minimal contract for entities placed on a board.
///
/// The drag-and-drop layer treats entities as opaque beyond these two
/// attributes; everything else about the type belongs to the caller.
pub trait BoardEntity {
    /// Unique numeric identifier.
    fn id(&self) -> u64;

    /// Numeric count attribute displayed alongside the entity.
    fn count(&self) -> u32;
}

/// An entity paired with its slot in an ordered sequence.
///
/// `position` is a dense index by caller discipline; nothing here enforces
/// contiguity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardItem<T> {
    pub position: usize,
    pub entity: T,
}

/// Ordered board state: positioned items plus a declared capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board<T> {
    pub items: Vec<BoardItem<T>>,
    pub size: usize,
}

impl<T> Board<T> {
    pub fn new(size: usize) -> Self {
        Self {
            items: Vec::new(),
            size,
        }
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.size
    }

    /// Appends an entity at the next dense position.
    pub fn push_entity(&mut self, entity: T) -> usize {
        let position = self.items.len();
        self.items.push(BoardItem { position, entity });
        position
    }

    /// Moves the item at `from` to `to` and rewrites positions densely.
    ///
    /// This is the caller-side reorder that a drop callback reports; the
    /// drag controller itself never mutates the list.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.items.len();
        if from >= len {
            return Err(BoardkitError::InvalidIndex { index: from, len });
        }
        if to >= len {
            return Err(BoardkitError::InvalidIndex { index: to, len });
        }
        if from == to {
            return Ok(());
        }

        let item = self.items.remove(from);
        self.items.insert(to, item);

        for (position, item) in self.items.iter_mut().enumerate() {
            item.position = position;
        }
        Ok(())
    }
}

impl<T> Default for Board<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Counter {
        id: u64,
        count: u32,
    }

    impl BoardEntity for Counter {
        fn id(&self) -> u64 {
            self.id
        }

        fn count(&self) -> u32 {
            self.count
        }
    }

    fn board_of(ids: &[u64]) -> Board<Counter> {
        let mut board = Board::new(ids.len());
        for &id in ids {
            board.push_entity(Counter { id, count: 0 });
        }
        board
    }

    #[test]
    fn test_push_entity_assigns_dense_positions() {
        let board = board_of(&[10, 20, 30]);

        assert_eq!(board.items.len(), 3);
        for (expected, item) in board.items.iter().enumerate() {
            assert_eq!(item.position, expected);
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_move_item_forward() {
        let mut board = board_of(&[10, 20, 30]);

        board.move_item(0, 2).unwrap();

        let ids: Vec<u64> = board.items.iter().map(|i| i.entity.id).collect();
        assert_eq!(ids, vec![20, 30, 10]);
        let positions: Vec<usize> = board.items.iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_move_item_backward() {
        let mut board = board_of(&[10, 20, 30]);

        board.move_item(2, 0).unwrap();

        let ids: Vec<u64> = board.items.iter().map(|i| i.entity.id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn test_move_item_same_index_is_noop() {
        let mut board = board_of(&[10, 20]);
        let before = board.clone();

        board.move_item(1, 1).unwrap();

        assert_eq!(board, before);
    }

    #[test]
    fn test_move_item_out_of_range() {
        let mut board = board_of(&[10, 20]);

        let err = board.move_item(5, 0).unwrap_err();
        assert!(matches!(
            err,
            BoardkitError::InvalidIndex { index: 5, len: 2 }
        ));

        let err = board.move_item(0, 2).unwrap_err();
        assert!(matches!(
            err,
            BoardkitError::InvalidIndex { index: 2, len: 2 }
        ));
    }

    #[test]
    fn test_board_serde_round_trip() {
        let board = board_of(&[1, 2]);

        let json = serde_json::to_string(&board).unwrap();
        let loaded: Board<Counter> = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded, board);
    }
}
