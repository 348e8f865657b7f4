//! Id conventions shared by the pipeline stages

use crate::error::{GenError, GenResult};

/// Ground node id = offset + base node id
pub const GROUND_NODE_OFFSET: usize = 200;

/// Sequential 1-based id source for one collection
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: usize,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Take the next id
    pub fn next_id(&mut self) -> usize {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> usize {
        self.next - 1
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Ground node paired with a base node
pub fn ground_node_id(base_node_id: usize) -> usize {
    GROUND_NODE_OFFSET + base_node_id
}

/// Base node paired with a ground node, inverse of [`ground_node_id`]
pub fn base_node_id(ground_node_id: usize) -> Option<usize> {
    ground_node_id
        .checked_sub(GROUND_NODE_OFFSET)
        .filter(|&id| id > 0)
}

/// Ground ids are only disjoint from structural ids while every structural
/// id stays below the offset.
pub fn check_ground_offset(max_structural_id: usize) -> GenResult<()> {
    if max_structural_id >= GROUND_NODE_OFFSET {
        return Err(GenError::GroundNodeIdOverflow {
            max_structural_id,
            offset: GROUND_NODE_OFFSET,
        });
    }
    Ok(())
}

/// Letter of X grid line `ix`: A..Z, then AA, AB, ...
pub fn line_letter(ix: usize) -> String {
    let mut n = ix + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Plan label of grid point `(ix, iz)`, e.g. `B3`
pub fn grid_label(ix: usize, iz: usize) -> String {
    format!("{}{}", line_letter(ix), iz + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_one_based() {
        let mut ids = IdSequence::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn test_ground_id_bijection() {
        for base in 1..GROUND_NODE_OFFSET {
            assert_eq!(base_node_id(ground_node_id(base)), Some(base));
        }
        assert_eq!(base_node_id(GROUND_NODE_OFFSET), None);
        assert_eq!(base_node_id(12), None);
    }

    #[test]
    fn test_offset_precondition() {
        assert!(check_ground_offset(199).is_ok());
        assert!(matches!(
            check_ground_offset(200),
            Err(GenError::GroundNodeIdOverflow { max_structural_id: 200, .. })
        ));
    }

    #[test]
    fn test_grid_labels() {
        assert_eq!(grid_label(0, 0), "A1");
        assert_eq!(grid_label(2, 3), "C4");
        assert_eq!(line_letter(25), "Z");
        assert_eq!(line_letter(26), "AA");
        assert_eq!(line_letter(27), "AB");
        assert_eq!(line_letter(52), "BA");
    }
}
