/// Keyboard-to-cell mapping for move entry.
///
/// The nine keys sit in a 3x3 block on a QWERTY keyboard, mirroring the
/// board layout:
///
///   e r t
///   d f g
///   c v b
///
/// so `e` marks cell 0 (top left) and `b` marks cell 8 (bottom right).
use crate::board;

/// Keys in cell order: `BOARD_KEYS[i]` is the key that marks cell `i`.
pub const BOARD_KEYS: [char; 9] = ['e', 'r', 't', 'd', 'f', 'g', 'c', 'v', 'b'];

/// Resolve a raw key to its cell index. Case-insensitive; None for any
/// character outside the nine-key block.
pub fn key_to_cell(raw: char) -> Option<usize> {
    let key = raw.to_ascii_lowercase();
    BOARD_KEYS.iter().position(|&k| k == key)
}

/// The key that would mark `cell`, for echoing computer moves back through
/// the same input path humans use. None when `cell` is off the board.
pub fn cell_to_key(cell: usize) -> Option<char> {
    BOARD_KEYS.get(cell).copied()
}

/// The key map rendered as a grid in the same style as the game board.
pub fn key_map_grid() -> String {
    board::grid(BOARD_KEYS.map(|k| k.to_ascii_uppercase()))
}

/// The nine keys as an uppercase list for prompts.
pub fn key_choices() -> String {
    BOARD_KEYS
        .iter()
        .map(|k| k.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[test]
fn test_keys_cover_all_nine_cells_exactly_once() {
    let mut seen = [false; 9];
    for key in BOARD_KEYS {
        let cell = key_to_cell(key).unwrap();
        assert!(!seen[cell], "key {} maps to an already-claimed cell", key);
        seen[cell] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_uppercase_keys_are_accepted() {
    assert_eq!(Some(0), key_to_cell('E'));
    assert_eq!(Some(8), key_to_cell('B'));
    assert_eq!(key_to_cell('f'), key_to_cell('F'));
}

#[test]
fn test_unmapped_characters_are_rejected() {
    for raw in ['a', 'q', 'z', '1', ' ', '\n'] {
        assert_eq!(None, key_to_cell(raw));
    }
}

#[test]
fn test_cell_to_key_inverts_the_mapping() {
    for cell in 0..9 {
        let key = cell_to_key(cell).unwrap();
        assert_eq!(Some(cell), key_to_cell(key));
    }
    assert_eq!(None, cell_to_key(9));
}

#[test]
fn test_key_map_grid_shows_the_keypad_layout() {
    let gridstr = key_map_grid();
    assert!(gridstr.starts_with("| E | R | T |"));
    assert!(gridstr.ends_with("| C | V | B |"));
}

#[test]
fn test_key_choices_lists_all_keys_in_order() {
    assert_eq!("E, R, T, D, F, G, C, V, B", key_choices());
}
