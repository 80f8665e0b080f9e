use super::bitboard::BitBoard;
use super::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5, 'A'),
    ShipType::new("Battleship", 4, 'B'),
    ShipType::new("Cruiser", 3, 'C'),
    ShipType::new("Submarine", 3, 'S'),
    ShipType::new("Destroyer", 2, 'D'),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Weight removed from a missed cell on the hard AI's probability map.
/// Its eight neighbours lose half of this.
pub const MISS_DECAY: u32 = 2;

/// Multiplier applied to even-parity cells while the hard AI has no open hits.
pub const PARITY_BONUS: f64 = 1.5;

/// Cell set sized for the standard board.
pub type BB = BitBoard<u128, BOARD_SIZE>;

/// Look up a fleet entry by name, ignoring ASCII case.
pub fn ship_type(name: &str) -> Option<ShipType> {
    SHIPS
        .iter()
        .copied()
        .find(|def| def.name().eq_ignore_ascii_case(name))
}
