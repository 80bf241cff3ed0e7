use crate::game::pieces::Piece;
use crate::game::square::{BOARD_SIZE, Square};

/// Both tables are indexed by the relative offset between two squares,
/// `(from - to) + 119`. The padded layout makes that offset describe the
/// same geometric relation regardless of where on the board it occurs.
pub const TABLE_SIZE: usize = 239;

pub type AttackTable = [u8; TABLE_SIZE];
pub type RayTable = [i8; TABLE_SIZE];

/// Piece types able to attack across a relative offset on an otherwise
/// empty board, one capability bit per piece type.
pub const ATTACKS: AttackTable = calculate_attack_table();

/// Unit step leading from the attacking square toward the target, filled
/// in for slider geometry and zero everywhere else.
pub const RAYS: RayTable = calculate_ray_table();

/// Table slot for a piece on `from` eyeing `to`.
pub fn attack_index(from: Square, to: Square) -> usize {
    (from as i16 - to as i16 + 119) as usize
}

/// Movement offsets per piece type. The pawn entries are black's and get
/// negated for white; the first is the push, the rest capture diagonals.
pub const fn piece_directions(piece: Piece) -> &'static [i16] {
    match piece {
        Piece::Pawn => &[16, 17, 15],
        Piece::Knight => &[-18, -33, -31, -14, 18, 33, 31, 14],
        Piece::Bishop => &[-17, -15, 17, 15],
        Piece::Rook => &[-16, 1, 16, -1],
        Piece::Queen | Piece::King => &[-17, -16, -15, 1, 17, 16, 15, -1],
    }
}

const fn abs(value: isize) -> isize {
    if value < 0 { -value } else { value }
}

const fn sign(value: isize) -> isize {
    if value < 0 {
        -1
    } else if value > 0 {
        1
    } else {
        0
    }
}

/// Capability bits for a file/rank displacement of (dx, dy). Pawn bits are
/// set for both diagonal neighbors; the detector sorts out the color.
const fn capability_bits(dx: isize, dy: isize) -> u8 {
    let adx = abs(dx);
    let ady = abs(dy);

    let mut bits = 0u8;

    if adx == 1 && ady == 1 {
        bits |= Piece::Pawn.attack_bit();
    }

    if (adx == 1 && ady == 2) || (adx == 2 && ady == 1) {
        bits |= Piece::Knight.attack_bit();
    }

    if adx == ady {
        bits |= Piece::Bishop.attack_bit() | Piece::Queen.attack_bit();
    }

    if dx == 0 || dy == 0 {
        bits |= Piece::Rook.attack_bit() | Piece::Queen.attack_bit();
    }

    if adx <= 1 && ady <= 1 {
        bits |= Piece::King.attack_bit();
    }

    bits
}

const fn calculate_attack_table() -> AttackTable {
    let mut table = [0u8; TABLE_SIZE];

    let mut from = 0;
    while from < BOARD_SIZE {
        if from & 0x88 == 0 {
            let mut to = 0;
            while to < BOARD_SIZE {
                if to & 0x88 == 0 && to != from {
                    let dx = (to & 0xf) as isize - (from & 0xf) as isize;
                    let dy = (to >> 4) as isize - (from >> 4) as isize;

                    let index = (from as isize - to as isize + 119) as usize;
                    table[index] |= capability_bits(dx, dy);
                }

                to += 1;
            }
        }

        from += 1;
    }

    table
}

const fn calculate_ray_table() -> RayTable {
    let mut table = [0i8; TABLE_SIZE];

    let mut from = 0;
    while from < BOARD_SIZE {
        if from & 0x88 == 0 {
            let mut to = 0;
            while to < BOARD_SIZE {
                if to & 0x88 == 0 && to != from {
                    let dx = (to & 0xf) as isize - (from & 0xf) as isize;
                    let dy = (to >> 4) as isize - (from >> 4) as isize;

                    if dx == 0 || dy == 0 || abs(dx) == abs(dy) {
                        let index = (from as isize - to as isize + 119) as usize;
                        table[index] = (sign(dx) + 16 * sign(dy)) as i8;
                    }
                }

                to += 1;
            }
        }

        from += 1;
    }

    table
}
