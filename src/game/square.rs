/// Index into the padded 16x8 board. The real files occupy the low 8
/// columns of each row; any index with `0x88` bits set is off the board.
/// Rank 8 is row zero, so `a8 = 0` and `h1 = 119`.
pub type Square = u8;

pub const BOARD_SIZE: usize = 128;

// ranks are stored top-down
pub const RANK_8: u8 = 0;
pub const RANK_7: u8 = 1;
pub const RANK_2: u8 = 6;
pub const RANK_1: u8 = 7;

#[allow(dead_code)]
pub trait SquareExt {
    fn file(&self) -> u8;
    fn rank(&self) -> u8;
    fn is_off_board(&self) -> bool;
    fn offset(&self, delta: i16) -> Option<Square>;
    fn parse(string: &str) -> Option<Square>;
    fn unparse(&self) -> String;
    fn from_position(x: u8, y: u8) -> Square;

    const A1: Square = 112;
    const A2: Square = 96;
    const A3: Square = 80;
    const A4: Square = 64;
    const A5: Square = 48;
    const A6: Square = 32;
    const A7: Square = 16;
    const A8: Square = 0;

    const B1: Square = 113;
    const B2: Square = 97;
    const B3: Square = 81;
    const B4: Square = 65;
    const B5: Square = 49;
    const B6: Square = 33;
    const B7: Square = 17;
    const B8: Square = 1;

    const C1: Square = 114;
    const C2: Square = 98;
    const C3: Square = 82;
    const C4: Square = 66;
    const C5: Square = 50;
    const C6: Square = 34;
    const C7: Square = 18;
    const C8: Square = 2;

    const D1: Square = 115;
    const D2: Square = 99;
    const D3: Square = 83;
    const D4: Square = 67;
    const D5: Square = 51;
    const D6: Square = 35;
    const D7: Square = 19;
    const D8: Square = 3;

    const E1: Square = 116;
    const E2: Square = 100;
    const E3: Square = 84;
    const E4: Square = 68;
    const E5: Square = 52;
    const E6: Square = 36;
    const E7: Square = 20;
    const E8: Square = 4;

    const F1: Square = 117;
    const F2: Square = 101;
    const F3: Square = 85;
    const F4: Square = 69;
    const F5: Square = 53;
    const F6: Square = 37;
    const F7: Square = 21;
    const F8: Square = 5;

    const G1: Square = 118;
    const G2: Square = 102;
    const G3: Square = 86;
    const G4: Square = 70;
    const G5: Square = 54;
    const G6: Square = 38;
    const G7: Square = 22;
    const G8: Square = 6;

    const H1: Square = 119;
    const H2: Square = 103;
    const H3: Square = 87;
    const H4: Square = 71;
    const H5: Square = 55;
    const H6: Square = 39;
    const H7: Square = 23;
    const H8: Square = 7;
}

impl SquareExt for u8 {
    fn file(&self) -> u8 {
        self & 0xf
    }

    fn rank(&self) -> u8 {
        self >> 4
    }

    fn is_off_board(&self) -> bool {
        self & 0x88 != 0
    }

    /// Step by a relative offset, discarding steps that leave the board.
    fn offset(&self, delta: i16) -> Option<Square> {
        let next = *self as i16 + delta;

        if next & 0x88 != 0 {
            None
        } else {
            Some(next as Square)
        }
    }

    fn parse(string: &str) -> Option<Square> {
        let mut chars = string.chars();

        match (
            chars.next().map(|c| c.to_ascii_lowercase()),
            chars.next(),
            chars.next(),
        ) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => {
                Some(Square::from_position(file as u8 - b'a', b'8' - rank as u8))
            }
            _ => None,
        }
    }

    fn unparse(&self) -> String {
        format!(
            "{}{}",
            (self.file() + b'a') as char,
            (b'8' - self.rank()) as char
        )
    }

    fn from_position(x: u8, y: u8) -> Square {
        x + y * 16
    }
}
