//! Value types shared by every layer of the engine.
//!
//! Pieces are small `Copy` records living in the board arena. Identity is
//! carried by `PieceId`, so two pawns of the same side are still told apart
//! when they sit side by side in a capture list.

use std::fmt;

/// Side to move. `Light` starts on rows 6-7 and moves toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a single pawn push.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Row the side's pawns start on.
    #[inline]
    pub const fn pawn_home_row(self) -> u8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    /// Row on which the side's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    /// Row holding the side's king and rooks at the start.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Color::Light => 'l',
            Color::Dark => 'd',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => f.write_str("white"),
            Color::Dark => f.write_str("black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lowercase letter used in position strings and position signatures.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Identity of a piece within one game lineage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    /// Only consulted for castling rights and pawn double steps.
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(id: PieceId, kind: PieceKind, color: Color) -> Self {
        Self {
            id,
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub fn is(&self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }

    /// Unicode figurine, hollow for light pieces and filled for dark ones.
    pub fn symbol(&self) -> char {
        match (self.color, self.kind) {
            (Color::Light, PieceKind::Pawn) => '♙',
            (Color::Light, PieceKind::Knight) => '♘',
            (Color::Light, PieceKind::Bishop) => '♗',
            (Color::Light, PieceKind::Rook) => '♖',
            (Color::Light, PieceKind::Queen) => '♕',
            (Color::Light, PieceKind::King) => '♔',
            (Color::Dark, PieceKind::Pawn) => '♟',
            (Color::Dark, PieceKind::Knight) => '♞',
            (Color::Dark, PieceKind::Bishop) => '♝',
            (Color::Dark, PieceKind::Rook) => '♜',
            (Color::Dark, PieceKind::Queen) => '♛',
            (Color::Dark, PieceKind::King) => '♚',
        }
    }
}

/// Board cell. Row 0 is the eighth rank, column 0 the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: (index / 8) as u8,
            col: (index % 8) as u8,
        }
    }

    /// Square displaced by `(d_row, d_col)`, or `None` off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        write!(f, "{file}{rank}")
    }
}

/// Final result once a game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Side(Color),
    Draw,
}
