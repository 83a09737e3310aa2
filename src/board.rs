use crate::types::{BOARD_SIZE, Cell, Player};

/// Row stride of the bordered board: 8 playing columns plus one shared border column.
pub const BOARD_WIDTH: usize = BOARD_SIZE + 1;
/// Rows 0..=9 plus one trailing cell so the last diagonal step stays inside the buffer.
pub const BOARD_LEN: usize = BOARD_WIDTH * (BOARD_SIZE + 2) + 1;
const DIRECTIONS: [isize; 8] = [-10, -9, -8, -1, 1, 8, 9, 10];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Square {
    Border,
    Empty,
    Disk(Player),
}

/// The far end of a capturable run and the step that walks towards it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    pub end: usize,
    pub step: isize,
}

/// Reversi board with a one-cell sentinel border around the 8x8 area.
///
/// Cells are addressed by `x + y * BOARD_WIDTH` with `x` and `y` in `1..=8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Square; BOARD_LEN],
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.squares[index_of(4, 4)] = Square::Disk(Player::White);
        board.squares[index_of(5, 4)] = Square::Disk(Player::Black);
        board.squares[index_of(4, 5)] = Square::Disk(Player::Black);
        board.squares[index_of(5, 5)] = Square::Disk(Player::White);
        board
    }

    /// A board with every in-bounds cell empty.
    pub fn empty() -> Self {
        let mut squares = [Square::Border; BOARD_LEN];
        for index in playable_indices() {
            squares[index] = Square::Empty;
        }
        Self { squares }
    }

    /// Builds a board from 8 rows of cells, top to bottom.
    /// `LegalMove` entries are stored as empty cells.
    pub fn from_rows(rows: &[[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::empty();
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                board.squares[index_of(x + 1, y + 1)] = match cell.normalized() {
                    Cell::Black => Square::Disk(Player::Black),
                    Cell::White => Square::Disk(Player::White),
                    _ => Square::Empty,
                };
            }
        }
        board
    }

    /// The playing area as 8 rows of normalized cells.
    pub fn rows(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (y, row) in rows.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = self.get(index_of(x + 1, y + 1)).unwrap_or(Cell::Empty);
            }
        }
        rows
    }

    /// Cell at `index`, or `None` for border and out-of-range indices.
    pub fn get(&self, index: usize) -> Option<Cell> {
        if !in_bounds(index) {
            return None;
        }
        match self.squares[index] {
            Square::Disk(player) => Some(player.into()),
            _ => Some(Cell::Empty),
        }
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        in_bounds(index) && self.squares[index] == Square::Empty
    }

    /// Returns the legal cells for the given side.
    pub fn legal_moves(&self, player: Player) -> LegalMoves {
        let mut legal = LegalMoves::default();
        for index in playable_indices() {
            if self.squares[index] == Square::Empty && !self.find_captures(index, player).is_empty() {
                legal.insert(index);
            }
        }
        legal
    }

    /// Runs that a disk of `player` at `index` would capture, one per direction.
    ///
    /// A direction yields a capture when one or more opponent disks are followed
    /// by a disk of `player`. Border and empty cells end the walk.
    pub fn find_captures(&self, index: usize, player: Player) -> Vec<Capture> {
        let mut captures = Vec::new();
        if !in_bounds(index) {
            return captures;
        }

        let opponent = player.opponent();
        for step in DIRECTIONS {
            let mut cursor = index;
            let mut distance = 0;
            while let Some(next) = neighbor(cursor, step) {
                cursor = next;
                distance += 1;
                match self.squares[cursor] {
                    Square::Disk(owner) if owner == opponent => continue,
                    Square::Disk(owner) if owner == player && distance > 1 => {
                        captures.push(Capture { end: cursor, step });
                    }
                    _ => {}
                }
                break;
            }
        }

        captures
    }

    /// Places one disk and flips captured disks.
    /// Returns the flipped indices. Returns an empty list, leaving the board
    /// untouched, when the target is not empty or captures nothing.
    pub fn place(&mut self, index: usize, player: Player) -> Vec<usize> {
        if !self.is_empty_at(index) {
            return Vec::new();
        }
        let captures = self.find_captures(index, player);
        if captures.is_empty() {
            return Vec::new();
        }

        self.squares[index] = Square::Disk(player);
        let mut flipped = Vec::new();
        for Capture { end, step } in captures {
            let mut cursor = index;
            while let Some(next) = neighbor(cursor, step) {
                if next == end {
                    break;
                }
                self.squares[next] = Square::Disk(player);
                flipped.push(next);
                cursor = next;
            }
        }

        flipped
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        self.squares
            .iter()
            .fold((0, 0), |(black, white), square| match square {
                Square::Disk(Player::Black) => (black + 1, white),
                Square::Disk(Player::White) => (black, white + 1),
                _ => (black, white),
            })
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        (BOARD_SIZE * BOARD_SIZE) as u8 - black_count - white_count
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Set of legal cells, kept apart from the board itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegalMoves(u128);

impl LegalMoves {
    fn insert(&mut self, index: usize) {
        self.0 |= 1u128 << index;
    }

    pub fn contains(&self, index: usize) -> bool {
        index < BOARD_LEN && (self.0 & (1u128 << index)) != 0
    }

    /// Whether any cell is playable.
    pub fn any(&self) -> bool {
        self.0 != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        !self.any()
    }

    /// Legal indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(index)
        })
    }
}

pub fn index_of(x: usize, y: usize) -> usize {
    x + y * BOARD_WIDTH
}

/// `(x, y)` of an in-bounds index, both in `1..=8`.
pub fn coords_of(index: usize) -> Option<(usize, usize)> {
    if !in_bounds(index) {
        return None;
    }
    Some((index % BOARD_WIDTH, index / BOARD_WIDTH))
}

pub fn in_bounds(index: usize) -> bool {
    let (x, y) = (index % BOARD_WIDTH, index / BOARD_WIDTH);
    (1..=BOARD_SIZE).contains(&x) && (1..=BOARD_SIZE).contains(&y)
}

/// Every in-bounds index, row by row.
pub fn playable_indices() -> impl Iterator<Item = usize> {
    (1..=BOARD_SIZE).flat_map(|y| (1..=BOARD_SIZE).map(move |x| index_of(x, y)))
}

fn neighbor(index: usize, step: isize) -> Option<usize> {
    index.checked_add_signed(step).filter(|&next| next < BOARD_LEN)
}
