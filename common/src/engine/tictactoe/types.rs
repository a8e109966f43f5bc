use std::fmt;

pub const BOARD_SIZE: usize = 9;

pub type WinLine = [usize; 3];

/// Rows, columns, then both diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            Player::Human => Mark::Human,
            Player::Computer => Mark::Computer,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Player::Human => 'O',
            Player::Computer => 'X',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "human"),
            Player::Computer => write!(f, "computer"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    Human,
    Computer,
}

impl Mark {
    pub fn owner(&self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Human => Some(Player::Human),
            Mark::Computer => Some(Player::Computer),
        }
    }

    pub fn symbol(&self) -> char {
        self.owner().map_or('.', |player| player.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    HumanWin,
    ComputerWin,
    Draw,
}

impl GameOutcome {
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Human => GameOutcome::HumanWin,
            Player::Computer => GameOutcome::ComputerWin,
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self != GameOutcome::InProgress
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::HumanWin => Some(Player::Human),
            GameOutcome::ComputerWin => Some(Player::Computer),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "in progress"),
            GameOutcome::HumanWin => write!(f, "human won"),
            GameOutcome::ComputerWin => write!(f, "computer won"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: WinLine,
}

impl WinningLine {
    pub fn new(player: Player, cells: WinLine) -> Self {
        Self { player, cells }
    }
}
