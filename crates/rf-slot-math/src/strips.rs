//! Built-in reel strips, in token form
//!
//! Scatters only appear on reels 3 to 5 and wilds on reels 2 to 5.

/// Base game strips, reel 1 to 5
pub const BASE_GAME_STRIPS: [&[&str]; 5] = [
    &[
        "10", "Q", "9", "R", "B", "J", "10", "K", "Q", "10", "J", "Q", "10", "J", "B", "Q",
        "J", "J", "10", "Q", "9", "Q", "Q", "B", "9", "J", "B", "F", "K", "Q", "K", "B",
        "B", "Q", "B", "10", "J", "Q", "10", "B", "F", "K", "R", "B", "R", "10", "9", "J",
        "Q",
    ],
    &[
        "9", "K", "J", "9", "Q", "B", "9", "K", "B", "9", "K", "9", "9", "W", "10", "J",
        "R", "B", "10", "Q", "W", "R", "K", "9", "10", "K", "Q", "K", "B", "F", "K", "R",
        "K", "Q", "B", "K", "9", "B", "F", "10", "R", "Q", "K", "R", "9", "K", "W", "9",
        "10", "9",
    ],
    &[
        "9", "9", "9", "10", "S", "9", "10", "9", "10", "10", "9", "10", "S", "10", "J", "10",
        "10", "9", "J", "F", "J", "10", "J", "J", "Q", "J", "R", "Q", "Q", "J", "Q", "F",
        "K", "K", "B", "B", "J", "F", "F", "J", "B", "K", "R", "R", "F", "F", "R", "W",
        "9", "10", "J",
    ],
    &[
        "9", "9", "10", "9", "9", "J", "9", "Q", "9", "9", "10", "10", "9", "10", "10", "J",
        "J", "9", "J", "J", "Q", "R", "J", "J", "Q", "Q", "9", "Q", "J", "Q", "W", "W",
        "W", "W", "K", "F", "K", "Q", "B", "B", "W", "W", "W", "W", "R", "J", "B", "K",
        "Q", "Q", "B", "Q", "F", "K", "10", "S", "S",
    ],
    &[
        "9", "9", "10", "10", "Q", "W", "J", "J", "J", "Q", "Q", "K", "W", "Q", "Q", "10",
        "Q", "K", "K", "Q", "K", "K", "F", "B", "K", "B", "B", "10", "B", "K", "B", "B",
        "J", "B", "R", "B", "F", "F", "K", "F", "B", "F", "F", "R", "B", "Q", "W", "F",
        "B", "10", "S", "S",
    ],
];

/// Free game strips, reel 1 to 5
pub const FREE_GAME_STRIPS: [&[&str]; 5] = [
    &[
        "10", "Q", "B", "10", "Q", "J", "9", "B", "9", "Q", "J", "K", "J", "10", "J", "Q",
        "J", "B", "Q", "K", "Q", "10", "Q", "B", "Q", "R", "B", "K", "J", "Q", "10", "K",
        "9", "Q", "B", "R", "J", "Q", "10", "B", "Q", "F", "R", "10", "Q", "10", "9", "J",
        "Q", "10", "B", "10", "Q", "J", "10", "J", "F", "J", "B", "10", "Q", "J", "B", "Q",
        "10", "Q", "10", "J",
    ],
    &[
        "9", "R", "9", "K", "Q", "B", "K", "J", "F", "B", "9", "K", "9", "B", "W", "K",
        "9", "J", "K", "W", "Q", "K", "F", "K", "R", "10", "K", "9", "K", "B", "K", "R",
        "K", "9", "B", "9", "K", "9", "B", "10", "B", "K", "R", "Q", "R", "K", "10", "F",
        "K", "9", "10", "K", "9", "K", "Q", "K", "R", "9", "K", "9", "K", "F", "R", "9",
        "K", "10", "Q", "K",
    ],
    &[
        "9", "J", "F", "10", "S", "9", "10", "9", "K", "Q", "9", "10", "S", "10", "J", "F",
        "10", "S", "J", "B", "J", "10", "Q", "R", "J", "R", "Q", "J", "9", "Q", "F", "B",
        "10", "B", "K", "J", "10", "F", "K", "F", "J", "F", "R", "10", "F", "R", "W", "J",
        "10", "J", "F", "9", "J", "9", "10", "J", "F", "9", "10",
    ],
    &[
        "9", "S", "10", "9", "Q", "J", "S", "Q", "K", "9", "B", "10", "Q", "S", "J", "10",
        "F", "J", "9", "J", "Q", "J", "R", "Q", "10", "Q", "J", "9", "Q", "J", "9", "Q",
        "W", "W", "W", "K", "F", "9", "Q", "S", "B", "Q", "10", "J", "K", "R", "10", "B",
        "J", "Q", "9", "K", "W", "W", "W", "B", "9", "S", "9", "K", "J",
    ],
    &[
        "9", "K", "B", "S", "10", "B", "K", "F", "S", "Q", "B", "Q", "J", "K", "W", "F",
        "Q", "R", "Q", "K", "10", "Q", "F", "9", "F", "B", "K", "B", "S", "10", "J", "K",
        "B", "10", "J", "B", "R", "B", "S", "F", "K", "F", "B", "F", "K", "10", "B", "Q",
        "W", "F", "Q", "W", "J", "B", "S", "F", "K", "Q", "K", "F", "S",
    ],
];
