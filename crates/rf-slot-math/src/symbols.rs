//! Symbol definitions and reel strips

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{SlotError, SlotResult};
use crate::window::{REEL_COUNT, ROW_COUNT, Window};

/// Number of distinct symbol codes
pub const SYMBOL_COUNT: usize = 10;

/// Symbol codes used on the reels
///
/// The eight paying symbols come first so their discriminant doubles as the
/// paytable row index. `Wild` and `Scatter` carry their own rows, which are
/// zero in the shipped tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Symbol {
    S9 = 0,
    S10 = 1,
    SJ = 2,
    SQ = 3,
    SK = 4,
    SR = 5,
    SF = 6,
    SB = 7,
    /// Substitutes for every symbol except `Scatter`
    Wild = 8,
    /// Counted anywhere in the window, breaks line runs
    Scatter = 9,
}

impl Symbol {
    /// All symbols in code order
    pub const ALL: [Symbol; SYMBOL_COUNT] = [
        Symbol::S9,
        Symbol::S10,
        Symbol::SJ,
        Symbol::SQ,
        Symbol::SK,
        Symbol::SR,
        Symbol::SF,
        Symbol::SB,
        Symbol::Wild,
        Symbol::Scatter,
    ];

    /// Paytable row index
    pub fn index(self) -> usize {
        self as usize
    }

    /// Decode a reel-strip token ("9", "10", "J", "Q", "K", "R", "F", "B", "W", "S")
    pub fn from_token(token: &str) -> SlotResult<Self> {
        match token.trim() {
            "9" => Ok(Symbol::S9),
            "10" => Ok(Symbol::S10),
            "J" => Ok(Symbol::SJ),
            "Q" => Ok(Symbol::SQ),
            "K" => Ok(Symbol::SK),
            "R" => Ok(Symbol::SR),
            "F" => Ok(Symbol::SF),
            "B" => Ok(Symbol::SB),
            "W" => Ok(Symbol::Wild),
            "S" => Ok(Symbol::Scatter),
            other => Err(SlotError::UnknownSymbol(other.to_string())),
        }
    }

    /// Reel-strip token for this symbol
    pub fn token(self) -> &'static str {
        match self {
            Symbol::S9 => "9",
            Symbol::S10 => "10",
            Symbol::SJ => "J",
            Symbol::SQ => "Q",
            Symbol::SK => "K",
            Symbol::SR => "R",
            Symbol::SF => "F",
            Symbol::SB => "B",
            Symbol::Wild => "W",
            Symbol::Scatter => "S",
        }
    }

    /// Wild or scatter
    pub fn is_special(self) -> bool {
        matches!(self, Symbol::Wild | Symbol::Scatter)
    }
}

/// A circular reel strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawReelStrip")]
pub struct ReelStrip {
    symbols: Vec<Symbol>,
}

impl ReelStrip {
    /// Create a strip; fails on an empty symbol list
    pub fn new(reel_index: usize, symbols: Vec<Symbol>) -> SlotResult<Self> {
        if symbols.is_empty() {
            return Err(SlotError::EmptyReel(reel_index));
        }
        Ok(Self { symbols })
    }

    /// Decode a strip from its tokens
    pub fn from_tokens<S: AsRef<str>>(reel_index: usize, tokens: &[S]) -> SlotResult<Self> {
        let symbols = tokens
            .iter()
            .map(|t| Symbol::from_token(t.as_ref()))
            .collect::<SlotResult<Vec<_>>>()?;
        Self::new(reel_index, symbols)
    }

    /// Get symbol at position (wraps around)
    #[inline]
    pub fn symbol_at(&self, position: usize) -> Symbol {
        self.symbols[position % self.symbols.len()]
    }

    /// Strip length (always > 0)
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; strips are validated non-empty on construction
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in strip order
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

/// The five strips of one game mode (base or free)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawReelSet")]
pub struct ReelSet {
    strips: Vec<ReelStrip>,
}

impl ReelSet {
    /// Build from exactly [`REEL_COUNT`] strips
    pub fn new(strips: Vec<ReelStrip>) -> SlotResult<Self> {
        if strips.len() != REEL_COUNT {
            return Err(SlotError::ReelCount {
                expected: REEL_COUNT,
                found: strips.len(),
            });
        }
        Ok(Self { strips })
    }

    /// Decode all five strips from token columns
    pub fn from_tokens<S: AsRef<str>>(columns: &[Vec<S>]) -> SlotResult<Self> {
        let strips = columns
            .iter()
            .enumerate()
            .map(|(i, col)| ReelStrip::from_tokens(i, col.as_slice()))
            .collect::<SlotResult<Vec<_>>>()?;
        Self::new(strips)
    }

    /// Strip for one reel
    pub fn strip(&self, reel: usize) -> &ReelStrip {
        &self.strips[reel]
    }

    /// All strips
    pub fn strips(&self) -> &[ReelStrip] {
        &self.strips
    }

    /// Redraw `window` in place: one uniform stop per reel, three
    /// consecutive cells top to bottom with wraparound.
    #[inline]
    pub fn spin_into<R: Rng + ?Sized>(&self, rng: &mut R, window: &mut Window) {
        for (reel, strip) in self.strips.iter().enumerate() {
            let stop = rng.random_range(0..strip.len());
            for row in 0..ROW_COUNT {
                window.set(reel, row, strip.symbol_at(stop + row));
            }
        }
    }

    /// Draw a fresh window
    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> Window {
        let mut window = Window::default();
        self.spin_into(rng, &mut window);
        window
    }
}

// Unchecked wire shapes; deserialization goes through the constructors

#[derive(Deserialize)]
struct RawReelStrip {
    symbols: Vec<Symbol>,
}

impl TryFrom<RawReelStrip> for ReelStrip {
    type Error = SlotError;

    fn try_from(raw: RawReelStrip) -> SlotResult<Self> {
        Self::new(0, raw.symbols)
    }
}

#[derive(Deserialize)]
struct RawReelSet {
    strips: Vec<RawReelStrip>,
}

impl TryFrom<RawReelSet> for ReelSet {
    type Error = SlotError;

    fn try_from(raw: RawReelSet) -> SlotResult<Self> {
        let strips = raw
            .strips
            .into_iter()
            .enumerate()
            .map(|(i, strip)| ReelStrip::new(i, strip.symbols))
            .collect::<SlotResult<Vec<_>>>()?;
        Self::new(strips)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_token_decode() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_token(symbol.token()).unwrap(), symbol);
        }
        assert!(matches!(
            Symbol::from_token("X"),
            Err(SlotError::UnknownSymbol(t)) if t == "X"
        ));
    }

    #[test]
    fn test_reel_strip_wrap() {
        let strip = ReelStrip::new(0, vec![Symbol::S9, Symbol::SJ, Symbol::SQ]).unwrap();
        assert_eq!(strip.symbol_at(0), Symbol::S9);
        assert_eq!(strip.symbol_at(3), Symbol::S9);
        assert_eq!(strip.symbol_at(4), Symbol::SJ);
    }

    #[test]
    fn test_empty_strip_rejected() {
        assert!(matches!(ReelStrip::new(3, Vec::new()), Err(SlotError::EmptyReel(3))));
    }

    #[test]
    fn test_reel_count_checked() {
        let strip = ReelStrip::new(0, vec![Symbol::S9]).unwrap();
        let err = ReelSet::new(vec![strip; 4]).unwrap_err();
        assert!(matches!(err, SlotError::ReelCount { expected: 5, found: 4 }));
    }

    #[test]
    fn test_spin_wraps_consecutive_cells() {
        // Length-2 strips force every stop to wrap on the third row
        let strip = ReelStrip::new(0, vec![Symbol::SK, Symbol::SR]).unwrap();
        let reels = ReelSet::new(vec![strip; 5]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let window = reels.spin(&mut rng);
            for reel in 0..REEL_COUNT {
                let top = window.get(reel, 0);
                assert_ne!(window.get(reel, 1), top);
                assert_eq!(window.get(reel, 2), top);
            }
        }
    }

    #[test]
    fn test_spin_uses_one_draw_per_reel() {
        let strip = ReelStrip::new(0, (0..7).map(|i| Symbol::ALL[i]).collect()).unwrap();
        let reels = ReelSet::new(vec![strip.clone(); 5]).unwrap();

        let mut spun = ChaCha8Rng::seed_from_u64(99);
        let window = reels.spin(&mut spun);

        let mut manual = ChaCha8Rng::seed_from_u64(99);
        for reel in 0..REEL_COUNT {
            let stop = manual.random_range(0..strip.len());
            assert_eq!(window.get(reel, 0), strip.symbol_at(stop));
            assert_eq!(window.get(reel, 2), strip.symbol_at(stop + 2));
        }
        assert_eq!(spun.random::<u64>(), manual.random::<u64>());
    }

    #[test]
    fn test_deserialize_validates_strips() {
        let strip = r#"{"symbols":["S9","Wild"]}"#;
        let five = vec![strip; 5].join(",");
        let reels: ReelSet = serde_json::from_str(&format!(r#"{{"strips":[{five}]}}"#)).unwrap();
        assert_eq!(reels.strip(4).symbols(), &[Symbol::S9, Symbol::Wild]);

        let with_empty = format!(r#"{{"strips":[{strip},{strip},{{"symbols":[]}},{strip},{strip}]}}"#);
        let err = serde_json::from_str::<ReelSet>(&with_empty).unwrap_err();
        assert!(err.to_string().contains("Reel 2 has no symbols"));

        let six = vec![strip; 6].join(",");
        assert!(serde_json::from_str::<ReelSet>(&format!(r#"{{"strips":[{six}]}}"#)).is_err());
        assert!(serde_json::from_str::<ReelStrip>(r#"{"symbols":[]}"#).is_err());
    }
}
