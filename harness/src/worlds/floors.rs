//! `FloorsPuzzle`: the generator/microchip inventory-assignment puzzle.
//!
//! Each element contributes one generator and one microchip. Items start
//! spread over four floors; an elevator carries one or two items one floor up
//! or down per step. A microchip is destroyed if it shares a floor with any
//! generator while its own generator is elsewhere; such configurations are
//! illegal and never generated. The goal is every item on the top floor.
//!
//! States store one `(generator_floor, microchip_floor)` pair per element and
//! keep the pairs sorted. Elements are interchangeable, so configurations that
//! differ only by which element sits where compare (and hash) equal.

use std::collections::BTreeMap;

use wayfind_search::Cost;

use crate::contract::{SearchWorld, WorldError};

/// Number of floors in the building.
pub const FLOOR_COUNT: u8 = 4;

/// Index of the top floor.
pub const TOP_FLOOR: u8 = FLOOR_COUNT - 1;

/// Floor positions of one element's generator and microchip.
pub type Pair = (u8, u8);

/// One configuration of the building.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FloorsState {
    elevator: u8,
    pairs: Vec<Pair>,
}

impl FloorsState {
    /// Build a normalized state.
    #[must_use]
    pub fn new(elevator: u8, mut pairs: Vec<Pair>) -> Self {
        pairs.sort_unstable();
        Self { elevator, pairs }
    }

    #[must_use]
    pub fn elevator(&self) -> u8 {
        self.elevator
    }

    #[must_use]
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Whether no microchip is exposed to a foreign generator.
    #[must_use]
    pub fn is_legal(&self) -> bool {
        self.pairs.iter().all(|&(generator, chip)| {
            generator == chip || !self.pairs.iter().any(|&(g, _)| g == chip)
        })
    }

    /// Total number of floors all items still have to climb.
    #[must_use]
    pub fn distance_to_top(&self) -> u32 {
        self.pairs
            .iter()
            .map(|&(g, c)| u32::from(TOP_FLOOR - g) + u32::from(TOP_FLOOR - c))
            .sum()
    }

    /// Items on the elevator's floor as `(pair index, is_generator)`.
    fn items_at_elevator(&self) -> Vec<(usize, bool)> {
        let mut items = Vec::new();
        for (i, &(g, c)) in self.pairs.iter().enumerate() {
            if g == self.elevator {
                items.push((i, true));
            }
            if c == self.elevator {
                items.push((i, false));
            }
        }
        items
    }

    fn carry(&self, destination: u8, load: &[(usize, bool)]) -> FloorsState {
        let mut pairs = self.pairs.clone();
        for &(i, is_generator) in load {
            if is_generator {
                pairs[i].0 = destination;
            } else {
                pairs[i].1 = destination;
            }
        }
        FloorsState::new(destination, pairs)
    }
}

/// The puzzle world: a fixed starting configuration.
#[derive(Debug, Clone)]
pub struct FloorsPuzzle {
    start: FloorsState,
}

impl FloorsPuzzle {
    /// Create a puzzle with the elevator on the ground floor.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Parse`] if a floor index is out of range or the
    /// starting configuration is itself illegal.
    pub fn new(pairs: Vec<Pair>) -> Result<Self, WorldError> {
        if let Some(&(g, c)) = pairs
            .iter()
            .find(|&&(g, c)| g >= FLOOR_COUNT || c >= FLOOR_COUNT)
        {
            return Err(WorldError::Parse {
                line: usize::from(g.max(c)) + 1,
                detail: format!("floor out of range in pair ({g}, {c})"),
            });
        }
        let start = FloorsState::new(0, pairs);
        if !start.is_legal() {
            return Err(WorldError::Parse {
                line: 1,
                detail: "starting configuration exposes a microchip".into(),
            });
        }
        Ok(Self { start })
    }

    /// Parse the puzzle description, one floor per line, bottom floor first:
    ///
    /// ```text
    /// The first floor contains a hydrogen-compatible microchip and a lithium-compatible microchip.
    /// The second floor contains a hydrogen generator.
    /// The third floor contains a lithium generator.
    /// The fourth floor contains nothing relevant.
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Parse`] for more than four floors or an element
    /// listed twice, and [`WorldError::Missing`] if an element lacks its
    /// generator or microchip.
    pub fn parse(input: &str) -> Result<Self, WorldError> {
        let mut elements: BTreeMap<String, (Option<u8>, Option<u8>)> = BTreeMap::new();

        for (line_no, line) in input.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let floor = u8::try_from(line_no)
                .ok()
                .filter(|f| *f < FLOOR_COUNT)
                .ok_or_else(|| WorldError::Parse {
                    line: line_no + 1,
                    detail: format!("more than {FLOOR_COUNT} floors"),
                })?;

            let words: Vec<&str> = line
                .split_whitespace()
                .map(|w| w.trim_matches(|c: char| c == ',' || c == '.'))
                .collect();

            for (i, word) in words.iter().enumerate() {
                let next = words.get(i + 1).copied().unwrap_or("");
                if let Some(element) = word.strip_suffix("-compatible") {
                    if next == "microchip" {
                        let entry = elements.entry(element.to_string()).or_default();
                        place(&mut entry.1, floor, element, "microchip", line_no)?;
                    }
                } else if next == "generator" {
                    let entry = elements.entry((*word).to_string()).or_default();
                    place(&mut entry.0, floor, word, "generator", line_no)?;
                }
            }
        }

        let mut pairs = Vec::with_capacity(elements.len());
        for (element, slots) in elements {
            match slots {
                (Some(g), Some(c)) => pairs.push((g, c)),
                (None, _) => {
                    return Err(WorldError::Missing {
                        what: format!("{element} generator"),
                    })
                }
                (_, None) => {
                    return Err(WorldError::Missing {
                        what: format!("{element}-compatible microchip"),
                    })
                }
            }
        }
        Self::new(pairs)
    }

    /// Add extra elements whose generator and microchip both start on the
    /// ground floor.
    ///
    /// # Errors
    ///
    /// Same as [`FloorsPuzzle::new`].
    pub fn with_ground_floor_pairs(self, count: usize) -> Result<Self, WorldError> {
        let mut pairs = self.start.pairs;
        pairs.extend(std::iter::repeat_n((0, 0), count));
        Self::new(pairs)
    }
}

fn place(
    slot: &mut Option<u8>,
    floor: u8,
    element: &str,
    kind: &str,
    line_no: usize,
) -> Result<(), WorldError> {
    if slot.replace(floor).is_some() {
        return Err(WorldError::Parse {
            line: line_no + 1,
            detail: format!("{element} {kind} listed twice"),
        });
    }
    Ok(())
}

impl SearchWorld for FloorsPuzzle {
    type State = FloorsState;

    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "floors"
    }

    fn start(&self) -> FloorsState {
        self.start.clone()
    }

    /// At most two items rise one floor per step.
    fn heuristic(&self, state: &FloorsState) -> Cost {
        f64::from(state.distance_to_top()) / 2.0
    }

    fn successors(&self, state: &FloorsState) -> Vec<FloorsState> {
        let items = state.items_at_elevator();
        let destinations = [
            state.elevator.checked_add(1).filter(|f| *f < FLOOR_COUNT),
            state.elevator.checked_sub(1),
        ];

        let mut next = Vec::new();
        for destination in destinations.into_iter().flatten() {
            for (i, first) in items.iter().enumerate() {
                let single = state.carry(destination, &[*first]);
                if single.is_legal() {
                    next.push(single);
                }
                for second in &items[i + 1..] {
                    let double = state.carry(destination, &[*first, *second]);
                    if double.is_legal() {
                        next.push(double);
                    }
                }
            }
        }
        next
    }

    fn describe_state(&self, state: &FloorsState) -> serde_json::Value {
        serde_json::json!({
            "elevator": state.elevator,
            "pairs": state.pairs.iter().map(|&(g, c)| [g, c]).collect::<Vec<_>>(),
        })
    }
}
