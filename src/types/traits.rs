//! Four-axis trait code (MBTI-style)

use serde::{Deserialize, Serialize};

/// One binary personality dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Extraversion / Introversion
    Energy,
    /// Intuition / Sensing
    Information,
    /// Thinking / Feeling
    Decision,
    /// Judging / Perceiving
    Lifestyle,
}

impl Axis {
    /// Axes in code order
    pub const ALL: [Axis; 4] = [Axis::Energy, Axis::Information, Axis::Decision, Axis::Lifestyle];

    /// (first letter, second letter). The first letter wins ties.
    pub fn letters(&self) -> (char, char) {
        match self {
            Axis::Energy => ('E', 'I'),
            Axis::Information => ('N', 'S'),
            Axis::Decision => ('T', 'F'),
            Axis::Lifestyle => ('J', 'P'),
        }
    }
}

/// Raw counters for all 8 letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisScores {
    #[serde(rename = "E")]
    pub e: u32,
    #[serde(rename = "I")]
    pub i: u32,
    #[serde(rename = "N")]
    pub n: u32,
    #[serde(rename = "S")]
    pub s: u32,
    #[serde(rename = "T")]
    pub t: u32,
    #[serde(rename = "F")]
    pub f: u32,
    #[serde(rename = "J")]
    pub j: u32,
    #[serde(rename = "P")]
    pub p: u32,
}

impl AxisScores {
    /// (first, second) counters of an axis
    pub fn pair(&self, axis: Axis) -> (u32, u32) {
        match axis {
            Axis::Energy => (self.e, self.i),
            Axis::Information => (self.n, self.s),
            Axis::Decision => (self.t, self.f),
            Axis::Lifestyle => (self.j, self.p),
        }
    }

    /// Increment the first (`true`) or second (`false`) counter of an axis
    pub fn bump(&mut self, axis: Axis, first: bool) {
        let slot = match (axis, first) {
            (Axis::Energy, true) => &mut self.e,
            (Axis::Energy, false) => &mut self.i,
            (Axis::Information, true) => &mut self.n,
            (Axis::Information, false) => &mut self.s,
            (Axis::Decision, true) => &mut self.t,
            (Axis::Decision, false) => &mut self.f,
            (Axis::Lifestyle, true) => &mut self.j,
            (Axis::Lifestyle, false) => &mut self.p,
        };
        *slot += 1;
    }

    /// Letter reported for an axis: first letter when its counter is `>=`
    pub fn letter(&self, axis: Axis) -> char {
        let (first, second) = self.pair(axis);
        let (a, b) = axis.letters();
        if first >= second {
            a
        } else {
            b
        }
    }

    /// Four-letter code, e.g. "ISFJ"
    pub fn code(&self) -> String {
        Axis::ALL.iter().map(|axis| self.letter(*axis)).collect()
    }
}

/// Output of the rule-based trait scorer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitResult {
    pub code: String,
    pub axis_scores: AxisScores,
}

impl TraitResult {
    pub fn from_scores(axis_scores: AxisScores) -> Self {
        Self {
            code: axis_scores.code(),
            axis_scores,
        }
    }
}
