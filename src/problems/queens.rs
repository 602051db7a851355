// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module contains the model of a weighted N-Queens problem: place `n`
//! queens on an `n x n` board, one per row, so that no two of them attack
//! each other, while maximizing the total weight of the occupied squares.
//! By default, the weights favor the squares close to the center of the
//! board.
//!
//! # Instance format
//! ```text
//! n
//! [optional n x n weight board]
//! ```

use std::path::Path;

use bit_set::BitSet;

use crate::{Problem, ChildCallback, Node, Sense, Decision, Variable, Solution, Error, saturating_factorial};
use super::io_utils::{read_file, Tokens, check_square};

/// The largest board `Queens::centered` accepts to generate
pub const MAX_CENTERED_SIZE: usize = 1 << 10;

/// The squares that are under attack by the queens placed so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueensState {
    /// The occupied columns
    pub columns: BitSet,
    /// The occupied diagonals (`row + col`)
    pub diagonals: BitSet,
    /// The occupied anti diagonals (`row + n - 1 - col`)
    pub anti_diagonals: BitSet,
}

/// This is the structure encapsulating the weighted N-Queens problem.
/// Variable `r` is the column of the queen placed on row `r`.
#[derive(Debug, Clone)]
pub struct Queens {
    weight: Vec<Vec<isize>>,
}
impl Queens {
    /// Creates an instance rewarding the squares close to the center of the
    /// board: square `(r, c)` weighs `n - max(|2r - (n-1)|, |2c - (n-1)|)`.
    /// Placements then differ by how many of their queens sit in the inner
    /// rings of the board.
    ///
    /// # Errors
    /// `Error::InvalidInstance` when `n` is zero or above `MAX_CENTERED_SIZE`.
    pub fn centered(n: usize) -> Result<Self, Error> {
        if n > MAX_CENTERED_SIZE {
            return Err(Error::InvalidInstance(format!("a board of size {n} is too large")));
        }
        let offset = |x: usize| (2 * x as isize - (n as isize - 1)).abs();
        let weight = (0..n)
            .map(|r| (0..n).map(|c| n as isize - offset(r).max(offset(c))).collect::<Vec<_>>())
            .collect();
        Self::with_weights(weight)
    }
    /// Creates an instance using the given weight board
    ///
    /// # Errors
    /// `Error::InvalidInstance` when the board is empty or not square.
    pub fn with_weights(weight: Vec<Vec<isize>>) -> Result<Self, Error> {
        let n = check_square(&weight, "weight")?;
        if n == 0 {
            return Err(Error::InvalidInstance("there must be at least one queen".to_string()));
        }
        Ok(Self { weight })
    }
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut tokens = Tokens::new(text);
        let n = tokens.next_usize("number of queens")?;
        if tokens.is_exhausted() {
            return Self::centered(n);
        }
        let weight = tokens.next_matrix(n, n, "weight")?;
        tokens.expect_end()?;
        Self::with_weights(weight)
    }
    pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<Self, Error> {
        Self::parse(&read_file(fname)?)
    }

    /// The size of the board
    pub fn size(&self) -> usize {
        self.weight.len()
    }
    /// Returns the column of the queen on each row
    pub fn columns(&self, solution: &Solution) -> Vec<usize> {
        let mut cols = vec![0; self.size()];
        for d in solution.iter() {
            cols[d.variable.id()] = d.value as usize;
        }
        cols
    }

    fn is_safe(&self, state: &QueensState, row: usize, col: usize) -> bool {
        !state.columns.contains(col)
            && !state.diagonals.contains(row + col)
            && !state.anti_diagonals.contains(row + self.size() - 1 - col)
    }
}

impl Problem for Queens {
    type State = QueensState;

    fn sense(&self) -> Sense {
        Sense::Maximize
    }
    fn nb_variables(&self) -> usize {
        self.size()
    }
    fn max_branching(&self) -> usize {
        self.size()
    }
    fn initial_state(&self) -> QueensState {
        let n = self.size();
        QueensState {
            columns: BitSet::with_capacity(n),
            diagonals: BitSet::with_capacity(2 * n),
            anti_diagonals: BitSet::with_capacity(2 * n),
        }
    }
    fn worst_case_live_nodes(&self) -> u128 {
        saturating_factorial(self.size())
    }

    /// Each remaining row gets its heaviest square among those that are not
    /// attacked yet. A row without such a square means a dead end.
    fn bound(&self, node: &Node<QueensState>) -> Option<isize> {
        let mut bound = node.value;
        for row in node.depth..self.size() {
            bound += (0..self.size())
                .filter(|col| self.is_safe(&node.state, row, *col))
                .map(|col| self.weight[row][col])
                .max()?;
        }
        Some(bound)
    }

    fn branch(&self, node: &Node<QueensState>, children: &mut dyn ChildCallback<QueensState>) {
        let n = self.size();
        let row = node.depth;
        for col in 0..n {
            if !self.is_safe(&node.state, row, col) {
                continue;
            }
            let mut state = node.state.clone();
            state.columns.insert(col);
            state.diagonals.insert(row + col);
            state.anti_diagonals.insert(row + n - 1 - col);

            let decision = Decision { variable: Variable(row), value: col as isize };
            children.apply(node.child(decision, state, self.weight[row][col]));
        }
    }
}
