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

//! This module contains everything that is necessary to parse the instances
//! of the problems from this crate. All instance files share the same simple
//! layout: a sequence of whitespace separated tokens where everything that
//! follows a `#` on a line is a comment.

use std::{fs::File, io::{BufRead, BufReader}, path::Path};

use crate::Error;

/// This function reads the complete content of an instance file.
pub fn read_file<P: AsRef<Path>>(fname: P) -> Result<String, Error> {
    let f = File::open(fname)?;
    let f = BufReader::new(f);

    let mut text = String::new();
    for line in f.lines() {
        text.push_str(&line?);
        text.push('\n');
    }
    Ok(text)
}

/// A cursor over the tokens of an instance text
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    tokens: Vec<&'a str>,
    pos: usize,
}
impl <'a> Tokens<'a> {
    /// Splits the given text in tokens, dropping the comments
    pub fn new(text: &'a str) -> Self {
        let tokens = text.lines()
            .map(|line| line.split('#').next().unwrap_or(""))
            .flat_map(|line| line.split_whitespace())
            .collect();
        Self { tokens, pos: 0 }
    }
    /// Returns true iff all tokens have been consumed
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }
    /// Fails unless all tokens have been consumed
    pub fn expect_end(&self) -> Result<(), Error> {
        if self.is_exhausted() {
            Ok(())
        } else {
            Err(Error::Format(format!("unexpected trailing token '{}'", self.tokens[self.pos])))
        }
    }
    /// Fails unless `count` groups of `width` tokens are still to be read.
    /// Counts read from an instance must go through this check before any
    /// buffer is sized after them.
    pub fn expect_remaining(&self, count: usize, width: usize, what: &str) -> Result<(), Error> {
        let left = self.tokens.len().saturating_sub(self.pos);
        match count.checked_mul(width) {
            Some(needed) if needed <= left => Ok(()),
            _ => Err(Error::Format(format!("{count} {what} announced but only {left} tokens left"))),
        }
    }
    fn next_token(&mut self, what: &str) -> Result<&'a str, Error> {
        let token = self.tokens.get(self.pos)
            .copied()
            .ok_or_else(|| Error::Format(format!("missing {what}")))?;
        self.pos += 1;
        Ok(token)
    }
    /// Reads a non negative integer
    pub fn next_usize(&mut self, what: &str) -> Result<usize, Error> {
        Ok(self.next_token(what)?.parse::<usize>()?)
    }
    /// Reads a signed integer
    pub fn next_isize(&mut self, what: &str) -> Result<isize, Error> {
        Ok(self.next_token(what)?.parse::<isize>()?)
    }
    /// Reads a signed integer where a `-` stands for a missing entry
    pub fn next_entry(&mut self, what: &str) -> Result<Option<isize>, Error> {
        match self.next_token(what)? {
            "-"   => Ok(None),
            token => Ok(Some(token.parse::<isize>()?)),
        }
    }
    /// Reads a `rows x cols` matrix of signed integers (row major)
    pub fn next_matrix(&mut self, rows: usize, cols: usize, what: &str) -> Result<Vec<Vec<isize>>, Error> {
        self.expect_remaining(rows, cols, what)?;
        let mut matrix = Vec::with_capacity(rows);
        for _ in 0..rows {
            let mut row = Vec::with_capacity(cols);
            for _ in 0..cols {
                row.push(self.next_isize(what)?);
            }
            matrix.push(row);
        }
        Ok(matrix)
    }
}

/// Returns an `InvalidInstance` error unless `matrix` is square and has
/// `n` rows
pub fn check_square<T>(matrix: &[Vec<T>], what: &str) -> Result<usize, Error> {
    let n = matrix.len();
    if let Some(i) = matrix.iter().position(|row| row.len() != n) {
        return Err(Error::InvalidInstance(
            format!("the {what} matrix must be square: row {i} has {} entries instead of {n}", matrix[i].len())));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use crate::Error;
    use super::*;

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let text = "# a comment\n\n 3 4 # trailing comment\n5\n";
        let mut tokens = Tokens::new(text);
        assert_eq!(3, tokens.next_usize("a").unwrap());
        assert_eq!(4, tokens.next_usize("b").unwrap());
        assert_eq!(5, tokens.next_isize("c").unwrap());
        assert!(tokens.is_exhausted());
        assert!(tokens.expect_end().is_ok());
    }
    #[test]
    fn a_dash_is_a_missing_entry() {
        let mut tokens = Tokens::new("- 12 -3");
        assert_eq!(None, tokens.next_entry("x").unwrap());
        assert_eq!(Some(12), tokens.next_entry("x").unwrap());
        assert_eq!(Some(-3), tokens.next_entry("x").unwrap());
    }
    #[test]
    fn a_missing_token_is_a_format_error() {
        let mut tokens = Tokens::new("1");
        tokens.next_usize("first").unwrap();
        assert!(matches!(tokens.next_usize("second"), Err(Error::Format(_))));
    }
    #[test]
    fn garbage_is_a_parse_int_error() {
        let mut tokens = Tokens::new("hello");
        assert!(matches!(tokens.next_isize("x"), Err(Error::ParseInt(_))));
    }
    #[test]
    fn trailing_tokens_are_reported() {
        let mut tokens = Tokens::new("1 2");
        tokens.next_usize("x").unwrap();
        assert!(matches!(tokens.expect_end(), Err(Error::Format(_))));
    }
    #[test]
    fn matrices_are_read_row_major() {
        let mut tokens = Tokens::new("1 2 3\n4 5 6");
        let m = tokens.next_matrix(2, 3, "m").unwrap();
        assert_eq!(vec![vec![1, 2, 3], vec![4, 5, 6]], m);
    }
    #[test]
    fn a_matrix_larger_than_the_text_is_a_format_error() {
        let mut tokens = Tokens::new("1 2 3\n4 5 6");
        assert!(matches!(tokens.next_matrix(3, 3, "m"), Err(Error::Format(_))));
        assert!(matches!(tokens.next_matrix(usize::MAX, 2, "m"), Err(Error::Format(_))));
        assert!(matches!(tokens.next_matrix(1 << 40, 1 << 40, "m"), Err(Error::Format(_))));
    }
    #[test]
    fn the_remaining_tokens_bound_the_announced_counts() {
        let mut tokens = Tokens::new("4 1 2 3 4");
        let n = tokens.next_usize("n").unwrap();
        assert!(tokens.expect_remaining(n, 1, "items").is_ok());
        assert!(tokens.expect_remaining(n, 2, "items").is_err());
        assert!(tokens.expect_remaining(0, usize::MAX, "items").is_ok());
    }
    #[test]
    fn square_matrices_are_accepted_and_others_rejected() {
        assert_eq!(2, check_square(&[vec![1, 2], vec![3, 4]], "m").unwrap());
        assert_eq!(0, check_square::<isize>(&[], "m").unwrap());
        assert!(matches!(check_square(&[vec![1, 2], vec![3]], "m"), Err(Error::InvalidInstance(_))));
    }
    #[test]
    fn reading_a_missing_file_is_an_io_error() {
        assert!(matches!(read_file("/this/file/does/not/exist.txt"), Err(Error::Io(_))));
    }
}
