use std::fmt;

use anyhow::{bail, Result};

use crate::basis::Movement;

/// 完成形の盤面を表す文字列. タイル `v` はマス `v` に置かれ, 空きマスは左上になる.
pub(crate) const GOAL_STATE: &str = "012345678";

/// `Board` は 3x3 盤面のタイル配置を表す. 添字 `i` のマスは `i / 3` 行 `i % 3` 列にあり,
/// 値 0 は空きマスを表す. 正しい `Board` は常に {0, ..., 8} の順列になる.
///
/// 値型であり, 操作の適用は自身を書き換えずに新しい盤面を作る.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Board([u8; 9]);

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &tile in &self.0 {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &tile) in self.0.iter().enumerate() {
            if i % 3 == 0 && i != 0 {
                writeln!(f)?;
            }
            write!(f, "{} ", tile)?;
        }
        Ok(())
    }
}

impl Board {
    /// 入力文字列を検証して盤面を作る. 長さが 9 かつ '0' から '8' がちょうど 1 回ずつ
    /// 現れる場合のみ受理する.
    pub(crate) fn parse(s: &str) -> Result<Self> {
        let len = s.chars().count();
        if len != 9 {
            bail!("expected 9 tiles, but found {}", len);
        }
        let mut cells = [0u8; 9];
        let mut seen = [false; 9];
        for (i, c) in s.chars().enumerate() {
            let tile = match c.to_digit(10) {
                Some(tile) if tile <= 8 => tile as u8,
                _ => bail!("expected a digit in '0'..='8', but found {:?}", c),
            };
            if seen[tile as usize] {
                bail!("tile {} appears more than once", tile);
            }
            seen[tile as usize] = true;
            cells[i] = tile;
        }
        Ok(Self(cells))
    }

    /// 空きマスの添字を返す.
    ///
    /// 順列の不変条件より空きマスは必ず存在する. 見つからないのはエンジン内部のバグ
    /// なのでその場で落とす.
    pub(crate) fn blank_pos(&self) -> usize {
        self.0
            .iter()
            .position(|&tile| tile == 0)
            .expect("the board must contain the blank tile")
    }

    /// 空きマスと隣のタイルを入れ替えた新しい盤面を返す.
    ///
    /// 適用可能かは呼び出し側が `Movement::is_legal_from` で確認してから呼ぶこと.
    pub(crate) fn apply(&self, movement: Movement) -> Self {
        let blank = self.blank_pos();
        assert!(
            movement.is_legal_from(blank),
            "illegal movement {:?} for the blank at {}",
            movement,
            blank
        );
        let mut cells = self.0;
        cells.swap(blank, movement.swap_target(blank));
        Self(cells)
    }

    /// 全てのタイル `v` がマス `v` にあるかを返す.
    pub(crate) fn is_goal(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(i, &tile)| tile as usize == i)
    }

    /// 空きマス以外の各タイルについて, 今の位置から完成形の位置までのマンハッタン距離を
    /// 合計して返す. 残り手数を上回らない (許容的) ため A* の最適性が保たれる.
    pub(crate) fn manhattan_distance(&self) -> u32 {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(i, &tile)| {
                let goal = tile as usize;
                let rows = (i / 3) as i32 - (goal / 3) as i32;
                let cols = (i % 3) as i32 - (goal % 3) as i32;
                rows.unsigned_abs() + cols.unsigned_abs()
            })
            .sum()
    }

    /// 転倒数の偶奇で完成形に到達できるかを返す. 横幅が奇数の盤面では転倒数が偶数の
    /// ときに限り可解になる.
    #[cfg(test)]
    pub(crate) fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self.0.iter().copied().filter(|&tile| tile != 0).collect();
        let inversions: usize = tiles
            .iter()
            .enumerate()
            .map(|(i, &tile)| tiles[i + 1..].iter().filter(|&&rest| rest < tile).count())
            .sum();
        inversions % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, GOAL_STATE};
    use crate::basis::Movement;

    #[test]
    fn parse_accepts_permutations() {
        assert_eq!(Board::parse(GOAL_STATE).unwrap().blank_pos(), 0);
        assert_eq!(Board::parse("876543210").unwrap().blank_pos(), 8);
        assert_eq!(Board::parse("142358670").unwrap().blank_pos(), 8);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(Board::parse("").is_err());
        assert!(Board::parse("01234567").is_err());
        assert!(Board::parse("0123456789").is_err());
        assert!(Board::parse("112345678").is_err());
        assert!(Board::parse("01234567a").is_err());
        assert!(Board::parse("012345679").is_err());
    }

    #[test]
    fn goal_recognition() {
        assert!(Board::parse(GOAL_STATE).unwrap().is_goal());
        assert!(!Board::parse("102345678").unwrap().is_goal());
        assert!(!Board::parse("876543210").unwrap().is_goal());
    }

    #[test]
    fn manhattan_distance_fixtures() {
        assert_eq!(Board::parse(GOAL_STATE).unwrap().manhattan_distance(), 0);
        // 空きマスと入れ替えた場合はタイル 1 だけが 1 マスずれる.
        assert_eq!(Board::parse("102345678").unwrap().manhattan_distance(), 1);
        // タイル 1 と 2 を入れ替えた場合は両方が 1 マスずつずれる.
        assert_eq!(Board::parse("021345678").unwrap().manhattan_distance(), 2);
        assert_eq!(Board::parse("142358670").unwrap().manhattan_distance(), 4);
    }

    #[test]
    fn apply_then_inverse_restores() {
        let board = Board::parse("142358670").unwrap();
        let blank = board.blank_pos();
        for movement in Movement::ALL
            .iter()
            .copied()
            .filter(|movement| movement.is_legal_from(blank))
        {
            let moved = board.apply(movement);
            assert_eq!(moved.apply(movement.inverse()), board);
        }
    }

    #[test]
    fn apply_swaps_expected_cells() {
        // 1 0 2      1 4 2
        // 3 4 5  ->  3 0 5
        // 6 7 8      6 7 8
        let board = Board::parse("102345678").unwrap();
        let moved = board.apply(Movement::Up);
        assert_eq!(moved, Board::parse("142305678").unwrap());
        assert_eq!(moved.blank_pos(), 4);
    }

    #[test]
    #[should_panic(expected = "illegal movement")]
    fn apply_rejects_illegal_movement() {
        let board = Board::parse(GOAL_STATE).unwrap();
        board.apply(Movement::Down);
    }

    #[test]
    fn solvability_parity() {
        assert!(Board::parse(GOAL_STATE).unwrap().is_solvable());
        assert!(Board::parse("142358670").unwrap().is_solvable());
        assert!(Board::parse("102345678").unwrap().is_solvable());
        assert!(!Board::parse("021345678").unwrap().is_solvable());
        assert!(!Board::parse("213456780").unwrap().is_solvable());
    }
}
