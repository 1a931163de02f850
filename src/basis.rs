/// `Movement` は空きマスと隣接タイルを入れ替える操作を表す.
///
/// 向きの名前は空きマスへ滑り込むタイルの動く向きであり, 空きマス自身の移動方向ではない.
/// 解答文字列の形式と互換にするためこの呼び方をそのまま維持する.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Movement {
    Down,
    Right,
    Left,
    Up,
}

impl Movement {
    /// 後続盤面の生成順. 同コストの頂点は先に生成された方が優先されるため順序に意味がある.
    pub(crate) const ALL: [Movement; 4] = [
        Movement::Down,
        Movement::Right,
        Movement::Left,
        Movement::Up,
    ];

    /// 空きマスが添字 `blank` にあるとき, この操作が盤面の外に出ないかを返す.
    ///
    /// 添字 `i` のマスは `i / 3` 行 `i % 3` 列にある.
    pub(crate) fn is_legal_from(self, blank: usize) -> bool {
        match self {
            Movement::Down => 3 <= blank,
            Movement::Right => blank % 3 != 0,
            Movement::Left => blank % 3 != 2,
            Movement::Up => blank <= 5,
        }
    }

    /// 空きマスが添字 `blank` にあるとき, 入れ替わる相手のマスの添字を返す.
    pub(crate) fn swap_target(self, blank: usize) -> usize {
        match self {
            Movement::Down => blank - 3,
            Movement::Right => blank - 1,
            Movement::Left => blank + 1,
            Movement::Up => blank + 3,
        }
    }

    /// この操作を打ち消す操作を返す.
    #[cfg(test)]
    pub(crate) fn inverse(self) -> Self {
        match self {
            Movement::Down => Movement::Up,
            Movement::Right => Movement::Left,
            Movement::Left => Movement::Right,
            Movement::Up => Movement::Down,
        }
    }

    /// 解答文字列で使う 1 文字の表記を返す.
    pub(crate) fn as_char(self) -> char {
        match self {
            Movement::Down => 'D',
            Movement::Right => 'R',
            Movement::Left => 'L',
            Movement::Up => 'U',
        }
    }
}

#[test]
fn legality_matches_grid_adjacency() {
    // 角は 2 手, 辺は 3 手, 中央は 4 手.
    let expected = [2, 3, 2, 3, 4, 3, 2, 3, 2];
    for blank in 0..9 {
        let legal = Movement::ALL
            .iter()
            .filter(|movement| movement.is_legal_from(blank))
            .count();
        assert_eq!(legal, expected[blank], "blank: {}", blank);
    }
}

#[test]
fn swap_targets_from_center() {
    assert_eq!(Movement::Down.swap_target(4), 1);
    assert_eq!(Movement::Right.swap_target(4), 3);
    assert_eq!(Movement::Left.swap_target(4), 5);
    assert_eq!(Movement::Up.swap_target(4), 7);
}

#[test]
fn inverse_is_involutive() {
    for &movement in &Movement::ALL {
        assert_eq!(movement.inverse().inverse(), movement);
    }
}
