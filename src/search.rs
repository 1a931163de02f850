use crate::{basis::Movement, board::Board};

mod a_star;

/// A* 探索する状態が実装するべき trait.
pub(crate) trait SearchState: Clone {
    type A: Copy + std::fmt::Debug;
    fn apply(&self, action: Self::A) -> Self;

    type AS: IntoIterator<Item = Self::A>;
    fn next_actions(&self) -> Self::AS;

    fn is_goal(&self) -> bool;

    type C: Copy + Ord + std::fmt::Debug;
    fn heuristic(&self) -> Self::C;
    fn cost_on(&self, action: Self::A) -> Self::C;
}

impl SearchState for Board {
    type A = Movement;
    fn apply(&self, action: Movement) -> Self {
        Board::apply(self, action)
    }

    type AS = Vec<Movement>;
    fn next_actions(&self) -> Vec<Movement> {
        let blank = self.blank_pos();
        Movement::ALL
            .iter()
            .copied()
            .filter(|movement| movement.is_legal_from(blank))
            .collect()
    }

    fn is_goal(&self) -> bool {
        Board::is_goal(self)
    }

    type C = u32;
    fn heuristic(&self) -> u32 {
        self.manhattan_distance()
    }

    /// 1 手あたりのコストは常に 1. よって経路コスト g は深さに一致する.
    fn cost_on(&self, _action: Movement) -> u32 {
        1
    }
}

/// 初期盤面から完成形までの最短手順を求める. 完成形に到達できない場合は到達可能な
/// 盤面を全て展開してから `None` を返す.
pub(crate) fn resolve(initial: Board) -> Option<Vec<Movement>> {
    a_star::a_star(initial)
}
