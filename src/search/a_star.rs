use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, HashSet},
    hash::Hash,
    ops::Add,
};

use super::SearchState;

/// 展開で作られた探索木の頂点. 親への辺をアリーナ上の添字で持ち, 根は親を持たない.
/// コストの元になる深さは構築時に決まり以後変わらない.
struct Node<S, A, C> {
    state: S,
    depth: C,
    parent: Option<(usize, A)>,
}

/// フロンティアに積む項目. コストが等しいときは先に挿入された方を小さいとみなす.
struct Entry<C> {
    cost: C,
    seq: u64,
    index: usize,
}

impl<C: PartialEq> PartialEq for Entry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl<C: Eq> Eq for Entry<C> {}

impl<C: Ord> PartialOrd for Entry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for Entry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A* アルゴリズムの実装. コスト `深さ + heuristic` が最小の頂点から順に展開し,
/// ゴールへ至る行動列を返す. フロンティアを使い切った場合は `None` を返す.
///
/// 展開済みの状態は後続の生成時に除外するが, フロンティア内の重複はあえて取り除か
/// ない. 取り除くと同コストの頂点のうちどれが先に選ばれるかが変わってしまう.
pub(crate) fn a_star<S, A, C>(start: S) -> Option<Vec<A>>
where
    S: SearchState<C = C, A = A> + Hash + Eq,
    A: Copy + std::fmt::Debug,
    C: Ord + Add<Output = C> + Default + Copy + std::fmt::Debug,
{
    let mut arena = vec![Node {
        depth: C::default(),
        parent: None,
        state: start,
    }];
    let mut frontier = BinaryHeap::new();
    let mut explored = HashSet::new();
    let mut seq = 0;

    frontier.push(Reverse(Entry {
        cost: arena[0].depth + arena[0].state.heuristic(),
        seq,
        index: 0,
    }));

    while let Some(Reverse(Entry { index, .. })) = frontier.pop() {
        let current = arena[index].state.clone();
        let depth = arena[index].depth;
        explored.insert(current.clone());
        if current.is_goal() {
            return Some(extract_path(&arena, index));
        }
        for action in current.next_actions() {
            let next = current.apply(action);
            if explored.contains(&next) {
                continue;
            }
            let next_depth = depth + current.cost_on(action);
            let cost = next_depth + next.heuristic();
            arena.push(Node {
                state: next,
                depth: next_depth,
                parent: Some((index, action)),
            });
            seq += 1;
            frontier.push(Reverse(Entry {
                cost,
                seq,
                index: arena.len() - 1,
            }));
        }
    }
    None
}

/// ゴールから根まで親の辺をたどって行動を集め, 根からゴールへの順に並べ直す.
fn extract_path<S, A: Copy, C>(arena: &[Node<S, A, C>], mut index: usize) -> Vec<A> {
    let mut history = vec![];
    while let Some((parent, action)) = arena[index].parent {
        history.push(action);
        index = parent;
    }
    history.reverse();
    history
}
