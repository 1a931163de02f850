use crate::basis::Movement;

/// 行動列を 1 文字ずつ `-` 区切りで並べた解答文字列を作る. 末尾に区切りは付けず,
/// 空の行動列からは空文字列ができる.
pub(crate) fn ans(movements: &[Movement]) -> String {
    let mut result = String::new();
    for (i, movement) in movements.iter().enumerate() {
        if i != 0 {
            result.push('-');
        }
        result.push(movement.as_char());
    }
    result
}

#[test]
fn renders_with_separator() {
    use crate::basis::Movement::*;
    assert_eq!(ans(&[]), "");
    assert_eq!(ans(&[Down]), "D");
    assert_eq!(ans(&[Down, Right, Left, Up]), "D-R-L-U");
}
