use std::io::{self, Write};

use anyhow::Result;

mod answer;
mod basis;
mod board;
mod search;

use crate::board::{Board, GOAL_STATE};

fn main() -> Result<()> {
    print!("Please enter in the initial state (Ex: '013254687'): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    let initial = match Board::parse(line.trim_end()) {
        Ok(board) => board,
        Err(e) => {
            println!("Input for the initial state is invalid: {}", e);
            return Ok(());
        }
    };

    println!("Goal State is {}", GOAL_STATE);

    match search::resolve(initial) {
        Some(movements) => println!("Solution: {}", answer::ans(&movements)),
        None => println!("No Solution"),
    }

    Ok(())
}
