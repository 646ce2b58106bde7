use sudoku_propagate::SudokuGrid;
use sudoku_propagate::solver::{BacktrackingSolver, Solution, Solver};

/// Reference puzzles that are solved when no puzzle is given on the command
/// line.
const EXAMPLES: [&str; 7] = [
    "
    .....4.2.
    42.37.86.
    .675283..
    5.8...67.
    .71.5.24.
    .42...5.1
    ..916543.
    .34.89.56
    .5.7.....",
    "
    ....1.8..
    52...3.7.
    618.72.4.
    471......
    ...3.7.1.
    8........
    ....3.426
    2.7...39.
    36.12..8.",
    "
    ...2.1...
    ..9..8.6.
    ....7.84.
    2..18..35
    1.......6
    58..64..9
    .15.9....
    .7.5..1..
    ...8.3...",
    "
    3.....5.2
    ..1......
    9.25.718.
    ..36742..
    ...9.5...
    ..98213..
    .467.98.1
    ......9..
    7.5.....4",
    "
    ....5.1..
    .267..3.5
    ......762
    419..3.7.
    ......9.3
    3..6.78..
    .3.86.4..
    6.1...5..
    .473.5...",
    "
    ......3..
    5.2.4..17
    ...71.26.
    ....536..
    .1.....2.
    ..682....
    .43.75...
    15..3.4.9
    ..7......",
    "
    39.6....5
    ....9...7
    ..1..86..
    ..2.5...6
    .3.8.7.9.
    1...2.3..
    ..61..9..
    2...6....
    8....2.63"
];

fn solve_and_print(code: &str) {
    let grid = match SudokuGrid::parse(code) {
        Ok(grid) => grid,
        Err(error) => {
            println!("invalid puzzle: {}", error);
            return;
        }
    };

    println!("{}", grid);

    match BacktrackingSolver.solve(&grid) {
        Solution::Solved(solved) => {
            println!("solved:");
            println!("{}", solved);
        },
        Solution::Unsolvable => println!("this puzzle has no solution")
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        for &example in EXAMPLES.iter() {
            println!("------------------------");
            solve_and_print(example);
        }
    }
    else {
        solve_and_print(args.join(" ").as_str());
    }
}
