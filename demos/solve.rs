use std::env;

use rand::{thread_rng, Rng as _};

use smaze::{CellWall, Dims, Generator, Grid, Solver};

fn main() {
    let args = env::args()
        .skip(1)
        .take(3)
        .map(|s| s.parse())
        .collect::<Result<Vec<i64>, _>>()
        .expect("Expected integers");

    assert!(
        args.len() == 2 || args.len() == 3,
        "Usage: solve <columns> <rows> [seed]"
    );

    let input_seed = args.get(2).copied().map(|seed| seed as u64);
    let seed = input_seed.unwrap_or_else(|| thread_rng().gen());

    if input_seed.is_none() {
        println!("Seed: {}", seed);
    }

    let size = Dims(args[0] as i32, args[1] as i32);
    let mut grid = Grid::new(size).expect("Invalid grid size");
    Generator::generate(&mut grid, Some(seed)).expect("Generation failed");

    show_grid(&grid);

    if Solver::solve(&mut grid) {
        let explored = Dims::iter_fill(Dims::ZERO, size)
            .filter(|&pos| grid.cell(pos).unwrap().is_visited())
            .count();
        println!("Solved; explored {} of {} cells", explored, size.product());
    } else {
        println!("No path found");
    }
}

fn show_grid(grid: &Grid) {
    let Dims(width, height) = grid.size();

    for y in 0..height {
        for x in 0..width {
            let top = grid.cell(Dims(x, y)).unwrap().get_wall(CellWall::Top);
            print!("+{}", if top { "--" } else { "  " });
        }
        println!("+");

        for x in 0..width {
            let left = grid.cell(Dims(x, y)).unwrap().get_wall(CellWall::Left);
            print!("{}  ", if left { "|" } else { " " });
        }
        let right = grid
            .cell(Dims(width - 1, y))
            .unwrap()
            .get_wall(CellWall::Right);
        println!("{}", if right { "|" } else { " " });
    }

    for x in 0..width {
        let bottom = grid
            .cell(Dims(x, height - 1))
            .unwrap()
            .get_wall(CellWall::Bottom);
        print!("+{}", if bottom { "--" } else { "  " });
    }
    println!("+");
}
