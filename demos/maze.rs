//! Maze demo: solve an embedded maze with the A* engine and print the
//! route overlaid on the map.
//!
//! Run: cargo run --bin maze

use lodestar_geom::Vector;
use lodestar_search::{PathFinder, Pather};

const MAZE: &str = "\
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################";

/// Character-grid maze: `#` is a wall, everything else is open.
/// Coordinates are `(column, row)` with the origin at the top left.
struct Maze {
    rows: Vec<Vec<u8>>,
    width: i32,
    height: i32,
}

impl Maze {
    fn parse(text: &str) -> Option<(Maze, Vector, Vector)> {
        let rows: Vec<Vec<u8>> = text.lines().map(|l| l.bytes().collect()).collect();
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.len()) as i32;
        let maze = Maze {
            rows,
            width,
            height,
        };
        let start = maze.locate(b'S')?;
        let end = maze.locate(b'E')?;
        Some((maze, start, end))
    }

    fn locate(&self, which: u8) -> Option<Vector> {
        for (y, row) in self.rows.iter().enumerate() {
            if let Some(x) = row.iter().position(|&c| c == which) {
                return Some(Vector::new(x as i32, y as i32));
            }
        }
        None
    }

    fn open(&self, p: Vector) -> bool {
        p.x >= 0
            && p.y >= 0
            && p.x < self.width
            && p.y < self.height
            && self.rows[p.y as usize][p.x as usize] != b'#'
    }

    fn print_with_route(&self, route: &[Vector]) {
        let mut rows = self.rows.clone();
        for p in route {
            rows[p.y as usize][p.x as usize] = b'o';
        }
        for row in rows {
            println!("{}", String::from_utf8_lossy(&row));
        }
    }
}

impl Pather for Maze {
    type State = Vector;

    fn neighbors(&self, state: &Vector, buf: &mut Vec<Vector>) {
        buf.extend(state.neighbors_4().into_iter().filter(|&n| self.open(n)));
    }

    fn cost(&self, _: &Vector, _: &Vector) -> i32 {
        1
    }

    fn estimate(&self, from: &Vector, goal: &Vector) -> i32 {
        from.manhattan_distance(*goal)
    }
}

fn main() {
    let Some((maze, start, end)) = Maze::parse(MAZE) else {
        eprintln!("Error: maze is missing its start or end marker");
        std::process::exit(1);
    };

    let mut finder = PathFinder::new();
    match finder.find_path(&maze, start, end) {
        Some(route) => {
            maze.print_with_route(&route.nodes);
            println!(
                "{} steps from {start} to {end}, total cost {}",
                route.nodes.len() - 1,
                route.cost
            );
        }
        None => {
            eprintln!("Error: no route from {start} to {end}");
            std::process::exit(1);
        }
    }
}
