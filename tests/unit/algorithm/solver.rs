//! Tests for breadth-first solving and the path type

#[cfg(test)]
mod tests {
    use mazegen::algorithm::solver::{MazePath, solve};
    use mazegen::spatial::grid::{Direction, MazeGrid};
    use mazegen::spatial::position::Position;

    // 3x3 serpentine: across the top, back along the middle, across the bottom
    fn serpentine() -> MazeGrid {
        let mut grid = MazeGrid::new(3, 3);
        let openings = [
            ((0, 0), Direction::East),
            ((1, 0), Direction::East),
            ((2, 0), Direction::South),
            ((2, 1), Direction::West),
            ((1, 1), Direction::West),
            ((0, 1), Direction::South),
            ((0, 2), Direction::East),
            ((1, 2), Direction::East),
        ];
        for ((x, y), direction) in openings {
            assert!(grid.remove_wall(Position::new(x, y), direction));
        }
        grid
    }

    // Tests the only route through a hand-built maze is found
    // Verified by expanding neighbors in reverse order
    #[test]
    fn test_solve_serpentine() {
        let grid = serpentine();
        let path = solve(&grid, Position::new(0, 0), Position::new(2, 2));

        assert_eq!(path.to_string(), "EESWWSEE");
        assert!(path.is_walkable(&grid, Position::new(0, 0)));
    }

    // Tests a shortcut is preferred once it exists
    // Verified by using a stack instead of a queue
    #[test]
    fn test_solve_prefers_shortest_route() {
        let mut grid = serpentine();
        grid.remove_wall(Position::new(1, 1), Direction::South);

        let path = solve(&grid, Position::new(0, 0), Position::new(2, 2));

        assert_eq!(path.len(), 6);
        assert_eq!(path.to_string(), "EESWSE");
    }

    // Tests walking the reverse direction
    // Verified by tracing the path from start instead of end
    #[test]
    fn test_solve_reverse_direction() {
        let grid = serpentine();
        let path = solve(&grid, Position::new(2, 2), Position::new(0, 0));

        assert_eq!(path.to_string(), "WWNEENWW");
    }

    // Tests unreachable targets give an empty path
    // Verified by returning the partial path on exhaustion
    #[test]
    fn test_solve_unreachable() {
        let mut grid = MazeGrid::new(3, 3);
        grid.remove_wall(Position::new(0, 0), Direction::East);

        let path = solve(&grid, Position::new(0, 0), Position::new(2, 2));
        assert!(path.is_empty());
    }

    // Tests coinciding endpoints give an empty path
    // Verified by checking the target only after expansion
    #[test]
    fn test_solve_same_cell() {
        let grid = serpentine();
        assert!(solve(&grid, Position::new(1, 1), Position::new(1, 1)).is_empty());
    }

    // Tests out-of-bounds endpoints never panic and yield no path
    // Verified by indexing the visited set without a bounds check
    #[test]
    fn test_solve_out_of_bounds() {
        let grid = serpentine();
        assert!(solve(&grid, Position::new(9, 9), Position::new(0, 0)).is_empty());
        assert!(solve(&grid, Position::new(0, 0), Position::new(3, 0)).is_empty());
    }

    // Tests a one-sided opening is not treated as a passage
    // Verified by checking only the current cell's wall bit
    #[test]
    fn test_solve_requires_both_sides_open() {
        let mut grid = MazeGrid::new(2, 1);
        grid.remove_wall(Position::new(0, 0), Direction::East);
        grid.enclose(Position::new(1, 0));

        assert!(solve(&grid, Position::new(0, 0), Position::new(1, 0)).is_empty());
    }

    // Tests parsing and printing direction tokens
    // Verified by accepting lowercase tokens
    #[test]
    fn test_path_parse_and_display() {
        let path: MazePath = "NEESW".parse().unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.steps()[2], Direction::East);
        assert_eq!(path.to_string(), "NEESW");

        let empty: MazePath = "".parse().unwrap();
        assert!(empty.is_empty());

        let error = "NEx".parse::<MazePath>().unwrap_err();
        assert_eq!(error.token, 'x');
        assert_eq!(error.offset, 2);
    }

    // Tests the visited cell sequence of a path
    // Verified by omitting the start cell
    #[test]
    fn test_path_positions() {
        let path = MazePath::new(vec![Direction::East, Direction::South, Direction::South]);
        assert_eq!(
            path.positions(Position::new(1, 0)),
            vec![
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    // Tests walkability rejects steps through walls
    // Verified by skipping the passage check
    #[test]
    fn test_path_walkability() {
        let grid = serpentine();
        let through_wall = MazePath::new(vec![Direction::South]);
        assert!(!through_wall.is_walkable(&grid, Position::new(0, 0)));
        assert!(MazePath::default().is_walkable(&grid, Position::new(0, 0)));
    }
}
