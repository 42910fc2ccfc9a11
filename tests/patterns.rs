#[cfg(test)]
mod tests {
    use conway_rules::{Config, Grid, Pattern, RuleSet, Simulation, ALIVE};

    fn conway(grid: Grid) -> Simulation {
        let config = Config {
            max_generations: u64::MAX,
            seed: Some(42),
            rules: RuleSet::b3s23(),
            ..Config::default()
        };
        Simulation::from_grid(grid, config).unwrap()
    }

    fn grid_with(n: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::blank(n).unwrap();
        for &(i, j) in alive {
            grid.set(i, j, ALIVE);
        }
        grid
    }

    #[test]
    fn test_block_is_still_life() {
        for n in [4, 6, 9] {
            let block = grid_with(n, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
            let mut sim = conway(block.clone());
            for _ in 0..20 {
                sim.step();
                assert_eq!(*sim.grid(), block, "n={}", n);
            }
        }
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = grid_with(7, &[(3, 2), (3, 3), (3, 4)]);
        let vertical = grid_with(7, &[(2, 3), (3, 3), (4, 3)]);
        let mut sim = conway(horizontal.clone());
        for _ in 0..5 {
            sim.step();
            assert_eq!(*sim.grid(), vertical);
            sim.step();
            assert_eq!(*sim.grid(), horizontal);
        }
    }

    #[test]
    fn test_blinker_across_the_edge() {
        let horizontal = grid_with(5, &[(0, 4), (0, 0), (0, 1)]);
        let vertical = grid_with(5, &[(4, 0), (0, 0), (1, 0)]);
        let mut sim = conway(horizontal.clone());
        sim.step();
        assert_eq!(*sim.grid(), vertical);
        sim.step();
        assert_eq!(*sim.grid(), horizontal);
    }

    #[test]
    fn test_glider_wraps_around_torus() {
        const N: usize = 8;

        let glider = Pattern::from_picture(".O.\n..O\nOOO").unwrap();
        let start = Grid::with_pattern(N, &glider).unwrap();
        let mut sim = conway(start.clone());
        for generation in 1..=4 * N {
            sim.step();
            assert_eq!(sim.grid().population(), 5);
            if generation % 4 == 0 && generation < 4 * N {
                assert_ne!(*sim.grid(), start);
            }
        }
        assert_eq!(*sim.grid(), start);
    }

    #[test]
    fn test_default_rules_revive_on_two_neighbors() {
        let pair = grid_with(6, &[(2, 1), (2, 3)]);
        let mut sim = Simulation::from_grid(
            pair.clone(),
            Config {
                seed: Some(42),
                ..Config::default()
            },
        )
        .unwrap();
        sim.step();
        assert_eq!(*sim.grid(), grid_with(6, &[(1, 2), (2, 2), (3, 2)]));

        let mut sim = conway(pair);
        sim.step();
        assert_eq!(sim.grid().population(), 0);
    }
}
