#[cfg(test)]
mod tests {
    use conway_rules::{
        Config, Grid, Pattern, PngRenderer, Recorder, Rule, RuleSet, Simulation, TextRenderer,
        ALIVE, DEAD,
    };
    use std::path::PathBuf;

    const SEED: u64 = 42;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("conway_rules_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn record(config: Config) -> Recorder {
        let mut recorder = Recorder::default();
        Simulation::new(config).unwrap().run(&mut recorder).unwrap();
        recorder
    }

    fn random_config(seed: u64, rules: RuleSet) -> Config {
        Config {
            size: 32,
            max_generations: 40,
            write_frequency: 4,
            seed: Some(seed),
            pattern: None,
            rules,
        }
    }

    #[test]
    fn test_deterministic_rules_repeat() {
        let a = record(Config {
            seed: Some(1),
            ..Config::default()
        });
        let b = record(Config {
            seed: Some(2),
            ..Config::default()
        });
        assert_eq!(a.iterations(), (0..=200).step_by(5).collect::<Vec<_>>());
        assert_eq!(a.snapshots, b.snapshots);
    }

    #[test]
    fn test_probabilistic_rules_follow_seed() {
        let rules = RuleSet::new(vec![
            Rule::new(ALIVE, None, Some(2), DEAD).with_probability(0.5),
            Rule::new(ALIVE, Some(3), None, DEAD),
            Rule::new(DEAD, Some(2), Some(4), ALIVE).with_probability(0.9),
        ])
        .unwrap();
        let a = record(random_config(SEED, rules.clone()));
        let b = record(random_config(SEED, rules.clone()));
        let c = record(random_config(SEED + 1, rules));
        assert_eq!(a.snapshots, b.snapshots);
        assert_ne!(a.snapshots, c.snapshots);
    }

    #[test]
    fn test_demo_pattern_is_centered() {
        let recorder = record(Config {
            max_generations: 0,
            ..Config::default()
        });
        let (iteration, grid) = &recorder.snapshots[0];
        assert_eq!(*iteration, 0);
        assert_eq!(*grid, Grid::with_pattern(20, &Pattern::demo()).unwrap());
        assert_eq!(grid.get(8, 6), ALIVE);
        assert_eq!(grid.get(9, 7), DEAD);
        assert_eq!(grid.get(10, 12), ALIVE);
        assert_eq!(grid.population(), 13);
    }

    #[test]
    fn test_text_snapshots() {
        let dir = scratch_dir("text");
        let config = Config {
            max_generations: 10,
            seed: Some(SEED),
            ..Config::default()
        };
        let mut recorder = Recorder::default();
        Simulation::new(config.clone()).unwrap().run(&mut recorder).unwrap();
        let renderer = TextRenderer::new(&dir).unwrap();
        Simulation::new(config).unwrap().run(renderer).unwrap();

        for (iteration, grid) in &recorder.snapshots {
            let text = std::fs::read_to_string(dir.join(format!("generation{}.txt", iteration))).unwrap();
            assert_eq!(text, grid.to_string());
        }
        assert!(!dir.join("generation3.txt").exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_png_snapshots() {
        let dir = scratch_dir("png");
        let config = Config {
            max_generations: 10,
            seed: Some(SEED),
            ..Config::default()
        };
        let renderer = PngRenderer::new(&dir, 4).unwrap();
        Simulation::new(config).unwrap().run(renderer).unwrap();

        for iteration in [0, 5, 10] {
            let image = image::open(dir.join(format!("generation{}.png", iteration))).unwrap();
            assert_eq!((image.width(), image.height()), (80, 80));
        }
        assert!(!dir.join("generation1.png").exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
