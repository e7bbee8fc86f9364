use std::{collections::BTreeSet, error::Error};
use toruslife_lib::{
    glider, next_generation, rule::transition, step_into, Coord, Error as LifeError, Glyphs, Grid,
    State, ALIVE, DEAD, MAX_SIZE,
};

fn live(grid: &Grid) -> BTreeSet<Coord> {
    grid.live_cells().collect()
}

#[test]
fn empty_seed() -> Result<(), Box<dyn Error>> {
    for size in 1..10 {
        let grid = Grid::from_seed(size, &[])?;
        assert_eq!(grid.size(), size);
        assert_eq!(grid.rows().count(), size);
        assert!(grid.rows().all(|row| row.len() == size));
        assert_eq!(grid.population(), 0);
    }
    Ok(())
}

#[test]
fn zero_size() {
    assert_eq!(Grid::new(0), Err(LifeError::NonPositiveSize));
    assert_eq!(Grid::from_seed(0, &[]), Err(LifeError::NonPositiveSize));
}

#[test]
fn oversized_grid() {
    assert_eq!(Grid::new(usize::MAX), Err(LifeError::SizeTooLarge(usize::MAX)));
    assert_eq!(
        Grid::from_seed(MAX_SIZE + 1, &[]),
        Err(LifeError::SizeTooLarge(MAX_SIZE + 1))
    );
    assert_eq!(
        LifeError::SizeTooLarge(usize::MAX).to_string(),
        format!("Grid size {} is too large.", usize::MAX)
    );
}

#[test]
fn glider_on_oversized_grid() {
    assert!(glider(usize::MAX).is_empty());
    assert!(glider(MAX_SIZE + 1).is_empty());
    let h = MAX_SIZE as i32 / 2;
    assert!(glider(MAX_SIZE).contains(&(h + 1, h + 1)));
    assert_eq!(glider(25)[0], (11, 12));
}

#[test]
fn seed_cells() -> Result<(), Box<dyn Error>> {
    let seed = [(1, 1), (4, 2), (2, 4), (4, 4), (1, 1)];
    let grid = Grid::from_seed(5, &seed)?;
    assert_eq!(live(&grid), seed.iter().copied().collect::<BTreeSet<_>>());
    assert_eq!(grid.population(), 4);
    Ok(())
}

#[test]
fn first_bad_seed_is_reported() {
    let seed = [(3, 3), (0, 2), (9, 9)];
    assert_eq!(
        Grid::from_seed(8, &seed),
        Err(LifeError::SeedOutOfBounds {
            coord: (0, 2),
            size: 8
        })
    );
}

#[test]
fn seed_error_message() {
    let err = Grid::from_seed(25, &[(25, 11)]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Seed value (25, 11) out of bounds for a grid of size 25."
    );
}

#[test]
fn wrapping_lookup() -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::new(6)?;
    grid.set((-1, -1), ALIVE);
    assert_eq!(grid.get((5, 5)), ALIVE);
    assert_eq!(grid.get((11, 11)), ALIVE);
    assert_eq!(live(&grid), BTreeSet::from([(5, 5)]));
    grid.set((5, 5), DEAD);
    assert_eq!(grid.population(), 0);
    Ok(())
}

#[test]
fn toroidal_neighbors() -> Result<(), Box<dyn Error>> {
    let size = 7;
    let mut grid = Grid::new(size)?;
    grid.set((0, 0), ALIVE);
    let last = size as i32 - 1;
    assert_eq!(grid.live_neighbors((last, last)), 1);
    assert_eq!(grid.live_neighbors((last, 0)), 1);
    assert_eq!(grid.live_neighbors((0, last)), 1);
    assert_eq!(grid.live_neighbors((1, 1)), 1);
    assert_eq!(grid.live_neighbors((0, 0)), 0);
    assert_eq!(grid.live_neighbors((3, 3)), 0);
    Ok(())
}

#[test]
fn states() {
    assert_eq!(!ALIVE, DEAD);
    assert_eq!(!DEAD, ALIVE);
    assert_eq!(u8::from(ALIVE), 1);
    assert_eq!(u8::from(DEAD), 0);
    assert_eq!(State::from(1u8), ALIVE);
    assert_eq!(State::from(0u8), DEAD);
    assert_eq!(State::from(true), ALIVE);
    assert_eq!(State::default(), DEAD);
}

#[test]
fn rule_table() {
    for n in 0..=8 {
        let survives = n == 2 || n == 3;
        assert_eq!(transition(ALIVE, n), if survives { ALIVE } else { DEAD });
        assert_eq!(transition(DEAD, n), if n == 3 { ALIVE } else { DEAD });
    }
}

#[test]
fn block_is_still_life() -> Result<(), Box<dyn Error>> {
    let grid = Grid::from_seed(10, &[(4, 4), (4, 5), (5, 4), (5, 5)])?;
    assert_eq!(next_generation(&grid), grid);
    Ok(())
}

#[test]
fn block_across_corners() -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::new(6)?;
    for coord in [(0, 0), (0, 5), (5, 0), (5, 5)] {
        grid.set(coord, ALIVE);
    }
    assert_eq!(next_generation(&grid), grid);
    Ok(())
}

#[test]
fn blinker_oscillates() -> Result<(), Box<dyn Error>> {
    let horizontal = Grid::from_seed(5, &[(2, 1), (2, 2), (2, 3)])?;
    let vertical = Grid::from_seed(5, &[(1, 2), (2, 2), (3, 2)])?;
    assert_eq!(next_generation(&horizontal), vertical);
    assert_eq!(next_generation(&vertical), horizontal);
    Ok(())
}

#[test]
fn lone_cell_dies() -> Result<(), Box<dyn Error>> {
    let grid = Grid::from_seed(5, &[(2, 2)])?;
    assert_eq!(next_generation(&grid).population(), 0);
    Ok(())
}

#[test]
fn step_into_buffer() -> Result<(), Box<dyn Error>> {
    let current = Grid::from_seed(5, &[(2, 1), (2, 2), (2, 3)])?;
    let mut next = Grid::new(5)?;
    next.set((0, 0), ALIVE);
    step_into(&current, &mut next)?;
    assert_eq!(next, next_generation(&current));

    let mut small = Grid::new(4)?;
    assert_eq!(
        step_into(&current, &mut small),
        Err(LifeError::SizeMismatch {
            expected: 5,
            found: 4
        })
    );
    Ok(())
}

#[test]
fn display() -> Result<(), Box<dyn Error>> {
    let grid = Grid::from_seed(3, &[(1, 1), (1, 2)])?;
    assert_eq!(grid.to_string(), " \n. . .  \n. X X  \n. . .  \n");

    let glyphs = Glyphs {
        live: String::from("o"),
        dead: String::from("."),
        border: '|',
    };
    assert_eq!(grid.display_with(&glyphs), "|\n...|\n.oo|\n...|\n");
    Ok(())
}

#[test]
fn clear() -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::from_seed(5, &[(1, 1), (2, 2)])?;
    grid.clear();
    assert_eq!(grid, Grid::new(5)?);
    Ok(())
}
