use std::{
    error::Error,
    thread,
    time::{Duration, Instant},
};
use toruslife_lib::{CancelToken, Config, Error as LifeError, Grid, NullRenderer};

#[test]
fn cancelled_before_start() {
    let cancel = CancelToken::new();
    cancel.cancel();
    let result = Config::new(25)
        .set_iterations(Some(5))
        .run(&mut NullRenderer, &cancel);
    assert_eq!(result, Err(LifeError::Cancelled { generation: 0 }));
}

#[test]
fn cancel_from_renderer() {
    let cancel = CancelToken::new();
    let stopper = cancel.clone();
    let mut renderer = move |_: &Grid, generation: u64| {
        if generation == 3 {
            stopper.cancel();
        }
    };
    let result = Config::new(25)
        .set_tick_delay(Duration::ZERO)
        .run(&mut renderer, &cancel);
    assert_eq!(result, Err(LifeError::Cancelled { generation: 3 }));
    assert!(cancel.is_cancelled());
}

#[test]
fn cancel_wakes_up_pause() -> Result<(), Box<dyn Error>> {
    let cancel = CancelToken::new();
    let stopper = cancel.clone();
    let handle = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        stopper.cancel();
    });

    let start = Instant::now();
    let result = Config::new(25)
        .set_tick_delay(Duration::from_secs(60))
        .run(&mut NullRenderer, &cancel);
    assert_eq!(result, Err(LifeError::Cancelled { generation: 1 }));
    assert!(start.elapsed() < Duration::from_secs(30));

    handle.join().map_err(|_| "canceller panicked")?;
    Ok(())
}

#[test]
fn finished_run_ignores_later_cancel() -> Result<(), Box<dyn Error>> {
    let cancel = CancelToken::new();
    let grid = Config::new(25)
        .set_iterations(Some(2))
        .set_tick_delay(Duration::from_millis(1))
        .run(&mut NullRenderer, &cancel)?;
    cancel.cancel();
    assert_eq!(grid.population(), 5);
    Ok(())
}

#[test]
fn sleep() {
    let cancel = CancelToken::new();
    assert!(!cancel.sleep(Duration::ZERO));
    assert!(!cancel.sleep(Duration::from_millis(5)));
    cancel.cancel();
    let start = Instant::now();
    assert!(cancel.sleep(Duration::from_secs(60)));
    assert!(start.elapsed() < Duration::from_secs(30));
}
