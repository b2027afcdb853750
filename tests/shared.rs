use std::{thread, time::Duration};
use stopwatch_registry::{ManualClock, SharedRegistry, TimeSpan, TimerRegistry};

#[test]
fn shared_registry_serializes_operations() {
    let clock = ManualClock::new();
    let registry: SharedRegistry<ManualClock> =
        TimerRegistry::with_clock(clock.clone()).into_shared();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = registry.clone();
            thread::spawn(move || {
                let name = format!("timer {}", i % 2);
                for _ in 0..100 {
                    registry.write().add_time(&name, 1.0);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let registry = registry.read();
    assert_eq!(registry.time_seconds("timer 0"), 400);
    assert_eq!(registry.time_seconds("timer 1"), 400);
    assert_eq!(registry.time_seconds("timer 2"), 0);
}

#[test]
fn manual_clock_is_shared_with_the_registry() {
    let clock = ManualClock::new();
    let registry = TimerRegistry::with_clock(clock.clone()).into_shared();
    registry.write().start("n");

    let advancer = {
        let clock = clock.clone();
        thread::spawn(move || clock.advance(TimeSpan::from_seconds(5.0)))
    };
    advancer.join().unwrap();

    assert_eq!(registry.read().time_seconds("n"), 5);
}

#[test]
fn system_clock_measures_real_time() {
    let mut registry = TimerRegistry::new();
    registry.start("n");
    thread::sleep(Duration::from_millis(1100));
    assert!(registry.time_seconds("n") >= 1);

    registry.pause("n");
    let paused = registry.elapsed("n");
    thread::sleep(Duration::from_millis(50));
    assert_eq!(registry.elapsed("n"), paused);

    registry.resume("n");
    thread::sleep(Duration::from_millis(50));
    assert!(registry.elapsed("n") > paused);
}
